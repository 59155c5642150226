use colored::{ColoredString, Colorize};

use crate::clock::{render_progress_bar, ClockDisplay, PresetCatalog, SessionType, Transition};

/// Session name colored by kind: red for work, green and blue for breaks.
pub fn colored_session(session_type: SessionType) -> ColoredString {
    let name = session_type.display_name();
    match session_type {
        SessionType::Work => name.red().bold(),
        SessionType::ShortBreak => name.green().bold(),
        SessionType::LongBreak => name.blue().bold(),
    }
}

/// Icon shown next to a session name.
#[must_use]
pub const fn session_icon(session_type: SessionType) -> &'static str {
    match session_type {
        SessionType::Work => "🍅",
        SessionType::ShortBreak => "☕",
        SessionType::LongBreak => "🌴",
    }
}

/// Format the preset catalog as a table
pub fn format_presets_pretty(catalog: &PresetCatalog, active: &str) -> String {
    let mut output = format!("Presets ({} available)\n", catalog.len());
    output.push_str(&"─".repeat(48));
    output.push('\n');

    for (i, preset) in catalog.iter().enumerate() {
        let marker = if preset.label() == active {
            "*".green().bold()
        } else {
            " ".normal()
        };
        output.push_str(&format!(
            "{marker} {}  {:<7} {:>3}m work  {:>3}m short  {:>3}m long\n",
            (i + 1).to_string().dimmed(),
            preset.label().bold(),
            preset.work_minutes(),
            preset.short_break_minutes(),
            preset.long_break_minutes(),
        ));
    }

    output.push_str(&format!(
        "\n{}",
        "* starting preset; choose another with --preset".dimmed()
    ));
    output
}

/// Format a clock snapshot as one status line
pub fn format_display_pretty(display: &ClockDisplay) -> String {
    let state = if display.running {
        display.state_label().green()
    } else {
        display.state_label().yellow()
    };

    format!(
        "{} {} {} {} {:.0}%  [{}] pomodoros: {}  preset: {}",
        session_icon(display.session_type),
        colored_session(display.session_type),
        display.format_mmss().bold(),
        render_progress_bar(display.progress(), 20),
        display.percent_remaining,
        state,
        display.completed_work_sessions,
        display.preset
    )
}

/// Format a transition as a timestamped line
pub fn format_transition_pretty(transition: &Transition) -> String {
    let mut line = format!(
        "[{}] {} {} finished. {} {} ({}m)",
        transition.at.format("%H:%M:%S").to_string().dimmed(),
        session_icon(transition.finished),
        transition.finished,
        if transition.next.is_break() {
            "Time for a"
        } else {
            "Back to"
        },
        colored_session(transition.next),
        transition.next_seconds / 60
    );

    if transition.finished == SessionType::Work {
        line.push_str(&format!(
            "  pomodoros: {}",
            transition.completed_work_sessions.to_string().bold()
        ));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{SessionClock, SoundSignal};
    use chrono::Local;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_presets_pretty() {
        plain();
        let output = format_presets_pretty(&PresetCatalog::default(), "25/5");

        assert!(output.starts_with("Presets (3 available)"));
        assert!(output.contains("* 1  25/5"));
        assert!(output.contains("90/20"));
        assert!(output.contains(" 90m work"));
    }

    #[test]
    fn test_format_display_pretty() {
        plain();
        let clock = SessionClock::default();
        let line = format_display_pretty(&clock.display());

        assert!(line.contains("Work"));
        assert!(line.contains("25:00"));
        assert!(line.contains("100%"));
        assert!(line.contains("Paused"));
        assert!(line.contains("pomodoros: 0"));
    }

    #[test]
    fn test_format_transition_pretty() {
        plain();
        let transition = Transition {
            finished: SessionType::Work,
            next: SessionType::LongBreak,
            signal: SoundSignal::LongBreakStart,
            completed_work_sessions: 4,
            next_seconds: 900,
            auto_started: true,
            at: Local::now(),
        };
        let line = format_transition_pretty(&transition);

        assert!(line.contains("Work finished. Time for a Long Break (15m)"));
        assert!(line.contains("pomodoros: 4"));
    }

    #[test]
    fn test_break_transition_has_no_count() {
        plain();
        let transition = Transition {
            finished: SessionType::ShortBreak,
            next: SessionType::Work,
            signal: SoundSignal::WorkStart,
            completed_work_sessions: 1,
            next_seconds: 1500,
            auto_started: false,
            at: Local::now(),
        };
        let line = format_transition_pretty(&transition);

        assert!(line.contains("Back to Work (25m)"));
        assert!(!line.contains("pomodoros"));
    }
}
