//! Scripted mainframe start-up played after a successful login

use super::Tone;
use crate::data::art::{art_lines, NOSTROMO, STARTUP_SEQUENCE, SYSTEM_ONLINE, WEYLAND_YUTANI};
use std::time::Duration;

/// One line of the boot script
#[derive(Debug, Clone, PartialEq)]
pub struct BootStep {
    /// Wait before this line appears
    pub delay: Duration,
    pub text: String,
    pub tone: Tone,
}

impl BootStep {
    fn new(delay_ms: u64, text: impl Into<String>, tone: Tone) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            text: text.into(),
            tone,
        }
    }
}

const WARNING_RULE_WIDTH: usize = 60;

/// Push a block of lines where only the first one waits
fn push_block(steps: &mut Vec<BootStep>, delay_ms: u64, lines: impl IntoIterator<Item = String>, tone: Tone) {
    for (i, line) in lines.into_iter().enumerate() {
        steps.push(BootStep::new(if i == 0 { delay_ms } else { 0 }, line, tone));
    }
}

/// The full start-up script for `user`
pub fn boot_sequence(user: &str) -> Vec<BootStep> {
    let mut steps = Vec::new();

    push_block(&mut steps, 500, art_lines(WEYLAND_YUTANI), Tone::Success);

    for (i, line) in STARTUP_SEQUENCE.iter().enumerate() {
        let delay = if i == 0 { 1000 } else { 300 };
        steps.push(BootStep::new(delay, *line, Tone::System));
        if i < STARTUP_SEQUENCE.len() - 1 {
            steps.push(BootStep::new(
                800,
                "  [████████████████████████████████] 100%",
                Tone::Success,
            ));
        }
    }

    steps.push(BootStep::new(1300, "", Tone::Output));
    push_block(&mut steps, 0, art_lines(SYSTEM_ONLINE), Tone::Success);

    let rule = "⚠".repeat(WARNING_RULE_WIDTH);
    steps.push(BootStep::new(1000, "", Tone::Output));
    push_block(
        &mut steps,
        0,
        [
            rule.clone(),
            "    EMERGENCY PROTOCOLS ACTIVE".to_string(),
            "    CREW ALERT STATUS: RED".to_string(),
            "    HOSTILE ORGANISM DETECTED".to_string(),
            rule,
        ],
        Tone::Warning,
    );

    steps.push(BootStep::new(1500, "", Tone::Output));
    push_block(&mut steps, 0, art_lines(NOSTROMO), Tone::Info);

    let greeting = if user == "ASH" {
        "SYNTHETIC OVERRIDE DETECTED".to_string()
    } else {
        format!("WELCOME, {}", user)
    };
    steps.push(BootStep::new(1000, "", Tone::Output));
    steps.push(BootStep::new(0, "✅ AUTHENTICATION SUCCESSFUL", Tone::Success));
    steps.push(BootStep::new(0, format!("✅ {}", greeting), Tone::Success));
    steps.push(BootStep::new(0, "", Tone::Output));
    steps.push(BootStep::new(0, "MU-TH-UR 6000 mainframe ready for input", Tone::Info));
    steps.push(BootStep::new(0, "Type 'HELP' for available commands", Tone::Info));

    steps
}

/// First alert of every session, shown shortly after boot completes
pub fn initial_alert() -> BootStep {
    BootStep::new(
        2000,
        "🚨 SYSTEM ALERT: Unknown organism detected in maintenance shaft",
        Tone::Warning,
    )
}

/// Total time the script takes to play
pub fn total_duration(steps: &[BootStep]) -> Duration {
    steps.iter().map(|s| s.delay).sum()
}
