//! The MU-TH-UR 6000 mainframe: command dispatch and session state
//!
//! `Mainframe::process` never mutates the session it is handed. Anything a
//! command wants to change comes back as an [`Effect`] for the owner of the
//! [`TerminalState`] to apply.

pub mod boot;
pub mod commands;
pub mod format;
pub mod login;
pub mod state;

pub use boot::{boot_sequence, initial_alert, BootStep};
pub use commands::Command;
pub use login::{authenticate, LoginError, LoginGate};
pub use state::{BoundedLog, TerminalState};

use crate::data::SystemAlert;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Probability that a SCAN picks up a fresh alert
pub const DEFAULT_SCAN_ALERT_CHANCE: f64 = 0.4;

/// Semantic color of a command result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusColor {
    Success,
    Warning,
    Error,
    Info,
}

/// How a line in the output pane is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Input,
    Output,
    Error,
    Success,
    Warning,
    Info,
    System,
}

impl From<StatusColor> for Tone {
    fn from(color: StatusColor) -> Self {
        match color {
            StatusColor::Success => Tone::Success,
            StatusColor::Warning => Tone::Warning,
            StatusColor::Error => Tone::Error,
            StatusColor::Info => Tone::Info,
        }
    }
}

/// Lines produced by one command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandResult {
    pub output: Vec<String>,
    pub status_color: Option<StatusColor>,
    pub clear_screen: bool,
}

impl CommandResult {
    pub fn new(output: Vec<String>, color: StatusColor) -> Self {
        Self {
            output,
            status_color: Some(color),
            clear_screen: false,
        }
    }

    pub fn error(output: Vec<String>) -> Self {
        Self::new(output, StatusColor::Error)
    }

    /// Tone the renderer should use for these lines
    pub fn tone(&self) -> Tone {
        self.status_color.map(Tone::from).unwrap_or(Tone::Output)
    }
}

/// A change to the session requested by a command
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    PushAlert(SystemAlert),
    EndSession,
}

/// Outcome of dispatching one command
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dispatch {
    pub result: CommandResult,
    pub effects: Vec<Effect>,
}

impl From<CommandResult> for Dispatch {
    fn from(result: CommandResult) -> Self {
        Self {
            result,
            effects: Vec::new(),
        }
    }
}

/// The command processor
///
/// Holds no session data, so it can be rebuilt at any time.
#[derive(Debug, Clone)]
pub struct Mainframe {
    scan_alert_chance: f64,
}

impl Mainframe {
    pub fn new(scan_alert_chance: f64) -> Self {
        Self {
            scan_alert_chance: scan_alert_chance.clamp(0.0, 1.0),
        }
    }

    pub fn scan_alert_chance(&self) -> f64 {
        self.scan_alert_chance
    }

    /// Interpret a raw command against the current session
    pub fn process<R: Rng>(&self, raw: &str, state: &TerminalState, rng: &mut R) -> Dispatch {
        let token = raw.trim().to_uppercase();
        if token.is_empty() {
            return Dispatch::default();
        }

        // Login happens before dispatch; only HELP is reachable without it
        if !state.is_logged_in && token != "HELP" {
            tracing::debug!(%token, "command rejected, not authenticated");
            return CommandResult::error(vec![
                "Authentication required. Please login with crew ID.".to_string(),
            ])
            .into();
        }

        match Command::parse(&token) {
            Some(command) => {
                tracing::debug!(command = command.name(), user = state.current_user.as_deref(), "dispatching");
                commands::execute(command, self, state, rng)
            }
            None => {
                tracing::debug!(%token, "unknown command");
                CommandResult::error(vec![
                    format!("UNKNOWN COMMAND: {}", raw),
                    "Type 'HELP' for available commands".to_string(),
                ])
                .into()
            }
        }
    }
}

impl Default for Mainframe {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_ALERT_CHANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn logged_in(user: &str) -> TerminalState {
        let mut state = TerminalState::new();
        state.login(user);
        state
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let mut rng = StdRng::seed_from_u64(1);
        let dispatch = Mainframe::default().process("   ", &TerminalState::new(), &mut rng);
        assert!(dispatch.result.output.is_empty());
        assert_eq!(dispatch.result.status_color, None);
        assert!(dispatch.effects.is_empty());
    }

    #[test]
    fn logged_out_commands_need_authentication() {
        let mut rng = StdRng::seed_from_u64(1);
        let mainframe = Mainframe::default();
        let state = TerminalState::new();
        for cmd in ["status", "SCAN", "?", "login", "foo", "logout", "clear"] {
            let result = mainframe.process(cmd, &state, &mut rng).result;
            assert_eq!(result.status_color, Some(StatusColor::Error), "{}", cmd);
            assert_eq!(
                result.output,
                vec!["Authentication required. Please login with crew ID."],
                "{}",
                cmd
            );
        }
    }

    #[test]
    fn help_bypasses_the_gate() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Mainframe::default()
            .process(" help ", &TerminalState::new(), &mut rng)
            .result;
        assert_eq!(result.status_color, Some(StatusColor::Info));
        assert!(result.output.iter().any(|l| l.contains("COMMAND REFERENCE")));
    }

    #[test]
    fn unknown_command_echoes_original_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let mainframe = Mainframe::default();
        let state = logged_in("RIPLEY");

        let result = mainframe.process("FOO", &state, &mut rng).result;
        assert_eq!(result.status_color, Some(StatusColor::Error));
        assert_eq!(result.output[0], "UNKNOWN COMMAND: FOO");

        let result = mainframe.process(" foo bar", &state, &mut rng).result;
        assert_eq!(result.output[0], "UNKNOWN COMMAND:  foo bar");
    }

    #[test]
    fn process_does_not_touch_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mainframe = Mainframe::new(1.0);
        let state = logged_in("RIPLEY");
        let dispatch = mainframe.process("scan", &state, &mut rng);
        assert!(state.system_alerts.is_empty());
        assert!(matches!(dispatch.effects.as_slice(), [Effect::PushAlert(_)]));
    }

    #[test]
    fn scan_chance_is_clamped() {
        assert_eq!(Mainframe::new(7.0).scan_alert_chance(), 1.0);
        assert_eq!(Mainframe::new(-1.0).scan_alert_chance(), 0.0);
    }

    #[test]
    fn result_tone_follows_color() {
        assert_eq!(CommandResult::default().tone(), Tone::Output);
        assert_eq!(CommandResult::error(vec![]).tone(), Tone::Error);
    }
}
