//! Crew authentication
//!
//! Login happens before any command reaches the dispatcher. A rejected
//! identifier is an ordinary error value carrying the message shown on the
//! login screen.

use crate::data::{crew_member, CrewMember, CrewStatus};

/// Failed attempts before the terminal locks
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("INVALID USER ID")]
    InvalidUserId,

    #[error("ACCESS DENIED: SYNTHETIC UNIT DEACTIVATED")]
    SyntheticDeactivated,

    #[error("ACCESS DENIED: CREW MEMBER STATUS - {0}")]
    CrewInactive(CrewStatus),

    #[error("MAXIMUM ATTEMPTS EXCEEDED - TERMINAL LOCKED")]
    TerminalLocked,
}

/// Check a crew identifier against the manifest
pub fn authenticate(user_id: &str) -> Result<&'static CrewMember, LoginError> {
    let member = crew_member(user_id).ok_or(LoginError::InvalidUserId)?;
    match member.status {
        CrewStatus::Active => Ok(member),
        CrewStatus::Deactivated => Err(LoginError::SyntheticDeactivated),
        status @ (CrewStatus::Missing | CrewStatus::Deceased) => {
            Err(LoginError::CrewInactive(status))
        }
    }
}

/// Counts consecutive failures and locks the terminal at the limit
#[derive(Debug, Clone)]
pub struct LoginGate {
    failures: u32,
    max_attempts: u32,
}

impl LoginGate {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            failures: 0,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn attempt(&mut self, user_id: &str) -> Result<&'static CrewMember, LoginError> {
        if self.is_locked() {
            tracing::warn!("login attempt on locked terminal");
            return Err(LoginError::TerminalLocked);
        }

        match authenticate(user_id) {
            Ok(member) => {
                self.failures = 0;
                tracing::info!(user = member.name, "login accepted");
                Ok(member)
            }
            Err(err) => {
                self.failures += 1;
                tracing::warn!(
                    user = %user_id.trim().to_uppercase(),
                    failures = self.failures,
                    reason = %err,
                    "login rejected"
                );
                if self.is_locked() {
                    tracing::warn!("terminal locked after {} failed attempts", self.failures);
                }
                Err(err)
            }
        }
    }

    pub fn is_locked(&self) -> bool {
        self.failures >= self.max_attempts
    }

    pub fn remaining(&self) -> u32 {
        self.max_attempts.saturating_sub(self.failures)
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Unlock the terminal
    pub fn reset(&mut self) {
        self.failures = 0;
    }
}

impl Default for LoginGate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripley_is_the_only_active_crew() {
        assert_eq!(authenticate("ripley").map(|m| m.name), Ok("RIPLEY"));
        assert_eq!(
            authenticate("DALLAS").unwrap_err().to_string(),
            "ACCESS DENIED: CREW MEMBER STATUS - MISSING"
        );
        assert_eq!(
            authenticate("kane").unwrap_err(),
            LoginError::CrewInactive(CrewStatus::Deceased)
        );
        assert_eq!(
            authenticate("ASH").unwrap_err().to_string(),
            "ACCESS DENIED: SYNTHETIC UNIT DEACTIVATED"
        );
        assert_eq!(authenticate("BISHOP").unwrap_err().to_string(), "INVALID USER ID");
    }

    #[test]
    fn three_failures_lock_the_gate() {
        let mut gate = LoginGate::default();
        assert_eq!(gate.remaining(), 3);

        assert!(gate.attempt("BISHOP").is_err());
        assert!(gate.attempt("ASH").is_err());
        assert_eq!(gate.remaining(), 1);
        assert!(!gate.is_locked());

        assert_eq!(gate.attempt("DALLAS").unwrap_err(), LoginError::CrewInactive(CrewStatus::Missing));
        assert!(gate.is_locked());

        // even a valid id is refused once locked
        assert_eq!(gate.attempt("RIPLEY").unwrap_err(), LoginError::TerminalLocked);
        assert_eq!(gate.failures(), 3);

        gate.reset();
        assert!(gate.attempt("RIPLEY").is_ok());
    }

    #[test]
    fn success_resets_the_count() {
        let mut gate = LoginGate::new(3);
        assert!(gate.attempt("nobody").is_err());
        assert!(gate.attempt("nobody").is_err());
        assert!(gate.attempt("Ripley").is_ok());
        assert_eq!(gate.remaining(), 3);
    }

    #[test]
    fn limit_of_zero_still_allows_one_attempt() {
        let gate = LoginGate::new(0);
        assert!(!gate.is_locked());
        assert_eq!(gate.remaining(), 1);
    }
}
