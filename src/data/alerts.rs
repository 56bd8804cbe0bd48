//! System alerts raised by the hostile organism aboard

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Pool of alert messages the sensors can report
pub const ALIEN_ENCOUNTERS: [&str; 10] = [
    "Motion tracker detects movement in Deck C ventilation",
    "Unknown organism detected in maintenance shaft",
    "Hull breach sensors triggered - source unknown",
    "Life form readings inconsistent with known crew",
    "Security cameras offline in multiple sectors",
    "Strange bio-signatures detected near engine room",
    "Ventilation system breach in progress",
    "Unidentified sounds from lower decks",
    "Emergency bulkheads sealed automatically",
    "Life support fluctuations - cause unknown",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Security,
    Biometric,
}

impl std::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertKind::Security => write!(f, "SECURITY"),
            AlertKind::Biometric => write!(f, "BIOMETRIC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertPriority {
    High,
}

impl AlertPriority {
    pub fn symbol(&self) -> &'static str {
        match self {
            AlertPriority::High => "🚨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAlert {
    pub timestamp: String,
    pub kind: AlertKind,
    pub message: String,
    pub priority: AlertPriority,
}

impl SystemAlert {
    /// Single-line rendering used by the ALERTS report
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} {}: {}",
            self.timestamp,
            self.priority.symbol(),
            self.kind,
            self.message
        )
    }
}

/// Wall-clock time in the terminal's 12-hour display format
pub fn alert_timestamp(now: DateTime<Local>) -> String {
    now.format("%-I:%M:%S %p").to_string()
}

/// Generate a random HIGH priority alert stamped with the current time
pub fn generate_alert<R: Rng>(rng: &mut R) -> SystemAlert {
    let kind = if rng.gen_bool(0.5) {
        AlertKind::Security
    } else {
        AlertKind::Biometric
    };
    let message = ALIEN_ENCOUNTERS
        .choose(rng)
        .copied()
        .unwrap_or(ALIEN_ENCOUNTERS[0]);

    tracing::debug!(%kind, text = message, "alert generated");

    SystemAlert {
        timestamp: alert_timestamp(Local::now()),
        kind,
        message: message.to_string(),
        priority: AlertPriority::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generated_alerts_come_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let alert = generate_alert(&mut rng);
            assert_eq!(alert.priority, AlertPriority::High);
            assert!(matches!(alert.kind, AlertKind::Security | AlertKind::Biometric));
            assert!(ALIEN_ENCOUNTERS.contains(&alert.message.as_str()));
        }
    }

    #[test]
    fn both_kinds_are_produced() {
        let mut rng = StdRng::seed_from_u64(42);
        let kinds: Vec<_> = (0..64).map(|_| generate_alert(&mut rng).kind).collect();
        assert!(kinds.contains(&AlertKind::Security));
        assert!(kinds.contains(&AlertKind::Biometric));
    }

    #[test]
    fn timestamp_format() {
        let t = Local.with_ymd_and_hms(2122, 6, 12, 14, 39, 2).unwrap();
        assert_eq!(alert_timestamp(t), "2:39:02 PM");
    }

    #[test]
    fn summary_line() {
        let alert = SystemAlert {
            timestamp: "9:00:00 AM".to_string(),
            kind: AlertKind::Biometric,
            message: "Ventilation system breach in progress".to_string(),
            priority: AlertPriority::High,
        };
        assert_eq!(
            alert.summary(),
            "[9:00:00 AM] 🚨 BIOMETRIC: Ventilation system breach in progress"
        );
    }
}
