//! Mission parameters and the ship's log

use serde::{Deserialize, Serialize};

/// Mission record, in display order
pub const MISSION_DATA: [(&str, &str); 9] = [
    ("missionId", "COMMERCIAL_TOWING_847"),
    ("destination", "EARTH"),
    ("cargo", "20,000,000 TONS MINERAL ORE"),
    ("departure", "THEDUS SYSTEM"),
    ("currentLocation", "LV-426 SYSTEM"),
    ("etaEarth", "MISSION INTERRUPTED"),
    ("specialOrders", "CLASSIFIED - SCIENCE DIVISION EYES ONLY"),
    ("contract", "WEYLAND-YUTANI STANDARD COMMERCIAL"),
    ("insurance", "LLOYD'S OF LONDON - POLICY #WY-847-COMM"),
];

/// Category of a ship's log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogKind {
    FinalLog,
    CaptainLog,
    ScienceLog,
    EngineeringLog,
    NavigationLog,
    MedicalLog,
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogKind::FinalLog => write!(f, "FINAL_LOG"),
            LogKind::CaptainLog => write!(f, "CAPTAIN_LOG"),
            LogKind::ScienceLog => write!(f, "SCIENCE_LOG"),
            LogKind::EngineeringLog => write!(f, "ENGINEERING_LOG"),
            LogKind::NavigationLog => write!(f, "NAVIGATION_LOG"),
            LogKind::MedicalLog => write!(f, "MEDICAL_LOG"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub timestamp: &'static str,
    pub author: &'static str,
    pub kind: LogKind,
    pub content: &'static str,
}

pub static SHIP_LOGS: [LogEntry; 5] = [
    LogEntry {
        timestamp: "2122.06.12 14:39:02",
        author: "RIPLEY, E.L.",
        kind: LogKind::FinalLog,
        content: "I'm signing off. Dallas and Kane are dead. The ship and her cargo are destroyed. \
                  I should reach the frontier in about six weeks. With a little luck, the network \
                  will pick me up. This is Ripley, last survivor of the Nostromo, signing off.",
    },
    LogEntry {
        timestamp: "2122.06.12 09:23:14",
        author: "DALLAS, A.J.",
        kind: LogKind::CaptainLog,
        content: "We have encountered an alien transmission. Company directive 001a requires \
                  investigation of all transmissions indicating intelligent origin. Proceeding to surface.",
    },
    LogEntry {
        timestamp: "2122.06.12 11:47:33",
        author: "ASH",
        kind: LogKind::ScienceLog,
        content: "Specimen retrieved from planetoid surface. Organism appears to be in dormant state. \
                  Preliminary analysis suggests highly adaptive survival mechanisms. Company will be... interested.",
    },
    LogEntry {
        timestamp: "2122.06.12 13:15:28",
        author: "PARKER, D.B.",
        kind: LogKind::EngineeringLog,
        content: "Hull breach in docking bay sealed. Whatever Kane brought aboard breached containment. \
                  Something's loose in the ship. Recommend immediate evacuation.",
    },
    LogEntry {
        timestamp: "2122.06.12 13:58:41",
        author: "LAMBERT, J.M.",
        kind: LogKind::NavigationLog,
        content: "Course laid in for Earth. ETA 10 months, 14 days. Note: Distress beacon on planetoid \
                  still active. Recommend salvage crew for investigation.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_content_has_single_spaces() {
        for log in SHIP_LOGS.iter() {
            assert!(!log.content.contains("  "), "{}", log.author);
        }
    }
}
