//! Crew manifest of the USCSS NOSTROMO
//!
//! The manifest keys double as the set of valid login identifiers.

use serde::{Deserialize, Serialize};

/// Crew member status as last recorded by the mainframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CrewStatus {
    Active,
    Missing,
    Deceased,
    Deactivated,
}

impl CrewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrewStatus::Active => "ACTIVE",
            CrewStatus::Missing => "MISSING",
            CrewStatus::Deceased => "DECEASED",
            CrewStatus::Deactivated => "DEACTIVATED",
        }
    }
}

impl std::fmt::Display for CrewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Authorization tier, ordered DELTA < GAMMA < BETA < ALPHA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Clearance {
    Delta,
    Gamma,
    Beta,
    Alpha,
}

impl std::fmt::Display for Clearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Clearance::Alpha => "ALPHA",
            Clearance::Beta => "BETA",
            Clearance::Gamma => "GAMMA",
            Clearance::Delta => "DELTA",
        };
        f.pad(s)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CrewMember {
    pub name: &'static str,
    pub rank: &'static str,
    pub status: CrewStatus,
    pub last_seen: &'static str,
    pub id: &'static str,
    pub clearance: Clearance,
    pub synthetic: bool,
}

pub static CREW_MANIFEST: [CrewMember; 7] = [
    CrewMember {
        name: "DALLAS",
        rank: "Captain",
        status: CrewStatus::Missing,
        last_seen: "DECK C - MAINTENANCE SHAFTS",
        id: "N-001",
        clearance: Clearance::Alpha,
        synthetic: false,
    },
    CrewMember {
        name: "RIPLEY",
        rank: "Warrant Officer",
        status: CrewStatus::Active,
        last_seen: "COMMAND DECK",
        id: "N-002",
        clearance: Clearance::Beta,
        synthetic: false,
    },
    CrewMember {
        name: "KANE",
        rank: "Executive Officer",
        status: CrewStatus::Deceased,
        last_seen: "MEDICAL BAY",
        id: "N-003",
        clearance: Clearance::Beta,
        synthetic: false,
    },
    CrewMember {
        name: "LAMBERT",
        rank: "Navigator",
        status: CrewStatus::Missing,
        last_seen: "ENGINE ROOM",
        id: "N-004",
        clearance: Clearance::Gamma,
        synthetic: false,
    },
    CrewMember {
        name: "PARKER",
        rank: "Chief Engineer",
        status: CrewStatus::Missing,
        last_seen: "ENGINE ROOM",
        id: "N-005",
        clearance: Clearance::Gamma,
        synthetic: false,
    },
    CrewMember {
        name: "BRETT",
        rank: "Engineering Technician",
        status: CrewStatus::Missing,
        last_seen: "DECK C - MAINTENANCE",
        id: "N-006",
        clearance: Clearance::Delta,
        synthetic: false,
    },
    CrewMember {
        name: "ASH",
        rank: "Science Officer",
        status: CrewStatus::Deactivated,
        last_seen: "MEDICAL BAY",
        id: "N-007",
        clearance: Clearance::Alpha,
        synthetic: true,
    },
];

/// Case-insensitive manifest lookup
pub fn crew_member(name: &str) -> Option<&'static CrewMember> {
    let name = name.trim();
    CREW_MANIFEST.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Count of crew members with the given status
pub fn crew_count(status: CrewStatus) -> usize {
    CREW_MANIFEST.iter().filter(|c| c.status == status).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_whitespace() {
        assert_eq!(crew_member(" ripley ").map(|c| c.id), Some("N-002"));
        assert!(crew_member("BISHOP").is_none());
    }

    #[test]
    fn only_ash_is_synthetic() {
        let synthetic: Vec<_> = CREW_MANIFEST.iter().filter(|c| c.synthetic).map(|c| c.name).collect();
        assert_eq!(synthetic, vec!["ASH"]);
    }

    #[test]
    fn clearance_ordering() {
        assert!(Clearance::Alpha > Clearance::Beta);
        assert!(Clearance::Gamma > Clearance::Delta);
    }

    #[test]
    fn crew_summary_counts() {
        assert_eq!(crew_count(CrewStatus::Active), 1);
        assert_eq!(crew_count(CrewStatus::Missing), 4);
        assert_eq!(crew_count(CrewStatus::Deceased), 1);
    }
}
