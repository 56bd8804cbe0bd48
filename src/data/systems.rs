//! Ship systems aboard the NOSTROMO

use serde::{Deserialize, Serialize};

/// Reported condition of a ship system
///
/// Authored per system, independently of its level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemStatus {
    Operational,
    Limited,
    Critical,
    Offline,
    Standby,
    Compromised,
}

impl SystemStatus {
    /// Systems whose subsystems get listed in the detailed report
    pub fn is_degraded(&self) -> bool {
        matches!(
            self,
            SystemStatus::Critical | SystemStatus::Limited | SystemStatus::Compromised
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Operational => "OPERATIONAL",
            SystemStatus::Limited => "LIMITED",
            SystemStatus::Critical => "CRITICAL",
            SystemStatus::Offline => "OFFLINE",
            SystemStatus::Standby => "STANDBY",
            SystemStatus::Compromised => "COMPROMISED",
        }
    }
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A ship system and its subsystems
#[derive(Debug, Clone, Serialize)]
pub struct ShipSystem {
    pub name: &'static str,
    pub status: SystemStatus,
    pub level: f64, // percentage, 0-100
    pub subsystems: &'static [&'static str],
}

pub static SHIP_SYSTEMS: [ShipSystem; 10] = [
    ShipSystem {
        name: "LIFE_SUPPORT",
        status: SystemStatus::Operational,
        level: 98.7,
        subsystems: &["OXYGEN_GEN", "CO2_SCRUBBERS", "ATMOSPHERE_RECYCLING"],
    },
    ShipSystem {
        name: "NAVIGATION",
        status: SystemStatus::Operational,
        level: 100.0,
        subsystems: &["STAR_CHARTS", "POSITIONING", "COURSE_PLOTTING"],
    },
    ShipSystem {
        name: "ENGINES",
        status: SystemStatus::Operational,
        level: 95.3,
        subsystems: &["MAIN_DRIVE", "MANEUVERING", "FUEL_SYSTEMS"],
    },
    ShipSystem {
        name: "COMMUNICATIONS",
        status: SystemStatus::Limited,
        level: 23.1,
        subsystems: &["SHORT_RANGE", "LONG_RANGE", "EMERGENCY_BEACON"],
    },
    ShipSystem {
        name: "HULL_INTEGRITY",
        status: SystemStatus::Compromised,
        level: 87.9,
        subsystems: &["HULL_SENSORS", "BREACH_DETECTION", "AUTO_REPAIR"],
    },
    ShipSystem {
        name: "ARTIFICIAL_GRAVITY",
        status: SystemStatus::Operational,
        level: 100.0,
        subsystems: &["GRAVITY_GEN", "FIELD_STABILIZERS"],
    },
    ShipSystem {
        name: "THERMAL_REGULATION",
        status: SystemStatus::Operational,
        level: 92.4,
        subsystems: &["HEATING", "COOLING", "CIRCULATION"],
    },
    ShipSystem {
        name: "EMERGENCY_SYSTEMS",
        status: SystemStatus::Standby,
        level: 100.0,
        subsystems: &["FIRE_SUPPRESSION", "EMERGENCY_LIGHTING", "EVACUATION"],
    },
    ShipSystem {
        name: "SECURITY",
        status: SystemStatus::Critical,
        level: 12.3,
        subsystems: &["DOOR_LOCKS", "SURVEILLANCE", "CONTAINMENT"],
    },
    ShipSystem {
        name: "MEDICAL",
        status: SystemStatus::Limited,
        level: 45.6,
        subsystems: &["AUTODOC", "QUARANTINE", "LIFE_SIGNS_MONITOR"],
    },
];

/// Number of systems reporting OPERATIONAL
pub fn operational_count() -> usize {
    SHIP_SYSTEMS
        .iter()
        .filter(|s| s.status == SystemStatus::Operational)
        .count()
}
