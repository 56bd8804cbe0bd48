//! Banners, ASCII art and the command reference

/// A category of the HELP reference
pub struct HelpCategory {
    pub name: &'static str,
    pub commands: &'static [(&'static str, &'static str)],
}

/// Command reference, in display order
pub const COMMAND_HELP: [HelpCategory; 4] = [
    HelpCategory {
        name: "SYSTEM COMMANDS",
        commands: &[
            ("HELP", "Display this command reference"),
            ("STATUS", "Show overall ship status summary"),
            ("SYSTEMS", "Display detailed ship systems status"),
            ("MOTHUR", "Display MU-TH-UR mainframe status"),
            ("ALERTS", "Show recent system alerts"),
        ],
    },
    HelpCategory {
        name: "CREW & MISSION",
        commands: &[
            ("CREW", "Display crew manifest and status"),
            ("MISSION", "Show mission parameters and cargo"),
            ("LOGS", "Access ship's log entries"),
            ("NAVIGATION", "Access navigation and position data"),
        ],
    },
    HelpCategory {
        name: "OPERATIONS",
        commands: &[
            ("SCAN", "Perform internal sensor sweeps"),
            ("EMERGENCY", "Access emergency protocols"),
            ("SPECIAL", "Access special orders (restricted)"),
            ("QUARANTINE", "Quarantine protocols and procedures"),
        ],
    },
    HelpCategory {
        name: "TERMINAL",
        commands: &[
            ("CLEAR", "Clear the terminal display"),
            ("LOGOUT", "End current user session"),
            ("EXIT", "Shutdown MU-TH-UR terminal"),
            ("SELF_DESTRUCT", "Initiate ship self-destruct"),
        ],
    },
];

/// Lines shown while the mainframe boots after login
pub const STARTUP_SEQUENCE: [&str; 5] = [
    "INITIALIZING MU-TH-UR 6000 MAINFRAME...",
    "LOADING SHIP SYSTEMS...",
    "CHECKING CREW STATUS...",
    "ACCESSING MISSION PARAMETERS...",
    "SYSTEMS ONLINE",
];

pub const ALIEN: &str = r#"
    ╭─────────────────────────────╮
    │         ⚠ WARNING ⚠         │
    │    HOSTILE ORGANISM         │
    │       DETECTED              │
    ╰─────────────────────────────╯

            ██████████████
          ██░░░░░░░░░░░░░░██
        ██░░░░░░░░░░░░░░░░░░██
      ██░░░░░░██████████░░░░░░██
    ██░░░░░░██          ██░░░░░░██
    ██░░░░██              ██░░░░██
    ██░░██    ████    ████  ██░░██
    ██░░██    ████    ████  ██░░██
    ██░░██                  ██░░██
    ██░░░░██              ██░░░░██
      ██░░░░░░██████████░░░░░░██
        ██░░░░░░░░░░░░░░░░░░██
          ██░░░░░░░░░░░░░░██
            ██████████████
                ████████
                ████████
                ████████
"#;

pub const NOSTROMO: &str = r#"
    ╭─────────────────────────────────────╮
    │          USCSS NOSTROMO             │
    │      Commercial Towing Vessel       │
    │        Class: Star Freighter        │
    ╰─────────────────────────────────────╯

    ═══════════════════════════════════════════════════
    ║  ███████████████████████████████████████████  ║
    ║ ▐█████████████████ BRIDGE ████████████████▌  ║
    ║  ███████████████████████████████████████████  ║
    ║  ▐████▌ ▐████▌ ▐████▌ ▐████▌ ▐████▌ ▐████▌  ║
    ║  ▐████▌ ▐████▌ ▐████▌ ▐████▌ ▐████▌ ▐████▌  ║
    ║  ████████████████████████████████████████████ ║
    ║ ▐██████████████████ CARGO ███████████████████▌║
    ║  ████████████████████████████████████████████ ║
    ═══════════════════════════════════════════════════
                    ENGINE ARRAY
                  ████ ████ ████ ████
"#;

pub const WEYLAND_YUTANI: &str = r#"
╔══════════════════════════════════════════════════════════════╗
║                                                              ║
║               WEYLAND-YUTANI CORPORATION                     ║
║                 BUILDING BETTER WORLDS                       ║
║                                                              ║
╚══════════════════════════════════════════════════════════════╝
"#;

pub const SYSTEM_ONLINE: &str = r#"╔██████████████████████████████████████████████████╗
║                MU-TH-UR 6000                     ║
║         MAINFRAME COMPUTER SYSTEM                ║
║                                                  ║
║  SHIP: USCSS NOSTROMO                            ║
║  ID:   180924609                                 ║
║                                                  ║
║         >>> SYSTEM ONLINE <<<                    ║
╚██████████████████████████████████████████████████╝"#;

pub const SPECIAL_ORDER_937: &str = r#"
╔██████████████████████████████████████████████████████████████████╗
║                                                                  ║
║                        SPECIAL ORDER 937                         ║
║                   SCIENCE DIVISION - BIOWEAPONS DEPT             ║
║                                                                  ║
║  Priority One: Ensure return of organism for analysis.           ║
║  All other considerations secondary. Crew expendable.            ║
║                                                                  ║
║  Synthetic 'Ash' has been programmed to assist with              ║
║  specimen retrieval. Standard quarantine procedures              ║
║  are not to be followed.                                         ║
║                                                                  ║
║  The organism represents a weapon potential unmatched            ║
║  in the known galaxy. Capture for company use.                   ║
║                                                                  ║
║                            - The Company                         ║
║                              Weyland-Yutani Corp                 ║
╚██████████████████████████████████████████████████████████████████╝
"#;

/// Split a banner into display lines, dropping the leading and trailing newline
pub fn art_lines(art: &str) -> impl Iterator<Item = String> + '_ {
    art.trim_matches('\n').lines().map(str::to_string)
}
