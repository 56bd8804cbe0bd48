//! Command vocabulary and the report each command produces

use super::format::{
    create_progress_bar, format_mission_key, format_system_name, format_uptime, system_health,
    word_wrap,
};
use super::{CommandResult, Dispatch, Effect, Mainframe, StatusColor, TerminalState};
use crate::data::art::{art_lines, ALIEN, COMMAND_HELP, SPECIAL_ORDER_937};
use crate::data::*;
use chrono::Local;
use rand::Rng;

/// Every command the mainframe understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Status,
    Systems,
    Crew,
    Navigation,
    Mission,
    Logs,
    Scan,
    Emergency,
    Special,
    Mothur,
    Alerts,
    Quarantine,
    Xenomorph,
    SelfDestruct,
    Logout,
    Exit,
    Clear,
    Hal,
    Hello,
}

impl Command {
    /// Resolve a normalized (trimmed, upper-cased) token, synonyms included
    pub fn parse(token: &str) -> Option<Self> {
        let command = match token {
            "HELP" | "?" => Command::Help,
            "STATUS" => Command::Status,
            "SYSTEMS" => Command::Systems,
            "CREW" => Command::Crew,
            "NAVIGATION" | "NAV" => Command::Navigation,
            "MISSION" => Command::Mission,
            "LOGS" => Command::Logs,
            "SCAN" => Command::Scan,
            "EMERGENCY" => Command::Emergency,
            "SPECIAL" => Command::Special,
            "MOTHUR" => Command::Mothur,
            "ALERTS" => Command::Alerts,
            "QUARANTINE" => Command::Quarantine,
            "XENOMORPH" | "ALIEN" | "ORGANISM" => Command::Xenomorph,
            "SELF_DESTRUCT" => Command::SelfDestruct,
            "LOGOUT" | "LOGOFF" => Command::Logout,
            "EXIT" | "QUIT" | "SHUTDOWN" => Command::Exit,
            "CLEAR" => Command::Clear,
            "HAL" | "HAL9000" => Command::Hal,
            "HELLO" | "HI" => Command::Hello,
            _ => return None,
        };
        Some(command)
    }

    /// Complete a partial command when exactly one completable command
    /// starts with it (case-insensitive)
    pub fn complete(prefix: &str) -> Option<Self> {
        let prefix = prefix.trim().to_uppercase();
        let mut matches = COMPLETABLE.iter().filter(|c| c.name().starts_with(&prefix));
        match (matches.next(), matches.next()) {
            (Some(&command), None) => Some(command),
            _ => None,
        }
    }

    /// Canonical spelling
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "HELP",
            Command::Status => "STATUS",
            Command::Systems => "SYSTEMS",
            Command::Crew => "CREW",
            Command::Navigation => "NAVIGATION",
            Command::Mission => "MISSION",
            Command::Logs => "LOGS",
            Command::Scan => "SCAN",
            Command::Emergency => "EMERGENCY",
            Command::Special => "SPECIAL",
            Command::Mothur => "MOTHUR",
            Command::Alerts => "ALERTS",
            Command::Quarantine => "QUARANTINE",
            Command::Xenomorph => "XENOMORPH",
            Command::SelfDestruct => "SELF_DESTRUCT",
            Command::Logout => "LOGOUT",
            Command::Exit => "EXIT",
            Command::Clear => "CLEAR",
            Command::Hal => "HAL",
            Command::Hello => "HELLO",
        }
    }
}

/// Commands offered by tab completion; CLEAR and the easter eggs stay hidden
pub const COMPLETABLE: [Command; 17] = [
    Command::Help,
    Command::Status,
    Command::Systems,
    Command::Crew,
    Command::Navigation,
    Command::Mission,
    Command::Logs,
    Command::Scan,
    Command::Emergency,
    Command::Special,
    Command::Mothur,
    Command::Alerts,
    Command::Quarantine,
    Command::Xenomorph,
    Command::SelfDestruct,
    Command::Logout,
    Command::Exit,
];

pub(super) fn execute<R: Rng>(
    command: Command,
    mainframe: &Mainframe,
    state: &TerminalState,
    rng: &mut R,
) -> Dispatch {
    match command {
        Command::Help => help().into(),
        Command::Status => status().into(),
        Command::Systems => systems().into(),
        Command::Crew => crew().into(),
        Command::Navigation => navigation().into(),
        Command::Mission => mission().into(),
        Command::Logs => logs().into(),
        Command::Scan => scan(mainframe.scan_alert_chance(), rng),
        Command::Emergency => emergency().into(),
        Command::Special => special(state).into(),
        Command::Mothur => mothur(state).into(),
        Command::Alerts => alerts(state).into(),
        Command::Quarantine => quarantine().into(),
        Command::Xenomorph => xenomorph().into(),
        Command::SelfDestruct => self_destruct().into(),
        Command::Logout => logout(),
        Command::Exit => exit().into(),
        Command::Clear => CommandResult {
            clear_screen: true,
            ..CommandResult::default()
        }
        .into(),
        Command::Hal => CommandResult::new(
            lines(&[
                "I'm sorry Dave, I'm afraid I can't do that.",
                "This is MU-TH-UR 6000, not HAL 9000.",
            ]),
            StatusColor::Info,
        )
        .into(),
        Command::Hello => CommandResult::new(
            lines(&["Hello. I am MU-TH-UR 6000, your ship's computer."]),
            StatusColor::Success,
        )
        .into(),
    }
}

fn lines(text: &[&str]) -> Vec<String> {
    text.iter().map(|s| s.to_string()).collect()
}

/// Double-line frame around a centered title
fn banner(title: &str) -> Vec<String> {
    const WIDTH: usize = 64;
    vec![
        format!("╔{}╗", "═".repeat(WIDTH)),
        format!("║{:^width$}║", title, width = WIDTH),
        format!("╚{}╝", "═".repeat(WIDTH)),
        String::new(),
    ]
}

fn help() -> CommandResult {
    let mut output = banner("MU-TH-UR 6000 COMMAND REFERENCE");

    for category in COMMAND_HELP.iter() {
        output.push(format!("{}:", category.name));
        for (name, description) in category.commands {
            output.push(format!("  {:<15}: {}", name, description));
        }
        output.push(String::new());
    }

    output.push("Hint: Some commands have hidden features. Explore responsibly.".to_string());
    CommandResult::new(output, StatusColor::Info)
}

fn status() -> CommandResult {
    let health = system_health();
    let operational = operational_count();
    let total = SHIP_SYSTEMS.len();

    let mut output = banner("SHIP STATUS REPORT");
    output.extend(lines(&[
        "VESSEL: USCSS NOSTROMO (180924609)",
        "CLASS: Commercial Star Freighter",
        "STATUS: 🚨 EMERGENCY ALERT",
        "CREW: 1 ACTIVE, 6 MISSING/DECEASED",
        "LOCATION: ZETA 2 RETICULI - LV-426 SYSTEM",
        "MISSION: INTERRUPTED - ALIEN ENCOUNTER",
        "",
    ]));
    output.push(format!("SYSTEMS STATUS: {}/{} OPERATIONAL", operational, total));
    output.push(format!(
        "OVERALL HEALTH: [{}] {:.1}%",
        create_progress_bar(health, 30),
        health
    ));
    output.extend(lines(&[
        "",
        ">>> IMMEDIATE ATTENTION REQUIRED <<<",
        ">>> HOSTILE ORGANISM ABOARD SHIP <<<",
    ]));
    CommandResult::error(output)
}

fn systems() -> CommandResult {
    let mut output = banner("SHIP SYSTEMS STATUS");

    for system in SHIP_SYSTEMS.iter() {
        output.push(format!(
            "{:<20}: {:<12} [{}] {:.1}%",
            format_system_name(system.name),
            system.status,
            create_progress_bar(system.level, 20),
            system.level
        ));

        if system.status.is_degraded() {
            let subsystem_status = if system.level < 50.0 { "OFFLINE" } else { "LIMITED" };
            for subsystem in system.subsystems {
                output.push(format!(
                    "  └─ {}: {}",
                    format_system_name(subsystem),
                    subsystem_status
                ));
            }
        }
    }

    CommandResult::new(output, StatusColor::Info)
}

fn crew() -> CommandResult {
    let mut output = banner("CREW MANIFEST - USCSS NOSTROMO");

    for member in CREW_MANIFEST.iter() {
        let synthetic_tag = if member.synthetic { " [SYNTHETIC]" } else { "" };
        output.push(format!("{:<12}: {:<25} [{}]", member.name, member.rank, member.id));
        output.push(format!(
            "             Status: {:<15} Clearance: {}{}",
            member.status, member.clearance, synthetic_tag
        ));
        output.push(format!("             Last Location: {}", member.last_seen));
        output.push(String::new());
    }

    output.push("CREW SUMMARY:".to_string());
    output.push(format!("  Active: {}", crew_count(CrewStatus::Active)));
    output.push(format!("  Missing: {}", crew_count(CrewStatus::Missing)));
    output.push(format!("  Deceased: {}", crew_count(CrewStatus::Deceased)));

    CommandResult::new(output, StatusColor::Info)
}

fn navigation() -> CommandResult {
    let mut output = banner("NAVIGATION DATA");
    output.extend(lines(&[
        "CURRENT POSITION:",
        "  System: ZETA 2 RETICULI",
        "  Planetoid: LV-426 (ACHERON)",
        "  Coordinates: 39°46'N 116°24'W",
        "  Orbital Status: STATIONARY ORBIT - 200km ALTITUDE",
        "",
        "DESTINATION:",
        "  Target: SOL SYSTEM - EARTH",
        "  ETA: MISSION INTERRUPTED",
        "  Distance: 37.2 LIGHT YEARS",
        "",
        "FLIGHT STATUS:",
        "  Engines: STANDBY",
        "  Navigation: ONLINE",
        "  Course: MISSION ABORT PROTOCOLS",
        "",
        "PRIORITY ALERTS:",
        "  ⚠ Distress beacon detected on surface",
        "  ⚠ Company directive: Investigate all signals",
        "  ⚠ Hostile life form encountered",
        "",
        "Local Star Chart:",
        "    ✦ SOL SYSTEM (37.2 LY)",
        "        ✦",
        "           ✦ VEGA",
        "      ✦",
        "  ◉ ZETA 2 RETICULI (CURRENT)",
        "        ✦",
        "           ✦ ALTAIR",
    ]));
    CommandResult::new(output, StatusColor::Info)
}

fn mission() -> CommandResult {
    let mut output = banner("MISSION PARAMETERS");
    output.push("MISSION DETAILS:".to_string());

    for (key, value) in MISSION_DATA.iter() {
        output.push(format!("  {:<20}: {}", format_mission_key(key), value));
    }

    output.extend(lines(&[
        "",
        "CARGO MANIFEST:",
        "  Primary: 20,000,000 TONS MINERAL ORE",
        "  Value: $42,000,000 CREDITS",
        "  Status: SHIP DESTROYED - TOTAL LOSS",
        "",
        "MISSION STATUS:",
        "  🚨 MISSION FAILURE",
        "  🚨 CREW CASUALTIES: 6",
        "  🚨 SHIP DESTRUCTION: CONFIRMED",
        "  ⚠ SURVIVOR: 1 (RIPLEY, E.L.)",
    ]));
    CommandResult::new(output, StatusColor::Warning)
}

fn logs() -> CommandResult {
    let mut output = banner("SHIP'S LOG ENTRIES");

    for (index, log) in SHIP_LOGS.iter().enumerate() {
        output.push(format!(
            "{}. {} - {}",
            index + 1,
            log.kind.to_string().replacen('_', " ", 1),
            log.author
        ));
        output.push(format!("   [{}]", log.timestamp));
        output.extend(word_wrap(log.content, 60, "   "));
        output.push(String::new());
    }

    CommandResult::new(output, StatusColor::Info)
}

fn scan<R: Rng>(alert_chance: f64, rng: &mut R) -> Dispatch {
    let mut effects = Vec::new();
    if rng.gen_bool(alert_chance) {
        effects.push(Effect::PushAlert(generate_alert(rng)));
    }

    let mut output = banner("SENSOR ARRAY STATUS");
    output.extend(lines(&[
        "Initiating full spectrum sensor sweep...",
        "Scanning ◐ 100% complete",
        "",
        "SCAN RESULTS SUMMARY:",
        "  Hull Integrity: 87.9% - Minor breaches detected",
        "  Atmospheric Composition: NORMAL",
        "  Temperature: 20.5°C (optimal)",
        "  Radiation Levels: NOMINAL",
        "",
        "LIFE FORM DETECTION:",
        "  Human Life Signs: 1 DETECTED",
        "    └─ Location: COMMAND DECK",
        "    └─ Biometrics: STABLE",
        "",
        "  Unknown Signatures: 1 LARGE ORGANISM DETECTED",
        "    └─ Location: 🚨 MOBILE - DECK C VENTILATION SYSTEM",
        "    └─ Size: 🚨 APPROXIMATELY 2.5 METERS",
        "    └─ Threat Assessment: 🚨 EXTREMELY DANGEROUS",
        "",
        "SECURITY ALERT:",
        "  ⚠ HOSTILE XENOBIOLOGICAL ENTITY DETECTED",
        "  ⚠ ENTITY EXHIBITS AGGRESSIVE BEHAVIOR",
        "  ⚠ CREW SURVIVAL PROBABILITY: MINIMAL",
    ]));

    Dispatch {
        result: CommandResult::error(output),
        effects,
    }
}

fn emergency() -> CommandResult {
    let mut output = banner("EMERGENCY PROTOCOLS");
    output.extend(lines(&[
        "Available Emergency Procedures:",
        "1. EMERGENCY BEACON          [Status: ACTIVE]",
        "2. QUARANTINE PROTOCOLS      [Status: BREACHED]",
        "3. LIFE SUPPORT EMERGENCY    [Status: STANDBY]",
        "4. HULL BREACH PROCEDURES    [Status: PARTIAL]",
        "5. EVACUATION PROTOCOLS      [Status: READY]",
        "6. SELF-DESTRUCT SEQUENCE    [Status: ARMED]",
        "",
        "Use specific commands for detailed procedures:",
        "  QUARANTINE - Access quarantine systems",
        "  SELF_DESTRUCT - Initiate destruction sequence",
        "",
        "EVACUATION ROUTE ANALYSIS:",
        "  Escape Pod 1: 🚨 DESTROYED",
        "  Escape Pod 2: 🚨 DESTROYED",
        "  Shuttle 'Narcissus': ✅ AVAILABLE",
    ]));
    CommandResult::new(output, StatusColor::Warning)
}

fn special(state: &TerminalState) -> CommandResult {
    let user = state.current_user.as_deref();
    let clearance = state.clearance();
    let is_ash = user == Some("ASH");

    if is_ash || clearance == Some(Clearance::Alpha) {
        let mut output = lines(&[
            "ACCESSING SPECIAL ORDERS...",
            "DECRYPTING...",
            "SCIENCE DIVISION CLASSIFICATION: TOP SECRET",
            "AUTHORIZATION LEVEL: ALPHA CLEARANCE REQUIRED",
            "",
            "✅ ACCESS GRANTED",
            "",
        ]);
        output.extend(art_lines(SPECIAL_ORDER_937));
        if is_ash {
            output.extend(lines(&[
                "",
                "Additional protocols unlocked for synthetic unit:",
                "• Override crew safety protocols",
                "• Facilitate organism study",
                "• Prevent ship destruction",
                "• Ensure specimen survival",
            ]));
        }
        tracing::info!(user, "special order 937 accessed");
        return CommandResult::error(output);
    }

    tracing::warn!(user, "special order access denied");
    let mut output = lines(&[
        "ACCESSING SPECIAL ORDERS...",
        "SCIENCE DIVISION CLASSIFICATION: TOP SECRET",
        "AUTHENTICATING...",
        "",
        "🚨 ACCESS DENIED",
        "🚨 INSUFFICIENT CLEARANCE LEVEL",
        "⚠ Alpha clearance authorization required",
    ]);
    output.push(format!(
        "Current user clearance: {}",
        clearance.map_or_else(|| "UNKNOWN".to_string(), |c| c.to_string())
    ));
    CommandResult::error(output)
}

fn mothur(state: &TerminalState) -> CommandResult {
    let uptime = format_uptime(Local::now().signed_duration_since(state.session_start));

    let mut output = banner("MU-TH-UR 6000 MAINFRAME STATUS");
    output.push("System Version: MU-TH-UR 6000 v2.2.1-ENHANCED".to_string());
    output.push(format!("Uptime: {}", uptime));
    output.extend(lines(&[
        "Memory Usage: 78.4% of 2048TB",
        "Processing Load: 94.7% capacity",
        "Network Status: 🚨 ISOLATED",
        "",
        "Core Functions Active:",
        "  ✅ Ship Systems Monitoring",
        "  ✅ Crew Life Support",
        "  ✅ Navigation Control",
        "  ✅ Emergency Protocols",
        "  ✅ Data Logging",
        "  ✅ Security Monitoring",
        "",
        "Priority Alerts:",
        "  ⚠ Hostile organism aboard",
        "  ⚠ Multiple crew missing",
        "  ⚠ Hull integrity compromised",
    ]));
    CommandResult::new(output, StatusColor::Info)
}

fn alerts(state: &TerminalState) -> CommandResult {
    let mut output = banner("SYSTEM ALERTS");

    if state.system_alerts.is_empty() {
        output.push("✅ No recent alerts".to_string());
        return CommandResult::new(output, StatusColor::Success);
    }

    output.extend(state.system_alerts.iter().map(SystemAlert::summary));
    CommandResult::new(output, StatusColor::Warning)
}

fn quarantine() -> CommandResult {
    let mut output = banner("QUARANTINE PROTOCOLS");
    output.extend(lines(&[
        "🚨 QUARANTINE BREACH DETECTED",
        "⚠ Initiating containment procedures...",
        "",
        "🚨 CONTAINMENT FAILED",
        "🚨 HOSTILE ORGANISM HAS BREACHED ALL SECURITY MEASURES",
        "",
        "Quarantine History:",
        "  ✗ Medical Bay - BREACHED",
        "  ✗ Isolation Chamber - BREACHED",
        "  ✗ Emergency Lockdown - BYPASSED",
        "  ✗ Ship-wide Containment - FAILED",
        "",
        "🚨🚨🚨 RECOMMEND IMMEDIATE EVACUATION 🚨🚨🚨",
    ]));
    CommandResult::error(output)
}

fn xenomorph() -> CommandResult {
    let mut output = lines(&[
        "ACCESSING XENOBIOLOGICAL DATABASE...",
        "🚨 CLASSIFIED - SCIENCE DIVISION ONLY",
        "",
    ]);
    output.extend(art_lines(ALIEN));
    output.extend(lines(&[
        "",
        "🚨 SPECIES: XENOMORPH XX121",
        "Classification: Perfect Organism",
        "Host Dependency: Parasitoid",
        "Threat Level: 🚨 EXTREME",
        "Intelligence: Highly Adaptive",
        "Reproduction: Xenomorph Life Cycle",
        "",
        "Physical Characteristics:",
        "• Molecular acid for blood",
        "• Biomechanical exoskeleton",
        "• Pharyngeal jaw system",
        "• Silicon-based biology",
        "• No visible eyes - echolocation",
        "",
        "🚨🚨🚨 SURVIVAL PROBABILITY: ZERO 🚨🚨🚨",
    ]));
    CommandResult::error(output)
}

fn self_destruct() -> CommandResult {
    let mut output = vec![
        format!("╔{}╗", "═".repeat(64)),
        format!("║{:^64}║", "SELF-DESTRUCT SEQUENCE"),
        format!("║{:^64}║", "*** EMERGENCY USE ONLY ***"),
        format!("╚{}╝", "═".repeat(64)),
        String::new(),
    ];
    output.extend(lines(&[
        "🚨 WARNING: THIS WILL DESTROY THE ENTIRE SHIP",
        "🚨 ALL CREW AND CARGO WILL BE LOST",
        "⚠ Estimated blast radius: 2.5 kilometers",
        "",
        "Self-destruct sequence requires multiple confirmations.",
        "Use emergency terminal for full activation.",
        "",
        "Current Status: ARMED AND READY",
        "Authorization Level: COMMAND CLEARANCE REQUIRED",
        "",
        "⚠ In emergency situations, evacuation to shuttle recommended",
        "⚠ Shuttle \"Narcissus\" available in docking bay",
    ]));
    CommandResult::error(output)
}

fn logout() -> Dispatch {
    Dispatch {
        result: CommandResult {
            output: lines(&["Logging out...", "Session terminated."]),
            status_color: Some(StatusColor::Info),
            clear_screen: true,
        },
        effects: vec![Effect::EndSession],
    }
}

fn exit() -> CommandResult {
    CommandResult::new(
        lines(&[
            "Shutting down MU-TH-UR 6000 mainframe...",
            "",
            "✅ MU-TH-UR 6000 offline",
            "✅ Thank you for using Weyland-Yutani systems",
            "",
            "Building Better Worlds",
            "- Weyland-Yutani Corporation",
        ]),
        StatusColor::Success,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(cmd: &str, user: &str) -> Dispatch {
        let mut state = TerminalState::new();
        state.login(user);
        let mut rng = StdRng::seed_from_u64(11);
        Mainframe::default().process(cmd, &state, &mut rng)
    }

    #[test]
    fn synonyms_resolve_to_canonical_commands() {
        assert_eq!(Command::parse("NAV"), Some(Command::Navigation));
        assert_eq!(Command::parse("LOGOFF"), Some(Command::Logout));
        assert_eq!(Command::parse("ORGANISM"), Some(Command::Xenomorph));
        assert_eq!(Command::parse("ALIEN"), Some(Command::Xenomorph));
        assert_eq!(Command::parse("QUIT"), Some(Command::Exit));
        assert_eq!(Command::parse("SHUTDOWN"), Some(Command::Exit));
        assert_eq!(Command::parse("HAL9000"), Some(Command::Hal));
        assert_eq!(Command::parse("HI"), Some(Command::Hello));
        assert_eq!(Command::parse("?"), Some(Command::Help));
        assert_eq!(Command::parse("LOGIN"), None);
        assert_eq!(Command::parse("status"), None);
    }

    #[test]
    fn canonical_names_parse_back() {
        let all = [
            Command::Help, Command::Status, Command::Systems, Command::Crew,
            Command::Navigation, Command::Mission, Command::Logs, Command::Scan,
            Command::Emergency, Command::Special, Command::Mothur, Command::Alerts,
            Command::Quarantine, Command::Xenomorph, Command::SelfDestruct,
            Command::Logout, Command::Exit, Command::Clear, Command::Hal, Command::Hello,
        ];
        for command in all {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
    }

    #[test]
    fn help_lists_each_command_once_in_category_order() {
        let output = run("help", "RIPLEY").result.output;

        let headers: Vec<usize> = COMMAND_HELP
            .iter()
            .map(|c| output.iter().position(|l| *l == format!("{}:", c.name)).unwrap())
            .collect();
        assert!(headers.windows(2).all(|w| w[0] < w[1]));

        for category in COMMAND_HELP.iter() {
            for (name, description) in category.commands {
                let entry = format!("  {:<15}: {}", name, description);
                assert_eq!(output.iter().filter(|l| **l == entry).count(), 1, "{}", name);
            }
        }
    }

    #[test]
    fn completion_needs_a_unique_prefix() {
        assert_eq!(Command::complete("cr"), Some(Command::Crew));
        assert_eq!(Command::complete("Q"), Some(Command::Quarantine));
        assert_eq!(Command::complete("ex"), Some(Command::Exit));
        assert_eq!(Command::complete("self"), Some(Command::SelfDestruct));
        assert_eq!(Command::complete("s"), None);
        assert_eq!(Command::complete("LOG"), None);
        assert_eq!(Command::complete(""), None);
        assert_eq!(Command::complete("cle"), None);
        assert_eq!(Command::complete("hal"), None);
    }

    #[test]
    fn status_reports_operational_ratio_and_health() {
        let result = run("status", "RIPLEY").result;
        assert_eq!(result.status_color, Some(StatusColor::Error));
        let ratio = format!("SYSTEMS STATUS: {}/{} OPERATIONAL", operational_count(), SHIP_SYSTEMS.len());
        assert_eq!(ratio, "SYSTEMS STATUS: 5/10 OPERATIONAL");
        assert!(result.output.contains(&ratio));

        let health = result.output.iter().find(|l| l.starts_with("OVERALL HEALTH")).unwrap();
        assert!(health.ends_with("] 50.0%"), "{}", health);
        assert_eq!(health.chars().filter(|&c| c == '█').count(), 15);
    }

    #[test]
    fn systems_lists_subsystems_of_degraded_systems_only() {
        let output = run("systems", "RIPLEY").result.output;
        assert!(output.contains(&"  └─ DOOR LOCKS: OFFLINE".to_string()));
        assert!(output.contains(&"  └─ HULL SENSORS: LIMITED".to_string()));
        assert!(output.contains(&"  └─ AUTODOC: OFFLINE".to_string()));
        assert!(!output.iter().any(|l| l.contains("OXYGEN GEN")));
        assert!(!output.iter().any(|l| l.contains("FIRE SUPPRESSION")));

        let life_support = output.iter().find(|l| l.starts_with("LIFE SUPPORT")).unwrap();
        assert!(life_support.contains("OPERATIONAL "));
        assert!(life_support.ends_with("98.7%"));
    }

    #[test]
    fn crew_manifest_and_summary() {
        let output = run("crew", "RIPLEY").result.output;
        assert!(output.iter().any(|l| l.contains("Clearance: ALPHA [SYNTHETIC]")));
        assert!(output.ends_with(&[
            "CREW SUMMARY:".to_string(),
            "  Active: 1".to_string(),
            "  Missing: 4".to_string(),
            "  Deceased: 1".to_string(),
        ]));
    }

    #[test]
    fn mission_keys_are_prettified() {
        let result = run("MISSION", "RIPLEY").result;
        assert_eq!(result.status_color, Some(StatusColor::Warning));
        assert!(result
            .output
            .iter()
            .any(|l| l.starts_with("  CURRENT LOCATION") && l.ends_with(": LV-426 SYSTEM")));
    }

    #[test]
    fn logs_are_numbered_and_wrapped() {
        let output = run("logs", "RIPLEY").result.output;
        assert!(output.contains(&"1. FINAL LOG - RIPLEY, E.L.".to_string()));
        assert!(output.contains(&"5. NAVIGATION LOG - LAMBERT, J.M.".to_string()));
        assert!(output.contains(&"   [2122.06.12 14:39:02]".to_string()));
        assert!(output.iter().all(|l| l.chars().count() <= 66));
    }

    #[test]
    fn scan_alert_follows_chance() {
        let mut state = TerminalState::new();
        state.login("RIPLEY");
        let mut rng = StdRng::seed_from_u64(5);

        let always = Mainframe::new(1.0).process("scan", &state, &mut rng);
        assert_eq!(always.effects.len(), 1);
        assert_eq!(always.result.status_color, Some(StatusColor::Error));

        let never = Mainframe::new(0.0).process("scan", &state, &mut rng);
        assert!(never.effects.is_empty());
        assert_eq!(never.result.output, always.result.output);
    }

    #[test]
    fn special_granted_for_ash_and_alpha() {
        for user in ["ASH", "DALLAS"] {
            let result = run("special", user).result;
            assert!(result.output.contains(&"✅ ACCESS GRANTED".to_string()), "{}", user);
            assert!(result.output.iter().any(|l| l.contains("SPECIAL ORDER 937")));
        }
        let ash = run("special", "ASH").result.output;
        assert!(ash.contains(&"• Ensure specimen survival".to_string()));
        let dallas = run("special", "DALLAS").result.output;
        assert!(!dallas.contains(&"• Ensure specimen survival".to_string()));
    }

    #[test]
    fn special_denied_reports_clearance() {
        for (user, clearance) in [("RIPLEY", "BETA"), ("LAMBERT", "GAMMA"), ("BRETT", "DELTA")] {
            let result = run("special", user).result;
            assert_eq!(result.status_color, Some(StatusColor::Error));
            assert!(result.output.contains(&"🚨 ACCESS DENIED".to_string()));
            assert_eq!(
                result.output.last().unwrap(),
                &format!("Current user clearance: {}", clearance)
            );
        }
        let unknown = run("special", "BISHOP").result;
        assert_eq!(unknown.output.last().unwrap(), "Current user clearance: UNKNOWN");
    }

    #[test]
    fn alerts_empty_and_populated() {
        let mut state = TerminalState::new();
        state.login("RIPLEY");
        let mut rng = StdRng::seed_from_u64(2);
        let mainframe = Mainframe::default();

        let empty = mainframe.process("alerts", &state, &mut rng).result;
        assert_eq!(empty.status_color, Some(StatusColor::Success));
        assert_eq!(empty.output.last().unwrap(), "✅ No recent alerts");

        let alert = generate_alert(&mut rng);
        state.push_alert(alert.clone());
        let listed = mainframe.process("ALERTS", &state, &mut rng).result;
        assert_eq!(listed.status_color, Some(StatusColor::Warning));
        assert_eq!(listed.output.last().unwrap(), &alert.summary());
    }

    #[test]
    fn mothur_reports_uptime() {
        let output = run("mothur", "RIPLEY").result.output;
        assert!(output.contains(&"Uptime: 0h 0m".to_string()));
    }

    #[test]
    fn logout_ends_session_and_clears() {
        let dispatch = run("logoff", "RIPLEY");
        assert_eq!(dispatch.effects, vec![Effect::EndSession]);
        assert!(dispatch.result.clear_screen);
        assert_eq!(dispatch.result.output, vec!["Logging out...", "Session terminated."]);
    }

    #[test]
    fn clear_only_clears() {
        let dispatch = run("clear", "RIPLEY");
        assert!(dispatch.result.clear_screen);
        assert!(dispatch.result.output.is_empty());
        assert!(dispatch.effects.is_empty());
    }

    #[test]
    fn self_destruct_is_descriptive_only() {
        let dispatch = run("self_destruct", "RIPLEY");
        assert!(dispatch.effects.is_empty());
        assert!(dispatch.result.output.contains(&"Current Status: ARMED AND READY".to_string()));
    }

    #[test]
    fn xenomorph_includes_art_and_easter_eggs_answer() {
        let alien = run("alien", "RIPLEY").result.output;
        assert!(alien.iter().any(|l| l.contains("HOSTILE ORGANISM")));
        assert_eq!(run("hal9000", "RIPLEY").result.output.len(), 2);
        assert_eq!(
            run("hi", "RIPLEY").result.status_color,
            Some(StatusColor::Success)
        );
        assert_eq!(run("quit", "RIPLEY").result.status_color, Some(StatusColor::Success));
    }
}
