//! Text helpers shared by the command reports

use crate::data::{operational_count, SHIP_SYSTEMS};

const FILLED: char = '█';
const EMPTY: char = '░';

/// Render `percentage` as a bar of exactly `length` glyphs
///
/// The filled part is `floor(percentage / 100 * length)`; out-of-range
/// percentages are clamped to 0-100.
pub fn create_progress_bar(percentage: f64, length: usize) -> String {
    let pct = if percentage.is_nan() { 0.0 } else { percentage.clamp(0.0, 100.0) };
    let filled = ((pct / 100.0) * length as f64).floor() as usize;
    let filled = filled.min(length);

    let mut bar = String::with_capacity(length * FILLED.len_utf8());
    bar.extend(std::iter::repeat(FILLED).take(filled));
    bar.extend(std::iter::repeat(EMPTY).take(length - filled));
    bar
}

/// `LIFE_SUPPORT` -> `LIFE SUPPORT`
pub fn format_system_name(name: &str) -> String {
    name.replace('_', " ")
}

/// `currentLocation` -> `CURRENT LOCATION`
pub fn format_mission_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(c.to_ascii_uppercase());
    }
    out
}

/// Share of ship systems reporting OPERATIONAL, as a percentage
pub fn system_health() -> f64 {
    if SHIP_SYSTEMS.is_empty() {
        return 0.0;
    }
    operational_count() as f64 / SHIP_SYSTEMS.len() as f64 * 100.0
}

/// Greedy word wrap; each line carries `indent` and stays within `width`
/// characters unless a single word is longer.
pub fn word_wrap(text: &str, width: usize, indent: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = indent.to_string();

    for word in text.split_whitespace() {
        let at_start = line.len() == indent.len();
        let needed = if at_start { word.chars().count() } else { word.chars().count() + 1 };
        if !at_start && line.chars().count() + needed > width {
            lines.push(std::mem::replace(&mut line, indent.to_string()));
        }
        if line.len() != indent.len() {
            line.push(' ');
        }
        line.push_str(word);
    }

    if line.len() > indent.len() {
        lines.push(line);
    }
    lines
}

/// Elapsed session time as `<h>h <m>m`
pub fn format_uptime(elapsed: chrono::Duration) -> String {
    let minutes = elapsed.num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(bar: &str, glyph: char) -> usize {
        bar.chars().filter(|&c| c == glyph).count()
    }

    #[test]
    fn progress_bar_extremes() {
        assert_eq!(create_progress_bar(0.0, 20), "░".repeat(20));
        assert_eq!(create_progress_bar(100.0, 20), "█".repeat(20));
    }

    #[test]
    fn progress_bar_floors_and_keeps_length() {
        for p in 0..=100 {
            let pct = p as f64 + 0.5_f64.min(100.0 - p as f64);
            for n in [1, 7, 20, 30] {
                let bar = create_progress_bar(pct, n);
                assert_eq!(bar.chars().count(), n);
                assert_eq!(count(&bar, '█'), ((pct / 100.0) * n as f64).floor() as usize);
            }
        }
        assert_eq!(count(&create_progress_bar(98.7, 20), '█'), 19);
        assert_eq!(count(&create_progress_bar(12.3, 20), '█'), 2);
    }

    #[test]
    fn progress_bar_clamps() {
        assert_eq!(create_progress_bar(250.0, 10), "█".repeat(10));
        assert_eq!(create_progress_bar(-5.0, 10), "░".repeat(10));
        assert_eq!(create_progress_bar(f64::NAN, 4), "░".repeat(4));
    }

    #[test]
    fn names_and_keys() {
        assert_eq!(format_system_name("ARTIFICIAL_GRAVITY"), "ARTIFICIAL GRAVITY");
        assert_eq!(format_mission_key("missionId"), "MISSION ID");
        assert_eq!(format_mission_key("etaEarth"), "ETA EARTH");
        assert_eq!(format_mission_key("cargo"), "CARGO");
    }

    #[test]
    fn health_is_operational_share() {
        let expected = operational_count() as f64 / SHIP_SYSTEMS.len() as f64 * 100.0;
        assert!((system_health() - expected).abs() < f64::EPSILON);
        assert!((system_health() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn wrap_respects_width_and_indent() {
        let text = "Course laid in for Earth. ETA 10 months, 14 days. Note: Distress beacon on planetoid still active.";
        let lines = word_wrap(text, 60, "   ");
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.starts_with("   "));
            assert!(line.chars().count() <= 60, "{}", line);
            assert!(!line.ends_with(' '));
        }
        let rejoined = lines.iter().map(|l| l.trim()).collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn wrap_empty_text() {
        assert!(word_wrap("", 60, "   ").is_empty());
    }

    #[test]
    fn uptime() {
        assert_eq!(format_uptime(chrono::Duration::minutes(125)), "2h 5m");
        assert_eq!(format_uptime(chrono::Duration::seconds(59)), "0h 0m");
        assert_eq!(format_uptime(chrono::Duration::seconds(-30)), "0h 0m");
    }
}
