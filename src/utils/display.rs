//! Presentation helpers
//!
//! Turns scoring results and history entries into the strings a front-end
//! renders. Nothing here is stored; the core keeps original values.

use std::fmt::Write;

use crate::history::HistoryEntry;
use crate::password::strength::{StrengthLevel, StrengthResult, MAX_SCORE};

/// Mask a password for display
///
/// Keeps the first and last two characters when longer than 4, otherwise
/// masks everything.
pub fn mask_password(password: &str) -> String {
    let chars: Vec<char> = password.chars().collect();
    let len = chars.len();
    if len <= 4 {
        return "*".repeat(len);
    }

    let mut masked = String::with_capacity(password.len());
    masked.extend(&chars[..2]);
    masked.push_str(&"*".repeat(len - 4));
    masked.extend(&chars[len - 2..]);
    masked
}

/// CSS-style slug for a level badge, e.g. `very-strong`
pub fn badge_class(level: StrengthLevel) -> String {
    level.label().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Text progress bar, one cell per score point
pub fn progress_bar(score: u8) -> String {
    let filled = usize::from(score.min(MAX_SCORE));
    format!("[{}{}]", "#".repeat(filled), "-".repeat(usize::from(MAX_SCORE) - filled))
}

/// Multi-line text report of a strength result
pub fn render_report(result: &StrengthResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} {} {} {:.0}%",
        result.icon,
        result.level.label(),
        progress_bar(result.score),
        result.percentage()
    );
    let _ = writeln!(out, "Crack time: {}", result.crack_time);

    for (requirement, met) in result.requirements.iter() {
        let _ = writeln!(out, "  [{}] {}", if met { "x" } else { " " }, requirement.description());
    }

    let analysis = &result.analysis;
    let _ = writeln!(
        out,
        "Characters: {} upper, {} lower, {} numbers, {} symbols ({} total)",
        analysis.uppercase, analysis.lowercase, analysis.numbers, analysis.symbols, analysis.total
    );
    let _ = write!(out, "Tip: {}", result.tip);
    out
}

/// One history line: masked password, badge and score
pub fn render_history_entry(entry: &HistoryEntry) -> String {
    format!(
        "{:<24} {:<12} {}/{}  {}",
        mask_password(&entry.password),
        badge_class(entry.level),
        entry.score,
        MAX_SCORE,
        entry.timestamp.format("%H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::strength::StrengthScorer;

    #[test]
    fn test_mask_short() {
        assert_eq!(mask_password(""), "");
        assert_eq!(mask_password("ab"), "**");
        assert_eq!(mask_password("abcd"), "****");
    }

    #[test]
    fn test_mask_long() {
        assert_eq!(mask_password("abcde"), "ab*de");
        assert_eq!(mask_password("abcdef"), "ab**ef");
    }

    #[test]
    fn test_mask_multibyte() {
        assert_eq!(mask_password("éèêëēė"), "éè**ēė");
    }

    #[test]
    fn test_badge_class() {
        assert_eq!(badge_class(StrengthLevel::VeryStrong), "very-strong");
        assert_eq!(badge_class(StrengthLevel::Fair), "fair");
        assert_eq!(badge_class(StrengthLevel::None), "none");
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "[-----]");
        assert_eq!(progress_bar(3), "[###--]");
        assert_eq!(progress_bar(5), "[#####]");
    }

    #[test]
    fn test_report_lists_requirements() {
        let report = render_report(&StrengthScorer::new().evaluate("Abc12345"));
        assert!(report.contains("Good"));
        assert!(report.contains("[x] At least 8 characters"));
        assert!(report.contains("[ ] Special character"));
        assert!(report.contains("Crack time: 1 days"));
    }
}
