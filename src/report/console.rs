// Console renderer - ANSI-colored pass/fail summary for the terminal

use super::round2;
use crate::audit::{AuditReport, PairRecord};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
}

pub fn render(report: &AuditReport) -> String {
    use colors::*;

    let mut out = String::new();

    out.push('\n');
    out.push_str(&format!(
        "  {BOLD}{CYAN}{}{RESET} {DIM}- WCAG contrast audit{RESET}\n",
        report.theme
    ));
    out.push_str(&format!(
        "  {DIM}level {} - generated {}{RESET}\n\n",
        report.level,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if !report.workbench.is_empty() {
        out.push_str(&format!("  {BOLD}Workbench{RESET}\n"));
        for record in &report.workbench {
            push_pair_line(&mut out, record, report);
        }
        out.push('\n');
    }

    if !report.tokens.is_empty() {
        out.push_str(&format!("  {BOLD}Syntax tokens{RESET}\n"));
        for record in &report.tokens {
            push_pair_line(&mut out, record, report);
        }
        out.push('\n');
    }

    if !report.colorblind.is_empty() {
        out.push_str(&format!("  {BOLD}Color vision{RESET}\n"));
        for record in &report.colorblind {
            let (mark, color) = if record.flagged {
                ("⚠", YELLOW)
            } else {
                ("✓", GREEN)
            };
            out.push_str(&format!(
                "  {color}{mark}{RESET} {:<28} {:<26} {:>5.2}{}\n",
                record.label,
                record.deficiency.to_string(),
                round2(record.separation_ratio),
                if record.flagged {
                    format!(" {DIM}may be hard to distinguish{RESET}")
                } else {
                    String::new()
                }
            ));
        }
        out.push_str(&format!(
            "  {DIM}separation is a screening heuristic, not a clinical model{RESET}\n\n"
        ));
    }

    if !report.skipped.is_empty() {
        out.push_str(&format!("  {BOLD}Skipped{RESET}\n"));
        for skip in &report.skipped {
            out.push_str(&format!(
                "  {DIM}- {}: {}{RESET}\n",
                skip.label, skip.reason
            ));
        }
        out.push('\n');
    }

    let s = &report.summary;
    let verdict_color = if s.critical_failures > 0 {
        RED
    } else if s.failing > 0 || s.colorblind_flags > 0 {
        YELLOW
    } else {
        GREEN
    };
    out.push_str(&format!(
        "  {BOLD}Summary{RESET} {verdict_color}{} passing / {} failing{RESET} {DIM}({} evaluated, {} critical failures, {} skipped, {} color-vision flags){RESET}\n",
        s.passing, s.failing, s.evaluated, s.critical_failures, s.skipped, s.colorblind_flags
    ));

    out
}

fn push_pair_line(out: &mut String, record: &PairRecord, report: &AuditReport) {
    use colors::*;

    let passes = record.passes(report.level);
    let (mark, color) = match (passes, record.critical) {
        (true, _) => ("✓", GREEN),
        (false, true) => ("✗", RED),
        (false, false) => ("⚠", YELLOW),
    };

    let badges = match (record.meets_aa, record.meets_aaa) {
        (true, true) => "AA AAA".to_string(),
        (true, false) => "AA".to_string(),
        _ => format!("below AA ({:.1})", record.required_aa),
    };

    out.push_str(&format!(
        "  {color}{mark}{RESET} {:<28} {} on {}  {:>6.2}  {DIM}{}{RESET}\n",
        record.label,
        record.foreground,
        record.background,
        round2(record.ratio),
        badges
    ));
}
