// Markdown renderer - tables suitable for CI artifacts and PR comments

use super::round2;
use crate::audit::{AuditReport, PairRecord};

pub fn render(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {} - WCAG contrast audit\n\n", report.theme));
    out.push_str(&format!(
        "Level: **{}** - generated {}\n\n",
        report.level,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if !report.workbench.is_empty() {
        out.push_str("## Workbench\n\n");
        push_pair_table(&mut out, &report.workbench);
    }

    if !report.tokens.is_empty() {
        out.push_str("## Syntax tokens\n\n");
        push_pair_table(&mut out, &report.tokens);
    }

    if !report.colorblind.is_empty() {
        out.push_str("## Color vision\n\n");
        out.push_str("| Pair | Deficiency | Separation | Flagged |\n");
        out.push_str("|---|---|---:|---|\n");
        for record in &report.colorblind {
            out.push_str(&format!(
                "| {} | {} | {:.2} | {} |\n",
                record.label,
                record.deficiency,
                round2(record.separation_ratio),
                if record.flagged { "⚠ yes" } else { "no" }
            ));
        }
        out.push_str(
            "\n_Separation is a screening heuristic (Euclidean RGB after a \
             dichromacy matrix), not a clinical model._\n\n",
        );
    }

    if !report.skipped.is_empty() {
        out.push_str("## Skipped\n\n");
        for skip in &report.skipped {
            out.push_str(&format!("- **{}**: {}\n", skip.label, skip.reason));
        }
        out.push('\n');
    }

    let s = &report.summary;
    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "{} evaluated, {} passing, {} failing ({} critical), {} skipped, {} color-vision flags\n",
        s.evaluated, s.passing, s.failing, s.critical_failures, s.skipped, s.colorblind_flags
    ));

    out
}

fn push_pair_table(out: &mut String, records: &[PairRecord]) {
    out.push_str("| Pair | Foreground | Background | Ratio | AA | AAA | Critical |\n");
    out.push_str("|---|---|---|---:|---|---|---|\n");
    for record in records {
        out.push_str(&format!(
            "| {} | `{}` | `{}` | {:.2} | {} | {} | {} |\n",
            record.label,
            record.foreground,
            record.background,
            round2(record.ratio),
            if record.meets_aa { "✓" } else { "✗" },
            if record.meets_aaa { "✓" } else { "✗" },
            if record.critical { "yes" } else { "" },
        ));
    }
    out.push('\n');
}
