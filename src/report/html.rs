// HTML renderer - self-contained page with color swatches
//
// No templating engine: the report is small and the markup is fixed, so
// push_str formatting keeps this dependency-free and deterministic.

use super::round2;
use crate::audit::{AuditReport, PairRecord};

pub fn render(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!(
        "<title>{} - WCAG contrast audit</title>\n",
        escape(&report.theme)
    ));
    out.push_str(
        "<style>\n\
         body { font-family: system-ui, sans-serif; margin: 2rem auto; max-width: 60rem; }\n\
         table { border-collapse: collapse; margin-bottom: 2rem; width: 100%; }\n\
         th, td { border: 1px solid #ccc; padding: 0.3rem 0.6rem; text-align: left; }\n\
         td.num { text-align: right; font-variant-numeric: tabular-nums; }\n\
         .swatch { display: inline-block; width: 2.5rem; text-align: center;\n\
                   padding: 0.1rem 0.3rem; border: 1px solid #999; font-size: 0.8rem; }\n\
         .pass { color: #1a7f37; } .fail { color: #b42318; } .warn { color: #9a6700; }\n\
         .note { color: #666; font-size: 0.9rem; }\n\
         </style>\n</head>\n<body>\n",
    );

    out.push_str(&format!(
        "<h1>{} - WCAG contrast audit</h1>\n<p class=\"note\">level {} - generated {}</p>\n",
        escape(&report.theme),
        report.level,
        report.generated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if !report.workbench.is_empty() {
        out.push_str("<h2>Workbench</h2>\n");
        push_pair_table(&mut out, &report.workbench);
    }

    if !report.tokens.is_empty() {
        out.push_str("<h2>Syntax tokens</h2>\n");
        push_pair_table(&mut out, &report.tokens);
    }

    if !report.colorblind.is_empty() {
        out.push_str("<h2>Color vision</h2>\n<table>\n");
        out.push_str(
            "<tr><th>Pair</th><th>Colors</th><th>Deficiency</th>\
             <th>Separation</th><th></th></tr>\n",
        );
        for record in &report.colorblind {
            out.push_str(&format!(
                "<tr><td>{}</td><td>{} {}</td><td>{}</td><td class=\"num\">{:.2}</td><td>{}</td></tr>\n",
                escape(&record.label),
                swatch(&record.color_a.to_string()),
                swatch(&record.color_b.to_string()),
                record.deficiency,
                round2(record.separation_ratio),
                if record.flagged {
                    "<span class=\"warn\">may be hard to distinguish</span>"
                } else {
                    ""
                }
            ));
        }
        out.push_str("</table>\n");
        out.push_str(
            "<p class=\"note\">Separation is a screening heuristic, \
             not a clinical model.</p>\n",
        );
    }

    if !report.skipped.is_empty() {
        out.push_str("<h2>Skipped</h2>\n<ul>\n");
        for skip in &report.skipped {
            out.push_str(&format!(
                "<li><strong>{}</strong>: {}</li>\n",
                escape(&skip.label),
                escape(&skip.reason)
            ));
        }
        out.push_str("</ul>\n");
    }

    let s = &report.summary;
    out.push_str(&format!(
        "<h2>Summary</h2>\n<p>{} evaluated, {} passing, {} failing \
         ({} critical), {} skipped, {} color-vision flags</p>\n",
        s.evaluated, s.passing, s.failing, s.critical_failures, s.skipped, s.colorblind_flags
    ));

    out.push_str("</body>\n</html>\n");
    out
}

fn push_pair_table(out: &mut String, records: &[PairRecord]) {
    out.push_str("<table>\n");
    out.push_str(
        "<tr><th>Pair</th><th>Sample</th><th>Ratio</th>\
         <th>AA</th><th>AAA</th><th>Critical</th></tr>\n",
    );
    for record in records {
        let sample = format!(
            "<span class=\"swatch\" style=\"background:{};color:{}\">Aa</span> \
             <code>{}</code> on <code>{}</code>",
            record.background, record.foreground, record.foreground, record.background
        );
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{:.2}</td>\
             <td class=\"{}\">{}</td><td class=\"{}\">{}</td><td>{}</td></tr>\n",
            escape(&record.label),
            sample,
            round2(record.ratio),
            if record.meets_aa { "pass" } else { "fail" },
            if record.meets_aa { "✓" } else { "✗" },
            if record.meets_aaa { "pass" } else { "fail" },
            if record.meets_aaa { "✓" } else { "✗" },
            if record.critical { "yes" } else { "" },
        ));
    }
    out.push_str("</table>\n");
}

fn swatch(hex: &str) -> String {
    format!(
        "<span class=\"swatch\" style=\"background:{}\">&nbsp;</span> <code>{}</code>",
        hex, hex
    )
}

/// Minimal HTML escaping for text content
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
