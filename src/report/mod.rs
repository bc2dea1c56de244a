// Report presenters - render an AuditReport for humans or machines
//
// Four formats: console (ANSI, for the terminal), markdown and html (for
// files/CI artifacts), json (the serialized AuditReport itself). All of
// them read the same records; presentation never re-derives pass/fail.

pub mod console;
pub mod html;
pub mod markdown;

use crate::audit::AuditReport;
use anyhow::Result;

/// Output format for the audit report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Console,
    Markdown,
    Html,
    Json,
}

impl ReportFormat {
    /// Parse a format string from config or CLI
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Self::Markdown,
            "html" => Self::Html,
            "json" => Self::Json,
            _ => Self::Console,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Markdown => "markdown",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Default file extension for --out paths
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Console => "txt",
            Self::Markdown => "md",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

/// Render a report in the requested format
pub fn render(report: &AuditReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Console => Ok(console::render(report)),
        ReportFormat::Markdown => Ok(markdown::render(report)),
        ReportFormat::Html => Ok(html::render(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Display rounding shared by the text presenters
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{run, AuditOptions};
    use crate::theme::Theme;

    fn report() -> AuditReport {
        let theme = Theme::resolve("Dusk Ember").unwrap();
        run(&theme, &AuditOptions::default())
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(ReportFormat::from_str("md"), ReportFormat::Markdown);
        assert_eq!(ReportFormat::from_str("HTML"), ReportFormat::Html);
        assert_eq!(ReportFormat::from_str("unknown"), ReportFormat::Console);
    }

    #[test]
    fn test_json_rounds_ratio_for_display_only() {
        let report = report();
        let json = render(&report, ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let editor = value["workbench"]
            .as_array()
            .unwrap()
            .iter()
            .find(|r| r["label"] == "editor text")
            .unwrap();
        // Two decimals in the serialized form
        assert_eq!(editor["ratio"], 16.59);
        // The verdict came from the unrounded value
        assert_eq!(editor["meets_aaa"], true);
    }

    #[test]
    fn test_display_rounding_never_flips_verdict() {
        use crate::contrast::{Category, RequirementTable};

        // 4.4951 displays as 4.50 but the verdict comes from the raw value
        let result = RequirementTable::default()
            .classify(4.4951, Category::NormalText)
            .unwrap();
        assert!(!result.meets_aa);
        assert_eq!(round2(4.4951), 4.5);
    }

    #[test]
    fn test_all_formats_render() {
        let report = report();
        for format in [
            ReportFormat::Console,
            ReportFormat::Markdown,
            ReportFormat::Html,
            ReportFormat::Json,
        ] {
            let out = render(&report, format).unwrap();
            assert!(out.contains("Dusk Ember"), "{:?} missing theme name", format);
        }
    }
}
