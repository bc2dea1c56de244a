// Audit runner - expands a theme into checkable pairs and runs the engine
//
// The workbench plan is fixed data: which background/foreground keys a
// theme is judged on, at which requirement category, and whether failing
// the pair should fail the run. Token checks are derived from the theme's
// own tokenColors. One malformed or missing color never aborts the batch;
// the pair is recorded as skipped and evaluation continues.

use crate::contrast::{
    contrast_ratio, separation_ratio, Category, Color, Deficiency, RequirementTable,
};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Audit plan
// ─────────────────────────────────────────────────────────────────────────────

/// One planned workbench contrast check
pub struct ContrastCheck {
    pub label: &'static str,
    pub background: &'static str,
    pub foreground: &'static str,
    pub category: Category,
    /// Critical pairs gate the process exit code
    pub critical: bool,
}

/// Workbench pairs every theme is audited on. Keys a theme doesn't define
/// are skipped - VS Code themes are sparse by design.
pub const WORKBENCH_CHECKS: &[ContrastCheck] = &[
    ContrastCheck {
        label: "editor text",
        background: "editor.background",
        foreground: "editor.foreground",
        category: Category::NormalText,
        critical: true,
    },
    ContrastCheck {
        label: "terminal text",
        background: "terminal.background",
        foreground: "terminal.foreground",
        category: Category::NormalText,
        critical: true,
    },
    ContrastCheck {
        label: "line numbers",
        background: "editor.background",
        foreground: "editorLineNumber.foreground",
        category: Category::LargeText,
        critical: false,
    },
    ContrastCheck {
        label: "active line number",
        background: "editor.background",
        foreground: "editorLineNumber.activeForeground",
        category: Category::LargeText,
        critical: false,
    },
    ContrastCheck {
        label: "status bar",
        background: "statusBar.background",
        foreground: "statusBar.foreground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "activity bar icons",
        background: "activityBar.background",
        foreground: "activityBar.foreground",
        category: Category::UiComponents,
        critical: false,
    },
    ContrastCheck {
        label: "activity bar inactive icons",
        background: "activityBar.background",
        foreground: "activityBar.inactiveForeground",
        category: Category::UiComponents,
        critical: false,
    },
    ContrastCheck {
        label: "activity bar badge",
        background: "activityBarBadge.background",
        foreground: "activityBarBadge.foreground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "side bar text",
        background: "sideBar.background",
        foreground: "sideBar.foreground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "active tab",
        background: "tab.activeBackground",
        foreground: "tab.activeForeground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "inactive tab",
        background: "tab.inactiveBackground",
        foreground: "tab.inactiveForeground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "button text",
        background: "button.background",
        foreground: "button.foreground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "input text",
        background: "input.background",
        foreground: "input.foreground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "input placeholder",
        background: "input.background",
        foreground: "input.placeholderForeground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "list selection",
        background: "list.activeSelectionBackground",
        foreground: "list.activeSelectionForeground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "badge",
        background: "badge.background",
        foreground: "badge.foreground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "error marker",
        background: "editor.background",
        foreground: "editorError.foreground",
        category: Category::GraphicalObjects,
        critical: false,
    },
    ContrastCheck {
        label: "warning marker",
        background: "editor.background",
        foreground: "editorWarning.foreground",
        category: Category::GraphicalObjects,
        critical: false,
    },
    ContrastCheck {
        label: "info marker",
        background: "editor.background",
        foreground: "editorInfo.foreground",
        category: Category::GraphicalObjects,
        critical: false,
    },
    ContrastCheck {
        label: "focus border",
        background: "editor.background",
        foreground: "focusBorder",
        category: Category::UiComponents,
        critical: false,
    },
    ContrastCheck {
        label: "git added decoration",
        background: "sideBar.background",
        foreground: "gitDecoration.addedResourceForeground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "git deleted decoration",
        background: "sideBar.background",
        foreground: "gitDecoration.deletedResourceForeground",
        category: Category::NormalText,
        critical: false,
    },
    ContrastCheck {
        label: "git modified decoration",
        background: "sideBar.background",
        foreground: "gitDecoration.modifiedResourceForeground",
        category: Category::NormalText,
        critical: false,
    },
];

/// One planned color-blindness separation check: semantic roles whose
/// colors must stay distinguishable from each other
pub struct SeparationCheck {
    pub label: &'static str,
    pub color_a: &'static str,
    pub color_b: &'static str,
}

pub const SEPARATION_CHECKS: &[SeparationCheck] = &[
    SeparationCheck {
        label: "error vs success",
        color_a: "editorError.foreground",
        color_b: "gitDecoration.addedResourceForeground",
    },
    SeparationCheck {
        label: "diff added vs deleted",
        color_a: "gitDecoration.addedResourceForeground",
        color_b: "gitDecoration.deletedResourceForeground",
    },
    SeparationCheck {
        label: "warning vs info",
        color_a: "editorWarning.foreground",
        color_b: "editorInfo.foreground",
    },
    SeparationCheck {
        label: "modified vs untracked",
        color_a: "gitDecoration.modifiedResourceForeground",
        color_b: "gitDecoration.untrackedResourceForeground",
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Report records
// ─────────────────────────────────────────────────────────────────────────────

/// Conformance level the summary and exit code are judged against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Aa,
    Aaa,
}

impl Level {
    /// Parse a level string from config or CLI
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "aaa" => Self::Aaa,
            _ => Self::Aa,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aa => "aa",
            Self::Aaa => "aaa",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

/// Serialize a ratio rounded to 2 decimals for display. Pass/fail booleans
/// are computed from the unrounded value before serialization, so rounding
/// can never flip a verdict.
fn round2<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((value * 100.0).round() / 100.0)
}

/// One evaluated contrast pair
#[derive(Debug, Clone, Serialize)]
pub struct PairRecord {
    pub label: String,
    pub background_key: String,
    pub foreground_key: String,
    pub background: Color,
    pub foreground: Color,
    #[serde(serialize_with = "round2")]
    pub ratio: f64,
    pub category: Category,
    pub required_aa: f64,
    pub required_aaa: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
    pub critical: bool,
}

impl PairRecord {
    /// Does this pair pass at the enforced level?
    pub fn passes(&self, level: Level) -> bool {
        match level {
            Level::Aa => self.meets_aa,
            Level::Aaa => self.meets_aaa,
        }
    }
}

/// One evaluated color-blindness pair
#[derive(Debug, Clone, Serialize)]
pub struct SeparationRecord {
    pub label: String,
    pub color_a: Color,
    pub color_b: Color,
    pub deficiency: Deficiency,
    #[serde(serialize_with = "round2")]
    pub separation_ratio: f64,
    pub flagged: bool,
}

/// A pair that could not be evaluated, with the reason. Skips never abort
/// the batch.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedPair {
    pub label: String,
    pub reason: String,
}

/// Aggregate counts for the summary block
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub evaluated: usize,
    pub passing: usize,
    pub failing: usize,
    pub critical_failures: usize,
    pub skipped: usize,
    pub colorblind_flags: usize,
}

/// The full audit result for one theme
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub theme: String,
    pub generated_at: DateTime<Utc>,
    pub level: Level,
    pub workbench: Vec<PairRecord>,
    pub tokens: Vec<PairRecord>,
    pub colorblind: Vec<SeparationRecord>,
    pub skipped: Vec<SkippedPair>,
    pub summary: Summary,
}

impl AuditReport {
    /// Whether the run should fail the process at the enforced level
    pub fn has_critical_failures(&self) -> bool {
        self.summary.critical_failures > 0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runner
// ─────────────────────────────────────────────────────────────────────────────

/// Knobs the runner takes from config/CLI
pub struct AuditOptions {
    pub level: Level,
    pub table: RequirementTable,
    pub colorblind_enabled: bool,
    pub colorblind_threshold: f64,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            level: Level::Aa,
            table: RequirementTable::default(),
            colorblind_enabled: true,
            colorblind_threshold: 0.3,
        }
    }
}

/// Run the full audit plan against a theme
pub fn run(theme: &Theme, options: &AuditOptions) -> AuditReport {
    let mut workbench = Vec::new();
    let mut tokens = Vec::new();
    let mut colorblind = Vec::new();
    let mut skipped = Vec::new();

    for check in WORKBENCH_CHECKS {
        if let Some(record) = evaluate_pair(theme, check, options, &mut skipped) {
            workbench.push(record);
        }
    }

    evaluate_tokens(theme, options, &mut tokens, &mut skipped);

    if options.colorblind_enabled {
        evaluate_colorblind(theme, options, &mut colorblind, &mut skipped);
    }

    let summary = summarize(&workbench, &tokens, &colorblind, &skipped, options.level);

    AuditReport {
        theme: theme.display_name().to_string(),
        generated_at: Utc::now(),
        level: options.level,
        workbench,
        tokens,
        colorblind,
        skipped,
        summary,
    }
}

/// Resolve a workbench key to a parsed color, recording skips
fn resolve_color(
    theme: &Theme,
    key: &str,
    label: &str,
    skipped: &mut Vec<SkippedPair>,
) -> Option<Color> {
    let Some(raw) = theme.color(key) else {
        tracing::debug!("{}: key {} not defined, skipping", label, key);
        skipped.push(SkippedPair {
            label: label.to_string(),
            reason: format!("{} not defined by theme", key),
        });
        return None;
    };

    match Color::parse(raw) {
        Ok(color) => Some(color),
        Err(e) => {
            tracing::warn!("{}: {} = {:?} is malformed: {}", label, key, raw, e);
            skipped.push(SkippedPair {
                label: label.to_string(),
                reason: format!("{} = {:?}: {}", key, raw, e),
            });
            None
        }
    }
}

fn evaluate_pair(
    theme: &Theme,
    check: &ContrastCheck,
    options: &AuditOptions,
    skipped: &mut Vec<SkippedPair>,
) -> Option<PairRecord> {
    let background = resolve_color(theme, check.background, check.label, skipped)?;
    let foreground = resolve_color(theme, check.foreground, check.label, skipped)?;

    build_record(
        check.label.to_string(),
        check.background.to_string(),
        check.foreground.to_string(),
        background,
        foreground,
        check.category,
        check.critical,
        options,
        skipped,
    )
}

/// Token rules are checked against the editor background as normal text
fn evaluate_tokens(
    theme: &Theme,
    options: &AuditOptions,
    tokens: &mut Vec<PairRecord>,
    skipped: &mut Vec<SkippedPair>,
) {
    let Some(background) = resolve_color(theme, "editor.background", "syntax tokens", skipped)
    else {
        return;
    };

    for token in &theme.token_colors {
        let Some(raw) = token.settings.foreground.as_deref() else {
            continue; // style-only rule (e.g. just fontStyle), nothing to audit
        };
        let label = token.label();

        let foreground = match Color::parse(raw) {
            Ok(color) => color,
            Err(e) => {
                tracing::warn!("token {:?}: foreground {:?} is malformed: {}", label, raw, e);
                skipped.push(SkippedPair {
                    label: label.clone(),
                    reason: format!("foreground {:?}: {}", raw, e),
                });
                continue;
            }
        };

        if let Some(record) = build_record(
            label,
            "editor.background".to_string(),
            "tokenColors".to_string(),
            background,
            foreground,
            Category::NormalText,
            false,
            options,
            skipped,
        ) {
            tokens.push(record);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn build_record(
    label: String,
    background_key: String,
    foreground_key: String,
    background: Color,
    foreground: Color,
    category: Category,
    critical: bool,
    options: &AuditOptions,
    skipped: &mut Vec<SkippedPair>,
) -> Option<PairRecord> {
    // Translucent foregrounds are flattened against their backdrop;
    // luminance is only defined for opaque colors
    let flat_background = background.composite_over(Color::rgb(0, 0, 0));
    let flat_foreground = foreground.composite_over(flat_background);

    let ratio = contrast_ratio(flat_background, flat_foreground);
    let result = match options.table.classify(ratio, category) {
        Ok(result) => result,
        Err(e) => {
            // Config lost a category: surface it, don't invent a default
            tracing::error!("{}: {}", label, e);
            skipped.push(SkippedPair {
                label,
                reason: e.to_string(),
            });
            return None;
        }
    };
    let thresholds = options
        .table
        .get(category)
        .expect("classify succeeded, table entry exists");

    Some(PairRecord {
        label,
        background_key,
        foreground_key,
        background,
        foreground,
        ratio,
        category,
        required_aa: thresholds.aa,
        required_aaa: thresholds.aaa,
        meets_aa: result.meets_aa,
        meets_aaa: result.meets_aaa,
        critical,
    })
}

fn evaluate_colorblind(
    theme: &Theme,
    options: &AuditOptions,
    colorblind: &mut Vec<SeparationRecord>,
    skipped: &mut Vec<SkippedPair>,
) {
    for check in SEPARATION_CHECKS {
        let Some(color_a) = resolve_color(theme, check.color_a, check.label, skipped) else {
            continue;
        };
        let Some(color_b) = resolve_color(theme, check.color_b, check.label, skipped) else {
            continue;
        };

        for deficiency in Deficiency::ALL {
            let ratio = separation_ratio(color_a, color_b, deficiency);
            colorblind.push(SeparationRecord {
                label: check.label.to_string(),
                color_a,
                color_b,
                deficiency,
                separation_ratio: ratio,
                flagged: ratio < options.colorblind_threshold,
            });
        }
    }
}

fn summarize(
    workbench: &[PairRecord],
    tokens: &[PairRecord],
    colorblind: &[SeparationRecord],
    skipped: &[SkippedPair],
    level: Level,
) -> Summary {
    let mut summary = Summary {
        skipped: skipped.len(),
        colorblind_flags: colorblind.iter().filter(|r| r.flagged).count(),
        ..Default::default()
    };

    for record in workbench.iter().chain(tokens) {
        summary.evaluated += 1;
        if record.passes(level) {
            summary.passing += 1;
        } else {
            summary.failing += 1;
            if record.critical {
                summary.critical_failures += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn dusk_ember() -> Theme {
        Theme::resolve("Dusk Ember").unwrap()
    }

    #[test]
    fn test_editor_pair_is_critical_and_passes() {
        let report = run(&dusk_ember(), &AuditOptions::default());

        let editor = report
            .workbench
            .iter()
            .find(|r| r.label == "editor text")
            .expect("editor pair evaluated");
        assert!(editor.critical);
        assert!((editor.ratio - 16.59).abs() < 0.01);
        assert!(editor.meets_aa);
        assert!(editor.meets_aaa);
    }

    #[test]
    fn test_every_token_rule_with_foreground_is_checked() {
        let theme = dusk_ember();
        let with_foreground = theme
            .token_colors
            .iter()
            .filter(|t| t.settings.foreground.is_some())
            .count();

        let report = run(&theme, &AuditOptions::default());
        assert_eq!(report.tokens.len(), with_foreground);
    }

    #[test]
    fn test_colorblind_pairs_cover_all_deficiencies() {
        let report = run(&dusk_ember(), &AuditOptions::default());
        // 4 planned pairs, all keys present in the bundled theme
        assert_eq!(report.colorblind.len(), SEPARATION_CHECKS.len() * 3);
    }

    #[test]
    fn test_dusk_ember_flags_red_green_pairs_under_protanopia() {
        // The theme's error red and success green sit on a protan
        // confusion axis - the audit must say so
        let report = run(&dusk_ember(), &AuditOptions::default());
        let flagged: Vec<_> = report
            .colorblind
            .iter()
            .filter(|r| r.flagged && r.deficiency == Deficiency::Protanopia)
            .collect();
        assert!(
            flagged.iter().any(|r| r.label == "diff added vs deleted"),
            "expected protanopia flag on added/deleted"
        );
    }

    #[test]
    fn test_malformed_color_skips_pair_but_not_batch() {
        let content = r##"{
            "name": "Broken",
            "colors": {
                "editor.background": "#1a0d26",
                "editor.foreground": "not-a-color",
                "terminal.background": "#1a0d26",
                "terminal.foreground": "#f4f1f4"
            }
        }"##;
        let theme = Theme::from_json(content).unwrap();
        let report = run(&theme, &AuditOptions::default());

        // editor pair skipped with a recorded reason...
        assert!(report
            .skipped
            .iter()
            .any(|s| s.label == "editor text" && s.reason.contains("not-a-color")));
        // ...but the terminal pair still evaluated
        assert!(report.workbench.iter().any(|r| r.label == "terminal text"));
    }

    #[test]
    fn test_missing_keys_skip_quietly() {
        let theme = Theme::from_json(r#"{"name": "Sparse", "colors": {}}"#).unwrap();
        let report = run(&theme, &AuditOptions::default());
        assert!(report.workbench.is_empty());
        assert_eq!(report.summary.evaluated, 0);
        assert!(report.summary.skipped > 0);
        assert!(!report.has_critical_failures());
    }

    #[test]
    fn test_translucent_foreground_composited() {
        // 50% white over black is mid-gray: ratio must match the
        // flattened color, not the raw one
        let content = r##"{
            "name": "Alpha",
            "colors": {
                "editor.background": "#000000",
                "editor.foreground": "#ffffff80"
            }
        }"##;
        let theme = Theme::from_json(content).unwrap();
        let report = run(&theme, &AuditOptions::default());
        let editor = &report.workbench[0];
        // #808080 on black is ~5.32, far below the 21.0 of opaque white
        assert!((editor.ratio - 5.32).abs() < 0.05, "got {}", editor.ratio);
    }

    #[test]
    fn test_summary_counts_level_sensitive() {
        let theme = dusk_ember();

        let aa = run(&theme, &AuditOptions::default());
        let aaa = run(
            &theme,
            &AuditOptions {
                level: Level::Aaa,
                ..Default::default()
            },
        );

        // AAA is at least as strict as AA
        assert!(aaa.summary.failing >= aa.summary.failing);
        assert_eq!(
            aa.summary.evaluated,
            aa.summary.passing + aa.summary.failing
        );
    }

    #[test]
    fn test_colorblind_can_be_disabled() {
        let report = run(
            &dusk_ember(),
            &AuditOptions {
                colorblind_enabled: false,
                ..Default::default()
            },
        );
        assert!(report.colorblind.is_empty());
        assert_eq!(report.summary.colorblind_flags, 0);
    }
}
