// WCAG 2.1 luminance, contrast ratio, and classification
//
// The luminance transform is the exact one from the WCAG definition
// (sRGB linearization with the 0.03928 breakpoint, then the 2126/7152/722
// channel weights). Getting any constant wrong here changes pass/fail
// results, so the tests below pin the boundary values.

use super::color::Color;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────────────
// Luminance and ratio
// ─────────────────────────────────────────────────────────────────────────────

/// Relative luminance of an sRGB color, in [0.0, 1.0].
///
/// 0.0 is pure black, 1.0 is pure white. Alpha is ignored; translucent
/// colors must be composited over their backdrop first.
pub fn relative_luminance(color: Color) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let s = channel as f64 / 255.0;
        if s <= 0.03928 {
            s / 12.92
        } else {
            ((s + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric in its arguments. The +0.05 offsets keep the denominator
/// at least 0.05, so the ratio is bounded by construction.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

// ─────────────────────────────────────────────────────────────────────────────
// Requirement categories and thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Usage category a color pair is audited as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Body text at default sizes (WCAG 1.4.3 / 1.4.6)
    NormalText,
    /// Large-scale text: 18pt, or 14pt bold
    LargeText,
    /// Interactive component boundaries and states (WCAG 1.4.11)
    UiComponents,
    /// Meaning-bearing graphics: icons, gauge fills, diff markers
    GraphicalObjects,
}

impl Category {
    /// All categories, in display order
    pub const ALL: [Category; 4] = [
        Category::NormalText,
        Category::LargeText,
        Category::UiComponents,
        Category::GraphicalObjects,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::NormalText => write!(f, "normal text"),
            Category::LargeText => write!(f, "large text"),
            Category::UiComponents => write!(f, "UI components"),
            Category::GraphicalObjects => write!(f, "graphical objects"),
        }
    }
}

/// Minimum ratios for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub aa: f64,
    pub aaa: f64,
}

/// The requirement table: category -> AA/AAA minimums.
///
/// Modeled as explicit data rather than hardcoded match arms so the config
/// file can override individual entries. The default table carries the
/// WCAG 2.1 constants. WCAG defines no AAA tier for non-text contrast, so
/// those categories repeat the AA minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementTable {
    entries: HashMap<Category, Thresholds>,
}

impl Default for RequirementTable {
    fn default() -> Self {
        let mut entries = HashMap::new();
        entries.insert(Category::NormalText, Thresholds { aa: 4.5, aaa: 7.0 });
        entries.insert(Category::LargeText, Thresholds { aa: 3.0, aaa: 4.5 });
        entries.insert(Category::UiComponents, Thresholds { aa: 3.0, aaa: 3.0 });
        entries.insert(
            Category::GraphicalObjects,
            Thresholds { aa: 3.0, aaa: 3.0 },
        );
        Self { entries }
    }
}

/// A requirement category with no entry in the table.
///
/// This is a caller-side misconfiguration, never silently defaulted:
/// a table that lost a category would otherwise mask genuine failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationError {
    pub category: Category,
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no thresholds configured for category {:?}", self.category)
    }
}

impl std::error::Error for ConfigurationError {}

/// Outcome of classifying one ratio against one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub meets_aa: bool,
    pub meets_aaa: bool,
}

impl RequirementTable {
    /// Replace the thresholds for one category
    pub fn set(&mut self, category: Category, thresholds: Thresholds) {
        self.entries.insert(category, thresholds);
    }

    /// Look up the minimums for a category
    pub fn get(&self, category: Category) -> Result<Thresholds, ConfigurationError> {
        self.entries
            .get(&category)
            .copied()
            .ok_or(ConfigurationError { category })
    }

    /// Classify a ratio against a category's minimums.
    ///
    /// Comparisons are inclusive: a ratio of exactly 4.5 meets the 4.5
    /// minimum. AA and AAA are reported independently since both come
    /// from the table, not inferred from each other.
    pub fn classify(
        &self,
        ratio: f64,
        category: Category,
    ) -> Result<ContrastResult, ConfigurationError> {
        let thresholds = self.get(category)?;
        Ok(ContrastResult {
            ratio,
            meets_aa: ratio >= thresholds.aa,
            meets_aaa: ratio >= thresholds.aaa,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        Color::parse(hex).unwrap()
    }

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(color("#ffffff")), 1.0);
        assert_eq!(relative_luminance(color("#000000")), 0.0);
    }

    #[test]
    fn test_luminance_known_values() {
        // Mid-gray sits well below 0.5: luminance is perceptual, not linear
        let gray = relative_luminance(color("#808080"));
        assert!((gray - 0.21586).abs() < 1e-4);

        let red = relative_luminance(color("#ff0000"));
        assert!((red - 0.2126).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_black_white_is_21() {
        assert_eq!(contrast_ratio(color("#000000"), color("#ffffff")), 21.0);
    }

    #[test]
    fn test_ratio_identity_is_1() {
        for hex in ["#000000", "#ffffff", "#ff6b35", "#1a0d26"] {
            assert_eq!(contrast_ratio(color(hex), color(hex)), 1.0);
        }
    }

    #[test]
    fn test_ratio_symmetry() {
        let pairs = [
            ("#1a0d26", "#f4f1f4"),
            ("#ff6b35", "#8b7a9b"),
            ("#000000", "#808080"),
        ];
        for (a, b) in pairs {
            assert_eq!(
                contrast_ratio(color(a), color(b)),
                contrast_ratio(color(b), color(a))
            );
        }
    }

    #[test]
    fn test_ratio_bounds() {
        let samples = [
            "#000000", "#ffffff", "#ff6b35", "#1a0d26", "#8b7a9b", "#0000ff", "#00ff00",
        ];
        for a in samples {
            for b in samples {
                let ratio = contrast_ratio(color(a), color(b));
                assert!((1.0..=21.0).contains(&ratio), "{} vs {}: {}", a, b, ratio);
            }
        }
    }

    #[test]
    fn test_dusk_ember_editor_pair() {
        // The flagship theme's editor background/foreground
        let ratio = contrast_ratio(color("#1a0d26"), color("#f4f1f4"));
        assert!((ratio - 16.59).abs() < 0.01, "got {}", ratio);

        let result = RequirementTable::default()
            .classify(ratio, Category::NormalText)
            .unwrap();
        assert!(result.meets_aa);
        assert!(result.meets_aaa);
    }

    #[test]
    fn test_dusk_ember_accent_pair() {
        // Orange accent on the editor background: AA yes, AAA no
        let ratio = contrast_ratio(color("#1a0d26"), color("#ff6b35"));
        assert!((ratio - 6.56).abs() < 0.01, "got {}", ratio);

        let result = RequirementTable::default()
            .classify(ratio, Category::NormalText)
            .unwrap();
        assert!(result.meets_aa);
        assert!(!result.meets_aaa);
    }

    #[test]
    fn test_classify_boundary_inclusive() {
        let table = RequirementTable::default();

        let at = table.classify(4.5, Category::NormalText).unwrap();
        assert!(at.meets_aa);

        let below = table.classify(4.49999, Category::NormalText).unwrap();
        assert!(!below.meets_aa);

        let aaa = table.classify(7.0, Category::NormalText).unwrap();
        assert!(aaa.meets_aaa);
    }

    #[test]
    fn test_classify_large_text() {
        let table = RequirementTable::default();
        let result = table.classify(3.2, Category::LargeText).unwrap();
        assert!(result.meets_aa);
        assert!(!result.meets_aaa);
    }

    #[test]
    fn test_missing_category_is_configuration_error() {
        let table = RequirementTable {
            entries: HashMap::new(),
        };
        let err = table.classify(5.0, Category::NormalText).unwrap_err();
        assert_eq!(err.category, Category::NormalText);
    }

    #[test]
    fn test_table_override() {
        let mut table = RequirementTable::default();
        table.set(Category::NormalText, Thresholds { aa: 5.0, aaa: 8.0 });
        let result = table.classify(4.6, Category::NormalText).unwrap();
        assert!(!result.meets_aa);
    }
}
