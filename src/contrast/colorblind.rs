// Color-blindness separation estimate
//
// Simulates dichromatic color vision with a fixed 3x3 linear transform per
// deficiency type and compares Euclidean RGB distance before and after.
// The matrices are the widely-circulated empirical approximations of
// dichromatic confusion; the whole thing is a screening heuristic, not a
// perceptually-uniform or clinically validated model. Treat low ratios as
// "worth a human look", not as a diagnosis.

use super::color::Color;
use serde::Serialize;
use std::fmt;

/// Dichromatic color vision deficiency types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Deficiency {
    /// Missing long-wavelength (red) cones, ~1% of males
    Protanopia,
    /// Missing medium-wavelength (green) cones, most common
    Deuteranopia,
    /// Missing short-wavelength (blue) cones, rare
    Tritanopia,
}

impl Deficiency {
    /// All supported deficiency types, in display order
    pub const ALL: [Deficiency; 3] = [
        Deficiency::Protanopia,
        Deficiency::Deuteranopia,
        Deficiency::Tritanopia,
    ];

    /// The simulation matrix for this deficiency (row-major, applied to
    /// an [r, g, b] column vector in 0-255 space)
    fn matrix(&self) -> &'static [[f64; 3]; 3] {
        match self {
            Deficiency::Protanopia => &PROTANOPIA,
            Deficiency::Deuteranopia => &DEUTERANOPIA,
            Deficiency::Tritanopia => &TRITANOPIA,
        }
    }
}

impl fmt::Display for Deficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deficiency::Protanopia => write!(f, "protanopia (red-blind)"),
            Deficiency::Deuteranopia => write!(f, "deuteranopia (green-blind)"),
            Deficiency::Tritanopia => write!(f, "tritanopia (blue-blind)"),
        }
    }
}

const PROTANOPIA: [[f64; 3]; 3] = [
    [0.567, 0.433, 0.0],
    [0.558, 0.442, 0.0],
    [0.0, 0.242, 0.758],
];

const DEUTERANOPIA: [[f64; 3]; 3] = [
    [0.625, 0.375, 0.0],
    [0.70, 0.30, 0.0],
    [0.0, 0.30, 0.70],
];

const TRITANOPIA: [[f64; 3]; 3] = [
    [0.95, 0.05, 0.0],
    [0.0, 0.433, 0.567],
    [0.0, 0.475, 0.525],
];

fn simulate(color: Color, matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    let input = [color.r as f64, color.g as f64, color.b as f64];
    let mut out = [0.0; 3];
    for (i, row) in matrix.iter().enumerate() {
        out[i] = row[0] * input[0] + row[1] * input[1] + row[2] * input[2];
    }
    out
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    (dr * dr + dg * dg + db * db).sqrt()
}

/// How much of a color pair's RGB distance survives simulated dichromacy.
///
/// Returns `distance_after / distance_before`. Identical inputs have no
/// distance to lose, so the ratio is defined as 1.0 there; the operation
/// never divides by zero. Values near 1.0 mean the pair stays as
/// distinguishable as for normal vision; values near 0.0 mean the colors
/// collapse together.
pub fn separation_ratio(a: Color, b: Color, deficiency: Deficiency) -> f64 {
    let before = distance(
        [a.r as f64, a.g as f64, a.b as f64],
        [b.r as f64, b.g as f64, b.b as f64],
    );
    if before == 0.0 {
        return 1.0;
    }
    let matrix = deficiency.matrix();
    let after = distance(simulate(a, matrix), simulate(b, matrix));
    after / before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(hex: &str) -> Color {
        Color::parse(hex).unwrap()
    }

    #[test]
    fn test_identical_colors_are_unity() {
        let c = color("#ff6b35");
        for deficiency in Deficiency::ALL {
            assert_eq!(separation_ratio(c, c, deficiency), 1.0);
        }
    }

    #[test]
    fn test_red_green_collapses_under_protanopia() {
        let red = color("#ff0000");
        let green = color("#00ff00");

        let protan = separation_ratio(red, green, Deficiency::Protanopia);
        assert!((protan - 0.2121).abs() < 0.001, "got {}", protan);
        assert!(protan < 0.3, "red/green should flag under protanopia");

        // Blue-yellow vision is intact: the same pair stays distinguishable
        let tritan = separation_ratio(red, green, Deficiency::Tritanopia);
        assert!((tritan - 0.782).abs() < 0.001, "got {}", tritan);
        assert!(tritan > 0.3);
    }

    #[test]
    fn test_blue_yellow_collapses_most_under_tritanopia() {
        let blue = color("#0000ff");
        let yellow = color("#ffff00");
        let protan = separation_ratio(blue, yellow, Deficiency::Protanopia);
        let tritan = separation_ratio(blue, yellow, Deficiency::Tritanopia);
        assert!(tritan < protan);
    }

    #[test]
    fn test_separation_finite_and_nonnegative() {
        // Near-identical hue, different luminance: must never panic,
        // must stay in [0, inf)
        let a = color("#ff6b35");
        let b = color("#8b7a9b");
        for deficiency in Deficiency::ALL {
            let ratio = separation_ratio(a, b, deficiency);
            assert!(ratio.is_finite());
            assert!(ratio >= 0.0);
        }
    }

    #[test]
    fn test_symmetry() {
        let a = color("#ff5370");
        let b = color("#7fd962");
        for deficiency in Deficiency::ALL {
            assert_eq!(
                separation_ratio(a, b, deficiency),
                separation_ratio(b, a, deficiency)
            );
        }
    }
}
