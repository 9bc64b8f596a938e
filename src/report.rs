//! Accessibility summary of a brand color.

use rgb::RGB8;
use crate::contrast::{self, ContrastResult};
use crate::hsl::Hsl;

/// Reference background `#FFFFFF`.
pub const WHITE: RGB8 = RGB8::new(255, 255, 255);
/// Reference background `#000000`.
pub const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// What is stored alongside a brand color: its decompositions and how
/// it reads as text on the reference backgrounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AccessibilityReport {
    #[cfg_attr(feature = "serde",
               serde(serialize_with = "crate::hex::serialize"))]
    pub color: RGB8,
    pub hsl: Hsl,
    pub luminance: f64,
    pub on_white: ContrastResult,
    pub on_black: ContrastResult,
}

impl AccessibilityReport {
    /// Build the report of `color`.
    ///
    /// # Example
    ///
    /// ```
    /// use brand_contrast::{hex::parse_hex, report::AccessibilityReport};
    /// use brand_contrast::contrast::ComplianceLevel;
    /// let r = AccessibilityReport::new(parse_hex("#1A365D")?);
    /// assert_eq!(r.on_white.level(), ComplianceLevel::AAA);
    /// assert_eq!(r.on_black.level(), ComplianceLevel::Fail);
    /// # Ok::<(), brand_contrast::ColorError>(())
    /// ```
    pub fn new(color: RGB8) -> Self {
        AccessibilityReport {
            color,
            hsl: Hsl::from_rgb(color),
            luminance: contrast::relative_luminance(color),
            on_white: contrast::evaluate(color, WHITE),
            on_black: contrast::evaluate(color, BLACK),
        }
    }

    /// Evaluate `color` against each of `backgrounds`, in order.
    pub fn against<'a>(color: RGB8,
                       backgrounds: impl IntoIterator<Item = &'a RGB8>)
                       -> Vec<ContrastResult> {
        backgrounds.into_iter().map(|&bg| contrast::evaluate(color, bg))
            .collect()
    }

    /// The reference background giving the higher contrast (black on
    /// ties).
    pub fn best_background(&self) -> &ContrastResult {
        if self.on_white.ratio > self.on_black.ratio { &self.on_white }
        else { &self.on_black }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::ComplianceLevel::*;

    #[test]
    fn dark_navy() {
        let navy = RGB8::new(0x1A, 0x36, 0x5D);
        let r = AccessibilityReport::new(navy);
        assert_eq!(r.color, navy);
        assert_eq!(r.hsl, Hsl::from_rgb(navy));
        assert_eq!(r.on_white.background, WHITE);
        assert_eq!(r.on_black.background, BLACK);
        assert_eq!(r.on_white.level(), AAA);
        assert_eq!(r.on_black.level(), Fail);
        assert_eq!(r.best_background().background, WHITE);
    }

    #[test]
    fn white_and_black_ratios_multiply_to_21() {
        // (1.05 / (L + 0.05)) * ((L + 0.05) / 0.05) = 21
        let c = RGB8::new(0x4F, 0xD1, 0xC5);
        let r = AccessibilityReport::new(c);
        let product = r.on_white.ratio * r.on_black.ratio;
        assert!((product - 21.).abs() < 1e-9, "{product}");
    }

    #[test]
    fn against_keeps_order() {
        let c = RGB8::new(0x80, 0x80, 0x80);
        let bgs = [WHITE, RGB8::new(0x80, 0x80, 0x80), BLACK];
        let res = AccessibilityReport::against(c, &bgs);
        assert_eq!(res.len(), 3);
        for (r, bg) in res.iter().zip(&bgs) {
            assert_eq!(r.background, *bg);
        }
        assert_eq!(res[1].ratio, 1.);
        assert_eq!(res[1].level(), Fail);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_colors_as_hex() {
        let r = AccessibilityReport::new(BLACK);
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["color"], "#000000");
        assert_eq!(v["hsl"]["lightness"], 0);
        assert_eq!(v["on_white"]["background"], "#FFFFFF");
        assert_eq!(v["on_white"]["level"], "AAA");
        assert_eq!(v["on_white"]["passes_aa"], true);
        assert_eq!(v["on_black"]["level"], "Fail");
    }
}
