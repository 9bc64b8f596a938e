//! Accessibility of brand colors.
//!
//! - [`hex`]: reading and writing `#RRGGBB` colors.
//! - [`contrast`]: WCAG 2.x relative luminance, contrast ratio and
//!   compliance tiers (AAA, AA, large text).
//! - [`hsl`]: hue, saturation, lightness decomposition.
//! - [`report`]: how a color reads on white and on black.
//!
//! All of it is also available as methods of the [`RGBColor`] trait,
//! implemented for the [`rgb`] crate types [`RGB8`] and [`RGBA8`]
//! (alpha is ignored by the contrast computations).
//!
//! ```
//! use rgb::RGB8;
//! use brand_contrast::{RGBColor, contrast::ComplianceLevel};
//! let brand = RGB8::from_hex("#2B6CB0")?;
//! let white = RGB8::new(255, 255, 255);
//! let res = brand.contrast(&white);
//! assert!(res.passes_aa());
//! assert_eq!(res.level(), ComplianceLevel::AA);
//! # Ok::<(), brand_contrast::ColorError>(())
//! ```

use rgb::{RGB8, RGBA8};

pub mod contrast;
pub mod hex;
pub mod hsl;
pub mod report;

pub use contrast::{Compliance, ComplianceLevel, ContrastResult};
pub use hex::ColorError;
pub use hsl::Hsl;
pub use report::AccessibilityReport;

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color.
    fn to_rgb8(&self) -> RGB8;

    /// Create a color from its red, green and blue components.
    fn from_rgb8(c: RGB8) -> Self;

    /// Replace the red, green and blue components of `self`, keeping
    /// anything else the encoding carries (such as alpha).
    #[inline]
    fn with_rgb8(&self, c: RGB8) -> Self { Self::from_rgb8(c) }

    /// Parse `#RRGGBB` (see [`hex::parse_hex`]).
    #[inline]
    fn from_hex(s: &str) -> Result<Self, ColorError> {
        hex::parse_hex(s).map(Self::from_rgb8)
    }

    /// Format the color as uppercase `#RRGGBB`.
    #[inline]
    fn to_hex(&self) -> String { hex::to_hex(self.to_rgb8()) }

    /// WCAG relative luminance, in \[0, 1\].
    #[inline]
    fn luminance(&self) -> f64 {
        contrast::relative_luminance(self.to_rgb8())
    }

    /// WCAG contrast ratio between `self` and `other`, in \[1, 21\].
    #[inline]
    fn contrast_ratio(&self, other: &impl RGBColor) -> f64 {
        contrast::contrast_ratio(self.to_rgb8(), other.to_rgb8())
    }

    /// Evaluate `self` as text on `background`.
    #[inline]
    fn contrast(&self, background: &impl RGBColor) -> ContrastResult {
        contrast::evaluate(self.to_rgb8(), background.to_rgb8())
    }

    /// Return the HSL decomposition of the color.
    #[inline]
    fn to_hsl(&self) -> Hsl { Hsl::from_rgb(self.to_rgb8()) }

    /// Raise the HSL lightness by `amount` percentage points, keeping
    /// hue and saturation (see [`hsl::lighten`]).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use brand_contrast::RGBColor;
    /// let red = RGB8::new(255, 0, 0);
    /// assert_eq!(red.darken(25).to_hex(), "#800000");
    /// assert_eq!(red.lighten(0), red);
    /// ```
    #[inline]
    fn lighten(&self, amount: u8) -> Self {
        self.with_rgb8(hsl::lighten(self.to_rgb8(), amount))
    }

    /// Lower the HSL lightness by `amount` percentage points.
    #[inline]
    fn darken(&self, amount: u8) -> Self {
        self.with_rgb8(hsl::darken(self.to_rgb8(), amount))
    }

    /// White or black, whichever is more readable on `self` (see
    /// [`AccessibilityReport::best_background`]).
    fn readable_text(&self) -> Self {
        Self::from_rgb8(self.report().best_background().background)
    }

    /// Summary of how the color reads on the reference backgrounds.
    #[inline]
    fn report(&self) -> AccessibilityReport {
        AccessibilityReport::new(self.to_rgb8())
    }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { *self }

    #[inline]
    fn from_rgb8(c: RGB8) -> Self { c }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb8(&self) -> RGB8 { RGB8 { r: self.r, g: self.g, b: self.b } }

    #[inline]
    fn from_rgb8(c: RGB8) -> Self { RGBA8 { r: c.r, g: c.g, b: c.b, a: 255 } }

    #[inline]
    fn with_rgb8(&self, c: RGB8) -> Self {
        RGBA8 { r: c.r, g: c.g, b: c.b, a: self.a }
    }
}
