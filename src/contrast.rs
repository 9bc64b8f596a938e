//! WCAG 2.x relative luminance, contrast ratio and compliance tiers.
//!
//! The contrast ratio of two colors is
//! (`L_lighter` + 0.05) / (`L_darker` + 0.05) where `L` is the
//! relative luminance.  It ranges from 1 (same luminance) to 21
//! (black against white).

use std::fmt;
use rgb::RGB8;

/// Minimum ratio for normal text at level AA.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for large text (18pt+, or 14pt+ bold) at level AA.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for large text at level AAA.
pub const AAA_LARGE: f64 = 4.5;

/// Linearize an sRGB channel.  The 0.03928 cut-off is the one written
/// in WCAG 2.x.
#[inline]
fn linearize(c: u8) -> f64 {
    let c = c as f64 / 255.;
    if c <= 0.03928 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) }
}

/// Relative luminance of `c`, in \[0, 1\].
///
/// L = 0.2126 R + 0.7152 G + 0.0722 B on linearized channels.
pub fn relative_luminance(c: RGB8) -> f64 {
    0.2126 * linearize(c.r) + 0.7152 * linearize(c.g)
        + 0.0722 * linearize(c.b)
}

/// Contrast ratio between `fg` and `bg`, in \[1, 21\].  The order of
/// the arguments does not matter.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use brand_contrast::contrast::contrast_ratio;
/// let black = RGB8::new(0, 0, 0);
/// let white = RGB8::new(255, 255, 255);
/// assert!((contrast_ratio(black, white) - 21.).abs() < 1e-6);
/// ```
pub fn contrast_ratio(fg: RGB8, bg: RGB8) -> f64 {
    let l_fg = relative_luminance(fg);
    let l_bg = relative_luminance(bg);
    let (lighter, darker) = if l_fg >= l_bg { (l_fg, l_bg) }
                            else { (l_bg, l_fg) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Highest WCAG tier reached by a contrast ratio.
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComplianceLevel {
    /// Normal text at level AAA (ratio ≥ 7).
    AAA,
    /// Normal text at level AA (ratio ≥ 4.5).
    AA,
    /// Only large text at level AA (ratio ≥ 3).
    AALarge,
    /// Only large text at level AAA (ratio ≥ 4.5).  Never returned by
    /// [`ComplianceLevel::from_ratio`]: any such ratio is already [`AA`].
    ///
    /// [`AA`]: ComplianceLevel::AA
    AAALarge,
    /// Below every threshold.
    Fail,
}

impl ComplianceLevel {
    /// Classify `ratio`.  Tiers are tried from the most demanding
    /// down and the first one reached wins.
    pub fn from_ratio(ratio: f64) -> Self {
        use ComplianceLevel::*;
        if ratio >= AAA_NORMAL { AAA }
        else if ratio >= AA_NORMAL { AA }
        else if ratio >= AA_LARGE { AALarge }
        // Shadowed by the AA test above; kept so the tier order stays
        // the one stored with existing brand colors.
        else if ratio >= AAA_LARGE { AAALarge }
        else { Fail }
    }

    /// The label used when displaying or storing the level.
    pub fn as_str(self) -> &'static str {
        use ComplianceLevel::*;
        match self {
            AAA => "AAA",
            AA => "AA",
            AALarge => "AA (18pt+)",
            AAALarge => "AAA (18pt+)",
            Fail => "Fail",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ComplianceLevel {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

/// The WCAG checks passed by a contrast ratio.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Compliance {
    pub level: ComplianceLevel,
    pub passes_aa: bool,
    pub passes_aaa: bool,
    pub passes_aa_large: bool,
    pub passes_aaa_large: bool,
}

/// Return the WCAG checks passed by `ratio`.
///
/// # Example
///
/// ```
/// use brand_contrast::contrast::{compliance_level, ComplianceLevel};
/// let c = compliance_level(5.2);
/// assert_eq!(c.level, ComplianceLevel::AA);
/// assert!(c.passes_aa && !c.passes_aaa);
/// ```
pub fn compliance_level(ratio: f64) -> Compliance {
    Compliance {
        level: ComplianceLevel::from_ratio(ratio),
        passes_aa: ratio >= AA_NORMAL,
        passes_aaa: ratio >= AAA_NORMAL,
        passes_aa_large: ratio >= AA_LARGE,
        passes_aaa_large: ratio >= AAA_LARGE,
    }
}

/// Contrast of a foreground color against `background`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ContrastResult {
    #[cfg_attr(feature = "serde",
               serde(serialize_with = "crate::hex::serialize"))]
    pub background: RGB8,
    pub ratio: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub compliance: Compliance,
}

impl ContrastResult {
    /// The highest tier reached.
    #[inline]
    pub fn level(&self) -> ComplianceLevel { self.compliance.level }

    /// Ratio ≥ 4.5: normal text at AA.
    #[inline]
    pub fn passes_aa(&self) -> bool { self.compliance.passes_aa }

    /// Ratio ≥ 7: normal text at AAA.
    #[inline]
    pub fn passes_aaa(&self) -> bool { self.compliance.passes_aaa }

    /// Ratio ≥ 3: large text at AA.
    #[inline]
    pub fn passes_aa_large(&self) -> bool { self.compliance.passes_aa_large }

    /// Ratio ≥ 4.5: large text at AAA.
    #[inline]
    pub fn passes_aaa_large(&self) -> bool {
        self.compliance.passes_aaa_large
    }
}

/// Evaluate `fg` as text on `bg`.
pub fn evaluate(fg: RGB8, bg: RGB8) -> ContrastResult {
    let ratio = contrast_ratio(fg, bg);
    ContrastResult { background: bg, ratio, compliance: compliance_level(ratio) }
}


#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BLACK: RGB8 = RGB8::new(0, 0, 0);
    const WHITE: RGB8 = RGB8::new(255, 255, 255);

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() < eps }

    #[test]
    fn luminance_extremes() {
        assert_eq!(relative_luminance(BLACK), 0.);
        let l = relative_luminance(WHITE);
        assert!(approx_eq(l, 1., 1e-12), "white luminance: {l}");
    }

    #[test]
    fn luminance_primaries() {
        let red = relative_luminance(RGB8::new(255, 0, 0));
        let green = relative_luminance(RGB8::new(0, 255, 0));
        let blue = relative_luminance(RGB8::new(0, 0, 255));
        assert!(approx_eq(red, 0.2126, 1e-12), "red: {red}");
        assert!(approx_eq(green, 0.7152, 1e-12), "green: {green}");
        assert!(approx_eq(blue, 0.0722, 1e-12), "blue: {blue}");
    }

    #[test]
    fn linear_segment() {
        // 10/255 ≈ 0.0392 is just below the cut-off.
        let l = relative_luminance(RGB8::new(10, 10, 10));
        assert!(approx_eq(l, 10. / 255. / 12.92, 1e-15), "{l}");
    }

    #[test]
    fn black_on_white_is_21() {
        assert!(approx_eq(contrast_ratio(BLACK, WHITE), 21., 1e-6));
        assert!(approx_eq(contrast_ratio(WHITE, BLACK), 21., 1e-6));
    }

    #[test]
    fn known_ratios() {
        // #767676 is the lightest gray passing AA on white.
        let r = contrast_ratio(RGB8::new(0x76, 0x76, 0x76), WHITE);
        assert!(approx_eq(r, 4.54, 0.01), "{r}");
        let r = contrast_ratio(RGB8::new(255, 0, 0), WHITE);
        assert!(approx_eq(r, 4.0, 0.01), "{r}");
    }

    #[test]
    fn thresholds() {
        assert!(compliance_level(4.5).passes_aa);
        assert!(!compliance_level(4.49).passes_aa);
        assert!(compliance_level(7.0).passes_aaa);
        assert!(!compliance_level(6.99).passes_aaa);
        assert!(compliance_level(3.0).passes_aa_large);
        assert!(!compliance_level(2.99).passes_aa_large);
        assert!(compliance_level(4.5).passes_aaa_large);
        assert!(!compliance_level(4.49).passes_aaa_large);
    }

    #[test]
    fn tiers() {
        use ComplianceLevel::*;
        assert_eq!(ComplianceLevel::from_ratio(21.), AAA);
        assert_eq!(ComplianceLevel::from_ratio(7.), AAA);
        assert_eq!(ComplianceLevel::from_ratio(6.99), AA);
        assert_eq!(ComplianceLevel::from_ratio(4.5), AA);
        assert_eq!(ComplianceLevel::from_ratio(4.49), AALarge);
        assert_eq!(ComplianceLevel::from_ratio(3.), AALarge);
        assert_eq!(ComplianceLevel::from_ratio(2.99), Fail);
        assert_eq!(ComplianceLevel::from_ratio(1.), Fail);
        assert_eq!(ComplianceLevel::from_ratio(f64::NAN), Fail);
    }

    #[test]
    fn labels() {
        use ComplianceLevel::*;
        let labels: Vec<_> = [AAA, AA, AALarge, AAALarge, Fail].iter()
            .map(|l| l.to_string()).collect();
        assert_eq!(labels, ["AAA", "AA", "AA (18pt+)", "AAA (18pt+)", "Fail"]);
    }

    #[test]
    fn evaluate_keeps_background() {
        let fg = RGB8::new(0x33, 0x33, 0x33);
        let res = evaluate(fg, WHITE);
        assert_eq!(res.background, WHITE);
        assert_eq!(res.ratio, contrast_ratio(fg, WHITE));
        assert_eq!(res.level(), ComplianceLevel::AAA);
        assert!(res.passes_aa() && res.passes_aaa());
        assert!(res.passes_aa_large() && res.passes_aaa_large());
    }

    fn arb_color() -> impl Strategy<Value = RGB8> {
        any::<[u8; 3]>().prop_map(|[r, g, b]| RGB8::new(r, g, b))
    }

    proptest! {
        #[test]
        fn ratio_is_symmetric(a in arb_color(), b in arb_color()) {
            prop_assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
        }

        #[test]
        fn ratio_is_bounded(a in arb_color(), b in arb_color()) {
            let r = contrast_ratio(a, b);
            prop_assert!((1. ..= 21. + 1e-9).contains(&r), "{}", r);
        }

        #[test]
        fn ratio_with_itself_is_one(a in arb_color()) {
            prop_assert_eq!(contrast_ratio(a, a), 1.);
        }

        #[test]
        fn luminance_in_unit_interval(a in arb_color()) {
            let l = relative_luminance(a);
            prop_assert!((0. ..= 1. + 1e-12).contains(&l), "{}", l);
        }

        #[test]
        fn aaa_large_tier_never_chosen(r in 1f64 ..= 21.) {
            prop_assert_ne!(ComplianceLevel::from_ratio(r),
                            ComplianceLevel::AAALarge);
        }
    }
}
