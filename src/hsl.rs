//! Hue, saturation, lightness.

use rgb::RGB8;

/// A color in the HSL cylinder, rounded to whole units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hsl {
    /// Hue in degrees, in \[0, 360).
    pub hue: u16,
    /// Saturation in percent, in \[0, 100\].
    pub saturation: u8,
    /// Lightness in percent, in \[0, 100\].
    pub lightness: u8,
}

impl Hsl {
    /// Decompose `c`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use brand_contrast::hsl::Hsl;
    /// let hsl = Hsl::from_rgb(RGB8::new(0, 255, 0));
    /// assert_eq!((hsl.hue, hsl.saturation, hsl.lightness), (120, 100, 50));
    /// ```
    pub fn from_rgb(c: RGB8) -> Hsl {
        let (h, s, l) = to_hsl_f64(c);
        // A hue just below 1 rounds to 360°, which is 0°.
        let hue = (h * 360.).round() as u16 % 360;
        Hsl { hue,
              saturation: (s * 100.).round() as u8,
              lightness: (l * 100.).round() as u8 }
    }

    /// Convert back to RGB.  Channels are rounded to the nearest
    /// integer, so `Hsl::from_rgb(c).to_rgb()` is close to, but not
    /// always equal to, `c`.
    pub fn to_rgb(&self) -> RGB8 {
        from_hsl_f64((self.hue % 360) as f64 / 360.,
                     self.saturation.min(100) as f64 / 100.,
                     self.lightness.min(100) as f64 / 100.)
    }

    /// Same hue and saturation, lightness raised by `amount`
    /// percentage points (up to 100).
    #[inline]
    pub fn lighten(self, amount: u8) -> Hsl {
        let lightness = self.lightness.saturating_add(amount).min(100);
        Hsl { lightness, ..self }
    }

    /// Same hue and saturation, lightness lowered by `amount`
    /// percentage points (down to 0).
    #[inline]
    pub fn darken(self, amount: u8) -> Hsl {
        Hsl { lightness: self.lightness.saturating_sub(amount), ..self }
    }
}

/// Raise the HSL lightness of `c` by `amount` percentage points (up
/// to 100), keeping its exact hue and saturation.  `lighten(c, 0)` is
/// `c`.
#[inline]
pub fn lighten(c: RGB8, amount: u8) -> RGB8 {
    shift_lightness(c, amount as f64 / 100.)
}

/// Lower the HSL lightness of `c` by `amount` percentage points (down
/// to 0), keeping its exact hue and saturation.
#[inline]
pub fn darken(c: RGB8, amount: u8) -> RGB8 {
    shift_lightness(c, -(amount as f64) / 100.)
}

fn shift_lightness(c: RGB8, dl: f64) -> RGB8 {
    let (h, s, l) = to_hsl_f64(c);
    from_hsl_f64(h, s, (l + dl).clamp(0., 1.))
}

/// Unrounded HSL of `c`: hue in turns, in \[0, 1), saturation and
/// lightness in \[0, 1\].
fn to_hsl_f64(c: RGB8) -> (f64, f64, f64) {
    let r = c.r as f64 / 255.;
    let g = c.g as f64 / 255.;
    let b = c.b as f64 / 255.;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.;
    if delta == 0. { return (0., 0., l) }
    let s = if l > 0.5 { delta / (2. - max - min) }
            else { delta / (max + min) };
    let h = {
        if max == r { (g - b) / delta + if g < b { 6. } else { 0. } }
        else if max == g { (b - r) / delta + 2. }
        else { (r - g) / delta + 4. } };
    (h / 6., s, l)
}

fn from_hsl_f64(h: f64, s: f64, l: f64) -> RGB8 {
    let channel = |x: f64| (255. * x).round() as u8;
    if s == 0. {
        let v = channel(l);
        return RGB8::new(v, v, v)
    }
    let q = if l < 0.5 { l * (1. + s) } else { l + s - l * s };
    let p = 2. * l - q;
    RGB8::new(channel(hue_to_rgb(p, q, h + 1. / 3.)),
              channel(hue_to_rgb(p, q, h)),
              channel(hue_to_rgb(p, q, h - 1. / 3.)))
}

/// One channel of the HSL → RGB conversion; `t` is the hue shifted
/// for that channel, in turns.
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.);
    if t < 1. / 6. { p + (q - p) * 6. * t }
    else if t < 1. / 2. { q }
    else if t < 2. / 3. { p + (q - p) * (2. / 3. - t) * 6. }
    else { p }
}
