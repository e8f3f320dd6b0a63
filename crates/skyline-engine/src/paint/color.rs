/// Premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are multiplied by `a` (premultiplied alpha).
///
/// Artwork palettes are written as `0xRRGGBB` literals; build colors from them
/// with [`Color::hex`] and derive shading variants with [`Color::shade`].
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    #[inline]
    pub const fn white() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub fn hex(rgb: u32) -> Self {
        Self::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// Creates a color from a `0xRRGGBB` literal and straight alpha in `[0, 1]`.
    #[inline]
    pub fn hex_alpha(rgb: u32, a: f32) -> Self {
        Self::hex(rgb).with_alpha(a)
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Same hue with a new straight alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        let (r, g, b, _) = self.to_straight();
        Self::from_straight(r, g, b, a)
    }

    /// Lightens (`amount > 0`) towards white or darkens (`amount < 0`) towards black.
    ///
    /// `amount` is clamped to `[-1, 1]`; alpha is preserved.
    pub fn shade(self, amount: f32) -> Self {
        let t = amount.clamp(-1.0, 1.0);
        let (r, g, b, a) = self.to_straight();
        let mix = |c: f32| if t >= 0.0 { c + (1.0 - c) * t } else { c * (1.0 + t) };
        Self::from_straight(mix(r), mix(g), mix(b), a)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Straight-alpha bytes, rounded. Used when handing colors to pixel backends.
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(r), q(g), q(b), q(a)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(Color::hex(0xff8000).to_srgb_u8(), [255, 128, 0, 255]);
    }

    #[test]
    fn with_alpha_premultiplies() {
        let c = Color::hex(0xffffff).with_alpha(0.5);
        assert_eq!(c.a, 0.5);
        assert_eq!(c.r, 0.5);
    }

    #[test]
    fn shade_moves_towards_white_and_black() {
        let base = Color::hex(0x808080);
        assert!(base.shade(0.5).r > base.r);
        assert!(base.shade(-0.5).r < base.r);
        assert_eq!(base.shade(1.0).to_srgb_u8(), [255, 255, 255, 255]);
        assert_eq!(base.shade(-1.0).to_srgb_u8(), [0, 0, 0, 255]);
    }
}
