use crate::foundation::error::{SegueError, SegueResult};
use crate::foundation::math::{unit_to_w8, unit_to_w16};

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque color from straight channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Undo premultiplication. Fully transparent pixels map to `[0, 0, 0, 0]`.
    pub fn to_straight_rgba(self) -> [u8; 4] {
        fn unpremul(c: u8, a: u8) -> u8 {
            let c = u32::from(c);
            let a = u32::from(a);
            ((c * 255 + a / 2) / a).min(255) as u8
        }

        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        [
            unpremul(self.r, self.a),
            unpremul(self.g, self.a),
            unpremul(self.b, self.a),
            self.a,
        ]
    }

    /// Channels in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Inverse of [`Rgba8Premul::to_array`].
    pub fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// `true` when every color channel is `<= a`, i.e. the value is a valid premultiplied pixel.
    pub fn is_valid(self) -> bool {
        self.r <= self.a && self.g <= self.a && self.b <= self.a
    }
}

/// Transition completion fraction in `[0, 1]`.
///
/// `0.0` means "fully source", `1.0` means "fully destination". Out-of-range and non-finite
/// values are rejected rather than clamped.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Progress(f32);

impl Progress {
    /// Start of a transition.
    pub const START: Self = Self(0.0);
    /// End of a transition.
    pub const END: Self = Self(1.0);

    /// Validate `value`.
    pub fn new(value: f32) -> SegueResult<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(SegueError::InvalidProgress(value));
        }
        Ok(Self(value))
    }

    /// Raw value.
    pub fn get(self) -> f32 {
        self.0
    }

    pub(crate) fn w8(self) -> u16 {
        unit_to_w8(self.0)
    }

    pub(crate) fn w16(self) -> u32 {
        unit_to_w16(self.0)
    }
}

impl TryFrom<f32> for Progress {
    type Error = SegueError;

    fn try_from(value: f32) -> SegueResult<Self> {
        Self::new(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
