#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        let mut h = Self(Self::OFFSET_BASIS);
        h.write_u64(seed);
        h
    }

    pub(crate) fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Full-scale 16-bit blend weight.
pub(crate) const W16_ONE: u32 = 65_535;

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `t` in `[0, 1]` as an 8-bit weight.
pub(crate) fn unit_to_w8(t: f32) -> u16 {
    ((t.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16
}

/// `t` in `[0, 1]` as a 16-bit weight.
pub(crate) fn unit_to_w16(t: f32) -> u32 {
    ((f64::from(t.clamp(0.0, 1.0)) * f64::from(W16_ONE)).round() as u32).min(W16_ONE)
}

/// `a * (1 - w) + b * w` with `w` a 16-bit weight, rounded to nearest.
pub(crate) fn lerp_u8_w16(a: u8, b: u8, w: u32) -> u8 {
    let w = w.min(W16_ONE);
    let num = u32::from(a) * (W16_ONE - w) + u32::from(b) * w + W16_ONE / 2;
    (num / W16_ONE) as u8
}

pub(crate) fn smoothstep(a: f32, b: f32, x: f32) -> f32 {
    if x <= a {
        return 0.0;
    }
    if x >= b {
        return 1.0;
    }
    let t = (x - a) / (b - a);
    (t * t * (3.0 - 2.0 * t)).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
