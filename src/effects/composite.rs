//! Per-pixel compositing operators on premultiplied RGBA8.

use crate::foundation::error::{SegueError, SegueResult};
use crate::foundation::math::{W16_ONE, lerp_u8_w16, mul_div255_u8, unit_to_w16};

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over with an 8-bit opacity multiplier (`0..=255`).
pub(crate) fn over_w8(dst: PremulRgba8, src: PremulRgba8, op: u16) -> PremulRgba8 {
    let op = op.min(255);
    if op == 0 || src[3] == 0 {
        return dst;
    }

    let sa = mul_div255(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = add_sat_u8(sa, mul_div255(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255(u16::from(src[i]), op);
        let dc = mul_div255(u16::from(dst[i]), inv);
        out[i] = add_sat_u8(sc, dc);
    }
    out
}

/// `a * (1 - t) + b * t` on every premultiplied channel, alpha included.
pub(crate) fn crossfade(a: PremulRgba8, b: PremulRgba8, t: f32) -> PremulRgba8 {
    crossfade_w16(a, b, unit_to_w16(t))
}

pub(crate) fn crossfade_w16(a: PremulRgba8, b: PremulRgba8, w: u32) -> PremulRgba8 {
    if w == 0 {
        return a;
    }
    if w >= W16_ONE {
        return b;
    }
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = lerp_u8_w16(a[i], b[i], w);
    }
    out
}

/// Composite `src` over `dst` in place with an 8-bit opacity multiplier.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8], op: u16) -> SegueResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SegueError::validation(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over_w8([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], op);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Blend a weighted layer into `dst`: `dst * (1 - w) + src * w`.
///
/// Unlike [`over_in_place`], the background is attenuated by the layer weight rather than by the
/// layer's own coverage, so complementary weights always sum to the full layer.
pub(crate) fn mix_in_place(dst: &mut [u8], src: &[u8], w: u32) -> SegueResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SegueError::validation(
            "mix_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = crossfade_w16([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], w);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    mul_div255_u8(x, y)
}

fn add_sat_u8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
