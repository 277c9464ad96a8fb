use crate::effects::effect::{ComposeCtx, Effect};
use crate::foundation::error::SegueResult;
use crate::raster::frame::Frame;

/// Pixelate the source out, then the destination back in.
///
/// Block size grows from 1 to `max_block` over the first half of the transition while the source
/// is shown, and shrinks back to 1 over the second half while the destination is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pixelate {
    /// Largest block edge in pixels, reached at progress 0.5.
    pub max_block: u32,
}

impl Default for Pixelate {
    fn default() -> Self {
        Self { max_block: 24 }
    }
}

impl Pixelate {
    /// Block edge in pixels at progress `t`, together with whether the destination is shown.
    pub(crate) fn block_at(&self, t: f32) -> (u32, bool) {
        let show_dst = t >= 0.5;
        let strength = if show_dst { 2.0 * (1.0 - t) } else { 2.0 * t };
        let extra = self.max_block.max(1) - 1;
        let grown = ((extra as f32) * strength.clamp(0.0, 1.0)).round() as u32;
        let block = grown.saturating_add(1);
        (block, show_dst)
    }
}

impl Effect for Pixelate {
    fn name(&self) -> &'static str {
        "pixelate"
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        let (block, show_dst) = self.block_at(ctx.progress().get());
        let layer = if show_dst {
            ctx.destination()
        } else {
            ctx.source()
        };
        let (width, height) = (ctx.width(), ctx.height());

        if block <= 1 {
            out.data_mut().copy_from_slice(layer.as_bytes());
            return Ok(());
        }

        for by in (0..height).step_by(block as usize) {
            for bx in (0..width).step_by(block as usize) {
                let x_end = bx.saturating_add(block).min(width);
                let y_end = by.saturating_add(block).min(height);

                let mut sum = [0u64; 4];
                let mut count = 0u64;
                for y in by..y_end {
                    for x in bx..x_end {
                        let px = layer.px(layer.index(x, y));
                        for (s, c) in sum.iter_mut().zip(px) {
                            *s += u64::from(c);
                        }
                        count += 1;
                    }
                }

                let avg = sum.map(|s| ((s + count / 2) / count) as u8);
                for y in by..y_end {
                    for x in bx..x_end {
                        let idx = out.index(x, y);
                        out.set_px(idx, avg);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/pixelate.rs"]
mod tests;
