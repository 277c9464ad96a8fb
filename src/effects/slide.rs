use crate::effects::effect::{ComposeCtx, Effect};
use crate::effects::transitions::Direction;
use crate::foundation::error::SegueResult;
use crate::raster::frame::Frame;

/// The destination slides in along `dir`.
///
/// In cover mode the source stays put underneath; in push mode it is shifted out ahead of the
/// destination by the same offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    /// Direction of travel.
    pub dir: Direction,
    /// Shift the source out together with the incoming destination.
    pub push: bool,
}

impl Effect for Slide {
    fn name(&self) -> &'static str {
        "slide"
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        let (width, height) = (ctx.width(), ctx.height());
        let axis_len = match self.dir {
            Direction::LeftToRight | Direction::RightToLeft => width,
            Direction::TopToBottom | Direction::BottomToTop => height,
        };
        let offset = ((ctx.progress().get() * axis_len as f32).round() as u32).min(axis_len);

        let src = ctx.source();
        let dst = ctx.destination();
        for y in 0..height {
            for x in 0..width {
                // `u` runs along the direction of travel; the destination occupies `u < offset`.
                let u = self.dir.axis_pos(x, y, width, height);
                let (layer, u_from) = if u < offset {
                    (dst, u + axis_len - offset)
                } else if self.push {
                    (src, u - offset)
                } else {
                    (src, u)
                };
                let (sx, sy) = self.dir.from_axis_pos(u_from, x, y, width, height);
                let px = layer.px(layer.index(sx, sy));
                let idx = out.index(x, y);
                out.set_px(idx, px);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/slide.rs"]
mod tests;
