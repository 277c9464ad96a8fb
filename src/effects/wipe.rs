use crate::effects::composite::crossfade;
use crate::effects::effect::{ComposeCtx, Effect};
use crate::effects::transitions::Direction;
use crate::foundation::error::SegueResult;
use crate::foundation::math::smoothstep;
use crate::raster::frame::Frame;

/// A moving edge reveals the destination behind it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wipe {
    /// Direction the edge travels in.
    pub dir: Direction,
    /// Width of the blended band around the edge, as a fraction of the axis length.
    pub soft_edge: f32,
}

impl Default for Wipe {
    fn default() -> Self {
        Self {
            dir: Direction::LeftToRight,
            soft_edge: 0.0,
        }
    }
}

impl Effect for Wipe {
    fn name(&self) -> &'static str {
        "wipe"
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        let (width, height) = (ctx.width(), ctx.height());
        let t = ctx.progress().get();
        let soft_edge = if self.soft_edge.is_finite() {
            self.soft_edge.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let axis_len = match self.dir {
            Direction::LeftToRight | Direction::RightToLeft => width as f32,
            Direction::TopToBottom | Direction::BottomToTop => height as f32,
        };
        let soft_px = soft_edge * axis_len;

        // The edge starts one soft band before the axis and ends one band past it, so both
        // endpoints are pure source / pure destination.
        let edge = t * (axis_len + 2.0 * soft_px) - soft_px;
        let a_edge = edge - soft_px;
        let b_edge = edge + soft_px;

        let src = ctx.source();
        let dst = ctx.destination();
        for y in 0..height {
            for x in 0..width {
                let pos = match self.dir {
                    Direction::LeftToRight => x as f32,
                    Direction::RightToLeft => (width - 1 - x) as f32,
                    Direction::TopToBottom => y as f32,
                    Direction::BottomToTop => (height - 1 - y) as f32,
                };

                let m = if soft_px <= 0.0 {
                    if pos < edge { 1.0 } else { 0.0 }
                } else {
                    1.0 - smoothstep(a_edge, b_edge, pos)
                };

                let idx = out.index(x, y);
                out.set_px(idx, crossfade(src.px(idx), dst.px(idx), m));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/wipe.rs"]
mod tests;
