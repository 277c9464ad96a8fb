use crate::effects::composite::{mix_in_place, over_in_place};
use crate::effects::effect::{ComposeCtx, Effect};
use crate::foundation::error::SegueResult;
use crate::foundation::math::W16_ONE;
use crate::raster::frame::Frame;

/// How the two layers of an [`AlphaDissolve`] are combined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DissolveMode {
    /// The destination is laid down first, then the source is mixed in with weight
    /// `1 - progress`, attenuating the destination to weight `progress`.
    ///
    /// Every premultiplied channel, alpha included, ends up at
    /// `destination * progress + source * (1 - progress)`.
    #[default]
    Weighted,
    /// Destination source-over a transparent frame at opacity `progress`, then source source-over
    /// the result at opacity `1 - progress`.
    ///
    /// Opaque inputs lose coverage mid-transition (alpha `1 - p + p^2`).
    Over,
}

/// Cross-dissolve: the source fades out while the destination fades in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlphaDissolve {
    /// Layer combination rule.
    pub mode: DissolveMode,
}

impl AlphaDissolve {
    /// Dissolve using `mode`.
    pub fn new(mode: DissolveMode) -> Self {
        Self { mode }
    }
}

impl Effect for AlphaDissolve {
    fn name(&self) -> &'static str {
        "dissolve"
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        let dst = ctx.destination().as_bytes();
        let src = ctx.source().as_bytes();
        match self.mode {
            DissolveMode::Weighted => {
                let src_weight = W16_ONE - ctx.progress().w16();
                out.data_mut().copy_from_slice(dst);
                mix_in_place(out.data_mut(), src, src_weight)
            }
            DissolveMode::Over => {
                let dst_op = ctx.progress().w8();
                over_in_place(out.data_mut(), dst, dst_op)?;
                over_in_place(out.data_mut(), src, 255 - dst_op)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/dissolve.rs"]
mod tests;
