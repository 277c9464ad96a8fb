use crate::foundation::core::Progress;
use crate::foundation::error::{SegueError, SegueResult};
use crate::raster::frame::Frame;

/// Validated inputs of one [`Effect::render`] call.
///
/// Only [`Effect::render`] builds a context, so implementations can rely on both frames sharing
/// the same dimensions and on `progress` being in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct ComposeCtx<'a> {
    source: &'a Frame,
    destination: &'a Frame,
    progress: Progress,
}

impl<'a> ComposeCtx<'a> {
    fn new(source: &'a Frame, destination: &'a Frame, progress: f32) -> SegueResult<Self> {
        let progress = Progress::new(progress)?;
        if source.dimensions() != destination.dimensions() {
            return Err(SegueError::dimension_mismatch(
                source.dimensions(),
                destination.dimensions(),
            ));
        }
        Ok(Self {
            source,
            destination,
            progress,
        })
    }

    /// Frame shown at progress 0.
    pub fn source(&self) -> &'a Frame {
        self.source
    }

    /// Frame shown at progress 1.
    pub fn destination(&self) -> &'a Frame {
        self.destination
    }

    /// Validated progress.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Shared width in pixels.
    pub fn width(&self) -> u32 {
        self.source.width()
    }

    /// Shared height in pixels.
    pub fn height(&self) -> u32 {
        self.source.height()
    }
}

/// A transition style: turns `(source, destination, progress)` into one frame.
///
/// Implementations are stateless apart from immutable configuration. They only implement
/// [`Effect::compose`]; callers use [`Effect::render`], which validates the inputs, allocates a
/// fresh transparent output frame and hands both to `compose`.
pub trait Effect: Send + Sync {
    /// Short stable identifier, e.g. `"dissolve"`.
    fn name(&self) -> &'static str;

    /// Fill `out` (fully transparent, same dimensions as the inputs) for `ctx`.
    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()>;

    /// Render the transition state at `progress`.
    ///
    /// Fails with [`SegueError::InvalidProgress`] when `progress` is non-finite or outside
    /// `[0, 1]`, with [`SegueError::DimensionMismatch`] when the frames differ in size, and with
    /// [`SegueError::Allocation`] when the output buffer cannot be reserved. Inputs are never
    /// modified and no partial frame is ever returned.
    #[tracing::instrument(
        level = "trace",
        skip_all,
        fields(effect = self.name(), progress = progress)
    )]
    fn render(&self, source: &Frame, destination: &Frame, progress: f32) -> SegueResult<Frame> {
        let ctx = ComposeCtx::new(source, destination, progress)?;
        let mut out = Frame::transparent(ctx.width(), ctx.height())?;
        self.compose(&ctx, &mut out)?;
        Ok(out)
    }
}

impl<E: Effect + ?Sized> Effect for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        (**self).compose(ctx, out)
    }
}

impl<E: Effect + ?Sized> Effect for &E {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        (**self).compose(ctx, out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/effect.rs"]
mod tests;
