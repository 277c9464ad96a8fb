use rayon::prelude::*;

use crate::animation::ease::Ease;
use crate::effects::effect::Effect;
use crate::foundation::core::Progress;
use crate::foundation::error::{SegueError, SegueResult};
use crate::raster::frame::Frame;

/// Sampling and threading controls for [`render_sequence`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SequenceOpts {
    /// Number of frames to produce, first at progress 0 and last at progress 1.
    pub frames: u32,
    /// Curve applied to the evenly spaced samples.
    #[serde(default)]
    pub ease: Ease,
    /// Render frames on a dedicated rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Worker thread count for the parallel path. `None` uses rayon defaults.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for SequenceOpts {
    fn default() -> Self {
        Self {
            frames: 30,
            ease: Ease::Linear,
            parallel: false,
            threads: None,
        }
    }
}

/// Progress of frame `index` out of `count` evenly spaced samples, reshaped by `ease`.
///
/// A single-frame sequence is the finished transition.
pub fn progress_at(index: u32, count: u32, ease: Ease) -> SegueResult<Progress> {
    if count == 0 {
        return Err(SegueError::validation("sequence frame count must be >= 1"));
    }
    if index >= count {
        return Err(SegueError::validation(format!(
            "frame index {index} out of range for {count} frames"
        )));
    }
    if count == 1 {
        return Ok(Progress::END);
    }
    let t = f64::from(index) / f64::from(count - 1);
    Progress::new(ease.apply(t) as f32)
}

/// Render `opts.frames` frames of `effect` from `source` to `destination`.
///
/// Frames come back in index order. The parallel path produces the same pixels as the sequential
/// one; each worker simply calls [`Effect::render`].
#[tracing::instrument(skip(effect, source, destination), fields(effect = effect.name()))]
pub fn render_sequence(
    effect: &dyn Effect,
    source: &Frame,
    destination: &Frame,
    opts: &SequenceOpts,
) -> SegueResult<Vec<Frame>> {
    if opts.frames == 0 {
        return Err(SegueError::validation("sequence frame count must be >= 1"));
    }
    let progresses = (0..opts.frames)
        .map(|i| progress_at(i, opts.frames, opts.ease))
        .collect::<SegueResult<Vec<_>>>()?;

    if !opts.parallel {
        let mut out = Vec::with_capacity(progresses.len());
        for p in progresses {
            out.push(effect.render(source, destination, p.get())?);
        }
        return Ok(out);
    }

    let pool = build_thread_pool(opts.threads)?;
    tracing::debug!(
        frames = opts.frames,
        threads = pool.current_num_threads(),
        "rendering sequence in parallel"
    );
    let rendered = pool.install(|| {
        progresses
            .par_iter()
            .map(|p| effect.render(source, destination, p.get()))
            .collect::<Vec<_>>()
    });
    rendered.into_iter().collect()
}

fn build_thread_pool(threads: Option<usize>) -> SegueResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SegueError::validation(
            "sequence 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SegueError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
