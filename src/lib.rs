//! segue renders the in-between frames of an image transition.
//!
//! Given a source [`Frame`], a destination [`Frame`] of the same size and a progress value in
//! `[0, 1]`, an [`Effect`] produces one new frame showing the transition at that point:
//! progress `0` reproduces the source, progress `1` reproduces the destination.
//!
//! # Model
//!
//! - **Frames** are premultiplied RGBA8 end-to-end. Constructors normalize straight alpha, RGB
//!   without alpha and decoded `image` buffers on the way in.
//! - **Effects** are stateless: [`Effect::render`] validates its inputs, allocates a fresh frame
//!   and never touches the inputs, so one effect can be shared across threads.
//! - **Errors** are explicit: mismatched sizes, out-of-range progress and failed allocations come
//!   back as [`SegueError`] values; no partial frame is ever returned.
//!
//! Built-in effects are [`AlphaDissolve`], [`Wipe`], [`Slide`], [`Pixelate`] and
//! [`TileDissolve`], selectable at runtime through [`EffectSpec`] / [`parse_effect`].
//! [`render_sequence`] samples a whole transition for offline tools; timing and display are left
//! to the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod raster;
mod render;

pub use animation::ease::Ease;
pub use effects::dissolve::{AlphaDissolve, DissolveMode};
pub use effects::effect::{ComposeCtx, Effect};
pub use effects::pixelate::Pixelate;
pub use effects::slide::Slide;
pub use effects::tiles::TileDissolve;
pub use effects::transitions::{
    Direction, EffectKind, EffectSpec, parse_effect, parse_effect_kind_params,
};
pub use effects::wipe::Wipe;
pub use foundation::core::{Progress, Rgba8Premul};
pub use foundation::error::{SegueError, SegueResult};
pub use raster::convert::PixelLayout;
pub use raster::frame::Frame;
pub use render::sequence::{SequenceOpts, progress_at, render_sequence};
