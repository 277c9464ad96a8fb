use crate::effects::dissolve::{AlphaDissolve, DissolveMode};
use crate::effects::effect::{ComposeCtx, Effect};
use crate::effects::pixelate::Pixelate;
use crate::effects::slide::Slide;
use crate::effects::tiles::TileDissolve;
use crate::effects::wipe::Wipe;
use crate::foundation::error::{SegueError, SegueResult};
use crate::raster::frame::Frame;

/// Direction of travel for directional effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Moves from the left edge towards the right edge.
    #[default]
    LeftToRight,
    /// Moves from the right edge towards the left edge.
    RightToLeft,
    /// Moves from the top edge towards the bottom edge.
    TopToBottom,
    /// Moves from the bottom edge towards the top edge.
    BottomToTop,
}

impl Direction {
    /// Parse a direction name; accepts snake case, run-together and three-letter forms.
    pub fn parse(s: &str) -> SegueResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left_to_right" | "lefttoright" | "ltr" => Ok(Self::LeftToRight),
            "right_to_left" | "righttoleft" | "rtl" => Ok(Self::RightToLeft),
            "top_to_bottom" | "toptobottom" | "ttb" => Ok(Self::TopToBottom),
            "bottom_to_top" | "bottomtotop" | "btt" => Ok(Self::BottomToTop),
            other => Err(SegueError::validation(format!(
                "unknown direction '{other}'"
            ))),
        }
    }

    /// Position of `(x, y)` along the direction of travel, `0` being the leading edge.
    pub(crate) fn axis_pos(self, x: u32, y: u32, width: u32, height: u32) -> u32 {
        match self {
            Self::LeftToRight => x,
            Self::RightToLeft => width - 1 - x,
            Self::TopToBottom => y,
            Self::BottomToTop => height - 1 - y,
        }
    }

    /// Inverse of [`Direction::axis_pos`] for axis position `u`, keeping the cross-axis coordinate.
    pub(crate) fn from_axis_pos(
        self,
        u: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> (u32, u32) {
        match self {
            Self::LeftToRight => (u, y),
            Self::RightToLeft => (width - 1 - u, y),
            Self::TopToBottom => (x, u),
            Self::BottomToTop => (x, height - 1 - u),
        }
    }
}

/// Serializable effect selection: a kind name plus kind-specific parameters.
///
/// ```json
/// { "kind": "wipe", "params": { "dir": "rtl", "soft_edge": 0.1 } }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EffectSpec {
    /// Effect kind, e.g. `"dissolve"`.
    pub kind: String,
    /// Kind-specific parameters; `null` selects defaults.
    #[serde(default)]
    pub params: serde_json::Value,
}

impl EffectSpec {
    /// Spec for `kind` with default parameters.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            params: serde_json::Value::Null,
        }
    }

    /// Parse a spec from JSON text.
    pub fn from_json(json: &str) -> SegueResult<Self> {
        serde_json::from_str(json).map_err(|e| SegueError::serde(e.to_string()))
    }
}

/// Every built-in effect, dispatched without boxing.
#[derive(Clone, Debug, PartialEq)]
pub enum EffectKind {
    /// See [`AlphaDissolve`].
    Dissolve(AlphaDissolve),
    /// See [`Wipe`].
    Wipe(Wipe),
    /// See [`Slide`].
    Slide(Slide),
    /// See [`Pixelate`].
    Pixelate(Pixelate),
    /// See [`TileDissolve`].
    TileDissolve(TileDissolve),
}

impl EffectKind {
    /// Move into a trait object.
    pub fn into_boxed(self) -> Box<dyn Effect> {
        match self {
            Self::Dissolve(e) => Box::new(e),
            Self::Wipe(e) => Box::new(e),
            Self::Slide(e) => Box::new(e),
            Self::Pixelate(e) => Box::new(e),
            Self::TileDissolve(e) => Box::new(e),
        }
    }

    fn as_effect(&self) -> &dyn Effect {
        match self {
            Self::Dissolve(e) => e,
            Self::Wipe(e) => e,
            Self::Slide(e) => e,
            Self::Pixelate(e) => e,
            Self::TileDissolve(e) => e,
        }
    }
}

impl Effect for EffectKind {
    fn name(&self) -> &'static str {
        self.as_effect().name()
    }

    fn compose(&self, ctx: &ComposeCtx<'_>, out: &mut Frame) -> SegueResult<()> {
        self.as_effect().compose(ctx, out)
    }
}

/// Resolve an [`EffectSpec`] into a concrete effect.
pub fn parse_effect(spec: &EffectSpec) -> SegueResult<EffectKind> {
    parse_effect_kind_params(&spec.kind, &spec.params)
}

/// Resolve a kind name and its parameters into a concrete effect.
pub fn parse_effect_kind_params(
    kind: &str,
    params: &serde_json::Value,
) -> SegueResult<EffectKind> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(SegueError::validation("effect kind must be non-empty"));
    }

    let params = if params.is_null() {
        None
    } else {
        Some(params.as_object().ok_or_else(|| {
            SegueError::validation(format!("{kind} params must be an object"))
        })?)
    };
    let get = |key: &str| params.and_then(|p| p.get(key));

    match kind.as_str() {
        "dissolve" | "crossfade" | "alpha_dissolve" => {
            let mode = match get("mode").and_then(|v| v.as_str()) {
                None => DissolveMode::Weighted,
                Some(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "weighted" | "linear" => DissolveMode::Weighted,
                    "over" | "src_over" => DissolveMode::Over,
                    other => {
                        return Err(SegueError::validation(format!(
                            "unknown dissolve.mode '{other}'"
                        )));
                    }
                },
            };
            Ok(EffectKind::Dissolve(AlphaDissolve { mode }))
        }
        "wipe" => {
            let dir = parse_dir(&kind, get("dir"))?;
            let soft_edge = match get("soft_edge").and_then(|v| v.as_f64()) {
                None => 0.0,
                Some(v) => {
                    let f = v as f32;
                    if !f.is_finite() {
                        return Err(SegueError::validation(
                            "wipe.soft_edge must be finite when set",
                        ));
                    }
                    f.clamp(0.0, 1.0)
                }
            };
            Ok(EffectKind::Wipe(Wipe { dir, soft_edge }))
        }
        "slide" | "push" => {
            let dir = parse_dir(&kind, get("dir"))?;
            let push = match get("push") {
                None => kind == "push",
                Some(v) => v
                    .as_bool()
                    .ok_or_else(|| SegueError::validation("slide.push must be a boolean"))?,
            };
            Ok(EffectKind::Slide(Slide { dir, push }))
        }
        "pixelate" => {
            let max_block = parse_positive_u32(&kind, "max_block", get("max_block"))?
                .unwrap_or(Pixelate::default().max_block);
            Ok(EffectKind::Pixelate(Pixelate { max_block }))
        }
        "tile_dissolve" | "tiles" => {
            let defaults = TileDissolve::default();
            let tile = parse_positive_u32(&kind, "tile", get("tile"))?.unwrap_or(defaults.tile);
            let seed = match get("seed") {
                None => defaults.seed,
                Some(v) => v.as_u64().ok_or_else(|| {
                    SegueError::validation(format!("{kind}.seed must be a non-negative integer"))
                })?,
            };
            Ok(EffectKind::TileDissolve(TileDissolve { tile, seed }))
        }
        _ => Err(SegueError::validation(format!(
            "unknown effect kind '{kind}'"
        ))),
    }
}

fn parse_dir(kind: &str, v: Option<&serde_json::Value>) -> SegueResult<Direction> {
    match v {
        None => Ok(Direction::default()),
        Some(v) => {
            let s = v
                .as_str()
                .ok_or_else(|| SegueError::validation(format!("{kind}.dir must be a string")))?;
            Direction::parse(s)
                .map_err(|_| SegueError::validation(format!("unknown {kind}.dir '{s}'")))
        }
    }
}

fn parse_positive_u32(
    kind: &str,
    key: &str,
    v: Option<&serde_json::Value>,
) -> SegueResult<Option<u32>> {
    let Some(v) = v else {
        return Ok(None);
    };
    let n = v
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n > 0)
        .ok_or_else(|| SegueError::validation(format!("{kind}.{key} must be an integer >= 1")))?;
    Ok(Some(n))
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
