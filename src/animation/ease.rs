use crate::foundation::error::{SegueError, SegueResult};

/// Easing curves that reshape evenly spaced progress samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
}

impl Ease {
    /// Apply the curve to `t`, clamped to `[0, 1]`. Endpoints map to themselves.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
        }
    }

    /// Parse a curve name such as `"in_out_cubic"` or `"inoutcubic"`.
    pub fn parse(s: &str) -> SegueResult<Self> {
        let norm: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match norm.as_str() {
            "linear" => Ok(Self::Linear),
            "inquad" => Ok(Self::InQuad),
            "outquad" => Ok(Self::OutQuad),
            "inoutquad" => Ok(Self::InOutQuad),
            "incubic" => Ok(Self::InCubic),
            "outcubic" => Ok(Self::OutCubic),
            "inoutcubic" => Ok(Self::InOutCubic),
            _ => Err(SegueError::validation(format!("unknown ease '{s}'"))),
        }
    }
}

impl std::str::FromStr for Ease {
    type Err = SegueError;

    fn from_str(s: &str) -> SegueResult<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
