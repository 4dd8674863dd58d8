//! Flow direction of the rendered diagram.

use std::str::FromStr;

use serde::Deserialize;

/// The direction in which the layout engine ranks the diagram.
///
/// Maps directly to the Graphviz `rankdir` graph attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Direction {
    /// Left to right (`rankdir=LR`, default).
    #[default]
    #[serde(rename = "LR", alias = "left-to-right")]
    LeftToRight,
    /// Right to left (`rankdir=RL`).
    #[serde(rename = "RL", alias = "right-to-left")]
    RightToLeft,
    /// Top to bottom (`rankdir=TB`).
    #[serde(rename = "TB", alias = "top-to-bottom")]
    TopToBottom,
    /// Bottom to top (`rankdir=BT`).
    #[serde(rename = "BT", alias = "bottom-to-top")]
    BottomToTop,
}

impl Direction {
    /// Returns the Graphviz `rankdir` value.
    pub fn rankdir(&self) -> &'static str {
        match self {
            Self::LeftToRight => "LR",
            Self::RightToLeft => "RL",
            Self::TopToBottom => "TB",
            Self::BottomToTop => "BT",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LR" | "left-to-right" => Ok(Self::LeftToRight),
            "RL" | "right-to-left" => Ok(Self::RightToLeft),
            "TB" | "top-to-bottom" => Ok(Self::TopToBottom),
            "BT" | "bottom-to-top" => Ok(Self::BottomToTop),
            _ => Err(format!(
                "invalid direction `{s}`, valid values: LR, RL, TB, BT"
            )),
        }
    }
}
