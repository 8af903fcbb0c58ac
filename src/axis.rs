//! Logical axes and their mapping onto the screen.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Logical axis of the tab switcher.
///
/// The dragging axis is the one tabs are swiped and stacked along; the orthogonal axis is
/// perpendicular to it. Neither says anything about the screen until resolved against an
/// [`Orientation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Dragging,
    Orthogonal,
}

impl Axis {
    /// Returns the other axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Dragging => Axis::Orthogonal,
            Axis::Orthogonal => Axis::Dragging,
        }
    }

    /// Resolves this axis for the given orientation.
    ///
    /// The result picks the physical view properties: a resolved [`Axis::Dragging`] always means
    /// the Y properties of a view, [`Axis::Orthogonal`] the X properties. Dragging horizontally
    /// swaps the two. This is the only place the swap happens.
    pub fn resolve(self, orientation: Orientation) -> Self {
        match orientation {
            Orientation::Vertical => self,
            Orientation::Horizontal => self.perpendicular(),
        }
    }
}

/// Direction in which the tabs of the switcher are dragged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn from_dragging_horizontally(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    pub fn is_horizontal(self) -> bool {
        self == Self::Horizontal
    }
}

/// Edge selector.
///
/// Mirrors the gravity constants hosts usually carry around. Only [`Gravity::Start`] and
/// [`Gravity::End`] select a padding edge; the others exist so that a gravity coming from the
/// host can be passed through and rejected instead of silently mapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gravity {
    Start,
    End,
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl FromStr for Gravity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(Error::invalid_argument(format!("unknown gravity: {s:?}"))),
        }
    }
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gravity::Start => "start",
            Gravity::End => "end",
            Gravity::Top => "top",
            Gravity::Bottom => "bottom",
            Gravity::Left => "left",
            Gravity::Right => "right",
            Gravity::Center => "center",
        };
        f.write_str(name)
    }
}
