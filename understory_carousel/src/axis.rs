// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orientation of a carousel and projection of geometry onto its active axis.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size, Vec2};

use crate::ParseError;

/// Direction in which slides are laid out and scrolled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// Slides flow left to right; the active axis is x.
    #[default]
    Horizontal,
    /// Slides flow top to bottom; the active axis is y.
    Vertical,
}

impl Orientation {
    /// The lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }

    /// The geometric axis this orientation scrolls along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        Axis(self)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ParseError::Orientation),
        }
    }
}

/// Projection of 2D geometry onto the active axis of an [`Orientation`].
///
/// Horizontal carousels read `x`/width (offsetLeft, scrollLeft, clientWidth in DOM terms);
/// vertical carousels read `y`/height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Axis(Orientation);

impl Axis {
    /// Leading edge of `rect` along the axis.
    #[must_use]
    pub fn start(self, rect: Rect) -> f64 {
        match self.0 {
            Orientation::Horizontal => rect.x0,
            Orientation::Vertical => rect.y0,
        }
    }

    /// Extent of `rect` along the axis.
    #[must_use]
    pub fn extent(self, rect: Rect) -> f64 {
        self.extent_of(rect.size())
    }

    /// Extent of `size` along the axis.
    #[must_use]
    pub fn extent_of(self, size: Size) -> f64 {
        match self.0 {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Component of `vec` along the axis.
    #[must_use]
    pub fn component(self, vec: Vec2) -> f64 {
        match self.0 {
            Orientation::Horizontal => vec.x,
            Orientation::Vertical => vec.y,
        }
    }

    /// Coordinate of `point` along the axis.
    #[must_use]
    pub fn coordinate(self, point: Point) -> f64 {
        self.component(point.to_vec2())
    }

    /// A vector of length `value` along the axis, zero on the cross axis.
    #[must_use]
    pub fn vector(self, value: f64) -> Vec2 {
        match self.0 {
            Orientation::Horizontal => Vec2::new(value, 0.0),
            Orientation::Vertical => Vec2::new(0.0, value),
        }
    }

    /// Replaces the axis component of `vec`, keeping the cross axis.
    #[must_use]
    pub fn with_component(self, vec: Vec2, value: f64) -> Vec2 {
        match self.0 {
            Orientation::Horizontal => Vec2::new(value, vec.y),
            Orientation::Vertical => Vec2::new(vec.x, value),
        }
    }
}
