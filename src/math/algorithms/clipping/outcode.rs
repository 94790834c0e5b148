// src/math/algorithms/clipping/outcode.rs

use crate::math::types::{ClipWindow, Point};
use std::{fmt, ops};

/// Cohen-Sutherland region code of a point relative to a [`ClipWindow`].
///
/// LEFT and RIGHT are mutually exclusive, as are BOTTOM and TOP. A point in
/// a corner region carries one horizontal and one vertical bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Outcode(u8);

impl Outcode {
    pub const INSIDE: Outcode = Outcode(0);
    pub const LEFT: Outcode = Outcode(1);
    pub const RIGHT: Outcode = Outcode(2);
    pub const BOTTOM: Outcode = Outcode(4);
    pub const TOP: Outcode = Outcode(8);

    /// Klassifiziert einen Punkt gegenüber dem Fenster.
    ///
    /// A NaN coordinate is never inside; it is classified as LEFT or BOTTOM.
    pub fn of(point: Point, window: &ClipWindow) -> Self {
        let mut code = Self::INSIDE;

        if point.x.is_nan() || point.x < window.xmin() {
            code |= Self::LEFT;
        } else if point.x > window.xmax() {
            code |= Self::RIGHT;
        }
        if point.y.is_nan() || point.y < window.ymin() {
            code |= Self::BOTTOM;
        } else if point.y > window.ymax() {
            code |= Self::TOP;
        }

        code
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Inside or on the boundary.
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    pub const fn contains(self, other: Outcode) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }

    /// Both codes lie beyond the same boundary line.
    pub const fn shares_side_with(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }
}

impl ops::BitOr for Outcode {
    type Output = Outcode;

    fn bitor(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 | rhs.0)
    }
}

impl ops::BitOrAssign for Outcode {
    fn bitor_assign(&mut self, rhs: Outcode) {
        self.0 |= rhs.0;
    }
}

impl ops::BitAnd for Outcode {
    type Output = Outcode;

    fn bitand(self, rhs: Outcode) -> Outcode {
        Outcode(self.0 & rhs.0)
    }
}

impl fmt::Display for Outcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
