//! This sub-module contains basic types for units that form the hex coordinate
//! system. See the parent module documentation for more info on the coordinate
//! system.

use anyhow::{anyhow, bail};
use derive_more::{Add, AddAssign, Display, Mul, MulAssign, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A single cell of the hex grid, in cube coordinates.
///
/// See module-level documentation for a description of the hex coordinate
/// system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for every cell, this struct only stores `q` and `r`
/// and derives `s` as needed. That makes the invariant structural: every
/// operator below combines the stored components pairwise, so sums,
/// differences and integer multiples of valid hexes are always valid hexes.
///
/// Scaling is only defined for integer factors. `hex * 2` works, `hex * 0.5`
/// doesn't compile.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    MulAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a hex from its axial coordinates. Since q+r+s=0 for all
    /// hexes, `s` is derived from the other two and this can't fail. The
    /// caller is responsible for `-(q + r)` fitting in an `i32`; use
    /// [Self::new] when that isn't known.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a hex from all three cube coordinates. Returns an error if
    /// the coordinates don't fall on the plane `q + r + s = 0`. Any hex built
    /// this way can read back all three components without overflowing.
    pub fn new(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        let sum = q
            .checked_add(r)
            .and_then(|sum| sum.checked_add(s))
            .ok_or_else(|| {
                anyhow!("Hex coordinates ({}, {}, {}) overflow", q, r, s)
            })?;
        if sum != 0 {
            bail!(
                "Invalid hex ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            );
        }
        Ok(Self::new_qr(q, r))
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    pub const fn s(&self) -> i32 {
        // Summing first keeps this in range for every (q, r, s) that Self::new
        // accepts, e.g. (i32::MIN, i32::MAX, 1)
        -(self.q + self.r)
    }

    /// Number of steps between this hex and the origin. 0 for the origin, 1
    /// for its neighbors, and so on.
    pub fn length(self) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let sum = u64::from(self.q.unsigned_abs())
            + u64::from(self.r.unsigned_abs())
            + u64::from(self.s().unsigned_abs());
        // Each step between adjacent cells changes two of the three
        // components by one
        (sum / 2) as usize
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the hexes are equal,
    /// 1 if they are adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance_to(self, other: Hex) -> usize {
        (other - self).length()
    }

    /// Get the hex adjacent to this one in the given direction
    pub fn neighbor(self, direction: Direction) -> Hex {
        self + direction.to_vector()
    }

    /// Get the neighbor at a numeric direction index. The index wraps around,
    /// so 6 is the same as 0 and -1 is the same as 5.
    pub fn neighbor_at(self, index: i32) -> Hex {
        self.neighbor(Direction::from_index(index))
    }

    /// Get an iterator of all the hexes directly adjacent to this one, in
    /// direction order. The iterator will always contain exactly 6 values.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        Direction::iter().map(move |direction| self.neighbor(direction))
    }

    /// Are these two hexes directly adjacent?
    pub fn is_adjacent(self, other: Hex) -> bool {
        self.distance_to(other) == 1
    }
}

/// A point in cube coordinate space whose components are real numbers. This
/// can refer to any point in the grid, not just cell centers. Converting a
/// pixel into hex space produces one of these, which then gets snapped to the
/// containing cell with [Self::round].
///
/// Unlike [Hex], no invariant is enforced here. Floating point math will
/// rarely land exactly on `q + r + s = 0`, and rounding corrects for that.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", q, r, s)]
pub struct FractionalHex {
    pub q: f64,
    pub r: f64,
    pub s: f64,
}

impl FractionalHex {
    pub const fn new(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    /// Construct from axial components, deriving `s = -q - r`
    pub fn from_axial(q: f64, r: f64) -> Self {
        Self::new(q, r, -q - r)
    }

    /// Are all three components finite (not NaN or infinite)?
    pub fn is_finite(&self) -> bool {
        self.q.is_finite() && self.r.is_finite() && self.s.is_finite()
    }

    /// Linear interpolation between two points. `t = 0` gives `self`,
    /// `t = 1` gives `other`.
    pub fn lerp(self, other: FractionalHex, t: f64) -> Self {
        Self::new(
            self.q + (other.q - self.q) * t,
            self.r + (other.r - self.r) * t,
            self.s + (other.s - self.s) * t,
        )
    }

    /// Snap this point to the hex that contains it. Returns an error if any
    /// component is NaN or infinite, since those don't refer to any cell, or
    /// if the containing cell's coordinates don't fit in a [Hex].
    pub fn round(self) -> anyhow::Result<Hex> {
        if !self.is_finite() {
            bail!("Cannot round non-finite hex coordinates {}", self);
        }
        let (q, r) = self.round_axial();
        let s = -q - r;
        // Keeping all three within ±i32::MAX means q + r can never overflow
        // when s is derived later
        let limit = f64::from(i32::MAX);
        if q.abs() > limit || r.abs() > limit || s.abs() > limit {
            bail!("Hex coordinates {} are out of range", self);
        }
        Ok(Hex::new_qr(q as i32, r as i32))
    }

    /// Rounding for points that are already known to be finite and within
    /// the range of a [Hex], e.g. points between two existing hexes.
    pub(crate) fn round_finite(self) -> Hex {
        let (q, r) = self.round_axial();
        Hex::new_qr(q as i32, r as i32)
    }

    /// Each component is rounded on its own (half-to-even), which can leave
    /// the sum off by one or two. The component that moved the furthest is
    /// the least trustworthy, so it gets recomputed from the other two. Ties
    /// resolve in the order q, r, s: q is only replaced if its delta is
    /// strictly the biggest, otherwise r is replaced if its delta beats s's,
    /// otherwise s is.
    ///
    /// Returns the rounded axial components, still as floats.
    fn round_axial(self) -> (f64, f64) {
        let q = self.q.round_ties_even();
        let r = self.r.round_ties_even();
        let s = self.s.round_ties_even();

        let q_diff = (q - self.q).abs();
        let r_diff = (r - self.r).abs();
        let s_diff = (s - self.s).abs();

        // s is implied by q and r, so the last branch is a no-op
        if q_diff > r_diff && q_diff > s_diff {
            (-r - s, r)
        } else if r_diff > s_diff {
            (q, -q - s)
        } else {
            (q, r)
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(hex.q() as f64, hex.r() as f64, hex.s() as f64)
    }
}

/// The 6 directions in which hexes line up side-to-side. For any given cell,
/// a direction represents both the step to a neighboring cell's center and
/// the side of the cell that faces that neighbor.
///
/// Variants are named for their heading in a pointy-topped layout (in screen
/// space, where `+y` is down). The enumeration order runs the same way
/// around the cell as the corner order of [crate::Layout::corners].
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    SouthEast,
    SouthWest,
    West,
    NorthWest,
    NorthEast,
    East,
}

impl Direction {
    /// All directions, in enumeration order
    pub const ALL: [Self; 6] = [
        Self::SouthEast,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
        Self::East,
    ];

    /// Get the direction at a numeric index. Out-of-range indexes wrap around
    /// (modulo 6) instead of failing, including negative ones.
    pub fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    /// Position of this direction in [Self::ALL]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction that points directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// Get the offset that moves a hex one cell in this direction
    pub fn to_vector(self) -> Hex {
        match self {
            Self::SouthEast => Hex::new_qr(0, 1),
            Self::SouthWest => Hex::new_qr(-1, 1),
            Self::West => Hex::new_qr(-1, 0),
            Self::NorthWest => Hex::new_qr(0, -1),
            Self::NorthEast => Hex::new_qr(1, -1),
            Self::East => Hex::new_qr(1, 0),
        }
    }
}
