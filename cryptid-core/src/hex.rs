//! Hex locations in any coordinate layout
//!
//! A `Hex` pairs a canonical axial location with the layout it is written
//! in. Identity (equality, hashing) only looks at the canonical location, so
//! `Hex::axial(1, 0)? == Hex::doubled_height(1, 1)?` holds. Arithmetic only
//! looks at the layout, and mixing layouts is an error.
//!
//! Every `Hex` lies on the grid bounded by `MAX_LENGTH`. Constructors and
//! arithmetic that would leave it fail with `Error::OffGrid`.

use crate::axial::Axial;
use crate::error::{Error, Result};
use crate::layout::Layout;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A hex grid location expressed in one coordinate layout
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(into = "HexRecord", try_from = "HexRecord")]
pub struct Hex {
    layout: Layout,
    at: Axial,
}

impl Hex {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub fn axial(q: i32, r: i32) -> Result<Self> {
        Self::from_native(Layout::Axial, q, r)
    }

    /// Cube coordinates must lie in the plane `q + r + s = 0`
    pub fn cube(q: i32, r: i32, s: i32) -> Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            return Err(Error::NotPlanar { q, r, s });
        }
        Self::from_native(Layout::Cube, q, r)
    }

    pub fn doubled_height(col: i32, row: i32) -> Result<Self> {
        Self::from_native(Layout::DoubledHeight, col, row)
    }

    pub fn doubled_width(col: i32, row: i32) -> Result<Self> {
        Self::from_native(Layout::DoubledWidth, col, row)
    }

    pub fn even_row(col: i32, row: i32) -> Result<Self> {
        Self::from_native(Layout::EvenRow, col, row)
    }

    pub fn odd_row(col: i32, row: i32) -> Result<Self> {
        Self::from_native(Layout::OddRow, col, row)
    }

    pub fn even_column(col: i32, row: i32) -> Result<Self> {
        Self::from_native(Layout::EvenColumn, col, row)
    }

    pub fn odd_column(col: i32, row: i32) -> Result<Self> {
        Self::from_native(Layout::OddColumn, col, row)
    }

    /// Build from the layout's own two fields (`(q, r)` for axial and cube,
    /// `(col, row)` otherwise)
    pub fn from_native(layout: Layout, a: i32, b: i32) -> Result<Self> {
        Ok(Self::on_grid(layout.to_axial(a, b)?, layout))
    }

    /// Express a canonical location in `layout`. Every grid location has a
    /// representation in every layout; locations off the grid are rejected.
    pub fn from_axial(at: Axial, layout: Layout) -> Result<Self> {
        if !at.is_on_grid() {
            return Err(Error::OffGrid { q: at.q.into(), r: at.r.into() });
        }
        Ok(Self::on_grid(at, layout))
    }

    pub const fn origin(layout: Layout) -> Self {
        Self::on_grid(Axial::ORIGIN, layout)
    }

    /// Caller guarantees `at` is on the grid
    pub(crate) const fn on_grid(at: Axial, layout: Layout) -> Self {
        Self { layout, at }
    }

    /// Widened native fields of `layout` to a hex in that layout
    fn from_wide(layout: Layout, a: i64, b: i64) -> Result<Self> {
        Ok(Self::on_grid(layout.to_axial_wide(a, b)?, layout))
    }

    // ========================================================================
    // ACCESSORS & CONVERSIONS
    // ========================================================================

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Canonical axial location
    pub fn canonical(&self) -> Axial {
        self.at
    }

    pub fn q(&self) -> i32 {
        self.at.q
    }

    pub fn r(&self) -> i32 {
        self.at.r
    }

    pub fn s(&self) -> i32 {
        self.at.s()
    }

    pub fn cube_coords(&self) -> (i32, i32, i32) {
        (self.at.q, self.at.r, self.at.s())
    }

    /// The layout's own two fields
    pub fn native(&self) -> (i32, i32) {
        let (a, b) = self.wide_native();
        // on-grid fields stay within 2 * MAX_LENGTH
        (a as i32, b as i32)
    }

    fn wide_native(&self) -> (i64, i64) {
        self.layout.encode(self.at)
    }

    /// Same location, different layout
    pub fn to_layout(&self, layout: Layout) -> Hex {
        Hex::on_grid(self.at, layout)
    }

    // ========================================================================
    // GEOMETRY
    // ========================================================================

    /// Hex distance. Within one layout this uses the layout's own formula;
    /// across layouts it falls back to canonical axial distance.
    pub fn distance(&self, other: &Hex) -> i32 {
        if self.layout == other.layout {
            // at most 2 * MAX_LENGTH
            self.layout.distance(self.wide_native(), other.wide_native()) as i32
        } else {
            self.at.distance_to(other.at)
        }
    }

    /// Native deltas to the six neighbours of this cell
    pub fn neighbor_directions(&self) -> [(i32, i32); 6] {
        let (a, b) = self.wide_native();
        *self.layout.directions(a, b)
    }

    /// Adjacent grid cells: six of them, fewer on the grid's edge
    pub fn neighbors(&self) -> Vec<Hex> {
        let (a, b) = self.wide_native();
        self.layout
            .directions(a, b)
            .iter()
            .filter_map(|&(da, db)| {
                Hex::from_wide(self.layout, a + i64::from(da), b + i64::from(db)).ok()
            })
            .collect()
    }

    /// Every grid hex at distance `0..=n`, in this hex's layout
    pub fn hexes_within_range(&self, n: u32) -> Vec<Hex> {
        self.at
            .within_range(n)
            .map(|at| Hex::on_grid(at, self.layout))
            .collect()
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    fn vector_pair(&self, other: &Hex) -> Result<Layout> {
        if self.layout != other.layout {
            return Err(Error::LayoutMismatch { lhs: self.layout, rhs: other.layout });
        }
        self.vector_layout()
    }

    fn vector_layout(&self) -> Result<Layout> {
        if !self.layout.is_vector() {
            return Err(Error::NotAVector(self.layout));
        }
        Ok(self.layout)
    }

    /// Component-wise sum of the native fields. Fails with `OffGrid` when the
    /// result leaves the grid.
    pub fn try_add(&self, other: &Hex) -> Result<Hex> {
        let layout = self.vector_pair(other)?;
        let (a1, b1) = self.wide_native();
        let (a2, b2) = other.wide_native();
        Hex::from_wide(layout, a1 + a2, b1 + b2)
    }

    pub fn try_sub(&self, other: &Hex) -> Result<Hex> {
        let layout = self.vector_pair(other)?;
        let (a1, b1) = self.wide_native();
        let (a2, b2) = other.wide_native();
        Hex::from_wide(layout, a1 - a2, b1 - b2)
    }

    /// Integer scaling of the native fields
    pub fn try_scale(&self, k: i32) -> Result<Hex> {
        let layout = self.vector_layout()?;
        let (a, b) = self.wide_native();
        let k = i64::from(k);
        Hex::from_wide(layout, a * k, b * k)
    }

    pub fn try_neg(&self) -> Result<Hex> {
        self.try_scale(-1)
    }

    // ========================================================================
    // REFLECTIONS
    // ========================================================================

    /// Point reflection `2 * pivot - self`, computed canonically so it works
    /// in every layout. The pivot defaults to the origin and must share this
    /// hex's layout.
    pub fn reflect_over_hex(&self, pivot: Option<&Hex>) -> Result<Hex> {
        let pivot = match pivot {
            Some(p) if p.layout != self.layout => {
                return Err(Error::LayoutMismatch { lhs: self.layout, rhs: p.layout });
            }
            Some(p) => p.at,
            None => Axial::ORIGIN,
        };
        let (pq, pr) = (i64::from(pivot.q), i64::from(pivot.r));
        let (q, r) = self.wide_axial();
        self.with_wide(2 * pq - q, 2 * pr - r)
    }

    // Axis reflections permute cube coordinates, so they stay on the grid.

    pub fn reflect_over_q_axis(&self) -> Hex {
        self.with_canonical(self.at.reflect_over_q_axis())
    }

    pub fn reflect_over_r_axis(&self) -> Hex {
        self.with_canonical(self.at.reflect_over_r_axis())
    }

    pub fn reflect_over_s_axis(&self) -> Hex {
        self.with_canonical(self.at.reflect_over_s_axis())
    }

    /// Mirror across the line `q = k`
    pub fn reflect_over_q(&self, k: i32) -> Result<Hex> {
        let (q, r) = self.wide_axial();
        let k = i64::from(k);
        self.with_wide(2 * k - q, q + r - k)
    }

    /// Mirror across the line `r = k`
    pub fn reflect_over_r(&self, k: i32) -> Result<Hex> {
        let (q, r) = self.wide_axial();
        let k = i64::from(k);
        self.with_wide(q + r - k, 2 * k - r)
    }

    /// Mirror across the line `s = k`
    pub fn reflect_over_s(&self, k: i32) -> Result<Hex> {
        let (q, r) = self.wide_axial();
        let k = i64::from(k);
        self.with_wide(-r - k, -q - k)
    }

    fn wide_axial(&self) -> (i64, i64) {
        (self.at.q.into(), self.at.r.into())
    }

    fn with_wide(&self, q: i64, r: i64) -> Result<Hex> {
        let at = Axial::bounded(q, r).ok_or(Error::OffGrid { q, r })?;
        Ok(self.with_canonical(at))
    }

    fn with_canonical(&self, at: Axial) -> Hex {
        Hex::on_grid(at, self.layout)
    }
}

impl PartialEq for Hex {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for Hex {}

impl Hash for Hex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl From<Hex> for Axial {
    fn from(hex: Hex) -> Axial {
        hex.at
    }
}

impl From<&Hex> for Axial {
    fn from(hex: &Hex) -> Axial {
        hex.at
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.native();
        let (a_name, b_name) = self.layout.field_names();
        write!(f, "{:?}({}={}, {}={}", self.layout, a_name, a, b_name, b)?;
        if self.layout == Layout::Cube {
            write!(f, ", s={}", self.s())?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// SERDE RECORD
// ============================================================================

/// On-disk form of a hex: tagged by layout, with the layout's own fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
enum HexRecord {
    Axial { q: i32, r: i32 },
    Cube { q: i32, r: i32, s: i32 },
    DoubledHeight { col: i32, row: i32 },
    DoubledWidth { col: i32, row: i32 },
    EvenRow { col: i32, row: i32 },
    OddRow { col: i32, row: i32 },
    EvenColumn { col: i32, row: i32 },
    OddColumn { col: i32, row: i32 },
}

impl From<Hex> for HexRecord {
    fn from(hex: Hex) -> HexRecord {
        let (col, row) = hex.native();
        match hex.layout {
            Layout::Axial => HexRecord::Axial { q: hex.q(), r: hex.r() },
            Layout::Cube => HexRecord::Cube { q: hex.q(), r: hex.r(), s: hex.s() },
            Layout::DoubledHeight => HexRecord::DoubledHeight { col, row },
            Layout::DoubledWidth => HexRecord::DoubledWidth { col, row },
            Layout::EvenRow => HexRecord::EvenRow { col, row },
            Layout::OddRow => HexRecord::OddRow { col, row },
            Layout::EvenColumn => HexRecord::EvenColumn { col, row },
            Layout::OddColumn => HexRecord::OddColumn { col, row },
        }
    }
}

impl TryFrom<HexRecord> for Hex {
    type Error = Error;

    fn try_from(record: HexRecord) -> Result<Hex> {
        match record {
            HexRecord::Axial { q, r } => Hex::axial(q, r),
            HexRecord::Cube { q, r, s } => Hex::cube(q, r, s),
            HexRecord::DoubledHeight { col, row } => Hex::doubled_height(col, row),
            HexRecord::DoubledWidth { col, row } => Hex::doubled_width(col, row),
            HexRecord::EvenRow { col, row } => Hex::even_row(col, row),
            HexRecord::OddRow { col, row } => Hex::odd_row(col, row),
            HexRecord::EvenColumn { col, row } => Hex::even_column(col, row),
            HexRecord::OddColumn { col, row } => Hex::odd_column(col, row),
        }
    }
}
