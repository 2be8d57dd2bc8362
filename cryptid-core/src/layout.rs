//! Coordinate layouts
//!
//! A `Layout` names one way of writing a hex location as two integers (the
//! "native" fields). Axial and cube use `(q, r)`; every other layout uses
//! `(col, row)`. Conversions to axial are closed-form integer arithmetic, so
//! every legal native pair round-trips exactly.
//!
//! Native fields are handled as `i64`. Any `i32` input, and any sum,
//! difference or `i32` multiple of on-grid fields, converts without overflow;
//! results off the grid are rejected.

use crate::axial::{Axial, AXIAL_DIRECTIONS};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One case per coordinate representation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Axial,
    Cube,
    DoubledHeight,
    DoubledWidth,
    EvenRow,
    OddRow,
    EvenColumn,
    OddColumn,
}

pub const ALL_LAYOUTS: [Layout; 8] = [
    Layout::Axial,
    Layout::Cube,
    Layout::DoubledHeight,
    Layout::DoubledWidth,
    Layout::EvenRow,
    Layout::OddRow,
    Layout::EvenColumn,
    Layout::OddColumn,
];

/// Doubled-height (dcol, drow): rows step by two within a column
const DOUBLED_HEIGHT_DIRECTIONS: [(i32, i32); 6] = [
    (1, 1),
    (1, -1),
    (0, -2),
    (-1, -1),
    (-1, 1),
    (0, 2),
];

/// Doubled-width (dcol, drow): columns step by two within a row
const DOUBLED_WIDTH_DIRECTIONS: [(i32, i32); 6] = [
    (2, 0),
    (1, -1),
    (-1, -1),
    (-2, 0),
    (-1, 1),
    (1, 1),
];

/// Row offsets (dcol, drow) from a row that is shoved right
const SHOVED_ROW_DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (0, 1),
    (1, 1),
];

/// Row offsets (dcol, drow) from a row that is not shoved
const UNSHOVED_ROW_DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Column offsets (dcol, drow) from a column that is shoved down
const SHOVED_COLUMN_DIRECTIONS: [(i32, i32); 6] = [
    (1, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Column offsets (dcol, drow) from a column that is not shoved
const UNSHOVED_COLUMN_DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (0, 1),
];

impl Layout {
    pub fn name(self) -> &'static str {
        match self {
            Layout::Axial => "axial",
            Layout::Cube => "cube",
            Layout::DoubledHeight => "doubled_height",
            Layout::DoubledWidth => "doubled_width",
            Layout::EvenRow => "even_row",
            Layout::OddRow => "odd_row",
            Layout::EvenColumn => "even_column",
            Layout::OddColumn => "odd_column",
        }
    }

    /// Layouts whose native fields are linear in axial, so component-wise
    /// arithmetic on them is vector arithmetic
    pub fn is_vector(self) -> bool {
        matches!(
            self,
            Layout::Axial | Layout::Cube | Layout::DoubledHeight | Layout::DoubledWidth
        )
    }

    /// Doubled layouts require `col + row` to be even
    pub fn is_doubled(self) -> bool {
        matches!(self, Layout::DoubledHeight | Layout::DoubledWidth)
    }

    /// Reject native pairs that name no hex in this layout
    pub fn validate(self, a: i64, b: i64) -> Result<()> {
        if self.is_doubled() && (a & 1) != (b & 1) {
            return Err(Error::ParityMismatch { layout: self, col: a, row: b });
        }
        Ok(())
    }

    /// Native fields to a grid location
    pub fn to_axial(self, a: i32, b: i32) -> Result<Axial> {
        self.to_axial_wide(a.into(), b.into())
    }

    /// `to_axial` for widened fields: `i32` inputs and sums, differences or
    /// `i32` multiples of on-grid fields
    pub(crate) fn to_axial_wide(self, a: i64, b: i64) -> Result<Axial> {
        self.validate(a, b)?;
        let (q, r) = self.axial_parts(a, b);
        Axial::bounded(q, r).ok_or(Error::OffGrid { q, r })
    }

    /// The conversion formulas alone, without parity or grid checks
    pub(crate) const fn axial_parts(self, a: i64, b: i64) -> (i64, i64) {
        match self {
            Layout::Axial | Layout::Cube => (a, b),
            Layout::DoubledHeight => (a, (b - a) / 2),
            Layout::DoubledWidth => ((a - b) / 2, b),
            Layout::EvenRow => (a - (b + (b & 1)) / 2, b),
            Layout::OddRow => (a - (b - (b & 1)) / 2, b),
            Layout::EvenColumn => (a, b - (a + (a & 1)) / 2),
            Layout::OddColumn => (a, b - (a - (a & 1)) / 2),
        }
    }

    /// Axial to native fields
    pub const fn encode(self, axial: Axial) -> (i64, i64) {
        let (q, r) = (axial.q as i64, axial.r as i64);
        match self {
            Layout::Axial | Layout::Cube => (q, r),
            Layout::DoubledHeight => (q, 2 * r + q),
            Layout::DoubledWidth => (2 * q + r, r),
            Layout::EvenRow => (q + (r + (r & 1)) / 2, r),
            Layout::OddRow => (q + (r - (r & 1)) / 2, r),
            Layout::EvenColumn => (q, r + (q + (q & 1)) / 2),
            Layout::OddColumn => (q, r + (q - (q & 1)) / 2),
        }
    }

    /// Native deltas to the six neighbours of the cell at native `(a, b)`.
    ///
    /// Offset layouts shove every other row (or column) by half a cell, so
    /// their table depends on the parity of the originating row (or column).
    pub fn directions(self, a: i64, b: i64) -> &'static [(i32, i32); 6] {
        let odd_row = b & 1 != 0;
        let odd_col = a & 1 != 0;
        match self {
            Layout::Axial | Layout::Cube => &AXIAL_DIRECTIONS,
            Layout::DoubledHeight => &DOUBLED_HEIGHT_DIRECTIONS,
            Layout::DoubledWidth => &DOUBLED_WIDTH_DIRECTIONS,
            Layout::EvenRow if odd_row => &UNSHOVED_ROW_DIRECTIONS,
            Layout::EvenRow => &SHOVED_ROW_DIRECTIONS,
            Layout::OddRow if odd_row => &SHOVED_ROW_DIRECTIONS,
            Layout::OddRow => &UNSHOVED_ROW_DIRECTIONS,
            Layout::EvenColumn if odd_col => &UNSHOVED_COLUMN_DIRECTIONS,
            Layout::EvenColumn => &SHOVED_COLUMN_DIRECTIONS,
            Layout::OddColumn if odd_col => &SHOVED_COLUMN_DIRECTIONS,
            Layout::OddColumn => &UNSHOVED_COLUMN_DIRECTIONS,
        }
    }

    /// Hex distance between two native pairs of this layout, as produced by
    /// `encode`
    pub(crate) fn distance(self, lhs: (i64, i64), rhs: (i64, i64)) -> i64 {
        let da = (lhs.0 - rhs.0).abs();
        let db = (lhs.1 - rhs.1).abs();
        match self {
            Layout::Axial | Layout::Cube => {
                let ds = ((lhs.0 + lhs.1) - (rhs.0 + rhs.1)).abs();
                da.max(db).max(ds)
            }
            // (dcol, drow)
            Layout::DoubledHeight => da + (db - da).max(0) / 2,
            Layout::DoubledWidth => db + (da - db).max(0) / 2,
            _ => {
                let (q1, r1) = self.axial_parts(lhs.0, lhs.1);
                let (q2, r2) = self.axial_parts(rhs.0, rhs.1);
                Layout::Axial.distance((q1, r1), (q2, r2))
            }
        }
    }

    /// Names of the two native fields
    pub fn field_names(self) -> (&'static str, &'static str) {
        match self {
            Layout::Axial | Layout::Cube => ("q", "r"),
            _ => ("col", "row"),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axial::MAX_LENGTH;
    use proptest::prelude::*;

    #[test]
    fn test_known_conversions() {
        // axial (1, -2) in every layout
        let axial = Axial::new(1, -2);
        assert_eq!(Layout::Axial.encode(axial), (1, -2));
        assert_eq!(Layout::DoubledHeight.encode(axial), (1, -3));
        assert_eq!(Layout::DoubledWidth.encode(axial), (0, -2));
        assert_eq!(Layout::EvenRow.encode(axial), (0, -2));
        assert_eq!(Layout::OddRow.encode(axial), (0, -2));
        assert_eq!(Layout::EvenColumn.encode(axial), (1, -1));
        assert_eq!(Layout::OddColumn.encode(axial), (1, -2));

        // axial (-3, 1): odd row, odd column
        let axial = Axial::new(-3, 1);
        assert_eq!(Layout::DoubledHeight.encode(axial), (-3, -1));
        assert_eq!(Layout::DoubledWidth.encode(axial), (-5, 1));
        assert_eq!(Layout::EvenRow.encode(axial), (-2, 1));
        assert_eq!(Layout::OddRow.encode(axial), (-3, 1));
        assert_eq!(Layout::EvenColumn.encode(axial), (-3, 0));
        assert_eq!(Layout::OddColumn.encode(axial), (-3, -1));
    }

    #[test]
    fn test_parity_validation() {
        assert!(Layout::DoubledHeight.validate(3, 5).is_ok());
        assert!(Layout::DoubledHeight.validate(-3, 5).is_ok());
        assert_eq!(
            Layout::DoubledWidth.validate(-1, 2),
            Err(Error::ParityMismatch { layout: Layout::DoubledWidth, col: -1, row: 2 })
        );
        // offset layouts accept any pair
        assert!(Layout::OddRow.validate(-1, 2).is_ok());
        // the parity sum of two i32 extremes is computed without overflow
        let max = i64::from(i32::MAX);
        assert!(Layout::DoubledHeight.validate(max, max).is_ok());
        assert!(Layout::DoubledHeight.validate(max, max - 1).is_err());
    }

    #[test]
    fn test_to_axial_rejects_off_grid() {
        let max = i64::from(i32::MAX);
        assert_eq!(
            Layout::Axial.to_axial(i32::MAX, i32::MAX),
            Err(Error::OffGrid { q: max, r: max })
        );
        // doubled-height (0, 2^30) is axial (0, 2^29), past the edge
        assert_eq!(
            Layout::DoubledHeight.to_axial(0, 1 << 30),
            Err(Error::OffGrid { q: 0, r: 1 << 29 })
        );
        assert!(Layout::OddColumn.to_axial(i32::MIN, 0).is_err());
        assert!(Layout::EvenRow.to_axial(i32::MAX, i32::MIN).is_err());

        assert_eq!(
            Layout::DoubledHeight.to_axial(MAX_LENGTH, -MAX_LENGTH),
            Ok(Axial::new(MAX_LENGTH, -MAX_LENGTH))
        );
    }

    #[test]
    fn test_encode_at_grid_corners() {
        let corners = [
            Axial::new(MAX_LENGTH, 0),
            Axial::new(0, MAX_LENGTH),
            Axial::new(-MAX_LENGTH, MAX_LENGTH),
            Axial::new(MAX_LENGTH, -MAX_LENGTH),
        ];
        for corner in corners {
            for layout in ALL_LAYOUTS {
                let (a, b) = layout.encode(corner);
                let (a, b) = (i32::try_from(a).unwrap(), i32::try_from(b).unwrap());
                assert_eq!(layout.to_axial(a, b), Ok(corner));
            }
        }
    }

    #[test]
    fn test_doubled_distance() {
        assert_eq!(Layout::DoubledHeight.distance((0, 0), (0, 4)), 2);
        assert_eq!(Layout::DoubledHeight.distance((0, 0), (3, 3)), 3);
        assert_eq!(Layout::DoubledWidth.distance((0, 0), (4, 0)), 2);
        assert_eq!(Layout::DoubledWidth.distance((0, 0), (3, 3)), 3);
    }

    proptest! {
        #[test]
        fn round_trip_through_axial(q in -200i32..200, r in -200i32..200) {
            let axial = Axial::new(q, r);
            for layout in ALL_LAYOUTS {
                let (a, b) = layout.encode(axial);
                prop_assert!(layout.validate(a, b).is_ok());
                prop_assert_eq!(layout.to_axial_wide(a, b), Ok(axial));
            }
        }

        #[test]
        fn native_round_trip(a in -200i32..200, b in -200i32..200) {
            for layout in ALL_LAYOUTS {
                let Ok(axial) = layout.to_axial(a, b) else {
                    continue;
                };
                prop_assert_eq!(layout.encode(axial), (i64::from(a), i64::from(b)));
            }
        }

        #[test]
        fn directions_reach_axial_neighbors(q in -100i32..100, r in -100i32..100) {
            let axial = Axial::new(q, r);
            let mut expected = axial.neighbors().to_vec();
            expected.sort();
            for layout in ALL_LAYOUTS {
                let (a, b) = layout.encode(axial);
                let mut reached: Vec<Axial> = layout
                    .directions(a, b)
                    .iter()
                    .map(|&(da, db)| {
                        layout.to_axial_wide(a + i64::from(da), b + i64::from(db)).unwrap()
                    })
                    .collect();
                reached.sort();
                prop_assert_eq!(&reached, &expected, "layout {}", layout);
            }
        }

        #[test]
        fn native_distance_matches_axial(
            q1 in -60i32..60, r1 in -60i32..60,
            q2 in -60i32..60, r2 in -60i32..60,
        ) {
            let lhs = Axial::new(q1, r1);
            let rhs = Axial::new(q2, r2);
            for layout in ALL_LAYOUTS {
                prop_assert_eq!(
                    layout.distance(layout.encode(lhs), layout.encode(rhs)),
                    i64::from(lhs.distance_to(rhs))
                );
            }
        }
    }
}
