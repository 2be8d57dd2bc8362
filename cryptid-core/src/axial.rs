//! Canonical axial hex vectors
//!
//! Every coordinate layout converts to and from `Axial`, and all range,
//! reflection and identity logic lives here once.
//!
//! The grid is finite: a location belongs to it when it is at most
//! `MAX_LENGTH` steps from the origin. Within that bound every layout's
//! native fields, and the sum or difference of two of them, fit in `i32`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Axial hex coordinates (cube `s` is derived as `-q - r`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

/// Largest distance from the origin of a grid location
pub const MAX_LENGTH: i32 = 1 << 28;

/// Direction vectors in axial coordinates (dq, dr)
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const AXIAL_DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),   // E
    (1, -1),  // NE
    (0, -1),  // NW
    (-1, 0),  // W
    (-1, 1),  // SW
    (0, 1),   // SE
];

impl Axial {
    pub const ORIGIN: Axial = Axial::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Grid location from widened components, `None` when it lies farther
    /// than `MAX_LENGTH` from the origin
    pub fn bounded(q: i64, r: i64) -> Option<Axial> {
        let limit = u64::from(MAX_LENGTH.unsigned_abs());
        let length = q
            .unsigned_abs()
            .max(r.unsigned_abs())
            .max(q.saturating_add(r).unsigned_abs());
        if length > limit {
            return None;
        }
        Some(Axial::new(i32::try_from(q).ok()?, i32::try_from(r).ok()?))
    }

    pub fn is_on_grid(&self) -> bool {
        Axial::bounded(self.q.into(), self.r.into()).is_some()
    }

    /// Third cube coordinate
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin
    pub fn length(&self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s().abs())
    }

    /// Distance between two hexes: `max(|dq|, |dr|, |ds|)`
    pub fn distance_to(&self, other: Axial) -> i32 {
        (*self - other).length()
    }

    pub fn neighbors(&self) -> [Axial; 6] {
        AXIAL_DIRECTIONS.map(|(dq, dr)| *self + Axial::new(dq, dr))
    }

    /// All grid hexes at distance `0..=n` from `self`; `3n(n+1)+1` of them
    /// when the range lies inside the grid.
    ///
    /// Walks the axial parallelogram `q in [-n, n]`,
    /// `r in [max(-n, -n-q), min(n, n-q)]` lazily, so callers that stop at
    /// the first match never enumerate the rest. Bounds are computed in
    /// `i64` and clipped to the grid, so any radius is accepted.
    pub fn within_range(self, n: u32) -> impl Iterator<Item = Axial> {
        let n = i64::from(n);
        let limit = i64::from(MAX_LENGTH);
        let (q0, r0) = (i64::from(self.q), i64::from(self.r));
        let q_span = (q0 - n).max(-limit)..=(q0 + n).min(limit);
        q_span.flat_map(move |q| {
            let dq = q - q0;
            let low = (r0 + (-n).max(-n - dq)).max(-limit).max(-limit - q);
            let high = (r0 + n.min(n - dq)).min(limit).min(limit - q);
            (low..=high).filter_map(move |r| Axial::bounded(q, r))
        })
    }

    /// Point reflection: `2 * pivot - self`
    pub fn reflect_over(&self, pivot: Axial) -> Axial {
        pivot * 2 - *self
    }

    /// Mirror across the axis through the origin along which `q` is fixed
    /// (cube: swap r and s)
    pub fn reflect_over_q_axis(&self) -> Axial {
        Axial::new(self.q, self.s())
    }

    /// Cube: swap q and s
    pub fn reflect_over_r_axis(&self) -> Axial {
        Axial::new(self.s(), self.r)
    }

    /// Cube: swap q and r
    pub fn reflect_over_s_axis(&self) -> Axial {
        Axial::new(self.r, self.q)
    }

    /// Mirror across the line of hexes whose `q` equals `q`
    pub fn reflect_over_q(&self, q: i32) -> Axial {
        let reference = Axial::new(q, 0);
        -(*self - reference).reflect_over_q_axis() + reference
    }

    /// Mirror across the line of hexes whose `r` equals `r`
    pub fn reflect_over_r(&self, r: i32) -> Axial {
        let reference = Axial::new(0, r);
        -(*self - reference).reflect_over_r_axis() + reference
    }

    /// Mirror across the line of hexes whose `s` equals `s`
    pub fn reflect_over_s(&self, s: i32) -> Axial {
        let reference = Axial::new(-s, 0);
        -(*self - reference).reflect_over_s_axis() + reference
    }
}

impl Add for Axial {
    type Output = Axial;

    fn add(self, other: Axial) -> Axial {
        Axial::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for Axial {
    type Output = Axial;

    fn sub(self, other: Axial) -> Axial {
        Axial::new(self.q - other.q, self.r - other.r)
    }
}

impl Neg for Axial {
    type Output = Axial;

    fn neg(self) -> Axial {
        Axial::new(-self.q, -self.r)
    }
}

impl Mul<i32> for Axial {
    type Output = Axial;

    fn mul(self, k: i32) -> Axial {
        Axial::new(self.q * k, self.r * k)
    }
}
