//! Segment and path length.
//!
//! `Miles` is the only way a length enters the graph, so the non-negativity
//! Dijkstra relies on is checked once here and never again downstream.
//! Non-finite values are rejected too, which makes the type totally ordered
//! and usable as a heap key.

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use crate::{TnError, TnResult};

/// A non-negative, finite distance in miles.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Miles(f64);

impl Miles {
    pub const ZERO: Miles = Miles(0.0);

    /// Validate and wrap `value`.
    ///
    /// # Errors
    ///
    /// [`TnError::Range`] if `value` is negative, NaN, or infinite.
    pub fn new(value: f64) -> TnResult<Self> {
        if !value.is_finite() {
            return Err(TnError::Range(format!("Miles must be finite (got {value})")));
        }
        if value < 0.0 {
            return Err(TnError::Range(format!("Miles cannot be negative (got {value})")));
        }
        // Normalises -0.0 so equality and ordering agree.
        Ok(Miles(value + 0.0))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Miles {
    type Error = TnError;
    fn try_from(value: f64) -> TnResult<Self> {
        Miles::new(value)
    }
}

impl From<Miles> for f64 {
    #[inline]
    fn from(m: Miles) -> f64 {
        m.0
    }
}

impl PartialEq for Miles {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Miles {}

impl PartialOrd for Miles {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Miles {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Miles {
    type Output = Miles;

    /// Saturates at `f64::MAX` so the sum stays finite.
    #[inline]
    fn add(self, rhs: Miles) -> Miles {
        Miles((self.0 + rhs.0).min(f64::MAX))
    }
}

impl Sum for Miles {
    fn sum<I: Iterator<Item = Miles>>(iter: I) -> Miles {
        iter.fold(Miles::ZERO, Add::add)
    }
}

impl fmt::Display for Miles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
