//! Location and segment kinds shared across all network crates.
//!
//! Kinds are closed enums.  Which kinds may be linked is decided by
//! [`can_attach`] at edge-attachment time rather than by inspecting concrete
//! types at runtime.

use std::fmt;

/// What a location is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    /// A home or other road-only endpoint.
    Residence,
    /// Reachable by both roads and flights.
    Airport,
}

impl LocationKind {
    /// Human-readable label, matching the CSV loader's `kind` column.
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Residence => "residence",
            LocationKind::Airport   => "airport",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a segment is.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentKind {
    Road,
    Flight,
}

impl SegmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Road   => "road",
            SegmentKind::Flight => "flight",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `true` if a segment of `segment` kind may use a location of `location`
/// kind as either endpoint.
///
/// | Segment  | Residence | Airport |
/// |----------|-----------|---------|
/// | `Road`   | yes       | yes     |
/// | `Flight` | no        | yes     |
#[inline]
pub fn can_attach(location: LocationKind, segment: SegmentKind) -> bool {
    match (location, segment) {
        (_, SegmentKind::Road) => true,
        (LocationKind::Airport, SegmentKind::Flight) => true,
        (LocationKind::Residence, SegmentKind::Flight) => false,
    }
}
