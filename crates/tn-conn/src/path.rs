//! The `Path` value type.
//!
//! A path stores a snapshot of each hop (segment name, both endpoints, and
//! length at the time the path was built).  It therefore stays printable and
//! comparable after the graph it came from has changed, and never needs the
//! network to answer `source()`, `destination()`, or `length()`.

use std::fmt;

use tn_core::{LocationName, Miles, SegmentName};
use tn_network::Segment;

// ── Hop ───────────────────────────────────────────────────────────────────────

/// One traversed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hop {
    pub segment:     SegmentName,
    pub source:      LocationName,
    pub destination: LocationName,
    pub length:      Miles,
}

impl Hop {
    /// Snapshot `seg`, or `None` if either end is detached.
    pub fn of(seg: &Segment) -> Option<Hop> {
        Some(Hop {
            segment:     seg.name().clone(),
            source:      seg.source()?.clone(),
            destination: seg.destination()?.clone(),
            length:      seg.length(),
        })
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

/// An ordered sequence of contiguous hops: each hop's destination is the next
/// hop's source.
///
/// Paths are values.  [`extended`](Self::extended) returns a new path and
/// leaves `self` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    hops:   Vec<Hop>,
    length: Miles,
}

impl Path {
    /// The zero-length path with no hops.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a path from hops already known to be contiguous.
    pub(crate) fn from_hops(hops: Vec<Hop>) -> Self {
        debug_assert!(hops.windows(2).all(|w| w[0].destination == w[1].source));
        let length = hops.iter().map(|h| h.length).sum();
        Self { hops, length }
    }

    /// A new path equal to `self` followed by `hop`.
    pub fn extended(&self, hop: Hop) -> Self {
        debug_assert!(self.destination().is_none_or(|d| *d == hop.source));
        let mut hops = Vec::with_capacity(self.hops.len() + 1);
        hops.extend_from_slice(&self.hops);
        let length = self.length + hop.length;
        hops.push(hop);
        Self { hops, length }
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Segment names in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = &SegmentName> + '_ {
        self.hops.iter().map(|h| &h.segment)
    }

    /// Every location visited, source first.  Empty for the empty path.
    pub fn locations(&self) -> Vec<&LocationName> {
        let mut v: Vec<&LocationName> = self.hops.iter().map(|h| &h.source).collect();
        if let Some(last) = self.hops.last() {
            v.push(&last.destination);
        }
        v
    }

    pub fn segment_count(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Sum of hop lengths.  Zero for the empty path.
    pub fn length(&self) -> Miles {
        self.length
    }

    /// Source of the first hop; `None` for the empty path.
    pub fn source(&self) -> Option<&LocationName> {
        self.hops.first().map(|h| &h.source)
    }

    /// Destination of the last hop; `None` for the empty path.
    pub fn destination(&self) -> Option<&LocationName> {
        self.hops.last().map(|h| &h.destination)
    }
}

/// `src(seg:len) mid(seg:len) dst`.  The empty path renders as `""`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for h in &self.hops {
            write!(f, "{}({}:{}) ", h.source, h.segment, h.length)?;
        }
        if let Some(dst) = self.destination() {
            write!(f, "{dst}")?;
        }
        Ok(())
    }
}
