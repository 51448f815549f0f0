//! Graph vertices and edges as stored in the arena.
//!
//! Both types reference each other by name only.  The arena in
//! [`crate::network`] is the sole writer and keeps the two sides in step: a
//! segment is in `loc.outgoing()` iff `seg.source() == Some(loc.name())`, and
//! likewise for `incoming()` / `destination()`.

use tn_core::{LocationKind, LocationName, Miles, SegmentKind, SegmentName};

// ── Location ──────────────────────────────────────────────────────────────────

/// A graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name:     LocationName,
    kind:     LocationKind,
    outgoing: Vec<SegmentName>,
    incoming: Vec<SegmentName>,
}

impl Location {
    pub(crate) fn new(name: LocationName, kind: LocationKind) -> Self {
        Self { name, kind, outgoing: Vec::new(), incoming: Vec::new() }
    }

    #[inline]
    pub fn name(&self) -> &LocationName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// Segments whose source is this location, in attachment order.
    #[inline]
    pub fn outgoing(&self) -> &[SegmentName] {
        &self.outgoing
    }

    /// Segments whose destination is this location, in attachment order.
    #[inline]
    pub fn incoming(&self) -> &[SegmentName] {
        &self.incoming
    }

    pub(crate) fn push_outgoing(&mut self, seg: &SegmentName) {
        if !self.outgoing.contains(seg) {
            self.outgoing.push(seg.clone());
        }
    }

    pub(crate) fn push_incoming(&mut self, seg: &SegmentName) {
        if !self.incoming.contains(seg) {
            self.incoming.push(seg.clone());
        }
    }

    pub(crate) fn remove_outgoing(&mut self, seg: &SegmentName) {
        self.outgoing.retain(|s| s != seg);
    }

    pub(crate) fn remove_incoming(&mut self, seg: &SegmentName) {
        self.incoming.retain(|s| s != seg);
    }

    pub(crate) fn take_incident(&mut self) -> (Vec<SegmentName>, Vec<SegmentName>) {
        (std::mem::take(&mut self.outgoing), std::mem::take(&mut self.incoming))
    }
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// A directed, weighted edge.  Either endpoint may be absent (detached).
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    name:        SegmentName,
    kind:        SegmentKind,
    source:      Option<LocationName>,
    destination: Option<LocationName>,
    length:      Miles,
}

impl Segment {
    pub(crate) fn new(name: SegmentName, kind: SegmentKind, length: Miles) -> Self {
        Self { name, kind, source: None, destination: None, length }
    }

    #[inline]
    pub fn name(&self) -> &SegmentName {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    #[inline]
    pub fn source(&self) -> Option<&LocationName> {
        self.source.as_ref()
    }

    #[inline]
    pub fn destination(&self) -> Option<&LocationName> {
        self.destination.as_ref()
    }

    #[inline]
    pub fn length(&self) -> Miles {
        self.length
    }

    pub(crate) fn set_source(&mut self, loc: Option<LocationName>) -> Option<LocationName> {
        std::mem::replace(&mut self.source, loc)
    }

    pub(crate) fn set_destination(&mut self, loc: Option<LocationName>) -> Option<LocationName> {
        std::mem::replace(&mut self.destination, loc)
    }

    pub(crate) fn set_length(&mut self, length: Miles) {
        self.length = length;
    }
}
