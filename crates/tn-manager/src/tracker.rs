//! Per-kind population counts.

use tn_core::{LocationKind, SegmentKind};
use tn_network::TravelNetwork;

/// Live counts of registered locations and segments, by kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkTracker {
    residences: usize,
    airports:   usize,
    roads:      usize,
    flights:    usize,
}

impl NetworkTracker {
    /// Count an existing network.
    pub fn of(network: &TravelNetwork) -> Self {
        let mut t = Self::default();
        for l in network.locations() {
            t.location_added(l.kind());
        }
        for s in network.segments() {
            t.segment_added(s.kind());
        }
        t
    }

    pub fn locations(&self) -> usize {
        self.residences + self.airports
    }

    pub fn residences(&self) -> usize {
        self.residences
    }

    pub fn airports(&self) -> usize {
        self.airports
    }

    pub fn segments(&self) -> usize {
        self.roads + self.flights
    }

    pub fn roads(&self) -> usize {
        self.roads
    }

    pub fn flights(&self) -> usize {
        self.flights
    }

    pub(crate) fn location_added(&mut self, kind: LocationKind) {
        *self.location_slot(kind) += 1;
    }

    pub(crate) fn location_removed(&mut self, kind: LocationKind) {
        let n = self.location_slot(kind);
        *n = n.saturating_sub(1);
    }

    pub(crate) fn segment_added(&mut self, kind: SegmentKind) {
        *self.segment_slot(kind) += 1;
    }

    pub(crate) fn segment_removed(&mut self, kind: SegmentKind) {
        let n = self.segment_slot(kind);
        *n = n.saturating_sub(1);
    }

    fn location_slot(&mut self, kind: LocationKind) -> &mut usize {
        match kind {
            LocationKind::Residence => &mut self.residences,
            LocationKind::Airport   => &mut self.airports,
        }
    }

    fn segment_slot(&mut self, kind: SegmentKind) -> &mut usize {
        match kind {
            SegmentKind::Road   => &mut self.roads,
            SegmentKind::Flight => &mut self.flights,
        }
    }
}
