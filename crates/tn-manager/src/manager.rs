//! `TravelNetworkManager`: the single entry point that mutates a network.

use tracing::debug;

use tn_conn::{Conn, Path};
use tn_core::{ConnConfig, LocationKind, Miles, SegmentKind};
use tn_network::{Location, NetworkResult, Segment, TravelNetwork};

use crate::NetworkTracker;

/// Owns a [`TravelNetwork`] and the [`Conn`] engine that answers queries
/// about it.
///
/// Every mutation goes through the manager so the engine's cache hooks run
/// in the right order relative to the arena change:
///
/// | Mutation              | Order                                        |
/// |-----------------------|----------------------------------------------|
/// | location delete       | `Conn::on_location_del`, then arena removal  |
/// | segment delete        | `Conn::on_segment_del`, then arena removal   |
/// | re-attach / resize    | arena change, then `Conn::on_segment_change` |
///
/// Creation never touches the cache: a new location or a detached segment
/// cannot appear on any cached route.
#[derive(Debug, Default)]
pub struct TravelNetworkManager {
    network: TravelNetwork,
    conn:    Conn,
    tracker: NetworkTracker,
}

impl TravelNetworkManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConnConfig) -> Self {
        Self { conn: Conn::with_config(config), ..Self::default() }
    }

    /// Take over an already-built network, e.g. one from the CSV loader.
    pub fn from_network(network: TravelNetwork, config: ConnConfig) -> Self {
        let tracker = NetworkTracker::of(&network);
        Self { network, conn: Conn::with_config(config), tracker }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn network(&self) -> &TravelNetwork {
        &self.network
    }

    pub fn conn(&self) -> &Conn {
        &self.conn
    }

    /// Mutable engine access for cache control (enable, disable, clear).
    pub fn conn_mut(&mut self) -> &mut Conn {
        &mut self.conn
    }

    pub fn tracker(&self) -> &NetworkTracker {
        &self.tracker
    }

    // ── Creation ──────────────────────────────────────────────────────────

    pub fn residence_new(&mut self, name: &str) -> NetworkResult<&Location> {
        self.location_new(name, LocationKind::Residence)
    }

    pub fn airport_new(&mut self, name: &str) -> NetworkResult<&Location> {
        self.location_new(name, LocationKind::Airport)
    }

    pub fn road_new(&mut self, name: &str, length: Miles) -> NetworkResult<&Segment> {
        self.segment_new(name, SegmentKind::Road, length)
    }

    pub fn flight_new(&mut self, name: &str, length: Miles) -> NetworkResult<&Segment> {
        self.segment_new(name, SegmentKind::Flight, length)
    }

    fn location_new(&mut self, name: &str, kind: LocationKind) -> NetworkResult<&Location> {
        let loc = self.network.add_location(name, kind)?;
        self.tracker.location_added(kind);
        Ok(loc)
    }

    fn segment_new(&mut self, name: &str, kind: SegmentKind, length: Miles) -> NetworkResult<&Segment> {
        let seg = self.network.add_segment(name, kind, length)?;
        self.tracker.segment_added(kind);
        Ok(seg)
    }

    // ── Attachment ────────────────────────────────────────────────────────

    /// Set or clear the source of `segment`.  See
    /// [`TravelNetwork::set_source`] for the error cases; on error nothing
    /// changes, cache included.
    pub fn segment_source_is(&mut self, segment: &str, location: Option<&str>) -> NetworkResult<()> {
        self.network.set_source(segment, location)?;
        self.segment_changed(segment);
        Ok(())
    }

    /// Set or clear the destination of `segment`.
    pub fn segment_destination_is(&mut self, segment: &str, location: Option<&str>) -> NetworkResult<()> {
        self.network.set_destination(segment, location)?;
        self.segment_changed(segment);
        Ok(())
    }

    pub fn segment_length_is(&mut self, segment: &str, length: Miles) -> NetworkResult<()> {
        self.network.set_length(segment, length)?;
        self.segment_changed(segment);
        Ok(())
    }

    fn segment_changed(&mut self, segment: &str) {
        if let Some(seg) = self.network.segment(segment) {
            self.conn.on_segment_change(seg);
        }
    }

    // ── Deletion ──────────────────────────────────────────────────────────

    /// Delete a location, detaching its incident segments.  `None` if no
    /// such location exists.
    pub fn location_del(&mut self, name: &str) -> Option<Location> {
        let loc = self.network.location(name)?;
        self.conn.on_location_del(loc);
        let loc = self.network.remove_location(name)?;
        self.tracker.location_removed(loc.kind());
        debug!(location = %loc.name(), "location deleted");
        Some(loc)
    }

    /// Delete a segment, detaching it from both endpoints.
    pub fn segment_del(&mut self, name: &str) -> Option<Segment> {
        let seg = self.network.segment(name)?;
        self.conn.on_segment_del(seg);
        let seg = self.network.remove_segment(name)?;
        self.tracker.segment_removed(seg.kind());
        debug!(segment = %seg.name(), "segment deleted");
        Some(seg)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn shortest_path(&mut self, source: &str, destination: &str) -> Option<Path> {
        self.conn.shortest_path(&self.network, source, destination)
    }

    pub fn paths(&self, origin: &str, max_length: Miles) -> Vec<Path> {
        self.conn.paths(&self.network, origin, max_length)
    }
}
