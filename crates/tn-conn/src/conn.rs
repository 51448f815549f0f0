//! The `Conn` connectivity engine.

use tracing::debug;

use tn_core::{ConnConfig, InvalidationPolicy, Miles};
use tn_network::{Location, NetworkView, Segment};

use crate::cache::PathCache;
use crate::path::Path;
use crate::{CacheStats, dijkstra, enumerate};

/// Route queries over a [`NetworkView`], with a shortest-path cache.
///
/// `Conn` does not own the network.  Every query borrows it for the duration
/// of the call, the same way a router borrows a road graph.  The cache is
/// derived state and is kept valid by the deletion hooks
/// [`on_location_del`](Self::on_location_del) and
/// [`on_segment_del`](Self::on_segment_del), which the owner of the network
/// must call *before* removing anything.
///
/// # Example
///
/// ```
/// use tn_conn::Conn;
/// use tn_core::{LocationKind, Miles, SegmentKind};
/// use tn_network::TravelNetwork;
///
/// let mut net = TravelNetwork::new();
/// for n in ["a", "b"] {
///     net.add_location(n, LocationKind::Residence).unwrap();
/// }
/// net.add_segment("ab", SegmentKind::Road, Miles::new(4.0).unwrap()).unwrap();
/// net.set_source("ab", Some("a")).unwrap();
/// net.set_destination("ab", Some("b")).unwrap();
///
/// let mut conn = Conn::new();
/// let path = conn.shortest_path(&net, "a", "b").unwrap();
/// assert_eq!(path.length().value(), 4.0);
/// assert!(conn.shortest_path(&net, "b", "a").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Conn {
    config: ConnConfig,
    cache:  PathCache,
    stats:  CacheStats,
}

impl Conn {
    /// Engine with the default configuration (cache on, precise invalidation).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ConnConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn config(&self) -> &ConnConfig {
        &self.config
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// All simple paths starting at `origin` whose length is at most
    /// `max_length`.
    ///
    /// An unregistered origin yields no paths.  Neither the cache nor the
    /// statistics are touched.
    pub fn paths<N: NetworkView>(&self, network: &N, origin: &str, max_length: Miles) -> Vec<Path> {
        enumerate::paths(network, origin, max_length)
    }

    /// The shortest path from `source` to `destination`, or `None` if either
    /// is unregistered or no route exists.
    ///
    /// `source == destination` returns the empty path without consulting the
    /// cache.  Otherwise, with the cache enabled, a cached answer is returned
    /// if one can be rebuilt; on a miss Dijkstra runs and caches every path
    /// it finalizes along the way.
    pub fn shortest_path<N: NetworkView>(
        &mut self,
        network:     &N,
        source:      &str,
        destination: &str,
    ) -> Option<Path> {
        let src = network.location(source)?.name();
        let dst = network.location(destination)?.name();
        if src == dst {
            return Some(Path::empty());
        }

        if !self.config.cache_enabled {
            return dijkstra::shortest_path(network, src, dst, None);
        }
        if let Some(path) = self.cache.lookup(network, src, dst, &mut self.stats) {
            return Some(path);
        }
        dijkstra::shortest_path(network, src, dst, Some(&mut self.cache))
    }

    // ── Cache control ─────────────────────────────────────────────────────

    pub fn cache_enabled(&self) -> bool {
        self.config.cache_enabled
    }

    /// Enable or disable the cache.  Disabling keeps the cached entries (and
    /// keeps invalidating them), so re-enabling resumes where it left off.
    pub fn set_cache_enabled(&mut self, enabled: bool) {
        self.config.cache_enabled = enabled;
    }

    /// Drop every cached entry.  Statistics are not reset.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    // ── Mutation hooks ────────────────────────────────────────────────────

    /// `location` is about to be deleted.
    ///
    /// Must be called while `location` still lists its incident segments,
    /// i.e. before the network detaches them.
    pub fn on_location_del(&mut self, location: &Location) {
        let removed = match self.config.invalidation {
            InvalidationPolicy::Precise => self.cache.invalidate_location(location),
            InvalidationPolicy::FullFlush => self.flush(),
        };
        debug!(location = %location.name(), removed, "cache invalidated for location delete");
    }

    /// `segment` is about to be deleted.
    pub fn on_segment_del(&mut self, segment: &Segment) {
        let removed = match self.config.invalidation {
            InvalidationPolicy::Precise => self.cache.invalidate_segment(segment.name()),
            InvalidationPolicy::FullFlush => self.flush(),
        };
        debug!(segment = %segment.name(), removed, "cache invalidated for segment delete");
    }

    /// `segment` has been re-attached, detached, or given a new length.
    ///
    /// Under [`InvalidationPolicy::Precise`] the entries that use `segment`
    /// as a last hop are dropped, as for a deletion; under
    /// [`InvalidationPolicy::FullFlush`] the cache is cleared.  Only the
    /// segment's name is consulted, so this may run on either side of the
    /// change.
    pub fn on_segment_change(&mut self, segment: &Segment) {
        let removed = match self.config.invalidation {
            InvalidationPolicy::Precise => self.cache.invalidate_segment(segment.name()),
            InvalidationPolicy::FullFlush => self.flush(),
        };
        debug!(segment = %segment.name(), removed, "cache invalidated for segment change");
    }

    fn flush(&mut self) -> usize {
        let n = self.cache.entry_count();
        self.cache.clear();
        n
    }
}
