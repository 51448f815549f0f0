//! Last-hop shortest-path cache.
//!
//! # Representation
//!
//! ```text
//! destination ─▶ { source ─▶ last-hop segment }
//! ```
//!
//! Only the first segment of the believed-shortest path from `source` toward
//! `destination` is stored.  A full path is rebuilt by walking forward from
//! `source`: look up `(destination, current)`, append that segment, move to
//! its destination, repeat until `current == destination`.
//!
//! Storing one segment name per (source, destination) pair instead of a whole
//! path works because any suffix of a shortest path is itself a shortest
//! path.  Inserting a path therefore records an entry for *every* node on it,
//! and one Dijkstra run populates the cache for every node it finalizes.
//!
//! # Degradation
//!
//! Invalidation can remove entries from the middle of a chain.  A walk that
//! runs into a missing, unregistered, misattached, or looping link abandons
//! its partial result and reports a miss; the caller recomputes.

use std::collections::HashSet;

use tracing::{debug, trace};

use tn_core::{LocationName, SegmentName};
use tn_network::{Location, NetworkView};

use crate::path::{Hop, Path};
use crate::CacheStats;

#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

type Bucket = Map<LocationName, SegmentName>;

/// Destination-indexed, then source-indexed, store of last-hop segment names.
#[derive(Debug, Default, Clone)]
pub struct PathCache {
    buckets: Map<LocationName, Bucket>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Inspection ────────────────────────────────────────────────────────

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of destinations with at least one entry.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total (source, destination) entries across all buckets.
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum()
    }

    /// The recorded first segment from `source` toward `destination`.
    pub fn last_hop(&self, destination: &str, source: &str) -> Option<&SegmentName> {
        self.buckets.get(destination)?.get(source)
    }

    /// Sources with an entry toward `destination`, in unspecified order.
    pub fn sources_toward(&self, destination: &str) -> impl Iterator<Item = &LocationName> + '_ {
        self.buckets.get(destination).into_iter().flat_map(|b| b.keys())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Rebuild the cached path from `source` to `destination`.
    ///
    /// `source == destination` yields the empty path and leaves `stats`
    /// untouched.  Otherwise exactly one request is counted, resolved as
    /// either a hit or a miss.
    pub fn lookup<N: NetworkView>(
        &self,
        network:     &N,
        source:      &LocationName,
        destination: &LocationName,
        stats:       &mut CacheStats,
    ) -> Option<Path> {
        if source == destination {
            return Some(Path::empty());
        }

        let bucket = match self.buckets.get(destination) {
            Some(b) if b.contains_key(source) => b,
            _ => {
                stats.record_miss();
                debug!(%source, %destination, "path cache miss");
                return None;
            }
        };

        match walk(network, bucket, source, destination) {
            Some(path) => {
                stats.record_hit();
                debug!(%source, %destination, hops = path.segment_count(), "path cache hit");
                Some(path)
            }
            None => {
                stats.record_miss();
                debug!(%source, %destination, "path cache miss: broken chain");
                None
            }
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Record `path` as the shortest route to its destination from every
    /// node on it.
    ///
    /// For each hop, `(path.destination, hop.source) → hop.segment` is
    /// stored, replacing any previous entry.  The empty path is ignored.
    pub fn insert(&mut self, path: &Path) {
        let Some(destination) = path.destination() else {
            return;
        };
        let bucket = self.buckets.entry(destination.clone()).or_default();
        for hop in path.hops() {
            bucket.insert(hop.source.clone(), hop.segment.clone());
        }
        trace!(%destination, hops = path.segment_count(), "path cached");
    }

    // ── Invalidation ──────────────────────────────────────────────────────

    /// Drop every bucket.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Remove everything that refers to `location`, which is about to be
    /// deleted: its own bucket, every entry keyed by it, and every entry
    /// whose last hop is one of its incoming segments.
    ///
    /// `location` must still carry its pre-deletion incident lists.  Returns
    /// the number of entries removed.
    pub fn invalidate_location(&mut self, location: &Location) -> usize {
        let name = location.name();
        let mut removed = self.buckets.remove(name).map_or(0, |b| b.len());

        let incoming: HashSet<&SegmentName> = location.incoming().iter().collect();
        removed += self.remove_entries(|src, seg| src == name || incoming.contains(seg));
        removed
    }

    /// Remove every entry whose last hop is `segment`.  Returns the number of
    /// entries removed.
    pub fn invalidate_segment(&mut self, segment: &SegmentName) -> usize {
        self.remove_entries(|_, seg| seg == segment)
    }

    /// Remove entries matching `pred` from every bucket, dropping buckets
    /// left empty.
    fn remove_entries(&mut self, mut pred: impl FnMut(&LocationName, &SegmentName) -> bool) -> usize {
        let mut removed = 0;
        for bucket in self.buckets.values_mut() {
            let before = bucket.len();
            bucket.retain(|src, seg| !pred(src, seg));
            removed += before - bucket.len();
        }
        self.buckets.retain(|_, b| !b.is_empty());
        removed
    }
}

/// Follow last-hop links from `source` until `destination`.
///
/// A well-formed chain visits each source at most once, so a walk longer
/// than the bucket has entries is a loop left behind by invalidation.
fn walk<N: NetworkView>(
    network:     &N,
    bucket:      &Bucket,
    source:      &LocationName,
    destination: &LocationName,
) -> Option<Path> {
    let mut hops: Vec<Hop> = Vec::new();
    let mut current = source.clone();

    while current != *destination {
        if hops.len() >= bucket.len() {
            return None;
        }
        let seg_name = bucket.get(&current)?;
        let seg = network.segment(seg_name.as_str())?;
        if seg.source() != Some(&current) {
            return None;
        }
        let hop = Hop::of(seg)?;
        current = hop.destination.clone();
        hops.push(hop);
    }

    Some(Path::from_hops(hops))
}
