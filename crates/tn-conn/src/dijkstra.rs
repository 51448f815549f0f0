//! Single-source Dijkstra with destination early exit.
//!
//! # Frontier
//!
//! The frontier starts as a snapshot of every registered location: the
//! source at distance 0, everything else at "infinity" (`None`).  Selection
//! of the minimum is done with a binary heap holding `(distance, name)`
//! pairs and lazy deletion; the frontier map stays the authority on which
//! locations are still unfinalized and what their tentative distance is.
//!
//! Ties on distance are broken by the smaller location name, so results
//! are deterministic regardless of hash-map iteration order.
//!
//! # Cache population
//!
//! Every finalized location's best path is handed to the cache as soon as
//! it is fixed, not only the destination's.  A run from `s` to `d`
//! therefore also answers later queries from any node on any of those
//! paths.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use tn_core::{LocationName, Miles};
use tn_network::{NetworkView, Segment};

use crate::cache::PathCache;
use crate::path::{Hop, Path};

pub(crate) fn shortest_path<N: NetworkView>(
    network:     &N,
    source:      &LocationName,
    destination: &LocationName,
    mut cache:   Option<&mut PathCache>,
) -> Option<Path> {
    // frontier[v] = tentative distance; absent once v is finalized.
    let mut frontier: HashMap<&LocationName, Option<Miles>> =
        network.locations().map(|l| (l.name(), None)).collect();
    let source = network.location(source.as_str())?.name();
    frontier.insert(source, Some(Miles::ZERO));

    // via[v] = segment on the best known path that arrives at v.
    let mut via: HashMap<&LocationName, &Segment> = HashMap::new();

    let mut heap: BinaryHeap<Reverse<(Miles, &LocationName)>> = BinaryHeap::new();
    heap.push(Reverse((Miles::ZERO, source)));

    let mut finalized = 0usize;

    while let Some(Reverse((dist, name))) = heap.pop() {
        // Skip stale heap entries.
        match frontier.get(name) {
            Some(Some(d)) if *d == dist => {}
            _ => continue,
        }
        frontier.remove(name);
        finalized += 1;

        let best = best_path(&via, name);
        if let Some(cache) = cache.as_deref_mut() {
            cache.insert(&best);
        }

        if name == destination {
            debug!(%source, %destination, finalized, length = %dist, "dijkstra reached destination");
            return Some(best);
        }

        let Some(loc) = network.location(name.as_str()) else {
            continue;
        };
        for seg_name in loc.outgoing() {
            let Some(seg) = network.segment(seg_name.as_str()) else {
                continue;
            };
            let Some(next) = seg.destination() else {
                continue;
            };
            // Finalized, or not part of this run's snapshot.
            let Some(tentative) = frontier.get_mut(next) else {
                continue;
            };
            let candidate = dist + seg.length();
            if tentative.is_none_or(|t| candidate < t) {
                *tentative = Some(candidate);
                via.insert(next, seg);
                heap.push(Reverse((candidate, next)));
            }
        }
    }

    debug!(%source, %destination, finalized, "dijkstra exhausted frontier; no route");
    None
}

/// Rebuild the best known path into `to` by following `via` back to the
/// source.
fn best_path(via: &HashMap<&LocationName, &Segment>, to: &LocationName) -> Path {
    let mut hops = Vec::new();
    let mut cur = to;
    while let Some(seg) = via.get(cur) {
        let (Some(hop), Some(prev)) = (Hop::of(seg), seg.source()) else {
            break;
        };
        hops.push(hop);
        cur = prev;
    }
    hops.reverse();
    Path::from_hops(hops)
}
