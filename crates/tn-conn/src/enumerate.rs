//! Bounded enumeration of simple paths.
//!
//! Depth-first: a path is extended one outgoing segment at a time and every
//! extension that stays within budget is emitted before its own extensions
//! (pre-order).  The visited set is per branch; a location is removed from it
//! on backtrack so sibling branches may pass through it.
//!
//! The number of results is exponential in branching factor and budget in
//! the worst case.  Callers asking for "all routes under N" get all of them.

use std::collections::HashSet;

use tn_core::{LocationName, Miles};
use tn_network::{Location, NetworkView};

use crate::path::{Hop, Path};

pub(crate) fn paths<N: NetworkView>(network: &N, origin: &str, max_length: Miles) -> Vec<Path> {
    let Some(origin) = network.location(origin) else {
        return Vec::new();
    };
    let mut visited: HashSet<&LocationName> = HashSet::from([origin.name()]);
    let mut out = Vec::new();
    extend(network, origin, &Path::empty(), max_length, &mut visited, &mut out);
    out
}

fn extend<'a, N: NetworkView>(
    network:    &'a N,
    at:         &'a Location,
    prefix:     &Path,
    max_length: Miles,
    visited:    &mut HashSet<&'a LocationName>,
    out:        &mut Vec<Path>,
) {
    for seg_name in at.outgoing() {
        let Some(seg) = network.segment(seg_name.as_str()) else {
            continue;
        };
        // Detached destination.
        let Some(hop) = Hop::of(seg) else {
            continue;
        };
        if prefix.length() + hop.length > max_length {
            continue;
        }
        let Some(next) = network.location(hop.destination.as_str()) else {
            continue;
        };
        if !visited.insert(next.name()) {
            continue;
        }

        let path = prefix.extended(hop);
        out.push(path.clone());
        extend(network, next, &path, max_length, visited, out);

        visited.remove(next.name());
    }
}
