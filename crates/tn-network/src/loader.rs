//! CSV network loader.
//!
//! # CSV format
//!
//! Two files: one row per location, one row per segment.
//!
//! ```csv
//! name,kind
//! loc1,residence
//! sfo,airport
//! ```
//!
//! ```csv
//! name,kind,source,destination,length
//! road-1,road,loc1,sfo,15
//! road-2,road,loc1,,5
//! ```
//!
//! **`kind`** is `residence` / `airport` for locations and `road` / `flight`
//! for segments.  An empty `source` or `destination` cell leaves that end of
//! the segment detached.  All locations are registered before any segment is
//! attached, so row order only matters within each file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tn_core::{LocationKind, Miles, SegmentKind};

use crate::{NetworkError, NetworkResult, TravelNetwork};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    name: String,
    kind: String,
}

#[derive(Deserialize)]
struct SegmentRecord {
    name:        String,
    kind:        String,
    source:      Option<String>,
    destination: Option<String>,
    length:      f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a network from a locations CSV and a segments CSV on disk.
pub fn load_network_csv(locations: &Path, segments: &Path) -> NetworkResult<TravelNetwork> {
    let loc_file = std::fs::File::open(locations).map_err(NetworkError::Io)?;
    let seg_file = std::fs::File::open(segments).map_err(NetworkError::Io)?;
    load_network_reader(loc_file, seg_file)
}

/// Like [`load_network_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a sample
/// network in a binary.
///
/// # Errors
///
/// [`NetworkError::Parse`] for malformed rows or unknown kinds; any error the
/// arena raises while registering or attaching (duplicate names, unknown
/// endpoints, incompatible kinds, negative lengths).
pub fn load_network_reader<L: Read, S: Read>(
    locations: L,
    segments: S,
) -> NetworkResult<TravelNetwork> {
    let mut net = TravelNetwork::new();

    let mut loc_reader = csv::Reader::from_reader(locations);
    for result in loc_reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        net.add_location(row.name, parse_location_kind(&row.kind)?)?;
    }

    let mut seg_reader = csv::Reader::from_reader(segments);
    for result in seg_reader.deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let kind = parse_segment_kind(&row.kind)?;
        let length = Miles::new(row.length)?;
        net.add_segment(row.name.as_str(), kind, length)?;
        net.set_source(&row.name, non_empty(row.source.as_deref()))?;
        net.set_destination(&row.name, non_empty(row.destination.as_deref()))?;
    }

    Ok(net)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn non_empty(cell: Option<&str>) -> Option<&str> {
    cell.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_location_kind(s: &str) -> NetworkResult<LocationKind> {
    match s.trim() {
        "residence" => Ok(LocationKind::Residence),
        "airport"   => Ok(LocationKind::Airport),
        other => Err(NetworkError::Parse(format!(
            "invalid location kind {other:?}: expected \"residence\" or \"airport\""
        ))),
    }
}

fn parse_segment_kind(s: &str) -> NetworkResult<SegmentKind> {
    match s.trim() {
        "road"   => Ok(SegmentKind::Road),
        "flight" => Ok(SegmentKind::Flight),
        other => Err(NetworkError::Parse(format!(
            "invalid segment kind {other:?}: expected \"road\" or \"flight\""
        ))),
    }
}
