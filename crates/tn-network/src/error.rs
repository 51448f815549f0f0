//! Network-subsystem error type.

use thiserror::Error;

use tn_core::{LocationKind, LocationName, SegmentKind, SegmentName, TnError};

/// Errors produced by `tn-network` mutations and loading.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("name {0:?} is already in use")]
    NameInUse(String),

    #[error("location {0} not found in network")]
    LocationNotFound(LocationName),

    #[error("segment {0} not found in network")]
    SegmentNotFound(SegmentName),

    #[error("a {segment_kind} segment ({segment}) cannot attach to {kind} location {location}")]
    Incompatible {
        location:     LocationName,
        kind:         LocationKind,
        segment:      SegmentName,
        segment_kind: SegmentKind,
    },

    #[error(transparent)]
    Range(#[from] TnError),

    #[error("network parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
