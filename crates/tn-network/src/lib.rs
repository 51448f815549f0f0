//! `tn-network`: the travel network arena.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`location`] | `Location`, `Segment`                                      |
//! | [`network`]  | `TravelNetwork` (name-keyed arena), `NetworkView` trait    |
//! | [`loader`]   | `load_network_csv`, `load_network_reader`                  |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `tn-core` types.        |

pub mod error;
pub mod loader;
pub mod location;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use loader::{load_network_csv, load_network_reader};
pub use location::{Location, Segment};
pub use network::{NetworkView, TravelNetwork};
