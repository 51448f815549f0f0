//! `tn-conn`: connectivity engine for a travel network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`conn`]      | `Conn`: queries, cache control, mutation hooks            |
//! | [`path`]      | `Path`, `Hop`                                              |
//! | [`cache`]     | `PathCache`, last-hop shortest-path cache                 |
//! | [`stats`]     | `CacheStats`                                               |
//! | `dijkstra`    | single-source Dijkstra with destination early exit        |
//! | `enumerate`   | bounded simple-path DFS                                    |
//!
//! The engine never owns or mutates the graph.  Every query takes the
//! network by reference through [`tn_network::NetworkView`]; the owner of the
//! graph calls `on_location_del`/`on_segment_del` before deleting anything
//! and `on_segment_change` when a segment is re-attached or resized.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | Cache buckets use `FxHashMap` instead of `HashMap`.      |
//! | `serde`   | Derives `Serialize`/`Deserialize` on `Path`, `Hop`, `CacheStats`. |

pub mod cache;
pub mod conn;
pub mod path;
pub mod stats;

mod dijkstra;
mod enumerate;


pub use cache::PathCache;
pub use conn::Conn;
pub use path::{Hop, Path};
pub use stats::CacheStats;
