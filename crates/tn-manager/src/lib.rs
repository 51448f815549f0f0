//! `tn-manager`: owns a travel network and keeps its connectivity engine
//! consistent with it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`manager`] | `TravelNetworkManager`                                    |
//! | [`tracker`] | `NetworkTracker`, per-kind counts                        |
//!
//! Errors are [`tn_network::NetworkError`]; the manager adds no failure
//! modes of its own.
//!
//! # Quick-start
//!
//! ```
//! use tn_core::Miles;
//! use tn_manager::TravelNetworkManager;
//!
//! let mut mgr = TravelNetworkManager::new();
//! mgr.residence_new("home").unwrap();
//! mgr.residence_new("work").unwrap();
//! mgr.road_new("commute", Miles::new(7.5).unwrap()).unwrap();
//! mgr.segment_source_is("commute", Some("home")).unwrap();
//! mgr.segment_destination_is("commute", Some("work")).unwrap();
//!
//! let path = mgr.shortest_path("home", "work").unwrap();
//! assert_eq!(path.to_string(), "home(commute:7.5) work");
//! ```

pub mod manager;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use manager::TravelNetworkManager;
pub use tracker::NetworkTracker;
