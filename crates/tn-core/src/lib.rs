//! `tn-core`: foundational types for the `travelnet` framework.
//!
//! This crate is a dependency of every other `tn-*` crate.  It has no `tn-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`names`]   | `LocationName`, `SegmentName`                             |
//! | [`miles`]   | `Miles`, non-negative, finite, totally ordered length    |
//! | [`kind`]    | `LocationKind`, `SegmentKind`, `can_attach`               |
//! | [`config`]  | `ConnConfig`, `InvalidationPolicy`                        |
//! | [`error`]   | `TnError`, `TnResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod kind;
pub mod miles;
pub mod names;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ConnConfig, InvalidationPolicy};
pub use error::{TnError, TnResult};
pub use kind::{LocationKind, SegmentKind, can_attach};
pub use miles::Miles;
pub use names::{LocationName, SegmentName};
