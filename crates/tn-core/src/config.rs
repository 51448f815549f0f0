//! Connectivity-engine configuration.

use std::fmt;

// ── InvalidationPolicy ────────────────────────────────────────────────────────

/// How the shortest-path cache reacts to a structural graph mutation.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InvalidationPolicy {
    /// Drop only the entries that name the removed or changed element.
    ///
    /// Entries that stay structurally intact are kept even when the mutation
    /// made a different route optimal, so a cached answer can be longer than
    /// the true shortest path after the graph changes.
    #[default]
    Precise,
    /// Clear the whole cache on every structural mutation.  Results are always
    /// optimal; the hit rate drops accordingly.
    FullFlush,
}

impl fmt::Display for InvalidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidationPolicy::Precise   => "precise",
            InvalidationPolicy::FullFlush => "full_flush",
        })
    }
}

// ── ConnConfig ────────────────────────────────────────────────────────────────

/// Configuration for the connectivity engine.
///
/// Typically embedded in an application's own config file and passed to
/// `Conn::with_config` or `TravelNetworkManager::with_config`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConnConfig {
    /// Consult and populate the shortest-path cache.  Default: `true`.
    pub cache_enabled: bool,

    /// Cache reaction to graph mutation.  Default: [`InvalidationPolicy::Precise`].
    pub invalidation: InvalidationPolicy,
}

impl Default for ConnConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
            invalidation:  InvalidationPolicy::Precise,
        }
    }
}

impl ConnConfig {
    /// Config with the cache switched off.
    pub fn uncached() -> Self {
        Self { cache_enabled: false, ..Self::default() }
    }
}
