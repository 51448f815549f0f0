//! Shortest-path cache counters.

/// Request / hit / miss counters for the shortest-path cache.
///
/// Counters only ever increase; neither [`Conn::clear_cache`] nor toggling the
/// cache resets them.  Every counted request ends as exactly one hit or one
/// miss, so `request_count == hit_count + miss_count` always holds.
///
/// [`Conn::clear_cache`]: crate::Conn::clear_cache
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheStats {
    pub request_count: u64,
    pub hit_count:     u64,
    pub miss_count:    u64,
}

impl CacheStats {
    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.request_count += 1;
        self.hit_count += 1;
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.request_count += 1;
        self.miss_count += 1;
    }

    /// Fraction of requests served from the cache; `0.0` before any request.
    pub fn hit_rate(&self) -> f64 {
        if self.request_count == 0 {
            0.0
        } else {
            self.hit_count as f64 / self.request_count as f64
        }
    }
}
