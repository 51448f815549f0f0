//! The location/segment arena and the read-only view the engine consumes.
//!
//! # Data layout
//!
//! Locations and segments live in two name-keyed maps.  Edges are not
//! pointers: a segment records `(source, destination)` as optional
//! `LocationName`s and each location records the `SegmentName`s incident to
//! it.  Every mutation that changes an endpoint updates both sides in the
//! same call, so readers never observe a one-sided attachment.
//!
//! Names are unique across *both* maps; a location and a segment cannot share
//! a name.

use std::collections::HashMap;

use tracing::warn;

use tn_core::{LocationKind, LocationName, Miles, SegmentKind, SegmentName, can_attach};

use crate::location::{Location, Segment};
use crate::{NetworkError, NetworkResult};

// ── NetworkView ───────────────────────────────────────────────────────────────

/// Read access to a travel network.
///
/// This is everything the connectivity engine needs from its environment:
/// lookup by name and enumeration of the registered locations.  Per-location
/// incidence and per-segment endpoints/length come from the returned
/// [`Location`] and [`Segment`] values.
pub trait NetworkView {
    /// The registered location called `name`, if any.
    fn location(&self, name: &str) -> Option<&Location>;

    /// The registered segment called `name`, if any.
    fn segment(&self, name: &str) -> Option<&Segment>;

    /// All currently registered locations.  Order is unspecified.
    fn locations(&self) -> impl Iterator<Item = &Location>;

    /// Number of registered locations.
    fn location_count(&self) -> usize {
        self.locations().count()
    }
}

// ── TravelNetwork ─────────────────────────────────────────────────────────────

/// Owner of every [`Location`] and [`Segment`] in a network.
///
/// Removal here is purely structural.  Callers that hold derived state (the
/// shortest-path cache) must be told about a deletion *before* calling
/// [`remove_location`](Self::remove_location) or
/// [`remove_segment`](Self::remove_segment); `tn-manager` sequences this.
#[derive(Debug, Default, Clone)]
pub struct TravelNetwork {
    locations: HashMap<LocationName, Location>,
    segments:  HashMap<SegmentName, Segment>,
}

impl TravelNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty() && self.segments.is_empty()
    }

    /// `true` if `name` is taken by a location or a segment.
    pub fn is_name_in_use(&self, name: &str) -> bool {
        self.locations.contains_key(name) || self.segments.contains_key(name)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.get(name)
    }

    pub fn segment(&self, name: &str) -> Option<&Segment> {
        self.segments.get(name)
    }

    pub fn locations(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations.values()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.segments.values()
    }

    // ── Creation ──────────────────────────────────────────────────────────

    /// Register a new, unconnected location.
    ///
    /// # Errors
    ///
    /// [`NetworkError::NameInUse`] if any location or segment already has
    /// this name.
    pub fn add_location(
        &mut self,
        name: impl Into<LocationName>,
        kind: LocationKind,
    ) -> NetworkResult<&Location> {
        let name = name.into();
        if self.is_name_in_use(name.as_str()) {
            return Err(NetworkError::NameInUse(name.as_str().to_owned()));
        }
        let loc = self.locations.entry(name.clone()).or_insert(Location::new(name, kind));
        Ok(&*loc)
    }

    /// Register a new, fully detached segment.
    ///
    /// `length` is a [`Miles`], so it has already been checked to be
    /// non-negative.
    pub fn add_segment(
        &mut self,
        name: impl Into<SegmentName>,
        kind: SegmentKind,
        length: Miles,
    ) -> NetworkResult<&Segment> {
        let name = name.into();
        if self.is_name_in_use(name.as_str()) {
            return Err(NetworkError::NameInUse(name.as_str().to_owned()));
        }
        let seg = self.segments.entry(name.clone()).or_insert(Segment::new(name, kind, length));
        Ok(&*seg)
    }

    // ── Attachment ────────────────────────────────────────────────────────

    /// Make `location` the source of `segment`, or detach the source when
    /// `location` is `None`.
    ///
    /// The segment is removed from its previous source's outgoing list and
    /// appended to the new one's.  Setting the current source again is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// - [`NetworkError::SegmentNotFound`] / [`NetworkError::LocationNotFound`]
    ///   for unregistered names.
    /// - [`NetworkError::Incompatible`] if the kinds cannot be linked (see
    ///   [`can_attach`]).  The graph is left unchanged.
    pub fn set_source(&mut self, segment: &str, location: Option<&str>) -> NetworkResult<()> {
        let new = self.checked_endpoint(segment, location)?;
        let seg = self
            .segments
            .get_mut(segment)
            .ok_or_else(|| NetworkError::SegmentNotFound(segment.into()))?;
        if seg.source() == new.as_ref() {
            return Ok(());
        }
        let seg_name = seg.name().clone();
        let old = seg.set_source(new.clone());

        if let Some(old) = self.location_mut(old.as_ref()) {
            old.remove_outgoing(&seg_name);
        }
        if let Some(new) = self.location_mut(new.as_ref()) {
            new.push_outgoing(&seg_name);
        }
        Ok(())
    }

    /// Make `location` the destination of `segment`, or detach the
    /// destination when `None`.  Mirror of [`set_source`](Self::set_source).
    pub fn set_destination(&mut self, segment: &str, location: Option<&str>) -> NetworkResult<()> {
        let new = self.checked_endpoint(segment, location)?;
        let seg = self
            .segments
            .get_mut(segment)
            .ok_or_else(|| NetworkError::SegmentNotFound(segment.into()))?;
        if seg.destination() == new.as_ref() {
            return Ok(());
        }
        let seg_name = seg.name().clone();
        let old = seg.set_destination(new.clone());

        if let Some(old) = self.location_mut(old.as_ref()) {
            old.remove_incoming(&seg_name);
        }
        if let Some(new) = self.location_mut(new.as_ref()) {
            new.push_incoming(&seg_name);
        }
        Ok(())
    }

    /// Change the length of `segment`.
    pub fn set_length(&mut self, segment: &str, length: Miles) -> NetworkResult<()> {
        let seg = self
            .segments
            .get_mut(segment)
            .ok_or_else(|| NetworkError::SegmentNotFound(segment.into()))?;
        seg.set_length(length);
        Ok(())
    }

    fn location_mut(&mut self, name: Option<&LocationName>) -> Option<&mut Location> {
        self.locations.get_mut(name?)
    }

    /// Resolve and kind-check a prospective endpoint for `segment`.
    fn checked_endpoint(
        &self,
        segment: &str,
        location: Option<&str>,
    ) -> NetworkResult<Option<LocationName>> {
        let seg = self
            .segments
            .get(segment)
            .ok_or_else(|| NetworkError::SegmentNotFound(segment.into()))?;
        let Some(name) = location else {
            return Ok(None);
        };
        let loc = self
            .locations
            .get(name)
            .ok_or_else(|| NetworkError::LocationNotFound(name.into()))?;
        if !can_attach(loc.kind(), seg.kind()) {
            warn!(
                segment = %seg.name(),
                location = %loc.name(),
                "a {} cannot attach to a {}; skipping",
                seg.kind(),
                loc.kind(),
            );
            return Err(NetworkError::Incompatible {
                location:     loc.name().clone(),
                kind:         loc.kind(),
                segment:      seg.name().clone(),
                segment_kind: seg.kind(),
            });
        }
        Ok(Some(loc.name().clone()))
    }

    // ── Removal ───────────────────────────────────────────────────────────

    /// Detach every incident segment from `name`, then unregister it.
    ///
    /// The detached segments stay registered with the affected endpoint set
    /// to `None`.  Returns the removed location with its incident lists
    /// emptied, or `None` if it was not registered.
    pub fn remove_location(&mut self, name: &str) -> Option<Location> {
        let mut loc = self.locations.remove(name)?;
        let (outgoing, incoming) = loc.take_incident();
        for s in &outgoing {
            if let Some(seg) = self.segments.get_mut(s) {
                seg.set_source(None);
            }
        }
        for s in &incoming {
            if let Some(seg) = self.segments.get_mut(s) {
                seg.set_destination(None);
            }
        }
        Some(loc)
    }

    /// Detach `name` from both endpoints, then unregister it.
    pub fn remove_segment(&mut self, name: &str) -> Option<Segment> {
        let mut seg = self.segments.remove(name)?;
        let src = seg.set_source(None);
        if let Some(loc) = self.location_mut(src.as_ref()) {
            loc.remove_outgoing(seg.name());
        }
        let dst = seg.set_destination(None);
        if let Some(loc) = self.location_mut(dst.as_ref()) {
            loc.remove_incoming(seg.name());
        }
        Some(seg)
    }
}

impl NetworkView for TravelNetwork {
    #[inline]
    fn location(&self, name: &str) -> Option<&Location> {
        TravelNetwork::location(self, name)
    }

    #[inline]
    fn segment(&self, name: &str) -> Option<&Segment> {
        TravelNetwork::segment(self, name)
    }

    fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    fn location_count(&self) -> usize {
        self.locations.len()
    }
}
