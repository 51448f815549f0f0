//! Unit tests for tn-manager.

#[cfg(test)]
mod helpers {
    use tn_core::{ConnConfig, Miles};

    use crate::TravelNetworkManager;

    pub fn miles(v: f64) -> Miles {
        Miles::new(v).unwrap()
    }

    pub fn road(mgr: &mut TravelNetworkManager, name: &str, src: &str, dst: &str, len: f64) {
        mgr.road_new(name, miles(len)).unwrap();
        mgr.segment_source_is(name, Some(src)).unwrap();
        mgr.segment_destination_is(name, Some(dst)).unwrap();
    }

    /// A→B(15), A→C(5), C→D(10).
    pub fn diamond(config: ConnConfig) -> TravelNetworkManager {
        let mut mgr = TravelNetworkManager::with_config(config);
        for n in ["A", "B", "C", "D"] {
            mgr.residence_new(n).unwrap();
        }
        road(&mut mgr, "AB", "A", "B", 15.0);
        road(&mut mgr, "AC", "A", "C", 5.0);
        road(&mut mgr, "CD", "C", "D", 10.0);
        mgr
    }
}

// ── Creation ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod creation {
    use tn_core::{ConnConfig, LocationKind, SegmentKind};
    use tn_network::{NetworkError, TravelNetwork};

    use super::helpers::{diamond, miles};
    use crate::TravelNetworkManager;

    #[test]
    fn tracker_counts_by_kind() {
        let mut mgr = TravelNetworkManager::new();
        mgr.residence_new("home").unwrap();
        mgr.airport_new("sfo").unwrap();
        mgr.airport_new("jfk").unwrap();
        mgr.road_new("r", miles(1.0)).unwrap();
        mgr.flight_new("f", miles(2500.0)).unwrap();

        let t = mgr.tracker();
        assert_eq!((t.locations(), t.residences(), t.airports()), (3, 1, 2));
        assert_eq!((t.segments(), t.roads(), t.flights()), (2, 1, 1));
    }

    #[test]
    fn duplicate_name_is_rejected_and_not_counted() {
        let mut mgr = TravelNetworkManager::new();
        mgr.residence_new("x").unwrap();
        assert!(matches!(mgr.road_new("x", miles(1.0)), Err(NetworkError::NameInUse(_))));
        assert!(matches!(mgr.airport_new("x"), Err(NetworkError::NameInUse(_))));
        assert_eq!(mgr.tracker().locations(), 1);
        assert_eq!(mgr.tracker().segments(), 0);
    }

    #[test]
    fn from_network_counts_existing_elements() {
        let mut net = TravelNetwork::new();
        net.add_location("a", LocationKind::Airport).unwrap();
        net.add_location("b", LocationKind::Residence).unwrap();
        net.add_segment("f", SegmentKind::Flight, miles(10.0)).unwrap();

        let mgr = TravelNetworkManager::from_network(net, ConnConfig::default());
        assert_eq!(mgr.tracker().airports(), 1);
        assert_eq!(mgr.tracker().residences(), 1);
        assert_eq!(mgr.tracker().flights(), 1);
    }

    #[test]
    fn creation_leaves_cache_alone() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D").unwrap();
        let before = mgr.conn().cache().entry_count();
        mgr.residence_new("E").unwrap();
        mgr.road_new("DE", miles(1.0)).unwrap();
        assert_eq!(mgr.conn().cache().entry_count(), before);
    }
}

// ── Attachment ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod attachment {
    use tn_core::{ConnConfig, InvalidationPolicy};
    use tn_network::NetworkError;

    use super::helpers::{diamond, miles, road};
    use crate::TravelNetworkManager;

    #[test]
    fn flights_link_airports_only() {
        let mut mgr = TravelNetworkManager::new();
        mgr.airport_new("sfo").unwrap();
        mgr.airport_new("jfk").unwrap();
        mgr.residence_new("home").unwrap();
        mgr.flight_new("ua1", miles(2570.0)).unwrap();

        mgr.segment_source_is("ua1", Some("sfo")).unwrap();
        mgr.segment_destination_is("ua1", Some("jfk")).unwrap();
        let err = mgr.segment_destination_is("ua1", Some("home")).unwrap_err();
        assert!(matches!(err, NetworkError::Incompatible { .. }));

        // Rejected command left the flight where it was.
        assert_eq!(mgr.network().segment("ua1").unwrap().destination().unwrap(), "jfk");
        assert_eq!(mgr.shortest_path("sfo", "jfk").unwrap().length(), miles(2570.0));
    }

    #[test]
    fn roads_reach_airports() {
        let mut mgr = TravelNetworkManager::new();
        mgr.residence_new("home").unwrap();
        mgr.airport_new("sfo").unwrap();
        road(&mut mgr, "101", "home", "sfo", 12.0);
        assert_eq!(mgr.shortest_path("home", "sfo").unwrap().length(), miles(12.0));
    }

    #[test]
    fn retargeted_segment_is_not_reused() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D").unwrap();

        mgr.segment_destination_is("CD", Some("B")).unwrap();
        assert!(mgr.shortest_path("A", "D").is_none());
        let ab = mgr.shortest_path("A", "B").unwrap();
        assert_eq!(ab.length(), miles(15.0));
    }

    #[test]
    fn length_change_is_reflected() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D").unwrap();
        mgr.segment_length_is("CD", miles(100.0)).unwrap();
        assert_eq!(mgr.shortest_path("A", "D").unwrap().length(), miles(105.0));
    }

    #[test]
    fn precise_keeps_intact_entries_after_shortcut() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D").unwrap();

        // A new, shorter route does not touch any cached entry.
        road(&mut mgr, "AD", "A", "D", 1.0);
        assert_eq!(mgr.shortest_path("A", "D").unwrap().length(), miles(15.0));

        mgr.conn_mut().clear_cache();
        assert_eq!(mgr.shortest_path("A", "D").unwrap().length(), miles(1.0));
    }

    #[test]
    fn full_flush_sees_shortcut() {
        let config = ConnConfig { invalidation: InvalidationPolicy::FullFlush, ..ConnConfig::default() };
        let mut mgr = diamond(config);
        mgr.shortest_path("A", "D").unwrap();

        road(&mut mgr, "AD", "A", "D", 1.0);
        assert_eq!(mgr.shortest_path("A", "D").unwrap().length(), miles(1.0));
    }
}

// ── Deletion ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod deletion {
    use tracing_test::traced_test;

    use tn_core::ConnConfig;

    use super::helpers::{diamond, miles};

    #[test]
    fn segment_del_invalidates_then_removes() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D").unwrap();

        let seg = mgr.segment_del("CD").unwrap();
        assert!(seg.source().is_none() && seg.destination().is_none());
        assert!(mgr.network().segment("CD").is_none());
        assert!(mgr.network().location("C").unwrap().outgoing().is_empty());
        assert!(mgr.conn().cache().last_hop("D", "C").is_none());
        assert!(mgr.shortest_path("A", "D").is_none());
        assert_eq!(mgr.tracker().roads(), 2);
    }

    #[test]
    fn location_del_detaches_incident_segments() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D").unwrap();

        let loc = mgr.location_del("C").unwrap();
        assert_eq!(loc.name(), &"C");
        assert!(mgr.network().location("C").is_none());
        assert!(mgr.network().segment("AC").unwrap().destination().is_none());
        assert!(mgr.network().segment("CD").unwrap().source().is_none());
        assert_eq!(mgr.tracker().locations(), 3);
        assert_eq!(mgr.tracker().segments(), 3);

        assert!(mgr.shortest_path("A", "D").is_none());
        assert!(mgr.paths("A", miles(100.0)).iter().all(|p| p.destination().unwrap() == "B"));
    }

    #[test]
    fn deleting_missing_names_is_a_no_op() {
        let mut mgr = diamond(ConnConfig::default());
        assert!(mgr.location_del("nowhere").is_none());
        assert!(mgr.segment_del("nothing").is_none());
        assert_eq!(mgr.tracker().locations(), 4);
        assert_eq!(mgr.tracker().segments(), 3);
    }

    #[test]
    fn stats_survive_mutation() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.shortest_path("A", "D");
        mgr.shortest_path("A", "D");
        mgr.segment_del("AB");
        let s = mgr.conn().stats();
        assert_eq!((s.request_count, s.hit_count, s.miss_count), (2, 1, 1));
    }

    #[traced_test]
    #[test]
    fn deletion_is_logged() {
        let mut mgr = diamond(ConnConfig::default());
        mgr.segment_del("AB").unwrap();
        mgr.location_del("D").unwrap();
        assert!(logs_contain("segment deleted"));
        assert!(logs_contain("location deleted"));
    }
}
