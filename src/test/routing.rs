use crate::net::{CenterId, Route, Router, RouterError, SortingCenter};
use crate::queue::FifoQueue;

fn router_with(ids: &[&str]) -> Router {
    let mut router = Router::new();
    for id in ids {
        router
            .add_center(SortingCenter::new(*id, FifoQueue::new()))
            .expect("add center");
    }
    router
}

fn diamond() -> Router {
    // A -2- B -2- C -1- D, plus A -10- C
    let mut router = router_with(&["A", "B", "C", "D"]);
    router.connect("A", "B", 2).expect("A-B");
    router.connect("B", "C", 2).expect("B-C");
    router.connect("A", "C", 10).expect("A-C");
    router.connect("C", "D", 1).expect("C-D");
    router
}

#[test]
fn router_registers_and_connects_centers() {
    let mut router = router_with(&["A", "B"]);
    router.connect("A", "B", 1).expect("connect");

    assert!(router.get_center("A").is_some());
    assert!(router.get_center("B").is_some());
    assert!(router.get_center("Z").is_none());
    assert_eq!(router.next_hop("A", "B"), Some(CenterId::from("B")));
}

#[test]
fn dijkstra_prefers_cheaper_multi_hop_path() {
    let mut router = diamond();
    // A-B-C-D costs 5, A-C-D costs 11
    assert_eq!(router.next_hop("A", "D"), Some(CenterId::from("B")));
    assert_eq!(router.distance("A", "D"), Some(5));
    assert_eq!(
        router.route("A", "D"),
        Some(Route {
            hops: ["A", "B", "C", "D"].map(CenterId::from).to_vec(),
            cost: 5,
        })
    );
}

#[test]
fn links_are_traversable_in_both_directions() {
    let mut router = diamond();
    assert_eq!(router.next_hop("D", "A"), Some(CenterId::from("C")));
    assert_eq!(router.next_hop("C", "A"), Some(CenterId::from("B")));
    assert_eq!(router.distance("D", "A"), Some(5));
}

#[test]
fn next_hop_to_self_is_self() {
    let mut router = diamond();
    assert_eq!(router.next_hop("B", "B"), Some(CenterId::from("B")));
    assert_eq!(
        router.route("B", "B"),
        Some(Route {
            hops: vec![CenterId::from("B")],
            cost: 0,
        })
    );
}

#[test]
fn unreachable_or_unknown_destination_has_no_next_hop() {
    let mut router = router_with(&["A", "B", "island"]);
    router.connect("A", "B", 1).expect("connect");

    assert_eq!(router.next_hop("A", "island"), None);
    assert_eq!(router.next_hop("A", "nowhere"), None);
    assert_eq!(router.next_hop("nowhere", "A"), None);
    assert_eq!(router.route("A", "island"), None);
    assert_eq!(router.distance("A", "island"), None);
}

#[test]
fn duplicate_center_is_rejected() {
    let mut router = router_with(&["A"]);
    let err = router
        .add_center(SortingCenter::new("A", FifoQueue::new()))
        .expect_err("duplicate");
    assert_eq!(err, RouterError::DuplicateCenter(CenterId::from("A")));
    assert_eq!(router.center_ids(), vec![CenterId::from("A")]);
}

#[test]
fn invalid_links_are_rejected_without_side_effects() {
    let mut router = router_with(&["A", "B"]);

    assert_eq!(
        router.connect("A", "Z", 1),
        Err(RouterError::UnknownCenter(CenterId::from("Z")))
    );
    assert_eq!(
        router.connect("A", "B", -1),
        Err(RouterError::NegativeWeight {
            a: CenterId::from("A"),
            b: CenterId::from("B"),
            weight: -1,
        })
    );
    assert_eq!(
        router.connect("A", "A", 1),
        Err(RouterError::SelfLink(CenterId::from("A")))
    );
    assert!(router.neighbors("A").expect("A").is_empty());
    assert!(router.neighbors("B").expect("B").is_empty());
    assert_eq!(router.next_hop("A", "B"), None);

    router.connect("A", "B", 3).expect("connect");
    assert!(matches!(
        router.connect("B", "A", 1),
        Err(RouterError::DuplicateLink { .. })
    ));
    assert_eq!(router.distance("A", "B"), Some(3));
}

#[test]
fn zero_weight_links_are_allowed() {
    let mut router = router_with(&["A", "B", "C"]);
    router.connect("A", "B", 0).expect("A-B");
    router.connect("B", "C", 0).expect("B-C");
    router.connect("A", "C", 1).expect("A-C");

    assert_eq!(router.distance("A", "C"), Some(0));
    assert_eq!(router.next_hop("A", "C"), Some(CenterId::from("B")));
}

#[test]
fn equal_cost_paths_pick_a_deterministic_next_hop() {
    // A-B-D and A-C-D both cost 2
    let build = || {
        let mut router = router_with(&["A", "B", "C", "D"]);
        router.connect("A", "C", 1).expect("A-C");
        router.connect("A", "B", 1).expect("A-B");
        router.connect("C", "D", 1).expect("C-D");
        router.connect("B", "D", 1).expect("B-D");
        router
    };

    let first = build().next_hop("A", "D");
    assert_eq!(first, Some(CenterId::from("B")));
    for _ in 0..10 {
        assert_eq!(build().next_hop("A", "D"), first);
    }
    assert_eq!(build().distance("A", "D"), Some(2));
}

#[test]
fn topology_change_invalidates_cached_routes() {
    let mut router = router_with(&["A", "B"]);
    router.connect("A", "B", 5).expect("A-B");
    assert_eq!(router.next_hop("A", "B"), Some(CenterId::from("B")));

    router
        .add_center(SortingCenter::new("C", FifoQueue::new()))
        .expect("add C");
    router.connect("A", "C", 1).expect("A-C");
    router.connect("C", "B", 1).expect("C-B");

    assert_eq!(router.next_hop("A", "B"), Some(CenterId::from("C")));
    assert_eq!(router.distance("A", "B"), Some(2));
}

#[test]
fn center_ids_are_sorted() {
    let router = router_with(&["c", "a", "b"]);
    assert_eq!(
        router.center_ids(),
        ["a", "b", "c"].map(CenterId::from).to_vec()
    );
}
