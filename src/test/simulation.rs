use crate::net::{CenterId, Parcel, Router};
use crate::queue::QueueKind;
use crate::sim::{SimTime, Simulation};
use crate::topo::chain::{ChainOpts, build_chain};

fn chain_sim(len: usize) -> (Simulation, Vec<CenterId>) {
    let mut router = Router::new();
    let ids = build_chain(
        &mut router,
        &ChainOpts {
            len,
            ..ChainOpts::default()
        },
    )
    .expect("chain");
    (Simulation::new(router), ids)
}

#[test]
fn parcel_crosses_chain_one_hop_per_tick() {
    let (mut sim, ids) = chain_sim(4);
    sim.inject(ids[0].as_str(), Parcel::new("P", 1, 1, ids[3].clone()))
        .expect("inject");

    let report = sim.run(100);

    assert_eq!(report.injected, 1);
    assert_eq!(report.delivered, 1);
    assert_eq!(report.unreachable, 0);
    assert_eq!(report.in_flight, 0);
    assert_eq!(report.final_tick, 4);
    assert_eq!(report.max_latency, 3);
    assert!((report.mean_latency - 3.0).abs() < 1e-9);

    let d = &sim.deliveries()[0];
    assert_eq!(d.parcel_id, "P");
    assert_eq!(d.center, ids[3]);
    assert_eq!(d.delivered_at, SimTime(3));
    assert_eq!(report.router.forwarded, 3);
}

#[test]
fn scheduled_parcel_enters_at_its_tick() {
    let (mut sim, ids) = chain_sim(2);
    sim.schedule(SimTime(2), ids[0].as_str(), Parcel::new("late", 1, 1, ids[1].clone()))
        .expect("schedule");
    assert!(!sim.is_idle());

    sim.step();
    sim.step();
    assert_eq!(sim.router.pending(), 0, "not injected before tick 2");

    let report = sim.run(100);
    assert_eq!(report.delivered, 1);
    let d = &sim.deliveries()[0];
    assert_eq!(d.injected_at, SimTime(2));
    assert_eq!(d.latency(), 1);
}

#[test]
fn schedule_rejects_unknown_origin() {
    let (mut sim, _ids) = chain_sim(2);
    assert!(
        sim.schedule(SimTime(5), "nowhere", Parcel::new("P", 1, 1, "c1"))
            .is_err()
    );
    assert!(sim.inject("nowhere", Parcel::new("P", 1, 1, "c1")).is_err());
    assert!(sim.is_idle());
}

#[test]
fn unreachable_parcels_are_dropped_and_counted() {
    let mut router = Router::new();
    build_chain(&mut router, &ChainOpts::default()).expect("chain");
    let mut sim = Simulation::new(router);
    sim.inject("c0", Parcel::new("orphan", 1, 1, "elsewhere"))
        .expect("inject");

    let report = sim.run(10);
    assert_eq!(report.unreachable, 1);
    assert_eq!(report.delivered, 0);
    assert_eq!(sim.dropped()[0].id(), "orphan");
    assert_eq!(report.final_tick, 1);
}

#[test]
fn run_stops_at_max_ticks_with_parcels_in_flight() {
    let (mut sim, ids) = chain_sim(5);
    sim.inject(ids[0].as_str(), Parcel::new("P", 1, 1, ids[4].clone()))
        .expect("inject");

    let report = sim.run(2);
    assert_eq!(report.final_tick, 2);
    assert_eq!(report.delivered, 0);
    assert_eq!(report.in_flight, 1);
}

#[test]
fn lifo_chain_moves_each_parcel_at_most_one_hop_per_tick() {
    let mut router = Router::new();
    build_chain(
        &mut router,
        &ChainOpts {
            len: 3,
            queue: QueueKind::Lifo,
            ..ChainOpts::default()
        },
    )
    .expect("chain");
    let mut sim = Simulation::new(router);
    sim.inject("c1", Parcel::new("Q", 1, 1, "c0")).expect("inject Q");
    sim.inject("c0", Parcel::new("P", 1, 1, "c2")).expect("inject P");

    sim.step();

    // c1 forwards Q, which was queued when the tick began; P only reaches c1
    assert_eq!(sim.router.get_center("c0").expect("c0").queue_size(), 1);
    assert_eq!(sim.router.get_center("c1").expect("c1").queue_size(), 1);
    assert_eq!(sim.router.get_center("c2").expect("c2").queue_size(), 0);
    assert_eq!(sim.router.stats.forwarded, 2);

    let report = sim.run(100);
    assert_eq!(report.delivered, 2);
    let latency = |id: &str| {
        sim.deliveries()
            .iter()
            .find(|d| d.parcel_id == id)
            .map(|d| d.latency())
            .expect("delivered")
    };
    assert_eq!(latency("P"), 2);
    assert_eq!(latency("Q"), 1);
}

#[test]
fn priority_chain_moves_each_parcel_at_most_one_hop_per_tick() {
    let mut router = Router::new();
    build_chain(
        &mut router,
        &ChainOpts {
            len: 4,
            queue: QueueKind::Priority,
            ..ChainOpts::default()
        },
    )
    .expect("chain");
    let mut sim = Simulation::new(router);
    // urgent parcel trails a slower one; each still takes one tick per hop
    sim.inject("c1", Parcel::new("slow", 9, 1, "c3")).expect("inject slow");
    sim.inject("c0", Parcel::new("urgent", 1, 1, "c3")).expect("inject urgent");

    sim.step();
    assert_eq!(sim.router.get_center("c1").expect("c1").queue_size(), 1);
    assert_eq!(sim.router.get_center("c2").expect("c2").queue_size(), 1);
    assert_eq!(sim.router.pending(), 2);

    let report = sim.run(100);
    assert_eq!(report.delivered, 2);
    assert_eq!(report.max_latency, 3);
}

#[test]
fn each_busy_center_forwards_one_parcel_per_tick() {
    let mut router = Router::new();
    build_chain(
        &mut router,
        &ChainOpts {
            len: 2,
            queue: QueueKind::Fifo,
            ..ChainOpts::default()
        },
    )
    .expect("chain");
    let mut sim = Simulation::new(router);
    for i in 0..3 {
        sim.inject("c0", Parcel::new(format!("p{i}"), 1, 1, "c1"))
            .expect("inject");
    }

    sim.step();
    assert_eq!(sim.router.get_center("c0").expect("c0").queue_size(), 2);
    assert_eq!(sim.router.get_center("c1").expect("c1").queue_size(), 1);

    let report = sim.run(100);
    assert_eq!(report.delivered, 3);
    let order: Vec<&str> = sim.deliveries().iter().map(|d| d.parcel_id.as_str()).collect();
    assert_eq!(order, vec!["p0", "p1", "p2"]);

    let c0 = report
        .centers
        .iter()
        .find(|c| c.id.as_str() == "c0")
        .and_then(|c| c.stats.clone())
        .expect("c0 stats");
    assert_eq!(c0.processed_count(), 3);
    assert_eq!(c0.max_queue_length(), 3);
    // waits 0, 1, 2
    assert!((c0.average_wait_time() - 1.0).abs() < 1e-9);
}
