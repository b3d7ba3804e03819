//! 仿真驱动
//!
//! 单线程逐 tick 推进：注入到期包裹 → 各中心（按 id 顺序）转发至多一个包裹 → 时钟前进。

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::clock::Clock;
use super::error::ScenarioError;
use super::scenario::ScenarioSpec;
use super::time::SimTime;
use crate::net::{
    CenterId, CenterStats, ForwardOutcome, MonitoredSortingCenter, Parcel, Router, RouterError,
    RouterStats, SortingCenter,
};

/// 一次送达记录
#[derive(Debug, Clone, Serialize)]
pub struct Delivery {
    pub parcel_id: String,
    pub center: CenterId,
    pub injected_at: SimTime,
    pub delivered_at: SimTime,
}

impl Delivery {
    /// 端到端时延（tick）
    pub fn latency(&self) -> u64 {
        self.delivered_at.saturating_since(self.injected_at)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CenterReport {
    pub id: CenterId,
    pub queue_size: usize,
    pub stats: Option<CenterStats>,
}

/// 仿真结束时的汇总
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub final_tick: u64,
    pub injected: u64,
    pub delivered: u64,
    pub unreachable: u64,
    pub in_flight: usize,
    pub mean_latency: f64,
    pub max_latency: u64,
    pub router: RouterStats,
    pub centers: Vec<CenterReport>,
}

/// 分拣网络仿真
#[derive(Default)]
pub struct Simulation {
    pub router: Router,
    clock: Clock,
    scheduled: BTreeMap<SimTime, Vec<(CenterId, Parcel)>>,
    injected_at: HashMap<String, SimTime>,
    injected: u64,
    deliveries: Vec<Delivery>,
    dropped: Vec<Parcel>,
}

impl Simulation {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            ..Self::default()
        }
    }

    /// 按场景描述构建网络并登记所有包裹
    pub fn from_scenario(spec: &ScenarioSpec) -> Result<Self, ScenarioError> {
        let mut router = Router::new();
        for c in &spec.centers {
            let kind = spec.queue_for(c);
            if spec.monitored_for(c) {
                router.add_center(MonitoredSortingCenter::with_kind(c.id.as_str(), kind))?;
            } else {
                router.add_center(SortingCenter::with_kind(c.id.as_str(), kind))?;
            }
        }
        for l in &spec.links {
            router.connect(&l.a, &l.b, l.weight)?;
        }

        let mut seen = HashSet::new();
        for p in &spec.parcels {
            if !seen.insert(p.id.as_str()) {
                return Err(ScenarioError::DuplicateParcel(p.id.clone()));
            }
        }

        let mut sim = Simulation::new(router);
        for p in &spec.parcels {
            let parcel = Parcel::new(p.id.as_str(), p.deadline, p.size, p.destination.as_str());
            sim.schedule(SimTime(p.at), &p.origin, parcel)
                .map_err(|_| ScenarioError::UnknownOrigin {
                    parcel: p.id.clone(),
                    origin: p.origin.clone(),
                })?;
        }
        info!(
            centers = spec.centers.len(),
            links = spec.links.len(),
            parcels = spec.parcels.len(),
            "📋 场景加载完成"
        );
        Ok(sim)
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn now(&self) -> SimTime {
        self.clock.now()
    }

    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }

    /// 因不可达而丢弃的包裹
    pub fn dropped(&self) -> &[Parcel] {
        &self.dropped
    }

    /// 立即在 `origin` 注入包裹
    pub fn inject(&mut self, origin: &str, parcel: Parcel) -> Result<(), RouterError> {
        let id = parcel.id().to_string();
        self.router.accept(origin, parcel, &self.clock)?;
        self.injected_at.insert(id, self.clock.now());
        self.injected += 1;
        Ok(())
    }

    /// 在 `at` 时刻注入；`at` 不晚于当前时间则立即注入
    pub fn schedule(&mut self, at: SimTime, origin: &str, parcel: Parcel) -> Result<(), RouterError> {
        if at <= self.clock.now() {
            return self.inject(origin, parcel);
        }
        if !self.router.contains(origin) {
            return Err(RouterError::UnknownCenter(origin.into()));
        }
        self.scheduled
            .entry(at)
            .or_default()
            .push((origin.into(), parcel));
        Ok(())
    }

    /// 网络中是否还有待处理的包裹（排队中或尚未注入）
    pub fn is_idle(&self) -> bool {
        self.scheduled.is_empty() && self.router.pending() == 0
    }

    /// 推进一个 tick
    #[tracing::instrument(skip(self), fields(now = self.clock.now().0))]
    pub fn step(&mut self) {
        let now = self.clock.now();
        if let Some(batch) = self.scheduled.remove(&now) {
            for (origin, parcel) in batch {
                // 登记时已校验 origin
                if let Err(e) = self.inject(origin.as_str(), parcel) {
                    warn!(error = %e, "注入失败");
                }
            }
        }

        // 本 tick 开始时有包裹的中心才参与转发；转发结果暂存到 tick 末尾，
        // 每个包裹每 tick 至多前进一跳。
        let active: Vec<CenterId> = self
            .router
            .center_ids()
            .into_iter()
            .filter(|id| {
                self.router
                    .get_center(id.as_str())
                    .is_some_and(|c| c.queue_size() > 0)
            })
            .collect();

        self.router.stage_deliveries();
        for id in active {
            let outcome = match self.router.forward(id.as_str(), &self.clock) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(error = %e, "转发失败");
                    continue;
                }
            };
            match outcome {
                ForwardOutcome::Delivered(parcel) => {
                    let injected_at = self
                        .injected_at
                        .remove(parcel.id())
                        .unwrap_or(now);
                    self.deliveries.push(Delivery {
                        parcel_id: parcel.id().to_string(),
                        center: id,
                        injected_at,
                        delivered_at: now,
                    });
                }
                ForwardOutcome::Unreachable(parcel) => {
                    self.injected_at.remove(parcel.id());
                    self.dropped.push(parcel);
                }
                ForwardOutcome::Forwarded { .. } | ForwardOutcome::Idle => {}
            }
        }
        self.router.flush_staged(&self.clock);

        self.clock.tick();
    }

    /// 运行直到网络排空或到达 `max_ticks`
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self, max_ticks: u64) -> SimReport {
        info!("▶️  开始运行仿真");
        debug!(pending = self.router.pending(), scheduled = self.scheduled.len(), "初始状态");

        while self.clock.now().0 < max_ticks && !self.is_idle() {
            self.step();
        }

        let report = self.report();
        info!(
            final_tick = report.final_tick,
            delivered = report.delivered,
            unreachable = report.unreachable,
            in_flight = report.in_flight,
            "✅ 仿真完成"
        );
        report
    }

    /// 当前状态汇总
    pub fn report(&self) -> SimReport {
        let delivered = self.deliveries.len() as u64;
        let total_latency: u64 = self.deliveries.iter().map(Delivery::latency).sum();
        let mean_latency = if delivered == 0 {
            0.0
        } else {
            total_latency as f64 / delivered as f64
        };

        let centers = self
            .router
            .center_ids()
            .into_iter()
            .filter_map(|id| {
                let c = self.router.get_center(id.as_str())?;
                Some(CenterReport {
                    queue_size: c.queue_size(),
                    stats: c.stats().cloned(),
                    id,
                })
            })
            .collect();

        SimReport {
            final_tick: self.clock.now().0,
            injected: self.injected,
            delivered,
            unreachable: self.dropped.len() as u64,
            in_flight: self.router.pending(),
            mean_latency,
            max_latency: self.deliveries.iter().map(Delivery::latency).max().unwrap_or(0),
            router: self.router.stats.clone(),
            centers,
        }
    }
}
