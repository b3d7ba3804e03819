//! 受监控的分拣中心
//!
//! 在基础分拣中心之上记录到达时间、等待时间与最大队列长度。
//! 到达时间保存在旁路表中（按包裹 id），包裹本身保持不可变。

use std::collections::HashMap;

use super::center::{Center, ForwardOutcome, SortingCenter, dispatch};
use super::id::CenterId;
use super::parcel::Parcel;
use super::router::Router;
use super::stats::CenterStats;
use crate::queue::{ParcelQueue, QueueKind};
use crate::sim::{Clock, SimTime};
use tracing::{debug, trace};

#[derive(Debug)]
pub struct MonitoredSortingCenter {
    inner: SortingCenter,
    arrivals: HashMap<String, SimTime>,
    stats: CenterStats,
}

impl MonitoredSortingCenter {
    pub fn new(id: impl Into<CenterId>, queue: impl ParcelQueue<Parcel> + 'static) -> Self {
        Self::wrap(SortingCenter::new(id, queue))
    }

    pub fn with_kind(id: impl Into<CenterId>, kind: QueueKind) -> Self {
        Self::wrap(SortingCenter::with_kind(id, kind))
    }

    pub fn wrap(inner: SortingCenter) -> Self {
        Self {
            inner,
            arrivals: HashMap::new(),
            stats: CenterStats::default(),
        }
    }

    pub fn processed_count(&self) -> u64 {
        self.stats.processed_count()
    }

    pub fn average_wait_time(&self) -> f64 {
        self.stats.average_wait_time()
    }

    pub fn max_queue_length(&self) -> usize {
        self.stats.max_queue_length()
    }
}

impl Center for MonitoredSortingCenter {
    fn id(&self) -> &CenterId {
        self.inner.id()
    }

    #[tracing::instrument(skip_all, fields(center = %self.inner.id(), parcel_id = parcel.id()))]
    fn accept_parcel(&mut self, parcel: Parcel, clock: &Clock) {
        self.arrivals.insert(parcel.id().to_string(), clock.now());
        self.inner.enqueue(parcel);
        let len = self.inner.queue_size();
        self.stats.observe_queue_len(len);
        trace!(
            arrived = ?clock.now(),
            queue_size = len,
            max_queue_length = self.stats.max_queue_length(),
            "📥 包裹入队（已记录到达时间）"
        );
    }

    fn queue_size(&self) -> usize {
        self.inner.queue_size()
    }

    #[tracing::instrument(skip_all, fields(center = %self.inner.id()))]
    fn forward_parcel(&mut self, router: &mut Router, clock: &Clock) -> ForwardOutcome {
        let Some(parcel) = self.inner.take_next() else {
            return ForwardOutcome::Idle;
        };

        let now = clock.now();
        let arrived = self.arrivals.remove(parcel.id()).unwrap_or(now);
        let wait = now.saturating_since(arrived);
        self.stats.record_departure(wait);
        debug!(
            parcel_id = parcel.id(),
            wait,
            processed = self.stats.processed_count(),
            "包裹出队"
        );

        dispatch(self.inner.id(), parcel, router, clock)
    }

    fn stats(&self) -> Option<&CenterStats> {
        Some(&self.stats)
    }
}
