//! 分拣中心
//!
//! 定义分拣中心 trait 与基础实现：持有一个包裹队列，
//! 每次转发取出队首包裹，按路由器给出的下一跳交给相邻中心。

use super::id::CenterId;
use super::parcel::Parcel;
use super::router::Router;
use super::stats::CenterStats;
use crate::queue::{ParcelQueue, QueueKind};
use crate::sim::Clock;
use tracing::{debug, info, trace, warn};

/// 一次转发的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// 队列为空，什么也没发生
    Idle,
    /// 已交给下一跳
    Forwarded { parcel_id: String, to: CenterId },
    /// 本中心就是目的地，包裹离开网络
    Delivered(Parcel),
    /// 没有通往目的地的路径，包裹交还调用方处理
    Unreachable(Parcel),
}

/// 分拣中心接口
pub trait Center {
    /// 获取中心标识符
    fn id(&self) -> &CenterId;

    /// 接收包裹（入队）
    fn accept_parcel(&mut self, parcel: Parcel, clock: &Clock);

    /// 当前排队的包裹数
    fn queue_size(&self) -> usize;

    /// 取出队首包裹并转发
    fn forward_parcel(&mut self, router: &mut Router, clock: &Clock) -> ForwardOutcome;

    /// 受监控中心的统计信息
    fn stats(&self) -> Option<&CenterStats> {
        None
    }
}

/// 基础分拣中心
#[derive(Debug)]
pub struct SortingCenter {
    id: CenterId,
    queue: Box<dyn ParcelQueue<Parcel>>,
}

impl SortingCenter {
    /// 创建新分拣中心
    pub fn new(id: impl Into<CenterId>, queue: impl ParcelQueue<Parcel> + 'static) -> Self {
        Self::from_boxed(id, Box::new(queue))
    }

    pub fn from_boxed(id: impl Into<CenterId>, queue: Box<dyn ParcelQueue<Parcel>>) -> Self {
        Self {
            id: id.into(),
            queue,
        }
    }

    pub fn with_kind(id: impl Into<CenterId>, kind: QueueKind) -> Self {
        Self::from_boxed(id, kind.build())
    }

    /// 查看队首包裹
    pub fn peek(&self) -> Option<&Parcel> {
        self.queue.peek()
    }

    pub(crate) fn enqueue(&mut self, parcel: Parcel) {
        self.queue.enqueue(parcel);
    }

    pub(crate) fn take_next(&mut self) -> Option<Parcel> {
        self.queue.dequeue()
    }
}

impl Center for SortingCenter {
    fn id(&self) -> &CenterId {
        &self.id
    }

    #[tracing::instrument(skip_all, fields(center = %self.id, parcel_id = parcel.id()))]
    fn accept_parcel(&mut self, parcel: Parcel, _clock: &Clock) {
        self.enqueue(parcel);
        trace!(queue_size = self.queue.len(), "📥 包裹入队");
    }

    fn queue_size(&self) -> usize {
        self.queue.len()
    }

    #[tracing::instrument(skip_all, fields(center = %self.id))]
    fn forward_parcel(&mut self, router: &mut Router, clock: &Clock) -> ForwardOutcome {
        let Some(parcel) = self.take_next() else {
            trace!("队列为空，跳过");
            return ForwardOutcome::Idle;
        };
        dispatch(&self.id, parcel, router, clock)
    }
}

/// 把已出队的包裹从 `from` 送往下一跳。
pub(crate) fn dispatch(
    from: &CenterId,
    parcel: Parcel,
    router: &mut Router,
    clock: &Clock,
) -> ForwardOutcome {
    if parcel.destination() == from {
        info!(parcel_id = parcel.id(), at = ?clock.now(), "✅ 包裹到达目的地");
        router.stats.delivered += 1;
        return ForwardOutcome::Delivered(parcel);
    }

    let Some(next) = router.next_hop(from.as_str(), parcel.destination().as_str()) else {
        warn!(
            parcel_id = parcel.id(),
            destination = %parcel.destination(),
            "目的地不可达"
        );
        router.stats.unreachable += 1;
        return ForwardOutcome::Unreachable(parcel);
    };

    let parcel_id = parcel.id().to_string();
    let delivered = router.deliver(&next, parcel, clock);
    // next_hop 只返回已注册且不同于 from 的中心
    debug_assert!(delivered.is_ok(), "next hop {next} must accept parcels");
    if let Err(parcel) = delivered {
        router.stats.unreachable += 1;
        return ForwardOutcome::Unreachable(parcel);
    }

    debug!(parcel_id = %parcel_id, next_hop = %next, "🚚 包裹已转发");
    router.stats.forwarded += 1;
    ForwardOutcome::Forwarded { parcel_id, to: next }
}
