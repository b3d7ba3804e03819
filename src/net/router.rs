//! 路由器
//!
//! 持有分拣中心注册表与无向带权邻接表，按最短路径给出下一跳。

use std::collections::HashMap;

use super::center::{Center, ForwardOutcome};
use super::error::RouterError;
use super::id::CenterId;
use super::parcel::Parcel;
use super::routing::{Adjacency, Route, RoutingTable};
use super::stats::RouterStats;
use crate::sim::Clock;
use tracing::{debug, info, trace};

/// 分拣网络
#[derive(Default)]
pub struct Router {
    // 槽位存在即已注册；转发期间中心被临时取出，槽位为 None。
    centers: HashMap<CenterId, Option<Box<dyn Center>>>,
    adj: Adjacency,
    routes: RoutingTable,
    // 暂存模式下，转发的包裹先缓存，flush 时才交给下一跳。
    staged: Option<Vec<(CenterId, Parcel)>>,
    pub stats: RouterStats,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册分拣中心
    pub fn add_center(&mut self, center: impl Center + 'static) -> Result<(), RouterError> {
        self.add_boxed(Box::new(center))
    }

    pub fn add_boxed(&mut self, center: Box<dyn Center>) -> Result<(), RouterError> {
        let id = center.id().clone();
        if self.centers.contains_key(&id) {
            return Err(RouterError::DuplicateCenter(id));
        }
        info!(center = %id, "🏭 注册分拣中心");
        self.adj.insert(id.clone(), Vec::new());
        self.centers.insert(id, Some(center));
        self.routes.mark_dirty();
        Ok(())
    }

    /// 连接两个中心（创建双向链路）
    pub fn connect(&mut self, a: &str, b: &str, weight: i64) -> Result<(), RouterError> {
        let a = self.registered(a)?;
        let b = self.registered(b)?;
        if a == b {
            return Err(RouterError::SelfLink(a));
        }
        if weight < 0 {
            return Err(RouterError::NegativeWeight { a, b, weight });
        }
        if self.adj[&a].iter().any(|(n, _)| *n == b) {
            return Err(RouterError::DuplicateLink { a, b });
        }

        let w = weight as u64;
        debug!(a = %a, b = %b, weight = w, "🔗 连接分拣中心");
        if let Some(nbrs) = self.adj.get_mut(&a) {
            nbrs.push((b.clone(), w));
        }
        if let Some(nbrs) = self.adj.get_mut(&b) {
            nbrs.push((a, w));
        }
        self.routes.mark_dirty();
        Ok(())
    }

    fn registered(&self, id: &str) -> Result<CenterId, RouterError> {
        self.centers
            .get_key_value(id)
            .map(|(k, _)| k.clone())
            .ok_or_else(|| RouterError::UnknownCenter(id.into()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.centers.contains_key(id)
    }

    /// 获取已注册的中心
    pub fn get_center(&self, id: &str) -> Option<&dyn Center> {
        self.centers.get(id).and_then(|slot| slot.as_deref())
    }

    pub fn get_center_mut(&mut self, id: &str) -> Option<&mut (dyn Center + 'static)> {
        self.centers.get_mut(id).and_then(|slot| slot.as_deref_mut())
    }

    /// 按 id 排序的全部中心
    pub fn center_ids(&self) -> Vec<CenterId> {
        let mut ids: Vec<CenterId> = self.centers.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// 中心的邻居及链路权重
    pub fn neighbors(&self, id: &str) -> Option<&[(CenterId, u64)]> {
        self.adj.get(id).map(|v| v.as_slice())
    }

    /// 全网排队中的包裹总数
    pub fn pending(&self) -> usize {
        let staged = self.staged.as_ref().map_or(0, Vec::len);
        self.centers
            .values()
            .filter_map(|slot| slot.as_deref())
            .map(|c| c.queue_size())
            .sum::<usize>()
            + staged
    }

    /// 计算 `from` 到 `to` 最短路径上的下一跳。
    ///
    /// `from == to` 时返回 `to`；任一端未注册或不可达时返回 None。
    pub fn next_hop(&mut self, from: &str, to: &str) -> Option<CenterId> {
        let src = self.registered(from).ok()?;
        let dst = self.registered(to).ok()?;
        if src == dst {
            return Some(dst);
        }
        let hop = self.routes.tree(&self.adj, &src).next_hop(from, to);
        trace!(from, to, next_hop = ?hop, "查询下一跳");
        hop
    }

    /// 完整最短路径
    pub fn route(&mut self, from: &str, to: &str) -> Option<Route> {
        let src = self.registered(from).ok()?;
        self.registered(to).ok()?;
        self.routes.tree(&self.adj, &src).path(from, to)
    }

    /// 最短路径代价
    pub fn distance(&mut self, from: &str, to: &str) -> Option<u64> {
        let src = self.registered(from).ok()?;
        self.routes.tree(&self.adj, &src).distance(to)
    }

    /// 向指定中心投递包裹
    pub fn accept(&mut self, id: &str, parcel: Parcel, clock: &Clock) -> Result<(), RouterError> {
        let center = self
            .get_center_mut(id)
            .ok_or_else(|| RouterError::UnknownCenter(id.into()))?;
        center.accept_parcel(parcel, clock);
        Ok(())
    }

    /// 开始暂存转发结果：之后的转发不会立即进入下一跳的队列，
    /// 直到 `flush_staged`。用于让同一 tick 内每个包裹至多前进一跳。
    pub fn stage_deliveries(&mut self) {
        if self.staged.is_none() {
            self.staged = Some(Vec::new());
        }
    }

    /// 结束暂存，按转发顺序把缓存的包裹交给各自的下一跳
    pub fn flush_staged(&mut self, clock: &Clock) {
        let Some(staged) = self.staged.take() else {
            return;
        };
        trace!(count = staged.len(), "交付暂存包裹");
        for (to, parcel) in staged {
            if let Some(center) = self.get_center_mut(to.as_str()) {
                center.accept_parcel(parcel, clock);
            }
        }
    }

    /// 交给下一跳；中心不可用时把包裹原样退回。
    pub(crate) fn deliver(&mut self, to: &CenterId, parcel: Parcel, clock: &Clock) -> Result<(), Parcel> {
        if let Some(staged) = self.staged.as_mut() {
            if !self.centers.contains_key(to) {
                return Err(parcel);
            }
            staged.push((to.clone(), parcel));
            return Ok(());
        }
        match self.get_center_mut(to.as_str()) {
            Some(center) => {
                center.accept_parcel(parcel, clock);
                Ok(())
            }
            None => Err(parcel),
        }
    }

    /// 让指定中心转发其队首包裹
    #[tracing::instrument(skip(self, clock), fields(now = ?clock.now()))]
    pub fn forward(&mut self, id: &str, clock: &Clock) -> Result<ForwardOutcome, RouterError> {
        // 暂时把中心取出来，避免 &mut self 与 &mut center 的重叠借用。
        let mut center = self
            .centers
            .get_mut(id)
            .and_then(Option::take)
            .ok_or_else(|| RouterError::UnknownCenter(id.into()))?;

        let outcome = center.forward_parcel(self, clock);

        if let Some(slot) = self.centers.get_mut(id) {
            *slot = Some(center);
        }
        Ok(outcome)
    }
}
