//! 最短路径路由
//!
//! 对每个源节点按需运行一次 Dijkstra，缓存得到的最短路径树；
//! 拓扑变化（新增中心或链路）后通过 `mark_dirty` 让缓存失效。
//!
//! 相同代价的候选按 (代价, 中心 id) 出堆，且只在严格更短时更新前驱，
//! 因此结果是确定性的。

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::{debug, trace};

use super::id::CenterId;

/// 邻接表：中心 -> [(邻居, 非负权重)]
pub type Adjacency = HashMap<CenterId, Vec<(CenterId, u64)>>;

/// 一条最短路径（含起点与终点）及其总代价
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub hops: Vec<CenterId>,
    pub cost: u64,
}

/// 单源最短路径树
#[derive(Debug, Clone, Default)]
pub struct ShortestPathTree {
    dist: HashMap<CenterId, u64>,
    prev: HashMap<CenterId, CenterId>,
}

impl ShortestPathTree {
    #[tracing::instrument(skip_all, fields(src = %src))]
    fn compute(adj: &Adjacency, src: &CenterId) -> Self {
        let mut dist: HashMap<CenterId, u64> = HashMap::new();
        let mut prev: HashMap<CenterId, CenterId> = HashMap::new();
        let mut frontier = BinaryHeap::new();

        dist.insert(src.clone(), 0);
        frontier.push(Reverse((0u64, src.clone())));

        while let Some(Reverse((d, u))) = frontier.pop() {
            if dist.get(&u).is_some_and(|&best| d > best) {
                continue; // stale
            }
            let Some(nbrs) = adj.get(&u) else {
                continue;
            };
            for (v, w) in nbrs {
                let nd = d.saturating_add(*w);
                if dist.get(v).is_none_or(|&cur| nd < cur) {
                    trace!(from = %u, to = %v, cost = nd, "松弛边");
                    dist.insert(v.clone(), nd);
                    prev.insert(v.clone(), u.clone());
                    frontier.push(Reverse((nd, v.clone())));
                }
            }
        }

        debug!(reachable = dist.len(), "最短路径树构建完成");
        Self { dist, prev }
    }

    /// 到 `dst` 的最短代价
    pub fn distance(&self, dst: &str) -> Option<u64> {
        self.dist.get(dst).copied()
    }

    /// 从 `src` 出发前往 `dst` 的第一跳
    pub fn next_hop(&self, src: &str, dst: &str) -> Option<CenterId> {
        let mut cur = self.prev.get_key_value(dst)?.0;
        loop {
            let p = self.prev.get(cur)?;
            if p.as_str() == src {
                return Some(cur.clone());
            }
            cur = p;
        }
    }

    /// 完整路径 src..=dst
    pub fn path(&self, src: &str, dst: &str) -> Option<Route> {
        let cost = self.distance(dst)?;
        let (mut cur, _) = self.dist.get_key_value(dst)?;
        let mut hops = vec![cur.clone()];
        while cur.as_str() != src {
            cur = self.prev.get(cur)?;
            hops.push(cur.clone());
        }
        hops.reverse();
        Some(Route { hops, cost })
    }
}

/// 按源节点缓存的路由表
#[derive(Debug, Default, Clone)]
pub struct RoutingTable {
    dirty: bool,
    trees: HashMap<CenterId, ShortestPathTree>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// 取得 `src` 的最短路径树，必要时基于当前拓扑重新计算。
    pub fn tree(&mut self, adj: &Adjacency, src: &CenterId) -> &ShortestPathTree {
        if self.dirty {
            debug!(stale = self.trees.len(), "拓扑已变化，清空路由缓存");
            self.trees.clear();
            self.dirty = false;
        }
        self.trees
            .entry(src.clone())
            .or_insert_with(|| ShortestPathTree::compute(adj, src))
    }
}
