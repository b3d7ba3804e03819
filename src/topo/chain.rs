//! 链式拓扑构建

use super::add_center;
use crate::net::{CenterId, Router, RouterError};
use crate::queue::QueueKind;

/// 链式拓扑配置选项
#[derive(Debug, Clone)]
pub struct ChainOpts {
    pub len: usize,
    pub weight: i64,
    pub queue: QueueKind,
    pub monitored: bool,
}

impl Default for ChainOpts {
    fn default() -> Self {
        Self {
            len: 4,
            weight: 1,
            queue: QueueKind::Fifo,
            monitored: true,
        }
    }
}

/// 构建链式拓扑
///
/// 拓扑结构：c0 <-> c1 <-> ... <-> c{len-1}
/// 返回：按链上顺序排列的中心 id
pub fn build_chain(router: &mut Router, opts: &ChainOpts) -> Result<Vec<CenterId>, RouterError> {
    let ids: Vec<CenterId> = (0..opts.len).map(|i| CenterId(format!("c{i}"))).collect();
    for id in &ids {
        add_center(router, id.0.clone(), opts.queue, opts.monitored)?;
    }
    for pair in ids.windows(2) {
        router.connect(pair[0].as_str(), pair[1].as_str(), opts.weight)?;
    }
    Ok(ids)
}
