//! 队列策略（Queue disciplines）
//!
//! 分拣中心用来暂存待转发包裹的排队策略：FIFO、LIFO 与按比较器排序的优先队列。
//! 这些策略与 `Parcel` 无关，对任意元素类型 `T` 都可用。

use serde::{Deserialize, Serialize};

use crate::net::Parcel;

mod fifo;
mod lifo;
mod priority;

pub use fifo::FifoQueue;
pub use lifo::LifoQueue;
pub use priority::{Compare, NaturalOrder, PriorityQueue};

/// 队列抽象
pub trait ParcelQueue<T>: std::fmt::Debug {
    /// 入队：总是成功
    fn enqueue(&mut self, item: T);
    /// 出队：按队列策略返回下一个元素；空队列返回 None
    fn dequeue(&mut self) -> Option<T>;
    /// 查看下一个元素但不移除
    fn peek(&self) -> Option<&T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// 可配置的队列类型（用于场景文件与命令行）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    #[default]
    Fifo,
    Lifo,
    /// 按 `delivery_deadline` 升序
    Priority,
}

impl QueueKind {
    /// 构建一个存放包裹的队列
    pub fn build(self) -> Box<dyn ParcelQueue<Parcel>> {
        match self {
            QueueKind::Fifo => Box::new(FifoQueue::new()),
            QueueKind::Lifo => Box::new(LifoQueue::new()),
            QueueKind::Priority => Box::new(PriorityQueue::with_comparator(
                Parcel::cmp_by_deadline as fn(&Parcel, &Parcel) -> std::cmp::Ordering,
            )),
        }
    }
}

impl std::str::FromStr for QueueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fifo" => Ok(QueueKind::Fifo),
            "lifo" => Ok(QueueKind::Lifo),
            "priority" => Ok(QueueKind::Priority),
            other => Err(format!("unknown queue kind: {other} (expected fifo, lifo or priority)")),
        }
    }
}
