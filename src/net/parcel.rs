//! 包裹类型
//!
//! 定义在网络中流转的包裹。创建后不可修改。

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::id::CenterId;

/// 包裹
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parcel {
    id: String,
    delivery_deadline: i64,
    /// 仅携带，不参与容量约束
    size: u32,
    destination: CenterId,
}

impl Parcel {
    pub fn new(
        id: impl Into<String>,
        delivery_deadline: i64,
        size: u32,
        destination: impl Into<CenterId>,
    ) -> Self {
        Self {
            id: id.into(),
            delivery_deadline,
            size,
            destination: destination.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn delivery_deadline(&self) -> i64 {
        self.delivery_deadline
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// 目标分拣中心
    pub fn destination(&self) -> &CenterId {
        &self.destination
    }

    /// 按截止时间升序比较，作为优先队列的默认比较器
    pub fn cmp_by_deadline(a: &Parcel, b: &Parcel) -> Ordering {
        a.delivery_deadline.cmp(&b.delivery_deadline)
    }
}
