//! 拓扑构建
//!
//! 常用分拣网络拓扑的确定性构建函数。

pub mod chain;
pub mod grid;

use crate::net::{MonitoredSortingCenter, Router, RouterError, SortingCenter};
use crate::queue::QueueKind;

fn add_center(
    router: &mut Router,
    id: String,
    queue: QueueKind,
    monitored: bool,
) -> Result<(), RouterError> {
    if monitored {
        router.add_center(MonitoredSortingCenter::with_kind(id, queue))
    } else {
        router.add_center(SortingCenter::with_kind(id, queue))
    }
}
