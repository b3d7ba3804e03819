//! 分拣网络模块
//!
//! 此模块包含包裹路由的核心组件，如包裹、分拣中心、路由器与统计信息。

// 子模块声明
mod center;
mod error;
mod id;
mod monitored;
mod parcel;
mod router;
mod routing;
mod stats;

// 重新导出公共接口
pub use center::{Center, ForwardOutcome, SortingCenter};
pub use error::RouterError;
pub use id::CenterId;
pub use monitored::MonitoredSortingCenter;
pub use parcel::Parcel;
pub use router::Router;
pub use routing::{Adjacency, Route, RoutingTable, ShortestPathTree};
pub use stats::{CenterStats, RouterStats};
