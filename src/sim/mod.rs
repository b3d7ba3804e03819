//! 仿真核心模块
//!
//! 此模块包含逐 tick 推进的仿真组件，如逻辑时钟、场景描述与仿真驱动。

// 子模块声明
mod clock;
mod error;
mod scenario;
mod simulation;
mod time;

// 重新导出公共接口
pub use clock::Clock;
pub use error::ScenarioError;
pub use scenario::{
    CenterSpec, LinkSpec, ParcelSpec, SCENARIO_SCHEMA_VERSION, ScenarioDefaults, ScenarioSpec,
};
pub use simulation::{CenterReport, Delivery, SimReport, Simulation};
pub use time::SimTime;
