//! 逻辑时钟
//!
//! 由驱动方持有并显式推进，以引用方式传给需要时间的组件；
//! 不同仿真各自持有时钟，互不影响。

use super::time::SimTime;
use tracing::trace;

#[derive(Debug, Default, Clone)]
pub struct Clock {
    now: SimTime,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前时间
    pub fn now(&self) -> SimTime {
        self.now
    }

    /// 前进一个 tick
    pub fn tick(&mut self) {
        self.now = SimTime(self.now.0.saturating_add(1));
        trace!(now = self.now.0, "⏱️  tick");
    }

    /// 归零
    pub fn reset(&mut self) {
        self.now = SimTime::ZERO;
    }
}
