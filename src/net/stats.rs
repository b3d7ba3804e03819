//! 统计信息
//!
//! 路由器级别的转发计数，以及受监控分拣中心的等待时间/队列长度统计。

use serde::Serialize;

/// 路由器统计信息
#[derive(Debug, Default, Clone, Serialize)]
pub struct RouterStats {
    /// 成功转交给下一跳的次数
    pub forwarded: u64,
    /// 在目的地出队（离开网络）的包裹数
    pub delivered: u64,
    /// 找不到路径而被退回调用方的包裹数
    pub unreachable: u64,
}

/// 受监控分拣中心的累计统计
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct CenterStats {
    processed: u64,
    cumulative_wait: u64,
    max_queue_len: usize,
}

impl CenterStats {
    /// 记录一次入队后的队列长度
    pub(crate) fn observe_queue_len(&mut self, len: usize) {
        self.max_queue_len = self.max_queue_len.max(len);
    }

    /// 记录一次出队及其等待时长（tick）
    pub(crate) fn record_departure(&mut self, wait: u64) {
        self.processed = self.processed.saturating_add(1);
        self.cumulative_wait = self.cumulative_wait.saturating_add(wait);
    }

    /// 已转出的包裹数
    pub fn processed_count(&self) -> u64 {
        self.processed
    }

    pub fn cumulative_wait_time(&self) -> u64 {
        self.cumulative_wait
    }

    /// 平均等待时间；尚未处理任何包裹时为 0
    pub fn average_wait_time(&self) -> f64 {
        if self.processed == 0 {
            return 0.0;
        }
        self.cumulative_wait as f64 / self.processed as f64
    }

    /// 任一次入队后观察到的最大队列长度
    pub fn max_queue_length(&self) -> usize {
        self.max_queue_len
    }
}
