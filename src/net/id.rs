//! 标识符类型
//!
//! 定义分拣中心的唯一标识符。

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// 分拣中心标识符（图中的节点）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CenterId(pub String);

impl CenterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CenterId {
    fn from(s: &str) -> Self {
        CenterId(s.to_string())
    }
}

impl From<String> for CenterId {
    fn from(s: String) -> Self {
        CenterId(s)
    }
}

// 允许用 &str 直接查询以 CenterId 为键的 HashMap。
impl Borrow<str> for CenterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CenterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
