//! 路由器错误类型
//!
//! 结构/校验错误：操作被拒绝，状态保持不变。
//! “不存在”类情况（空队列、未知 id、不可达）用 `Option` 表示，不在此列。

use thiserror::Error;

use super::id::CenterId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
    #[error("sorting center {0} already exists")]
    DuplicateCenter(CenterId),

    #[error("unknown sorting center: {0}")]
    UnknownCenter(CenterId),

    #[error("negative link weight {weight} between {a} and {b}")]
    NegativeWeight { a: CenterId, b: CenterId, weight: i64 },

    #[error("cannot link sorting center {0} to itself")]
    SelfLink(CenterId),

    #[error("link between {a} and {b} already exists")]
    DuplicateLink { a: CenterId, b: CenterId },
}
