//! 规范图模块
//!
//! 以规范 id 标识节点的关系映射图

mod canonical;

pub use canonical::{generate_canonical_id, CanonicalGraph, GraphStats, URN_UUID_PREFIX};
