//! RelGraph - 内存无向图
//!
//! 两种相互独立的图结构：
//! - 身份图：以节点身份为键的顶点/边结构
//! - 规范图：以字符串规范 id 为键、带节点值的对称关系映射
//!
//! 以及规范图目录、JSON 文档导入导出和命令行输出支持。

pub mod catalog;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod mapping;
pub mod types;

// 重导出常用类型
pub use catalog::{GraphCatalog, SharedGraph};
pub use error::{Error, Result};
pub use graph::{EdgeKey, IdentityGraph, Node, NodeId};
pub use mapping::{CanonicalGraph, GraphStats};
pub use types::{Properties, PropertyValue};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
