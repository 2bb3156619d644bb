//! 身份图模块
//!
//! 以节点身份为键的无向图：节点、无向边键与图结构

mod edge;
mod graph;
mod node;

pub use edge::EdgeKey;
pub use graph::IdentityGraph;
pub use node::{Node, NodeId};
