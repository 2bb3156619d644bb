//! 节点定义
//!
//! 身份图中的节点：按身份（句柄）区分，而不是按内容区分

use crate::types::{Properties, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// 下一个节点句柄（进程内全局唯一）
static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(1);

/// 节点句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// 分配新的句柄
    fn next() -> Self {
        Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 节点
///
/// 两个字段完全相同的节点仍是不同的实体；克隆出的节点与原节点共享句柄，
/// 表示同一个实体。
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// 身份句柄
    handle: NodeId,
    /// 标识符
    id: String,
    /// 类型标签
    node_type: String,
    /// 数据载荷
    data: Properties,
}

impl Node {
    /// 创建新节点（分配新句柄）
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, data: Properties) -> Self {
        Self {
            handle: NodeId::next(),
            id: id.into(),
            node_type: node_type.into(),
            data,
        }
    }

    /// 获取句柄
    pub fn handle(&self) -> NodeId {
        self.handle
    }

    /// 获取标识符
    pub fn id(&self) -> &str {
        &self.id
    }

    /// 获取类型标签
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// 获取属性
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.data.get(key)
    }

    /// 设置属性
    pub fn set_property(&mut self, key: String, value: PropertyValue) {
        self.data.insert(key, value);
    }

    /// 获取所有属性
    pub fn data(&self) -> &Properties {
        &self.data
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}({})", self.node_type, self.id, self.handle)
    }
}
