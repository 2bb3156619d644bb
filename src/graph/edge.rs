//! 边定义
//!
//! 无向边以规范化（排序后）的句柄对表示

use crate::graph::node::NodeId;
use serde::{Deserialize, Serialize};

/// 无向边键：`low <= high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    low: NodeId,
    high: NodeId,
}

impl EdgeKey {
    /// 由两个端点构造，与参数顺序无关
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { low: u, high: v }
        } else {
            Self { low: v, high: u }
        }
    }

    /// 获取两个端点
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.low, self.high)
    }

    /// 是否与给定顶点关联
    pub fn touches(&self, v: NodeId) -> bool {
        self.low == v || self.high == v
    }

    /// 给定一个端点，返回另一个端点
    pub fn other(&self, v: NodeId) -> Option<NodeId> {
        if self.low == v {
            Some(self.high)
        } else if self.high == v {
            Some(self.low)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_unordered() {
        let a = NodeId(1);
        let b = NodeId(2);

        assert_eq!(EdgeKey::new(a, b), EdgeKey::new(b, a));
        assert_eq!(EdgeKey::new(b, a).endpoints(), (a, b));
    }

    #[test]
    fn test_edge_key_other() {
        let key = EdgeKey::new(NodeId(5), NodeId(3));

        assert!(key.touches(NodeId(3)));
        assert!(!key.touches(NodeId(4)));
        assert_eq!(key.other(NodeId(5)), Some(NodeId(3)));
        assert_eq!(key.other(NodeId(9)), None);
    }
}
