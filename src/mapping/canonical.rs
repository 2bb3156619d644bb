//! 规范图数据结构
//!
//! 以字符串 id 为键的关系映射：节点值 + 对称邻接集合

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::debug;
use uuid::Uuid;

/// 规范 id 的 URN 前缀
pub const URN_UUID_PREFIX: &str = "urn:uuid:";

/// 图统计快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub canonical_id: String,
    pub node_count: usize,
    pub edge_count: usize,
}

/// 规范图
///
/// 节点只能插入或覆盖，不能删除。关系总是对称的。
#[derive(Debug, Clone)]
pub struct CanonicalGraph<V> {
    /// 图自身的规范 id
    canonical_id: String,
    /// 节点值
    node_values: HashMap<String, V>,
    /// 邻接集合
    adjacency: HashMap<String, HashSet<String>>,
}

impl<V> CanonicalGraph<V> {
    /// 创建空图
    pub fn new(canonical_id: impl Into<String>) -> Self {
        Self {
            canonical_id: canonical_id.into(),
            node_values: HashMap::new(),
            adjacency: HashMap::new(),
        }
    }

    /// 创建以随机 `urn:uuid:` 为规范 id 的空图
    pub fn with_generated_id() -> Self {
        Self::new(generate_canonical_id())
    }

    /// 图的规范 id
    pub fn canonical_id(&self) -> &str {
        &self.canonical_id
    }

    /// 添加或覆盖节点值；已有关系保持不变
    pub fn add_node(&mut self, id: impl Into<String>, value: V) {
        let id = id.into();
        self.adjacency.entry(id.clone()).or_default();
        if self.node_values.insert(id.clone(), value).is_some() {
            debug!(graph = %self.canonical_id, node = %id, "node value replaced");
        }
    }

    /// 在列表中的所有 id 之间建立关系（团）
    ///
    /// 先校验全部 id，任一 id 不存在则返回 `MissingNode`，邻接集合不做任何修改。
    pub fn add_relationship<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<()> {
        let ids: Vec<&str> = ids.iter().map(|id| id.as_ref()).collect();
        if let Some(missing) = ids.iter().find(|id| !self.node_values.contains_key(**id)) {
            return Err(Error::MissingNode(format!(
                "Node '{}' not present in graph '{}'.",
                missing, self.canonical_id
            )));
        }

        for &id in &ids {
            let related = self.adjacency.entry(id.to_string()).or_default();
            for &other in &ids {
                if other != id {
                    related.insert(other.to_string());
                }
            }
        }
        debug!(graph = %self.canonical_id, size = ids.len(), "relationship added");
        Ok(())
    }

    /// 获取节点值
    pub fn get_node(&self, id: &str) -> Result<&V> {
        self.node_values
            .get(id)
            .ok_or_else(|| Error::MissingNode(format!("Node '{}' not present in the graph.", id)))
    }

    /// 获取与节点相关的所有 id，顺序不确定
    pub fn get_relationships(&self, id: &str) -> Result<Vec<&str>> {
        self.adjacency
            .get(id)
            .map(|set| set.iter().map(String::as_str).collect())
            .ok_or_else(|| {
                Error::MissingNode(format!("Node '{}' is not present in the graph.", id))
            })
    }

    /// 节点是否存在
    pub fn contains_node(&self, id: &str) -> bool {
        self.node_values.contains_key(id)
    }

    /// 节点数量
    pub fn node_count(&self) -> usize {
        self.node_values.len()
    }

    /// 边数量：各节点邻接集合大小之和
    ///
    /// 每对对称关系计两次，三个互相关联的节点计为 6。
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// 统计快照
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            canonical_id: self.canonical_id.clone(),
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }
}

impl<V: Clone> CanonicalGraph<V> {
    /// 所有节点的快照（id -> 值），修改快照不影响图
    pub fn nodes(&self) -> HashMap<String, V> {
        self.node_values.clone()
    }
}

/// 生成 `urn:uuid:<v4>` 形式的规范 id
pub fn generate_canonical_id() -> String {
    format!("{}{}", URN_UUID_PREFIX, Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn sorted(mut ids: Vec<&str>) -> Vec<&str> {
        ids.sort_unstable();
        ids
    }

    fn graph_with(ids: &[&str]) -> CanonicalGraph<Value> {
        let mut graph = CanonicalGraph::with_generated_id();
        for (i, id) in ids.iter().enumerate() {
            graph.add_node(*id, json!({ "node": i }));
        }
        graph
    }

    #[test]
    fn test_add_node() {
        let mut graph = CanonicalGraph::with_generated_id();
        let node_id = generate_canonical_id();
        graph.add_node(
            node_id.clone(),
            json!({"key1": "my_value", "key2": "my_value2"}),
        );

        let value = graph.get_node(&node_id).unwrap();
        assert_eq!(value["key1"], "my_value");
        assert_eq!(value["key2"], "my_value2");
    }

    #[test]
    fn test_get_node_not_present() {
        let graph = graph_with(&["a"]);
        let err = graph.get_node(&generate_canonical_id()).unwrap_err();
        assert!(matches!(err, Error::MissingNode(_)));
    }

    #[test]
    fn test_add_relationship() {
        let mut graph = graph_with(&["a", "b"]);
        graph.add_relationship(&["a", "b"]).unwrap();

        assert_eq!(graph.get_relationships("a").unwrap(), vec!["b"]);
        assert_eq!(graph.get_relationships("b").unwrap(), vec!["a"]);
    }

    #[test]
    fn test_relationship_clique() {
        let mut graph = graph_with(&["a", "b", "c"]);
        graph.add_relationship(&["a", "b", "c"]).unwrap();

        assert_eq!(sorted(graph.get_relationships("a").unwrap()), vec!["b", "c"]);
        assert_eq!(sorted(graph.get_relationships("c").unwrap()), vec!["a", "b"]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 6);
    }

    #[test]
    fn test_relationships_merge() {
        let mut graph = graph_with(&["a", "b", "c"]);
        graph.add_relationship(&["a", "b"]).unwrap();
        graph.add_relationship(&["a", "c"]).unwrap();
        // 重复声明与列表内重复 id 都不产生额外关系
        graph.add_relationship(&["b", "a", "a"]).unwrap();

        assert_eq!(sorted(graph.get_relationships("a").unwrap()), vec!["b", "c"]);
        assert_eq!(graph.get_relationships("b").unwrap(), vec!["a"]);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_add_relationship_missing_node_is_atomic() {
        let mut graph = graph_with(&["a", "b"]);
        let err = graph.add_relationship(&["a", "b", "ghost"]).unwrap_err();

        assert!(matches!(err, Error::MissingNode(_)));
        assert!(err.message().contains("ghost"));
        assert!(graph.get_relationships("a").unwrap().is_empty());
        assert!(graph.get_relationships("b").unwrap().is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_get_relationships_no_node() {
        let graph = graph_with(&["a", "b"]);
        assert!(matches!(
            graph.get_relationships("missing"),
            Err(Error::MissingNode(_))
        ));
    }

    #[test]
    fn test_overwrite_keeps_relationships() {
        let mut graph = graph_with(&["a", "b"]);
        graph.add_relationship(&["a", "b"]).unwrap();
        graph.add_node("a", json!("replaced"));

        assert_eq!(graph.get_node("a").unwrap(), &json!("replaced"));
        assert_eq!(graph.get_relationships("a").unwrap(), vec!["b"]);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn test_nodes_snapshot() {
        let graph = graph_with(&["a", "b"]);
        let mut snapshot = graph.nodes();
        assert!(snapshot.contains_key("a") && snapshot.contains_key("b"));

        snapshot.insert("c".to_string(), json!(null));
        snapshot.remove("a");
        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains_node("a"));
        assert!(!graph.contains_node("c"));
    }

    #[test]
    fn test_canonical_id() {
        let id = generate_canonical_id();
        let graph: CanonicalGraph<i32> = CanonicalGraph::new(id.clone());
        assert_eq!(graph.canonical_id(), id);
        assert!(CanonicalGraph::<i32>::with_generated_id()
            .canonical_id()
            .starts_with(URN_UUID_PREFIX));
    }

    #[test]
    fn test_stats() {
        let mut graph = graph_with(&["a", "b", "c"]);
        graph.add_relationship(&["a", "b"]).unwrap();

        let stats = graph.stats();
        assert_eq!(stats.canonical_id, graph.canonical_id());
        assert_eq!(stats.node_count, 3);
        assert_eq!(stats.edge_count, 2);
    }
}
