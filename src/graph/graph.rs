//! 身份图数据结构
//!
//! 以节点身份为键的无向图：邻接集合 + 无向边集合

use super::edge::EdgeKey;
use super::node::{Node, NodeId};
use crate::error::{Error, Result};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 身份图
///
/// `neighbors` 与 `edges` 始终保持一致：
/// `v ∈ neighbors[u]` 当且仅当 `u ∈ neighbors[v]` 当且仅当 `EdgeKey(u, v) ∈ edges`。
#[derive(Debug, Default, Clone)]
pub struct IdentityGraph {
    /// 句柄到节点对象的映射
    nodes: HashMap<NodeId, Node>,
    /// 邻接集合
    neighbors: HashMap<NodeId, HashSet<NodeId>>,
    /// 无向边集合
    edges: HashSet<EdgeKey>,
}

impl IdentityGraph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（幂等）。返回是否为新顶点。
    pub fn add_vertex(&mut self, vertex: &Node) -> bool {
        let handle = vertex.handle();
        if self.neighbors.contains_key(&handle) {
            return false;
        }
        self.neighbors.insert(handle, HashSet::new());
        self.nodes.insert(handle, vertex.clone());
        debug!(vertex = %vertex, "vertex added");
        true
    }

    /// 删除顶点，先断开其所有关联边
    pub fn remove_vertex(&mut self, vertex: &Node) -> Result<Node> {
        let handle = vertex.handle();
        let incident: Vec<NodeId> = self
            .neighbors
            .get(&handle)
            .ok_or_else(|| Error::VertexNotFound(vertex.to_string()))?
            .iter()
            .copied()
            .collect();

        for other in incident {
            self.remove_edge_between(other, handle);
        }

        self.neighbors.remove(&handle);
        let removed = self
            .nodes
            .remove(&handle)
            .ok_or_else(|| Error::VertexNotFound(vertex.to_string()))?;
        debug!(vertex = %removed, "vertex removed");
        Ok(removed)
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &Node) -> bool {
        self.neighbors.contains_key(&vertex.handle())
    }

    /// 按句柄获取顶点
    pub fn get_vertex(&self, handle: NodeId) -> Option<&Node> {
        self.nodes.get(&handle)
    }

    /// 所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// 获取顶点数量
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    // ==================== 边操作 ====================

    /// 添加无向边，端点不存在时自动加入。返回是否为新边。
    ///
    /// 自环边（`u == v`）会被拒绝，图保持不变。
    pub fn add_edge(&mut self, u: &Node, v: &Node) -> Result<bool> {
        if u == v {
            return Err(Error::SelfLoop(u.to_string()));
        }

        self.add_vertex(u);
        self.add_vertex(v);

        let (hu, hv) = (u.handle(), v.handle());
        if !self.edges.insert(EdgeKey::new(hu, hv)) {
            return Ok(false);
        }
        self.adjacent_mut(hu).insert(hv);
        self.adjacent_mut(hv).insert(hu);
        debug!(u = %u, v = %v, "edge added");
        Ok(true)
    }

    /// 删除无向边；边不存在时不做任何操作。返回是否删除。
    pub fn remove_edge(&mut self, u: &Node, v: &Node) -> bool {
        self.remove_edge_between(u.handle(), v.handle())
    }

    fn remove_edge_between(&mut self, u: NodeId, v: NodeId) -> bool {
        if !self.edges.remove(&EdgeKey::new(u, v)) {
            return false;
        }
        if let Some(set) = self.neighbors.get_mut(&u) {
            set.remove(&v);
        }
        if let Some(set) = self.neighbors.get_mut(&v) {
            set.remove(&u);
        }
        debug!(%u, %v, "edge removed");
        true
    }

    /// 边是否存在
    pub fn contains_edge(&self, u: &Node, v: &Node) -> bool {
        self.edges.contains(&EdgeKey::new(u.handle(), v.handle()))
    }

    /// 所有边（每条无向边出现一次）
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.edges.iter().filter_map(move |key| {
            let (a, b) = key.endpoints();
            Some((self.nodes.get(&a)?, self.nodes.get(&b)?))
        })
    }

    /// 获取边数量
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的度
    pub fn degree(&self, vertex: &Node) -> Result<usize> {
        self.neighbors
            .get(&vertex.handle())
            .map(|set| set.len())
            .ok_or_else(|| Error::VertexNotFound(vertex.to_string()))
    }

    /// 获取顶点的邻居。每次调用返回新的迭代器，顺序不确定。
    pub fn neighbors<'a>(&'a self, vertex: &Node) -> Result<impl Iterator<Item = &'a Node> + 'a> {
        let set = self
            .neighbors
            .get(&vertex.handle())
            .ok_or_else(|| Error::VertexNotFound(vertex.to_string()))?;
        Ok(set.iter().filter_map(move |h| self.nodes.get(h)))
    }

    fn adjacent_mut(&mut self, handle: NodeId) -> &mut HashSet<NodeId> {
        self.neighbors.entry(handle).or_default()
    }
}
