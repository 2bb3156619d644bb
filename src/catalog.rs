//! Graph catalog for multi-graph management
//!
//! Keeps canonical graphs registered under their canonical id. Each graph sits
//! behind its own lock so callers on different threads can share it.

use crate::error::{Error, Result};
use crate::mapping::{CanonicalGraph, GraphStats};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// 可在线程间共享的规范图
pub type SharedGraph<V> = Arc<RwLock<CanonicalGraph<V>>>;

/// GraphCatalog maintains a registry of canonical graphs keyed by canonical id.
pub struct GraphCatalog<V> {
    graphs: RwLock<HashMap<String, SharedGraph<V>>>,
}

impl<V> GraphCatalog<V> {
    pub fn new() -> Self {
        Self {
            graphs: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty graph and register it. Fails if the id exists.
    pub fn create_graph(&self, canonical_id: &str) -> Result<SharedGraph<V>> {
        self.register(CanonicalGraph::new(canonical_id))
    }

    /// Register an already built graph under its canonical id.
    pub fn register(&self, graph: CanonicalGraph<V>) -> Result<SharedGraph<V>> {
        let mut graphs = self.graphs.write();
        let id = graph.canonical_id().to_string();
        if graphs.contains_key(&id) {
            return Err(Error::GraphAlreadyExists(id));
        }
        let shared = Arc::new(RwLock::new(graph));
        graphs.insert(id.clone(), shared.clone());
        debug!(graph = %id, "graph registered");
        Ok(shared)
    }

    /// Get a graph by canonical id.
    pub fn get_graph(&self, canonical_id: &str) -> Option<SharedGraph<V>> {
        self.graphs.read().get(canonical_id).cloned()
    }

    /// Drop a graph from the catalog.
    pub fn drop_graph(&self, canonical_id: &str) -> Result<()> {
        if self.graphs.write().remove(canonical_id).is_none() {
            return Err(Error::GraphNotFound(canonical_id.to_string()));
        }
        debug!(graph = %canonical_id, "graph dropped");
        Ok(())
    }

    /// List canonical ids, sorted.
    pub fn list_graphs(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.graphs.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.graphs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.read().is_empty()
    }

    /// Stats of every registered graph, sorted by canonical id.
    pub fn stats(&self) -> Vec<GraphStats> {
        let mut stats: Vec<GraphStats> = self
            .graphs
            .read()
            .values()
            .map(|g| g.read().stats())
            .collect();
        stats.sort_by(|a, b| a.canonical_id.cmp(&b.canonical_id));
        stats
    }
}

impl<V> Default for GraphCatalog<V> {
    fn default() -> Self {
        Self::new()
    }
}
