//! 数据导入导出模块
//!
//! 规范图的 JSON 文档格式：
//!
//! ```json
//! {
//!   "canonical_id": "urn:uuid:...",
//!   "nodes": [{ "id": "a", "value": { "name": "alice" } }],
//!   "relationships": [["a", "b", "c"]]
//! }
//! ```

use crate::error::{Error, Result};
use crate::mapping::{generate_canonical_id, CanonicalGraph};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// 导入统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub nodes_imported: usize,
    pub relationships_imported: usize,
    pub errors: usize,
    pub duration_ms: u64,
}

/// 节点记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: String,
    #[serde(default)]
    pub value: Value,
}

/// 规范图文档
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub relationships: Vec<Vec<String>>,
}

impl GraphDocument {
    /// 从读取器解析
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// 从文件解析
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// 构建规范图
    ///
    /// 先插入全部节点，再逐组声明关系；引用未知节点的关系组被跳过并计入错误数。
    pub fn into_graph(self) -> Result<(CanonicalGraph<Value>, ImportStats)> {
        let start = std::time::Instant::now();
        let canonical_id = self.canonical_id.unwrap_or_else(generate_canonical_id);
        let mut graph = CanonicalGraph::new(canonical_id);
        let mut stats = ImportStats::default();

        for record in self.nodes {
            graph.add_node(record.id, record.value);
            stats.nodes_imported += 1;
        }

        for group in &self.relationships {
            match graph.add_relationship(group.as_slice()) {
                Ok(()) => stats.relationships_imported += 1,
                Err(Error::MissingNode(msg)) => {
                    warn!(graph = %graph.canonical_id(), "skipping relationship: {}", msg);
                    stats.errors += 1;
                }
                Err(e) => return Err(e),
            }
        }

        stats.duration_ms = start.elapsed().as_millis() as u64;
        debug!(
            graph = %graph.canonical_id(),
            nodes = stats.nodes_imported,
            relationships = stats.relationships_imported,
            errors = stats.errors,
            "document imported"
        );
        Ok((graph, stats))
    }

    /// 从规范图导出；每对无向关系输出一次，结果排序以保证输出稳定
    pub fn from_graph(graph: &CanonicalGraph<Value>) -> Result<Self> {
        let mut nodes: Vec<NodeRecord> = graph
            .nodes()
            .into_iter()
            .map(|(id, value)| NodeRecord { id, value })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut pairs = BTreeSet::new();
        for record in &nodes {
            for other in graph.get_relationships(&record.id)? {
                if record.id.as_str() < other {
                    pairs.insert((record.id.clone(), other.to_string()));
                }
            }
        }

        Ok(Self {
            canonical_id: Some(graph.canonical_id().to_string()),
            nodes,
            relationships: pairs.into_iter().map(|(a, b)| vec![a, b]).collect(),
        })
    }

    /// 以格式化 JSON 写出
    pub fn to_writer_pretty<W: Write>(&self, writer: W) -> Result<()> {
        Ok(serde_json::to_writer_pretty(writer, self)?)
    }

    pub fn to_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromStr for GraphDocument {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

/// 从 JSON 文件导入规范图
pub fn import_json<P: AsRef<Path>>(path: P) -> Result<(CanonicalGraph<Value>, ImportStats)> {
    GraphDocument::from_path(path)?.into_graph()
}
