//! 结果打印器
//!
//! 提供表格和 JSON 格式的结果输出

use crate::mapping::GraphStats;
use prettytable::{format, row, Cell, Row, Table};
use serde::Serialize;

/// 打印模式
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON 模式
    Json,
}

/// 单个图的统计行
#[derive(Debug, Clone, Serialize)]
pub struct StatsRow {
    #[serde(flatten)]
    pub stats: GraphStats,
    /// 导入时跳过的关系组数
    pub skipped_relationships: usize,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> PrintMode {
        self.mode
    }

    /// 打印图统计信息
    pub fn print_stats(&self, rows: &[StatsRow]) -> String {
        match self.mode {
            PrintMode::Json => to_json(rows),
            PrintMode::Table => {
                let columns = ["Canonical Id", "Nodes", "Edges", "Skipped"];
                let data: Vec<Vec<String>> = rows
                    .iter()
                    .map(|r| {
                        vec![
                            r.stats.canonical_id.clone(),
                            r.stats.node_count.to_string(),
                            r.stats.edge_count.to_string(),
                            r.skipped_relationships.to_string(),
                        ]
                    })
                    .collect();
                format!(
                    "{}{} graph(s)\n",
                    format_table(&columns, &data),
                    rows.len()
                )
            }
        }
    }

    /// 打印节点的关系
    pub fn print_relationships(&self, id: &str, related: &[&str]) -> String {
        match self.mode {
            PrintMode::Json => to_json(&serde_json::json!({ "id": id, "related": related })),
            PrintMode::Table => {
                if related.is_empty() {
                    return format!("'{}' has no relationships\n", id);
                }
                let mut table = Table::new();
                table.set_format(*format::consts::FORMAT_BOX_CHARS);
                table.set_titles(row!["Node", "Related"]);
                for other in related {
                    table.add_row(row![id, other]);
                }
                format!("{}{} relationship(s)\n", table, related.len())
            }
        }
    }
}

/// 表格格式
fn format_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);

    let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
    table.set_titles(Row::new(header));

    for row_data in rows {
        let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
        table.add_row(Row::new(cells));
    }

    table.to_string()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string_pretty(value) {
        Ok(s) => format!("{}\n", s),
        Err(e) => format!("{{\"error\": \"{}\"}}\n", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<StatsRow> {
        vec![StatsRow {
            stats: GraphStats {
                canonical_id: "urn:uuid:g".to_string(),
                node_count: 3,
                edge_count: 6,
            },
            skipped_relationships: 1,
        }]
    }

    #[test]
    fn test_print_stats_table() {
        let out = Printer::default().print_stats(&sample());
        assert!(out.contains("urn:uuid:g"));
        assert!(out.contains("Edges"));
        assert!(out.ends_with("1 graph(s)\n"));
    }

    #[test]
    fn test_print_stats_json() {
        let out = Printer::new(PrintMode::Json).print_stats(&sample());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["canonical_id"], "urn:uuid:g");
        assert_eq!(parsed[0]["edge_count"], 6);
        assert_eq!(parsed[0]["skipped_relationships"], 1);
    }

    #[test]
    fn test_print_relationships() {
        let printer = Printer::default();
        assert!(printer.print_relationships("a", &[]).contains("no relationships"));
        assert!(printer
            .print_relationships("a", &["b", "c"])
            .ends_with("2 relationship(s)\n"));
    }
}
