//! RelGraph CLI 工具
//!
//! 导入规范图 JSON 文档并查询统计与关系

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use relgraph::catalog::GraphCatalog;
use relgraph::cli::{PrintMode, Printer, StatsRow};
use relgraph::import::GraphDocument;
use relgraph::mapping::generate_canonical_id;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "relgraph-cli")]
#[command(about = "RelGraph 命令行工具")]
struct Args {
    /// 输出详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    /// 以 JSON 格式输出
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 导入一个或多个文档并显示统计信息
    Stats {
        /// 文档路径
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// 显示节点的所有关系
    Relationships {
        /// 文档路径
        file: PathBuf,
        /// 节点 id
        id: String,
    },
    /// 生成新的 urn:uuid 规范 id
    NewId,
    /// 规范化并重新输出文档
    Export {
        /// 文档路径
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let printer = Printer::new(if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    });

    match args.command {
        Command::Stats { files } => {
            let catalog: GraphCatalog<Value> = GraphCatalog::new();
            let mut rows = Vec::with_capacity(files.len());
            for file in &files {
                let (graph, stats) = GraphDocument::from_path(file)
                    .and_then(GraphDocument::into_graph)
                    .with_context(|| format!("无法导入文档 {}", file.display()))?;
                let summary = graph.stats();
                catalog
                    .register(graph)
                    .with_context(|| format!("文档 {} 的图 id 重复", file.display()))?;
                rows.push(StatsRow {
                    stats: summary,
                    skipped_relationships: stats.errors,
                });
            }
            rows.sort_by(|a, b| a.stats.canonical_id.cmp(&b.stats.canonical_id));
            print!("{}", printer.print_stats(&rows));
        }
        Command::Relationships { file, id } => {
            let (graph, _) = load(&file)?;
            let mut related = graph.get_relationships(&id)?;
            related.sort_unstable();
            print!("{}", printer.print_relationships(&id, &related));
        }
        Command::NewId => println!("{}", generate_canonical_id()),
        Command::Export { file } => {
            let (graph, _) = load(&file)?;
            let doc = GraphDocument::from_graph(&graph)?;
            doc.to_writer_pretty(io::stdout().lock())?;
            println!();
        }
    }

    Ok(())
}

fn load(file: &Path) -> Result<(relgraph::CanonicalGraph<Value>, relgraph::import::ImportStats)> {
    GraphDocument::from_path(file)
        .and_then(GraphDocument::into_graph)
        .with_context(|| format!("无法导入文档 {}", file.display()))
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
