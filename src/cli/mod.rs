//! 命令行输出支持

mod printer;

pub use printer::{PrintMode, Printer, StatsRow};
