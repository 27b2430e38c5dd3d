use clap::{Parser, Subcommand};

use crate::commands::{browse, categories, render};

#[derive(Debug, Parser)]
#[command(name = "catalog")]
#[command(about = "Course Catalog CLI", long_about = None)]
pub struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// カタログを描画して表示
    Render(render::Args),

    /// カテゴリ一覧と件数を表示
    Categories(categories::Args),

    /// 対話的にカタログを閲覧
    Browse(browse::Args),
}
