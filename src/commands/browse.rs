//! catalog browse コマンド
//!
//! ターミナル上でカタログを対話的に閲覧する。

use super::DataArgs;
use crate::tui;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,
}

pub fn run(args: Args) -> Result<(), String> {
    let (courses, config) = args.data.load()?;
    tui::run(courses, &config).map_err(|e| format!("Terminal error: {}", e))
}
