//! catalog categories コマンド
//!
//! カテゴリタブと絞り込み前の件数を一覧表示する。

use super::DataArgs;
use crate::output;
use clap::Parser;
use course_catalog::catalog::CategoryIndex;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    let (courses, config) = args.data.load()?;
    let index = CategoryIndex::build(&courses);

    if args.json {
        output::print_json(index.entries())
    } else {
        output::print_categories(&index, config.locale.messages());
        Ok(())
    }
}
