//! catalog render コマンド
//!
//! イベントを順に適用したあとのカタログを表示する。

use super::DataArgs;
use crate::output;
use clap::Parser;
use course_catalog::catalog::{CatalogController, Category, Event, MemoryTarget};
use owo_colors::OwoColorize;

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub data: DataArgs,

    /// Select a category tab before rendering
    #[arg(long)]
    pub category: Option<String>,

    /// Type a search query before rendering
    #[arg(long)]
    pub query: Option<String>,

    /// Press "load more" this many times
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub load_more: usize,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    let (courses, config) = args.data.load()?;

    let Some(mut controller) = CatalogController::init(MemoryTarget::new(), courses, &config)
    else {
        return Err("Render target is incomplete".to_string());
    };

    // イベントは カテゴリ → 検索 → もっと見る の順に適用
    if let Some(category) = args.category {
        if !controller
            .categories()
            .contains(&Category::from_value(&category))
        {
            eprintln!(
                "{} Unknown category '{}', showing all courses",
                "warning:".yellow(),
                category
            );
        }
        controller.dispatch(Event::TabClick(category));
    }
    if let Some(query) = args.query {
        controller.dispatch(Event::SearchInput(query));
    }
    for _ in 0..args.load_more {
        controller.dispatch(Event::LoadMoreClick);
    }

    let messages = controller.messages();
    let target = controller.into_target();
    let Some(view) = target.snapshot() else {
        return Err("Nothing was rendered".to_string());
    };

    if args.json {
        output::print_json(&view)
    } else {
        output::print_catalog(&view, messages);
        Ok(())
    }
}
