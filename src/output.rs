//! ターミナル向けのテキスト出力

use comfy_table::{presets::UTF8_FULL, Table};
use course_catalog::catalog::{
    CardNode, CatalogView, Category, CategoryIndex, GridNode, Messages, TabNode,
};
use owo_colors::OwoColorize;
use serde::Serialize;

/// JSON で出力
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    serde_json::to_string_pretty(value)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize output: {}", e))
}

/// タブ行を整形（アクティブなタブは [] で囲む）
pub fn format_tabs(tabs: &[TabNode]) -> String {
    tabs.iter()
        .map(|tab| {
            let text = format!("{} {}", tab.label, tab.count);
            if tab.active {
                format!("[{}]", text).green().bold().to_string()
            } else {
                text.dimmed().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn card_row(card: &CardNode) -> Vec<String> {
    vec![
        card.title.clone().unwrap_or_default(),
        card.tag.clone().unwrap_or_default(),
        card.price.clone().unwrap_or_default(),
        card.author.clone().unwrap_or_default(),
        card.image
            .as_ref()
            .map(|image| image.src.clone())
            .unwrap_or_default(),
    ]
}

/// カタログ全体を出力
pub fn print_catalog(view: &CatalogView, messages: &Messages) {
    println!("{}", format_tabs(&view.tabs));
    println!();

    match &view.courses.grid {
        GridNode::Empty { message } => {
            println!("{}", message.yellow());
        }
        GridNode::Cards { cards } => {
            let mut table = Table::new();
            table.load_preset(UTF8_FULL);
            table.set_header(vec!["Title", "Category", "Price", "Author", "Image"]);
            for card in cards {
                table.add_row(card_row(card));
            }
            println!("{table}");
        }
    }

    let shown = view.courses.card_count();
    println!();
    println!("{} / {}", shown, view.courses.total);
    if view.courses.load_more.shown {
        println!("{} {}", "→".cyan(), messages.load_more.cyan());
    }
}

/// カテゴリ一覧を出力
pub fn print_categories(index: &CategoryIndex, messages: &Messages) {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Category", "Courses"]);

    for entry in index.entries() {
        let label = match &entry.category {
            Category::All => messages.all,
            Category::Named(name) => name.as_str(),
        };
        table.add_row(vec![label.to_string(), entry.count.to_string()]);
    }

    println!("{table}");
}
