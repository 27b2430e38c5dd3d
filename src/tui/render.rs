//! 閲覧 TUI の描画
//!
//! MemoryTarget に最後に描画されたノードを ratatui ウィジェットに変換する。

use super::app::Model;
use course_catalog::catalog::{CardNode, GridNode};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap};

/// 画面を描画
pub fn draw(f: &mut Frame, model: &Model) {
    let controller = &model.controller;
    let target = controller.target();
    let messages = controller.messages();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // タブバー
            Constraint::Length(3), // 検索欄
            Constraint::Min(1),    // カード
            Constraint::Length(1), // もっと見る / ヘルプ
        ])
        .split(f.area());

    // タブバー
    let tab_titles: Vec<String> = target
        .tabs()
        .iter()
        .map(|t| format!("{} {}", t.label, t.count))
        .collect();
    let selected = target.tabs().iter().position(|t| t.active).unwrap_or(0);
    let tabs = Tabs::new(tab_titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .divider(" | ");
    f.render_widget(tabs, chunks[0]);

    // 検索欄
    let search = Paragraph::new(format!("{}_", controller.state().query())).block(
        Block::default()
            .title(format!(" {} ", messages.search))
            .borders(Borders::ALL),
    );
    f.render_widget(search, chunks[1]);

    // カード
    let Some(courses) = target.courses() else {
        return;
    };
    let title = format!(" {} / {} ", courses.card_count(), courses.total);
    let block = Block::default().title(title).borders(Borders::ALL);
    match &courses.grid {
        GridNode::Empty { message } => {
            let empty = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true })
                .block(block);
            f.render_widget(empty, chunks[2]);
        }
        GridNode::Cards { cards } => {
            let items: Vec<ListItem> = cards.iter().map(card_item).collect();
            f.render_widget(List::new(items).block(block), chunks[2]);
        }
    }

    // もっと見る / ヘルプ
    let footer = if courses.load_more.shown {
        Paragraph::new(format!(" Enter: {} | Tab: category | Esc: clear/quit", messages.load_more))
            .style(Style::default().fg(Color::Cyan))
    } else {
        Paragraph::new(" Tab: category | type to search | Esc: clear/quit")
            .style(Style::default().fg(Color::DarkGray))
    };
    f.render_widget(footer, chunks[3]);
}

/// カード1枚を2行のリスト項目に変換
fn card_item(card: &CardNode) -> ListItem<'static> {
    let mut heading = vec![Span::styled(
        card.title.clone().unwrap_or_default(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(tag) = &card.tag {
        heading.push(Span::styled(
            format!("  [{}]", tag),
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(price) = &card.price {
        heading.push(Span::styled(
            format!("  {}", price),
            Style::default().fg(Color::Green),
        ));
    }

    let detail = card.author.clone().unwrap_or_default();
    ListItem::new(vec![
        Line::from(heading),
        Line::from(Span::styled(
            format!("  {}", detail),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}
