//! 閲覧 TUI の Model/Msg/update
//!
//! キー入力を `Msg` に変換し、カタログコントローラへのイベントとして流す。

use course_catalog::catalog::{CatalogController, Event, MemoryTarget};
use course_catalog::config::CatalogConfig;
use course_catalog::course::Course;
use crossterm::event::KeyCode;

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// 終了
    Quit,
    /// 次のカテゴリへ
    NextTab,
    /// 前のカテゴリへ
    PrevTab,
    /// 検索文字入力
    SearchInput(char),
    /// 検索文字削除
    SearchBackspace,
    /// 検索クリア
    SearchClear,
    /// もっと見る
    LoadMore,
}

/// アプリケーション全体の状態
pub struct Model {
    pub controller: CatalogController<MemoryTarget>,
    pub should_quit: bool,
}

impl Model {
    /// 新しいモデルを作成（初回描画まで行う）
    pub fn new(courses: Vec<Course>, config: &CatalogConfig) -> Option<Self> {
        let controller = CatalogController::init(MemoryTarget::new(), courses, config)?;
        Some(Self {
            controller,
            should_quit: false,
        })
    }

    /// キー入力をメッセージに変換
    pub fn key_to_msg(&self, key: KeyCode) -> Option<Msg> {
        let has_query = !self.controller.state().query().is_empty();

        match key {
            KeyCode::Esc if has_query => Some(Msg::SearchClear),
            KeyCode::Esc => Some(Msg::Quit),
            KeyCode::Tab | KeyCode::Right => Some(Msg::NextTab),
            KeyCode::BackTab | KeyCode::Left => Some(Msg::PrevTab),
            KeyCode::Enter => Some(Msg::LoadMore),
            KeyCode::Backspace if has_query => Some(Msg::SearchBackspace),
            KeyCode::Char(c) => Some(Msg::SearchInput(c)),
            _ => None,
        }
    }
}

/// メッセージに応じて状態を更新
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Quit => {
            model.should_quit = true;
        }
        Msg::NextTab => switch_tab(model, 1),
        Msg::PrevTab => switch_tab(model, -1),
        Msg::SearchInput(c) => {
            let mut query = model.controller.state().query().to_string();
            query.push(c);
            model.controller.dispatch(Event::SearchInput(query));
        }
        Msg::SearchBackspace => {
            let mut query = model.controller.state().query().to_string();
            query.pop();
            model.controller.dispatch(Event::SearchInput(query));
        }
        Msg::SearchClear => {
            model.controller.dispatch(Event::SearchInput(String::new()));
        }
        Msg::LoadMore => {
            model.controller.dispatch(Event::LoadMoreClick);
        }
    }
}

/// 隣のカテゴリタブをクリックしたことにする
fn switch_tab(model: &mut Model, offset: isize) {
    let controller = &model.controller;
    let value = controller
        .categories()
        .cycle(controller.state().category(), offset)
        .value()
        .to_string();
    model.controller.dispatch(Event::TabClick(value));
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
