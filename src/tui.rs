//! カタログ閲覧 TUI
//!
//! ratatui/crossterm を描画先とするカタログのホスト。
//!
//! ## モジュール構成
//!
//! - `app`: Model/Msg/update（キー入力 → カタログイベント）
//! - `render`: 画面描画

mod app;
mod render;

use app::Model;
use course_catalog::config::CatalogConfig;
use course_catalog::course::Course;
use crossterm::event::{self, Event as TermEvent, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout};

/// drop 時に復元処理を一度だけ実行する
struct RestoreOnDrop<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.0.take() {
            restore();
        }
    }
}

/// raw モードと代替スクリーンに入る（戻り値の drop で元に戻る）
fn enter_terminal() -> io::Result<RestoreOnDrop<impl FnOnce()>> {
    terminal::enable_raw_mode()?;
    // 以降で失敗しても drop で raw モードを解除する
    let guard = RestoreOnDrop(Some(|| {
        let _ = terminal::disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }));
    stdout().execute(EnterAlternateScreen)?;
    Ok(guard)
}

/// TUI を実行
pub fn run(courses: Vec<Course>, config: &CatalogConfig) -> io::Result<()> {
    let Some(mut model) = Model::new(courses, config) else {
        return Ok(());
    };

    // ターミナル設定（エラー時も含めて drop で復元）
    let _guard = enter_terminal()?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // メインループ
    while !model.should_quit {
        terminal.draw(|f| render::draw(f, &model))?;

        if let TermEvent::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if let Some(msg) = model.key_to_msg(key.code) {
                    app::update(&mut model, msg);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tui_test.rs"]
mod tests;
