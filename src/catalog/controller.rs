//! カタログコントローラ
//!
//! - `Event`: 描画先から届くイベント（タブ / 検索 / もっと見る）
//! - `update`: イベントに応じた状態遷移（純粋関数）
//! - `CatalogController`: 状態を保持し、遷移後に必要な領域だけ再描画する

use super::category::{Category, CategoryIndex};
use super::messages::Messages;
use super::state::CatalogState;
use super::target::RenderTarget;
use super::view::{catalog_view, courses_view, tabs_view, CardTemplate, CatalogView, ViewContext};
use crate::config::CatalogConfig;
use crate::course::Course;

// ============================================================================
// Event（描画先からのイベント）
// ============================================================================

/// 描画先からのイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// タブのクリック（タブの値）
    TabClick(String),
    /// 検索欄の入力（入力欄の現在値）
    SearchInput(String),
    /// 「もっと見る」のクリック
    LoadMoreClick,
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// update() の戻り値：再描画が必要な領域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderEffect {
    pub tabs: bool,
    pub courses: bool,
}

impl RenderEffect {
    fn none() -> Self {
        Self::default()
    }

    fn courses() -> Self {
        Self {
            tabs: false,
            courses: true,
        }
    }

    fn all() -> Self {
        Self {
            tabs: true,
            courses: true,
        }
    }
}

/// イベントに応じて状態を更新
pub fn update(
    state: &mut CatalogState,
    categories: &CategoryIndex,
    courses: &[Course],
    event: Event,
) -> RenderEffect {
    match event {
        Event::TabClick(value) => {
            let category = Category::from_value(&value);
            if !categories.contains(&category) {
                tracing::debug!(value = %value, "ignoring click on unknown category");
                return RenderEffect::none();
            }
            if state.select_category(category) {
                tracing::debug!(category = %value, "category selected");
                RenderEffect::all()
            } else {
                RenderEffect::none()
            }
        }
        Event::SearchInput(query) => {
            tracing::debug!(query = %query, "search query changed");
            state.set_query(query);
            RenderEffect::courses()
        }
        Event::LoadMoreClick => {
            // 非表示中のボタンは押せない
            let total = state.filtered(courses).len();
            if !state.has_more(total) {
                return RenderEffect::none();
            }
            state.load_more();
            tracing::debug!(visible = state.visible(), total, "loaded more courses");
            RenderEffect::courses()
        }
    }
}

// ============================================================================
// CatalogController
// ============================================================================

/// カタログコントローラ
#[derive(Debug)]
pub struct CatalogController<T: RenderTarget> {
    target: T,
    courses: Vec<Course>,
    categories: CategoryIndex,
    state: CatalogState,
    template: CardTemplate,
    messages: &'static Messages,
    currency: String,
}

impl<T: RenderTarget> CatalogController<T> {
    /// コントローラを初期化して初回描画する
    ///
    /// 描画先に欠けている接続点があれば何も描画せず `None` を返す。
    pub fn init(target: T, courses: Vec<Course>, config: &CatalogConfig) -> Option<Self> {
        let attachments = target.attachments();
        let missing = attachments.missing();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|p| p.name()).collect();
            tracing::debug!(missing = ?names, "render target incomplete, catalog not initialized");
            return None;
        }
        let template = attachments.card_template?;

        let categories = CategoryIndex::build(&courses);
        let mut controller = Self {
            target,
            courses,
            categories,
            state: CatalogState::new(config.pagination()),
            template,
            messages: config.locale.messages(),
            currency: config.currency.clone(),
        };
        controller.render(RenderEffect::all());
        tracing::debug!(
            courses = controller.courses.len(),
            categories = controller.categories.entries().len(),
            "catalog initialized"
        );
        Some(controller)
    }

    /// イベントを処理し、必要な領域を再描画する
    pub fn dispatch(&mut self, event: Event) -> RenderEffect {
        let effect = update(&mut self.state, &self.categories, &self.courses, event);
        self.render(effect);
        effect
    }

    fn render(&mut self, effect: RenderEffect) {
        if effect.tabs {
            let tabs = tabs_view(&self.categories, &self.state, self.messages);
            self.target.render_tabs(&tabs);
        }
        if effect.courses {
            let courses = courses_view(&self.courses, &self.state, &self.context());
            self.target.render_courses(&courses);
        }
    }

    fn context(&self) -> ViewContext<'_> {
        ViewContext {
            messages: self.messages,
            currency: &self.currency,
            template: &self.template,
        }
    }

    /// 現在の状態から組み立てたカタログ全体
    pub fn view(&self) -> CatalogView {
        catalog_view(&self.courses, &self.categories, &self.state, &self.context())
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn categories(&self) -> &CategoryIndex {
        &self.categories
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
