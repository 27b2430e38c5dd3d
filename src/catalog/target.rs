//! 描画先
//!
//! ホストが提供する描画先（タブ・グリッド・検索欄・「もっと見る」・カードひな形）の抽象。

use super::view::{CardTemplate, CatalogView, CoursesView, TabNode};

/// 描画先の接続点
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AttachmentPoint {
    Tabs,
    Grid,
    SearchInput,
    LoadMore,
    CardTemplate,
}

impl AttachmentPoint {
    pub fn name(&self) -> &'static str {
        match self {
            AttachmentPoint::Tabs => "tabs",
            AttachmentPoint::Grid => "grid",
            AttachmentPoint::SearchInput => "search-input",
            AttachmentPoint::LoadMore => "load-more",
            AttachmentPoint::CardTemplate => "card-template",
        }
    }
}

/// 描画先が提供する接続点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachments {
    pub tabs: bool,
    pub grid: bool,
    pub search_input: bool,
    pub load_more: bool,
    pub card_template: Option<CardTemplate>,
}

impl Default for Attachments {
    /// 全接続点あり（カードひな形は全スロット）
    fn default() -> Self {
        Self {
            tabs: true,
            grid: true,
            search_input: true,
            load_more: true,
            card_template: Some(CardTemplate::default()),
        }
    }
}

impl Attachments {
    /// 欠けている接続点の一覧
    pub fn missing(&self) -> Vec<AttachmentPoint> {
        let mut missing = Vec::new();
        if !self.tabs {
            missing.push(AttachmentPoint::Tabs);
        }
        if !self.grid {
            missing.push(AttachmentPoint::Grid);
        }
        if !self.search_input {
            missing.push(AttachmentPoint::SearchInput);
        }
        if !self.load_more {
            missing.push(AttachmentPoint::LoadMore);
        }
        if self.card_template.is_none() {
            missing.push(AttachmentPoint::CardTemplate);
        }
        missing
    }
}

/// 描画先
pub trait RenderTarget {
    /// 利用可能な接続点
    fn attachments(&self) -> Attachments;

    /// タブ一覧を描画（既存のタブは置き換え）
    fn render_tabs(&mut self, tabs: &[TabNode]);

    /// グリッドと「もっと見る」を描画（既存のカードは置き換え）
    fn render_courses(&mut self, courses: &CoursesView);
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn attachments(&self) -> Attachments {
        (**self).attachments()
    }

    fn render_tabs(&mut self, tabs: &[TabNode]) {
        (**self).render_tabs(tabs)
    }

    fn render_courses(&mut self, courses: &CoursesView) {
        (**self).render_courses(courses)
    }
}

// ============================================================================
// MemoryTarget（メモリ上の描画先）
// ============================================================================

/// 最後に描画されたノードを保持する描画先
#[derive(Debug, Clone, Default)]
pub struct MemoryTarget {
    attachments: Attachments,
    tabs: Vec<TabNode>,
    courses: Option<CoursesView>,
    tab_renders: usize,
    course_renders: usize,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// 接続点を指定して作成
    pub fn with_attachments(attachments: Attachments) -> Self {
        Self {
            attachments,
            ..Self::default()
        }
    }

    pub fn tabs(&self) -> &[TabNode] {
        &self.tabs
    }

    pub fn courses(&self) -> Option<&CoursesView> {
        self.courses.as_ref()
    }

    /// 最後に描画された内容（未描画なら `None`）
    pub fn snapshot(&self) -> Option<CatalogView> {
        self.courses.as_ref().map(|courses| CatalogView {
            tabs: self.tabs.clone(),
            courses: courses.clone(),
        })
    }

    /// タブの描画回数
    pub fn tab_renders(&self) -> usize {
        self.tab_renders
    }

    /// グリッドの描画回数
    pub fn course_renders(&self) -> usize {
        self.course_renders
    }
}

impl RenderTarget for MemoryTarget {
    fn attachments(&self) -> Attachments {
        self.attachments.clone()
    }

    fn render_tabs(&mut self, tabs: &[TabNode]) {
        self.tabs = tabs.to_vec();
        self.tab_renders += 1;
    }

    fn render_courses(&mut self, courses: &CoursesView) {
        self.courses = Some(courses.clone());
        self.course_renders += 1;
    }
}
