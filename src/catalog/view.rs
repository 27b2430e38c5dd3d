//! 描画ノード
//!
//! UI 状態からタブ・カード・「もっと見る」の構造化ノードを組み立てる。
//! 描画バックエンドには依存しない。

use super::category::{Category, CategoryIndex};
use super::messages::Messages;
use super::state::CatalogState;
use crate::course::Course;
use serde::Serialize;
use std::collections::BTreeSet;

// ============================================================================
// CardTemplate（カードのひな形）
// ============================================================================

/// カード内のスロット
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardSlot {
    Image,
    Tag,
    Title,
    Price,
    Author,
}

impl CardSlot {
    pub fn all() -> &'static [CardSlot] {
        &[
            CardSlot::Image,
            CardSlot::Tag,
            CardSlot::Title,
            CardSlot::Price,
            CardSlot::Author,
        ]
    }
}

/// カードのひな形
///
/// ひな形に存在しないスロットは、コースに値があっても埋めない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardTemplate {
    slots: BTreeSet<CardSlot>,
}

impl Default for CardTemplate {
    fn default() -> Self {
        Self::with_slots(CardSlot::all().iter().copied())
    }
}

impl CardTemplate {
    pub fn with_slots(slots: impl IntoIterator<Item = CardSlot>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    pub fn has(&self, slot: CardSlot) -> bool {
        self.slots.contains(&slot)
    }
}

// ============================================================================
// ノード
// ============================================================================

/// カテゴリタブ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabNode {
    /// タブの値（クリック時にそのまま返る）
    pub value: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

/// カード画像
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageNode {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// コースカード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageNode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// カードグリッド
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridNode {
    Cards { cards: Vec<CardNode> },
    Empty { message: String },
}

/// 「もっと見る」ボタン
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadMoreNode {
    pub label: String,
    pub shown: bool,
    pub enabled: bool,
}

/// グリッドと「もっと見る」（常に一緒に再描画される）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoursesView {
    pub grid: GridNode,
    pub load_more: LoadMoreNode,
    /// 絞り込み後の総件数
    pub total: usize,
}

impl CoursesView {
    /// 表示中のカード枚数
    pub fn card_count(&self) -> usize {
        match &self.grid {
            GridNode::Cards { cards } => cards.len(),
            GridNode::Empty { .. } => 0,
        }
    }
}

/// カタログ全体
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub tabs: Vec<TabNode>,
    #[serde(flatten)]
    pub courses: CoursesView,
}

// ============================================================================
// 組み立て
// ============================================================================

/// 描画に必要な共通コンテキスト
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub messages: &'a Messages,
    pub currency: &'a str,
    pub template: &'a CardTemplate,
}

/// タブ一覧を組み立てる（件数は絞り込み前）
pub fn tabs_view(index: &CategoryIndex, state: &CatalogState, messages: &Messages) -> Vec<TabNode> {
    index
        .entries()
        .iter()
        .map(|entry| {
            let label = match &entry.category {
                Category::All => messages.all.to_string(),
                Category::Named(name) => name.clone(),
            };
            TabNode {
                value: entry.category.value().to_string(),
                label,
                count: entry.count,
                active: &entry.category == state.category(),
            }
        })
        .collect()
}

/// コース1件分のカードを組み立てる
pub fn card_view(course: &Course, ctx: &ViewContext<'_>) -> CardNode {
    let template = ctx.template;
    let mut card = CardNode::default();

    if template.has(CardSlot::Image) {
        card.image = course.image.as_ref().map(|src| ImageNode {
            src: src.clone(),
            alt: course.title.clone(),
        });
    }
    if template.has(CardSlot::Tag) {
        card.tag = course.category_name().map(str::to_string);
    }
    if template.has(CardSlot::Title) {
        card.title = course.title.clone();
    }
    if template.has(CardSlot::Price) {
        card.price = course.price.as_ref().map(|p| p.format(ctx.currency));
    }
    if template.has(CardSlot::Author) {
        card.author = course
            .mentor
            .as_ref()
            .map(|mentor| format!("{} {}", ctx.messages.by, mentor));
    }

    card
}

/// グリッドと「もっと見る」を組み立てる
pub fn courses_view(courses: &[Course], state: &CatalogState, ctx: &ViewContext<'_>) -> CoursesView {
    let filtered = state.filtered(courses);
    let total = filtered.len();
    let cards: Vec<CardNode> = filtered
        .iter()
        .take(state.visible())
        .map(|c| card_view(c, ctx))
        .collect();

    let label = ctx.messages.load_more.to_string();

    if cards.is_empty() {
        return CoursesView {
            grid: GridNode::Empty {
                message: ctx.messages.empty.to_string(),
            },
            load_more: LoadMoreNode {
                label,
                shown: false,
                enabled: false,
            },
            total,
        };
    }

    let has_more = state.has_more(total);
    CoursesView {
        grid: GridNode::Cards { cards },
        load_more: LoadMoreNode {
            label,
            shown: has_more,
            enabled: has_more,
        },
        total,
    }
}

/// カタログ全体を組み立てる
pub fn catalog_view(
    courses: &[Course],
    index: &CategoryIndex,
    state: &CatalogState,
    ctx: &ViewContext<'_>,
) -> CatalogView {
    CatalogView {
        tabs: tabs_view(index, state, ctx.messages),
        courses: courses_view(courses, state, ctx),
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
