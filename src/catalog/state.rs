//! UI 状態
//!
//! アクティブカテゴリ・検索クエリ・表示件数の3つだけを保持し、
//! 状態遷移はメソッドとして明示する。

use super::category::Category;
use super::filter::filter_courses;
use crate::course::Course;

/// ページング設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    step: usize,
}

impl Pagination {
    /// 0 は 1 に切り上げる
    pub fn new(page_size: usize, step: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            step: step.max(1),
        }
    }

    /// 初期表示件数
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 「もっと見る」の増分
    pub fn step(&self) -> usize {
        self.step
    }
}

/// カタログの UI 状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    pagination: Pagination,
    category: Category,
    query: String,
    visible: usize,
}

impl CatalogState {
    /// 初期状態（All / 空クエリ / ページサイズ）
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            category: Category::All,
            query: String::new(),
            visible: pagination.page_size(),
        }
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// カテゴリを切り替える
    ///
    /// 現在と同じカテゴリなら何もせず `false` を返す。
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.category == category {
            return false;
        }
        self.category = category;
        self.reset_visible();
        true
    }

    /// 検索クエリを設定（表示件数はリセット）
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reset_visible();
    }

    /// 表示件数を1ページ分増やす
    pub fn load_more(&mut self) {
        self.visible = self.visible.saturating_add(self.pagination.step());
    }

    fn reset_visible(&mut self) {
        self.visible = self.pagination.page_size();
    }

    /// 現在の状態で絞り込んだコース一覧
    pub fn filtered<'a>(&self, courses: &'a [Course]) -> Vec<&'a Course> {
        filter_courses(courses, &self.category, &self.query)
    }

    /// 絞り込み件数に対してまだ非表示のコースがあるか
    pub fn has_more(&self, filtered_total: usize) -> bool {
        filtered_total > self.visible
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;

#[cfg(test)]
#[path = "state_proptests.rs"]
mod proptests;
