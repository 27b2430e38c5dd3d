//! カテゴリ
//!
//! タブとして表示するカテゴリ一覧と、絞り込み前の件数を保持する。

use crate::course::Course;
use serde::Serialize;

/// 「すべて」タブの値
pub const ALL_VALUE: &str = "All";

/// カテゴリ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// 全件
    #[default]
    All,
    /// 名前付きカテゴリ
    Named(String),
}

impl Category {
    /// タブの値から変換（`"All"` は常に全件）
    pub fn from_value(value: &str) -> Self {
        if value == ALL_VALUE {
            Category::All
        } else {
            Category::Named(value.to_string())
        }
    }

    /// タブの値
    pub fn value(&self) -> &str {
        match self {
            Category::All => ALL_VALUE,
            Category::Named(name) => name,
        }
    }

    /// コースがこのカテゴリに属するか
    pub fn matches(&self, course: &Course) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => course.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// カテゴリと件数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    #[serde(serialize_with = "serialize_category")]
    pub category: Category,
    pub count: usize,
}

fn serialize_category<S: serde::Serializer>(
    category: &Category,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(category.value())
}

/// カテゴリ一覧
///
/// 先頭は常に `All`、以降は初出順。件数は絞り込み前のコース一覧から一度だけ数える。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex {
    entries: Vec<CategoryCount>,
}

impl CategoryIndex {
    /// コース一覧からカテゴリ一覧を構築
    pub fn build(courses: &[Course]) -> Self {
        let mut entries = vec![CategoryCount {
            category: Category::All,
            count: courses.len(),
        }];

        for name in courses.iter().filter_map(Course::category_name) {
            if name == ALL_VALUE {
                continue;
            }
            match entries
                .iter_mut()
                .find(|e| matches!(&e.category, Category::Named(n) if n == name))
            {
                Some(entry) => entry.count += 1,
                None => entries.push(CategoryCount {
                    category: Category::Named(name.to_string()),
                    count: 1,
                }),
            }
        }

        Self { entries }
    }

    /// 既知のカテゴリかどうか
    pub fn contains(&self, category: &Category) -> bool {
        self.entries.iter().any(|e| &e.category == category)
    }

    /// カテゴリの件数（未知なら 0）
    pub fn count(&self, category: &Category) -> usize {
        self.entries
            .iter()
            .find(|e| &e.category == category)
            .map_or(0, |e| e.count)
    }

    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    /// 指定カテゴリから `offset` だけ移動したカテゴリ（循環）
    pub fn cycle(&self, from: &Category, offset: isize) -> &Category {
        let len = self.entries.len() as isize;
        let current = self
            .entries
            .iter()
            .position(|e| &e.category == from)
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        &self.entries[next].category
    }
}

#[cfg(test)]
#[path = "category_test.rs"]
mod tests;
