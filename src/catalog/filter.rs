//! フィルタロジック
//!
//! コース一覧をカテゴリと検索クエリで絞り込む。

use super::category::Category;
use crate::course::Course;

/// 検索用に正規化（前後の空白を除去して小文字化）
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// カテゴリと検索クエリでコースを絞り込む
///
/// - `category` が `All` ならカテゴリ条件なし
/// - タイトルに対する case-insensitive な部分一致（正規化後の空クエリは全件一致）
/// - 元の順序を保つ
pub fn filter_courses<'a>(
    courses: &'a [Course],
    category: &Category,
    query: &str,
) -> Vec<&'a Course> {
    let query = normalize(query);
    courses
        .iter()
        .filter(|c| category.matches(c) && normalize(c.title_or_empty()).contains(&query))
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod proptests;
