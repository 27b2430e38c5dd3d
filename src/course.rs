//! コースレコード
//!
//! 外部から与えられる静的なコース一覧。全フィールドが省略可能。

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// コースレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: Option<String>,
    pub category: Option<String>,
    pub price: Option<Price>,
    pub mentor: Option<String>,
    pub image: Option<String>,
}

impl Course {
    /// タイトル（未設定なら空文字列）
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// 空でないカテゴリ名を取得
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

/// 価格
///
/// 数値は整数ならそのまま、小数なら末尾の `.0` を付けずに表示する
/// （`10.0` は `10`、`1e2` は `100`、`10.50` は `10.5`）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(serde_json::Number),
    Text(String),
}

impl Price {
    /// 表示用に整形（数値のみ通貨記号を付ける）
    pub fn format(&self, currency: &str) -> String {
        match self {
            Price::Amount(_) => format!("{currency}{self}"),
            Price::Text(_) => self.to_string(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => {
                if let Some(n) = amount.as_i64() {
                    write!(f, "{n}")
                } else if let Some(n) = amount.as_u64() {
                    write!(f, "{n}")
                } else {
                    // f64 の Display は整数値を `100` と出力する
                    write!(f, "{}", amount.as_f64().unwrap_or_default())
                }
            }
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// JSON 文字列からコース一覧を読み込む
pub fn parse_courses(content: &str) -> Result<Vec<Course>> {
    Ok(serde_json::from_str(content)?)
}

/// JSON ファイルからコース一覧を読み込む
pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    let content = std::fs::read_to_string(path)?;
    let courses = parse_courses(&content)?;
    tracing::debug!(path = %path.display(), count = courses.len(), "loaded courses");
    Ok(courses)
}

#[cfg(test)]
#[path = "course_test.rs"]
mod tests;
