//! カタログ設定
//!
//! `catalog.toml` からページサイズ・ロケール・通貨記号を読み込む。

use crate::catalog::{Locale, Pagination};
use crate::error::{CatalogError, Result};
use serde::Deserialize;
use std::path::Path;

/// 初期表示件数のデフォルト値
pub const DEFAULT_INITIAL_VISIBLE: usize = 9;

/// 通貨記号のデフォルト値
pub const DEFAULT_CURRENCY: &str = "$";

/// catalog.toml のルート構造
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    initial_visible: Option<usize>,
    load_more_step: Option<usize>,
    locale: Option<Locale>,
    currency: Option<String>,
}

/// カタログ設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// 初期表示件数（ページサイズ）
    pub initial_visible: usize,
    /// 「もっと見る」1回あたりの追加件数
    pub load_more_step: usize,
    /// 表示メッセージのロケール
    pub locale: Locale,
    /// 数値価格の前に付ける通貨記号
    pub currency: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            initial_visible: DEFAULT_INITIAL_VISIBLE,
            load_more_step: DEFAULT_INITIAL_VISIBLE,
            locale: Locale::default(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl CatalogConfig {
    /// 設定ファイルを読み込む
    ///
    /// パス未指定、またはファイルが存在しない場合はデフォルト値を返す。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// TOML 文字列から設定を構築
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;

        let initial_visible = file.initial_visible.unwrap_or(DEFAULT_INITIAL_VISIBLE);
        // 増分未指定ならページサイズと同じ
        let load_more_step = file.load_more_step.unwrap_or(initial_visible);

        let config = Self {
            initial_visible,
            load_more_step,
            locale: file.locale.unwrap_or_default(),
            currency: file.currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        };
        config.validate()?;
        Ok(config)
    }

    /// 設定値を検証
    pub fn validate(&self) -> Result<()> {
        if self.initial_visible == 0 {
            return Err(CatalogError::InvalidConfig(
                "initial_visible must be at least 1".to_string(),
            ));
        }
        if self.load_more_step == 0 {
            return Err(CatalogError::InvalidConfig(
                "load_more_step must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// ページング設定を取得
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.initial_visible, self.load_more_step)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
