//! ロケール別の表示文言

use serde::Deserialize;

/// ロケール
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

/// 表示文言
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    /// 「すべて」タブのラベル
    pub all: &'static str,
    /// 検索結果が空のときのメッセージ
    pub empty: &'static str,
    /// 講師名の前置き
    pub by: &'static str,
    /// 「もっと見る」ボタン
    pub load_more: &'static str,
    /// 検索欄のプレースホルダ
    pub search: &'static str,
}

const EN: Messages = Messages {
    all: "All",
    empty: "Nothing was found for your request. Please try a different filter or search query.",
    by: "by",
    load_more: "Load more",
    search: "Search courses",
};

const RU: Messages = Messages {
    all: "Все",
    empty: "По вашему запросу ничего не найдено. Попробуйте изменить фильтр или поисковый запрос.",
    by: "автор",
    load_more: "Показать ещё",
    search: "Поиск курсов",
};

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Ru => &RU,
        }
    }
}
