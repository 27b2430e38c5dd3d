//! コースカタログ
//!
//! 静的なコース一覧をカテゴリタブ・検索・「もっと見る」で絞り込み、
//! バックエンド非依存の描画ノードとして描画先へ渡すウィジェット。

pub mod catalog;
pub mod config;
pub mod course;
pub mod error;
