//! コースカタログウィジェット
//!
//! カテゴリタブ・検索・「もっと見る」でコース一覧を絞り込み、カードとして描画する。
//!
//! ## モジュール構成
//!
//! - `category`: カテゴリとタブ件数
//! - `filter`: カテゴリ・検索クエリによる絞り込み
//! - `state`: UI 状態（カテゴリ / クエリ / 表示件数）と状態遷移
//! - `messages`: ロケール別の表示文言
//! - `view`: 描画ノード（バックエンド非依存）
//! - `target`: 描画先の抽象
//! - `controller`: イベント処理と再描画

mod category;
mod controller;
mod filter;
mod messages;
mod state;
mod target;
mod view;

pub use category::{Category, CategoryCount, CategoryIndex, ALL_VALUE};
pub use controller::{update, CatalogController, Event, RenderEffect};
pub use filter::{filter_courses, normalize};
pub use messages::{Locale, Messages};
pub use state::{CatalogState, Pagination};
pub use target::{AttachmentPoint, Attachments, MemoryTarget, RenderTarget};
pub use view::{
    card_view, catalog_view, courses_view, tabs_view, CardNode, CardSlot, CardTemplate,
    CatalogView, CoursesView, GridNode, ImageNode, LoadMoreNode, TabNode, ViewContext,
};
