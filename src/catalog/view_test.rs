use super::*;
use crate::catalog::{Locale, Pagination};
use crate::course::Price;

fn make_course(title: &str, category: &str, price: i64) -> Course {
    Course {
        title: Some(title.to_string()),
        category: Some(category.to_string()),
        price: Some(Price::Amount(price.into())),
        mentor: Some("Ada".to_string()),
        image: Some(format!("img/{}.png", price)),
    }
}

fn sample() -> Vec<Course> {
    vec![
        make_course("Intro to X", "Dev", 10),
        make_course("Advanced X", "Dev", 20),
        make_course("Design Basics", "Design", 15),
    ]
}

fn with_ctx<R>(f: impl FnOnce(&ViewContext<'_>) -> R) -> R {
    let template = CardTemplate::default();
    let ctx = ViewContext {
        messages: Locale::En.messages(),
        currency: "$",
        template: &template,
    };
    f(&ctx)
}

// ============================================================================
// タブ
// ============================================================================

#[test]
fn tabs_have_static_counts_and_one_active() {
    let courses = sample();
    let index = CategoryIndex::build(&courses);
    let mut state = CatalogState::new(Pagination::new(2, 2));
    state.set_query("zzz");

    let tabs = tabs_view(&index, &state, Locale::En.messages());
    let summary: Vec<(&str, usize, bool)> = tabs
        .iter()
        .map(|t| (t.label.as_str(), t.count, t.active))
        .collect();
    assert_eq!(
        summary,
        vec![("All", 3, true), ("Dev", 2, false), ("Design", 1, false)]
    );
}

#[test]
fn all_tab_label_is_localized_but_value_is_not() {
    let courses = sample();
    let index = CategoryIndex::build(&courses);
    let state = CatalogState::new(Pagination::new(2, 2));

    let tabs = tabs_view(&index, &state, Locale::Ru.messages());
    assert_eq!(tabs[0].label, "Все");
    assert_eq!(tabs[0].value, "All");
}

#[test]
fn active_tab_follows_selected_category() {
    let courses = sample();
    let index = CategoryIndex::build(&courses);
    let mut state = CatalogState::new(Pagination::new(2, 2));
    state.select_category(Category::Named("Design".to_string()));

    let tabs = tabs_view(&index, &state, Locale::En.messages());
    let active: Vec<&str> = tabs
        .iter()
        .filter(|t| t.active)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(active, vec!["Design"]);
}

// ============================================================================
// カード
// ============================================================================

#[test]
fn card_populates_every_slot() {
    let course = make_course("Intro to X", "Dev", 10);
    let card = with_ctx(|ctx| card_view(&course, ctx));
    assert_eq!(
        card,
        CardNode {
            image: Some(ImageNode {
                src: "img/10.png".to_string(),
                alt: Some("Intro to X".to_string()),
            }),
            tag: Some("Dev".to_string()),
            title: Some("Intro to X".to_string()),
            price: Some("$10".to_string()),
            author: Some("by Ada".to_string()),
        }
    );
}

#[test]
fn card_skips_missing_course_fields() {
    let course = Course {
        title: Some("Bare".to_string()),
        ..Course::default()
    };
    let card = with_ctx(|ctx| card_view(&course, ctx));
    assert_eq!(card.title.as_deref(), Some("Bare"));
    assert!(card.image.is_none());
    assert!(card.tag.is_none());
    assert!(card.price.is_none());
    assert!(card.author.is_none());
}

#[test]
fn card_skips_slots_missing_from_template() {
    let course = make_course("Intro to X", "Dev", 10);
    let template = CardTemplate::with_slots([CardSlot::Title, CardSlot::Price]);
    let ctx = ViewContext {
        messages: Locale::En.messages(),
        currency: "$",
        template: &template,
    };
    let card = card_view(&course, &ctx);
    assert_eq!(card.title.as_deref(), Some("Intro to X"));
    assert_eq!(card.price.as_deref(), Some("$10"));
    assert!(card.image.is_none());
    assert!(card.tag.is_none());
    assert!(card.author.is_none());
}

#[test]
fn card_uses_locale_and_currency() {
    let course = make_course("Intro to X", "Dev", 990);
    let template = CardTemplate::default();
    let ctx = ViewContext {
        messages: Locale::Ru.messages(),
        currency: "₽",
        template: &template,
    };
    let card = card_view(&course, &ctx);
    assert_eq!(card.price.as_deref(), Some("₽990"));
    assert_eq!(card.author.as_deref(), Some("автор Ada"));
}

// ============================================================================
// グリッド / もっと見る
// ============================================================================

#[test]
fn initial_view_shows_page_and_load_more() {
    let courses = sample();
    let state = CatalogState::new(Pagination::new(2, 2));
    let view = with_ctx(|ctx| courses_view(&courses, &state, ctx));
    assert_eq!(view.card_count(), 2);
    assert_eq!(view.total, 3);
    assert!(view.load_more.shown);
    assert!(view.load_more.enabled);
}

#[test]
fn load_more_hidden_when_everything_fits() {
    let courses = sample();
    let mut state = CatalogState::new(Pagination::new(2, 2));
    state.select_category(Category::Named("Design".to_string()));
    let view = with_ctx(|ctx| courses_view(&courses, &state, ctx));
    assert_eq!(view.card_count(), 1);
    assert!(!view.load_more.shown);
    assert!(!view.load_more.enabled);
}

#[test]
fn no_match_renders_empty_state() {
    let courses = sample();
    let mut state = CatalogState::new(Pagination::new(2, 2));
    state.set_query("zzz");
    let view = with_ctx(|ctx| courses_view(&courses, &state, ctx));
    assert_eq!(
        view.grid,
        GridNode::Empty {
            message: Locale::En.messages().empty.to_string()
        }
    );
    assert!(!view.load_more.shown);
    assert!(!view.load_more.enabled);
}

#[test]
fn card_count_never_exceeds_total() {
    let courses = sample();
    let mut state = CatalogState::new(Pagination::new(2, 2));
    state.load_more();
    state.load_more();
    let view = with_ctx(|ctx| courses_view(&courses, &state, ctx));
    assert_eq!(view.card_count(), 3);
    assert!(!view.load_more.shown);
}

#[test]
fn rendering_twice_is_idempotent() {
    let courses = sample();
    let index = CategoryIndex::build(&courses);
    let state = CatalogState::new(Pagination::new(2, 2));
    let first = with_ctx(|ctx| catalog_view(&courses, &index, &state, ctx));
    let second = with_ctx(|ctx| catalog_view(&courses, &index, &state, ctx));
    assert_eq!(first, second);
}

#[test]
fn catalog_view_serializes_flat() {
    let courses = sample();
    let index = CategoryIndex::build(&courses);
    let mut state = CatalogState::new(Pagination::new(2, 2));
    state.set_query("zzz");
    let view = with_ctx(|ctx| catalog_view(&courses, &index, &state, ctx));
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["grid"]["kind"], "empty");
    assert_eq!(json["load_more"]["shown"], false);
    assert_eq!(json["total"], 0);
    assert_eq!(json["tabs"][0]["value"], "All");
}
