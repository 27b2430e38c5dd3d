use crossterm::event::KeyCode;

use super::{update, Model, Msg};
use course_catalog::catalog::Category;
use course_catalog::config::CatalogConfig;
use course_catalog::course::Course;

fn make_course(title: &str, category: &str) -> Course {
    Course {
        title: Some(title.to_string()),
        category: Some(category.to_string()),
        ..Course::default()
    }
}

/// テスト用の Model（ページサイズ 2）
fn make_model() -> Model {
    let courses = vec![
        make_course("Intro to X", "Dev"),
        make_course("Advanced X", "Dev"),
        make_course("Design Basics", "Design"),
    ];
    let config = CatalogConfig {
        initial_visible: 2,
        load_more_step: 2,
        ..CatalogConfig::default()
    };
    Model::new(courses, &config).unwrap()
}

// ============================================================================
// キー → メッセージ
// ============================================================================

#[test]
fn esc_quits_when_query_is_empty() {
    let model = make_model();
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::Quit));
}

#[test]
fn esc_clears_query_first() {
    let mut model = make_model();
    update(&mut model, Msg::SearchInput('x'));
    assert_eq!(model.key_to_msg(KeyCode::Esc), Some(Msg::SearchClear));
}

#[test]
fn arrows_and_tab_switch_categories() {
    let model = make_model();
    assert_eq!(model.key_to_msg(KeyCode::Right), Some(Msg::NextTab));
    assert_eq!(model.key_to_msg(KeyCode::Tab), Some(Msg::NextTab));
    assert_eq!(model.key_to_msg(KeyCode::Left), Some(Msg::PrevTab));
    assert_eq!(model.key_to_msg(KeyCode::BackTab), Some(Msg::PrevTab));
}

#[test]
fn characters_go_to_search() {
    let model = make_model();
    assert_eq!(model.key_to_msg(KeyCode::Char('q')), Some(Msg::SearchInput('q')));
    assert_eq!(model.key_to_msg(KeyCode::Backspace), None);
}

// ============================================================================
// update
// ============================================================================

#[test]
fn next_tab_selects_following_category() {
    let mut model = make_model();
    update(&mut model, Msg::NextTab);
    assert_eq!(
        model.controller.state().category(),
        &Category::Named("Dev".to_string())
    );
    update(&mut model, Msg::PrevTab);
    assert_eq!(model.controller.state().category(), &Category::All);
}

#[test]
fn prev_tab_wraps_to_last_category() {
    let mut model = make_model();
    update(&mut model, Msg::PrevTab);
    assert_eq!(
        model.controller.state().category(),
        &Category::Named("Design".to_string())
    );
}

#[test]
fn typing_builds_query_and_backspace_removes() {
    let mut model = make_model();
    update(&mut model, Msg::SearchInput('d'));
    update(&mut model, Msg::SearchInput('e'));
    assert_eq!(model.controller.state().query(), "de");
    let shown = model.controller.target().courses().unwrap().card_count();
    assert_eq!(shown, 1);

    update(&mut model, Msg::SearchBackspace);
    assert_eq!(model.controller.state().query(), "d");
}

#[test]
fn load_more_reveals_remaining_cards() {
    let mut model = make_model();
    update(&mut model, Msg::LoadMore);
    let courses = model.controller.target().courses().unwrap();
    assert_eq!(courses.card_count(), 3);
    assert!(!courses.load_more.shown);
}

#[test]
fn search_clear_restores_full_list() {
    let mut model = make_model();
    update(&mut model, Msg::SearchInput('z'));
    update(&mut model, Msg::SearchClear);
    assert_eq!(model.controller.state().query(), "");
    assert_eq!(model.controller.target().courses().unwrap().total, 3);
}

#[test]
fn quit_sets_flag() {
    let mut model = make_model();
    update(&mut model, Msg::Quit);
    assert!(model.should_quit);
}
