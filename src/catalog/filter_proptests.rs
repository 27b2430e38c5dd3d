use super::*;
use proptest::prelude::*;

const CATEGORIES: &[&str] = &["Dev", "Design", "Marketing"];

/// ランダムなコース（カテゴリは固定候補から選ぶ）
fn course_strategy() -> impl Strategy<Value = Course> {
    ("[a-zA-Z ]{0,16}", 0..CATEGORIES.len()).prop_map(|(title, idx)| Course {
        title: Some(title),
        category: Some(CATEGORIES[idx].to_string()),
        ..Course::default()
    })
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::All),
        (0..CATEGORIES.len()).prop_map(|idx| Category::Named(CATEGORIES[idx].to_string())),
    ]
}

proptest! {
    /// 絞り込み結果は常にカテゴリ条件とクエリ条件を満たす
    #[test]
    fn prop_results_satisfy_both_predicates(
        courses in prop::collection::vec(course_strategy(), 0..20),
        category in category_strategy(),
        query in "[a-zA-Z ]{0,4}",
    ) {
        let normalized = normalize(&query);
        for course in filter_courses(&courses, &category, &query) {
            prop_assert!(category == Category::All || course.category.as_deref() == Some(category.value()));
            prop_assert!(normalize(course.title_or_empty()).contains(&normalized));
        }
    }

    /// クエリをクリアするとカテゴリ絞り込みのみの結果に戻る
    #[test]
    fn prop_cleared_query_restores_category_set(
        courses in prop::collection::vec(course_strategy(), 0..20),
        category in category_strategy(),
        query in "[a-zA-Z ]{0,4}",
    ) {
        let _ = filter_courses(&courses, &category, &query);
        let cleared = filter_courses(&courses, &category, "");
        let expected: Vec<&Course> = courses.iter().filter(|c| category.matches(c)).collect();
        prop_assert_eq!(cleared, expected);
    }

    /// 絞り込み結果は元の一覧の部分列
    #[test]
    fn prop_results_preserve_source_order(
        courses in prop::collection::vec(course_strategy(), 0..20),
        query in "[a-z]{0,2}",
    ) {
        let result = filter_courses(&courses, &Category::All, &query);
        let mut source = courses.iter();
        for course in result {
            prop_assert!(source.any(|c| std::ptr::eq(c, course)));
        }
    }
}
