use super::*;
use proptest::prelude::*;

/// 状態遷移の操作
#[derive(Debug, Clone)]
enum Op {
    Category(Option<String>),
    Query(String),
    LoadMore,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        prop::option::of("Dev|Design").prop_map(Op::Category),
        "[a-z]{0,3}".prop_map(Op::Query),
        Just(Op::LoadMore),
    ]
}

proptest! {
    /// 表示件数は常にページサイズ以上で、遷移ごとの変化は規則どおり
    #[test]
    fn prop_visible_follows_transition_rules(
        page_size in 1usize..10,
        step in 1usize..10,
        ops in prop::collection::vec(op_strategy(), 0..30),
    ) {
        let mut state = CatalogState::new(Pagination::new(page_size, step));
        for op in ops {
            let before = state.visible();
            match op {
                Op::Category(name) => {
                    let category = name.map_or(Category::All, Category::Named);
                    if state.select_category(category) {
                        prop_assert_eq!(state.visible(), page_size);
                    } else {
                        prop_assert_eq!(state.visible(), before);
                    }
                }
                Op::Query(query) => {
                    state.set_query(query);
                    prop_assert_eq!(state.visible(), page_size);
                }
                Op::LoadMore => {
                    state.load_more();
                    prop_assert_eq!(state.visible(), before + step);
                }
            }
            prop_assert!(state.visible() >= page_size);
        }
    }
}
