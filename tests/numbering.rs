use chainsql::{Bind, Query, QueryPool, Sqlite};
use proptest::prelude::*;

/// Splits `sql` into the ordinals that follow each `prefix`.
fn ordinals(sql: &str, prefix: char) -> Vec<usize> {
    sql.split(prefix)
        .skip(1)
        .map(|rest| {
            let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        })
        .collect()
}

proptest! {
    #[test]
    fn markers_are_numbered_in_order(count in 0usize..300) {
        let mut query = Query::new();
        for i in 0..count {
            query.push(" col_").push(&i.to_string()).push(" = ").push_bind(i as i64);
        }
        let (sql, args) = query.build();
        prop_assert_eq!(args.len(), count);
        prop_assert_eq!(ordinals(&sql, '$'), (1..=count).collect::<Vec<_>>());
        prop_assert!(!sql.contains('?'));
    }

    #[test]
    fn splice_numbers_continuously(outer in 0usize..40, inner in 0usize..40) {
        let mut child = Query::new();
        for i in 0..inner {
            child.push(",").push_bind(format!("inner-{i}"));
        }
        let mut parent = Query::new();
        for i in 0..outer {
            parent.push(",").push_bind(i as i32);
        }
        parent.push_query(child);
        let (sql, args) = parent.build();
        prop_assert_eq!(ordinals(&sql, '$'), (1..=outer + inner).collect::<Vec<_>>());
        prop_assert_eq!(args.len(), outer + inner);
        if inner > 0 {
            prop_assert_eq!(&args[outer], &Bind::Text("inner-0".into()));
        }
    }

    #[test]
    fn text_without_markers_is_untouched(text in "[^?]{0,200}") {
        let (sql, args) = chainsql::raw(&text, ()).build();
        prop_assert_eq!(sql, text);
        prop_assert!(args.is_empty());
    }

    #[test]
    fn sqlite_numbering_matches_postgres(count in 1usize..50) {
        let make = || {
            let mut query = Query::new();
            for i in 0..count {
                query.push(" a = ").push_bind(i as i64);
            }
            query
        };
        let (postgres, _) = make().build();
        let (sqlite, _) = make().build_for::<Sqlite>();
        prop_assert_eq!(postgres.replace('$', "?"), sqlite);
    }

    #[test]
    fn pooled_accumulators_start_clean(rounds in proptest::collection::vec(0usize..20, 1..20)) {
        let pool = QueryPool::new();
        for binds in rounds {
            let mut query = pool.acquire();
            prop_assert!(query.is_empty());
            for i in 0..binds {
                query.push("?").bind_args(i as i32);
            }
            let (sql, args) = query.build_raw();
            prop_assert_eq!(sql.len(), binds);
            prop_assert_eq!(args.len(), binds);
        }
    }
}
