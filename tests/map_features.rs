//! Tests for the map feature

#[cfg(feature = "map")]
mod map_tests {
    use std::collections::{BTreeMap, HashMap};
    use sugars_ext::{MapExt, SugarError};

    fn users() -> HashMap<i32, String> {
        HashMap::from([
            (1, "Alice".to_string()),
            (2, "Bob".to_string()),
            (3, "Charlie".to_string()),
        ])
    }

    #[test]
    fn test_map_where_even_keys() {
        let even = users().where_entries(|k, _| k % 2 == 0);
        assert_eq!(even, HashMap::from([(2, "Bob".to_string())]));
    }

    #[test]
    fn test_map_first_where_hard_and_soft_failure() {
        let users = users();
        assert_eq!(users.first_where_or_none(|_, v| v == "Dave"), None);
        assert_eq!(users.first_where(|_, v| v == "Dave"), Err(SugarError::NoMatchingElement));
        assert_eq!(users.first_key_where(|_, v| v == "Bob"), Ok(&2));
        assert_eq!(users.first_value_where(|k, _| *k == 3).map(String::as_str), Ok("Charlie"));
    }

    #[test]
    fn test_map_transformations_produce_new_maps() {
        let users = users();
        let initials: BTreeMap<i32, char> =
            users.map_values(|name| name.chars().next().unwrap_or('?'));
        assert_eq!(initials, BTreeMap::from([(1, 'A'), (2, 'B'), (3, 'C')]));

        let shifted: BTreeMap<i32, String> = users.map_keys(|k| k * 10);
        assert_eq!(shifted.keys().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(users.len(), 3);

        let mut rows = users.map_to_vec(|k, v| format!("{k}:{v}"));
        rows.sort();
        assert_eq!(rows, vec!["1:Alice", "2:Bob", "3:Charlie"]);
    }
}
