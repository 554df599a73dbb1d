use std::collections::HashMap;

use form_data::multi_value::MultiValueMap;
use form_data::FormData;

#[test]
fn append_preserves_submission_order() {
    let mut map = MultiValueMap::new();
    map.append("tags", "a");
    map.append("tags", "b");
    map.append("tags", "c");

    assert_eq!(
        map.get_all("tags"),
        Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
    );
}

#[test]
fn from_pairs_keeps_order_per_name() {
    let map = MultiValueMap::from_pairs(vec![
        ("tags", "a"),
        ("other", "x"),
        ("tags", "b"),
        ("other", "y"),
    ]);

    assert_eq!(
        map.get_all("tags"),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(
        map.get_all("other"),
        Some(&["x".to_string(), "y".to_string()][..])
    );
}

#[test]
fn get_returns_last_value() {
    let map = MultiValueMap::from_pairs(vec![("tags", "a"), ("tags", "b")]);
    assert_eq!(map.get("tags"), Some("b"));
}

#[test]
fn missing_name() {
    let map = MultiValueMap::new();
    assert_eq!(map.get_all("tags"), None);
    assert_eq!(map.get("tags"), None);
    assert!(!map.contains("tags"));
}

#[test]
fn insert_replaces_values() {
    let mut map = MultiValueMap::new();
    map.append("tags", "a");
    map.insert("tags", vec!["b".to_string()]);
    assert_eq!(map.get_all("tags"), Some(&["b".to_string()][..]));
}

#[test]
fn single_value_source_has_no_multi_value_lookup() {
    let mut values = HashMap::new();
    values.insert("tags".to_string(), "a".to_string());
    let data = FormData::SingleValue(values);

    assert_eq!(data.get_all("tags"), None);
    assert_eq!(data.get("tags"), Some("a"));
    assert!(data.contains("tags"));
}

#[test]
fn multi_value_source_answers_both_lookups() {
    let data = FormData::MultiValue(MultiValueMap::from_pairs(vec![("tags", "a"), ("tags", "b")]));

    assert_eq!(
        data.get_all("tags"),
        Some(&["a".to_string(), "b".to_string()][..])
    );
    assert_eq!(data.get("tags"), Some("b"));
}
