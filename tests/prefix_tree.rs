//! Behavioral tests for the prefix tree, run for single- and multi-character delimiters.

use param_trie::{PrefixTree, TrieError};

mod common;

use common::{arithmetic_routes, build, literal_routes, path, DELIMITERS};

fn assert_conflict(tree: &mut PrefixTree<&'static str>, pattern: &str) {
    assert_eq!(
        tree.insert(pattern, "NewValue"),
        Err(TrieError::RouteConflict {
            pattern: pattern.to_string()
        }),
        "expected {pattern:?} to conflict"
    );
}

#[test]
fn test_non_overlapping_literal_routes() {
    for d in DELIMITERS {
        let routes = literal_routes(d);
        let tree = build(d, &routes);

        let mut params = Vec::new();
        for (pattern, value) in &routes {
            assert_eq!(tree.find(pattern, &mut params), Some(value));
        }
        assert!(params.is_empty());
        assert_eq!(tree.len(), 4);
    }
}

#[test]
fn test_params_captured_in_anchor_order() {
    for d in DELIMITERS {
        let mut tree = PrefixTree::new(d).unwrap();
        tree.insert(&path(d, &["sum", "{firstAddend}", "{secondAddend}"]), "SumValue")
            .unwrap();
        tree.insert(&path(d, &["sub", "first", "second"]), "SubValue")
            .unwrap();
        tree.insert(&path(d, &["mul", "{first}", "{second}"]), "MulValue")
            .unwrap();
        tree.insert(&path(d, &["div", "first", "second"]), "DivValue")
            .unwrap();

        let subject = path(d, &["sum", "firstAddend", "42", "secondAddend", "24"]);
        let mut params = Vec::new();

        assert_eq!(tree.find(&subject, &mut params), Some(&"SumValue"));
        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name(), "firstAddend");
        assert_eq!(params[0].value(&subject), Some("42"));
        assert_eq!(params[1].name(), "secondAddend");
        assert_eq!(params[1].value(&subject), Some("24"));
    }
}

#[test]
fn test_duplicate_literal_route_conflicts() {
    for d in DELIMITERS {
        let mut tree = build(d, &literal_routes(d));
        assert_conflict(&mut tree, &path(d, &["sum", "first", "second"]));
    }
}

#[test]
fn test_literal_route_over_param_route_conflicts() {
    for d in DELIMITERS {
        let mut tree = build(d, &arithmetic_routes(d));
        assert_conflict(&mut tree, &path(d, &["div", "first", "second"]));
    }
}

#[test]
fn test_route_prefix_conflicts() {
    for d in DELIMITERS {
        let mut tree = build(d, &arithmetic_routes(d));
        assert_conflict(&mut tree, &path(d, &["div"]));
        assert_conflict(&mut tree, &path(d, &["sum", "{first}"]));
    }
}

#[test]
fn test_duplicate_param_route_conflicts() {
    for d in DELIMITERS {
        let mut tree = build(d, &arithmetic_routes(d));
        assert_conflict(&mut tree, &path(d, &["sum", "{first}", "{second}"]));
    }
}

#[test]
fn test_conflict_leaves_existing_routes_intact() {
    for d in DELIMITERS {
        let routes = arithmetic_routes(d);
        let mut tree = build(d, &routes);
        assert_conflict(&mut tree, &path(d, &["sum", "{first}"]));

        let subject = path(d, &["sum", "first", "1", "second", "2"]);
        let mut params = Vec::new();
        assert_eq!(tree.find(&subject, &mut params), Some(&"SumValue"));
        assert_eq!(tree.len(), routes.len());
    }
}

#[test]
fn test_permuted_routes_coexist() {
    for d in DELIMITERS {
        let mut tree = PrefixTree::new(d).unwrap();
        tree.insert(&path(d, &["sum", "{first}", "{second}"]), "SumValue")
            .unwrap();
        tree.insert(&path(d, &["{first}", "sum", "{second}"]), "TestValue")
            .unwrap();

        let usual = path(d, &["sum", "first", "42", "second", "42"]);
        let permuted = path(d, &["first", "42", "sum", "second", "42"]);

        let mut params = Vec::new();
        assert_eq!(tree.find(&usual, &mut params), Some(&"SumValue"));
        assert_eq!(tree.find(&permuted, &mut params), Some(&"TestValue"));
        assert_eq!(params.len(), 4);
    }
}

#[test]
fn test_prefix_subject_is_not_found() {
    for d in DELIMITERS {
        let mut tree = PrefixTree::new(d).unwrap();
        tree.insert(&path(d, &["a", "{p}"]), "V1").unwrap();

        let mut params = Vec::new();
        assert_eq!(tree.find(&path(d, &["a"]), &mut params), None);
        assert_eq!(tree.find("", &mut params), None);
        assert_eq!(tree.find("X", &mut params), None);
        assert!(params.is_empty());
    }
}

#[test]
fn test_literal_sum_scenario() {
    let mut tree = PrefixTree::new("/").unwrap();
    tree.insert("/sum/first/second", "Sum").unwrap();
    assert_eq!(tree.find("/sum/first/second", &mut Vec::new()), Some(&"Sum"));
}

#[test]
fn test_param_offsets_scenario() {
    let mut tree = PrefixTree::new("/").unwrap();
    tree.insert("/sum/{a}/{b}", "Sum").unwrap();

    let subject = "/sum/a/42/b/24";
    let mut params = Vec::new();
    assert_eq!(tree.find(subject, &mut params), Some(&"Sum"));
    assert_eq!(params[0].name(), "a");
    assert_eq!(params[0].start_index(), subject.find("42").unwrap());
    assert_eq!(params[0].len(), 2);
    assert_eq!(params[1].name(), "b");
    assert_eq!(params[1].start_index(), subject.find("24").unwrap());
    assert_eq!(params[1].len(), 2);
}

#[test]
fn test_empty_param_value_is_captured() {
    let mut tree = PrefixTree::new("/").unwrap();
    tree.insert("/sum/{a}/{b}", "Sum").unwrap();

    let subject = "/sum/a//b/24";
    let mut params = Vec::new();
    assert_eq!(tree.find(subject, &mut params), Some(&"Sum"));
    assert!(params[0].is_empty());
    assert_eq!(params[0].value(subject), Some(""));
    assert_eq!(params[1].value(subject), Some("24"));
}

#[test]
fn test_non_ascii_segments() {
    let mut tree = PrefixTree::new("→").unwrap();
    tree.insert("→città→{nome}", "City").unwrap();

    let subject = "→città→nome→Zürich";
    let mut params = Vec::new();
    assert_eq!(tree.find(subject, &mut params), Some(&"City"));
    assert_eq!(params[0].value(subject), Some("Zürich"));
}

#[test]
fn test_param_order_independent_of_insertion_order() {
    for d in DELIMITERS {
        let routes = vec![
            (path(d, &["sum", "{a}", "{b}"]), "SumAB"),
            (path(d, &["sum", "x", "{c}"]), "SumXC"),
            (path(d, &["{a}", "sum", "{b}"]), "ASumB"),
            (path(d, &["mul", "{a}"]), "MulA"),
        ];
        let reversed: Vec<_> = routes.iter().rev().cloned().collect();
        let forward = build(d, &routes);
        let backward = build(d, &reversed);

        let subjects = [
            (path(d, &["sum", "a", "1", "b", "2"]), "SumAB", vec![("a", "1"), ("b", "2")]),
            (path(d, &["sum", "x", "c", "3"]), "SumXC", vec![("c", "3")]),
            (path(d, &["a", "4", "sum", "b", "5"]), "ASumB", vec![("a", "4"), ("b", "5")]),
            (path(d, &["mul", "a", "6"]), "MulA", vec![("a", "6")]),
        ];

        for tree in [&forward, &backward] {
            for (subject, value, expected) in &subjects {
                let mut params = Vec::new();
                assert_eq!(tree.find(subject, &mut params), Some(value));
                let captured: Vec<_> = params
                    .iter()
                    .map(|p| (p.name(), p.value(subject).unwrap()))
                    .collect();
                assert_eq!(&captured, expected, "{subject:?}");
            }
        }
    }
}
