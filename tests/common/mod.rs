//! Shared fixtures for integration tests.

use param_trie::PrefixTree;

/// Delimiters every behavioral test is run against.
pub const DELIMITERS: [&str; 2] = ["/", "ABC"];

/// Join `segments`, each preceded by `delimiter`.
pub fn path(delimiter: &str, segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| format!("{delimiter}{s}"))
        .collect()
}

/// Four arithmetic routes; `sum` and `div` take parameters.
pub fn arithmetic_routes(delimiter: &str) -> Vec<(String, &'static str)> {
    vec![
        (path(delimiter, &["sum", "{first}", "{second}"]), "SumValue"),
        (path(delimiter, &["sub", "first", "second"]), "SubValue"),
        (path(delimiter, &["mul", "first", "second"]), "MulValue"),
        (path(delimiter, &["div", "{first}", "{second}"]), "DivValue"),
    ]
}

/// Four arithmetic routes with literal segments only.
pub fn literal_routes(delimiter: &str) -> Vec<(String, &'static str)> {
    ["sum", "sub", "mul", "div"]
        .into_iter()
        .zip(["SumValue", "SubValue", "MulValue", "DivValue"])
        .map(|(op, value)| (path(delimiter, &[op, "first", "second"]), value))
        .collect()
}

/// Build a tree from `routes`, panicking on any insertion error.
pub fn build(delimiter: &str, routes: &[(String, &'static str)]) -> PrefixTree<&'static str> {
    let mut tree = PrefixTree::new(delimiter).unwrap();
    for (pattern, value) in routes {
        tree.insert(pattern, *value).unwrap();
    }
    tree
}
