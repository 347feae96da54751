//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Render a cycle path as a closed walk, repeating the starting label
///
/// `["A", "B", "C"]` becomes `"A -> B -> C -> A"`. An empty path renders as
/// an empty string.
pub fn closed_walk(path: &[String]) -> String {
    match path.first() {
        Some(start) => format!("{} -> {start}", path.join(" -> ")),
        None => String::new(),
    }
}
