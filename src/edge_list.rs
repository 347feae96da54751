//! Edge list parsing
//!
//! The tool consumes plain-text edge lists: one directed edge per line,
//! written as `source -> target` (a bare whitespace-separated pair is also
//! accepted). Blank lines and `#` comments are skipped. Parse failures are
//! reported as miette diagnostics pointing at the offending line.

use std::path::PathBuf;

use miette::NamedSource;

use crate::error::{EdgeParseError, UntangleError};
use crate::graph::EdgePair;

/// Parse one edge list, reporting the first malformed line
pub fn parse_edge_list(name: &str, content: &str) -> Result<Vec<EdgePair>, UntangleError> {
    let mut pairs = Vec::new();
    let mut offset = 0usize;

    for line in content.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            match parse_line(trimmed) {
                Some(pair) => pairs.push(pair),
                None => {
                    let start = offset + (line.len() - line.trim_start().len());
                    return Err(UntangleError::EdgeParseError(Box::new(EdgeParseError {
                        file: name.to_string(),
                        source_code: NamedSource::new(name, content.to_string()),
                        span: Some((start, trimmed.len()).into()),
                    })));
                }
            }
        }
        // +1 for the newline consumed by lines()
        offset += line.len() + 1;
    }

    Ok(pairs)
}

/// Read and parse every input file, or stdin when no files are given
pub fn load_edge_lists(paths: &[PathBuf]) -> Result<Vec<EdgePair>, UntangleError> {
    if paths.is_empty() {
        let content = std::io::read_to_string(std::io::stdin())?;
        return parse_edge_list("<stdin>", &content);
    }

    let mut pairs = Vec::new();
    for path in paths {
        let content =
            std::fs::read_to_string(path).map_err(|source| UntangleError::FileReadError {
                path: path.clone(),
                source,
            })?;
        pairs.extend(parse_edge_list(&path.display().to_string(), &content)?);
    }
    Ok(pairs)
}

fn parse_line(line: &str) -> Option<EdgePair> {
    if let Some((source, target)) = line.split_once("->") {
        let source = source.trim();
        let target = target.trim();
        if source.is_empty()
            || target.is_empty()
            || source.chars().any(char::is_whitespace)
            || target.chars().any(char::is_whitespace)
        {
            return None;
        }
        return Some(EdgePair::new(source, target));
    }

    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(source), Some(target), None) => Some(EdgePair::new(source, target)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_arrow_form() {
        let pairs = parse_edge_list("test", "a -> b\nb -> c\n").unwrap();
        assert_eq!(pairs, vec![EdgePair::new("a", "b"), EdgePair::new("b", "c")]);
    }

    #[test]
    fn test_parse_bare_pair_form() {
        let pairs = parse_edge_list("test", "a b\n").unwrap();
        assert_eq!(pairs, vec![EdgePair::new("a", "b")]);
    }

    #[test]
    fn test_parse_tight_arrow() {
        let pairs = parse_edge_list("test", "core.api->core.impl\n").unwrap();
        assert_eq!(pairs, vec![EdgePair::new("core.api", "core.impl")]);
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let content = "# dependency pairs\n\na -> b\n  # indented comment\nb -> c\n";
        let pairs = parse_edge_list("test", content).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_self_loop_parses() {
        // rejection of self-loops is the graph's job, not the parser's
        let pairs = parse_edge_list("test", "a -> a\n").unwrap();
        assert_eq!(pairs, vec![EdgePair::new("a", "a")]);
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let err = parse_edge_list("test", "a -> b\njust-one-token\n").unwrap_err();
        match err {
            UntangleError::EdgeParseError(parse) => {
                assert_eq!(parse.file, "test");
                assert!(parse.span.is_some());
            }
            other => panic!("expected EdgeParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_too_many_tokens_is_an_error() {
        assert!(parse_edge_list("test", "a b c\n").is_err());
    }

    #[test]
    fn test_missing_target_is_an_error() {
        assert!(parse_edge_list("test", "a ->\n").is_err());
    }

    #[test]
    fn test_error_span_points_at_offending_line() {
        let content = "a -> b\n???\n";
        let err = parse_edge_list("test", content).unwrap_err();
        match err {
            UntangleError::EdgeParseError(parse) => {
                let span = parse.span.unwrap();
                assert_eq!(span.offset(), 7);
                assert_eq!(span.len(), 3);
            }
            other => panic!("expected EdgeParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_edge_lists(&[PathBuf::from("/definitely/not/here.txt")]).unwrap_err();
        match err {
            UntangleError::FileReadError { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.txt"));
            }
            other => panic!("expected FileReadError, got {other:?}"),
        }
    }
}
