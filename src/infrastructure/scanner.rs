//! Low-level text operations shared by the structural scanner.

use anyhow::{bail, Result};

fn closing(open: char) -> Option<char> {
    match open {
        '{' => Some('}'),
        '(' => Some(')'),
        '[' => Some(']'),
        '<' => Some('>'),
        _ => None,
    }
}

/// Split `text`, which must start with one of `{`, `(`, `[` or `<`, into
/// the content strictly between the matching pair and the remainder after
/// the closing character, with the remainder's leading whitespace trimmed.
///
/// Nesting is tracked by counting the same bracket kind only; brackets of
/// other kinds inside the block are ignored. Running out of input before
/// the pair balances is an error.
pub fn skip_to_match(text: &str) -> Result<(&str, &str)> {
    let mut chars = text.char_indices();
    let open = match chars.next() {
        Some((_, c)) => c,
        None => bail!("expected an opening bracket, found end of input"),
    };
    let close = match closing(open) {
        Some(c) => c,
        None => bail!("expected an opening bracket, found `{}`", open),
    };

    let mut depth = 1usize;
    for (i, c) in chars {
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                let inner = &text[open.len_utf8()..i];
                let rest = text[i + c.len_utf8()..].trim_start();
                return Ok((inner, rest));
            }
        }
    }
    bail!("unbalanced `{}`: no matching `{}` before end of input", open, close)
}

/// Consume a leading `[A-Za-z0-9_]*` identifier, which may be empty.
pub fn take_identifier(text: &str) -> (&str, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(text.len());
    (&text[..end], &text[end..])
}

/// Split off the first line. The newline itself belongs to neither part.
pub fn take_line(text: &str) -> (&str, &str) {
    match text.find('\n') {
        Some(i) => (&text[..i], &text[i + 1..]),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_parens_with_nesting() {
        let (inner, rest) = skip_to_match("(a, (b, c), d) rest").unwrap();
        assert_eq!(inner, "a, (b, c), d");
        assert_eq!(rest, "rest");
    }

    #[test]
    fn test_balanced_braces() {
        let (inner, rest) = skip_to_match("{ x + 1 }\nfn next() {}").unwrap();
        assert_eq!(inner, " x + 1 ");
        assert_eq!(rest, "fn next() {}");
    }

    #[test]
    fn test_angle_brackets_ignore_other_kinds() {
        let (inner, rest) = skip_to_match("<(A, B), C> {").unwrap();
        assert_eq!(inner, "(A, B), C");
        assert_eq!(rest, "{");
    }

    #[test]
    fn test_unbalanced_is_an_error() {
        assert!(skip_to_match("(a, (b, c)").is_err());
        assert!(skip_to_match("{ never closed").is_err());
    }

    #[test]
    fn test_non_bracket_start_is_an_error() {
        assert!(skip_to_match("fn foo()").is_err());
        assert!(skip_to_match("").is_err());
    }

    #[test]
    fn test_take_identifier() {
        assert_eq!(take_identifier("get_degree(&self)"), ("get_degree", "(&self)"));
        assert_eq!(take_identifier("&str {"), ("", "&str {"));
        assert_eq!(take_identifier("node2vec_walk rest"), ("node2vec_walk", " rest"));
    }

    #[test]
    fn test_take_line() {
        assert_eq!(take_line("use foo;\nfn bar() {}"), ("use foo;", "fn bar() {}"));
        assert_eq!(take_line("last line"), ("last line", ""));
    }
}
