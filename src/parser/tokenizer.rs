//! Split the keys part of a log line into key tokens.
//!
//! A token is either a bracketed name such as `<enter>` or `<f12>` (a `<`,
//! any number of letters, digits or underscores, then `>`), or a single
//! character. Text that looks like a bracket but isn't one, e.g. `<a b>` or a
//! lone `<`, falls back to one token per character.

use regex::{Matches, Regex};
use std::sync::LazyLock;

/// Bracketed name first, any single character otherwise
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<[\p{L}\p{N}_]*>|.").expect("token pattern is valid")
});

/// Iterator over the tokens of a keys string
///
/// Tokens borrow from the input, so tokenizing allocates nothing.
#[derive(Debug)]
pub struct Tokens<'a> {
    matches: Matches<'static, 'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| m.as_str())
    }
}

/// Tokenize a keys string
pub fn tokenize(keys: &str) -> Tokens<'_> {
    Tokens {
        matches: TOKEN_PATTERN.find_iter(keys),
    }
}
