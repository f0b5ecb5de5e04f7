// SPDX-License-Identifier: MPL-2.0
//! Loose email shape check: something, `@`, something, `.`, something.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email regex should compile"));

/// True when `value` contains an address-shaped run of non-space text.
#[must_use]
pub fn is_valid(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid("team.akkani@gmail.com"));
        assert!(is_valid("a@b.c"));
        assert!(is_valid("  padded@example.org  "));
    }

    #[test]
    fn rejects_non_addresses() {
        assert!(!is_valid(""));
        assert!(!is_valid("plainaddress"));
        assert!(!is_valid("missing-dot@domain"));
        assert!(!is_valid("@example.com"));
        assert!(!is_valid("a @b.c"));
    }
}
