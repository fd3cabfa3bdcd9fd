// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Canonical kebab-case form for icon names.

/// Normalize an icon name to its canonical lowercase, hyphen-separated form.
///
/// Glyph sources disagree on casing (PascalCase, camelCase, digit suffixes);
/// stored values and catalog lookups both go through this function so the two
/// always compare equal.
///
/// # Boundaries that receive a hyphen
/// - an acronym run followed by a capitalized word ("XMLHttp" → "XML-Http")
/// - lowercase to uppercase ("iconName" → "icon-Name")
/// - letter to digit and digit to letter ("icon1" → "icon-1")
///
/// Everything else (existing hyphens included) passes through untouched, so
/// already-canonical input is returned unchanged and the function is
/// idempotent.
pub fn to_kebab_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 4);

    for (idx, &ch) in chars.iter().enumerate() {
        if idx > 0 {
            let prev = chars[idx - 1];
            let next_is_lower = chars.get(idx + 1).is_some_and(|c| c.is_ascii_lowercase());

            let acronym_end =
                prev.is_ascii_uppercase() && ch.is_ascii_uppercase() && next_is_lower;
            let camel = prev.is_ascii_lowercase() && ch.is_ascii_uppercase();
            let letter_digit = prev.is_ascii_alphabetic() && ch.is_ascii_digit();
            let digit_letter = prev.is_ascii_digit() && ch.is_ascii_alphabetic();

            if acronym_end || camel || letter_digit || digit_letter {
                out.push('-');
            }
        }
        out.push(ch.to_ascii_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::to_kebab_case;

    // Acronym runs split before their last capital, not inside it.
    #[test]
    fn to_kebab_case_splits_acronym_runs() {
        assert_eq!(to_kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(to_kebab_case("HTMLParser"), "html-parser");
    }

    // Plain camel and Pascal case get a hyphen at each case boundary.
    #[test]
    fn to_kebab_case_splits_camel_and_pascal_case() {
        assert_eq!(to_kebab_case("ArrowRight"), "arrow-right");
        assert_eq!(to_kebab_case("iconName"), "icon-name");
    }

    // Digits separate from letters on both sides.
    #[test]
    fn to_kebab_case_separates_digits() {
        assert_eq!(to_kebab_case("icon1"), "icon-1");
        assert_eq!(to_kebab_case("Grid3x3"), "grid-3-x-3");
    }

    // Already-canonical names must come back byte-for-byte identical.
    #[test]
    fn to_kebab_case_leaves_canonical_names_unchanged() {
        assert_eq!(to_kebab_case("arrow-right"), "arrow-right");
        assert_eq!(to_kebab_case("icon-1"), "icon-1");
    }

    // Running the normalization twice never differs from running it once.
    #[test]
    fn to_kebab_case_is_idempotent() {
        for name in ["XMLHttpRequest", "icon1", "PiggyBank", "already-kebab", ""] {
            let once = to_kebab_case(name);
            assert_eq!(to_kebab_case(&once), once);
        }
    }

    // Empty input stays empty instead of producing stray separators.
    #[test]
    fn to_kebab_case_handles_empty_input() {
        assert_eq!(to_kebab_case(""), "");
    }
}
