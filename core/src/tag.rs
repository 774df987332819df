#![deny(missing_docs)]

//! # Tag Rewriting
//!
//! Pure text transformation for Go struct tags. [`rewrite_tag`] takes the
//! raw tag literal exactly as it appears in source (backticks included) and
//! returns the literal with `omitempty` appended to the `json:` entry where
//! it belongs.
//!
//! The function never fails: anything it does not recognise comes back
//! verbatim, so callers can feed it every tag they find without filtering.

/// The option appended to `json:` tag values.
pub const OMIT_OPTION: &str = "omitempty";

/// Key prefix of the tag entry we rewrite.
const JSON_KEY: &str = "json:";

/// First option that marks a field as excluded from serialization.
const IGNORE_MARKER: &str = "-";

/// Rewrites a raw Go struct tag literal, adding `omitempty` to its `json:`
/// entry.
///
/// The input is the full literal including the backtick delimiters, e.g.
/// `` `json:"name" xml:"name"` ``. Entries other than `json:` pass through
/// untouched, as do tags that already carry `omitempty` and tags whose
/// field is ignored (`json:"-"`). Literals not delimited by backticks are
/// returned verbatim.
///
/// # Examples
/// ```
/// use omitempty_core::tag::rewrite_tag;
///
/// assert_eq!(rewrite_tag(r#"`json:"name"`"#), r#"`json:"name,omitempty"`"#);
/// assert_eq!(rewrite_tag(r#"`json:"-"`"#), r#"`json:"-"`"#);
/// ```
#[must_use]
pub fn rewrite_tag(raw: &str) -> String {
    let Some(inner) = raw
        .strip_prefix('`')
        .and_then(|rest| rest.strip_suffix('`'))
    else {
        return raw.to_string();
    };

    // Split on single spaces rather than runs of whitespace so that the
    // original spacing between entries survives the round trip.
    let rewritten = inner
        .split(' ')
        .map(rewrite_token)
        .collect::<Vec<_>>()
        .join(" ");

    format!("`{}`", rewritten)
}

/// Rewrites one space-separated tag entry. Non-`json:` entries and entries
/// that need no change come back byte-for-byte.
fn rewrite_token(token: &str) -> String {
    let Some(quoted) = token.strip_prefix(JSON_KEY) else {
        return token.to_string();
    };

    let value = quoted.trim_matches('"');
    let mut options: Vec<&str> = value.split(',').collect();

    // The first option is the serialized name slot. A `-` there means the
    // field is skipped entirely, so there is nothing to omit.
    if options[0] == IGNORE_MARKER || options.contains(&OMIT_OPTION) {
        return token.to_string();
    }

    options.push(OMIT_OPTION);
    format!("{}\"{}\"", JSON_KEY, options.join(","))
}
