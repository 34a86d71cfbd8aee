// PaperBrowser address resolution
// Turns whatever was typed into the address field into something an engine can load.
//
// Precedence:
//   1. input that already carries a scheme is used verbatim
//   2. input without any '.' is a search query
//   3. anything else is a bare host and gets "http://"

/// Schemes that are written without "//" after the colon.
const OPAQUE_SCHEMES: &[&str] = &["about:", "data:", "mailto:", "javascript:", "view-source:"];

/// Resolve raw address-field input against `search_url`.
///
/// Never fails: every input maps to some address.
pub fn resolve_address(input: &str, search_url: &str) -> String {
    let trimmed = input.trim();
    if has_scheme(trimmed) {
        return trimmed.to_string();
    }
    if !trimmed.contains('.') {
        return search_query_url(trimmed, search_url);
    }
    format!("http://{}", trimmed)
}

/// True when `input` begins with `<scheme>://` or with a known opaque scheme
/// such as `about:`.
pub fn has_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    if OPAQUE_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        return true;
    }
    match input.find("://") {
        Some(0) | None => false,
        Some(end) => {
            let scheme = &input[..end];
            let mut chars = scheme.chars();
            chars.next().is_some_and(|c| c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
    }
}

/// Search address for `query`: its whitespace-separated words, each
/// percent-encoded, joined with `+` and appended to `search_url`.
pub fn search_query_url(query: &str, search_url: &str) -> String {
    let words: Vec<_> = query.split_whitespace().map(urlencoding::encode).collect();
    format!("{}{}", search_url, words.join("+"))
}
