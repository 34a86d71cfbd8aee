use paperbrowser::services::address_resolver::{has_scheme, resolve_address, search_query_url};
use rstest::rstest;

const SEARCH: &str = "https://www.google.com/search?q=";

#[rstest]
#[case("https://x.com",            "https://x.com")]
#[case("http://example.org/a?b=c", "http://example.org/a?b=c")]
#[case("file:///tmp/a.html",       "file:///tmp/a.html")]
#[case("about:blank",              "about:blank")]
#[case("  https://x.com  ",        "https://x.com")]
fn test_scheme_input_is_verbatim(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolve_address(input, SEARCH), expected);
}

#[rstest]
#[case("example.com",      "http://example.com")]
#[case("www.rust-lang.org", "http://www.rust-lang.org")]
#[case("192.168.0.1:8080", "http://192.168.0.1:8080")]
fn test_dotted_input_gets_http(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolve_address(input, SEARCH), expected);
}

#[rstest]
#[case("test query",   "https://www.google.com/search?q=test+query")]
#[case("rust",         "https://www.google.com/search?q=rust")]
#[case("  two   gaps ", "https://www.google.com/search?q=two+gaps")]
#[case("c++ & rust",   "https://www.google.com/search?q=c%2B%2B+%26+rust")]
#[case("a/b?c=d#e",    "https://www.google.com/search?q=a%2Fb%3Fc%3Dd%23e")]
#[case("~tilde_ok-",   "https://www.google.com/search?q=~tilde_ok-")]
#[case("",             "https://www.google.com/search?q=")]
fn test_dotless_input_is_search(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(resolve_address(input, SEARCH), expected);
}

#[test]
fn test_search_uses_configured_prefix() {
    assert_eq!(
        resolve_address("hello world", "https://search.example/?q="),
        "https://search.example/?q=hello+world"
    );
}

#[test]
fn test_search_query_url_encodes_non_ascii() {
    assert_eq!(search_query_url("café", SEARCH), format!("{}caf%C3%A9", SEARCH));
}

#[rstest]
#[case("https://x.com", true)]
#[case("HTTP://X.COM", true)]
#[case("mailto:someone@example.com", true)]
#[case("example.com", false)]
#[case("://broken", false)]
#[case("1http://x.com", false)]
#[case("a b://x", false)]
fn test_has_scheme(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(has_scheme(input), expected, "has_scheme({input:?})");
}
