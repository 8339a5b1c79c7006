use hdesign_domain::constants::{DEFAULT_VIEW, ROOT_EVAL_NAME, SCHEME_HTTP, SCHEME_HTTPS, SCHEME_WS, SCHEME_WSS};
use hdesign_domain::schemes::ApiScheme;

#[test]
fn constants_match_scheme_strings() {
    assert_eq!(SCHEME_HTTP, "http");
    assert_eq!(SCHEME_HTTPS, "https");
    assert_eq!(SCHEME_WS, "ws");
    assert_eq!(SCHEME_WSS, "wss");
    assert_eq!(ApiScheme::Wss.to_string(), SCHEME_WSS);
}

#[test]
fn diagnostic_names() {
    assert_eq!(DEFAULT_VIEW, "default");
    assert_eq!(ROOT_EVAL_NAME, "API HTTP");
}
