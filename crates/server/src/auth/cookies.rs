use axum::http::{header, HeaderMap};
use cookie::Cookie;

/// Name of the HTTP-only cookie holding the backend bearer token.
pub const SESSION_COOKIE: &str = "token";

/// Extract the session token from the request cookies. Empty values count
/// as absent.
pub fn extract_session_token(headers: &HeaderMap) -> Option<String> {
    extract_cookie(headers, SESSION_COOKIE).filter(|token| !token.is_empty())
}

/// Parse a specific cookie value from the Cookie header, percent-decoded.
fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header_value in headers.get_all(header::COOKIE) {
        if let Ok(cookie_str) = header_value.to_str() {
            for piece in cookie_str.split(';') {
                if let Ok(c) = Cookie::parse_encoded(piece.trim().to_string()) {
                    if c.name() == name {
                        return Some(c.value().to_string());
                    }
                }
            }
        }
    }
    None
}
