/// Authorization scheme for access tokens.
pub const BEARER_SCHEME: &str = "Bearer";

/// Extract the token from an `Authorization` header value of the form
/// `Bearer <token>`.
///
/// The scheme is matched case-insensitively. Returns `None` for any other
/// scheme, a missing token, or a token containing whitespace.
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }

    let token = token.trim();
    if token.is_empty() || token.contains(char::is_whitespace) {
        return None;
    }

    Some(token)
}
