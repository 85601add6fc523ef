use axum::http::HeaderMap;

use crate::api::error::ApiError;

const PUBLIC_PATHS: [&str; 2] = ["/", "/health"];

pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Extract and validate Bearer token from Authorization header
pub fn validate_auth(headers: &HeaderMap, secret_key: &str) -> Result<(), ApiError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing authorization header"))?;

    // Expected format: "Bearer <token>"
    let parts: Vec<&str> = auth_header.split_whitespace().collect();
    if parts.len() != 2 || parts[0] != "Bearer" {
        return Err(ApiError::unauthorized(
            "Invalid authorization header format. Expected: Bearer <token>",
        ));
    }

    if parts[1] != secret_key {
        return Err(ApiError::unauthorized("Invalid authentication token"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_token() {
        assert!(validate_auth(&headers_with("Bearer s3cret"), "s3cret").is_ok());
    }

    #[test]
    fn test_rejections() {
        assert!(validate_auth(&HeaderMap::new(), "s3cret").is_err());
        assert!(validate_auth(&headers_with("Basic s3cret"), "s3cret").is_err());
        assert!(validate_auth(&headers_with("Bearer wrong"), "s3cret").is_err());
    }

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/health"));
        assert!(is_public_path("/"));
        assert!(!is_public_path("/api/expenses/1"));
    }
}
