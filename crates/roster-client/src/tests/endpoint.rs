use crate::{ClientError, Endpoint};

#[test]
fn test_url_appends_collection_to_bare_host() {
    let endpoint = Endpoint::new("http://localhost:8000").unwrap();
    let url = endpoint.url(&["users"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/users");
}

#[test]
fn test_url_trailing_slash_trimmed() {
    let endpoint = Endpoint::new("http://localhost:8000/").unwrap();
    let url = endpoint.url(&["users", "1"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/users/1");
}

#[test]
fn test_url_keeps_path_prefix() {
    let endpoint = Endpoint::new("https://api.example.com/v1/").unwrap();
    let url = endpoint.url(&["users"]).unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/v1/users");
}

#[test]
fn test_url_percent_encodes_segments() {
    let endpoint = Endpoint::new("http://localhost:8000").unwrap();
    let url = endpoint.url(&["users", "a b/c"]).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/users/a%20b%2Fc");
}

#[test]
fn test_invalid_base_url_rejected() {
    let result = Endpoint::new("not a url");
    assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
}

#[test]
fn test_non_base_url_rejected() {
    let result = Endpoint::new("mailto:someone@example.com");
    assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
}
