use super::ApiError;
use super::NETWORK_ERROR_MESSAGE;

#[test]
fn it_prefers_validation_messages() {
    let err = ApiError::from_response(
        422,
        r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address"}]}"#,
    );
    assert_eq!(err.message, "value is not a valid email address");
    assert_eq!(err.status, Some(422));
}

#[test]
fn it_uses_string_details() {
    let err = ApiError::from_response(401, r#"{"detail": "Invalid credentials"}"#);
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(err.is_unauthorized());
}

#[test]
fn it_falls_back_to_the_status_code() {
    let err = ApiError::from_response(502, "<html>Bad gateway</html>");
    assert_eq!(err.message, "Server error: 502");

    let err = ApiError::from_response(500, r#"{"detail": []}"#);
    assert_eq!(err.message, "Server error: 500");
}

#[test]
fn it_reports_network_failures_without_status() {
    let err = ApiError::network();
    assert_eq!(err.message, NETWORK_ERROR_MESSAGE);
    assert_eq!(err.status, None);
    assert!(!err.is_unauthorized());
}
