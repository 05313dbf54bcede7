// Test Assertion Helpers
//
// Common assertions for HTTP responses in integration tests.

use actix_web::http::StatusCode;
use awc::ClientResponse;
use serde_json::Value;

fn assert_status<S>(response: &ClientResponse<S>, expected: StatusCode) {
    let status = response.status();
    assert_eq!(
        status,
        expected,
        "Expected {} {}, got {} {}",
        expected.as_u16(),
        expected.canonical_reason().unwrap_or("Unknown"),
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert HTTP response is 200 OK
pub fn assert_ok<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::OK);
}

/// Assert HTTP response is 201 Created
pub fn assert_created<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::CREATED);
}

/// Assert HTTP response is 204 No Content
pub fn assert_no_content<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::NO_CONTENT);
}

/// Assert HTTP response is 400 Bad Request
pub fn assert_bad_request<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::BAD_REQUEST);
}

/// Assert HTTP response is 404 Not Found
pub fn assert_not_found<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::NOT_FOUND);
}

/// Assert HTTP response is 409 Conflict
pub fn assert_conflict<S>(response: &ClientResponse<S>) {
    assert_status(response, StatusCode::CONFLICT);
}

/// Assert response body JSON field has expected value
///
/// # Example
/// ```
/// # use serde_json::json;
/// let body = json!({"firstName": "Francisco"});
/// assert_json_field_eq(&body, "firstName", "Francisco");
/// ```
pub fn assert_json_field_eq<T>(body: &Value, field: &str, expected: T)
where
    T: serde::Serialize + std::fmt::Debug,
{
    let actual = body
        .get(field)
        .unwrap_or_else(|| panic!("Field '{}' not found in response: {}", field, body));

    let expected_value = serde_json::to_value(expected).unwrap();

    assert_eq!(
        actual, &expected_value,
        "Field '{}' value mismatch. Expected {:?}, got {:?}",
        field, expected_value, actual
    );
}

/// Assert the body follows the error envelope and carries `code`
pub fn assert_error_body(body: &Value, code: u16) {
    let error = body
        .get("error")
        .unwrap_or_else(|| panic!("Expected error envelope, got: {}", body));
    assert_eq!(error["code"], code, "Error code mismatch in {}", body);
    assert!(error["message"].is_string(), "Missing error message in {}", body);
    assert!(error["timestamp"].is_string(), "Missing timestamp in {}", body);
}
