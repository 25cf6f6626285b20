//! HTTP API Responses Pattern
//!
//! Mapping domain failures to status codes and response bodies with
//! `match_with` at the edge of the application.

use easy_result::{Error, Result};

const BAD_REQUEST: Error = Error::from_static("Resource.InvalidId", "resource_id cannot be empty");
const NOT_FOUND: Error = Error::from_static("Resource.NotFound", "resource not found");

// Map error code to HTTP status code
fn error_to_status_code(err: &Error) -> u16 {
    match err.code() {
        "Resource.InvalidId" => 400,
        "Resource.NotFound" => 404,
        "Auth.Unauthorized" => 401,
        _ => 500,
    }
}

// API handler
fn get_resource(resource_id: &str) -> Result<String> {
    Result::success(resource_id)
        .ensure(|id| !id.is_empty(), BAD_REQUEST)
        .and_then(|id| match id {
            "readme" => Result::success(String::from("# easy-result")),
            _ => Result::failure(NOT_FOUND),
        })
}

// Convert to HTTP response
fn handle_request(resource_id: &str) -> (u16, String) {
    get_resource(resource_id).match_with(
        |body| (200, body),
        |e| {
            let status = error_to_status_code(&e);
            (status, format!("{{\"code\":\"{}\",\"message\":\"{}\"}}", e.code(), e.message()))
        },
    )
}

fn main() {
    for id in ["", "missing", "readme"] {
        let (status, body) = handle_request(id);
        println!("Status: {}, Body: {}", status, body);
    }
    // Output:
    // Status: 400, Body: {"code":"Resource.InvalidId","message":"resource_id cannot be empty"}
    // Status: 404, Body: {"code":"Resource.NotFound","message":"resource not found"}
    // Status: 200, Body: # easy-result
}
