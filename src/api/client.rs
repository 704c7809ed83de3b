//! HTTP API Client
//!
//! One transport path for talking to the expense-approval REST API, plus a
//! thin named function per backend call. The transport attaches the bearer
//! credential when one is stored, serializes JSON bodies, passes multipart
//! form data through untouched, and normalizes error payloads into a single
//! flattened message.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    ActRequest, Approval, DashboardStats, Decision, Expense, LoginRequest, NewExpense, NewUser,
    Notification, ReceiptUpload, SignupRequest, TokenResponse, User, Workflow,
};
use crate::state::session;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

/// Storage key for the API base override.
const API_BASE_KEY: &str = "expensio_api_url";

/// Message used when an error payload is empty or unparsable.
const GENERIC_API_ERROR: &str = "An API error occurred.";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

fn endpoint(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

/// Attach the bearer credential when one is stored.
fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match session::stored_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Normalize a response into its JSON payload, `None` for no-content.
///
/// A non-2xx response is parsed as JSON first so its payload can be
/// flattened into the error message; an unparsable error body falls back to
/// a generic message.
async fn read_response(response: Response) -> Result<Option<Value>, ApiError> {
    if response.status() == 204 {
        return Ok(None);
    }
    let ok = response.ok();
    match response.json::<Value>().await {
        Ok(payload) if ok => Ok(Some(payload)),
        Ok(payload) => Err(ApiError::Api(flatten_error_message(&payload))),
        Err(_) if !ok => Err(ApiError::Api(GENERIC_API_ERROR.to_string())),
        Err(err) => Err(ApiError::Decode(err.to_string())),
    }
}

async fn send(request: Request) -> Result<Option<Value>, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn get_value(path: &str) -> Result<Option<Value>, ApiError> {
    let response = authorized(Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<Option<Value>, ApiError> {
    let request = authorized(Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| ApiError::Build(e.to_string()))?;
    send(request).await
}

async fn post_empty(path: &str) -> Result<Option<Value>, ApiError> {
    let response = authorized(Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(response).await
}

/// Multipart bodies pass through untouched; the runtime sets the boundary
/// header, so none is attached here.
async fn post_form(path: &str, form: web_sys::FormData) -> Result<Option<Value>, ApiError> {
    let request = authorized(Request::post(&endpoint(path)))
        .body(form)
        .map_err(|e| ApiError::Build(e.to_string()))?;
    send(request).await
}

fn decode<T: DeserializeOwned>(payload: Option<Value>) -> Result<T, ApiError> {
    serde_json::from_value(payload.unwrap_or(Value::Null))
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Space-join every value of a backend error payload, flattening arrays one
/// level, in payload order.
fn flatten_error_message(payload: &Value) -> String {
    let mut parts: Vec<String> = Vec::new();
    match payload {
        Value::Object(map) => {
            for value in map.values() {
                push_fragments(value, &mut parts);
            }
        }
        Value::Array(items) => {
            for value in items {
                push_fragments(value, &mut parts);
            }
        }
        other => push_fragments(other, &mut parts),
    }
    let message = parts.join(" ");
    if message.is_empty() {
        GENERIC_API_ERROR.to_string()
    } else {
        message
    }
}

fn push_fragments(value: &Value, parts: &mut Vec<String>) {
    match value {
        Value::Array(items) => {
            for item in items {
                parts.push(fragment(item));
            }
        }
        other => parts.push(fragment(other)),
    }
}

fn fragment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============ API Functions ============

/// Exchange credentials for a bearer token.
pub async fn login(username: &str, password: &str) -> Result<TokenResponse, ApiError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    decode(post_json("/token/", &body).await?)
}

/// Create a company account with its first admin user.
pub async fn signup(request: &SignupRequest) -> Result<(), ApiError> {
    post_json("/signup/", request).await?;
    Ok(())
}

/// Fetch the expenses visible to the caller.
pub async fn fetch_expenses() -> Result<Vec<Expense>, ApiError> {
    decode(get_value("/expenses/").await?)
}

/// Submit a new expense.
pub async fn create_expense(request: &NewExpense) -> Result<Expense, ApiError> {
    decode(post_json("/expenses/", request).await?)
}

/// Attach a receipt image to an expense (multipart).
pub async fn upload_receipt(
    expense_id: u64,
    form: web_sys::FormData,
) -> Result<ReceiptUpload, ApiError> {
    decode(post_form(&format!("/expenses/{}/upload-receipt/", expense_id), form).await?)
}

/// Fetch the caller's approval inbox.
pub async fn fetch_approvals() -> Result<Vec<Approval>, ApiError> {
    decode(get_value("/approvals/").await?)
}

/// Record a decision on one approval; the backend answers with the updated
/// expense.
pub async fn act_on_approval(
    approval_id: u64,
    decision: Decision,
    comment: &str,
) -> Result<Expense, ApiError> {
    let body = ActRequest {
        decision,
        comment: comment.to_string(),
    };
    decode(post_json(&format!("/approvals/{}/act/", approval_id), &body).await?)
}

/// Fetch the company's users.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    decode(get_value("/users/").await?)
}

/// Create a user in the caller's company.
pub async fn create_user(request: &NewUser) -> Result<User, ApiError> {
    decode(post_json("/users/", request).await?)
}

/// Fetch the workflows available for new expenses.
pub async fn fetch_workflows() -> Result<Vec<Workflow>, ApiError> {
    decode(get_value("/workflows/").await?)
}

/// Fetch the caller's notification feed.
pub async fn fetch_notifications() -> Result<Vec<Notification>, ApiError> {
    decode(get_value("/notifications/").await?)
}

/// Mark every notification read. The backend answers with no content.
pub async fn mark_notifications_read() -> Result<(), ApiError> {
    post_empty("/notifications/mark_all_as_read/").await?;
    Ok(())
}

/// Fetch aggregate counts for the dashboard landing page.
pub async fn fetch_dashboard_stats() -> Result<DashboardStats, ApiError> {
    decode(get_value("/dashboard/stats/").await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_field_errors_in_payload_order() {
        let payload = json!({
            "amount": ["must be positive"],
            "currency": ["required"]
        });
        assert_eq!(flatten_error_message(&payload), "must be positive required");
    }

    #[test]
    fn flattens_mixed_scalars_and_arrays() {
        let payload = json!({
            "detail": "Not authorized.",
            "fields": ["one", "two"]
        });
        assert_eq!(flatten_error_message(&payload), "Not authorized. one two");
    }

    #[test]
    fn flattens_a_bare_array_payload() {
        let payload = json!(["first problem", "second problem"]);
        assert_eq!(flatten_error_message(&payload), "first problem second problem");
    }

    #[test]
    fn stringifies_non_string_values() {
        let payload = json!({"retry_after": 30});
        assert_eq!(flatten_error_message(&payload), "30");
    }

    #[test]
    fn empty_payloads_fall_back_to_the_generic_message() {
        assert_eq!(flatten_error_message(&json!({})), GENERIC_API_ERROR);
        assert_eq!(flatten_error_message(&json!(null)), GENERIC_API_ERROR);
    }

    #[test]
    fn missing_payload_decodes_into_unit() {
        // No-content responses surface as `None`; unit callers accept that.
        let decoded: Result<(), ApiError> = decode(None);
        assert!(decoded.is_ok());
    }
}
