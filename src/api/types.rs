//! API Payload Types
//!
//! Entities owned by the backend plus the request bodies the client sends.
//! Everything here is a transient, read-mostly copy fetched per page view;
//! nothing is cached across navigations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::session::Role;

/// Company user as returned by `/users/`. Only the fields the client
/// renders; everything else in the payload is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    /// "First Last", trimmed when either part is missing.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Expense lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseStatus {
    Pending,
    InProgress,
    Approved,
    Rejected,
}

impl ExpenseStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "pending",
            ExpenseStatus::InProgress => "in progress",
            ExpenseStatus::Approved => "approved",
            ExpenseStatus::Rejected => "rejected",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "bg-yellow-500",
            ExpenseStatus::InProgress => "bg-blue-500",
            ExpenseStatus::Approved => "bg-green-500",
            ExpenseStatus::Rejected => "bg-red-500",
        }
    }
}

/// Expense as returned by `/expenses/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub employee: User,
    /// Decimal serialized as a string by the backend; display-only here.
    pub amount: String,
    pub currency: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub receipt: Option<String>,
    pub status: ExpenseStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub approvals: Vec<ApprovalStep>,
}

/// Decision recorded on one approval.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// One step of an expense's approval chain, embedded in `Expense`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ApprovalStep {
    #[serde(default)]
    pub sequence: i32,
    pub status: ApprovalStatus,
}

impl Expense {
    /// Sequence number of the chain step currently awaiting a decision.
    pub fn current_step(&self) -> Option<i32> {
        self.approvals
            .iter()
            .filter(|step| step.status == ApprovalStatus::Pending)
            .map(|step| step.sequence)
            .min()
    }
}

/// Approval inbox entry as returned by `/approvals/`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Approval {
    pub id: u64,
    pub status: ApprovalStatus,
    pub expense: Expense,
}

/// Approval workflow selectable when creating an expense.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Workflow {
    pub id: u64,
    pub name: String,
}

/// Notification feed entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Notification {
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Aggregates for the dashboard landing page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DashboardStats {
    pub pending_count: u64,
    pub approved_count: u64,
    /// Decimal serialized as a string by the backend.
    pub total_approved_amount: String,
}

/// Body of `POST /token/`.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access: String,
}

/// Body of `POST /signup/`. Creates the company and its first admin user.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub company_name: String,
    pub default_currency: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Body of `POST /expenses/`. An unselected workflow stays out of the
/// serialized body entirely, never sent as null or an empty string.
#[derive(Debug, Serialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: String,
    pub category: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<u64>,
}

/// Body of `POST /users/`.
#[derive(Debug, Serialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub role: Role,
}

/// Decision sent to the act endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
}

/// Body of `POST /approvals/{id}/act/`.
#[derive(Debug, Serialize)]
pub struct ActRequest {
    pub decision: Decision,
    pub comment: String,
}

/// Response of the receipt upload action. The updated expense also comes
/// back, but the list is re-fetched anyway.
#[derive(Clone, Debug, Deserialize)]
pub struct ReceiptUpload {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_workflow_is_omitted_from_the_body() {
        let body = serde_json::to_value(NewExpense {
            description: "Taxi".into(),
            amount: "12.50".into(),
            category: "Travel".into(),
            currency: "USD".into(),
            workflow: None,
        })
        .unwrap();
        assert!(body.get("workflow").is_none());

        let body = serde_json::to_value(NewExpense {
            description: "Taxi".into(),
            amount: "12.50".into(),
            category: "Travel".into(),
            currency: "USD".into(),
            workflow: Some(3),
        })
        .unwrap();
        assert_eq!(body["workflow"], serde_json::json!(3));
    }

    #[test]
    fn decision_serializes_to_the_wire_strings() {
        assert_eq!(
            serde_json::to_value(Decision::Approved).unwrap(),
            serde_json::json!("approved")
        );
        assert_eq!(
            serde_json::to_value(Decision::Rejected).unwrap(),
            serde_json::json!("rejected")
        );
    }

    #[test]
    fn expense_deserializes_from_a_backend_payload() {
        let expense: Expense = serde_json::from_value(serde_json::json!({
            "id": 9,
            "employee": {
                "id": 2,
                "username": "omar",
                "first_name": "Omar",
                "last_name": "Haddad",
                "email": "omar@example.com",
                "role": "employee"
            },
            "amount": "125.50",
            "currency": "EUR",
            "category": "Meals",
            "description": "Client dinner",
            "receipt": null,
            "status": "in_progress",
            "created_at": "2024-03-11T09:24:00Z",
            "approvals": [
                {"id": 1, "sequence": 1, "status": "approved", "comment": "ok"},
                {"id": 2, "sequence": 2, "status": "pending"}
            ]
        }))
        .unwrap();

        assert_eq!(expense.status, ExpenseStatus::InProgress);
        assert_eq!(expense.amount, "125.50");
        assert_eq!(expense.employee.full_name(), "Omar Haddad");
        assert_eq!(expense.approvals.len(), 2);
        assert_eq!(expense.approvals[1].status, ApprovalStatus::Pending);
        assert_eq!(expense.current_step(), Some(2));
    }

    #[test]
    fn expenses_without_a_chain_have_no_current_step() {
        let expense: Expense = serde_json::from_value(serde_json::json!({
            "id": 1,
            "employee": {
                "username": "omar",
                "email": "omar@example.com",
                "role": "employee"
            },
            "amount": "10.00",
            "currency": "USD",
            "category": "Meals",
            "description": "Coffee",
            "status": "approved",
            "created_at": "2024-03-11T09:24:00Z"
        }))
        .unwrap();
        assert_eq!(expense.current_step(), None);
    }

    #[test]
    fn user_tolerates_missing_name_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 4,
            "username": "kay",
            "email": "kay@example.com",
            "role": "manager"
        }))
        .unwrap();
        assert_eq!(user.full_name(), "");
        assert_eq!(user.role, Role::Manager);
    }
}
