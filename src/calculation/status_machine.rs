//! Leave request status transitions.
//!
//! A request starts `pending`. An authorized approver may move it to
//! `approved` or `rejected`; its owner may move it to `cancelled`. All three
//! are terminal. A refused transition returns
//! [`EngineError::InvalidTransition`] and leaves the request untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::ApprovalAuthority;
use crate::error::{EngineError, EngineResult};
use crate::models::{Actor, LeaveAction, LeaveRequest, LeaveStatus};

/// A record of a successful status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusTransition {
    /// The request that changed.
    pub request_id: String,
    /// The action that was applied.
    pub action: LeaveAction,
    /// Status before the change.
    pub from: LeaveStatus,
    /// Status after the change.
    pub to: LeaveStatus,
    /// Who made the change.
    pub actor_id: String,
    /// Approver comments, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// When the change was made.
    pub at: DateTime<Utc>,
}

fn refuse(request: &LeaveRequest, actor: &Actor, action: LeaveAction, reason: &str) -> EngineError {
    warn!(
        request_id = %request.id,
        actor_id = %actor.id,
        status = %request.status,
        action = %action,
        reason,
        "Leave request transition refused"
    );
    EngineError::InvalidTransition {
        request_id: request.id.clone(),
        from: request.status,
        action,
        reason: reason.to_string(),
    }
}

fn apply(
    request: &mut LeaveRequest,
    actor: &Actor,
    action: LeaveAction,
    comments: Option<String>,
    at: DateTime<Utc>,
) -> StatusTransition {
    let from = request.status;
    let to = action.target_status();
    request.status = to;

    if action != LeaveAction::Cancel {
        request.approver_id = Some(actor.id.clone());
        request.approver_comments = comments.clone();
        request.approved_at = Some(at);
    }

    info!(
        request_id = %request.id,
        actor_id = %actor.id,
        from = %from,
        to = %to,
        "Leave request transitioned"
    );

    StatusTransition {
        request_id: request.id.clone(),
        action,
        from,
        to,
        actor_id: actor.id.clone(),
        comments,
        at,
    }
}

fn decide(
    request: &mut LeaveRequest,
    approver: &Actor,
    authority: &impl ApprovalAuthority,
    action: LeaveAction,
    comments: Option<String>,
    at: DateTime<Utc>,
) -> EngineResult<StatusTransition> {
    if !request.is_pending() {
        return Err(refuse(request, approver, action, "request is no longer pending"));
    }
    if !authority.can_decide(approver, request) {
        return Err(refuse(
            request,
            approver,
            action,
            "actor is not authorized to decide this request",
        ));
    }
    Ok(apply(request, approver, action, comments, at))
}

/// Approves a pending leave request.
///
/// # Arguments
///
/// * `request` - The request to approve; modified only on success
/// * `approver` - The actor approving the request
/// * `authority` - Decides whether `approver` may decide this request
/// * `comments` - Optional approver comments recorded on the request
/// * `at` - When the decision was made
///
/// # Errors
///
/// [`EngineError::InvalidTransition`] if the request is not pending or the
/// approver is not authorized.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Utc};
/// use leave_engine::auth::RoleAuthority;
/// use leave_engine::calculation::approve;
/// use leave_engine::models::{Actor, LeaveRequest, LeaveStatus, RequestType, Role};
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
/// let mut request = LeaveRequest {
///     id: "lr_001".to_string(),
///     user_id: "usr_emp".to_string(),
///     leave_type_id: "lt_annual".to_string(),
///     start_date: date,
///     end_date: date,
///     request_type: RequestType::FullDay,
///     number_of_days: Decimal::ONE,
///     reason: String::new(),
///     status: LeaveStatus::Pending,
///     approver_id: None,
///     approver_comments: None,
///     approved_at: None,
/// };
///
/// let manager = Actor::new("usr_mgr", Role::Manager);
/// let transition = approve(&mut request, &manager, &RoleAuthority, None, Utc::now()).unwrap();
/// assert_eq!(transition.to, LeaveStatus::Approved);
/// assert_eq!(request.status, LeaveStatus::Approved);
/// ```
pub fn approve(
    request: &mut LeaveRequest,
    approver: &Actor,
    authority: &impl ApprovalAuthority,
    comments: Option<String>,
    at: DateTime<Utc>,
) -> EngineResult<StatusTransition> {
    decide(request, approver, authority, LeaveAction::Approve, comments, at)
}

/// Rejects a pending leave request.
///
/// Same preconditions as [`approve`].
pub fn reject(
    request: &mut LeaveRequest,
    approver: &Actor,
    authority: &impl ApprovalAuthority,
    comments: Option<String>,
    at: DateTime<Utc>,
) -> EngineResult<StatusTransition> {
    decide(request, approver, authority, LeaveAction::Reject, comments, at)
}

/// Cancels a pending leave request on behalf of its owner.
///
/// Ownership is checked first, so a non-owner is refused whatever the
/// request's status.
pub fn cancel(
    request: &mut LeaveRequest,
    owner: &Actor,
    at: DateTime<Utc>,
) -> EngineResult<StatusTransition> {
    if !request.is_owned_by(&owner.id) {
        return Err(refuse(
            request,
            owner,
            LeaveAction::Cancel,
            "only the request owner may cancel it",
        ));
    }
    if !request.is_pending() {
        return Err(refuse(
            request,
            owner,
            LeaveAction::Cancel,
            "request is no longer pending",
        ));
    }
    Ok(apply(request, owner, LeaveAction::Cancel, None, at))
}

/// Returns the actions `actor` could currently apply to `request`.
///
/// Useful for deciding which buttons to show.
pub fn available_actions(
    request: &LeaveRequest,
    actor: &Actor,
    authority: &impl ApprovalAuthority,
) -> Vec<LeaveAction> {
    if !request.is_pending() {
        return Vec::new();
    }

    let mut actions = Vec::new();
    if authority.can_decide(actor, request) {
        actions.push(LeaveAction::Approve);
        actions.push(LeaveAction::Reject);
    }
    if request.is_owned_by(&actor.id) {
        actions.push(LeaveAction::Cancel);
    }
    actions
}
