//! Role capabilities and approval authority.
//!
//! This module maps each [`Role`] to the operations it may perform and
//! provides the [`ApprovalAuthority`] seam the status machine consults
//! before approving or rejecting a request.

use serde::{Deserialize, Serialize};

use crate::models::{Actor, LeaveRequest, Role};

/// An operation gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Approve or reject other users' pending leave requests.
    ApproveLeave,
    /// View the leave requests of one's team.
    ViewTeamLeaves,
    /// Create and edit leave types.
    ManageLeaveTypes,
    /// Create and edit holidays.
    ManageHolidays,
    /// Grant and adjust leave balances.
    ManageBalances,
    /// Configure approval workflows.
    ManageWorkflows,
    /// Create and edit users, departments, positions and roles.
    ManageUsers,
}

/// Returns true if `role` grants `capability`.
///
/// # Example
///
/// ```
/// use leave_engine::auth::{has_capability, Capability};
/// use leave_engine::models::Role;
///
/// assert!(has_capability(Role::Manager, Capability::ApproveLeave));
/// assert!(!has_capability(Role::Employee, Capability::ApproveLeave));
/// assert!(has_capability(Role::Hr, Capability::ManageHolidays));
/// ```
pub fn has_capability(role: Role, capability: Capability) -> bool {
    match capability {
        Capability::ApproveLeave | Capability::ViewTeamLeaves => role.approval_level().is_some(),
        Capability::ManageLeaveTypes | Capability::ManageHolidays | Capability::ManageBalances => {
            matches!(role, Role::Hr | Role::Admin | Role::SuperAdmin)
        }
        Capability::ManageWorkflows | Capability::ManageUsers => {
            matches!(role, Role::Admin | Role::SuperAdmin)
        }
    }
}

/// Decides whether an actor may approve or reject a specific request.
///
/// The leave-management server is the real authority; implementations of
/// this trait mirror its rules so the client can refuse obviously invalid
/// decisions before sending them.
pub trait ApprovalAuthority {
    /// Returns true if `actor` may decide `request`.
    fn can_decide(&self, actor: &Actor, request: &LeaveRequest) -> bool;
}

/// Approval authority based solely on the actor's role.
///
/// Any role with an approval level may decide requests, except requests the
/// actor submitted themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAuthority;

impl ApprovalAuthority for RoleAuthority {
    fn can_decide(&self, actor: &Actor, request: &LeaveRequest) -> bool {
        has_capability(actor.role, Capability::ApproveLeave) && !request.is_owned_by(&actor.id)
    }
}
