//! User, role and actor types.
//!
//! Roles are a closed enumeration; what each role may do is decided by
//! [`has_capability`](crate::auth::has_capability), never by comparing role strings.

use serde::{Deserialize, Serialize};

/// The role a user holds in the organisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A regular employee; may only submit and cancel their own requests.
    Employee,
    /// First approval tier.
    TeamLead,
    /// Second approval tier.
    Manager,
    /// Third approval tier; also administers leave configuration.
    Hr,
    /// System administrator.
    Admin,
    /// Top approval tier with unrestricted access.
    SuperAdmin,
}

/// The tier at which a role may decide pending leave requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ApprovalLevel {
    /// Team lead.
    L1,
    /// Manager.
    L2,
    /// HR.
    L3,
    /// Super admin and admin.
    L4,
}

impl Role {
    /// Returns the approval tier for this role, or `None` for non-approvers.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::{ApprovalLevel, Role};
    ///
    /// assert_eq!(Role::Manager.approval_level(), Some(ApprovalLevel::L2));
    /// assert_eq!(Role::Employee.approval_level(), None);
    /// ```
    pub fn approval_level(&self) -> Option<ApprovalLevel> {
        match self {
            Role::Employee => None,
            Role::TeamLead => Some(ApprovalLevel::L1),
            Role::Manager => Some(ApprovalLevel::L2),
            Role::Hr => Some(ApprovalLevel::L3),
            Role::Admin | Role::SuperAdmin => Some(ApprovalLevel::L4),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::TeamLead => write!(f, "team_lead"),
            Role::Manager => write!(f, "manager"),
            Role::Hr => write!(f, "hr"),
            Role::Admin => write!(f, "admin"),
            Role::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

/// The basic identity of the signed-in user, as returned by the login endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    /// Unique identifier for the user.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email.
    pub email: String,
    /// The user's role.
    pub role: Role,
    /// Organisational level.
    #[serde(default)]
    pub level: u32,
}

impl AuthUser {
    /// Returns "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the [`Actor`] this user acts as.
    pub fn actor(&self) -> Actor {
        Actor {
            id: self.id.clone(),
            role: self.role,
        }
    }
}

/// The principal performing an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// The user's ID.
    pub id: String,
    /// The user's role.
    pub role: Role,
}

impl Actor {
    /// Creates an actor.
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}
