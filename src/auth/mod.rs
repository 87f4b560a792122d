//! Authentication and authorization for the leave engine.
//!
//! This module provides the closed capability model consumed by the status
//! machine, the explicit session lifecycle, and route access decisions.
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use leave_engine::auth::{check_access, AccessDecision, MemoryStore, SessionContext};
//! use leave_engine::models::Role;
//!
//! let context = SessionContext::init(MemoryStore::new(), Utc::now());
//! let decision = check_access(context.current(), Some(&[Role::Hr, Role::Admin]));
//! assert_eq!(decision, AccessDecision::RedirectToLogin);
//! ```

mod capability;
mod guard;
mod session;

pub use capability::{ApprovalAuthority, Capability, RoleAuthority, has_capability};
pub use guard::{AccessDecision, check_access};
pub use session::{
    MemoryStore, Session, SessionContext, SessionStore, TOKEN_KEY, USER_KEY, token_expiry,
};
