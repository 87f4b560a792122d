//! Route access decisions.

use serde::{Deserialize, Serialize};

use super::session::Session;
use crate::models::Role;

/// What a protected page should do for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Render the page.
    Allow,
    /// Nobody is signed in; send the user to the login page.
    RedirectToLogin,
    /// Signed in, but the role is not allowed; send the user home.
    RedirectHome,
}

/// Decides whether `session` may open a page restricted to `allowed_roles`.
///
/// `None` for `allowed_roles` means any signed-in user may enter.
///
/// # Example
///
/// ```
/// use leave_engine::auth::{check_access, AccessDecision};
/// use leave_engine::models::Role;
///
/// assert_eq!(check_access(None, Some(&[Role::Hr])), AccessDecision::RedirectToLogin);
/// ```
pub fn check_access(session: Option<&Session>, allowed_roles: Option<&[Role]>) -> AccessDecision {
    let Some(session) = session else {
        return AccessDecision::RedirectToLogin;
    };

    match allowed_roles {
        Some(roles) if !roles.contains(&session.user().role) => AccessDecision::RedirectHome,
        _ => AccessDecision::Allow,
    }
}
