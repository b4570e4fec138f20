//! Ambient backoffice security state.

use quill_core::User;

/// Accessor for the user behind the current editing request.
///
/// May report no user (background work, no active request); conversions
/// that depend on the current user must then degrade to an empty or
/// neutral result rather than fail.
pub trait SecurityAccessor: Send + Sync {
    /// The current backoffice user, if a request is active.
    fn current_user(&self) -> Option<User>;
}

/// Security accessor with a fixed current user (or none).
pub struct FixedSecurityAccessor {
    user: Option<User>,
}

impl FixedSecurityAccessor {
    /// Creates an accessor reporting the given user.
    #[must_use]
    pub fn for_user(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Creates an accessor reporting no active user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl SecurityAccessor for FixedSecurityAccessor {
    fn current_user(&self) -> Option<User> {
        self.user.clone()
    }
}
