use std::sync::RwLock;

use crate::models::User;

/// Capability handed to components that need to know who is signed in.
pub trait UserContext: Send + Sync {
    fn current_user(&self) -> Option<User>;
}

impl UserContext for Option<User> {
    fn current_user(&self) -> Option<User> {
        self.clone()
    }
}

/// Session-backed user, filled in once `/auth/me` answers.
#[derive(Debug, Default)]
pub struct SessionUser {
    user: RwLock<Option<User>>,
}

impl SessionUser {
    pub fn new(user: Option<User>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }

    pub fn set(&self, user: Option<User>) {
        match self.user.write() {
            Ok(mut guard) => *guard = user,
            Err(poisoned) => *poisoned.into_inner() = user,
        }
    }
}

impl UserContext for SessionUser {
    fn current_user(&self) -> Option<User> {
        match self.user.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
