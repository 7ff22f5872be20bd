//! CRUD operations for users
use log::debug;
use tracing::instrument;

use chorus_types::user::User;

use crate::catalog::Catalog;

impl Catalog {
    /// Register a new user.
    ///
    /// Mobile numbers are not checked for uniqueness: a duplicate number creates
    /// a distinct user that lookups will never resolve to.
    #[instrument(skip(self))]
    pub fn create_user(&mut self, name: &str, mobile: &str) -> User {
        let user = User::new(name, mobile);
        debug!("created user {}", user.id);
        self.users.push(user.clone());
        user
    }
}
