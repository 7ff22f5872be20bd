use std::sync::Arc;

use crate::id::record_id;

pub const TABLE_NAME: &str = "user";

record_id!(
    /// The unique identifier of a [`User`].
    UserId,
    TABLE_NAME
);

/// A listener of the catalog.
///
/// Users are looked up by their `mobile` number. Nothing stops two users from
/// sharing a number; lookups resolve to whichever was created first.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: Arc<str>,
    pub mobile: Arc<str>,
}

impl User {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, mobile: impl Into<Arc<str>>) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            mobile: mobile.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserBrief {
    pub id: UserId,
    pub name: Arc<str>,
    pub mobile: Arc<str>,
    /// Playlists the user created or subscribed to.
    pub playlists: usize,
    /// Title of the playlist most recently created by the user.
    pub created: Option<Arc<str>>,
}

impl UserBrief {
    #[must_use]
    pub fn new(user: &User, playlists: usize, created: Option<Arc<str>>) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            mobile: user.mobile.clone(),
            playlists,
            created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_with_same_mobile_are_distinct() {
        let a = User::new("Alice", "111");
        let b = User::new("Alice", "111");
        assert_ne!(a, b);
        assert_ne!(a.id, b.id);
        assert_eq!(a.mobile, b.mobile);
    }
}
