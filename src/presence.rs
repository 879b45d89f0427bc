//! Views over the directory derived from the presence feed.
//!
//! Everything here is a pure function of its inputs and is recomputed on
//! every call.

use crate::auth::OnlineSet;
use crate::user;

pub fn visible_contacts<'a>(
    users: &'a [user::User],
    online: &OnlineSet,
    auth_id: &user::Id,
    online_only: bool,
) -> Vec<&'a user::User> {
    users
        .iter()
        .filter(|u| u.id() != auth_id)
        .filter(|u| !online_only || online.contains(u.id()))
        .collect()
}

/// Number of online users other than the authenticated one. Matches
/// `|online| - 1` while the feed lists self, and cannot undercount or go
/// negative when it does not.
pub fn online_count(online: &OnlineSet, auth_id: &user::Id) -> usize {
    online.iter().filter(|id| *id != auth_id).count()
}

pub fn is_online(online: &OnlineSet, id: &user::Id) -> bool {
    online.contains(id)
}

/// Users that may be added to a new group.
pub fn candidates<'a>(users: &'a [user::User], auth_id: &user::Id) -> Vec<&'a user::User> {
    users.iter().filter(|u| u.id() != auth_id).collect()
}
