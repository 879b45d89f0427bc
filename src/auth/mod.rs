use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::user;

pub type Provider = Arc<dyn IdentityProvider + Send + Sync>;

/// The authenticated user as reported by the auth layer.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    id: user::Id,
    #[serde(rename = "fullName", default)]
    full_name: String,
}

impl User {
    pub fn new(id: impl Into<user::Id>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
        }
    }

    pub const fn id(&self) -> &user::Id {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

/// Ids of the users the presence feed currently reports online.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OnlineSet(HashSet<user::Id>);

impl OnlineSet {
    pub fn contains(&self, id: &user::Id) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &user::Id> {
        self.0.iter()
    }
}

impl FromIterator<user::Id> for OnlineSet {
    fn from_iter<I: IntoIterator<Item = user::Id>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a str> for OnlineSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(user::Id::from).collect())
    }
}

#[async_trait]
pub trait IdentityProvider {
    async fn auth_user(&self) -> Option<User>;

    async fn online_users(&self) -> OnlineSet;
}

/// In-memory identity holder updated by whatever drives authentication and
/// the presence socket.
#[derive(Clone, Default)]
pub struct Identity {
    auth_user: Arc<RwLock<Option<User>>>,
    online_users: Arc<RwLock<OnlineSet>>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_auth_user(&self, u: Option<User>) {
        *self.auth_user.write().await = u;
    }

    pub async fn set_online_users(&self, ids: impl IntoIterator<Item = user::Id>) {
        *self.online_users.write().await = ids.into_iter().collect();
    }

    pub async fn logout(&self) {
        tokio::join!(self.set_auth_user(None), async {
            *self.online_users.write().await = OnlineSet::default();
        });
    }
}

#[async_trait]
impl IdentityProvider for Identity {
    async fn auth_user(&self) -> Option<User> {
        self.auth_user.read().await.clone()
    }

    async fn online_users(&self) -> OnlineSet {
        self.online_users.read().await.clone()
    }
}
