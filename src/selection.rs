use std::sync::Arc;

use tokio::sync::RwLock;

use crate::directory::Directory;
use crate::{group, user};

/// The chat currently open in the UI, recorded by kind and id only.
///
/// A user and a group never compare equal, even if the backend happened to
/// give them the same id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Chat {
    User(user::Id),
    Group(group::Id),
}

impl From<&user::User> for Chat {
    fn from(u: &user::User) -> Self {
        Self::User(u.id().clone())
    }
}

impl From<&group::Group> for Chat {
    fn from(g: &group::Group) -> Self {
        Self::Group(g.id().clone())
    }
}

/// A selection looked up against the current directory snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    User(user::User),
    Group(group::Group),
}

impl Chat {
    pub fn id(&self) -> &str {
        match self {
            Self::User(id) => id.as_str(),
            Self::Group(id) => id.as_str(),
        }
    }

    /// Returns `None` when the entry is no longer in the directory.
    pub async fn resolve(&self, directory: &Directory) -> Option<Resolved> {
        match self {
            Self::User(id) => directory.user(id).await.map(Resolved::User),
            Self::Group(id) => directory.group(id).await.map(Resolved::Group),
        }
    }
}

#[derive(Clone, Default)]
pub struct Selection {
    current: Arc<RwLock<Option<Chat>>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn select(&self, chat: impl Into<Chat>) {
        *self.current.write().await = Some(chat.into());
    }

    pub async fn clear(&self) {
        *self.current.write().await = None;
    }

    pub async fn current(&self) -> Option<Chat> {
        self.current.read().await.clone()
    }

    pub async fn is_selected(&self, chat: impl Into<Chat>) -> bool {
        let chat: Chat = chat.into();
        self.current.read().await.as_ref() == Some(&chat)
    }

    /// Stale selections resolve to `None`, same as nothing selected.
    pub async fn resolve(&self, directory: &Directory) -> Option<Resolved> {
        match self.current().await {
            Some(chat) => chat.resolve(directory).await,
            None => None,
        }
    }
}
