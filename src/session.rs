use std::sync::Arc;

use log::{debug, info};

use crate::auth::{self, IdentityProvider};
use crate::directory::Directory;
use crate::group::service::{GroupService, GroupServiceImpl};
use crate::group::{self, GroupDraft};
use crate::integration::Api;
use crate::selection::{Chat, Resolved, Selection};
use crate::{Error, Result, presence, user};

/// State owned by one logged-in session: the directory, the open chat and a
/// handle on the identity provider. Created at login, torn down by `close`.
///
/// Cloning is cheap and every clone shares the same state.
#[derive(Clone)]
pub struct Session {
    identity: auth::Provider,
    directory: Directory,
    selection: Selection,
    groups: group::Service,
}

impl Session {
    pub fn new(api: Api, identity: auth::Provider) -> Self {
        let directory = Directory::new(api.clone());
        let groups: group::Service = Arc::new(GroupServiceImpl::new(api, directory.clone()));

        Self {
            identity,
            directory,
            selection: Selection::new(),
            groups,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn group_service(&self) -> &group::Service {
        &self.groups
    }

    async fn auth_id(&self) -> Result<user::Id> {
        self.identity
            .auth_user()
            .await
            .map(|u| u.id().clone())
            .ok_or(Error::Unauthenticated)
    }
}

// directory
impl Session {
    pub async fn fetch_users(&self) -> Result<()> {
        self.directory.fetch_users().await.map_err(Error::from)
    }

    pub async fn fetch_groups(&self) -> Result<()> {
        self.directory.fetch_groups().await.map_err(Error::from)
    }

    /// Fetches users and groups concurrently. Both are attempted even if one
    /// fails; the first failure is returned.
    pub async fn refresh(&self) -> Result<()> {
        let (users, groups) = tokio::join!(self.fetch_users(), self.fetch_groups());
        users.and(groups)
    }

    pub async fn users(&self) -> Arc<[user::User]> {
        self.directory.users().await
    }

    pub async fn groups(&self) -> Arc<[group::Group]> {
        self.directory.groups().await
    }

    pub fn is_users_loading(&self) -> bool {
        self.directory.is_users_loading()
    }

    pub fn is_groups_loading(&self) -> bool {
        self.directory.is_groups_loading()
    }
}

// selection
impl Session {
    pub async fn select(&self, chat: impl Into<Chat>) {
        self.selection.select(chat).await
    }

    pub async fn clear_selection(&self) {
        self.selection.clear().await
    }

    pub async fn current_selection(&self) -> Option<Chat> {
        self.selection.current().await
    }

    pub async fn is_selected(&self, chat: impl Into<Chat>) -> bool {
        self.selection.is_selected(chat).await
    }

    pub async fn resolved_selection(&self) -> Option<Resolved> {
        self.selection.resolve(&self.directory).await
    }
}

// presence
impl Session {
    pub async fn visible_contacts(&self, online_only: bool) -> Result<Vec<user::User>> {
        let auth_id = self.auth_id().await?;
        let online = self.identity.online_users().await;
        let users = self.directory.users().await;

        Ok(presence::visible_contacts(&users, &online, &auth_id, online_only)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn online_count(&self) -> Result<usize> {
        let auth_id = self.auth_id().await?;
        let online = self.identity.online_users().await;
        Ok(presence::online_count(&online, &auth_id))
    }

    pub async fn is_online(&self, id: &user::Id) -> bool {
        presence::is_online(&self.identity.online_users().await, id)
    }

    pub async fn candidates(&self) -> Result<Vec<user::User>> {
        let auth_id = self.auth_id().await?;
        let users = self.directory.users().await;

        Ok(presence::candidates(&users, &auth_id)
            .into_iter()
            .cloned()
            .collect())
    }
}

// group creation
impl Session {
    pub async fn new_group_draft(&self) -> Result<GroupDraft> {
        Ok(GroupDraft::new(self.auth_id().await?))
    }

    pub async fn create_group(&self, name: &str, members: &[user::Id]) -> Result<()> {
        self.groups.create(name, members).await.map_err(Error::from)
    }

    pub async fn submit_draft(&self, draft: &mut GroupDraft) -> Result<()> {
        draft.submit(&self.groups).await.map_err(Error::from)
    }
}

impl Session {
    /// Drops cached state at logout. Fetches still in flight complete without
    /// touching the cleared directory.
    pub async fn close(&self) {
        debug!("closing session");
        tokio::join!(self.directory.clear(), self.selection.clear());
        info!("session closed");
    }
}
