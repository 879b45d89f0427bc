use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::integration::{self, Api};
use crate::{group, user};

/// Server-fetched users and groups.
///
/// Each fetch replaces its whole snapshot, so readers see either the previous
/// collection or the new one, never a mix. Overlapping fetches of the same kind
/// resolve in completion order: whichever response lands last wins.
#[derive(Clone)]
pub struct Directory {
    api: Api,
    users: Arc<RwLock<Arc<[user::User]>>>,
    groups: Arc<RwLock<Arc<[group::Group]>>>,
    users_loading: Arc<AtomicUsize>,
    groups_loading: Arc<AtomicUsize>,
    // bumped by `clear` so fetches started before it are discarded
    epoch: Arc<AtomicU64>,
}

impl Directory {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            users: Arc::new(RwLock::new(Arc::default())),
            groups: Arc::new(RwLock::new(Arc::default())),
            users_loading: Arc::new(AtomicUsize::new(0)),
            groups_loading: Arc::new(AtomicUsize::new(0)),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }
}

impl Directory {
    pub async fn fetch_users(&self) -> integration::Result<()> {
        self.users_loading.fetch_add(1, Ordering::SeqCst);
        let _guard = scopeguard::guard((), |_| {
            self.users_loading.fetch_sub(1, Ordering::SeqCst);
        });

        let epoch = self.epoch.load(Ordering::SeqCst);
        let users = self.api.find_users().await?;

        let mut snapshot = self.users.write().await;
        if epoch == self.epoch.load(Ordering::SeqCst) {
            *snapshot = users.into();
        }
        Ok(())
    }

    pub async fn fetch_groups(&self) -> integration::Result<()> {
        self.groups_loading.fetch_add(1, Ordering::SeqCst);
        let _guard = scopeguard::guard((), |_| {
            self.groups_loading.fetch_sub(1, Ordering::SeqCst);
        });

        let epoch = self.epoch.load(Ordering::SeqCst);
        let groups = self.api.find_groups().await?;

        let mut snapshot = self.groups.write().await;
        if epoch == self.epoch.load(Ordering::SeqCst) {
            *snapshot = groups.into();
        }
        Ok(())
    }

    pub async fn users(&self) -> Arc<[user::User]> {
        self.users.read().await.clone()
    }

    pub async fn groups(&self) -> Arc<[group::Group]> {
        self.groups.read().await.clone()
    }

    pub fn is_users_loading(&self) -> bool {
        self.users_loading.load(Ordering::SeqCst) > 0
    }

    pub fn is_groups_loading(&self) -> bool {
        self.groups_loading.load(Ordering::SeqCst) > 0
    }

    pub async fn user(&self, id: &user::Id) -> Option<user::User> {
        self.users.read().await.iter().find(|u| u.id() == id).cloned()
    }

    pub async fn group(&self, id: &group::Id) -> Option<group::Group> {
        self.groups.read().await.iter().find(|g| g.id() == id).cloned()
    }

    pub async fn clear(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        *self.users.write().await = Arc::default();
        *self.groups.write().await = Arc::default();
    }
}
