use async_trait::async_trait;

use crate::directory::Directory;
use crate::integration::Api;
use crate::user;

use super::model::NewGroup;

#[async_trait]
pub trait GroupService {
    /// Creates the group server-side, then re-fetches groups. Succeeds only
    /// once the refreshed directory is in place.
    async fn create(&self, name: &str, members: &[user::Id]) -> super::Result<()>;
}

#[derive(Clone)]
pub struct GroupServiceImpl {
    api: Api,
    directory: Directory,
}

impl GroupServiceImpl {
    pub fn new(api: Api, directory: Directory) -> Self {
        Self { api, directory }
    }
}

#[async_trait]
impl GroupService for GroupServiceImpl {
    async fn create(&self, name: &str, members: &[user::Id]) -> super::Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(super::Error::MissingName);
        }
        if members.is_empty() {
            return Err(super::Error::NoParticipants);
        }

        // the response is not cached; the refresh below is authoritative
        let _ = self.api.create_group(&NewGroup::new(name, members)).await?;
        self.directory.fetch_groups().await?;

        Ok(())
    }
}
