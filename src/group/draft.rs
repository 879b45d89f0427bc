use crate::user;

use super::Service;
use super::service::GroupService;

/// Name and participants entered while composing a new group.
///
/// Kept intact when submission fails so the user can retry; reset once the
/// group has been created.
#[derive(Clone, Debug)]
pub struct GroupDraft {
    auth_id: user::Id,
    name: String,
    participants: Vec<user::Id>,
}

impl GroupDraft {
    pub fn new(auth_id: user::Id) -> Self {
        Self {
            auth_id,
            name: String::new(),
            participants: Vec::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn participants(&self) -> &[user::Id] {
        &self.participants
    }

    pub fn is_selected(&self, id: &user::Id) -> bool {
        self.participants.contains(id)
    }

    /// Adds `id` if absent, removes it otherwise. The authenticated user can
    /// never be picked. Returns whether `id` is selected afterwards.
    pub fn toggle_participant(&mut self, id: &user::Id) -> bool {
        if id == &self.auth_id {
            return false;
        }

        match self.participants.iter().position(|p| p == id) {
            Some(i) => {
                self.participants.remove(i);
                false
            }
            None => {
                self.participants.push(id.clone());
                true
            }
        }
    }

    pub async fn submit(&mut self, groups: &Service) -> super::Result<()> {
        groups.create(&self.name, &self.participants).await?;
        self.reset();
        Ok(())
    }

    pub fn cancel(self) {}

    fn reset(&mut self) {
        self.name.clear();
        self.participants.clear();
    }
}
