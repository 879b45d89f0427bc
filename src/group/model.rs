use serde::{Deserialize, Deserializer, Serialize};

use crate::user;

use super::Id;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Group {
    #[serde(rename = "_id")]
    id: Id,
    #[serde(rename = "groupName")]
    name: String,
    #[serde(deserialize_with = "deserialize_members")]
    members: Vec<user::Id>,
}

impl Group {
    pub fn new(id: impl Into<Id>, name: impl Into<String>, members: &[user::Id]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members: dedup(members.iter().cloned()),
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[user::Id] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn has_member(&self, id: &user::Id) -> bool {
        self.members.contains(id)
    }
}

/// Body of the group creation request.
#[derive(Serialize, Debug)]
pub struct NewGroup<'a> {
    #[serde(rename = "groupName")]
    name: &'a str,
    members: &'a [user::Id],
}

impl<'a> NewGroup<'a> {
    pub fn new(name: &'a str, members: &'a [user::Id]) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn members(&self) -> &[user::Id] {
        self.members
    }
}

// the backend may populate members with full user documents
#[derive(Deserialize)]
#[serde(untagged)]
enum Member {
    Id(user::Id),
    Populated {
        #[serde(rename = "_id")]
        id: user::Id,
    },
}

fn deserialize_members<'de, D>(deserializer: D) -> Result<Vec<user::Id>, D::Error>
where
    D: Deserializer<'de>,
{
    let members = Vec::<Member>::deserialize(deserializer)?;
    Ok(dedup(members.into_iter().map(|m| match m {
        Member::Id(id) | Member::Populated { id } => id,
    })))
}

fn dedup(ids: impl Iterator<Item = user::Id>) -> Vec<user::Id> {
    let mut out: Vec<user::Id> = Vec::new();
    for id in ids {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}
