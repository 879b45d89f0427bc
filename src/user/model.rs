use serde::{Deserialize, Serialize};

use super::{Id, Picture};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "_id")]
    id: Id,
    #[serde(rename = "fullName")]
    full_name: String,
    #[serde(
        rename = "profilePic",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    profile_pic: Option<String>,
}

impl User {
    pub fn new(id: impl Into<Id>, full_name: impl Into<String>, profile_pic: Option<&str>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            profile_pic: profile_pic.map(String::from),
        }
    }

    pub const fn id(&self) -> &Id {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Falls back to the placeholder avatar when the server sent no picture
    /// or an empty one.
    pub fn picture(&self) -> Picture {
        match self.profile_pic.as_deref() {
            Some(p) if !p.trim().is_empty() => Picture::parse(p),
            _ => Picture::default(),
        }
    }
}
