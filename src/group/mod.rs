use std::{fmt::Display, sync::Arc};

use serde::{Deserialize, Serialize};

use service::GroupService;

use crate::integration;

pub mod draft;
pub mod model;
pub mod service;

pub use draft::GroupDraft;
pub use model::Group;

type Result<T> = std::result::Result<T, Error>;
pub type Service = Arc<dyn GroupService + Send + Sync>;

#[derive(Clone, Debug, Deserialize, Serialize, Hash, PartialEq, Eq)]
#[serde(transparent)]
pub struct Id(pub String);

impl Id {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Id {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing group name")]
    MissingName,
    #[error("no participants selected")]
    NoParticipants,

    #[error(transparent)]
    _Integration(#[from] integration::Error),
}

impl Error {
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingName | Self::NoParticipants)
    }
}
