use crate::{group, integration};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Bad input caught before any request was sent.
    Validation,
    /// The backend could not be reached or answered with an error.
    Transport,
    Unauthenticated,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no authenticated user")]
    Unauthenticated,

    #[error(transparent)]
    _Group(#[from] group::Error),
    #[error(transparent)]
    _Integration(#[from] integration::Error),
}

impl Error {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Unauthenticated => Kind::Unauthenticated,
            Self::_Group(e) if e.is_validation() => Kind::Validation,
            Self::_Group(_) | Self::_Integration(_) => Kind::Transport,
        }
    }
}
