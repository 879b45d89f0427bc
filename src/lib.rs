pub mod auth;
pub mod directory;
pub mod error;
pub mod group;
pub mod integration;
pub mod presence;
pub mod selection;
pub mod session;
pub mod user;

pub use error::{Error, Kind};
pub use session::Session;

pub type Result<T> = std::result::Result<T, Error>;
