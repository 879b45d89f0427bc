use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use url::Url;

use crate::group::model::NewGroup;
use crate::{group, user};

use super::{Config, Error, Result};

const USERS_PATH: &str = "api/messages/users";
const GROUPS_PATH: &str = "api/groups";
const CREATE_GROUP_PATH: &str = "api/groups/create";

/// Request/response contracts the session consumes from the backend.
#[async_trait]
pub trait ChatApi {
    async fn find_users(&self) -> Result<Vec<user::User>>;

    async fn find_groups(&self) -> Result<Vec<group::Group>>;

    /// The created group is returned when the body decodes, but callers are
    /// expected to re-fetch rather than trust it.
    async fn create_group(&self, g: &NewGroup<'_>) -> Result<Option<group::Group>>;
}

#[derive(Clone)]
pub struct HttpChatApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpChatApi {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            base: config.api_url().clone(),
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.base.join(path).map_err(Error::from)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.client.get(url).send().await.inspect_err(|e| {
            warn!("GET {path} failed: {e:?}");
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("GET {path} responded with {status}");
            return Err(Error::UnexpectedStatus {
                status,
                path: path.to_string(),
            });
        }

        resp.json::<T>().await.map_err(Error::from)
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn find_users(&self) -> Result<Vec<user::User>> {
        self.get(USERS_PATH).await
    }

    async fn find_groups(&self) -> Result<Vec<group::Group>> {
        self.get(GROUPS_PATH).await
    }

    async fn create_group(&self, g: &NewGroup<'_>) -> Result<Option<group::Group>> {
        let url = self.url(CREATE_GROUP_PATH)?;
        debug!("POST {url} ({} members)", g.members().len());

        let resp = self.client.post(url).json(g).send().await.inspect_err(|e| {
            warn!("POST {CREATE_GROUP_PATH} failed: {e:?}");
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!("POST {CREATE_GROUP_PATH} responded with {status}");
            return Err(Error::UnexpectedStatus {
                status,
                path: CREATE_GROUP_PATH.to_string(),
            });
        }

        let body = resp.bytes().await?;
        match serde_json::from_slice::<group::Group>(&body) {
            Ok(created) => Ok(Some(created)),
            Err(e) => {
                debug!("could not decode created group: {e:?}");
                Ok(None)
            }
        }
    }
}
