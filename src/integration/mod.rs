use std::env;
use std::fs::File;
use std::str::FromStr;
use std::time::Duration;

use dotenv::dotenv;
use log::LevelFilter;
use simplelog::{ColorChoice, CombinedLogger, TermLogger, TerminalMode, WriteLogger};
use url::Url;

pub mod api;

pub use api::{ChatApi, HttpChatApi};

pub type Result<T> = std::result::Result<T, Error>;
pub type Api = std::sync::Arc<dyn ChatApi + Send + Sync>;

const LOCAL_API_URL: &str = "http://localhost:5000";
const PRODUCTION_API_URL: &str = "https://vercel-backend-1-n7di.onrender.com";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Env {
    Local,
    Dev,
    Production,
}

impl Env {
    pub fn api_url(&self) -> &'static str {
        match self {
            Env::Local | Env::Dev => LOCAL_API_URL,
            Env::Production => PRODUCTION_API_URL,
        }
    }
}

impl FromStr for Env {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(Env::Local),
            "dev" => Ok(Env::Dev),
            "prod" => Ok(Env::Production),
            other => Err(Error::InvalidEnv(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    env: Env,
    api_url: Url,
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env: Env::Local,
            api_url: Url::parse(LOCAL_API_URL).expect("local api url is valid"),
            connect_timeout: Duration::from_secs(2),
            timeout: Duration::from_secs(5),
        }
    }
}

impl Config {
    /// Reads `.env` and the process environment, falling back to local
    /// defaults for anything not set.
    pub fn env() -> Result<Self> {
        dotenv().ok();

        let env = match env::var("ENV") {
            Ok(e) => e.parse()?,
            Err(_) => Env::Local,
        };

        let api_url = match env::var("API_URL") {
            Ok(url) => Url::parse(&url)?,
            Err(_) => Url::parse(env.api_url())?,
        };

        let connect_timeout = secs_var("HTTP_CONNECT_TIMEOUT", 2)?;
        let timeout = secs_var("HTTP_TIMEOUT", 5)?;

        Ok(Self {
            env,
            api_url: as_base(api_url),
            connect_timeout,
            timeout,
        })
    }

    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = as_base(api_url);
        self
    }

    pub fn env_kind(&self) -> &Env {
        &self.env
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// `Url::join` replaces the last segment unless the path ends in a slash
fn as_base(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

fn secs_var(key: &str, default: u64) -> Result<Duration> {
    match env::var(key) {
        Ok(v) => Ok(Duration::from_secs(v.parse()?)),
        Err(_) => Ok(Duration::from_secs(default)),
    }
}

pub fn init_logger() -> Result<()> {
    dotenv().ok();

    let rust_log = env::var("RUST_LOG").unwrap_or("info".into());
    let level = LevelFilter::from_str(&rust_log).unwrap_or(LevelFilter::Info);
    let log_file = env::var("SERVICE_NAME")
        .map(|pkg| format!("{pkg}.log"))
        .unwrap_or("messenger_client.log".into());

    CombinedLogger::init(vec![
        TermLogger::new(
            level,
            simplelog::Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(level, simplelog::Config::default(), File::create(log_file)?),
    ])?;

    Ok(())
}

/// The backend authenticates by session cookie, so the client keeps a cookie
/// store for the lifetime of the session.
pub fn init_http_client(config: &Config) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.timeout)
        .cookie_store(true)
        .build()?;

    Ok(client)
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid environment: {0}")]
    InvalidEnv(String),
    #[error("unexpected status {status} from {path}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        path: String,
    },

    #[error(transparent)]
    _Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    _Url(#[from] url::ParseError),
    #[error(transparent)]
    _ParseInt(#[from] std::num::ParseIntError),
    #[error(transparent)]
    _Io(#[from] std::io::Error),
    #[error(transparent)]
    _Logger(#[from] log::SetLoggerError),
}
