use std::env;
use std::fmt;

use reqwest::Client;

use crate::error::{Error, Result};

pub const SESSION_ENV: &str = "PHPSESSID";

/// Dashboard session id, sent as the `PHPSESSID` cookie on every request.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential(String);

impl SessionCredential {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::Credential("session id is empty".into()));
        }
        Ok(Self(value))
    }

    pub fn from_env() -> Result<Self> {
        let value = env::var(SESSION_ENV)
            .map_err(|_| Error::Credential(format!("{} is not set", SESSION_ENV)))?;
        Self::new(value)
    }

    pub fn cookie_header(&self) -> String {
        format!("{}={}", SESSION_ENV, self.0)
    }
}

impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionCredential(***)")
    }
}

/// One pooled client shared by every download. No request timeout is set.
pub fn create_http_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("report-export/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}
