//! Shared HTTP plumbing: the `reqwest` client factory and cache policy knobs.
//! Endpoint defaults live in `constants`.

pub(crate) mod constants;

pub use constants::API_KEY_ENV;

use crate::core::TrackerError;
use std::time::Duration;

/// Defines how a fetch interacts with the in-memory dataset cache.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Serve the cached dataset if it has not expired; otherwise fetch and store. (Default)
    #[default]
    Use,
    /// Always fetch from the network, skipping any cached dataset, and store the new one.
    Refresh,
    /// Always fetch from the network and leave the cache untouched.
    Bypass,
}

impl CacheMode {
    pub(crate) const fn reads(self) -> bool {
        matches!(self, CacheMode::Use)
    }

    pub(crate) const fn writes(self) -> bool {
        !matches!(self, CacheMode::Bypass)
    }
}

/// Transport settings shared by the document fetch and the market-cap provider.
#[derive(Clone, Debug, Default)]
pub(crate) struct HttpSettings {
    pub(crate) user_agent: Option<String>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) connect_timeout: Option<Duration>,
}

impl HttpSettings {
    pub(crate) fn build(&self) -> Result<reqwest::Client, TrackerError> {
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(constants::USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(httpb.build()?)
    }
}
