//! Listener configuration read from the process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 3001;

/// Address used when `STOCKROOM_HOST` is unset or unusable.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Where the gateway listens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct GatewayConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl GatewayConfig {
    /// Read `PORT` and `STOCKROOM_HOST` from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Values that fail to parse fall back to the defaults with a warning.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: parse_or("STOCKROOM_HOST", lookup("STOCKROOM_HOST"), DEFAULT_HOST),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT),
        }
    }

    #[must_use]
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };
    if let Ok(value) = raw.trim().parse() {
        value
    } else {
        tracing::warn!(key, value = %raw, fallback = %default, "ignoring unusable setting");
        default
    }
}
