use std::env;

pub const APP_NAME: &str = "Halcyon Studio";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote commission/payment API, no trailing slash.
    pub backend_url: String,
    /// Admin access token compared verbatim at login. `None` means the
    /// admin panel is unreachable until the environment is fixed.
    pub admin_token: Option<String>,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:10000";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

impl Config {
    pub fn from_env() -> Self {
        let backend_url = match env::var("BACKEND_URL") {
            Ok(url) => url.trim_end_matches('/').to_string(),
            Err(_) => {
                log::warn!("BACKEND_URL not set, using default: {DEFAULT_BACKEND_URL}");
                DEFAULT_BACKEND_URL.to_string()
            }
        };

        let admin_token = match env::var("ADMIN_TOKEN") {
            Ok(token) if !token.trim().is_empty() => Some(token.trim().to_string()),
            _ => {
                log::warn!("ADMIN_TOKEN not set — admin login is disabled");
                None
            }
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| {
            log::info!("BIND_ADDR not set, using default: {DEFAULT_BIND_ADDR}");
            DEFAULT_BIND_ADDR.to_string()
        });

        Config {
            backend_url,
            admin_token,
            bind_addr,
        }
    }
}
