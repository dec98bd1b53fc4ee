use std::net::SocketAddr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub mongo_uri: String,
    pub cors_origins: String,
    pub read_only: bool,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
}

/// Staging points at a live data source and must never be written to.
pub fn read_only_for_env(environment: &str) -> bool {
    environment == "staging"
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let environment = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let mongo_uri = std::env::var("MONGO_URI")?;
        let cors_origins = std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into());
        let host = std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = std::env::var("APP_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8080);
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET_KEY")?,
            ttl_seconds: std::env::var("JWT_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(3600),
        };
        let read_only = read_only_for_env(&environment);
        Ok(Self {
            environment,
            mongo_uri,
            cors_origins,
            read_only,
            host,
            port,
            jwt,
        })
    }

    pub fn listen_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config(host: &str, port: u16) -> AppConfig {
        AppConfig {
            environment: "development".into(),
            mongo_uri: "mongodb://localhost:27017".into(),
            cors_origins: "*".into(),
            read_only: false,
            host: host.into(),
            port,
            jwt: JwtConfig {
                secret: "dev-secret".into(),
                ttl_seconds: 3600,
            },
        }
    }

    #[test]
    fn staging_is_read_only() {
        assert!(read_only_for_env("staging"));
    }

    #[test]
    fn other_environments_are_writable() {
        assert!(!read_only_for_env("development"));
        assert!(!read_only_for_env("production"));
        assert!(!read_only_for_env(""));
    }

    #[test]
    fn listen_addr_combines_host_and_port() {
        let addr = make_config("127.0.0.1", 9999).listen_addr().unwrap();
        assert_eq!(addr, "127.0.0.1:9999".parse().unwrap());
    }

    #[test]
    fn listen_addr_rejects_garbage_host() {
        assert!(make_config("not a host", 8080).listen_addr().is_err());
    }
}
