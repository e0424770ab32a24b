use log::warn;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

const DEFAULT_PORT: u16 = 18000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Reads `HOST` and `PORT` once at startup
    pub fn from_env() -> Self {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Self {
        let defaults = ServerConfig::default();

        let host = match host {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!("invalid HOST '{}', using {}", value, defaults.host);
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match port {
            Some(value) => value.parse().unwrap_or_else(|_| {
                warn!("invalid PORT '{}', using {}", value, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        ServerConfig { host, port }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(ServerConfig::from_values(None, None), ServerConfig::default());
    }

    #[test]
    fn test_reads_host_and_port() {
        let config =
            ServerConfig::from_values(Some("127.0.0.1".to_string()), Some("8080".to_string()));

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = ServerConfig::from_values(Some("localhost:x".to_string()), Some("-1".to_string()));

        assert_eq!(config, ServerConfig::default());
    }
}
