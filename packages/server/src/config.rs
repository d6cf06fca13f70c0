//! Server configuration.

use clap::Parser;

/// Default listening host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Command line arguments of the server binary
#[derive(Debug, Parser)]
#[command(name = "hiroba-server", version, about = "Room-based WebSocket broadcast relay")]
pub struct ServerArgs {
    /// Host to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Runtime configuration of the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl From<&ServerArgs> for ServerConfig {
    fn from(args: &ServerArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
        }
    }
}
