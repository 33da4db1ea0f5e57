use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// How long the server waits for the next request on a connection.
pub const READ_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// How long writing a single response may take before the connection is dropped.
pub const WRITE_RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

/// How long request handling may take before the connection is dropped.
pub const HANDLE_REQUEST_TIMEOUT: Duration = Duration::from_secs(1);

/// Server configuration, assembled once at startup from the command line
/// and immutable for the lifetime of the process.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "TLS-terminated static file server", long_about = None)]
pub struct ServerConfig {
    /// Address to listen on (accepted for compatibility; the listener binds all interfaces)
    #[arg(short = 'a', long, default_value = "localhost")]
    pub address: String,

    /// Port to listen on
    #[arg(short = 'p', long, default_value_t = 8080)]
    pub port: u16,

    /// The size of the thread pool that runs the server
    #[arg(short = 'n', long = "thread-pool-size", default_value_t = NonZeroUsize::MIN)]
    pub pool_size: NonZeroUsize,

    /// Server root dir
    #[arg(default_value = ".")]
    pub root_dir: String,

    /// Server certs dir
    #[arg(default_value = ".")]
    pub certs_dir: PathBuf,
}

impl ServerConfig {
    /// The socket address the listener binds. Always all interfaces.
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// The document root, guaranteed non-empty and terminated with a separator
    /// so request paths can be appended directly.
    pub fn normalized_root(&self) -> String {
        if self.root_dir.is_empty() {
            "./".to_string()
        } else if self.root_dir.ends_with('/') {
            self.root_dir.clone()
        } else {
            format!("{}/", self.root_dir)
        }
    }
}
