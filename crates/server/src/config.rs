// crates/server/src/config.rs
//! Command-line and environment configuration for the server binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Default port for the server.
pub const DEFAULT_PORT: u16 = 47893;

/// Default tracing filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "timetrail=info,timetrail_server=info,tower_http=info";

#[derive(Debug, Clone, Parser)]
#[command(name = "timetrail", version, about = "Activity dashboard API")]
pub struct ServerArgs {
    /// Address to bind.
    #[arg(long, env = "TIMETRAIL_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on.
    #[arg(short, long, env = "TIMETRAIL_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite database file. Defaults to `<cache dir>/timetrail/timetrail.db`.
    #[arg(long, env = "TIMETRAIL_DB")]
    pub db_path: Option<PathBuf>,

    /// Tracing filter directives, e.g. `timetrail=debug,tower_http=warn`.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl ServerArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
