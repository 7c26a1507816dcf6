use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Command-line / environment configuration.
#[derive(Parser, Debug)]
#[command(name = "task-daemon", version, about = "Task HTTP service")]
pub struct Args {
    /// Listen address, e.g. 127.0.0.1:8080
    #[arg(long, env = "TASKD_LISTEN", default_value = "127.0.0.1:8080")]
    pub listen: SocketAddr,

    /// SQLite database file.
    #[arg(long, env = "TASKD_DB_PATH", default_value = ".taskd/tasks.db")]
    pub db_path: PathBuf,

    /// Bearer token required on /v1 routes. Unset or empty disables the check.
    #[arg(long, env = "TASKD_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Log level (env-filter syntax).
    #[arg(long, env = "TASKD_LOG", default_value = "info")]
    pub log: String,
}

#[derive(Clone)]
pub struct DaemonConfig {
    pub listen: SocketAddr,
    pub db_path: PathBuf,
    pub api_token: Option<String>,
}

impl std::fmt::Debug for DaemonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DaemonConfig")
            .field("listen", &self.listen)
            .field("db_path", &self.db_path)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl From<Args> for DaemonConfig {
    fn from(args: Args) -> Self {
        Self {
            listen: args.listen,
            db_path: args.db_path,
            api_token: args.api_token.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["task-daemon"]).unwrap();
        assert_eq!(args.log, "info");
        let cfg = DaemonConfig::from(args);
        assert_eq!(cfg.listen, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.db_path, PathBuf::from(".taskd/tasks.db"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "task-daemon",
            "--listen",
            "0.0.0.0:9000",
            "--db-path",
            "/tmp/t.db",
            "--api-token",
            "secret",
        ])
        .unwrap();
        let cfg = DaemonConfig::from(args);
        assert_eq!(cfg.listen.port(), 9000);
        assert_eq!(cfg.api_token.as_deref(), Some("secret"));
        assert!(!format!("{cfg:?}").contains("secret"));
    }

    #[test]
    fn blank_token_disables_auth() {
        let args = Args::try_parse_from(["task-daemon", "--api-token", "  "]).unwrap();
        assert!(DaemonConfig::from(args).api_token.is_none());
    }

    #[test]
    fn rejects_bad_listen_address() {
        assert!(Args::try_parse_from(["task-daemon", "--listen", "nope"]).is_err());
    }
}
