use serde::Deserialize;
use std::path::PathBuf;

fn default_db_port() -> u16 {
    5432
}

fn default_pool_max_connections() -> u32 {
    5
}

fn default_acquire_timeout_secs() -> u64 {
    10
}

fn default_port() -> u16 {
    8080
}

/// Process configuration, read from environment variables (a local `.env`
/// file is loaded first when present).
#[derive(Debug, Deserialize)]
pub struct Config {
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    /// Directory holding the database's unix socket, e.g.
    /// `/cloudsql/<instance>`. Takes precedence over the TCP settings.
    pub db_socket_path: Option<PathBuf>,
    pub db_host: Option<String>,
    #[serde(default = "default_db_port")]
    pub db_port: u16,
    #[serde(default = "default_pool_max_connections")]
    pub db_pool_max_connections: u32,
    /// Bounds both pool checkout and connection establishment.
    #[serde(default = "default_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_vars() -> Vec<(String, String)> {
        vec![
            ("DB_USER".to_owned(), "voter".to_owned()),
            ("DB_PASS".to_owned(), "secret".to_owned()),
            ("DB_NAME".to_owned(), "votes".to_owned()),
        ]
    }

    #[test]
    fn defaults_apply_when_only_required_vars_are_set() {
        let config = envy::from_iter::<_, Config>(required_vars()).unwrap();
        assert_eq!(config.db_port, 5432);
        assert_eq!(config.db_pool_max_connections, 5);
        assert_eq!(config.db_acquire_timeout_secs, 10);
        assert_eq!(config.port, 8080);
        assert!(config.db_socket_path.is_none());
        assert!(config.db_host.is_none());
    }

    #[test]
    fn missing_required_vars_fail() {
        assert!(envy::from_iter::<_, Config>(Vec::new()).is_err());
    }

    #[test]
    fn overrides_are_honored() {
        let mut vars = required_vars();
        vars.push(("DB_SOCKET_PATH".to_owned(), "/cloudsql/demo".to_owned()));
        vars.push(("DB_POOL_MAX_CONNECTIONS".to_owned(), "2".to_owned()));
        vars.push(("PORT".to_owned(), "9090".to_owned()));

        let config = envy::from_iter::<_, Config>(vars).unwrap();
        assert_eq!(
            config.db_socket_path.as_deref(),
            Some(std::path::Path::new("/cloudsql/demo"))
        );
        assert_eq!(config.db_pool_max_connections, 2);
        assert_eq!(config.port, 9090);
    }
}
