use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use todo_core::repository::DEFAULT_LIST_LIMIT;

pub const CONFIG_FILE: &str = "todo.toml";
pub const ENV_PREFIX: &str = "TODO_";

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Maximum number of tasks shown by `list`
    #[serde(default = "default_list_limit")]
    pub list_limit: i64,
    /// Used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_path() -> String {
    "scheduler.db".to_string()
}

fn default_list_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            list_limit: default_list_limit(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            assert_eq!(Config::new()?, Config::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                database_path = "data/tasks.db"
                list_limit = 10
                "#,
            )?;
            jail.set_env("TODO_LIST_LIMIT", "25");

            let config = Config::new()?;
            assert_eq!(config.database_path, "data/tasks.db");
            assert_eq!(config.list_limit, 25);
            assert_eq!(config.log_level, "warn");
            Ok(())
        });
    }
}
