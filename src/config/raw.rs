use std::{path::PathBuf, time::Duration};

use duration_str::{deserialize_duration, deserialize_option_duration};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = include_str!("phmls.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub db: Option<Db>,
    pub psgc: Option<Psgc>,
    pub notifications: Option<Notifications>,
    pub gateway: Option<Gateway>,
    pub share_links: Option<ShareLinks>,
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Db {
    pub snapshot_file: Option<PathBuf>,
}

impl Default for Db {
    fn default() -> Self {
        Config::default().db.expect("DB configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Psgc {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
    pub max_attempts: u32,
    #[serde(deserialize_with = "deserialize_duration")]
    pub initial_backoff: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub cache_ttl: Duration,
}

impl Default for Psgc {
    fn default() -> Self {
        Config::default().psgc.expect("PSGC configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Notifications {
    pub gateway: Option<NotificationGateway>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationGateway {
    Log,
    JsonFile,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub json_file: Option<JsonFile>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JsonFile {
    pub dir: PathBuf,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ShareLinks {
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub default_lifetime: Option<Duration>,
}

impl Default for ShareLinks {
    fn default() -> Self {
        Config::default()
            .share_links
            .expect("Share links configuration")
    }
}
