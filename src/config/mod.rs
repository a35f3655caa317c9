use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{anyhow, Result};
use phmls_gateways::psgc::PsgcConfig;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "phmls.toml";

const ENV_NAME_DB_SNAPSHOT: &str = "PHMLS_DB_SNAPSHOT";

pub struct Config {
    pub db: Db,
    pub psgc: PsgcConfig,
    pub notifications: Notifications,
    pub share_links: ShareLinks,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(snapshot_file) = env::var(ENV_NAME_DB_SNAPSHOT) {
            cfg.db.snapshot_file = Some(snapshot_file.into());
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// Without a snapshot file nothing survives the process.
    pub snapshot_file: Option<PathBuf>,
}

pub struct Notifications {
    pub gateway: NotificationGateway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationGateway {
    Log,
    /// For local testing purposes
    JsonFile {
        dir: PathBuf,
    },
}

pub struct ShareLinks {
    pub default_lifetime: Option<Duration>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            db,
            psgc,
            notifications,
            gateway,
            share_links,
        } = from;

        let raw::Db { snapshot_file } = db.unwrap_or_default();
        let db = Db { snapshot_file };

        let raw::Psgc {
            base_url,
            timeout,
            max_attempts,
            initial_backoff,
            cache_ttl,
        } = psgc.unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(anyhow!("Missing PSGC base URL"));
        }
        if max_attempts == 0 {
            return Err(anyhow!("PSGC max. attempts must be at least 1"));
        }
        let psgc = PsgcConfig {
            base_url,
            timeout,
            max_attempts,
            initial_backoff,
            cache_ttl,
        };

        let gateway_name = notifications
            .and_then(|n| n.gateway)
            .unwrap_or(raw::NotificationGateway::Log);
        let gateway = match gateway_name {
            raw::NotificationGateway::Log => NotificationGateway::Log,
            raw::NotificationGateway::JsonFile => {
                let raw::JsonFile { dir } = gateway
                    .unwrap_or_default()
                    .json_file
                    .ok_or_else(|| anyhow!("Missing 'json-file' gateway configuration"))?;
                log::debug!("Use JSON file notification gateway ({})", dir.display());
                NotificationGateway::JsonFile { dir }
            }
        };
        let notifications = Notifications { gateway };

        let raw::ShareLinks { default_lifetime } = share_links.unwrap_or_default();
        if default_lifetime.is_some_and(|lifetime| lifetime.is_zero()) {
            return Err(anyhow!("The default share link lifetime must not be zero"));
        }
        let share_links = ShareLinks { default_lifetime };

        Ok(Self {
            db,
            psgc,
            notifications,
            share_links,
        })
    }
}
