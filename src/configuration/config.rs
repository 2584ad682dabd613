#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    File,
    HealthCheckTimeout,
    RequestTimeout,
    ServiceURL,
    Username,
}

impl ConfigKey {
    /// Keys that only exist for a single run and never belong in a config
    /// file.
    pub fn is_runtime_only(&self) -> bool {
        return *self == ConfigKey::ConfigFile || *self == ConfigKey::File;
    }

    pub fn is_millis(&self) -> bool {
        return *self == ConfigKey::HealthCheckTimeout || *self == ConfigKey::RequestTimeout;
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        let config_path = dirs::config_dir()
            .unwrap_or_else(|| return path::PathBuf::from("."))
            .join("docchat/config.toml")
            .to_string_lossy()
            .to_string();

        let res = match key {
            ConfigKey::HealthCheckTimeout => "1000",
            ConfigKey::RequestTimeout => "120000",
            ConfigKey::ServiceURL => "http://localhost:5000",

            // Special
            ConfigKey::ConfigFile => &config_path,
            ConfigKey::File => "",
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    fn validate(key: ConfigKey, val: &str) -> Result<()> {
        if key.is_millis() && val.parse::<u64>().is_err() {
            bail!(format!(
                "Invalid value for '{key}': {val}\nExpected a number of milliseconds."
            ));
        }

        return Ok(());
    }

    pub async fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        let mut resolved = ConfigKey::iter()
            .map(|key| return (key, Config::default(key)))
            .collect::<Vec<(ConfigKey, String)>>();

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(&config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for (key, resolved_val) in resolved.iter_mut() {
                if key.is_runtime_only() {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        *resolved_val = val_int.to_string();
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        Config::validate(*key, val_str)?;
                        *resolved_val = val_str.to_string();
                    } else {
                        bail!(format!("{config_file} has an invalid value for key '{key}'"));
                    }
                }
            }
        }

        for (key, resolved_val) in resolved.iter_mut() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::validate(*key, val)?;
                    *resolved_val = val.to_string();
                }
            }
        }

        for (key, val) in resolved {
            if key == ConfigKey::ConfigFile {
                Config::set(key, &config_file);
            } else {
                Config::set(key, &val);
            }
        }

        tracing::debug!(
            service_url = %Config::get(ConfigKey::ServiceURL),
            request_timeout = %Config::get(ConfigKey::RequestTimeout),
            health_check_timeout = %Config::get(ConfigKey::HealthCheckTimeout),
            username = %Config::get(ConfigKey::Username),
            config_file = %Config::get(ConfigKey::ConfigFile),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key.is_runtime_only() {
                    return None;
                }

                if key == ConfigKey::Username {
                    return Some(
                        "# Your user name displayed in all chat bubbles.\n# username = \"\""
                            .to_string(),
                    );
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let description = arg
                    .get_help()
                    .map(|e| return e.to_string())
                    .unwrap_or_default()
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<u64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
