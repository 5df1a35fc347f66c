use core::fmt::{Debug, Display};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "dara-holiday.toml";
pub const ENV_PREFIX: &str = "DARA_";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub instagram: String,
    pub facebook: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "greenenergyagricolas@libero.it".to_owned(),
            phone: "+393773171447".to_owned(),
            instagram: "https://www.instagram.com/daraholidayapartments/".to_owned(),
            facebook: "https://www.facebook.com/share/1EHgWnrP7C/?mibextid=wwXIfr".to_owned(),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Public base url, used for share links.
    pub url: String,
    /// Directory holding `foto/`, `images/` and `videos/`.
    pub static_root: PathBuf,
    /// Every booking button links here.
    pub booking_url: String,
    pub slider_interval_ms: u64,
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            url: "http://localhost:3000".to_owned(),
            static_root: PathBuf::from("frontend"),
            booking_url: "https://direct-book.com/properties/daraholidayapartments".to_owned(),
            slider_interval_ms: 3000,
            contact: ContactConfig::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    #[must_use]
    pub const fn slider_interval(&self) -> Duration {
        Duration::from_millis(self.slider_interval_ms)
    }
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Figment(#[from] Box<figment::Error>),
    #[error("slider interval must be positive")]
    ZeroSliderInterval,
}

impl From<figment::Error> for ConfigError {
    fn from(value: figment::Error) -> Self {
        Self::Figment(Box::new(value))
    }
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[must_use]
pub fn figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
}

pub fn extract(figment: &Figment) -> Result<Config, ConfigError> {
    let config: Config = figment.extract()?;
    if config.slider_interval_ms == 0 {
        return Err(ConfigError::ZeroSliderInterval);
    }
    Ok(config)
}

pub fn get_config() -> Result<Config, ConfigError> {
    extract(&figment())
}

#[cfg(test)]
mod tests {
    use figment::Jail;

    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            assert_eq!(get_config().unwrap(), Config::default());
            Ok(())
        });
    }

    #[test]
    fn file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    port = 8080
                    booking_url = "https://example.com/book"

                    [contact]
                    email = "info@example.com"
                "#,
            )?;
            jail.set_env("DARA_PORT", "9090");
            jail.set_env("DARA_CONTACT__PHONE", "+39 0923 000000");

            let config = get_config().unwrap();
            assert_eq!(config.port, 9090);
            assert_eq!(config.booking_url, "https://example.com/book");
            assert_eq!(config.contact.email, "info@example.com");
            assert_eq!(config.contact.phone, "+39 0923 000000");
            assert_eq!(config.contact.instagram, ContactConfig::default().instagram);
            Ok(())
        });
    }

    #[test]
    fn zero_interval_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("DARA_SLIDER_INTERVAL_MS", "0");
            assert!(matches!(get_config(), Err(ConfigError::ZeroSliderInterval)));
            Ok(())
        });
    }
}
