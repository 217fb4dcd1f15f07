use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use chocobites_core::EmbedConfig;
use smol_str::{SmolStr, ToSmolStr};

use crate::env;

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::from_env);

#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub embed: EmbedConfig,
    /// Where both the footer link and the Instagram order button point.
    pub instagram_url: SmolStr,
}

impl Config {
    pub fn from_env() -> Self {
        let app_env = AppEnv::from_str(env::CHOCOBITES_APP_ENV).unwrap_or(AppEnv::Dev);
        let defaults = EmbedConfig::default();
        let embed = EmbedConfig {
            max_retries: env::CHOCOBITES_EMBED_MAX_RETRIES
                .parse()
                .unwrap_or(defaults.max_retries),
            retry_delay: env::CHOCOBITES_EMBED_RETRY_DELAY_MS
                .parse()
                .map(Duration::from_millis)
                .unwrap_or(defaults.retry_delay),
            ..defaults
        }
        .with_script_url(env::CHOCOBITES_EMBED_SCRIPT_URL);

        Self {
            app_env,
            embed,
            instagram_url: env::CHOCOBITES_INSTAGRAM_URL.to_smolstr(),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.app_env == AppEnv::Dev
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Dev,
    Prod,
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid AppEnv: {s}")),
        }
    }
}
