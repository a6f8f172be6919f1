/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub solar_api_url: String,
    pub solar_api_key: String,
    pub moon_filter: String,
    pub spacex_api_url: String,
    pub http: HttpSettings,
    pub launch_window: usize,
}

#[derive(Clone, Debug)]
pub struct HttpSettings {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: "solarscope/1.0".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let solar_api_url = env::var("SOLAR_API_URL")
            .unwrap_or_else(|_| "https://api.le-systeme-solaire.net".to_string());

        let solar_api_key = env::var("SOLAR_API_KEY").unwrap_or_default();

        let moon_filter =
            env::var("MOON_FILTER").unwrap_or_else(|_| "bodyType,eq,Moon".to_string());

        let spacex_api_url = env::var("SPACEX_API_URL")
            .unwrap_or_else(|_| "https://api.spacexdata.com".to_string());

        let http = HttpSettings {
            timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 30),
            ..HttpSettings::default()
        };

        let launch_window = env_u64("LAUNCH_WINDOW", 20);
        if launch_window == 0 {
            anyhow::bail!("LAUNCH_WINDOW must be at least 1");
        }

        Ok(Self {
            bind_addr,
            solar_api_url,
            solar_api_key,
            moon_filter,
            spacex_api_url,
            http,
            launch_window: launch_window as usize,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
