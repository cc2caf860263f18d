use once_cell::sync::Lazy;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

/// Build-time settings for the admin UI.
///
/// Values come from `LIBRARY_API_BASE_URL` and `LIBRARY_ADMIN_DEBUG` at compile
/// time, since a static wasm bundle has no process environment to read.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_base_url: String,
    pub debug_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            debug_logs: false,
        }
    }
}

impl Config {
    pub fn from_values(api_base_url: Option<&str>, debug_logs: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            debug_logs: debug_logs.map(parse_flag).unwrap_or(false),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::from_values(
        option_env!("LIBRARY_API_BASE_URL"),
        option_env!("LIBRARY_ADMIN_DEBUG"),
    )
});
