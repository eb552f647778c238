use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    // Chat endpoints are the only ones behind the per-IP limiter
    pub chat_rate_limit_max: u32,
    pub chat_rate_limit_window_secs: u64,
    pub chat_session_idle_secs: u64,

    // Writes to the mood log share the same limiter shape
    pub mood_rate_limit_max: u32,
    pub mood_rate_limit_window_secs: u64,
    pub mood_max_entries_per_user: usize,

    pub tips_count: usize,
    pub inactive_after_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            frontend_url: "http://localhost:3000".into(),
            cors_extra_origins: Vec::new(),
            chat_rate_limit_max: 30,
            chat_rate_limit_window_secs: 60,
            chat_session_idle_secs: 1800,
            mood_rate_limit_max: 60,
            mood_rate_limit_window_secs: 60,
            mood_max_entries_per_user: 5000,
            tips_count: 5,
            inactive_after_days: 7,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: parse_or("PORT", defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|v| {
                    v.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            chat_rate_limit_max: parse_or("CHAT_RATE_LIMIT_MAX", defaults.chat_rate_limit_max),
            chat_rate_limit_window_secs: parse_or(
                "CHAT_RATE_LIMIT_WINDOW_SECS",
                defaults.chat_rate_limit_window_secs,
            ),
            chat_session_idle_secs: parse_or(
                "CHAT_SESSION_IDLE_SECS",
                defaults.chat_session_idle_secs,
            ),

            mood_rate_limit_max: parse_or("MOOD_RATE_LIMIT_MAX", defaults.mood_rate_limit_max),
            mood_rate_limit_window_secs: parse_or(
                "MOOD_RATE_LIMIT_WINDOW_SECS",
                defaults.mood_rate_limit_window_secs,
            ),
            mood_max_entries_per_user: parse_or(
                "MOOD_MAX_ENTRIES_PER_USER",
                defaults.mood_max_entries_per_user,
            ),

            tips_count: parse_or("TIPS_COUNT", defaults.tips_count),
            inactive_after_days: parse_or("INACTIVE_AFTER_DAYS", defaults.inactive_after_days),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, fallback = %default, "Invalid config value, using default");
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listen_addr() {
        let config = Config::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        env::set_var("MOODMATE_TEST_PARSE_GARBAGE", "not-a-number");
        assert_eq!(parse_or("MOODMATE_TEST_PARSE_GARBAGE", 42u32), 42);
        env::remove_var("MOODMATE_TEST_PARSE_GARBAGE");
    }

    #[test]
    fn test_parse_or_reads_value() {
        env::set_var("MOODMATE_TEST_PARSE_OK", " 17 ");
        assert_eq!(parse_or("MOODMATE_TEST_PARSE_OK", 5usize), 17);
        env::remove_var("MOODMATE_TEST_PARSE_OK");
    }
}
