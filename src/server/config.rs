use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Admin account created at startup when the database has no admin yet.
pub struct AdminCredentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub admin: Option<AdminCredentials>,
    pub seed_sample_data: bool,

    pub cors_origin: Option<String>,
    pub session_secure: bool,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required. The admin account is only configured when
    /// `ADMIN_USERNAME` and `ADMIN_PASSWORD` are both set; `ADMIN_EMAIL` defaults
    /// to `<username>@example.com`.
    ///
    /// # Returns
    /// - `Ok(Config)` - Parsed configuration
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparseable boolean
    pub fn from_env() -> Result<Self, AppError> {
        let admin = match (optional("ADMIN_USERNAME"), optional("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminCredentials {
                email: optional("ADMIN_EMAIL").unwrap_or_else(|| format!("{username}@example.com")),
                username,
                password,
            }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: optional("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            admin,
            seed_sample_data: flag("SEED_SAMPLE_DATA")?,
            cors_origin: optional("CORS_ORIGIN"),
            session_secure: flag("SESSION_SECURE")?,
        })
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn flag(name: &str) -> Result<bool, ConfigError> {
    match optional(name) {
        None => Ok(false),
        Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("expected a boolean, got '{value}'"),
        }),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_boolean_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("YES"), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
    }

    #[test]
    fn rejects_unknown_boolean_spellings() {
        assert_eq!(parse_flag("maybe"), None);
        assert_eq!(parse_flag(""), None);
    }
}
