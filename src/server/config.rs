use std::time::Duration;

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UNIT_PRICE: f64 = 1.0;
const DEFAULT_EXPIRATION_MINUTES: i64 = 5;
const DEFAULT_WEBHOOK_TIMEOUT_SECONDS: u64 = 10;
const DEFAULT_JWT_EXPIRATION_SECONDS: i64 = 3600;
/// One year, in minutes.
const MAX_EXPIRATION_MINUTES: i64 = 525_600;
/// One year, in seconds.
const MAX_JWT_EXPIRATION_SECONDS: i64 = 31_536_000;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub order: OrderConfig,
    pub notifier: NotifierConfig,
    pub jwt: JwtConfig,
}

/// Pricing and mutability window of orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfig {
    /// Price of a single pilote.
    pub unit_price: f64,
    /// Minutes after creation during which an order can still be updated.
    pub expiration_minutes: i64,
}

/// Periodic forwarding of expired orders to the downstream service.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    pub enabled: bool,
    /// Webhook target, always present when `enabled` is true.
    pub webhook: Option<WebhookConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebhookConfig {
    pub url: Url,
    /// Sent verbatim as the `Authorization` header.
    pub api_key: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JwtConfig {
    /// HS512 signing key.
    pub secret: String,
    /// Lifetime of issued tokens in seconds.
    pub expiration_seconds: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable present and every value valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset
    /// - `Err(ConfigError::InvalidValue)` - A variable could not be parsed or failed validation
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let unit_price = vars.parsed("ORDER_PILOTES_UNIT_PRICE", DEFAULT_UNIT_PRICE)?;
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(invalid(
                "ORDER_PILOTES_UNIT_PRICE",
                unit_price.to_string(),
                "must be a non-negative number",
            ));
        }

        let expiration_minutes =
            vars.parsed("ORDER_PILOTES_EXPIRATION_MINUTES", DEFAULT_EXPIRATION_MINUTES)?;
        if !(0..=MAX_EXPIRATION_MINUTES).contains(&expiration_minutes) {
            return Err(invalid(
                "ORDER_PILOTES_EXPIRATION_MINUTES",
                expiration_minutes.to_string(),
                format!("must be between 0 and {}", MAX_EXPIRATION_MINUTES),
            ));
        }

        let enabled = vars.parsed("ORDER_NOTIFIER_ENABLED", true)?;
        let webhook = if enabled {
            Some(vars.webhook()?)
        } else {
            None
        };

        let secret = vars.required("PILOTES_JWT_SECRET")?;
        if secret.trim().is_empty() {
            return Err(invalid("PILOTES_JWT_SECRET", secret, "must not be blank"));
        }

        let expiration_seconds =
            vars.parsed("PILOTES_JWT_EXPIRATION_SECONDS", DEFAULT_JWT_EXPIRATION_SECONDS)?;
        if !(1..=MAX_JWT_EXPIRATION_SECONDS).contains(&expiration_seconds) {
            return Err(invalid(
                "PILOTES_JWT_EXPIRATION_SECONDS",
                expiration_seconds.to_string(),
                format!("must be between 1 and {}", MAX_JWT_EXPIRATION_SECONDS),
            ));
        }

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            bind_address: vars
                .optional("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            order: OrderConfig {
                unit_price,
                expiration_minutes,
            },
            notifier: NotifierConfig { enabled, webhook },
            jwt: JwtConfig {
                secret,
                expiration_seconds,
            },
        })
    }
}

struct Vars<F> {
    lookup: F,
}

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parsed<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            None => Ok(default),
            Some(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| invalid(name, value.clone(), e.to_string())),
        }
    }

    fn webhook(&self) -> Result<WebhookConfig, ConfigError> {
        let raw_url = self.required("ORDER_NOTIFIER_WEBHOOK_URL")?;
        let url = Url::parse(&raw_url)
            .map_err(|e| invalid("ORDER_NOTIFIER_WEBHOOK_URL", raw_url.clone(), e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(
                "ORDER_NOTIFIER_WEBHOOK_URL",
                raw_url,
                "must be an http or https URL",
            ));
        }

        let api_key = self.required("ORDER_NOTIFIER_WEBHOOK_API_KEY")?;
        if api_key.trim().is_empty() {
            return Err(invalid(
                "ORDER_NOTIFIER_WEBHOOK_API_KEY",
                api_key,
                "must not be blank",
            ));
        }

        let timeout_seconds = self.parsed(
            "ORDER_NOTIFIER_WEBHOOK_TIMEOUT_SECONDS",
            DEFAULT_WEBHOOK_TIMEOUT_SECONDS,
        )?;

        Ok(WebhookConfig {
            url,
            api_key,
            timeout: Duration::from_secs(timeout_seconds),
        })
    }
}

fn invalid(name: &str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        value,
        reason: reason.into(),
    }
}
