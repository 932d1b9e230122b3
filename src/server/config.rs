use crate::{model::validation::is_valid_pin, server::error::config::ConfigError};

/// Organization and admin account created on startup when missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub organization: String,
    pub admin_username: String,
    pub admin_pin: String,
}

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub bootstrap: Option<BootstrapConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
        };

        let bootstrap = match lookup("BOOTSTRAP_ORGANIZATION").filter(|v| !v.is_empty()) {
            Some(organization) => {
                let admin_pin = required("BOOTSTRAP_ADMIN_PIN")?;
                if !is_valid_pin(&admin_pin) {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "BOOTSTRAP_ADMIN_PIN".to_string(),
                        reason: "must be exactly 4 digits".to_string(),
                    });
                }

                Some(BootstrapConfig {
                    organization,
                    admin_username: required("BOOTSTRAP_ADMIN_USERNAME")?,
                    admin_pin,
                })
            }
            None => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            bootstrap,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    const BASE: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://localhost/etiqueta"),
        ("VALKEY_URL", "redis://localhost:6379"),
    ];

    /// Expect bootstrap to be disabled when no bootstrap organization is configured
    #[test]
    fn loads_without_bootstrap() {
        let config = Config::from_lookup(lookup(&BASE)).unwrap();

        assert_eq!(config.valkey_url, "redis://localhost:6379");
        assert!(config.bootstrap.is_none());
    }

    /// Expect error when a required variable is missing
    #[test]
    fn fails_without_database_url() {
        let result = Config::from_lookup(lookup(&[("VALKEY_URL", "redis://localhost")]));

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEnvVar("DATABASE_URL".to_string()))
        );
    }

    /// Expect error when the bootstrap admin PIN is not 4 digits
    #[test]
    fn rejects_invalid_bootstrap_pin() {
        let mut vars = BASE.to_vec();
        vars.extend([
            ("BOOTSTRAP_ORGANIZATION", "Cozinha Central"),
            ("BOOTSTRAP_ADMIN_USERNAME", "admin"),
            ("BOOTSTRAP_ADMIN_PIN", "12ab"),
        ]);

        let result = Config::from_lookup(lookup(&vars));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "BOOTSTRAP_ADMIN_PIN"
        ));
    }

    /// Expect bootstrap settings when all three variables are present
    #[test]
    fn loads_bootstrap_settings() {
        let mut vars = BASE.to_vec();
        vars.extend([
            ("BOOTSTRAP_ORGANIZATION", "Cozinha Central"),
            ("BOOTSTRAP_ADMIN_USERNAME", "admin"),
            ("BOOTSTRAP_ADMIN_PIN", "1234"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(
            config.bootstrap,
            Some(BootstrapConfig {
                organization: "Cozinha Central".to_string(),
                admin_username: "admin".to_string(),
                admin_pin: "1234".to_string(),
            })
        );
    }
}
