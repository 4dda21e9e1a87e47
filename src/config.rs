use std::env;
use std::path::PathBuf;

use crate::error::{configuration_error, AppResult};

/// URL de base de l'API distante (backend GlobalEdutech)
pub const DEFAULT_API_BASE_URL: &str = "https://server.globaledutechlearn.com";

/// Identifiants de l'administrateur unique (vérifiés entièrement côté client)
pub const DEFAULT_ADMIN_EMAIL: &str = "globaledutechlearn@gmail.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Global@2025";
pub const DEFAULT_ADMIN_PASSWORD_ALT: &str = "Amit1234";

/// Configuration de l'application, chargée depuis l'environnement
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL de base de l'API distante
    pub api_base_url: String,

    /// Timeout des requêtes HTTP (secondes)
    pub http_timeout_secs: u64,

    /// Chemin du fichier de session (l'équivalent du localStorage)
    pub session_file: PathBuf,

    /// Email de l'administrateur
    pub admin_email: String,

    /// Mot de passe de l'administrateur
    pub admin_password: String,

    /// Mot de passe alternatif accepté
    pub admin_password_alt: Option<String>,
}

impl AppConfig {
    /// Charge la configuration depuis les variables d'environnement
    pub fn from_env() -> AppResult<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let session_file = env::var("SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_session_file());

        let admin_email = env::var("ADMIN_EMAIL")
            .unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string())
            .trim()
            .to_lowercase();

        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let admin_password_alt = match env::var("ADMIN_PASSWORD_ALT") {
            Ok(v) if v.is_empty() => None,
            Ok(v) => Some(v),
            Err(_) => Some(DEFAULT_ADMIN_PASSWORD_ALT.to_string()),
        };

        let config = Self {
            api_base_url,
            http_timeout_secs,
            session_file,
            admin_email,
            admin_password,
            admin_password_alt,
        };
        config.validate()?;
        Ok(config)
    }

    /// Valide les paramètres critiques avant le démarrage
    fn validate(&self) -> AppResult<()> {
        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(configuration_error(format!(
                "API_BASE_URL invalide: {}",
                self.api_base_url
            )));
        }
        if self.http_timeout_secs == 0 {
            return Err(configuration_error("HTTP_TIMEOUT_SECS doit être > 0"));
        }
        if self.admin_email.is_empty() || self.admin_password.is_empty() {
            return Err(configuration_error(
                "ADMIN_EMAIL / ADMIN_PASSWORD ne peuvent pas être vides",
            ));
        }
        Ok(())
    }
}

/// Emplacement par défaut du fichier de session: `~/.edutech-admin/session.json`
fn default_session_file() -> PathBuf {
    match env::var("HOME") {
        Ok(home) if !home.is_empty() => PathBuf::from(home)
            .join(".edutech-admin")
            .join("session.json"),
        _ => PathBuf::from(".edutech-admin-session.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout_secs: 30,
            session_file: PathBuf::from("session.json"),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            admin_password_alt: Some(DEFAULT_ADMIN_PASSWORD_ALT.to_string()),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_base_url_without_scheme() {
        let config = AppConfig {
            api_base_url: "server.globaledutechlearn.com".to_string(),
            http_timeout_secs: 30,
            session_file: PathBuf::from("session.json"),
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            admin_password_alt: None,
        };
        assert!(config.validate().is_err());
    }
}
