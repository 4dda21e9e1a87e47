//! Authentification de l'administrateur unique.
//!
//! La vérification des identifiants se fait entièrement côté client, sans
//! endpoint distant : un succès produit un jeton bearer synthétique
//! `admin-token-{millis}` et un enregistrement administrateur, persistés
//! dans le fichier de session.

use chrono::Utc;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::core::session::{Session, SessionStore};
use crate::error::{unauthorized, AppResult};
use crate::models::{AuthResponse, User};

/// Service d'authentification et garde de session
#[derive(Debug, Clone)]
pub struct AuthService {
    admin_email: String,
    admin_password: String,
    admin_password_alt: Option<String>,
    store: SessionStore,
}

impl AuthService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
            admin_password_alt: config.admin_password_alt.clone(),
            store: SessionStore::new(&config.session_file),
        }
    }

    /// Vérifie les identifiants : email insensible à la casse et aux espaces,
    /// mot de passe sensible à la casse.
    fn credentials_match(&self, username: &str, password: &str) -> bool {
        let normalized_username = username.trim().to_lowercase();
        let normalized_password = password.trim();

        normalized_username == self.admin_email
            && (normalized_password == self.admin_password
                || self
                    .admin_password_alt
                    .as_deref()
                    .is_some_and(|alt| normalized_password == alt))
    }

    /// Connexion de l'administrateur. Persiste la session en cas de succès.
    pub fn login(&self, username: &str, password: &str) -> AppResult<AuthResponse> {
        if !self.credentials_match(username, password) {
            warn!("Tentative de connexion refusée");
            return Err(unauthorized("Invalid credentials"));
        }

        let now = Utc::now();
        let token = format!("admin-token-{}", now.timestamp_millis());
        let session = Session {
            token: token.clone(),
            email: self.admin_email.clone(),
            role: "Administrator".to_string(),
            logged_in_at: now.to_rfc3339(),
        };
        self.store.save(&session)?;
        info!("Connexion administrateur réussie");

        Ok(AuthResponse {
            message: "Login successful".to_string(),
            user_id: self.admin_email.clone(),
            token,
            user: self.admin_user(&now.to_rfc3339()),
        })
    }

    /// Déconnexion : supprime la session persistée
    pub fn logout(&self) -> AppResult<()> {
        self.store.clear()
    }

    /// Session courante, s'il y en a une
    pub fn current_session(&self) -> AppResult<Option<Session>> {
        self.store.load()
    }

    /// Garde : les opérations de mutation exigent une session active et
    /// échouent avant toute requête HTTP en son absence.
    pub fn require_session(&self) -> AppResult<Session> {
        self.store
            .load()?
            .ok_or_else(|| unauthorized("No active session. Please login first."))
    }

    /// Enregistrement administrateur synthétique renvoyé à la connexion
    fn admin_user(&self, now: &str) -> User {
        User {
            id: self.admin_email.clone(),
            name: "Admin User".to_string(),
            email: self.admin_email.clone(),
            contact_no: String::new(),
            gender: "other".to_string(),
            education: "Admin".to_string(),
            course: "Administration".to_string(),
            provider: "admin".to_string(),
            firebase_uid: None,
            photo_url: None,
            is_active: true,
            created_at: now.to_string(),
            last_login: now.to_string(),
            updated_at: now.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn service(dir: &std::path::Path) -> AuthService {
        let config = AppConfig {
            api_base_url: "https://server.globaledutechlearn.com".to_string(),
            http_timeout_secs: 30,
            session_file: dir.join("session.json"),
            admin_email: "globaledutechlearn@gmail.com".to_string(),
            admin_password: "Global@2025".to_string(),
            admin_password_alt: Some("Amit1234".to_string()),
        };
        AuthService::new(&config)
    }

    #[test]
    fn login_accepts_both_passwords_and_persists_session() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());

        let response = auth.login("globaledutechlearn@gmail.com", "Global@2025").unwrap();
        assert_eq!(response.message, "Login successful");
        assert!(response.token.starts_with("admin-token-"));
        assert!(auth.current_session().unwrap().is_some());

        assert!(auth.login("globaledutechlearn@gmail.com", "Amit1234").is_ok());
    }

    #[test]
    fn email_is_case_insensitive_password_is_not() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());

        assert!(auth
            .login("  GlobalEduTechLearn@Gmail.com ", "Global@2025")
            .is_ok());
        assert!(auth
            .login("globaledutechlearn@gmail.com", "global@2025")
            .is_err());
    }

    #[test]
    fn guard_rejects_without_session() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());

        assert!(auth.require_session().is_err());
        auth.login("globaledutechlearn@gmail.com", "Global@2025").unwrap();
        assert!(auth.require_session().is_ok());
        auth.logout().unwrap();
        assert!(auth.require_session().is_err());
    }

    #[test]
    fn session_file_lives_under_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let auth = service(dir.path());
        auth.login("globaledutechlearn@gmail.com", "Global@2025").unwrap();
        assert!(PathBuf::from(dir.path().join("session.json")).exists());
    }
}
