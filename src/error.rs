use thiserror::Error;
use validator::ValidationErrors;

/// Type de résultat standard pour l'application
pub type AppResult<T> = Result<T, AppError>;

/// Erreurs principales de l'application
#[derive(Debug, Error)]
pub enum AppError {
    /// Erreur d'authentification (identifiants ou session invalides)
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Ressource non trouvée côté API distante
    #[error("Not found: {0}")]
    NotFound(String),

    /// Erreur renvoyée par l'API distante (corps JSON `message`/`detail`)
    #[error("HTTP error! status: {status}: {message}")]
    Api { status: u16, message: String },

    /// Données de formulaire invalides
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Timeout d'une requête HTTP
    #[error("Operation timeout: {0}")]
    Timeout(String),

    /// Erreur de connexion au serveur distant
    #[error("Connection error: {0}")]
    Connection(String),

    /// Erreur de transport HTTP (hors timeout/connexion)
    #[error("HTTP request error: {0}")]
    Http(String),

    /// Erreur de sérialisation/désérialisation
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Erreur d'entrée/sortie (fichier de session, fichiers à uploader)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Erreur de configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Erreur de session locale
    #[error("Session error: {0}")]
    Session(String),
}

impl AppError {
    /// Message affichable à l'administrateur (le texte inline des pages)
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::Unauthorized(_) => "Invalid credentials".to_string(),
            AppError::NotFound(message) => message.clone(),
            AppError::Api { message, .. } => message.clone(),
            AppError::Validation(errors) => {
                let mut messages = Vec::new();
                for field_errors in errors.field_errors().values() {
                    for error in field_errors.iter() {
                        if let Some(msg) = error.message.as_ref() {
                            messages.push(msg.to_string());
                        }
                    }
                }
                if messages.is_empty() {
                    "Invalid form data".to_string()
                } else {
                    messages.join("; ")
                }
            }
            AppError::Timeout(_) => "The request took too long. Please retry.".to_string(),
            AppError::Connection(_) => "API is not responding".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            AppError::Timeout("Request timeout".to_string())
        } else if error.is_connect() {
            AppError::Connection("Connection failed".to_string())
        } else if error.is_decode() {
            AppError::Http(format!("Invalid response body: {}", error))
        } else {
            AppError::Http(error.to_string())
        }
    }
}

// Helper functions pour créer des erreurs courantes

pub fn unauthorized<T: Into<String>>(message: T) -> AppError {
    AppError::Unauthorized(message.into())
}

pub fn not_found<T: Into<String>>(resource: T) -> AppError {
    AppError::NotFound(resource.into())
}

pub fn configuration_error<T: Into<String>>(message: T) -> AppError {
    AppError::Configuration(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_keeps_status_and_message() {
        let err = AppError::Api {
            status: 422,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Email already registered");
        assert!(err.to_string().contains("422"));
    }

    #[test]
    fn validation_errors_are_joined() {
        use validator::Validate;

        #[derive(Validate)]
        struct Form {
            #[validate(email(message = "Invalid email format"))]
            email: String,
        }

        let form = Form {
            email: "not-an-email".to_string(),
        };
        let err: AppError = form.validate().unwrap_err().into();
        assert_eq!(err.user_friendly_message(), "Invalid email format");
    }
}
