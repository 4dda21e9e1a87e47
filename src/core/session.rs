//! Persistance de la session administrateur : l'équivalent des clés
//! `admin_token` / `admin_user` du localStorage, stocké dans un fichier JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, AppResult};

/// Session administrateur restaurée au démarrage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub role: String,
    pub logged_in_at: String,
}

/// Stockage de session sur disque
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Écrit la session sur disque (création du dossier parent au besoin)
    pub fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    /// Restaure la session si le fichier existe. Un fichier corrompu est
    /// supprimé et traité comme une absence de session, pas comme une erreur.
    pub fn load(&self) -> AppResult<Option<Session>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        match serde_json::from_str::<Session>(&data) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                warn!("Fichier de session corrompu ({}), suppression", e);
                let _ = fs::remove_file(&self.path);
                Ok(None)
            }
        }
    }

    /// Supprime la session (logout)
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session {
            token: "admin-token-1700000000000".to_string(),
            email: "globaledutechlearn@gmail.com".to_string(),
            role: "Administrator".to_string(),
            logged_in_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save(&sample_session()).unwrap();
        let restored = store.load().unwrap().unwrap();
        assert_eq!(restored.token, "admin-token-1700000000000");
        assert_eq!(restored.role, "Administrator");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("absent.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn corrupted_file_is_removed_and_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SessionStore::new(&path);
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        store.save(&sample_session()).unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
