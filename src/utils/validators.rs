//! Validateurs partagés pour les formulaires d'administration.
//!
//! Les règles reprennent les vérifications faites côté pages :
//! email, téléphone (séparateurs ignorés), URL http(s).

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use validator::ValidationError;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{7,15}$").expect("regex téléphone invalide"));

static WEBSITE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.+").expect("regex URL invalide"));

/// Supprime les séparateurs usuels avant validation du numéro
fn clean_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
        .collect()
}

/// Numéro de téléphone international: `+` optionnel, 8 à 16 chiffres
pub fn validate_phone(raw: &str) -> Result<(), ValidationError> {
    let cleaned = clean_phone(raw.trim());
    if PHONE_RE.is_match(&cleaned) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone");
        err.message = Some(Cow::Borrowed("Invalid phone number format"));
        Err(err)
    }
}

/// URL de site web: doit commencer par http:// ou https://
pub fn validate_website(raw: &str) -> Result<(), ValidationError> {
    if WEBSITE_RE.is_match(raw.trim()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("website");
        err.message = Some(Cow::Borrowed("URL must start with http:// or https://"));
        Err(err)
    }
}

/// Lien YouTube: on doit pouvoir en extraire un identifiant de vidéo
pub fn validate_youtube_url(raw: &str) -> Result<(), ValidationError> {
    if crate::core::youtube::extract_video_id(raw).is_some() {
        Ok(())
    } else {
        let mut err = ValidationError::new("youtube_url");
        err.message = Some(Cow::Borrowed("Invalid YouTube URL"));
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_international_phone_numbers() {
        assert!(validate_phone("+919876543210").is_ok());
        assert!(validate_phone("98765 43210").is_ok());
        assert!(validate_phone("(987) 654-3210").is_ok());
    }

    #[test]
    fn rejects_bad_phone_numbers() {
        assert!(validate_phone("0123456").is_err());
        assert!(validate_phone("abcdefgh").is_err());
        assert!(validate_phone("+0123456789").is_err());
    }

    #[test]
    fn website_requires_http_scheme() {
        assert!(validate_website("https://globaledutechlearn.com").is_ok());
        assert!(validate_website("http://example.org/page").is_ok());
        assert!(validate_website("globaledutechlearn.com").is_err());
        assert!(validate_website("ftp://example.org").is_err());
    }
}
