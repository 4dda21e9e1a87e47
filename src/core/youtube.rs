//! Extraction de l'identifiant vidéo depuis les différentes formes d'URL
//! YouTube acceptées par le formulaire (lien court, watch, embed, shorts,
//! live), avec un repli tolérant.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Url;

static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_-]{11}").expect("regex identifiant vidéo invalide"));

fn is_video_id(candidate: &str) -> bool {
    candidate.len() == 11
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Extrait l'identifiant de vidéo d'une URL YouTube, si elle en contient un.
pub fn extract_video_id(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let host = url.host_str()?.to_lowercase();

    if !host.contains("youtube.com") && !host.contains("youtu.be") {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());

    // Lien court : https://youtu.be/VIDEO_ID
    if host.contains("youtu.be") {
        return segments.next().filter(|s| is_video_id(s)).map(String::from);
    }

    // Lecture standard : https://www.youtube.com/watch?v=VIDEO_ID
    if let Some(first) = segments.next() {
        if first == "watch" {
            return url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v.into_owned())
                .filter(|v| is_video_id(v));
        }
        // Embed / Shorts / Live : l'identifiant est le segment suivant
        if matches!(first, "embed" | "shorts" | "live") {
            return segments.next().filter(|s| is_video_id(s)).map(String::from);
        }
    }

    // Repli tolérant : première séquence de 11 caractères plausible
    VIDEO_ID_RE
        .find(raw)
        .map(|m| m.as_str().to_string())
        .filter(|s| is_video_id(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn extracts_from_all_supported_url_shapes() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/live/dQw4w9WgXcQ",
        ] {
            assert_eq!(extract_video_id(url).as_deref(), Some(ID), "url: {}", url);
        }
    }

    #[test]
    fn rejects_non_youtube_urls() {
        assert!(extract_video_id("https://vimeo.com/123456789").is_none());
        assert!(extract_video_id("not a url").is_none());
        assert!(extract_video_id("https://www.youtube.com/").is_none());
    }
}
