//! Enrichissement des avis : résolution des noms et contacts des auteurs.
//!
//! Les entrées de feedback ne portent parfois qu'un identifiant utilisateur.
//! On résout chaque identifiant unique via `GET /users/{id}`, en parallèle
//! et sans garantie d'ordre ; un échec individuel est ignoré, l'entrée garde
//! alors `Unknown`.

use std::collections::{HashMap, HashSet};

use futures_util::future::join_all;
use tracing::debug;

use crate::api::ApiClient;
use crate::models::FeedbackEntry;

/// Annote les entrées avec `user_name` / `user_contact`.
pub async fn enrich_feedback(client: &ApiClient, feedback: &mut [FeedbackEntry]) {
    let unique_ids: HashSet<String> = feedback
        .iter()
        .filter_map(|entry| entry.user_id.as_ref())
        .map(|user_ref| user_ref.id().to_string())
        .filter(|id| !id.is_empty())
        .collect();

    if unique_ids.is_empty() {
        return;
    }
    debug!("Résolution de {} auteur(s) de feedback", unique_ids.len());

    let lookups = unique_ids.into_iter().map(|id| async move {
        match client.get_user(&id).await {
            Ok(user) => Some((id, (user.name, user.contact_no))),
            Err(_) => None,
        }
    });

    let user_map: HashMap<String, (String, String)> =
        join_all(lookups).await.into_iter().flatten().collect();

    for entry in feedback.iter_mut() {
        let resolved = entry
            .user_id
            .as_ref()
            .and_then(|user_ref| user_map.get(user_ref.id()));

        if entry.user_name.is_none() {
            entry.user_name = Some(
                resolved
                    .map(|(name, _)| name.clone())
                    .unwrap_or_else(|| "Unknown".to_string()),
            );
        }
        if entry.user_contact.is_none() {
            entry.user_contact = resolved.map(|(_, contact)| contact.clone());
        }
    }
}
