//! Tableau de bord : statistiques globales, activité récente, état de l'API.
//!
//! Comme dans les écrans d'origine, un échec sur les statistiques ou sur
//! l'activité récente n'est pas fatal : on affiche des valeurs vides.

use tracing::warn;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{DashboardStats, MessageResponse, RecentActivity};

impl ApiClient {
    /// Statistiques globales, à zéro si l'API ne répond pas
    pub async fn dashboard_stats(&self) -> DashboardStats {
        match self.get_json::<DashboardStats>("/dashboard/stats").await {
            Ok(stats) => stats,
            Err(e) => {
                warn!("Statistiques indisponibles: {}", e);
                DashboardStats::zeroed()
            }
        }
    }

    /// Activité récente, vide si l'API ne répond pas
    pub async fn recent_activities(&self) -> RecentActivity {
        match self
            .get_json::<RecentActivity>("/dashboard/recent-activities")
            .await
        {
            Ok(activity) => activity,
            Err(e) => {
                warn!("Activité récente indisponible: {}", e);
                RecentActivity::default()
            }
        }
    }

    /// Vérification de santé de l'API distante
    pub async fn health_check(&self) -> AppResult<MessageResponse> {
        self.get_json("/health").await
    }
}
