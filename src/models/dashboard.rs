use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Compteurs affichés en tête du tableau de bord
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_users: u64,

    #[serde(default)]
    pub total_courses: u64,

    #[serde(default)]
    pub total_tests: u64,

    #[serde(default)]
    pub total_materials: u64,

    #[serde(default)]
    pub total_enrollments: u64,

    #[serde(default)]
    pub timestamp: String,
}

impl DashboardStats {
    /// Statistiques à zéro, renvoyées quand l'API ne répond pas
    pub fn zeroed() -> Self {
        Self {
            total_users: 0,
            total_courses: 0,
            total_tests: 0,
            total_materials: 0,
            total_enrollments: 0,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Activité récente : derniers utilisateurs, inscriptions et tentatives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecentActivity {
    #[serde(default)]
    pub recent_users: Vec<super::User>,

    #[serde(default)]
    pub recent_enrollments: Vec<serde_json::Value>,

    #[serde(default)]
    pub recent_test_attempts: Vec<serde_json::Value>,
}
