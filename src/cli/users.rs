use clap::Subcommand;

use super::print_json;
use crate::api::ApiClient;
use crate::core::auth::AuthService;
use crate::error::AppResult;
use crate::models::UserUpdate;

#[derive(Debug, Subcommand)]
pub enum UsersCmd {
    /// Liste tous les utilisateurs
    List,

    /// Fiche d'un utilisateur
    Get {
        #[arg(long)]
        id: String,
    },

    /// Téléchargements d'un utilisateur
    Downloads {
        #[arg(long)]
        id: String,
    },

    /// Tentatives de test d'un utilisateur
    Attempts {
        #[arg(long)]
        id: String,
    },

    /// Mise à jour partielle d'un utilisateur
    Update {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        contact_no: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        education: Option<String>,

        #[arg(long)]
        course: Option<String>,

        #[arg(long)]
        is_active: Option<bool>,
    },

    /// Suppression d'un utilisateur
    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run(cmd: UsersCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        UsersCmd::List => print_json(&client.list_users().await?),
        UsersCmd::Get { id } => print_json(&client.get_user(&id).await?),
        UsersCmd::Downloads { id } => print_json(&client.user_downloads(&id).await?),
        UsersCmd::Attempts { id } => print_json(&client.user_test_attempts(&id).await?),
        UsersCmd::Update {
            id,
            name,
            email,
            contact_no,
            gender,
            education,
            course,
            is_active,
        } => {
            let session = auth.require_session()?;
            let update = UserUpdate {
                name,
                email,
                contact_no,
                gender,
                education,
                course,
                is_active,
            };
            print_json(&client.update_user(&id, &update, &session.token).await?)
        }
        UsersCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_user(&id, &session.token).await?)
        }
    }
}
