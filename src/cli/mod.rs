//! Interface en ligne de commande : une sous-commande par écran
//! d'administration. Les lectures sont libres, les mutations passent par la
//! garde de session avant toute requête.

pub mod catalog;
pub mod content;
pub mod site;
pub mod users;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::api::ApiClient;
use crate::core::auth::AuthService;
use crate::error::AppResult;

#[derive(Debug, Parser)]
#[command(
    name = "edutech-admin",
    version,
    about = "Console d'administration de la plateforme GlobalEdutech"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Connexion de l'administrateur (vérification locale des identifiants)
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Déconnexion : supprime la session locale
    Logout,

    /// Affiche la session courante
    Whoami,

    /// Vérifie que l'API distante répond
    Health,

    /// Tableau de bord
    #[command(subcommand)]
    Dashboard(DashboardCmd),

    /// Gestion des utilisateurs
    #[command(subcommand)]
    Users(users::UsersCmd),

    /// Gestion des cours
    #[command(subcommand)]
    Courses(catalog::CoursesCmd),

    /// Gestion des tests et questions
    #[command(subcommand)]
    Tests(catalog::TestsCmd),

    /// Gestion des supports de cours
    #[command(subcommand)]
    Materials(catalog::MaterialsCmd),

    /// Inscriptions aux cours
    #[command(subcommand)]
    Enrollments(catalog::EnrollmentsCmd),

    /// Notifications
    #[command(subcommand)]
    Notifications(content::NotificationsCmd),

    /// Actualités
    #[command(name = "current-affairs", subcommand)]
    CurrentAffairs(content::CurrentAffairsCmd),

    /// Témoignages
    #[command(subcommand)]
    Testimonials(content::TestimonialsCmd),

    /// Institutions partenaires
    #[command(subcommand)]
    Institutions(site::InstitutionsCmd),

    /// Coordonnées de contact du site
    #[command(subcommand)]
    Contact(site::ContactCmd),

    /// Messages reçus via le formulaire de contact
    #[command(subcommand)]
    Messages(site::MessagesCmd),

    /// Conditions générales d'utilisation
    #[command(subcommand)]
    Terms(site::TermsCmd),

    /// Carrousel de la page d'accueil
    #[command(subcommand)]
    Carousel(site::CarouselCmd),

    /// Vidéos YouTube mises en avant
    #[command(subcommand)]
    Youtube(site::YoutubeCmd),

    /// Bandeau de texte défilant
    #[command(subcommand)]
    Slider(site::SliderCmd),

    /// Upload générique d'une image
    Upload {
        #[arg(long)]
        file: std::path::PathBuf,
    },
}

#[derive(Debug, Subcommand)]
pub enum DashboardCmd {
    /// Compteurs globaux (zéros si l'API ne répond pas)
    Stats,
    /// Derniers utilisateurs, inscriptions et tentatives
    Activity,
}

/// Sortie standard de la console : JSON indenté
pub(crate) fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Point d'entrée de la console
pub async fn run(cli: Cli, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cli.command {
        Command::Login { username, password } => {
            let response = auth.login(&username, &password)?;
            print_json(&response)
        }
        Command::Logout => {
            auth.logout()?;
            println!("Logged out");
            Ok(())
        }
        Command::Whoami => match auth.current_session()? {
            Some(session) => print_json(&session),
            None => {
                println!("No active session");
                Ok(())
            }
        },
        Command::Health => {
            let response = client.health_check().await?;
            print_json(&response)
        }
        Command::Dashboard(cmd) => match cmd {
            DashboardCmd::Stats => print_json(&client.dashboard_stats().await),
            DashboardCmd::Activity => print_json(&client.recent_activities().await),
        },
        Command::Users(cmd) => users::run(cmd, client, auth).await,
        Command::Courses(cmd) => catalog::run_courses(cmd, client, auth).await,
        Command::Tests(cmd) => catalog::run_tests(cmd, client, auth).await,
        Command::Materials(cmd) => catalog::run_materials(cmd, client, auth).await,
        Command::Enrollments(cmd) => catalog::run_enrollments(cmd, client, auth).await,
        Command::Notifications(cmd) => content::run_notifications(cmd, client, auth).await,
        Command::CurrentAffairs(cmd) => content::run_current_affairs(cmd, client, auth).await,
        Command::Testimonials(cmd) => content::run_testimonials(cmd, client, auth).await,
        Command::Institutions(cmd) => site::run_institutions(cmd, client, auth).await,
        Command::Contact(cmd) => site::run_contact(cmd, client, auth).await,
        Command::Messages(cmd) => site::run_messages(cmd, client, auth).await,
        Command::Terms(cmd) => site::run_terms(cmd, client, auth).await,
        Command::Carousel(cmd) => site::run_carousel(cmd, client, auth).await,
        Command::Youtube(cmd) => site::run_youtube(cmd, client, auth).await,
        Command::Slider(cmd) => site::run_slider(cmd, client, auth).await,
        Command::Upload { file } => {
            let session = auth.require_session()?;
            let response = client.upload_image(&file, Some(&session.token)).await?;
            print_json(&response)
        }
    }
}
