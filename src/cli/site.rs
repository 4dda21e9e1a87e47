//! Sous-commandes des contenus du site : institutions, contact, messages,
//! CGU, carrousel, vidéos YouTube et bandeau défilant.

use std::path::PathBuf;

use clap::Subcommand;

use super::print_json;
use crate::api::ApiClient;
use crate::core::auth::AuthService;
use crate::error::AppResult;
use crate::models::{
    ContactUpdate, InstitutionUpdate, NewInstitution, NewSliderText, NewYouTubeVideo,
    SliderTextUpdate, SocialMedia, TermsUpdate,
};

#[derive(Debug, Subcommand)]
pub enum InstitutionsCmd {
    List,

    Get {
        #[arg(long)]
        id: String,
    },

    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        vision: Option<String>,
        #[arg(long)]
        mission: Option<String>,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        vision: Option<String>,
        #[arg(long)]
        mission: Option<String>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_institutions(
    cmd: InstitutionsCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        InstitutionsCmd::List => print_json(&client.list_institutions().await?),
        InstitutionsCmd::Get { id } => print_json(&client.get_institution(&id).await?),
        InstitutionsCmd::Create {
            name,
            description,
            vision,
            mission,
        } => {
            let session = auth.require_session()?;
            let institution = NewInstitution {
                name,
                description,
                vision,
                mission,
            };
            print_json(
                &client
                    .create_institution(&institution, &session.token)
                    .await?,
            )
        }
        InstitutionsCmd::Update {
            id,
            name,
            description,
            vision,
            mission,
        } => {
            let session = auth.require_session()?;
            let update = InstitutionUpdate {
                name,
                description,
                vision,
                mission,
            };
            print_json(
                &client
                    .update_institution(&id, &update, &session.token)
                    .await?,
            )
        }
        InstitutionsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_institution(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ContactCmd {
    /// Coordonnées actuelles
    Get,

    /// Mise à jour des coordonnées (validation email/téléphone/URL)
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        company_name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        working_hours: Option<String>,
        #[arg(long)]
        emergency_contact: Option<String>,
        #[arg(long)]
        facebook: Option<String>,
        #[arg(long)]
        twitter: Option<String>,
        #[arg(long)]
        instagram: Option<String>,
        #[arg(long)]
        linkedin: Option<String>,
    },
}

pub async fn run_contact(cmd: ContactCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        ContactCmd::Get => print_json(&client.get_contact().await?),
        ContactCmd::Update {
            id,
            company_name,
            address,
            phone,
            mobile,
            email,
            website,
            working_hours,
            emergency_contact,
            facebook,
            twitter,
            instagram,
            linkedin,
        } => {
            let session = auth.require_session()?;
            let social_media = if facebook.is_some()
                || twitter.is_some()
                || instagram.is_some()
                || linkedin.is_some()
            {
                Some(SocialMedia {
                    facebook,
                    twitter,
                    instagram,
                    linkedin,
                })
            } else {
                None
            };
            let update = ContactUpdate {
                company_name,
                address,
                phone,
                mobile,
                email,
                website,
                working_hours,
                emergency_contact,
                social_media,
            };
            print_json(&client.update_contact(&id, &update, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum MessagesCmd {
    List,

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_messages(
    cmd: MessagesCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        MessagesCmd::List => print_json(&client.list_contact_messages().await?),
        MessagesCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_contact_message(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TermsCmd {
    /// Document actif
    Get,

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        effective_date: Option<String>,
        #[arg(long)]
        is_active: Option<bool>,
    },
}

pub async fn run_terms(cmd: TermsCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        TermsCmd::Get => print_json(&client.get_active_terms().await?),
        TermsCmd::Update {
            id,
            content,
            effective_date,
            is_active,
        } => {
            let session = auth.require_session()?;
            let update = TermsUpdate {
                content,
                effective_date,
                is_active,
            };
            print_json(&client.update_terms(&id, &update, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CarouselCmd {
    List,

    /// Ajout d'une image au carrousel
    Create {
        #[arg(long)]
        image: PathBuf,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_carousel(
    cmd: CarouselCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        CarouselCmd::List => print_json(&client.list_carousel().await?),
        CarouselCmd::Create { image } => {
            let session = auth.require_session()?;
            print_json(&client.create_carousel(&image, &session.token).await?)
        }
        CarouselCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_carousel(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum YoutubeCmd {
    List,

    /// Ajout d'une vidéo (l'URL doit contenir un identifiant valide)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        description: Option<String>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_youtube(cmd: YoutubeCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        YoutubeCmd::List => print_json(&client.list_youtube_videos().await?),
        YoutubeCmd::Create {
            title,
            url,
            description,
        } => {
            let session = auth.require_session()?;
            let video = NewYouTubeVideo {
                title,
                youtube_url: url,
                description,
            };
            print_json(&client.create_youtube_video(&video, &session.token).await?)
        }
        YoutubeCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_youtube_video(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum SliderCmd {
    List,

    Create {
        #[arg(long)]
        text: String,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        is_active: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_slider(cmd: SliderCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        SliderCmd::List => print_json(&client.list_slider_texts().await?),
        SliderCmd::Create { text } => {
            let session = auth.require_session()?;
            let item = NewSliderText { text };
            print_json(&client.create_slider_text(&item, &session.token).await?)
        }
        SliderCmd::Update {
            id,
            text,
            is_active,
        } => {
            let session = auth.require_session()?;
            let update = SliderTextUpdate { text, is_active };
            print_json(&client.update_slider_text(&id, &update, &session.token).await?)
        }
        SliderCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_slider_text(&id, &session.token).await?)
        }
    }
}
