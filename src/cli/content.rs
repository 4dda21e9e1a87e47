//! Sous-commandes des contenus applicatifs : notifications, actualités,
//! témoignages.

use std::path::PathBuf;

use clap::Subcommand;

use super::print_json;
use crate::api::ApiClient;
use crate::core::auth::AuthService;
use crate::error::AppResult;
use crate::models::{
    CurrentAffairsUpdate, NewCurrentAffairs, NewNotification, NewTestimonial, NotificationUpdate,
    TestimonialUpdate,
};

#[derive(Debug, Subcommand)]
pub enum NotificationsCmd {
    List,

    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long = "type", default_value = "general")]
        kind: String,
        #[arg(long, default_value = "all")]
        target_audience: String,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        message: Option<String>,
        #[arg(long = "type")]
        kind: Option<String>,
        #[arg(long)]
        target_audience: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        is_active: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_notifications(
    cmd: NotificationsCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        NotificationsCmd::List => print_json(&client.list_notifications().await?),
        NotificationsCmd::Create {
            title,
            message,
            kind,
            target_audience,
        } => {
            let session = auth.require_session()?;
            let notification = NewNotification {
                title,
                message,
                kind,
                target_audience,
            };
            print_json(
                &client
                    .create_notification(&notification, &session.token)
                    .await?,
            )
        }
        NotificationsCmd::Update {
            id,
            title,
            message,
            kind,
            target_audience,
            priority,
            is_active,
        } => {
            let session = auth.require_session()?;
            let update = NotificationUpdate {
                title,
                message,
                kind,
                target_audience,
                priority,
                is_active,
            };
            print_json(
                &client
                    .update_notification(&id, &update, &session.token)
                    .await?,
            )
        }
        NotificationsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_notification(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CurrentAffairsCmd {
    List,

    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        publish_date: String,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        publish_date: Option<String>,
        #[arg(long)]
        is_active: Option<bool>,
        #[arg(long)]
        is_featured: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_current_affairs(
    cmd: CurrentAffairsCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        CurrentAffairsCmd::List => print_json(&client.list_current_affairs().await?),
        CurrentAffairsCmd::Create {
            title,
            content,
            category,
            publish_date,
        } => {
            let session = auth.require_session()?;
            let item = NewCurrentAffairs {
                title,
                content,
                category,
                publish_date,
            };
            print_json(&client.create_current_affairs(&item, &session.token).await?)
        }
        CurrentAffairsCmd::Update {
            id,
            title,
            content,
            category,
            publish_date,
            is_active,
            is_featured,
        } => {
            let session = auth.require_session()?;
            let update = CurrentAffairsUpdate {
                title,
                content,
                category,
                publish_date,
                is_active,
                is_featured,
            };
            print_json(
                &client
                    .update_current_affairs(&id, &update, &session.token)
                    .await?,
            )
        }
        CurrentAffairsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_current_affairs(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TestimonialsCmd {
    List,

    Get {
        #[arg(long)]
        id: String,
    },

    /// Création (média et photo de l'étudiant envoyés en multipart)
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        student_name: String,
        #[arg(long)]
        course: String,
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long, default_value = "image")]
        media_type: String,
        #[arg(long)]
        media_file: PathBuf,
        #[arg(long)]
        student_image: Option<PathBuf>,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        student_name: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        rating: Option<u8>,
        #[arg(long)]
        is_active: Option<bool>,
        #[arg(long)]
        is_featured: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_testimonials(
    cmd: TestimonialsCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        TestimonialsCmd::List => print_json(&client.list_testimonials().await?),
        TestimonialsCmd::Get { id } => print_json(&client.get_testimonial(&id).await?),
        TestimonialsCmd::Create {
            title,
            description,
            student_name,
            course,
            rating,
            media_type,
            media_file,
            student_image,
        } => {
            let session = auth.require_session()?;
            let testimonial = NewTestimonial {
                title,
                description,
                student_name,
                course,
                rating,
                media_type,
            };
            print_json(
                &client
                    .create_testimonial(
                        &testimonial,
                        &media_file,
                        student_image.as_deref(),
                        &session.token,
                    )
                    .await?,
            )
        }
        TestimonialsCmd::Update {
            id,
            title,
            description,
            student_name,
            course,
            rating,
            is_active,
            is_featured,
        } => {
            let session = auth.require_session()?;
            let update = TestimonialUpdate {
                title,
                description,
                student_name,
                course,
                rating,
                is_active,
                is_featured,
            };
            print_json(
                &client
                    .update_testimonial(&id, &update, &session.token)
                    .await?,
            )
        }
        TestimonialsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_testimonial(&id, &session.token).await?)
        }
    }
}
