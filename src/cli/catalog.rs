//! Sous-commandes du catalogue pédagogique : cours, tests, supports,
//! inscriptions. Les vues « feedback » résolvent les auteurs en parallèle.

use std::path::PathBuf;

use clap::Subcommand;

use super::print_json;
use crate::api::ApiClient;
use crate::core::auth::AuthService;
use crate::core::feedback::enrich_feedback;
use crate::error::AppResult;
use crate::models::{
    CourseUpdate, MaterialUpdate, NewCourse, NewMaterial, NewQuestion, NewTest, QuestionUpdate,
    TestUpdate, TestWithQuestions,
};

#[derive(Debug, Subcommand)]
pub enum CoursesCmd {
    List,

    Get {
        #[arg(long)]
        id: String,
    },

    /// Feedback d'un cours, auteurs résolus en parallèle
    Feedback {
        #[arg(long)]
        id: String,
    },

    /// Création d'un cours (vignette envoyée en multipart)
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        sub_category: String,
        #[arg(long)]
        start_date: String,
        #[arg(long)]
        end_date: String,
        #[arg(long)]
        duration: String,
        #[arg(long)]
        instructor: String,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        thumbnail: PathBuf,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        instructor: Option<String>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        is_featured: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_courses(cmd: CoursesCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        CoursesCmd::List => print_json(&client.list_courses().await?),
        CoursesCmd::Get { id } => print_json(&client.get_course(&id).await?),
        CoursesCmd::Feedback { id } => {
            let mut course = client.get_course(&id).await?;
            enrich_feedback(client, &mut course.feedback).await;
            print_json(&course.feedback)
        }
        CoursesCmd::Create {
            name,
            title,
            description,
            category,
            sub_category,
            start_date,
            end_date,
            duration,
            instructor,
            price,
            thumbnail,
        } => {
            let session = auth.require_session()?;
            let new_course = NewCourse {
                name,
                title,
                description,
                category,
                sub_category,
                start_date,
                end_date,
                duration,
                instructor,
                price,
            };
            print_json(
                &client
                    .create_course(&new_course, &thumbnail, &session.token)
                    .await?,
            )
        }
        CoursesCmd::Update {
            id,
            name,
            title,
            description,
            category,
            sub_category,
            start_date,
            end_date,
            duration,
            instructor,
            price,
            status,
            is_featured,
        } => {
            let session = auth.require_session()?;
            let update = CourseUpdate {
                name,
                title,
                description,
                category,
                sub_category,
                start_date,
                end_date,
                duration,
                instructor,
                price,
                status,
                is_featured,
            };
            print_json(&client.update_course(&id, &update, &session.token).await?)
        }
        CoursesCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_course(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TestsCmd {
    List,

    Get {
        #[arg(long)]
        id: String,
    },

    /// Feedback d'un test, auteurs résolus en parallèle
    Feedback {
        #[arg(long)]
        id: String,
    },

    /// Création d'un test seul (les questions s'ajoutent ensuite)
    Create {
        #[arg(long)]
        class_name: String,
        #[arg(long)]
        course: String,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        module: String,
        #[arg(long)]
        test_title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        total_questions: u32,
        #[arg(long)]
        total_marks: u32,
        #[arg(long)]
        duration: u32,
        #[arg(long, default_value = "medium")]
        difficulty_level: String,
        #[arg(long)]
        pass_mark: u32,
        #[arg(long, default_value_t = 365)]
        validity_days: u32,
        #[arg(long)]
        price: f64,
    },

    /// Création combinée test + questions depuis un fichier JSON
    CreateWithQuestions {
        #[arg(long)]
        file: PathBuf,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        test_title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        total_questions: Option<u32>,
        #[arg(long)]
        total_marks: Option<u32>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        difficulty_level: Option<String>,
        #[arg(long)]
        pass_mark: Option<u32>,
        #[arg(long)]
        validity_days: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        is_active: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },

    /// Questions d'un test
    Questions {
        #[arg(long)]
        id: String,
    },

    /// Ajout d'une question depuis un fichier JSON
    AddQuestion {
        #[arg(long)]
        file: PathBuf,
    },

    /// Mise à jour d'une question depuis un fichier JSON
    UpdateQuestion {
        #[arg(long)]
        id: String,
        #[arg(long)]
        file: PathBuf,
    },

    DeleteQuestion {
        #[arg(long)]
        id: String,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> AppResult<T> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

pub async fn run_tests(cmd: TestsCmd, client: &ApiClient, auth: &AuthService) -> AppResult<()> {
    match cmd {
        TestsCmd::List => print_json(&client.list_tests().await?),
        TestsCmd::Get { id } => print_json(&client.get_test(&id).await?),
        TestsCmd::Feedback { id } => {
            let mut test = client.get_test(&id).await?;
            enrich_feedback(client, &mut test.feedback).await;
            print_json(&test.feedback)
        }
        TestsCmd::Create {
            class_name,
            course,
            sub_category,
            subject,
            module,
            test_title,
            description,
            total_questions,
            total_marks,
            duration,
            difficulty_level,
            pass_mark,
            validity_days,
            price,
        } => {
            let session = auth.require_session()?;
            let new_test = NewTest {
                class_name,
                course,
                sub_category,
                subject,
                module,
                test_title,
                description,
                total_questions,
                total_marks,
                duration,
                difficulty_level,
                pass_mark,
                validity_days,
                price,
            };
            print_json(&client.create_test(&new_test, &session.token).await?)
        }
        TestsCmd::CreateWithQuestions { file } => {
            let session = auth.require_session()?;
            let payload: TestWithQuestions = read_json(&file)?;
            print_json(
                &client
                    .create_test_with_questions(&payload, &session.token)
                    .await?,
            )
        }
        TestsCmd::Update {
            id,
            test_title,
            description,
            total_questions,
            total_marks,
            duration,
            difficulty_level,
            pass_mark,
            validity_days,
            price,
            is_active,
        } => {
            let session = auth.require_session()?;
            let update = TestUpdate {
                test_title,
                description,
                total_questions,
                total_marks,
                duration,
                difficulty_level,
                pass_mark,
                validity_days,
                price,
                is_active,
                ..TestUpdate::default()
            };
            print_json(&client.update_test(&id, &update, &session.token).await?)
        }
        TestsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_test(&id, &session.token).await?)
        }
        TestsCmd::Questions { id } => print_json(&client.test_questions(&id).await?),
        TestsCmd::AddQuestion { file } => {
            let session = auth.require_session()?;
            let question: NewQuestion = read_json(&file)?;
            print_json(&client.create_question(&question, &session.token).await?)
        }
        TestsCmd::UpdateQuestion { id, file } => {
            let session = auth.require_session()?;
            let update: QuestionUpdate = read_json(&file)?;
            print_json(&client.update_question(&id, &update, &session.token).await?)
        }
        TestsCmd::DeleteQuestion { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_question(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum MaterialsCmd {
    List,

    Get {
        #[arg(long)]
        id: String,
    },

    /// Feedback d'un support, auteurs résolus en parallèle
    Feedback {
        #[arg(long)]
        id: String,
    },

    /// Création d'un support (PDF + aperçus en multipart)
    Create {
        #[arg(long)]
        class_name: String,
        #[arg(long)]
        course: String,
        #[arg(long)]
        sub_category: String,
        #[arg(long)]
        module: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        academic_year: String,
        #[arg(long)]
        time_period: u32,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        pdf: PathBuf,
        #[arg(long = "sample-image")]
        sample_images: Vec<PathBuf>,
    },

    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        class_name: Option<String>,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        sub_category: Option<String>,
        #[arg(long)]
        module: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        academic_year: Option<String>,
        #[arg(long)]
        time_period: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        is_active: Option<bool>,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_materials(
    cmd: MaterialsCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        MaterialsCmd::List => print_json(&client.list_materials().await?),
        MaterialsCmd::Get { id } => print_json(&client.get_material(&id).await?),
        MaterialsCmd::Feedback { id } => {
            let mut material = client.get_material(&id).await?;
            enrich_feedback(client, &mut material.feedback).await;
            print_json(&material.feedback)
        }
        MaterialsCmd::Create {
            class_name,
            course,
            sub_category,
            module,
            title,
            description,
            academic_year,
            time_period,
            price,
            pdf,
            sample_images,
        } => {
            let session = auth.require_session()?;
            let new_material = NewMaterial {
                class_name,
                course,
                sub_category,
                module,
                title,
                description,
                academic_year,
                time_period,
                price,
            };
            print_json(
                &client
                    .create_material(&new_material, &pdf, &sample_images, &session.token)
                    .await?,
            )
        }
        MaterialsCmd::Update {
            id,
            class_name,
            course,
            sub_category,
            module,
            title,
            description,
            academic_year,
            time_period,
            price,
            is_active,
        } => {
            let session = auth.require_session()?;
            let update = MaterialUpdate {
                class_name,
                course,
                sub_category,
                module,
                title,
                description,
                academic_year,
                time_period,
                price,
                is_active,
            };
            print_json(&client.update_material(&id, &update, &session.token).await?)
        }
        MaterialsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_material(&id, &session.token).await?)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum EnrollmentsCmd {
    /// Inscriptions d'un cours
    ByCourse {
        #[arg(long)]
        course_id: String,
    },

    /// Inscriptions d'un utilisateur
    ByUser {
        #[arg(long)]
        user_id: String,
    },

    Delete {
        #[arg(long)]
        id: String,
    },
}

pub async fn run_enrollments(
    cmd: EnrollmentsCmd,
    client: &ApiClient,
    auth: &AuthService,
) -> AppResult<()> {
    match cmd {
        EnrollmentsCmd::ByCourse { course_id } => {
            print_json(&client.enrollments_by_course(&course_id).await?)
        }
        EnrollmentsCmd::ByUser { user_id } => {
            print_json(&client.enrollments_by_user(&user_id).await?)
        }
        EnrollmentsCmd::Delete { id } => {
            let session = auth.require_session()?;
            print_json(&client.delete_enrollment(&id, &session.token).await?)
        }
    }
}
