use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::material::FeedbackEntry;

/// Test en ligne (QCM) de la plateforme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestItem {
    #[serde(rename = "_id")]
    pub id: String,

    pub class_name: String,
    pub course: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    pub subject: String,
    pub module: String,
    pub test_title: String,
    pub description: String,

    #[serde(default)]
    pub total_questions: u32,

    #[serde(default)]
    pub total_marks: u32,

    /// Durée en minutes
    #[serde(default)]
    pub duration: u32,

    #[serde(default)]
    pub difficulty_level: String,

    #[serde(default)]
    pub pass_mark: u32,

    #[serde(default)]
    pub validity_days: u32,

    #[serde(default)]
    pub price: f64,

    #[serde(default)]
    pub date_published: String,

    #[serde(default)]
    pub result_type: String,

    #[serde(default)]
    pub answer_key: bool,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub attempts_count: u64,

    #[serde(default)]
    pub feedback: Vec<FeedbackEntry>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: String,

    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestsResponse {
    pub tests: Vec<TestItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestResponse {
    pub test: TestItem,
}

/// Option d'une question à choix multiples
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub label: String,
    pub text: String,
}

/// Question rattachée à un test
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestQuestion {
    #[serde(rename = "_id")]
    pub id: String,

    pub test_id: String,
    pub question_number: u32,
    pub question: String,

    #[serde(default)]
    pub options: Vec<QuestionOption>,

    pub correct_answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(default)]
    pub marks: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub description_images: Vec<String>,

    #[serde(default)]
    pub difficulty_level: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub created_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<TestQuestion>,
}

/// Champs du formulaire de création de test
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewTest {
    #[validate(length(min = 1, message = "Class name is required"))]
    pub class_name: String,

    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,

    pub module: String,

    #[validate(length(min = 1, message = "Test title is required"))]
    pub test_title: String,

    pub description: String,

    #[validate(range(min = 1, message = "A test needs at least one question"))]
    pub total_questions: u32,

    #[validate(range(min = 1, message = "Total marks must be positive"))]
    pub total_marks: u32,

    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: u32,

    pub difficulty_level: String,
    pub pass_mark: u32,
    pub validity_days: u32,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// Question soumise lors d'une création
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewQuestion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,

    pub question_number: u32,

    #[validate(length(min = 1, message = "Question text is required"))]
    pub question: String,

    #[validate(length(min = 2, message = "A question needs at least two options"))]
    pub options: Vec<QuestionOption>,

    #[validate(length(min = 1, message = "Correct answer is required"))]
    pub correct_answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    pub marks: u32,

    #[serde(default)]
    pub difficulty_level: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Payload de POST /tests/with-questions
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestWithQuestions {
    #[validate]
    pub test: NewTest,

    #[validate]
    pub questions: Vec<NewQuestion>,
}

/// Réponse de POST /tests/with-questions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestWithQuestionsCreated {
    pub message: String,
    pub test_id: String,
    pub questions_count: u32,
}

/// Mise à jour partielle d'un test (PUT /tests/{id})
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct TestUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_marks: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_mark: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validity_days: Option<u32>,

    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Mise à jour partielle d'une question (PUT /test-questions/{id}),
/// lisible depuis un fichier JSON comme depuis le code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_number: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Les commandes de création en masse lisent ces payloads depuis un
    // fichier JSON, la réponse est ré-affichée telle quelle.
    #[test]
    fn bulk_payloads_read_from_json_files() {
        let payload: TestWithQuestions = serde_json::from_str(
            r#"{
                "test": {
                    "class_name": "12th",
                    "course": "Physics",
                    "subject": "Physics",
                    "module": "Optics",
                    "test_title": "Ray Optics Mock",
                    "description": "Chapter-wise mock",
                    "total_questions": 1,
                    "total_marks": 4,
                    "duration": 30,
                    "difficulty_level": "medium",
                    "pass_mark": 2,
                    "validity_days": 365,
                    "price": 49.0
                },
                "questions": [{
                    "question_number": 1,
                    "question": "What is the speed of light?",
                    "options": [
                        { "label": "A", "text": "3e8 m/s" },
                        { "label": "B", "text": "3e6 m/s" }
                    ],
                    "correct_answer": "A",
                    "marks": 4
                }]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.questions.len(), 1);

        let update: QuestionUpdate =
            serde_json::from_str(r#"{ "question": "Reworded?", "marks": 2 }"#).unwrap();
        assert_eq!(update.marks, Some(2));
    }

    #[test]
    fn combined_creation_response_round_trips_to_output() {
        let created = TestWithQuestionsCreated {
            message: "Test created with questions".to_string(),
            test_id: "t1".to_string(),
            questions_count: 1,
        };
        let rendered = serde_json::to_string_pretty(&created).unwrap();
        assert!(rendered.contains("\"test_id\": \"t1\""));
    }
}
