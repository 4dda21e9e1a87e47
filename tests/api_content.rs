//! Tests des CRUD JSON : notifications, actualités, vidéos YouTube,
//! bandeau défilant, CGU, contact et tests avec questions.

use edutech_admin::models::{
    ContactUpdate, NewNotification, NewQuestion, NewSliderText, NewTest, NewYouTubeVideo,
    QuestionOption, SliderTextUpdate, TestWithQuestions,
};
use edutech_admin::{ApiClient, AppError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::with_base_url(&server.uri(), 5).unwrap()
}

#[tokio::test]
async fn notification_create_serializes_type_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/notifications"))
        .and(body_json(json!({
            "title": "Exam schedule",
            "message": "Mock tests start Monday",
            "type": "announcement",
            "target_audience": "all"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Notification created",
            "id": "n1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let notification = NewNotification {
        title: "Exam schedule".to_string(),
        message: "Mock tests start Monday".to_string(),
        kind: "announcement".to_string(),
        target_audience: "all".to_string(),
    };
    let response = client(&server)
        .create_notification(&notification, "admin-token-1")
        .await
        .unwrap();
    assert_eq!(response.id, "n1");
}

#[tokio::test]
async fn youtube_create_requires_a_parsable_video_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let video = NewYouTubeVideo {
        title: "Orientation".to_string(),
        youtube_url: "https://example.com/watch?v=abc".to_string(),
        description: None,
    };
    let err = client(&server)
        .create_youtube_video(&video, "admin-token-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn youtube_create_accepts_short_links() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/youtube"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Video added",
            "id": "v1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let video = NewYouTubeVideo {
        title: "Orientation".to_string(),
        youtube_url: "https://youtu.be/dQw4w9WgXcQ".to_string(),
        description: Some("Welcome session".to_string()),
    };
    assert!(client(&server)
        .create_youtube_video(&video, "admin-token-1")
        .await
        .is_ok());
}

#[tokio::test]
async fn slider_update_only_sends_provided_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/text-slider/s1"))
        .and(body_json(json!({ "is_active": false })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "message": "Slider text updated" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let update = SliderTextUpdate {
        text: None,
        is_active: Some(false),
    };
    let response = client(&server)
        .update_slider_text("s1", &update, "admin-token-1")
        .await
        .unwrap();
    assert_eq!(response.message, "Slider text updated");
}

#[tokio::test]
async fn slider_create_rejects_empty_text() {
    let server = MockServer::start().await;
    let item = NewSliderText {
        text: String::new(),
    };
    let err = client(&server)
        .create_slider_text(&item, "admin-token-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn active_terms_are_unwrapped_from_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/terms-conditions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "terms": {
                "_id": "terms1",
                "content": "Usage terms...",
                "effective_date": "2025-01-01",
                "last_modified": "2025-06-01",
                "is_active": true,
                "created_at": "2025-01-01T00:00:00",
                "updated_at": "2025-06-01T00:00:00"
            }
        })))
        .mount(&server)
        .await;

    let terms = client(&server).get_active_terms().await.unwrap();
    assert_eq!(terms.id, "terms1");
    assert!(terms.is_active);
}

#[tokio::test]
async fn contact_update_validates_phone_and_website() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let update = ContactUpdate {
        phone: Some("012345".to_string()),
        ..ContactUpdate::default()
    };
    let err = client(&server)
        .update_contact("contact1", &update, "admin-token-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    let update = ContactUpdate {
        website: Some("globaledutechlearn.com".to_string()),
        ..ContactUpdate::default()
    };
    let err = client(&server)
        .update_contact("contact1", &update, "admin-token-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

fn sample_test() -> NewTest {
    NewTest {
        class_name: "12th".to_string(),
        course: "Physics".to_string(),
        sub_category: Some("CBSE".to_string()),
        subject: "Physics".to_string(),
        module: "Optics".to_string(),
        test_title: "Ray Optics Mock".to_string(),
        description: "Chapter-wise mock".to_string(),
        total_questions: 2,
        total_marks: 8,
        duration: 30,
        difficulty_level: "medium".to_string(),
        pass_mark: 4,
        validity_days: 365,
        price: 49.0,
    }
}

fn sample_question(number: u32) -> NewQuestion {
    NewQuestion {
        test_id: None,
        question_number: number,
        question: format!("Question {}", number),
        options: vec![
            QuestionOption {
                label: "A".to_string(),
                text: "First".to_string(),
            },
            QuestionOption {
                label: "B".to_string(),
                text: "Second".to_string(),
            },
        ],
        correct_answer: "A".to_string(),
        explanation: None,
        marks: 4,
        difficulty_level: "medium".to_string(),
        tags: vec![],
    }
}

#[tokio::test]
async fn test_with_questions_posts_combined_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/tests/with-questions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Test created with questions",
            "test_id": "t1",
            "questions_count": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = TestWithQuestions {
        test: sample_test(),
        questions: vec![sample_question(1), sample_question(2)],
    };
    let response = client(&server)
        .create_test_with_questions(&payload, "admin-token-1")
        .await
        .unwrap();
    assert_eq!(response.test_id, "t1");
    assert_eq!(response.questions_count, 2);
}

#[tokio::test]
async fn question_with_single_option_fails_validation() {
    let server = MockServer::start().await;
    let mut question = sample_question(1);
    question.options.truncate(1);

    let err = client(&server)
        .create_question(&question, "admin-token-1")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}
