//! CRUD des tests et de leurs questions, y compris la création combinée
//! test + questions en un seul appel.

use validator::Validate;

use super::ApiClient;
use crate::error::AppResult;
use crate::models::{
    CreatedResponse, MessageResponse, NewQuestion, NewTest, QuestionUpdate, QuestionsResponse,
    TestItem, TestQuestion, TestResponse, TestUpdate, TestWithQuestions, TestWithQuestionsCreated,
    TestsResponse,
};

impl ApiClient {
    pub async fn list_tests(&self) -> AppResult<Vec<TestItem>> {
        let response: TestsResponse = self.get_json("/tests").await?;
        Ok(response.tests)
    }

    pub async fn get_test(&self, test_id: &str) -> AppResult<TestItem> {
        let response: TestResponse = self
            .get_json(&format!("/tests/{}", Self::path_segment(test_id)))
            .await?;
        Ok(response.test)
    }

    pub async fn create_test(&self, new_test: &NewTest, token: &str) -> AppResult<CreatedResponse> {
        new_test.validate()?;
        self.post_json("/tests", new_test, token).await
    }

    /// POST /tests/with-questions : crée le test et ses questions ensemble
    pub async fn create_test_with_questions(
        &self,
        payload: &TestWithQuestions,
        token: &str,
    ) -> AppResult<TestWithQuestionsCreated> {
        payload.validate()?;
        self.post_json("/tests/with-questions", payload, token).await
    }

    pub async fn update_test(
        &self,
        test_id: &str,
        update: &TestUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        update.validate()?;
        self.put_json(
            &format!("/tests/{}", Self::path_segment(test_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_test(&self, test_id: &str, token: &str) -> AppResult<MessageResponse> {
        self.delete_json(&format!("/tests/{}", Self::path_segment(test_id)), token)
            .await
    }

    /// Questions rattachées à un test
    pub async fn test_questions(&self, test_id: &str) -> AppResult<Vec<TestQuestion>> {
        let response: QuestionsResponse = self
            .get_json(&format!(
                "/test-questions/test/{}",
                Self::path_segment(test_id)
            ))
            .await?;
        Ok(response.questions)
    }

    pub async fn create_question(
        &self,
        question: &NewQuestion,
        token: &str,
    ) -> AppResult<CreatedResponse> {
        question.validate()?;
        self.post_json("/test-questions", question, token).await
    }

    pub async fn update_question(
        &self,
        question_id: &str,
        update: &QuestionUpdate,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.put_json(
            &format!("/test-questions/{}", Self::path_segment(question_id)),
            update,
            token,
        )
        .await
    }

    pub async fn delete_question(
        &self,
        question_id: &str,
        token: &str,
    ) -> AppResult<MessageResponse> {
        self.delete_json(
            &format!("/test-questions/{}", Self::path_segment(question_id)),
            token,
        )
        .await
    }
}
