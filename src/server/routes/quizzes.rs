use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::questions;
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::quiz::pick_question;
use crate::telemetry::QUIZ_QUESTION_CNTR;

use super::{ApiError, ApiResponse};

/// Category id 0 stands for "all categories".
const ALL_CATEGORIES: i64 = 0;

// Clients send `{id, type}`; only the id drives selection.
#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<i64>>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
}

async fn start_quiz(
    State(pool): State<SqlitePool>,
    Json(body): Json<QuizRequest>,
) -> ApiResponse<Json<QuizResponse>> {
    let category = body.quiz_category.ok_or(ApiError::Unprocessable)?;
    let previous = body.previous_questions.ok_or(ApiError::Unprocessable)?;

    let candidates = if category.id == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category.id).await?
    };

    let question = pick_question(candidates, &previous);
    if let Some(question) = &question {
        let label = question.category.to_string();
        QUIZ_QUESTION_CNTR.with_label_values(&[label.as_str()]).inc();
    }
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(start_quiz))
        .with_state(state)
}
