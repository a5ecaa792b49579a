use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::Question;
use crate::server::app::AppState;
use crate::server::pagination::paginate;

use super::categories::category_map;
use super::{ApiError, ApiResponse};

#[derive(Deserialize)]
struct PageQuery {
    page: Option<usize>,
}

#[derive(Deserialize)]
struct NewQuestion {
    question: Option<String>,
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionList {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct QuestionDeleted {
    success: bool,
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct QuestionCreated {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

#[derive(Serialize)]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i64>,
}

async fn retrieve_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<QuestionList>> {
    let all = questions::get_all_questions(&pool).await?;
    let current = paginate(&all, query.page.unwrap_or(1)).to_vec();
    if current.is_empty() {
        return Err(ApiError::BadRequest);
    }
    let categories = categories::get_all_categories(&pool).await?;
    Ok(Json(QuestionList {
        success: true,
        total_questions: all.len(),
        questions: current,
        categories: category_map(categories),
        current_category: None,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(question_id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<QuestionDeleted>> {
    questions::get_question_by_id(&pool, question_id)
        .await?
        .ok_or(ApiError::Unprocessable)?;
    questions::delete_question(&pool, question_id).await?;

    let remaining = questions::get_all_questions(&pool).await?;
    Ok(Json(QuestionDeleted {
        success: true,
        deleted: question_id,
        questions: paginate(&remaining, query.page.unwrap_or(1)).to_vec(),
        total_questions: remaining.len(),
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
    Json(body): Json<NewQuestion>,
) -> ApiResponse<Json<QuestionCreated>> {
    let question = body.question.ok_or(ApiError::Unprocessable)?;
    let answer = body.answer.ok_or(ApiError::Unprocessable)?;
    let difficulty = body.difficulty.ok_or(ApiError::Unprocessable)?;
    let category = body.category.ok_or(ApiError::Unprocessable)?;

    let id = questions::create_question(&pool, &question, &answer, category, difficulty).await?;
    tracing::info!("created question {id}");

    let all = questions::get_all_questions(&pool).await?;
    Ok(Json(QuestionCreated {
        success: true,
        created: id,
        questions: paginate(&all, query.page.unwrap_or(1)).to_vec(),
        total_questions: all.len(),
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    Json(body): Json<SearchBody>,
) -> ApiResponse<Json<SearchResults>> {
    let term = match body.search_term {
        Some(term) if !term.is_empty() => term,
        _ => return Err(ApiError::NotFound),
    };
    let results = questions::search_questions(&pool, &term).await?;
    Ok(Json(SearchResults {
        success: true,
        total_questions: results.len(),
        questions: results,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(retrieve_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
