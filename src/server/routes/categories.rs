use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::queries::{categories, questions};
use crate::db::{Category, Question};
use crate::server::app::AppState;

use super::{ApiError, ApiResponse};

#[derive(Serialize)]
struct CategoryList {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestions {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

// The wire format for categories is an id -> type map, not a list.
pub(super) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

async fn retrieve_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoryList>> {
    let categories = categories::get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryList {
        success: true,
        total_categories: categories.len(),
        categories: category_map(categories),
    }))
}

async fn retrieve_questions_by_category(
    State(pool): State<SqlitePool>,
    Path(category_id): Path<i64>,
) -> ApiResponse<Json<CategoryQuestions>> {
    let questions = questions::get_questions_for_category(&pool, category_id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoryQuestions {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category_id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(retrieve_categories))
        .route(
            "/categories/{id}/questions",
            get(retrieve_questions_by_category),
        )
        .with_state(state)
}
