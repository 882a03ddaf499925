use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::{names, rejections::AppError, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUESTIONS_URL, get(sample))
        .route(names::ALL_QUESTIONS_URL, get(all_shuffled))
        .route(names::RANDOM_QUESTION_URL, get(random))
        .route(names::BY_LICENSE_URL, get(by_license))
}

async fn sample(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let questions = state.questions.sample().await?;
    Ok(Json(questions))
}

async fn all_shuffled(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let questions = state.questions.all_shuffled().await?;
    Ok(Json(questions))
}

async fn random(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let question = state.questions.random_parsed().await?;
    Ok(Json(question))
}

async fn by_license(
    State(state): State<AppState>,
    Path(license_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let questions = state.questions.by_license(&license_type).await?;
    Ok(Json(questions))
}
