pub mod cache;
pub mod handlers;
pub mod models;
pub mod names;
pub mod parser;
pub mod query;
pub mod rejections;
pub mod source;

use axum::Router;

use crate::query::QuestionService;

#[derive(Clone)]
pub struct AppState {
    pub questions: QuestionService,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::questions::routes())
        .with_state(state)
}
