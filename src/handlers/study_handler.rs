use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{SubmitQuizAttemptRequest, SyllabusRequest},
};

#[post("/api/parse")]
pub async fn parse_syllabus(
    state: web::Data<AppState>,
    request: web::Json<SyllabusRequest>,
) -> Result<HttpResponse, AppError> {
    let parsed = state.study_session_service.preview(request.into_inner())?;
    Ok(HttpResponse::Ok().json(parsed))
}

#[post("/api/sessions")]
pub async fn create_session(
    state: web::Data<AppState>,
    request: web::Json<SyllabusRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .study_session_service
        .create_session(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(session))
}

#[get("/api/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let session = state.study_session_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[put("/api/sessions/{id}/syllabus")]
pub async fn rebuild_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SyllabusRequest>,
) -> Result<HttpResponse, AppError> {
    let session = state
        .study_session_service
        .rebuild_session(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(session))
}

#[delete("/api/sessions/{id}")]
pub async fn delete_session(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = state.study_session_service.delete_session(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/sessions/{id}/quiz/{topic_index}")]
pub async fn get_topic_quiz(
    state: web::Data<AppState>,
    path: web::Path<(String, usize)>,
) -> Result<HttpResponse, AppError> {
    let (id, topic_index) = path.into_inner();
    let quiz = state.study_session_service.get_quiz(&id, topic_index).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/api/sessions/{id}/hints/{topic_index}")]
pub async fn get_topic_hints(
    state: web::Data<AppState>,
    path: web::Path<(String, usize)>,
) -> Result<HttpResponse, AppError> {
    let (id, topic_index) = path.into_inner();
    let hints = state.study_session_service.get_hints(&id, topic_index).await?;
    Ok(HttpResponse::Ok().json(hints))
}

#[post("/api/sessions/{id}/quiz/{topic_index}/attempts")]
pub async fn submit_quiz_attempt(
    state: web::Data<AppState>,
    path: web::Path<(String, usize)>,
    request: web::Json<SubmitQuizAttemptRequest>,
) -> Result<HttpResponse, AppError> {
    let (id, topic_index) = path.into_inner();
    let attempt = state
        .study_session_service
        .submit_attempt(&id, topic_index, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(attempt))
}

#[get("/api/sessions/{id}/progress")]
pub async fn get_progress(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let progress = state.study_session_service.get_progress(&id).await?;
    Ok(HttpResponse::Ok().json(progress))
}
