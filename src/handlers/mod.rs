pub mod health_handler;
pub mod study_handler;

use actix_web::web;

pub use health_handler::health_check;
pub use study_handler::{
    create_session, delete_session, get_progress, get_session, get_topic_hints, get_topic_quiz,
    parse_syllabus, rebuild_session, submit_quiz_attempt,
};

/// Registers every route on the app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(parse_syllabus)
        .service(create_session)
        .service(get_session)
        .service(rebuild_session)
        .service(delete_session)
        .service(get_topic_quiz)
        .service(get_topic_hints)
        .service(submit_quiz_attempt)
        .service(get_progress);
}
