use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use crammaster_server::{
    app_state::AppState, config::Config, errors::AppError, handlers,
    middleware::RequestIdMiddleware,
};

fn cors(config: &Config) -> Cors {
    match &config.cors_allowed_origin {
        Some(origin) => Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header(),
        None => Cors::permissive(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config.clone());

    log::info!(
        "Starting CramMaster server on http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        let json_config = web::JsonConfig::default()
            .limit(config.max_syllabus_bytes)
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config)
            .wrap(cors(&config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
