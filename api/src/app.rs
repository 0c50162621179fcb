//! Application factory
//!
//! Builds the Actix-web application around a shared `AppState`, so the
//! same wiring serves both the production binary and the integration
//! tests (which plug in the mock repository).

use actix_web::{
    error::InternalError,
    middleware::{Compat, Logger},
    web, App, HttpResponse,
};

use crate::dto::ErrorResponse;
use crate::middleware::cors::create_cors;
use crate::routes::users::{register::register, AppState};

use reg_core::repositories::AccountRepository;

/// Create and configure the application with all dependencies
pub fn create_app<R>(
    app_state: web::Data<AppState<R>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: AccountRepository + 'static,
{
    let cors = create_cors();

    // Malformed JSON bodies answer with the contract failure shape
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(ErrorResponse::new("Formato de petición inválido"));
        InternalError::from_response(err, response).into()
    });

    App::new()
        .app_data(app_state)
        .app_data(json_config)
        // Compat keeps the response body type at BoxBody through the
        // middleware stack, matching the declared return type
        .wrap(Compat::new(Logger::default()))
        .wrap(Compat::new(cors))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API routes
        .service(
            web::scope("/api").route("/users", web::post().to(register::<R>)),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "user-registry-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback handler for unknown routes
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Recurso no encontrado"))
}
