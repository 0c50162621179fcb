use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use reg_api::app::create_app;
use reg_api::routes::users::AppState;
use reg_core::services::password::PasswordHasher;
use reg_core::services::registration::RegistrationService;
use reg_core::services::token::{TokenService, TokenServiceConfig};
use reg_core::services::validation::{EmailValidator, PasswordValidator};
use reg_infra::database::connection::create_pool;
use reg_infra::MySqlAccountRepository;
use reg_shared::{DatabaseConfig, JwtConfig, ServerConfig, ValidationConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting User Registry API Server");

    // Load configuration
    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let jwt_config = JwtConfig::from_env();
    let validation_config = ValidationConfig::from_env();

    if jwt_config.is_using_default_secret() {
        log::warn!("JWT_SECRET is not set; using the development default");
    }

    // Configuration faults fail startup loudly instead of surfacing per request
    let email_validator = EmailValidator::new(&validation_config.email_pattern)
        .unwrap_or_else(|e| panic!("Invalid VALIDATION_EMAIL_PATTERN: {}", e));
    let password_validator = PasswordValidator::new(&validation_config.password_pattern)
        .unwrap_or_else(|e| panic!("Invalid VALIDATION_PASSWORD_PATTERN: {}", e));
    let token_service = TokenService::new(TokenServiceConfig::from(jwt_config))
        .unwrap_or_else(|e| panic!("Token service configuration fault: {}", e));

    // Wire up persistence and services
    let pool = create_pool(&database_config)
        .await
        .unwrap_or_else(|e| panic!("Database connection failed: {}", e));
    let repository = Arc::new(MySqlAccountRepository::new(pool));

    let registration_service = Arc::new(RegistrationService::new(
        repository,
        PasswordHasher::new(),
        Arc::new(token_service),
    ));

    let app_state = web::Data::new(AppState {
        registration_service,
        email_validator,
        password_validator,
    });

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
