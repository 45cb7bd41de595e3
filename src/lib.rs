use actix_cors::Cors;
use actix_web::middleware::{Compress, Logger};
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod frontend;
pub mod number_words;
pub mod pdf;
pub mod quotation;
pub mod state;
pub mod storage;

pub use crate::config::{AppConfig, StorageSettings};
pub use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::quotation::handlers::generate_pdf,
        crate::quotation::handlers::health,
    ),
    components(
        schemas(
            quotation::models::QuotationRequest,
            quotation::models::QuotationItem,
            quotation::models::SubItem,
            quotation::models::GeneratePdfResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Quotation Service", description = "Quotation PDF generation."),
        (name = "Health", description = "Liveness probe.")
    )
)]
pub struct ApiDoc;

/// API routes, without middleware or the frontend catch-all.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.app_data(quotation::handlers::json_config())
        .service(
            web::resource("/generate-pdf")
                .route(web::post().to(quotation::handlers::generate_pdf)),
        )
        .service(
            web::scope("/api").service(
                web::resource("/generate-pdf")
                    .route(web::post().to(quotation::handlers::generate_pdf)),
            ),
        )
        .service(web::resource("/health").route(web::get().to(quotation::handlers::health)));
}

fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}

pub async fn run() -> std::io::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration, please check your .env file. Error: {}", e);
            std::process::exit(1);
        }
    };

    let generated_dir = match &config.storage {
        StorageSettings::Local { dir, .. } => {
            std::fs::create_dir_all(dir)?;
            Some(dir.clone())
        }
        StorageSettings::S3(_) => None,
    };

    let app_state = web::Data::new(AppState::new_with_config(&config).await);

    let prometheus = PrometheusMetricsBuilder::new("quotation_pdf_server")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("failed to create Prometheus metrics: {}", e)))?;

    let static_dir = config.static_dir.clone();
    let allowed_origins = config.cors_allowed_origins.clone();

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(prometheus.clone())
            .wrap(build_cors(&allowed_origins))
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure_api)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .configure(|cfg| {
                if let Some(dir) = &generated_dir {
                    frontend::configure_generated_files(cfg, dir);
                }
                frontend::configure(cfg, &static_dir);
            })
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_constructors() {
        assert_eq!(ErrorResponse::not_found("x").error, "NotFound");
        assert_eq!(ErrorResponse::bad_request("x").error, "BadRequest");
        assert_eq!(ErrorResponse::internal_error("x").error, "InternalServerError");
    }

    #[test]
    fn test_openapi_lists_generate_pdf() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/generate-pdf"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
