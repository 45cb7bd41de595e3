use actix_web::{web, HttpResponse, Responder};
use log::{error, info, warn};

use super::models::{GeneratePdfResponse, QuotationRequest};
use super::service::generate_quotation_pdf;
use crate::state::AppState;
use crate::ErrorResponse;

#[utoipa::path(
    tag = "Quotation Service",
    post,
    path = "/generate-pdf",
    request_body = QuotationRequest,
    responses(
        (status = 200, description = "PDF generated and uploaded", body = GeneratePdfResponse),
        (status = 400, description = "Invalid quotation data", body = GeneratePdfResponse),
        (status = 500, description = "Rendering or upload failed", body = GeneratePdfResponse)
    )
)]
pub async fn generate_pdf(
    req: web::Json<QuotationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!("Executing generate_pdf handler");

    match generate_quotation_pdf(&data, &req).await {
        Ok(generated) => HttpResponse::Ok().json(GeneratePdfResponse::ok(generated.url)),
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                error!("Error generating PDF: {}", e);
            } else {
                warn!("Rejected quotation request: {}", e);
            }
            HttpResponse::build(status).json(GeneratePdfResponse::failed(e.to_string()))
        }
    }
}

#[utoipa::path(
    tag = "Health",
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor settings: malformed bodies answer with an `ErrorResponse`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1 << 20)
        .error_handler(|err, _req| {
            let message = err.to_string();
            warn!("Rejected malformed JSON body: {}", message);
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(ErrorResponse::bad_request(&message)),
            )
            .into()
        })
}
