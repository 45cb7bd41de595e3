//! Pre-built single-page frontend.
//!
//! Existing files are served as-is; any other GET receives `index.html` so the
//! client-side router can take over.

use std::path::Path;

use actix_files::{Files, NamedFile};
use actix_web::dev::{fn_service, ServiceRequest, ServiceResponse};
use actix_web::{web, HttpResponse};

use crate::ErrorResponse;

pub const INDEX_FILE: &str = "index.html";

/// Mount the frontend. Must be registered after every other route.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    if !static_dir.is_dir() {
        log::warn!(
            "Frontend directory {} not found, catch-all route will answer 404",
            static_dir.display()
        );
        cfg.default_service(web::route().to(frontend_missing));
        return;
    }

    let index = static_dir.join(INDEX_FILE);
    cfg.service(
        Files::new("/", static_dir)
            .index_file(INDEX_FILE)
            .default_handler(fn_service(move |req: ServiceRequest| {
                let index = index.clone();
                async move {
                    let (req, _) = req.into_parts();
                    let file = NamedFile::open_async(&index).await?;
                    let res = file.into_response(&req);
                    Ok(ServiceResponse::new(req, res))
                }
            })),
    );
}

/// Serve documents written by the local storage backend under `/files`.
pub fn configure_generated_files(cfg: &mut web::ServiceConfig, dir: &Path) {
    cfg.service(Files::new("/files", dir));
}

async fn frontend_missing() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::not_found("Frontend is not available"))
}
