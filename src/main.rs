#[actix_web::main]
async fn main() -> std::io::Result<()> {
    quotation_pdf_server::run().await
}
