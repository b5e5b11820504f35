use actix_web::HttpResponse;

/// `GET /health_check`
///
/// For uptime checks; always 200 with an empty body.
pub async fn health_check() -> HttpResponse { HttpResponse::Ok().finish() }
