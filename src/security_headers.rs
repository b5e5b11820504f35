use actix_web::body::MessageBody;
use actix_web::dev::ServiceRequest;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderValue;
use actix_web::http::header::CONTENT_SECURITY_POLICY;
use actix_web_lab::middleware::Next;

/// Sources the site is allowed to pull from: google fonts, recaptcha,
/// cloudinary images, and the one embedded youtube video.
pub const POLICY: &str = concat!(
    "default-src 'self' 'unsafe-inline' https://www.youtube.com/embed/m_YMxye5mEA https://www.google.com/recaptcha/api.js; ",
    "img-src 'self' 'unsafe-inline' https://fonts.googleapis.com/ https://res.cloudinary.com/; ",
    "style-src 'self' 'unsafe-inline' https://fonts.googleapis.com/; ",
    "font-src 'self' https://fonts.gstatic.com; ",
    "script-src 'self' https://www.google.com/recaptcha/ https://www.gstatic.com/recaptcha/ https://www.google.com/recaptcha/api.js; ",
    "worker-src 'none'; ",
    "frame-src 'self' 'unsafe-inline' https://www.google.com/recaptcha/ https://www.google.com/recaptcha/api.js; ",
    "media-src 'self' 'unsafe-inline' https://www.youtube.com/embed/m_YMxye5mEA; ",
    "block-all-mixed-content",
);

/// Attach `Content-Security-Policy` to every response, whatever produced it
/// (pages, redirects, static files, errors).
///
/// For more details, refer to the documentation for
/// `actix_web_lab::middleware::from_fn`
pub async fn content_security_policy(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let mut resp = next.call(req).await?;
    resp.headers_mut()
        .insert(CONTENT_SECURITY_POLICY, HeaderValue::from_static(POLICY));
    Ok(resp)
}
