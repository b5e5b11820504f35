use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use tera::Context;
use tera::Tera;

use crate::utils::error_500;

/// A page template, and the two values the layout needs: the `<title>` and
/// the page-specific stylesheet under `/css`.
struct Page {
    template: &'static str,
    title: &'static str,
    style: &'static str,
}

const HOME: Page = Page {
    template: "home.html",
    title: "Fortisure IT",
    style: "home.css",
};

const ABOUT: Page = Page {
    template: "about.html",
    title: "About",
    style: "about.css",
};

const CAREERS: Page = Page {
    template: "careers.html",
    title: "Career Development",
    style: "careers.css",
};

const SERVICES: Page = Page {
    template: "services.html",
    title: "Services",
    style: "services.css",
};

const SUCCESS: Page = Page {
    template: "success.html",
    title: "Thank You",
    style: "success.css",
};

fn render(
    tera: &Tera,
    page: &Page,
) -> Result<HttpResponse, actix_web::Error> {
    let mut ctx = Context::new();
    ctx.insert("title", page.title);
    ctx.insert("style", page.style);

    let body = tera.render(page.template, &ctx).map_err(|e| {
        tracing::error!(
            error.cause_chain=?e,
            error.message=%e,
            "failed to render {}",
            page.template
        );
        error_500(e)
    })?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

/// `GET /`
pub async fn home(tera: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render(&tera, &HOME)
}

/// `GET /about`
pub async fn about(tera: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render(&tera, &ABOUT)
}

/// `GET /careers`
///
/// Hosts the training form (`POST /training`).
pub async fn careers(tera: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render(&tera, &CAREERS)
}

/// `GET /services`
///
/// Hosts the service form (`POST /service`).
pub async fn services(tera: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render(&tera, &SERVICES)
}

/// `GET /success`
///
/// Where both forms redirect to once their emails have gone out.
pub async fn success(tera: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render(&tera, &SUCCESS)
}
