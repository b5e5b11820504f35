use std::net::TcpListener;

use actix_files::Files;
use actix_web::dev::Server;
use actix_web::web;
use actix_web::web::Data;
use actix_web::App;
use actix_web::HttpServer;
use actix_web_lab::middleware::from_fn;
use tera::Tera;
use tracing_actix_web::TracingLogger;

use crate::configuration::Settings;
use crate::domain::StaffMailboxes;
use crate::email_client::EmailClient;
use crate::email_templates::EmailTemplates;
use crate::routes::about;
use crate::routes::careers;
use crate::routes::form_error_handler;
use crate::routes::health_check;
use crate::routes::home;
use crate::routes::json_error_handler;
use crate::routes::services;
use crate::routes::submit_service;
use crate::routes::submit_training;
use crate::routes::success;
use crate::security_headers::content_security_policy;

/// Wrapper for actix's `Server` with access to the bound port. Not to be
/// confused with actix's `App`!
pub struct Application {
    /// Left private; use `get_port` to access
    port: u16,
    server: Server,
}

impl Application {
    /// Bind the listener, load templates, build the Mailjet client, then hand
    /// everything to `run`
    pub async fn build(cfg: Settings) -> Result<Self, anyhow::Error> {
        let addr = format!("{}:{}", cfg.application.host, cfg.application.port);
        let listener = TcpListener::bind(addr)?;

        // if port 0 was requested, this is the port the OS actually assigned
        let port = listener.local_addr()?.port();

        let pages = Tera::new(&format!("{}/**/*.html", cfg.application.templates_dir))?;
        let email_templates = EmailTemplates::new()?;
        let email_client = cfg.email_client.client()?;

        let server = run(
            listener,
            email_client,
            cfg.mailboxes,
            pages,
            email_templates,
            cfg.application.public_dir,
            cfg.application.form_limit_bytes,
        )?;

        Ok(Self { port, server })
    }

    pub fn get_port(&self) -> u16 { self.port }

    /// Because this consumes `self`, this should be the final function call (or
    /// passed to `tokio::spawn`)
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> { self.server.await }
}

/// The server is not responsible for binding to an address, it only listens to
/// an already bound address.
///
/// Declares all endpoints. Anything that is not a route falls through to the
/// static files under `public_dir`. Inquiry bodies may be urlencoded or json,
/// up to `form_limit` bytes either way.
pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    staff: StaffMailboxes,
    pages: Tera,
    email_templates: EmailTemplates,
    public_dir: String,
    form_limit: usize,
) -> Result<Server, anyhow::Error> {
    // `Data` is an `Arc`; every worker gets a clone of the same client and
    // templates, none of which are mutated after this point
    let email_client = Data::new(email_client);
    let staff = Data::new(staff);
    let pages = Data::new(pages);
    let email_templates = Data::new(email_templates);

    // one `App` is built per worker, hence the closure
    let server = HttpServer::new(move || {
        App::new()
            .wrap(from_fn(content_security_policy))
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/about", web::get().to(about))
            .route("/careers", web::get().to(careers))
            .route("/services", web::get().to(services))
            .route("/success", web::get().to(success))
            .route("/health_check", web::get().to(health_check))
            .route("/training", web::post().to(submit_training))
            .route("/service", web::post().to(submit_service))
            // must come last, as it matches every path
            .service(Files::new("/", public_dir.clone()))
            // `Either` buffers the body before trying each encoding
            .app_data(web::PayloadConfig::new(form_limit))
            .app_data(
                web::FormConfig::default()
                    .limit(form_limit)
                    .error_handler(form_error_handler),
            )
            .app_data(
                web::JsonConfig::default()
                    .limit(form_limit)
                    .error_handler(json_error_handler),
            )
            .app_data(email_client.clone())
            .app_data(staff.clone())
            .app_data(pages.clone())
            .app_data(email_templates.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
