//! Backend for the Fortisure IT marketing site: templated pages, a fixed
//! content-security policy, and two contact forms that are forwarded to
//! Mailjet.

pub mod configuration;
pub mod dispatch;
pub mod domain;
pub mod email_client;
pub mod email_templates;
pub mod routes;
pub mod security_headers;
pub mod startup;
pub mod telemetry;
pub mod utils;
