mod service;
mod training;
use std::fmt::Debug;

use actix_web::error::JsonPayloadError;
use actix_web::error::UrlencodedError;
use actix_web::http::StatusCode;
use actix_web::web;
use actix_web::Either;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::ResponseError;
use anyhow::Context;
pub use service::*;
pub use training::*;

use crate::dispatch::dispatch;
use crate::dispatch::DispatchReport;
use crate::domain::Inquiry;
use crate::domain::StaffMailboxes;
use crate::email_client::EmailClient;
use crate::email_client::EmailError;
use crate::email_templates::EmailTemplates;
use crate::utils::error_chain_fmt;
use crate::utils::redirect;

/// Everything that can go wrong between receiving a form and redirecting the
/// visitor. Form fields themselves are never validated; `Validation` only
/// covers a body that cannot be decoded at all.
#[derive(thiserror::Error)]
pub enum IntakeError {
    #[error("Invalid form submission: {0}")]
    Validation(String),
    #[error("The {failed} email could not be sent")]
    PartialDispatch {
        failed: &'static str,
        #[source]
        source: EmailError,
    },
    #[error("Neither email could be sent")]
    DispatchFailed {
        #[source]
        acknowledgment: EmailError,
        notification: EmailError,
    },
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for IntakeError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for IntakeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            // the failure is Mailjet's, not ours
            Self::PartialDispatch { .. } | Self::DispatchFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// An inquiry posted either as a regular html form or as json. The form is
/// tried first; if neither decodes, the form's error is the one reported.
pub type Submission<T> = Either<web::Form<T>, web::Json<T>>;

fn into_inquiry<T>(submission: Submission<T>) -> T {
    match submission {
        Either::Left(form) => form.into_inner(),
        Either::Right(json) => json.into_inner(),
    }
}

/// Registered through `web::FormConfig`, so that an undecodable body on
/// either form is reported as `IntakeError::Validation`.
pub fn form_error_handler(
    err: UrlencodedError,
    _req: &HttpRequest,
) -> actix_web::Error {
    IntakeError::Validation(err.to_string()).into()
}

/// `web::JsonConfig` counterpart of `form_error_handler`
pub fn json_error_handler(
    err: JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    IntakeError::Validation(err.to_string()).into()
}

/// Collapse a `DispatchReport` into a single outcome. Only the two emails
/// count; a failed contact upsert is logged and otherwise ignored, since the
/// visitor can do nothing about it.
pub fn settle(report: DispatchReport) -> Result<(), IntakeError> {
    if let Err(e) = &report.contact {
        tracing::warn!(
            error.cause_chain=?e,
            error.message=%e,
            "could not add submitter to contact list"
        );
    }

    match (report.acknowledgment, report.notification) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(source), Ok(())) => Err(IntakeError::PartialDispatch {
            failed: "acknowledgment",
            source,
        }),
        (Ok(()), Err(source)) => Err(IntakeError::PartialDispatch {
            failed: "notification",
            source,
        }),
        (Err(acknowledgment), Err(notification)) => {
            // only `acknowledgment` makes it into the error chain
            tracing::error!(
                error.cause_chain=?notification,
                error.message=%notification,
                "notification failed too"
            );
            Err(IntakeError::DispatchFailed {
                acknowledgment,
                notification,
            })
        }
    }
}

/// Shared by both form handlers: build the messages, send them, wait for
/// every outbound call, then respond exactly once.
async fn submit(
    inquiry: &impl Inquiry,
    email_client: &EmailClient,
    staff: &StaffMailboxes,
    templates: &EmailTemplates,
) -> Result<HttpResponse, IntakeError> {
    let acknowledgment = inquiry
        .acknowledgment(staff, templates)
        .context("Failed to render acknowledgment email")?;
    let notification = inquiry.notification(staff);
    let contact = inquiry.contact();

    let report = dispatch(email_client, &acknowledgment, &notification, &contact).await;
    settle(report).map_err(|e| {
        tracing::error!(
            error.cause_chain=?e,
            error.message=%e,
            "submission was not fully dispatched"
        );
        e
    })?;

    Ok(redirect("/success"))
}
