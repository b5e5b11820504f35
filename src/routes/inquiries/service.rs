use actix_web::web;
use actix_web::HttpResponse;

use super::into_inquiry;
use super::submit;
use super::IntakeError;
use super::Submission;
use crate::domain::ServiceInquiry;
use crate::domain::StaffMailboxes;
use crate::email_client::EmailClient;
use crate::email_templates::EmailTemplates;

/// `POST /service`
///
/// Sent from the services page. Same flow as `submit_training`, except that
/// the staff summary goes to the info mailbox (with cc and bcc) and includes
/// the visitor's free-text message.
#[tracing::instrument(
    name = "Submitting service inquiry",
    skip(submission, email_client, staff, templates),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty,
        interest = tracing::field::Empty,
    )
)]
pub async fn submit_service(
    submission: Submission<ServiceInquiry>,
    email_client: web::Data<EmailClient>,
    staff: web::Data<StaffMailboxes>,
    templates: web::Data<EmailTemplates>,
) -> Result<HttpResponse, IntakeError> {
    let inquiry = into_inquiry(submission);
    let span = tracing::Span::current();
    span.record("submitter_email", tracing::field::display(&inquiry.email));
    span.record("submitter_name", tracing::field::display(&inquiry.first_name));
    span.record("interest", tracing::field::display(&inquiry.interest));

    submit(&inquiry, &email_client, &staff, &templates).await
}
