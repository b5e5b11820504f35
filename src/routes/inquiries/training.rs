use actix_web::web;
use actix_web::HttpResponse;

use super::into_inquiry;
use super::submit;
use super::IntakeError;
use super::Submission;
use crate::domain::StaffMailboxes;
use crate::domain::TrainingInquiry;
use crate::email_client::EmailClient;
use crate::email_templates::EmailTemplates;

/// `POST /training`
///
/// Sent from the careers page. Emails an acknowledgment to the visitor and a
/// summary to the training mailbox, adds the visitor to the contact list,
/// then redirects to `/success`.
///
/// # Request example
///
/// ```sh
///     curl -v --data 'firstName=Ann&lastName=Lee&email=ann%40example.com&phone=555-1000&school=Acme+U' http://127.0.0.1:8080/training
///     curl -v --json '{"firstName": "Ann", "email": "ann@example.com"}' http://127.0.0.1:8080/training
/// ```
#[tracing::instrument(
    name = "Submitting training inquiry",
    skip(submission, email_client, staff, templates),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty,
    )
)]
pub async fn submit_training(
    submission: Submission<TrainingInquiry>,
    email_client: web::Data<EmailClient>,
    staff: web::Data<StaffMailboxes>,
    templates: web::Data<EmailTemplates>,
) -> Result<HttpResponse, IntakeError> {
    let inquiry = into_inquiry(submission);
    let span = tracing::Span::current();
    span.record("submitter_email", tracing::field::display(&inquiry.email));
    span.record("submitter_name", tracing::field::display(inquiry.full_name()));

    submit(&inquiry, &email_client, &staff, &templates).await
}
