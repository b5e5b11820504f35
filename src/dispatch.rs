use crate::domain::Contact;
use crate::domain::OutboundMessage;
use crate::email_client::EmailClient;
use crate::email_client::EmailError;

/// How each outbound call for one submission went. Every field is set, since
/// no call is abandoned because another one failed.
pub struct DispatchReport {
    pub acknowledgment: Result<(), EmailError>,
    pub notification: Result<(), EmailError>,
    pub contact: Result<(), EmailError>,
}

/// Send both messages and upsert the contact concurrently, and wait for all
/// three to settle.
#[tracing::instrument(name = "Dispatching submission", skip_all)]
pub async fn dispatch(
    email_client: &EmailClient,
    acknowledgment: &OutboundMessage,
    notification: &OutboundMessage,
    contact: &Contact,
) -> DispatchReport {
    // `join!` (unlike `try_join!`) keeps polling the other branches when one of
    // them fails
    let (acknowledgment, notification, contact) = tokio::join!(
        email_client.send_email(acknowledgment),
        email_client.send_email(notification),
        email_client.upsert_contact(contact),
    );

    DispatchReport {
        acknowledgment,
        notification,
        contact,
    }
}
