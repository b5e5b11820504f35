use super::Mailbox;

/// One email, ready to be handed to `EmailClient::send_email`. Built fresh
/// from a submission and dropped once sent.
///
/// Empty `cc`/`bcc` are left out of the API request entirely.
#[derive(Clone, Debug)]
pub struct OutboundMessage {
    pub from: Mailbox,
    pub to: Vec<Mailbox>,
    pub cc: Vec<Mailbox>,
    pub bcc: Vec<Mailbox>,
    pub subject: String,
    pub html_body: String,
    pub text_body: Option<String>,
}

impl OutboundMessage {
    /// Comma-separated `to` addresses, for logging
    pub fn recipients(&self) -> String {
        self.to
            .iter()
            .map(|m| m.email.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
