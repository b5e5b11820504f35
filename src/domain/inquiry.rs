use super::Contact;
use super::OutboundMessage;
use super::StaffMailboxes;
use crate::email_templates::EmailTemplates;

/// A submitted form that turns into exactly two emails and one contact-list
/// entry: an acknowledgment for the visitor, and a notification for staff.
///
/// Nothing here is validated; empty fields flow into the messages as empty
/// strings, and it is up to Mailjet to reject an empty address.
pub trait Inquiry {
    /// Sent to the visitor. Rendered from an html template, which escapes
    /// every interpolated field.
    fn acknowledgment(
        &self,
        staff: &StaffMailboxes,
        templates: &EmailTemplates,
    ) -> Result<OutboundMessage, tera::Error>;

    /// Sent to staff, listing every submitted field (html-escaped).
    fn notification(
        &self,
        staff: &StaffMailboxes,
    ) -> OutboundMessage;

    fn contact(&self) -> Contact;
}

/// Shorthand for `htmlescape::encode_minimal`, used when user input is
/// interpolated into a hand-written html body
pub(crate) fn escape(field: &str) -> String { htmlescape::encode_minimal(field) }
