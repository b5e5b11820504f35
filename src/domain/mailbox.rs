use serde::Deserialize;

/// An address plus an optional display name. Addresses are never parsed:
/// whatever the visitor typed is what Mailjet receives.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Mailbox {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

/// The fixed addresses that staff notifications go to (and that
/// acknowledgments are sent from). Loaded from the `mailboxes` section of the
/// configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct StaffMailboxes {
    /// Sender and recipient of everything about training
    pub training: Mailbox,
    /// Sender and recipient of everything about services
    pub info: Mailbox,
    /// Copied on service notifications
    pub cc: Mailbox,
    /// Blind-copied on service notifications
    pub bcc: Mailbox,
}

impl Default for StaffMailboxes {
    fn default() -> Self {
        Self {
            training: Mailbox::named("training@fortisureit.com", "Fortisure"),
            info: Mailbox::named("info@fortisureit.com", "Info / Service"),
            cc: Mailbox::named("rob.kozak@fortisureit.com", "Rob Kozak"),
            bcc: Mailbox::named("scott.arnold@fortisureit.com", "Scott Arnold"),
        }
    }
}
