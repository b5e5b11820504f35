/// Entry for the Mailjet contact list. Created alongside every inquiry;
/// repeated submissions from the same address are fine (see
/// `EmailClient::upsert_contact`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub name: String,
}
