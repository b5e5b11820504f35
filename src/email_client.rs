use std::fmt::Debug;
use std::time::Duration;

use reqwest::Client;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use secrecy::Secret;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::Contact;
use crate::domain::Mailbox;
use crate::domain::OutboundMessage;
use crate::utils::error_chain_fmt;

/// Mailjet's error code for "a contact with this email already exists"
const CONTACT_EXISTS: &str = "MJ18";

#[derive(thiserror::Error)]
pub enum EmailError {
    #[error("Could not reach the email API")]
    Transport(#[from] reqwest::Error),
    #[error("Email API responded with {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("Email API did not accept the message to {recipients} (status: {status})")]
    NotAccepted { recipients: String, status: String },
    #[error("Email API sent a response we could not read")]
    InvalidResponse(#[source] reqwest::Error),
}

impl Debug for EmailError {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Client for the Mailjet HTTP API. Built once at startup and shared by all
/// workers (via `web::Data`), so that the underlying connection pool is
/// reused.
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    api_key_public: Secret<String>,
    api_key_private: Secret<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    messages: Vec<MessagePayload<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct MessagePayload<'a> {
    from: MailboxPayload<'a>,
    to: Vec<MailboxPayload<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    cc: Vec<MailboxPayload<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    bcc: Vec<MailboxPayload<'a>>,
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_part: Option<&'a str>,
    #[serde(rename = "HTMLPart")]
    html_part: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct MailboxPayload<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

impl<'a> From<&'a Mailbox> for MailboxPayload<'a> {
    fn from(mailbox: &'a Mailbox) -> Self {
        Self {
            email: &mailbox.email,
            name: mailbox.name.as_deref(),
        }
    }
}

impl<'a> From<&'a OutboundMessage> for MessagePayload<'a> {
    fn from(message: &'a OutboundMessage) -> Self {
        Self {
            from: (&message.from).into(),
            to: message.to.iter().map(Into::into).collect(),
            cc: message.cc.iter().map(Into::into).collect(),
            bcc: message.bcc.iter().map(Into::into).collect(),
            subject: &message.subject,
            text_part: message.text_body.as_deref(),
            html_part: &message.html_body,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ContactRequest<'a> {
    email: &'a str,
    name: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailResponse {
    #[serde(default)]
    messages: Vec<MessageResult>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MessageResult {
    status: String,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        api_key_public: Secret<String>,
        api_key_private: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            api_key_public,
            api_key_private,
        })
    }

    /// `POST /v3.1/send` with a single-message batch. Succeeds only if the
    /// API answers 2xx -and- reports the message as `success`.
    #[tracing::instrument(
        name = "Sending email",
        skip_all,
        fields(
            subject = %message.subject,
            recipients = %message.recipients(),
        )
    )]
    pub async fn send_email(
        &self,
        message: &OutboundMessage,
    ) -> Result<(), EmailError> {
        let url = format!("{}/v3.1/send", self.base_url);
        let body = SendEmailRequest {
            messages: vec![message.into()],
        };

        let resp = self
            .http_client
            .post(&url)
            .basic_auth(
                self.api_key_public.expose_secret(),
                Some(self.api_key_private.expose_secret()),
            )
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(EmailError::Rejected { status, body });
        }

        let result: SendEmailResponse = resp.json().await.map_err(EmailError::InvalidResponse)?;
        match result.messages.iter().find(|m| m.status != "success") {
            Some(m) => Err(EmailError::NotAccepted {
                recipients: message.recipients(),
                status: m.status.clone(),
            }),
            None => Ok(()),
        }
    }

    /// `POST /v3/REST/contact`. The API has no real upsert; creating a contact
    /// that already exists is answered with a 400 (`MJ18`), which we treat as
    /// success since the contact is present either way.
    #[tracing::instrument(name = "Upserting contact", skip_all, fields(contact_email = %contact.email))]
    pub async fn upsert_contact(
        &self,
        contact: &Contact,
    ) -> Result<(), EmailError> {
        let url = format!("{}/v3/REST/contact", self.base_url);
        let body = ContactRequest {
            email: &contact.email,
            name: &contact.name,
        };

        let resp = self
            .http_client
            .post(&url)
            .basic_auth(
                self.api_key_public.expose_secret(),
                Some(self.api_key_private.expose_secret()),
            )
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::BAD_REQUEST && body.contains(CONTACT_EXISTS) {
            tracing::info!("contact already exists");
            return Ok(());
        }
        Err(EmailError::Rejected { status, body })
    }
}
