use serde::Deserialize;
use tera::Context;

use super::inquiry::escape;
use super::Contact;
use super::Inquiry;
use super::Mailbox;
use super::OutboundMessage;
use super::StaffMailboxes;
use crate::email_templates::EmailTemplates;
use crate::email_templates::SERVICE_ACKNOWLEDGMENT;

/// `POST /service` form body. `interest` is whatever option the visitor
/// picked on the services page; `message` is free text.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceInquiry {
    pub first_name: String,
    pub organization: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl Inquiry for ServiceInquiry {
    fn acknowledgment(
        &self,
        staff: &StaffMailboxes,
        templates: &EmailTemplates,
    ) -> Result<OutboundMessage, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("first_name", &self.first_name);
        ctx.insert("interest", &self.interest);
        let html_body = templates.render(SERVICE_ACKNOWLEDGMENT, &ctx)?;

        Ok(OutboundMessage {
            from: staff.info.clone(),
            to: vec![Mailbox::named(&self.email, &self.first_name)],
            cc: vec![],
            bcc: vec![],
            subject: "Thank You for Contacting Us!".to_string(),
            html_body,
            text_body: Some(format!(
                "Thank you for contacting us! We will be in touch with you about your {} request.",
                self.interest
            )),
        })
    }

    fn notification(
        &self,
        staff: &StaffMailboxes,
    ) -> OutboundMessage {
        let html_body = format!(
            r#"<h3>New Contact Form!</h3><br>
Name: {}<br>
Organization: {}<br>
Email: {}<br>
Phone: {}<br>
Area of Interest: {}<br>
Message: <br>
{}"#,
            escape(&self.first_name),
            escape(&self.organization),
            escape(&self.email),
            escape(&self.phone),
            escape(&self.interest),
            escape(&self.message),
        );
        let text_body = format!(
            "New Contact Form!\n\nName: {}\nOrganization: {}\nEmail: {}\nPhone: {}\nArea of Interest: {}\nMessage:\n{}\n",
            self.first_name, self.organization, self.email, self.phone, self.interest, self.message,
        );

        OutboundMessage {
            from: staff.info.clone(),
            to: vec![Mailbox::new(&staff.info.email)],
            cc: vec![staff.cc.clone()],
            bcc: vec![staff.bcc.clone()],
            subject: "New Contact Info Form".to_string(),
            html_body,
            text_body: Some(text_body),
        }
    }

    fn contact(&self) -> Contact {
        Contact {
            email: self.email.clone(),
            name: format!("{} {}", self.first_name, self.organization),
        }
    }
}
