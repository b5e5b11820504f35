use serde::Deserialize;
use tera::Context;

use super::inquiry::escape;
use super::Contact;
use super::Inquiry;
use super::Mailbox;
use super::OutboundMessage;
use super::StaffMailboxes;
use crate::email_templates::EmailTemplates;
use crate::email_templates::TRAINING_ACKNOWLEDGMENT;

/// `POST /training` form body. Field names match the html form (camelCase);
/// missing fields deserialize to empty strings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainingInquiry {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub school: String,
}

impl TrainingInquiry {
    pub fn full_name(&self) -> String { format!("{} {}", self.first_name, self.last_name) }
}

impl Inquiry for TrainingInquiry {
    fn acknowledgment(
        &self,
        staff: &StaffMailboxes,
        templates: &EmailTemplates,
    ) -> Result<OutboundMessage, tera::Error> {
        let mut ctx = Context::new();
        ctx.insert("first_name", &self.first_name);
        let html_body = templates.render(TRAINING_ACKNOWLEDGMENT, &ctx)?;

        Ok(OutboundMessage {
            from: staff.training.clone(),
            to: vec![Mailbox::named(&self.email, self.full_name())],
            cc: vec![],
            bcc: vec![],
            subject: "Thank You from FortisureIT".to_string(),
            html_body,
            text_body: None,
        })
    }

    fn notification(
        &self,
        staff: &StaffMailboxes,
    ) -> OutboundMessage {
        let html_body = format!(
            r#"<h3>New Contact Form!</h3><br>
First Name: {}<br>
Last Name: {}<br>
Email: {}<br>
Phone: {}<br>
School: {}"#,
            escape(&self.first_name),
            escape(&self.last_name),
            escape(&self.email),
            escape(&self.phone),
            escape(&self.school),
        );
        let text_body = format!(
            "New Contact Form!\n\nFirst Name: {}\nLast Name: {}\nEmail: {}\nPhone: {}\nSchool: {}\n",
            self.first_name, self.last_name, self.email, self.phone, self.school,
        );

        OutboundMessage {
            from: staff.training.clone(),
            to: vec![Mailbox::new(&staff.training.email)],
            cc: vec![],
            bcc: vec![],
            subject: "New Contact Info Form".to_string(),
            html_body,
            text_body: Some(text_body),
        }
    }

    fn contact(&self) -> Contact {
        Contact {
            email: self.email.clone(),
            name: self.full_name(),
        }
    }
}
