mod contact;
mod inquiry;
mod mailbox;
mod outbound_message;
mod service_inquiry;
mod training_inquiry;
// allow external `use` statements to skip `mailbox` etc
pub use contact::Contact;
pub use inquiry::Inquiry;
pub use mailbox::Mailbox;
pub use mailbox::StaffMailboxes;
pub use outbound_message::OutboundMessage;
pub use service_inquiry::ServiceInquiry;
pub use training_inquiry::TrainingInquiry;
