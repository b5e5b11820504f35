use tera::Context;
use tera::Tera;

pub const TRAINING_ACKNOWLEDGMENT: &str = "training_acknowledgment.html";
pub const SERVICE_ACKNOWLEDGMENT: &str = "service_acknowledgment.html";

/// Html bodies for the emails we send to visitors. The templates are compiled
/// into the binary, so unlike the page templates they do not depend on the
/// working directory.
///
/// Every template name ends in `.html`, which turns on tera's autoescaping:
/// form fields interpolated with `{{ }}` are always escaped.
pub struct EmailTemplates(Tera);

impl EmailTemplates {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (
                "acknowledgment_layout.html",
                include_str!("../templates/email/acknowledgment_layout.html"),
            ),
            (
                TRAINING_ACKNOWLEDGMENT,
                include_str!("../templates/email/training_acknowledgment.html"),
            ),
            (
                SERVICE_ACKNOWLEDGMENT,
                include_str!("../templates/email/service_acknowledgment.html"),
            ),
        ])?;
        Ok(Self(tera))
    }

    pub fn render(
        &self,
        name: &str,
        ctx: &Context,
    ) -> Result<String, tera::Error> {
        self.0.render(name, ctx)
    }
}
