mod health_check;
mod inquiries;
mod pages;

pub use health_check::*;
pub use inquiries::*;
pub use pages::*;
