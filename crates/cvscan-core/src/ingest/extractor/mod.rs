mod dob;
mod email;
mod gender;
mod name;
mod phone;

pub use dob::{locate_dob, DobExtractor};
pub use email::{find_email, EmailExtractor};
pub use gender::GenderExtractor;
pub use name::NameExtractor;
pub use phone::PhoneExtractor;

use super::text::DocumentText;
use crate::record::Field;

/// A stateless extractor for one contact field.
///
/// Absence is not an error: an extractor that finds nothing returns `None`
/// and the assembler decides the default.
pub trait FieldExtractor: Send + Sync {
    type Output;

    fn field(&self) -> Field;

    fn extract(&self, document: &DocumentText) -> Option<Self::Output>;

    fn extract_text(&self, text: &str) -> Option<Self::Output> {
        self.extract(&DocumentText::new(text))
    }
}
