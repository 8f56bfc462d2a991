//! Basic-details form state
//!
//! Holds the raw text of each tracked field. Validation and progress are
//! recomputed from the text on every query, never cached.

use crate::error::{RegistrationError, RegistrationResult};
use crate::field::Field;
use crate::record::RegistrationRecord;
use crate::validation::{completion_ratio, ValidationResult};
use tracing::debug;

/// Text entered on the basic-details step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    name: String,
    mobile: String,
    email: String,
    college_name: String,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills the form from an existing record (editing after review)
    #[must_use]
    pub fn from_record(record: &RegistrationRecord) -> Self {
        let mut form = Self::new();
        form.set(Field::Name, &record.name);
        form.set(Field::Mobile, &record.mobile_number);
        form.set(Field::Email, &record.email);
        form.set(Field::CollegeName, &record.college_name);
        form
    }

    /// Stores the trimmed text for a field
    pub fn set(&mut self, field: Field, text: &str) {
        *self.slot_mut(field) = text.trim().to_string();
    }

    /// Builder-style [`set`](Self::set)
    #[must_use]
    pub fn with(mut self, field: Field, text: &str) -> Self {
        self.set(field, text);
        self
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
            Field::CollegeName => &self.college_name,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
            Field::CollegeName => &mut self.college_name,
        }
    }

    /// Validates one field
    #[must_use]
    pub fn result(&self, field: Field) -> ValidationResult {
        field.validate(self.get(field))
    }

    /// Validates every field, in form order
    #[must_use]
    pub fn results(&self) -> Vec<(Field, ValidationResult)> {
        Field::ALL.iter().map(|f| (*f, self.result(*f))).collect()
    }

    /// Number of fields currently valid
    #[must_use]
    pub fn completed_fields(&self) -> usize {
        Field::ALL.iter().filter(|f| self.result(**f).is_valid).count()
    }

    /// Valid fields ÷ tracked fields
    #[must_use]
    pub fn completion_ratio(&self) -> f64 {
        let results: Vec<ValidationResult> = self.results().into_iter().map(|(_, r)| r).collect();
        completion_ratio(&results)
    }

    /// Integer percentage for a progress bar (truncating)
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        (self.completed_fields() * 100 / Field::COUNT) as u8
    }

    /// `"completed/total"`, e.g. `"3/4"`
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.completed_fields(), Field::COUNT)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_fields() == Field::COUNT
    }

    /// Fields failing validation, in form order
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| !self.result(*f).is_valid)
            .collect()
    }

    /// First invalid field and its result
    #[must_use]
    pub fn first_error(&self) -> Option<(Field, ValidationResult)> {
        self.results().into_iter().find(|(_, r)| !r.is_valid)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Builds a record from a fully valid form
    pub fn submit(&self) -> RegistrationResult<RegistrationRecord> {
        let fields = self.invalid_fields();
        if !fields.is_empty() {
            debug!(invalid = fields.len(), "details rejected");
            return Err(RegistrationError::InvalidFields { fields });
        }
        Ok(RegistrationRecord {
            name: self.name.clone(),
            mobile_number: self.mobile.clone(),
            email: self.email.clone(),
            college_name: self.college_name.clone(),
            ..RegistrationRecord::default()
        })
    }
}
