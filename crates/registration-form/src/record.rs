//! Registration record passed between flow steps

use crate::error::RegistrationResult;
use serde::{Deserialize, Serialize};

/// Prefix for generated registration ids
pub const REGISTRATION_ID_PREFIX: &str = "REV2026";

/// Registration ids are cut to this many characters
pub const REGISTRATION_ID_MAX_LEN: usize = 20;

/// Dialling prefix shown before mobile numbers
pub const COUNTRY_CODE: &str = "+91";

/// Everything collected over one registration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub mobile_number: String,
    pub email: String,
    pub college_name: String,
    pub group_name: String,
    pub event_count: u32,
}

impl RegistrationRecord {
    /// All basic-details fields are non-blank
    #[must_use]
    pub fn is_basic_info_complete(&self) -> bool {
        [
            &self.name,
            &self.mobile_number,
            &self.email,
            &self.college_name,
        ]
        .iter()
        .all(|s| !s.trim().is_empty())
    }

    /// A group is chosen with at least one event
    #[must_use]
    pub fn is_event_info_complete(&self) -> bool {
        !self.group_name.trim().is_empty() && self.event_count > 0
    }

    /// `REV2026-<first 3 letters of name, uppercased>-<millis>`, cut to 20 chars.
    ///
    /// ```
    /// use registration_form::RegistrationRecord;
    ///
    /// let record = RegistrationRecord { name: "Priya".into(), ..Default::default() };
    /// assert_eq!(record.registration_id(1_767_225_600_000), "REV2026-PRI-17672256");
    /// ```
    #[must_use]
    pub fn registration_id(&self, timestamp_millis: i64) -> String {
        let initials: String = self.name.chars().take(3).collect();
        format!(
            "{REGISTRATION_ID_PREFIX}-{}-{timestamp_millis}",
            initials.to_uppercase()
        )
        .chars()
        .take(REGISTRATION_ID_MAX_LEN)
        .collect()
    }

    /// Mobile number with the country code, as shown on the summary
    #[must_use]
    pub fn display_mobile(&self) -> String {
        format!("{COUNTRY_CODE} {}", self.mobile_number)
    }

    /// Plain-text summary for sharing a confirmed registration
    #[must_use]
    pub fn summary(&self, registration_id: &str) -> String {
        [
            "Revelations 2026 Registration".to_string(),
            String::new(),
            format!("Registration ID: {registration_id}"),
            format!("Name: {}", self.name),
            format!("College: {}", self.college_name),
            format!("Group: {}", self.group_name),
            format!("Events: {}", self.event_count),
            String::new(),
            "See you at Revelations 2026!".to_string(),
        ]
        .join("\n")
    }

    pub fn to_json(&self) -> RegistrationResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> RegistrationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
