//! Multi-step registration flow
//!
//! ```text
//! Details ──submit_details──▶ EventSelection ──select_events──▶ Review ──confirm──▶ Confirmed
//!    ▲                              │                              │
//!    └────────────back──────────────┴─────────────back─────────────┘
//! ```
//!
//! The flow owns the [`RegistrationRecord`] and hands out copies; every
//! step transition goes through one method so out-of-order calls are
//! rejected with [`RegistrationError::WrongStep`].

use crate::error::{RegistrationError, RegistrationResult};
use crate::events::EventGroup;
use crate::form::RegistrationForm;
use crate::record::RegistrationRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Date format used on the confirmation screen
pub const CONFIRMATION_DATE_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Where a registration currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Step {
    #[default]
    Details,
    EventSelection,
    Review,
    Confirmed,
}

impl Step {
    /// Step reached by going back, if any
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::EventSelection => Some(Self::Details),
            Self::Review => Some(Self::EventSelection),
            Self::Details | Self::Confirmed => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Details => "details",
            Self::EventSelection => "event selection",
            Self::Review => "review",
            Self::Confirmed => "confirmed",
        })
    }
}

/// Result of a confirmed registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub registration_id: String,
    pub record: RegistrationRecord,
    pub confirmed_at: DateTime<Utc>,
}

impl Confirmation {
    /// `confirmed_at` as `"05 Jan 2026, 03:30 PM"`
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.confirmed_at
            .format(CONFIRMATION_DATE_FORMAT)
            .to_string()
    }

    /// Share text for this confirmation
    #[must_use]
    pub fn summary(&self) -> String {
        self.record.summary(&self.registration_id)
    }
}

/// Registration state machine
#[derive(Debug, Clone, Default)]
pub struct RegistrationFlow {
    step: Step,
    record: RegistrationRecord,
    confirmation: Option<Confirmation>,
}

impl RegistrationFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn record(&self) -> &RegistrationRecord {
        &self.record
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.confirmation.as_ref()
    }

    /// Form pre-filled with the details entered so far
    #[must_use]
    pub fn details_form(&self) -> RegistrationForm {
        RegistrationForm::from_record(&self.record)
    }

    fn expect_step(&self, expected: Step) -> RegistrationResult<()> {
        if self.step == expected {
            Ok(())
        } else {
            warn!(%expected, actual = %self.step, "registration step rejected");
            Err(RegistrationError::WrongStep {
                expected,
                actual: self.step,
            })
        }
    }

    /// Accepts the basic details and moves on to event selection.
    ///
    /// A previously chosen group survives re-submission after going back.
    pub fn submit_details(&mut self, form: &RegistrationForm) -> RegistrationResult<()> {
        self.expect_step(Step::Details)?;
        let details = form.submit()?;
        self.record = RegistrationRecord {
            group_name: std::mem::take(&mut self.record.group_name),
            event_count: self.record.event_count,
            ..details
        };
        self.step = Step::EventSelection;
        debug!(step = %self.step, "details accepted");
        Ok(())
    }

    /// Records the event group and count (`1..=group.max_events()`)
    pub fn select_events(&mut self, group: EventGroup, count: u32) -> RegistrationResult<()> {
        self.expect_step(Step::EventSelection)?;
        group.validate_count(count)?;
        self.record.group_name = group.name().to_string();
        self.record.event_count = count;
        self.step = Step::Review;
        debug!(%group, count, "events selected");
        Ok(())
    }

    /// [`select_events`](Self::select_events) with the group given by display name
    pub fn select_events_by_name(&mut self, group_name: &str, count: u32) -> RegistrationResult<()> {
        self.expect_step(Step::EventSelection)?;
        let group = EventGroup::from_name(group_name)?;
        self.select_events(group, count)
    }

    /// Steps back one screen, keeping everything entered so far
    pub fn back(&mut self) -> RegistrationResult<Step> {
        let Some(previous) = self.step.previous() else {
            // Report the nearest step that can go back
            let expected = match self.step {
                Step::Confirmed => Step::Review,
                _ => Step::EventSelection,
            };
            warn!(%expected, actual = %self.step, "cannot go back");
            return Err(RegistrationError::WrongStep {
                expected,
                actual: self.step,
            });
        };
        self.step = previous;
        debug!(step = %self.step, "went back");
        Ok(previous)
    }

    /// Confirms the reviewed registration.
    ///
    /// `timestamp_millis` is the Unix time in milliseconds; it seeds the
    /// registration id and the confirmation date.
    pub fn confirm(&mut self, timestamp_millis: i64) -> RegistrationResult<&Confirmation> {
        self.expect_step(Step::Review)?;
        let confirmation = Confirmation {
            registration_id: self.record.registration_id(timestamp_millis),
            record: self.record.clone(),
            confirmed_at: DateTime::from_timestamp_millis(timestamp_millis).unwrap_or_default(),
        };
        debug!(id = %confirmation.registration_id, "registration confirmed");
        self.step = Step::Confirmed;
        Ok(self.confirmation.insert(confirmation))
    }

    /// [`confirm`](Self::confirm) stamped with the current time
    pub fn confirm_now(&mut self) -> RegistrationResult<&Confirmation> {
        self.confirm(Utc::now().timestamp_millis())
    }

    /// Drops everything and starts a fresh registration
    pub fn restart(&mut self) {
        *self = Self::default();
        debug!("registration restarted");
    }
}
