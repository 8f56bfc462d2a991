//! Event group catalogue
//!
//! Fixed business data: each group caps how many of its events one
//! participant may register for.

use crate::error::{RegistrationError, RegistrationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown before a group is chosen
pub const GROUP_PLACEHOLDER: &str = "Select a Group";

/// An event group a participant can register under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventGroup {
    Technical,
    Cultural,
    Sports,
    Literary,
    ArtAndDesign,
    Gaming,
}

impl EventGroup {
    /// Catalogue order
    pub const ALL: [Self; 6] = [
        Self::Technical,
        Self::Cultural,
        Self::Sports,
        Self::Literary,
        Self::ArtAndDesign,
        Self::Gaming,
    ];

    /// Display name, also stored on the registration record
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Technical => "Technical Events",
            Self::Cultural => "Cultural Events",
            Self::Sports => "Sports Events",
            Self::Literary => "Literary Events",
            Self::ArtAndDesign => "Art & Design Events",
            Self::Gaming => "Gaming Events",
        }
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Technical => "Coding, Hackathons, Robotics, Tech Quiz",
            Self::Cultural => "Dance, Music, Drama, Fashion Show",
            Self::Sports => "Cricket, Football, Basketball, Athletics",
            Self::Literary => "Debate, Elocution, Creative Writing, Poetry",
            Self::ArtAndDesign => "Painting, Photography, Poster Making",
            Self::Gaming => "BGMI, Valorant, FIFA, Chess",
        }
    }

    /// Most events one participant may pick in this group
    #[must_use]
    pub const fn max_events(&self) -> u32 {
        match self {
            Self::Technical | Self::Literary | Self::Gaming => 4,
            Self::Cultural => 5,
            Self::Sports | Self::ArtAndDesign => 3,
        }
    }

    /// Looks a group up by display name.
    ///
    /// A blank name or the placeholder means no group was chosen.
    pub fn from_name(name: &str) -> RegistrationResult<Self> {
        let name = name.trim();
        if name.is_empty() || name == GROUP_PLACEHOLDER {
            return Err(RegistrationError::NoGroupSelected);
        }
        Self::ALL
            .into_iter()
            .find(|g| g.name() == name)
            .ok_or_else(|| RegistrationError::UnknownGroup(name.to_string()))
    }

    /// Checks `count` is within `1..=max_events()`
    pub fn validate_count(&self, count: u32) -> RegistrationResult<()> {
        let max = self.max_events();
        if (1..=max).contains(&count) {
            Ok(())
        } else {
            Err(RegistrationError::InvalidEventCount { count, max })
        }
    }
}

impl fmt::Display for EventGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `"1 Event"`, `"3 Events"`
#[must_use]
pub fn event_count_label(count: u32) -> String {
    format!("{count} Event{}", if count > 1 { "s" } else { "" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_events() {
        assert_eq!(EventGroup::Technical.max_events(), 4);
        assert_eq!(EventGroup::Cultural.max_events(), 5);
        assert_eq!(EventGroup::Sports.max_events(), 3);
        assert_eq!(EventGroup::Literary.max_events(), 4);
        assert_eq!(EventGroup::ArtAndDesign.max_events(), 3);
        assert_eq!(EventGroup::Gaming.max_events(), 4);
    }

    #[test]
    fn test_from_name_round_trips() {
        for group in EventGroup::ALL {
            assert_eq!(EventGroup::from_name(group.name()).ok(), Some(group));
        }
    }

    #[test]
    fn test_from_name_placeholder_is_no_selection() {
        assert!(matches!(
            EventGroup::from_name(GROUP_PLACEHOLDER),
            Err(RegistrationError::NoGroupSelected)
        ));
        assert!(matches!(
            EventGroup::from_name("  "),
            Err(RegistrationError::NoGroupSelected)
        ));
    }

    #[test]
    fn test_from_name_unknown() {
        assert!(matches!(
            EventGroup::from_name("Cooking Events"),
            Err(RegistrationError::UnknownGroup(name)) if name == "Cooking Events"
        ));
    }

    #[test]
    fn test_validate_count_bounds() {
        let group = EventGroup::Sports;
        assert!(group.validate_count(1).is_ok());
        assert!(group.validate_count(3).is_ok());
        assert!(matches!(
            group.validate_count(0),
            Err(RegistrationError::InvalidEventCount { count: 0, max: 3 })
        ));
        assert!(matches!(
            group.validate_count(4),
            Err(RegistrationError::InvalidEventCount { count: 4, max: 3 })
        ));
    }

    #[test]
    fn test_event_count_label() {
        assert_eq!(event_count_label(1), "1 Event");
        assert_eq!(event_count_label(3), "3 Events");
    }

    #[test]
    fn test_display_and_description() {
        assert_eq!(EventGroup::ArtAndDesign.to_string(), "Art & Design Events");
        assert!(EventGroup::Gaming.description().contains("Chess"));
    }
}
