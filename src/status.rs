use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pickup state assigned to one weekday slot.
///
/// The vocabulary is fixed by the application; edits may only move a day
/// between these seven states. Arbitrary text is rejected when parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickupStatus {
    Available,
    Unavailable,
    Complicated,
    Travel,
    Office,
    Holiday,
    Unknown,
}

impl PickupStatus {
    /// Status used to fill the days of a freshly added week.
    pub const DEFAULT: PickupStatus = PickupStatus::Holiday;

    /// Every status, in legend order.
    pub const ALL: [PickupStatus; 7] = [
        PickupStatus::Available,
        PickupStatus::Unavailable,
        PickupStatus::Complicated,
        PickupStatus::Travel,
        PickupStatus::Office,
        PickupStatus::Holiday,
        PickupStatus::Unknown,
    ];

    /// Stable key used in form submissions and serialized payloads.
    pub fn key(self) -> &'static str {
        match self {
            PickupStatus::Available => "available",
            PickupStatus::Unavailable => "unavailable",
            PickupStatus::Complicated => "complicated",
            PickupStatus::Travel => "travel",
            PickupStatus::Office => "office",
            PickupStatus::Holiday => "holiday",
            PickupStatus::Unknown => "unknown",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PickupStatus::Available => "Available",
            PickupStatus::Unavailable => "Unavailable",
            PickupStatus::Complicated => "Complicated Drop-off",
            PickupStatus::Travel => "Travel",
            PickupStatus::Office => "Office",
            PickupStatus::Holiday => "Holiday/No School",
            PickupStatus::Unknown => "Unknown / TBD",
        }
    }

    /// Single-character symbol for the console table.
    pub fn symbol(self) -> &'static str {
        match self {
            PickupStatus::Available => "\u{2713}",
            PickupStatus::Unavailable => "\u{2717}",
            PickupStatus::Complicated => "\u{26A0}",
            PickupStatus::Travel => "\u{2708}",
            PickupStatus::Office => "\u{1F4BC}",
            PickupStatus::Holiday => "\u{2600}",
            PickupStatus::Unknown => "?",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            PickupStatus::Available => "status-available",
            PickupStatus::Unavailable => "status-unavailable",
            PickupStatus::Complicated => "status-complicated",
            PickupStatus::Travel => "status-travel",
            PickupStatus::Office => "status-office",
            PickupStatus::Holiday => "status-holiday",
            PickupStatus::Unknown => "status-unknown",
        }
    }

    fn html_entity(self) -> &'static str {
        match self {
            PickupStatus::Available => "&#10003;",
            PickupStatus::Unavailable => "&#10007;",
            PickupStatus::Complicated => "&#9888;",
            PickupStatus::Travel => "&#9992;",
            PickupStatus::Office => "&#128188;",
            PickupStatus::Holiday => "&#9728;",
            PickupStatus::Unknown => "?",
        }
    }

    /// `<span>` cell content for HTML renderings.
    pub fn html_span(self) -> String {
        format!(
            "<span class='{}' title='{}'>{}</span>",
            self.css_class(),
            self.description(),
            self.html_entity()
        )
    }

    /// Key/description pairs in legend order.
    pub fn variants() -> impl Iterator<Item = (&'static str, &'static str)> {
        Self::ALL.into_iter().map(|s| (s.key(), s.description()))
    }
}

impl fmt::Display for PickupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a submitted status key is not in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus {
    pub value: String,
}

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown pickup status '{}'", self.value)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for PickupStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PickupStatus::Available),
            "unavailable" => Ok(PickupStatus::Unavailable),
            "complicated" => Ok(PickupStatus::Complicated),
            "travel" => Ok(PickupStatus::Travel),
            "office" => Ok(PickupStatus::Office),
            "holiday" => Ok(PickupStatus::Holiday),
            "unknown" => Ok(PickupStatus::Unknown),
            other => Err(UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for status in PickupStatus::ALL {
            assert_eq!(status.key().parse::<PickupStatus>(), Ok(status));
        }
    }

    #[test]
    fn unrecognized_key_is_rejected() {
        let err = "banana".parse::<PickupStatus>().unwrap_err();
        assert_eq!(err.value, "banana");
        assert!(err.to_string().contains("banana"));
    }

    #[test]
    fn default_fill_status_is_holiday() {
        assert_eq!(PickupStatus::DEFAULT, PickupStatus::Holiday);
    }

    #[test]
    fn html_span_carries_class_and_title() {
        let span = PickupStatus::Complicated.html_span();
        assert!(span.contains("status-complicated"));
        assert!(span.contains("Complicated Drop-off"));
    }
}
