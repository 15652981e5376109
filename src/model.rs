use std::fmt;

use serde::{Deserialize, Serialize};

/// Event type codes as they appear in upstream records. Only a fixed set of
/// codes is eligible for aggregation; everything else (offseason, preseason,
/// unlabeled) is skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(pub i32);

impl EventType {
    pub const REGIONAL: EventType = EventType(0);
    pub const DISTRICT: EventType = EventType(1);
    pub const DISTRICT_CMP: EventType = EventType(2);
    pub const CMP_DIVISION: EventType = EventType(3);
    pub const CMP_FINALS: EventType = EventType(4);
    pub const DISTRICT_CMP_DIVISION: EventType = EventType(5);
    pub const FOC: EventType = EventType(6);
    pub const OFFSEASON: EventType = EventType(99);
    pub const PRESEASON: EventType = EventType(100);
    pub const UNLABELED: EventType = EventType(-1);

    const SEASON_EVENT_TYPES: [EventType; 7] = [
        Self::REGIONAL,
        Self::DISTRICT,
        Self::DISTRICT_CMP,
        Self::CMP_DIVISION,
        Self::CMP_FINALS,
        Self::DISTRICT_CMP_DIVISION,
        Self::FOC,
    ];

    /// Whether events of this type participate in aggregation.
    pub fn is_season(self) -> bool {
        Self::SEASON_EVENT_TYPES.contains(&self)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Award type codes. Open-ended: counters are keyed by whatever codes occur
/// in the input, only the blue-banner set and the winner code are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AwardType(pub i32);

impl AwardType {
    pub const CHAIRMANS: AwardType = AwardType(0);
    pub const WINNER: AwardType = AwardType(1);
    pub const FINALIST: AwardType = AwardType(2);
    pub const WOODIE_FLOWERS: AwardType = AwardType(3);

    const BLUE_BANNER_AWARDS: [AwardType; 3] =
        [Self::CHAIRMANS, Self::WINNER, Self::WOODIE_FLOWERS];

    /// Whether this award counts toward the headline `bb_count` counter.
    pub fn is_blue_banner(self) -> bool {
        Self::BLUE_BANNER_AWARDS.contains(&self)
    }
}

impl fmt::Display for AwardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized geographic point produced by upstream geocoding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// The team being indexed. An immutable snapshot for the duration of one
/// aggregation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub key: String,
    pub team_number: u32,
    pub name: String,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
}

/// One dated competition event the team participated in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub key: String,
    pub year: u32,
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<LatLng>,
}

/// One award earned at a specific event. Carries the event's type code so
/// composite counters can be built without re-resolving the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub event_key: String,
    pub event_type: EventType,
    pub award_type: AwardType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_filter_accepts_competition_types() {
        assert!(EventType::REGIONAL.is_season());
        assert!(EventType::CMP_FINALS.is_season());
        assert!(EventType::DISTRICT_CMP_DIVISION.is_season());
    }

    #[test]
    fn season_filter_rejects_offseason_types() {
        assert!(!EventType::OFFSEASON.is_season());
        assert!(!EventType::PRESEASON.is_season());
        assert!(!EventType::UNLABELED.is_season());
    }

    #[test]
    fn blue_banner_set_is_fixed() {
        assert!(AwardType::CHAIRMANS.is_blue_banner());
        assert!(AwardType::WINNER.is_blue_banner());
        assert!(AwardType::WOODIE_FLOWERS.is_blue_banner());
        assert!(!AwardType::FINALIST.is_blue_banner());
        assert!(!AwardType(42).is_blue_banner());
    }

    #[test]
    fn type_codes_display_as_raw_numbers() {
        assert_eq!(EventType::CMP_DIVISION.to_string(), "3");
        assert_eq!(AwardType(17).to_string(), "17");
        assert_eq!(EventType::UNLABELED.to_string(), "-1");
    }
}
