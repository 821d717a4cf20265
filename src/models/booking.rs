use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ticket categories known to the pricing table. Visitors book adult,
/// child, or senior tickets; family and group are package tiers that only
/// exist as price comparisons.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Adult,
    Child,
    Senior,
    Family,
    Group,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 5] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Senior,
        TicketCategory::Family,
        TicketCategory::Group,
    ];

    /// Categories a visitor can actually put on a booking.
    pub const BOOKABLE: [TicketCategory; 3] = [
        TicketCategory::Adult,
        TicketCategory::Child,
        TicketCategory::Senior,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::Adult => "adult",
            TicketCategory::Child => "child",
            TicketCategory::Senior => "senior",
            TicketCategory::Family => "family",
            TicketCategory::Group => "group",
        }
    }
}

/// Visit length; picks the price column for every category.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    OneDay,
    TwoDay,
}

impl Duration {
    pub const ALL: [Duration; 2] = [Duration::OneDay, Duration::TwoDay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Duration::OneDay => "one_day",
            Duration::TwoDay => "two_day",
        }
    }

    /// Parse the wire value; `None` for anything outside the two
    /// recognized durations.
    pub fn from_key(key: &str) -> Option<Duration> {
        match key {
            "one_day" => Some(Duration::OneDay),
            "two_day" => Some(Duration::TwoDay),
            _ => None,
        }
    }
}

/// Optional add-ons, each charged per attending person.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExtraAttraction {
    LionFeeding,
    PenguinFeeding,
    Bbq,
}

impl ExtraAttraction {
    pub const ALL: [ExtraAttraction; 3] = [
        ExtraAttraction::LionFeeding,
        ExtraAttraction::PenguinFeeding,
        ExtraAttraction::Bbq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExtraAttraction::LionFeeding => "lion_feeding",
            ExtraAttraction::PenguinFeeding => "penguin_feeding",
            ExtraAttraction::Bbq => "bbq",
        }
    }
}

/// One calculation's worth of validated input. The shell guarantees the
/// quantities are non-negative and that bbq is only selected on two-day
/// visits; nothing here outlives the request.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingRequest {
    pub quantities: HashMap<TicketCategory, u32>,
    pub duration: Duration,
    pub extras: HashMap<ExtraAttraction, bool>,
}

/// The priced result handed back to the caller. `details` is the composed
/// multi-line text a front end can display as-is.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BookingQuote {
    pub total_cost: f32,
    pub booking_id: String,
    pub suggestions: Vec<String>,
    pub details: String,
}
