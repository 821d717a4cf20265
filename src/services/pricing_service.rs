use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fmt;

use crate::models::booking::{Duration, ExtraAttraction, TicketCategory};

#[derive(Debug, Clone, PartialEq)]
pub enum PricingError {
    InvalidCategory(String),
    InvalidDuration(String),
    InvalidQuantity(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidCategory(key) => write!(f, "no price entry for '{}'", key),
            PricingError::InvalidDuration(value) => {
                write!(f, "unrecognized duration '{}'", value)
            }
            PricingError::InvalidQuantity(msg) => write!(f, "invalid quantity: {}", msg),
        }
    }
}

impl Error for PricingError {}

/// Park pricing: ticket prices per category and visit duration, plus the
/// per-person surcharge for each extra attraction. Built once at startup
/// and shared read-only with every handler.
#[derive(Debug, Clone, Serialize)]
pub struct PriceTable {
    pub tickets: HashMap<TicketCategory, HashMap<Duration, f32>>,
    pub extras: HashMap<ExtraAttraction, f32>,
}

impl Default for PriceTable {
    fn default() -> Self {
        let mut tickets = HashMap::new();
        for (category, one_day, two_day) in [
            (TicketCategory::Adult, 20.00, 30.00),
            (TicketCategory::Child, 12.00, 18.00),
            (TicketCategory::Senior, 16.00, 24.00),
            (TicketCategory::Family, 60.00, 90.00),
            (TicketCategory::Group, 15.00, 22.00),
        ] {
            let mut by_duration = HashMap::new();
            by_duration.insert(Duration::OneDay, one_day);
            by_duration.insert(Duration::TwoDay, two_day);
            tickets.insert(category, by_duration);
        }

        let mut extras = HashMap::new();
        extras.insert(ExtraAttraction::LionFeeding, 2.50);
        extras.insert(ExtraAttraction::PenguinFeeding, 2.00);
        extras.insert(ExtraAttraction::Bbq, 5.00);

        Self { tickets, extras }
    }
}

impl PriceTable {
    /// Published prices, with single entries overridable from the
    /// environment (PRICE_ADULT_ONE_DAY=21.50, EXTRA_BBQ=6.00). Unset or
    /// unparsable variables keep the default.
    pub fn from_env() -> Self {
        let mut table = Self::default();

        for (category, by_duration) in table.tickets.iter_mut() {
            for (duration, price) in by_duration.iter_mut() {
                let var = format!(
                    "PRICE_{}_{}",
                    category.as_str().to_uppercase(),
                    duration.as_str().to_uppercase()
                );
                if let Some(value) = env::var(&var).ok().and_then(|s| s.parse().ok()) {
                    *price = value;
                }
            }
        }

        for (extra, surcharge) in table.extras.iter_mut() {
            let var = format!("EXTRA_{}", extra.as_str().to_uppercase());
            if let Some(value) = env::var(&var).ok().and_then(|s| s.parse().ok()) {
                *surcharge = value;
            }
        }

        table
    }

    /// Unit price for a ticket category at the given visit duration.
    pub fn ticket_price(
        &self,
        category: TicketCategory,
        duration: Duration,
    ) -> Result<f32, PricingError> {
        let by_duration = self
            .tickets
            .get(&category)
            .ok_or_else(|| PricingError::InvalidCategory(category.as_str().to_string()))?;
        by_duration
            .get(&duration)
            .copied()
            .ok_or_else(|| PricingError::InvalidDuration(duration.as_str().to_string()))
    }

    /// Per-person surcharge for an extra attraction.
    pub fn extra_price(&self, extra: ExtraAttraction) -> Result<f32, PricingError> {
        self.extras
            .get(&extra)
            .copied()
            .ok_or_else(|| PricingError::InvalidCategory(extra.as_str().to_string()))
    }
}

pub struct PricingService;

impl PricingService {
    /// Calculate the total cost of a booking: each ticket line at its
    /// duration price, plus every selected extra charged once per
    /// attending person.
    pub fn calculate_total(
        table: &PriceTable,
        quantities: &HashMap<TicketCategory, u32>,
        duration: Duration,
        extras: &HashMap<ExtraAttraction, bool>,
    ) -> Result<f32, PricingError> {
        let mut total = 0.0;

        for (&category, &quantity) in quantities {
            let price = table.ticket_price(category, duration)?;
            total += price * quantity as f32;
        }

        // Extras are per person, not per ticket line. Summed wide: each
        // quantity fits a u32, the party as a whole need not.
        let attendees: u64 = quantities.values().map(|&quantity| u64::from(quantity)).sum();
        for (&extra, &selected) in extras {
            if selected {
                total += table.extra_price(extra)? * attendees as f32;
            }
        }

        Ok(total)
    }
}
