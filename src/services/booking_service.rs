use chrono::{DateTime, Utc};

use crate::models::booking::{BookingQuote, BookingRequest};
use crate::services::package_service::PackageService;
use crate::services::pricing_service::{PriceTable, PricingError, PricingService};

pub struct BookingService;

impl BookingService {
    /// Booking numbers are the current UTC time at second granularity,
    /// e.g. 20260825143059: fixed length and sortable. Two bookings within
    /// the same second share a number; this is a session token, not a
    /// unique key.
    pub fn generate_booking_number() -> String {
        Self::booking_number_at(Utc::now())
    }

    /// Timestamp-to-booking-number rendering, split out so callers and
    /// tests can pin the clock.
    pub fn booking_number_at(at: DateTime<Utc>) -> String {
        at.format("%Y%m%d%H%M%S").to_string()
    }

    /// Price a booking request end to end: total cost, package
    /// suggestions, booking number, and the composed details text a front
    /// end can display verbatim.
    pub fn build_quote(
        table: &PriceTable,
        request: &BookingRequest,
    ) -> Result<BookingQuote, PricingError> {
        let total_cost = PricingService::calculate_total(
            table,
            &request.quantities,
            request.duration,
            &request.extras,
        )?;
        let suggestions = PackageService::suggest_better_package(
            table,
            &request.quantities,
            request.duration,
            total_cost,
        )?;
        let booking_id = Self::generate_booking_number();

        let mut details = format!(
            "Total Cost: ${:.2}\nBooking Number: {}",
            total_cost, booking_id
        );
        if !suggestions.is_empty() {
            details.push_str("\n\n");
            details.push_str(&suggestions.join("\n"));
        }

        Ok(BookingQuote {
            total_cost,
            booking_id,
            suggestions,
            details,
        })
    }
}
