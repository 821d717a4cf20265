use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::booking::{BookingRequest, Duration, ExtraAttraction, TicketCategory};
use crate::services::booking_service::BookingService;
use crate::services::pricing_service::{PriceTable, PricingError};

#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteInput {
    #[serde(default)]
    adult_tickets: i64,
    #[serde(default)]
    child_tickets: i64,
    #[serde(default)]
    senior_tickets: i64,
    duration: String,
    #[serde(default)]
    lion_feeding: bool,
    #[serde(default)]
    penguin_feeding: bool,
    #[serde(default)]
    bbq: bool,
}

/*
    /api/bookings/quote
*/
pub async fn create_quote(
    data: web::Data<PriceTable>,
    input: web::Json<QuoteInput>,
) -> impl Responder {
    let input = input.into_inner();

    let quantities = match collect_quantities(&input) {
        Ok(quantities) => quantities,
        Err(err) => return HttpResponse::BadRequest().body(err.to_string()),
    };

    let duration = match Duration::from_key(&input.duration) {
        Some(duration) => duration,
        None => {
            let err = PricingError::InvalidDuration(input.duration.clone());
            return HttpResponse::BadRequest().body(err.to_string());
        }
    };

    // The BBQ is only offered on two-day visits; a stray selection is
    // dropped rather than rejected, as on the booking form.
    let mut extras = HashMap::new();
    extras.insert(ExtraAttraction::LionFeeding, input.lion_feeding);
    extras.insert(ExtraAttraction::PenguinFeeding, input.penguin_feeding);
    extras.insert(
        ExtraAttraction::Bbq,
        input.bbq && duration == Duration::TwoDay,
    );

    let request = BookingRequest {
        quantities,
        duration,
        extras,
    };

    match BookingService::build_quote(data.get_ref(), &request) {
        Ok(quote) => HttpResponse::Ok().json(quote),
        Err(err) => {
            eprintln!("Failed to price booking: {}", err);
            HttpResponse::BadRequest().body(err.to_string())
        }
    }
}

fn collect_quantities(input: &QuoteInput) -> Result<HashMap<TicketCategory, u32>, PricingError> {
    let mut quantities = HashMap::new();
    for (category, requested) in [
        (TicketCategory::Adult, input.adult_tickets),
        (TicketCategory::Child, input.child_tickets),
        (TicketCategory::Senior, input.senior_tickets),
    ] {
        let quantity = u32::try_from(requested).map_err(|_| {
            PricingError::InvalidQuantity(format!(
                "{} tickets cannot be {}",
                category.as_str(),
                requested
            ))
        })?;
        quantities.insert(category, quantity);
    }
    Ok(quantities)
}
