use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::models::booking::{Duration, ExtraAttraction, TicketCategory};
use crate::services::pricing_service::PriceTable;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(data: web::Data<PriceTable>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let pricing_result = check_price_table(data.get_ref());
    health
        .services
        .insert("pricing".to_string(), pricing_result.clone());

    // A booking API without a complete price table cannot quote anything.
    if pricing_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

fn check_price_table(table: &PriceTable) -> ServiceStatus {
    let mut problems = Vec::new();

    for category in TicketCategory::ALL {
        for duration in Duration::ALL {
            match table.ticket_price(category, duration) {
                Ok(price) if price < 0.0 => problems.push(format!(
                    "negative price for {} {}",
                    category.as_str(),
                    duration.as_str()
                )),
                Ok(_) => {}
                Err(err) => problems.push(err.to_string()),
            }
        }
    }

    for extra in ExtraAttraction::ALL {
        match table.extra_price(extra) {
            Ok(surcharge) if surcharge < 0.0 => {
                problems.push(format!("negative surcharge for {}", extra.as_str()))
            }
            Ok(_) => {}
            Err(err) => problems.push(err.to_string()),
        }
    }

    if problems.is_empty() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!(
                "{} ticket categories and {} extras priced",
                table.tickets.len(),
                table.extras.len()
            )),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some(problems.join(", ")),
        }
    }
}
