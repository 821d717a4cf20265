use actix_web::{web, HttpResponse, Responder};

use crate::services::pricing_service::PriceTable;

/*
    /api/prices (published ticket prices and extras - public endpoint)
*/
pub async fn get_prices(data: web::Data<PriceTable>) -> impl Responder {
    HttpResponse::Ok().json(data.get_ref())
}
