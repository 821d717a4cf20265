use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use wildpark_api::routes;
use wildpark_api::services::pricing_service::PriceTable;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    // Pricing is fixed at startup and read-only from then on.
    let price_table = PriceTable::from_env();
    println!(
        "Price table loaded: {} ticket categories, {} extras",
        price_table.tickets.len(),
        price_table.extras.len()
    );

    println!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .app_data(web::Data::new(price_table.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/prices", web::get().to(routes::pricing::get_prices))
                    .service(
                        web::scope("/bookings")
                            .route("/quote", web::post().to(routes::booking::create_quote)),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
