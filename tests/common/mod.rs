use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};

use wildpark_api::routes;
use wildpark_api::services::pricing_service::PriceTable;

pub struct TestApp {
    pub price_table: PriceTable,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            price_table: PriceTable::default(),
        }
    }

    /// Build the same app `main` serves, against the default price table.
    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.price_table.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .route("/prices", web::get().to(routes::pricing::get_prices))
                    .service(
                        web::scope("/bookings")
                            .route("/quote", web::post().to(routes::booking::create_quote)),
                    ),
            )
    }
}
