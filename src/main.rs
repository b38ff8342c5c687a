use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;

use trivia_api::db::establish_connection_pool;
use trivia_api::models::config::ServerConfig;
use trivia_api::repository::DieselRepository;
use trivia_api::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::load().map_err(std::io::Error::other)?;
    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    info!("Listening on {}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(routes::json_error_config())
            .app_data(routes::query_error_config())
            .app_data(routes::path_error_config())
            .wrap(Logger::default())
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
