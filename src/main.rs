use crate::catalog::CatalogLoader;
use crate::config::AppConfig;
use crate::router::AppContext;
use crate::store::{init_store, LocalStore};
use astra::Server;

mod auth;
mod catalog;
mod config;
mod errors;
mod filter;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = AppConfig::from_env();

    let store = LocalStore::new("apetments.sqlite3");
    if let Err(e) = init_store(&store, "sql/schema.sql") {
        eprintln!("❌ Store initialization failed: {e}");
        std::process::exit(1);
    }

    let loader = match CatalogLoader::new(&config.catalog_url) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("❌ Catalog loader init failed: {e}");
            std::process::exit(1);
        }
    };

    let ctx = AppContext { store, loader };

    println!(
        "Starting server at http://{} (catalog: {})",
        config.addr, config.catalog_url
    );

    let server = Server::bind(config.addr).max_workers(8);

    let result = server.serve(move |req, _info| match router::handle(req, &ctx) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
