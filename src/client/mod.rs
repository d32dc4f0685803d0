use crate::{
    client::pages::{app, AppProps},
    routes::RouteTable,
};

mod api;
mod components;
mod pages;

pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

pub fn launch() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();
    let routes = match RouteTable::app() {
        Ok(routes) => routes,
        Err(err) => {
            log::error!("Invalid route table: {err}");
            return;
        }
    };
    log::info!("Starting with {} routes, API at {API_URL}", routes.len());
    dioxus::web::launch_with_props(app, AppProps { routes }, |config| config);
}
