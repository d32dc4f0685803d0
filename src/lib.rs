use wasm_bindgen::prelude::*;

mod client;
pub mod data;
pub mod history;
pub mod routes;

#[wasm_bindgen(start)]
pub fn run() {
    client::launch();
}
