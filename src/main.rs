#![allow(non_snake_case)]

use tracing::Level;

mod frontend;
mod roles;

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    tracing::info!(roles = roles::ROLE_OPTIONS.len(), "launching portal");
    dioxus::prelude::launch(frontend::App);
}
