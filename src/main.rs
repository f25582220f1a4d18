use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod state;

use components::AppShell;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logger: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Movie Finder" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
