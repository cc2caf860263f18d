mod api;
mod app;
mod components;
mod config;
mod hooks;
mod models;
mod pages;
mod state;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    if config::CONFIG.debug_logs {
        gloo::console::debug!(format!("library admin using {}", config::CONFIG.api_base_url));
    }
    yew::Renderer::<App>::new().render();
}
