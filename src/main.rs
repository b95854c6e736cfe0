mod app;
mod assistant;
mod components;
mod config;
mod image_pipeline;
mod message;
mod model;
mod utils;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
