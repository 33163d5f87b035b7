mod app;
mod data;
mod flashcards;
mod progress;
mod quiz;
mod reading;
mod sampling;
mod speech;
mod storage;
mod timer;
mod views;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
