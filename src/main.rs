mod components;
mod gl;
mod model;
mod render;
mod state;
mod util;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    tracing::info!("webgl demos starting");
    yew::Renderer::<components::App>::new().render();
}
