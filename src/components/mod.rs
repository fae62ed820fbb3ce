pub mod app;
mod error_banner;
mod gl_view;
mod top_bar;

pub use app::App;
