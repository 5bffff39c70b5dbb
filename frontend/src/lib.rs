pub mod app;
pub mod audio;
pub mod canvas;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

pub use app::App;
