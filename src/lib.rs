pub mod config;
pub mod contact;
pub mod content;
pub mod driver;
pub mod motion;
pub mod overlay;
pub mod scroll;

#[cfg(target_arch = "wasm32")]
pub mod frontend;
