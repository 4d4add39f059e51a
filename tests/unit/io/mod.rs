mod configuration;
mod error;
mod image;
mod progress;
mod render;
