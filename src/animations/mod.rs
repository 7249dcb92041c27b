//! Animations - simple renderer-driven effects that share the grid helpers

pub mod crawler;

pub use crawler::Crawler;
