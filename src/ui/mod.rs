//! UI layer - egui screens and the reducer-style store that drives them

pub mod app;
pub mod spacing;
pub mod theme;
pub mod views;
