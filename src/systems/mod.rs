//! Systems - rules applied to the grains each step

pub mod physics;
