use wasm_bindgen::prelude::*;

/// Counters for the last step; `step_ms` stays 0 unless timing is enabled
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) particles: u32,
    pub(super) moved: u32,
    pub(super) collisions: u32,
    pub(super) wall_hits: u32,
    pub(super) seam_crossings: u32,
    pub(super) corner_stops: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles(&self) -> u32 { self.particles }
    /// Grains that changed display cell
    #[wasm_bindgen(getter)]
    pub fn moved(&self) -> u32 { self.moved }
    #[wasm_bindgen(getter)]
    pub fn collisions(&self) -> u32 { self.collisions }
    #[wasm_bindgen(getter)]
    pub fn wall_hits(&self) -> u32 { self.wall_hits }
    #[wasm_bindgen(getter)]
    pub fn seam_crossings(&self) -> u32 { self.seam_crossings }
    /// Diagonal panel exits held on their source panel
    #[wasm_bindgen(getter)]
    pub fn corner_stops(&self) -> u32 { self.corner_stops }
}
