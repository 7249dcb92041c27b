use crate::core::{EngineError, EngineSettings};
use crate::render::Renderer;
use crate::spatial::{default_space_multiplier, CoordinateSpace, ParticleStore, PixelGrid};

use super::step_stats::StepStats;
use super::{Acceleration, ParticleEngine};

pub(super) fn create_engine<R: Renderer>(
    renderer: R,
    settings: EngineSettings,
) -> Result<ParticleEngine<R>, EngineError> {
    settings.validate()?;

    let width = renderer.grid_width();
    let height = renderer.grid_height();
    let multiplier = settings
        .space_multiplier
        .unwrap_or_else(|| default_space_multiplier(width, height));

    let space = CoordinateSpace::new(width, height, multiplier, settings.topology, settings.edges)?;
    let grid = PixelGrid::new(width, height, settings.palette_capacity);
    let store = ParticleStore::new(
        settings.initial_store_capacity.min(grid.size()),
        settings.store_growth,
    );
    let velocity_cap = settings
        .velocity_cap
        .unwrap_or_else(|| multiplier.saturating_mul(4));

    tracing::debug!(
        width,
        height,
        multiplier,
        velocity_cap,
        topology = ?settings.topology,
        edges = ?settings.edges,
        "particle engine created"
    );

    Ok(ParticleEngine {
        renderer,
        grid,
        space,
        store,
        acceleration: Acceleration::Planar(0, 0),
        shake: settings.shake,
        bounce_energy: settings.bounce_energy,
        velocity_cap,
        placement_attempts: settings.placement_attempts,
        frame: 0,
        perf_enabled: false,
        stats: StepStats::default(),
    })
}
