//! Spatial - pixel grid, particle space, cube seams and particle storage

pub mod grid;
pub mod space;
pub mod cube;
pub mod store;

pub use grid::PixelGrid;
pub use space::{advance, default_space_multiplier, CoordinateSpace, MovingPixel, Topology, VELOCITY_DIVISOR};
pub use cube::{CubeTopology, Crossing, SeamMove};
pub use store::{ParticleStore, PushOutcome};
