//! Physics - per-step motion rules for grains
//!
//! - forces: acceleration, jitter and the speed cap
//! - boundary: outer edges, wrap and cube seams
//! - collision: sliding against occupied cells

pub mod types;
pub mod forces;
pub mod boundary;
pub mod collision;

pub use types::{Candidate, MoveResult};
pub use forces::{accelerate, cap_velocity};
pub use boundary::{hold_at_seam, rebound, resolve_edges};
pub use collision::resolve_collision;
