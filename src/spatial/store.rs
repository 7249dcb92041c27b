//! Particle Store - growable, index-addressed particle list
//!
//! Indices are stable until a deletion: removing `i` shifts every later
//! particle down by one. Storage grows by a fixed increment when full and
//! never shrinks.

use crate::domain::Particle;

pub struct ParticleStore {
    particles: Vec<Particle>,
    growth: usize,
}

/// What `push` had to do to fit the new particle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    Stored(usize),
    /// Storage was expanded first; carries the index and the new capacity
    Grew { index: usize, capacity: usize },
}

impl ParticleStore {
    pub fn new(initial_capacity: usize, growth: usize) -> Self {
        Self {
            particles: Vec::with_capacity(initial_capacity),
            growth: growth.max(1),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.capacity()
    }

    pub fn push(&mut self, particle: Particle) -> PushOutcome {
        let grew = if self.particles.len() == self.particles.capacity() {
            self.particles.reserve_exact(self.growth);
            true
        } else {
            false
        };

        let index = self.particles.len();
        self.particles.push(particle);

        if grew {
            PushOutcome::Grew { index, capacity: self.particles.capacity() }
        } else {
            PushOutcome::Stored(index)
        }
    }

    /// Remove and return particle `index`, shifting later entries down
    pub fn remove(&mut self, index: usize) -> Option<Particle> {
        if index >= self.particles.len() {
            return None;
        }
        Some(self.particles.remove(index))
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Particle> {
        self.particles.get_mut(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Drop every particle; capacity is kept
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}
