//! Damped Verlet integration.
//!
//! Velocity is not stored between steps; it is re-derived from the last
//! displacement and scaled by the material's damping factor:
//!
//! ```text
//! v      = (x - x_prev) * damping
//! x_next = x + v + a * dt²
//! ```

use glam::Vec3;

use crate::state::ParticleStore;

/// Advances every free particle by one step and clears all accelerations.
///
/// Pinned particles keep both `position` and `previous` untouched.
pub fn integrate(store: &mut ParticleStore, damping: f32, dt: f32) {
    let dt2 = dt * dt;

    for i in 0..store.len() {
        if store.is_pinned(i) {
            store.acceleration[i] = Vec3::ZERO;
            continue;
        }

        let position = store.position[i];
        let velocity = (position - store.previous[i]) * damping;
        let next = position + velocity + store.acceleration[i] * dt2;

        store.velocity[i] = velocity;
        store.previous[i] = position;
        store.position[i] = next;
        store.acceleration[i] = Vec3::ZERO;
    }
}
