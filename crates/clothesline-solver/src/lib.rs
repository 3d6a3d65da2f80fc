//! # clothesline-solver
//!
//! Cloth dynamics: particle state, force accumulation, time integration,
//! and iterative constraint relaxation.
//!
//! ## Step pipeline
//!
//! ```text
//! ForceModel::accumulate   gravity + wind + rain + ripple → acceleration
//! integrator::integrate    damped Verlet, pinned particles skipped
//! ConstraintSolver::relax  Gauss-Seidel passes over the constraint set
//! Cloth::simulate          copies positions into the render mesh, normals
//! ```
//!
//! ## Key Types
//!
//! - [`ParticleStore`]: SoA buffers for all per-particle state
//! - [`ConstraintSet`]: Structural and shear rest-length links
//! - [`ForceModel`] / [`Turbulence`]: Per-step forces with injectable noise
//! - [`Cloth`]: One simulated cloth instance owning all of the above

pub mod clock;
pub mod cloth;
pub mod config;
pub mod constraints;
pub mod forces;
pub mod integrator;
pub mod relaxation;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use cloth::{Cloth, ClothInfo, StepReport};
pub use config::SolverConfig;
pub use constraints::{Constraint, ConstraintKind, ConstraintSet};
pub use forces::{ForceModel, NoTurbulence, RandomTurbulence, StepForces, Turbulence};
pub use relaxation::{ConstraintSolver, RelaxationReport};
pub use state::ParticleStore;
