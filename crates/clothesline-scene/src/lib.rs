//! # clothesline-scene
//!
//! A rod with a fixed number of slots, the cloths hung on it, and the
//! per-frame driver that feeds them wind and rain.
//!
//! ## Example
//!
//! ```
//! use clothesline_scene::{Clothesline, FrameDriver, LineLayout, SceneParams};
//! use clothesline_solver::{ManualClock, NoTurbulence, SolverConfig};
//!
//! let mut line = Clothesline::new(LineLayout::default(), SolverConfig::calm())
//!     .unwrap()
//!     .with_turbulence(Box::new(NoTurbulence))
//!     .with_clock(Box::new(ManualClock::default()));
//!
//! let id = line.hang("Cotton").unwrap();
//! let mut driver = FrameDriver::new(SceneParams::default());
//! driver.advance(&mut line, 1.0 / 60.0);
//!
//! assert_eq!(line.len(), 1);
//! assert_eq!(line.pinned_corners(id).unwrap()[0].y, 15.0);
//! ```

pub mod driver;
pub mod layout;
pub mod line;
pub mod params;
pub mod scenario;

pub use driver::{FrameDriver, FrameReport};
pub use layout::LineLayout;
pub use line::Clothesline;
pub use params::SceneParams;
pub use scenario::ScenarioConfig;
