pub mod camera;
pub mod catalog;
pub mod clock;
pub mod constants;
pub mod geometry;
pub mod interaction;
pub mod ornament;
pub mod physics;
pub mod reveal;
pub mod session;
pub mod tooltip;

pub use camera::*;
pub use catalog::*;
pub use clock::*;
pub use geometry::*;
pub use interaction::*;
pub use ornament::*;
pub use physics::*;
pub use reveal::*;
pub use session::*;
pub use tooltip::*;

// Ring pass shader bundled as a string constant
pub static ORNAMENT_WGSL: &str = include_str!("../shaders/ornament.wgsl");
