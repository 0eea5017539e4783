use std::time::Duration;

// Shared tuning constants for the orbital song map.

// Physics
pub const COLLISION_RADIUS: f32 = 20.0; // per-particle separation radius (px)
pub const COLLISION_STRENGTH: f32 = 0.6; // fraction of overlap resolved per step
pub const RADIAL_STRENGTH: f32 = 0.08; // restoring pull toward the orbital target
pub const VERTICAL_PULL_FACTOR: f32 = 2.0; // ellipses are flat, so y converges faster
pub const VELOCITY_DECAY: f32 = 0.5; // drag applied to velocity every step
pub const ORBITAL_SPEED: f32 = 0.0003; // radians per step, very slow orbit
pub const TICK_INTERVAL: Duration = Duration::from_micros(33_333); // ~30 steps per second

// Initial placement
pub const ANGLE_JITTER: f32 = 0.15; // +/- radians around the even spacing
pub const JITTER_AMOUNT: f32 = 15.0; // positional jitter span (px), applied as +/- half

// Lattice structure
pub const LEVEL_COUNT: usize = 8; // number of elliptical rings
pub const VERTICAL_SPACING: f32 = 55.0; // distance between ring centers (px)
pub const ELLIPSE_WIDTH_RATIO: f32 = 0.85;
pub const BASE_RADIUS: f32 = 140.0; // x-radius of the top ring (px)
pub const RADIUS_VARIATION: f32 = 0.15; // how much rings shrink from top to bottom
pub const FLATTEN_FACTOR: f32 = 0.35; // squash ry for a perspective look
pub const GRID_POINT_COUNT: usize = 24; // dots around each ellipse
pub const GRID_LABEL_STRIDE: usize = 3; // every third dot carries its number
pub const RIB_COUNT: usize = 8; // vertical lines joining top and bottom rings
pub const AXIS_OVERSHOOT: f32 = 40.0; // central axis extends past the structure (px)
pub const CAPTION_OFFSET: f32 = 70.0; // "Music" caption below the last ring (px)

// Nodes
pub const NODE_RADIUS: f32 = 4.0;
pub const NODE_HIT_RADIUS: f32 = 12.0; // pointer pick radius (px)
pub const LABEL_OFFSET: f32 = 12.0; // label distance from its node (px)
pub const LABEL_RAISE: f32 = 2.0;

// Tooltip
pub const TOOLTIP_MIN_WIDTH: f32 = 120.0;
pub const TOOLTIP_MAX_WIDTH: f32 = 260.0;
pub const TOOLTIP_PADDING: f32 = 10.0; // horizontal padding inside the box
pub const TOOLTIP_VERTICAL_PADDING: f32 = 8.0;
pub const TOOLTIP_LINE_HEIGHT: f32 = 12.0;
pub const TOOLTIP_OFFSET: f32 = 20.0; // gap between node and box
pub const TOOLTIP_EDGE_MARGIN: f32 = 12.0; // minimum distance from any viewport edge
pub const TOOLTIP_HEADER_FONT: f32 = 9.0;
pub const TOOLTIP_INDEX_FONT: f32 = 8.0;
pub const TOOLTIP_BODY_FONT: f32 = 7.0;
pub const CHAR_WIDTH_FACTOR: f32 = 0.6; // monospace advance as a fraction of font size
pub const WIDE_CHAR_EXTRA: f32 = 0.2; // extra advance for M, W and @
pub const CONNECTOR_DOT_RADIUS: f32 = 2.0;

// Text reveal
pub const REVEAL_INTERVAL: Duration = Duration::from_millis(35); // one character per tick

// Ornament scene
pub const ORNAMENT_CLUSTER_COUNT: usize = 5;
pub const ORNAMENT_RINGS_PER_CLUSTER: usize = 3;
pub const ORNAMENT_LABELS_PER_CLUSTER: usize = 4;
pub const ORNAMENT_BASE_SEED: f32 = 17.0;
pub const ORNAMENT_MIN_SPEED: f32 = 0.08; // radians per second
pub const ORNAMENT_MAX_SPEED: f32 = 0.35;
pub const ORNAMENT_FIELD_HALF_EXTENT: f32 = 4.5; // clusters spread over +/- this in x
pub const ORNAMENT_DEPTH_RANGE: (f32, f32) = (-6.0, -2.0); // z placement range

// Camera used by the ornament pass and label projection
pub const CAMERA_Z: f32 = 6.0;
pub const CAMERA_FOVY: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
