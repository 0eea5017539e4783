/// Page wiring and paint styling for the map canvases.
///
/// Geometry and physics tuning lives in `songmap_core::constants`; this file
/// only holds what the browser side needs to find elements and paint them.
// Element ids the page template provides
pub const ROOT_ID: &str = "songmap-root";
pub const MAP_CANVAS_ID: &str = "map-canvas";
pub const ORNAMENT_CANVAS_ID: &str = "ornament-canvas";
pub const ARCHIVE_COUNT_ID: &str = "archive-count";
pub const MAP_HINT_ID: &str = "map-hint";

pub const MAP_HINT_TEXT: &str = "Select a node to access a song";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Lattice strokes
pub const LATTICE_STROKE: &str = "rgba(180, 196, 220, 0.22)";
pub const RIB_STROKE: &str = "rgba(180, 196, 220, 0.12)";
pub const AXIS_STROKE: &str = "rgba(180, 196, 220, 0.30)";
pub const GRID_DOT_FILL: &str = "rgba(180, 196, 220, 0.35)";
pub const GRID_LABEL_FILL: &str = "rgba(180, 196, 220, 0.45)";
pub const GRID_DOT_RADIUS: f64 = 1.2;
pub const CAPTION_TEXT: &str = "Music";

// Nodes
pub const NODE_FILL: &str = "#e6edf7";
pub const NODE_ACTIVE_FILL: &str = "#ffffff";
pub const NODE_GLOW: &str = "rgba(140, 190, 255, 0.35)";
pub const NODE_GLOW_RADIUS: f64 = 10.0; // halo around the active node (px)
pub const FOCUS_RING_STROKE: &str = "rgba(140, 190, 255, 0.9)";
pub const FOCUS_RING_RADIUS: f64 = 8.0;
pub const NODE_LABEL_FILL: &str = "rgba(230, 237, 247, 0.85)";
pub const NODE_INDEX_FILL: &str = "rgba(230, 237, 247, 0.45)";
pub const RADIAL_STROKE: &str = "rgba(140, 190, 255, 0.35)";
pub const RADIAL_DASH: [f64; 2] = [3.0, 4.0];

// Tooltip box
pub const TOOLTIP_FILL: &str = "rgba(10, 14, 24, 0.88)";
pub const TOOLTIP_STROKE: &str = "rgba(80, 110, 150, 0.55)";
pub const TOOLTIP_HEADER_FILL: &str = "rgba(140, 190, 255, 0.9)";
pub const TOOLTIP_INDEX_FILL: &str = "rgba(180, 196, 220, 0.7)";
pub const TOOLTIP_BODY_FILL: &str = "#e6edf7";
pub const CONNECTOR_STROKE: &str = "rgba(140, 190, 255, 0.55)";

// Ornament labels drawn over the WebGPU rings
pub const ORNAMENT_LABEL_FILL: &str = "rgba(180, 196, 220, 0.28)";
pub const ORNAMENT_LABEL_FONT: &str = "8px monospace";
pub const ORNAMENT_RING_TINT: [f32; 4] = [0.55, 0.68, 0.86, 0.6];
pub const ORNAMENT_CLEAR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};
pub const RING_SEGMENTS: u32 = 96; // line-strip vertices per unit circle, closed

pub const MONO_FAMILY: &str = "monospace";
