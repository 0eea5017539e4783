//! Ellipse math and the nested-ring lattice.
//!
//! Everything here is a pure function of the viewport size and
//! [`LatticeParams`]; the renderer and the physics targets both read the same
//! numbers, so calling [`build_lattice`] twice with equal inputs must give
//! equal output.

use crate::constants::*;
use glam::Vec2;
use std::f32::consts::TAU;

/// Measured size of the map container in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A `(0, 0)` or negative size means the container was not laid out yet.
    pub fn is_measured(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Shape of the lattice.
///
/// - `level_count`: number of rings, level 0 at the top
/// - `base_radius`: x-radius of level 0
/// - `vertical_spacing`: distance between consecutive ring centers
/// - `width_ratio`: ry/rx before flattening
/// - `radius_variation`: fraction by which rx shrinks across all levels
#[derive(Clone, Debug, PartialEq)]
pub struct LatticeParams {
    pub level_count: usize,
    pub base_radius: f32,
    pub vertical_spacing: f32,
    pub width_ratio: f32,
    pub radius_variation: f32,
}

impl Default for LatticeParams {
    fn default() -> Self {
        Self {
            level_count: LEVEL_COUNT,
            base_radius: BASE_RADIUS,
            vertical_spacing: VERTICAL_SPACING,
            width_ratio: ELLIPSE_WIDTH_RATIO,
            radius_variation: RADIUS_VARIATION,
        }
    }
}

impl LatticeParams {
    pub fn total_height(&self) -> f32 {
        self.level_count as f32 * self.vertical_spacing
    }
}

/// One ring of the lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipse {
    pub index: usize,
    pub center: Vec2,
    pub rx: f32,
    pub ry: f32,
}

impl Ellipse {
    #[inline]
    pub fn point_at(&self, angle: f32) -> Vec2 {
        point_on_ellipse(self.center, self.rx, self.ry, angle)
    }
}

#[inline]
pub fn point_on_ellipse(center: Vec2, rx: f32, ry: f32, angle: f32) -> Vec2 {
    Vec2::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
}

/// Ring `level` of a lattice laid out for `viewport`.
pub fn ellipse_for_level(viewport: Viewport, params: &LatticeParams, level: usize) -> Ellipse {
    let center = viewport.center();
    let start_y = center.y - params.total_height() / 2.0;
    let levels = params.level_count.max(1) as f32;
    let radius_scale = 1.0 - (level as f32 / levels) * params.radius_variation;
    let rx = params.base_radius * radius_scale;
    Ellipse {
        index: level,
        center: Vec2::new(center.x, start_y + level as f32 * params.vertical_spacing),
        rx,
        ry: rx * params.width_ratio * FLATTEN_FACTOR,
    }
}

pub fn build_lattice(width: f32, height: f32, params: &LatticeParams) -> Vec<Ellipse> {
    let viewport = Viewport::new(width, height);
    (0..params.level_count)
        .map(|i| ellipse_for_level(viewport, params, i))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub position: Vec2,
    pub ellipse_index: usize,
    pub point_index: usize,
}

impl GridPoint {
    /// Sparse numbering drawn next to some dots (1-based).
    pub fn label(&self) -> Option<usize> {
        (self.point_index % GRID_LABEL_STRIDE == 0).then_some(self.point_index + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

/// Everything the map draws for the static structure, recomputed whenever
/// the viewport changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    pub viewport: Viewport,
    pub ellipses: Vec<Ellipse>,
    pub grid_points: Vec<GridPoint>,
    pub ribs: Vec<Segment>,
    pub axis: Segment,
    pub caption_anchor: Vec2,
}

impl Lattice {
    pub fn new(viewport: Viewport, params: &LatticeParams) -> Self {
        let ellipses = build_lattice(viewport.width, viewport.height, params);

        let grid_points = ellipses
            .iter()
            .flat_map(|e| {
                (0..GRID_POINT_COUNT).map(move |i| GridPoint {
                    position: e.point_at(TAU * i as f32 / GRID_POINT_COUNT as f32),
                    ellipse_index: e.index,
                    point_index: i,
                })
            })
            .collect();

        let ribs = match (ellipses.first(), ellipses.last()) {
            (Some(top), Some(bottom)) => (0..RIB_COUNT)
                .map(|i| {
                    let angle = TAU * i as f32 / RIB_COUNT as f32;
                    Segment {
                        from: top.point_at(angle),
                        to: bottom.point_at(angle),
                    }
                })
                .collect(),
            _ => Vec::new(),
        };

        let center = viewport.center();
        let start_y = center.y - params.total_height() / 2.0;
        let end_y = start_y + params.total_height();
        let axis = Segment {
            from: Vec2::new(center.x, start_y - AXIS_OVERSHOOT),
            to: Vec2::new(center.x, end_y + AXIS_OVERSHOOT),
        };

        Self {
            viewport,
            ellipses,
            grid_points,
            ribs,
            axis,
            caption_anchor: Vec2::new(center.x, end_y + CAPTION_OFFSET),
        }
    }

    pub fn ellipse(&self, level: usize) -> Option<&Ellipse> {
        self.ellipses.get(level)
    }
}
