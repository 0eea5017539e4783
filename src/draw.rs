use crate::constants::*;
use glam::Vec2;
use songmap_core::constants::{CONNECTOR_DOT_RADIUS, NODE_RADIUS};
use songmap_core::{
    label_placement, Camera, InteractionState, Lattice, LineRole, OrnamentScene, Particle,
    Snapshot, TextAnchor, TooltipLayout, Viewport,
};
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Paints the 2-D layer: lattice, nodes, labels, tooltip and the projected
/// ornament labels. Everything is expressed in CSS pixels; the backing
/// store scale is applied once per frame through the context transform.
pub struct MapPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl MapPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn begin(&self, viewport: Viewport, dpr: f64) {
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn dashed(&self, on: bool) {
        let pattern = js_sys::Array::new();
        if on {
            for v in RADIAL_DASH {
                pattern.push(&JsValue::from_f64(v));
            }
        }
        _ = self.ctx.set_line_dash(&pattern);
    }

    fn line(&self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn dot(&self, at: Vec2, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(at.x as f64, at.y as f64, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn text(&self, text: &str, at: Vec2, font: &str, align: &str) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(align);
        _ = self.ctx.fill_text(text, at.x as f64, at.y as f64);
    }

    pub fn draw_lattice(&self, lattice: &Lattice) {
        self.ctx.set_line_width(1.0);
        self.dashed(false);

        self.ctx.set_stroke_style_str(AXIS_STROKE);
        self.line(lattice.axis.from, lattice.axis.to);

        self.ctx.set_stroke_style_str(RIB_STROKE);
        for rib in &lattice.ribs {
            self.line(rib.from, rib.to);
        }

        self.ctx.set_stroke_style_str(LATTICE_STROKE);
        for e in &lattice.ellipses {
            self.ctx.begin_path();
            _ = self.ctx.ellipse(
                e.center.x as f64,
                e.center.y as f64,
                e.rx.max(0.0) as f64,
                e.ry.max(0.0) as f64,
                0.0,
                0.0,
                TAU,
            );
            self.ctx.stroke();
        }

        let label_font = format!("7px {}", MONO_FAMILY);
        for gp in &lattice.grid_points {
            self.ctx.set_fill_style_str(GRID_DOT_FILL);
            self.dot(gp.position, GRID_DOT_RADIUS);
            if let Some(n) = gp.label() {
                self.ctx.set_fill_style_str(GRID_LABEL_FILL);
                self.text(
                    &n.to_string(),
                    gp.position + Vec2::new(4.0, -4.0),
                    &label_font,
                    "start",
                );
            }
        }

        self.ctx.set_fill_style_str(GRID_LABEL_FILL);
        self.text(
            CAPTION_TEXT,
            lattice.caption_anchor,
            &format!("10px {}", MONO_FAMILY),
            "center",
        );
    }

    pub fn draw_nodes(&self, snapshot: &Snapshot, interaction: &InteractionState, center: Vec2) {
        if snapshot.is_empty() {
            return;
        }
        let active = interaction.active();
        let focused = interaction.focused();

        if let Some(p) = active.and_then(|slug| snapshot.find(slug)) {
            self.ctx.set_stroke_style_str(RADIAL_STROKE);
            self.dashed(true);
            self.line(center, p.position);
            self.dashed(false);
        }

        let label_font = format!("9px {}", MONO_FAMILY);
        let index_font = format!("7px {}", MONO_FAMILY);
        for (i, p) in snapshot.particles.iter().enumerate() {
            let is_active = active == Some(&*p.slug);
            if is_active {
                self.ctx.set_fill_style_str(NODE_GLOW);
                self.dot(p.position, NODE_GLOW_RADIUS);
            }
            if focused == Some(&*p.slug) {
                self.ctx.set_stroke_style_str(FOCUS_RING_STROKE);
                self.ctx.begin_path();
                _ = self.ctx.arc(
                    p.position.x as f64,
                    p.position.y as f64,
                    FOCUS_RING_RADIUS,
                    0.0,
                    TAU,
                );
                self.ctx.stroke();
            }
            self.ctx
                .set_fill_style_str(if is_active { NODE_ACTIVE_FILL } else { NODE_FILL });
            self.dot(p.position, NODE_RADIUS as f64);

            self.ctx.set_fill_style_str(NODE_INDEX_FILL);
            self.text(
                &format!("{:02}", i + 1),
                p.position + Vec2::new(0.0, -(NODE_RADIUS + 4.0)),
                &index_font,
                "center",
            );

            self.draw_label(p, center.x, is_active, &label_font);
        }
    }

    fn draw_label(&self, p: &Particle, center_x: f32, is_active: bool, font: &str) {
        let placement = label_placement(p.position, center_x);
        let align = match placement.anchor {
            TextAnchor::Start => "start",
            TextAnchor::End => "end",
        };
        self.ctx.set_fill_style_str(NODE_LABEL_FILL);
        self.ctx.set_text_baseline("middle");
        self.text(&p.title, placement.position, font, align);
        if is_active {
            let (at, bracket) = placement.bracket();
            let bracket_align = match placement.anchor {
                TextAnchor::Start => "end",
                TextAnchor::End => "start",
            };
            self.text(&bracket.to_string(), at, font, bracket_align);
        }
        self.ctx.set_text_baseline("alphabetic");
    }

    pub fn draw_tooltip(&self, layout: &TooltipLayout) {
        self.dashed(false);
        self.ctx.set_stroke_style_str(CONNECTOR_STROKE);
        self.line(layout.connector.from, layout.connector.to);
        self.ctx.set_fill_style_str(CONNECTOR_STROKE);
        self.dot(layout.dot, CONNECTOR_DOT_RADIUS as f64);

        let r = &layout.rect;
        self.ctx.set_fill_style_str(TOOLTIP_FILL);
        self.ctx
            .fill_rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
        self.ctx.set_stroke_style_str(TOOLTIP_STROKE);
        self.ctx
            .stroke_rect(r.x as f64, r.y as f64, r.width as f64, r.height as f64);

        for line in &layout.lines {
            let fill = match line.role {
                LineRole::Header => TOOLTIP_HEADER_FILL,
                LineRole::Index => TOOLTIP_INDEX_FILL,
                LineRole::Body => TOOLTIP_BODY_FILL,
            };
            self.ctx.set_fill_style_str(fill);
            self.text(
                &line.text,
                line.position,
                &format!("{}px {}", line.font_size, MONO_FAMILY),
                "start",
            );
        }
    }

    pub fn draw_ornament_labels(&self, scene: &OrnamentScene, camera: &Camera, viewport: Viewport) {
        self.ctx.set_fill_style_str(ORNAMENT_LABEL_FILL);
        for label in scene.labels() {
            if let Some(at) = camera.project(label.position, viewport) {
                self.text(label.text, at, ORNAMENT_LABEL_FONT, "center");
            }
        }
    }
}
