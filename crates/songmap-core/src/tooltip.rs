//! Annotation box placement for the active node.
//!
//! Text is measured with a monospace heuristic (no font metrics are
//! available to the core), wrapped to the widest box the viewport allows,
//! then the box is placed beside the node on the side away from the vertical
//! axis and kept inside the viewport margins.

use crate::constants::*;
use crate::geometry::{Segment, Viewport};
use crate::physics::Particle;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

pub type Lines = SmallVec<[String; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipParams {
    pub min_width: f32,
    pub max_width: f32,
    pub padding: f32,
    pub vertical_padding: f32,
    pub line_height: f32,
    pub offset: f32,
    pub edge_margin: f32,
    pub header_font: f32,
    pub index_font: f32,
    pub body_font: f32,
}

impl Default for TooltipParams {
    fn default() -> Self {
        Self {
            min_width: TOOLTIP_MIN_WIDTH,
            max_width: TOOLTIP_MAX_WIDTH,
            padding: TOOLTIP_PADDING,
            vertical_padding: TOOLTIP_VERTICAL_PADDING,
            line_height: TOOLTIP_LINE_HEIGHT,
            offset: TOOLTIP_OFFSET,
            edge_margin: TOOLTIP_EDGE_MARGIN,
            header_font: TOOLTIP_HEADER_FONT,
            index_font: TOOLTIP_INDEX_FONT,
            body_font: TOOLTIP_BODY_FONT,
        }
    }
}

/// Estimated rendered width of `text` in a monospace face of `font_size`.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    let mut chars = 0usize;
    let mut wide = 0usize;
    for c in text.chars() {
        chars += 1;
        if matches!(c, 'M' | 'W' | '@') {
            wide += 1;
        }
    }
    chars as f32 * font_size * CHAR_WIDTH_FACTOR + wide as f32 * font_size * WIDE_CHAR_EXTRA
}

/// How many characters of `font_size` fit in `width`. Never less than one.
pub fn chars_per_line(width: f32, font_size: f32) -> usize {
    let advance = font_size * CHAR_WIDTH_FACTOR;
    if advance <= 0.0 || !width.is_finite() {
        return 1;
    }
    ((width / advance).floor() as usize).max(1)
}

/// Greedy word wrap. Explicit newlines are kept as breaks and words longer
/// than a line are split. Text that already fits on one line comes back
/// unchanged.
pub fn wrap_text(text: &str, chars_per_line: usize) -> Lines {
    let limit = chars_per_line.max(1);
    if !text.contains('\n') && text.chars().count() <= limit {
        return smallvec![text.to_string()];
    }

    let mut lines = Lines::new();
    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0usize;
        for word in paragraph.split_whitespace() {
            let mut word: &str = word;
            let mut word_len = word.chars().count();

            // Hard split words that can never fit.
            while word_len > limit {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let split_at = word
                    .char_indices()
                    .nth(limit)
                    .map(|(i, _)| i)
                    .unwrap_or(word.len());
                lines.push(word[..split_at].to_string());
                word = &word[split_at..];
                word_len -= limit;
            }
            if word_len == 0 {
                continue;
            }

            let needed = if current_len == 0 {
                word_len
            } else {
                current_len + 1 + word_len
            };
            if needed > limit {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(word);
            current_len += word_len;
        }
        lines.push(current);
    }
    lines
}

/// Wrap `text` so every line's estimated width fits in `width`. Lines heavy
/// in wide glyphs get a shorter character budget than [`chars_per_line`].
pub fn wrap_to_width(text: &str, width: f32, font_size: f32) -> Lines {
    let mut limit = chars_per_line(width, font_size);
    loop {
        let lines = wrap_text(text, limit);
        let fits = lines
            .iter()
            .all(|l| estimate_text_width(l, font_size) <= width);
        if fits || limit == 1 {
            return lines;
        }
        limit -= 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Closest point on the rectangle's outline.
    pub fn nearest_boundary_point(&self, p: Vec2) -> Vec2 {
        let clamped = Vec2::new(p.x.clamp(self.x, self.right()), p.y.clamp(self.y, self.bottom()));
        if !self.contains(p) {
            return clamped;
        }
        let candidates = [
            (p.x - self.x, Vec2::new(self.x, p.y)),
            (self.right() - p.x, Vec2::new(self.right(), p.y)),
            (p.y - self.y, Vec2::new(p.x, self.y)),
            (self.bottom() - p.y, Vec2::new(p.x, self.bottom())),
        ];
        candidates
            .iter()
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|c| c.1)
            .unwrap_or(clamped)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineRole {
    Header,
    Index,
    Body,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLine {
    pub text: String,
    pub font_size: f32,
    pub role: LineRole,
    /// Baseline position.
    pub position: Vec2,
}

/// Text shown in the box before wrapping.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub header: String,
    pub index_line: String,
    pub body: String,
}

impl TooltipContent {
    /// `body` is the title, or the revealed part of a scripted excerpt.
    pub fn for_particle(particle: &Particle, body: &str) -> Self {
        Self {
            header: "Node Classification".to_string(),
            index_line: format!("Temporal Index: {}", particle.ellipse_index + 1),
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Vertical {
    Above,
    Below,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipLayout {
    pub rect: Rect,
    pub lines: SmallVec<[TooltipLine; 6]>,
    pub connector: Segment,
    pub dot: Vec2,
    pub side: Side,
    pub vertical: Vertical,
}

/// Lay out the box for a node at `anchor`.
pub fn layout_tooltip(
    anchor: Vec2,
    center_x: f32,
    viewport: Viewport,
    content: &TooltipContent,
    params: &TooltipParams,
) -> TooltipLayout {
    let margin = params.edge_margin;
    let avail_w = (viewport.width - 2.0 * margin).max(0.0);
    let avail_h = (viewport.height - 2.0 * margin).max(0.0);
    let max_box_w = params.max_width.min(avail_w).max(0.0);
    let text_w = (max_box_w - 2.0 * params.padding).max(0.0);

    let mut raw: SmallVec<[(String, f32, LineRole); 6]> = SmallVec::new();
    for (text, font, role) in [
        (&content.header, params.header_font, LineRole::Header),
        (&content.index_line, params.index_font, LineRole::Index),
        (&content.body, params.body_font, LineRole::Body),
    ] {
        for line in wrap_to_width(text, text_w, font) {
            raw.push((line, font, role));
        }
    }

    // Drop trailing body lines that cannot fit vertically.
    let max_lines = ((avail_h - 2.0 * params.vertical_padding) / params.line_height)
        .floor()
        .max(1.0) as usize;
    if raw.len() > max_lines {
        raw.truncate(max_lines);
        if let Some(last) = raw.last_mut() {
            let keep = last.0.chars().count().saturating_sub(1);
            last.0 = last.0.chars().take(keep).collect::<String>() + "…";
        }
    }

    let widest = raw
        .iter()
        .map(|(t, f, _)| estimate_text_width(t, *f))
        .fold(0.0f32, f32::max);
    let mut width = params.min_width.max(widest + 2.0 * params.padding);
    if avail_w > 0.0 {
        width = width.min(avail_w);
    }
    let height = params.line_height * raw.len() as f32 + 2.0 * params.vertical_padding;

    // Away from the vertical axis, above the node.
    let mut side = if anchor.x < center_x {
        Side::Left
    } else {
        Side::Right
    };
    let mut vertical = Vertical::Above;
    let x_for = |s: Side| match s {
        Side::Left => anchor.x - params.offset - width,
        Side::Right => anchor.x + params.offset,
    };
    let y_for = |v: Vertical| match v {
        Vertical::Above => anchor.y - params.offset - height,
        Vertical::Below => anchor.y + params.offset,
    };

    let fits_x = |x: f32| x >= margin && x + width <= viewport.width - margin;
    let fits_y = |y: f32| y >= margin && y + height <= viewport.height - margin;

    let mut x = x_for(side);
    if !fits_x(x) {
        let flipped = match side {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
        if fits_x(x_for(flipped)) {
            side = flipped;
            x = x_for(flipped);
        }
    }
    let mut y = y_for(vertical);
    if !fits_y(y) && fits_y(y_for(Vertical::Below)) {
        vertical = Vertical::Below;
        y = y_for(vertical);
    }

    x = x.min(viewport.width - margin - width).max(margin);
    y = y.min(viewport.height - margin - height).max(margin);

    let rect = Rect {
        x,
        y,
        width,
        height,
    };

    let lines = raw
        .into_iter()
        .enumerate()
        .map(|(i, (text, font_size, role))| TooltipLine {
            text,
            font_size,
            role,
            position: Vec2::new(
                x + params.padding,
                y + params.vertical_padding + 10.0 + params.line_height * i as f32,
            ),
        })
        .collect();

    let end = rect.nearest_boundary_point(anchor);
    TooltipLayout {
        rect,
        lines,
        connector: Segment {
            from: anchor,
            to: end,
        },
        dot: end,
        side,
        vertical,
    }
}
