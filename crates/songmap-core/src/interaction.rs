//! Hover/focus tracking and pointer hit testing.

use crate::constants::{LABEL_OFFSET, LABEL_RAISE};
use crate::physics::Particle;
use glam::Vec2;

/// Pointer hover and keyboard focus, tracked independently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    hovered: Option<String>,
    focused: Option<String>,
}

impl InteractionState {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Hover wins over focus.
    pub fn active(&self) -> Option<&str> {
        self.hovered().or(self.focused())
    }

    /// Returns `true` when the hovered identity changed.
    pub fn pointer_enter(&mut self, slug: &str) -> bool {
        if self.hovered.as_deref() == Some(slug) {
            return false;
        }
        self.hovered = Some(slug.to_string());
        true
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    pub fn focus(&mut self, slug: &str) -> bool {
        if self.focused.as_deref() == Some(slug) {
            return false;
        }
        self.focused = Some(slug.to_string());
        true
    }

    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    pub fn clear(&mut self) {
        self.hovered = None;
        self.focused = None;
    }

    /// Move keyboard focus to the next particle in catalog order, wrapping.
    pub fn focus_next(&mut self, particles: &[Particle]) -> Option<&str> {
        self.focus_step(particles, 1)
    }

    pub fn focus_prev(&mut self, particles: &[Particle]) -> Option<&str> {
        self.focus_step(particles, -1)
    }

    fn focus_step(&mut self, particles: &[Particle], delta: isize) -> Option<&str> {
        if particles.is_empty() {
            self.focused = None;
            return None;
        }
        let n = particles.len() as isize;
        let current = self
            .focused
            .as_deref()
            .and_then(|slug| particles.iter().position(|p| &*p.slug == slug));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(n),
            None if delta >= 0 => 0,
            None => n - 1,
        };
        self.focused = Some(particles[next as usize].slug.to_string());
        self.focused.as_deref()
    }

    /// Drop identities that no longer exist (after a catalog swap).
    pub fn retain_known(&mut self, particles: &[Particle]) {
        let known = |s: &Option<String>| {
            s.as_deref()
                .map(|slug| particles.iter().any(|p| &*p.slug == slug))
                .unwrap_or(true)
        };
        if !known(&self.hovered) {
            self.hovered = None;
        }
        if !known(&self.focused) {
            self.focused = None;
        }
    }
}

/// Nearest particle within `radius` of `point`.
pub fn pick(particles: &[Particle], point: Vec2, radius: f32) -> Option<&Particle> {
    let r2 = radius * radius;
    particles
        .iter()
        .map(|p| (p, p.position.distance_squared(point)))
        .filter(|(_, d2)| *d2 <= r2)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(p, _)| p)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    End,
}

/// Where a node's title label goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub position: Vec2,
    pub anchor: TextAnchor,
}

impl LabelPlacement {
    /// Bracket drawn beside the label of the active node.
    pub fn bracket(&self) -> (Vec2, char) {
        match self.anchor {
            TextAnchor::Start => (self.position - Vec2::new(6.0, 0.0), '['),
            TextAnchor::End => (self.position + Vec2::new(6.0, 0.0), ']'),
        }
    }
}

/// Labels point away from the vertical axis so they never cross it.
pub fn label_placement(position: Vec2, center_x: f32) -> LabelPlacement {
    let right = position.x - center_x > 0.0;
    LabelPlacement {
        position: Vec2::new(
            position.x + if right { LABEL_OFFSET } else { -LABEL_OFFSET },
            position.y - LABEL_RAISE,
        ),
        anchor: if right {
            TextAnchor::Start
        } else {
            TextAnchor::End
        },
    }
}
