//! One mounted map: the catalog, both animation drivers on a shared clock,
//! and the interaction state that turns pointer/keyboard input into a
//! tooltip and navigation targets.
//!
//! The web front end owns a `MapSession` behind `Rc<RefCell<_>>` and only
//! forwards DOM events and timestamps into it.

use crate::catalog::{detail_path, Catalog};
use crate::clock::{FrameClock, TaskHandle};
use crate::geometry::{Lattice, LatticeParams, Viewport};
use crate::interaction::{pick, InteractionState};
use crate::ornament::{OrnamentParams, OrnamentScene};
use crate::physics::{InitOutcome, PhysicsParams, Simulation, Snapshot};
use crate::reveal::{ExcerptBook, RevealController, TimerCommand};
use crate::tooltip::{layout_tooltip, TooltipContent, TooltipLayout, TooltipParams};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Knobs for a session; every field defaults to the site's tuning.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub lattice: LatticeParams,
    pub physics: PhysicsParams,
    pub tooltip: TooltipParams,
    pub ornament: OrnamentParams,
    pub reduced_motion: bool,
    pub hit_radius: Option<f32>,
}

pub struct MapSession {
    catalog: Rc<Catalog>,
    excerpts: ExcerptBook,
    config: SessionConfig,
    sim: Rc<RefCell<Simulation>>,
    ornaments: Rc<RefCell<OrnamentScene>>,
    clock: FrameClock,
    physics_task: Option<TaskHandle>,
    ornament_task: Option<TaskHandle>,
    viewport: Viewport,
    lattice: Lattice,
    interaction: InteractionState,
    reveal: RevealController,
    mounted: bool,
}

impl MapSession {
    /// `seed` fixes the placement jitter; `None` draws it from entropy.
    pub fn new(
        catalog: Rc<Catalog>,
        excerpts: ExcerptBook,
        config: SessionConfig,
        seed: Option<u64>,
    ) -> Self {
        let sim = match seed {
            Some(seed) => Simulation::new(config.physics.clone(), config.lattice.clone(), seed),
            None => Simulation::from_entropy(config.physics.clone(), config.lattice.clone()),
        };
        let ornaments = OrnamentScene::new(&config.ornament);
        let lattice = Lattice::new(Viewport::default(), &config.lattice);
        let mut session = Self {
            catalog,
            excerpts,
            config,
            sim: Rc::new(RefCell::new(sim)),
            ornaments: Rc::new(RefCell::new(ornaments)),
            clock: FrameClock::new(),
            physics_task: None,
            ornament_task: None,
            viewport: Viewport::default(),
            lattice,
            interaction: InteractionState::default(),
            reveal: RevealController::default(),
            mounted: true,
        };
        session.ornament_task = Some(session.clock.register(session.ornaments.clone()));
        session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn ornaments(&self) -> std::cell::Ref<'_, OrnamentScene> {
        self.ornaments.borrow()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.sim.borrow().snapshot()
    }

    pub fn is_physics_running(&self) -> bool {
        self.physics_task.is_some() && self.sim.borrow().is_running()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn rotation_offset(&self) -> f32 {
        self.sim.borrow().rotation_offset()
    }

    /// Feed the latest container measurement. A changed size tears the
    /// physics task down and starts a fresh session; the ornament task is
    /// size independent and keeps running.
    pub fn set_viewport(&mut self, viewport: Viewport) -> Option<InitOutcome> {
        if !self.mounted || viewport == self.viewport {
            return None;
        }
        self.viewport = viewport;
        self.lattice = Lattice::new(viewport, &self.config.lattice);
        if let Some(handle) = self.physics_task.take() {
            self.clock.cancel(handle);
        }
        let outcome = self
            .sim
            .borrow_mut()
            .initialize(self.catalog.songs(), viewport);
        if let InitOutcome::Started(_) = outcome {
            self.physics_task = Some(self.clock.register(self.sim.clone()));
        }
        let snapshot = self.snapshot();
        self.interaction.retain_known(&snapshot.particles);
        Some(outcome)
    }

    /// One repaint at monotonic time `now`.
    pub fn frame(&mut self, now: Duration) {
        if self.mounted {
            self.clock.advance(now);
        }
    }

    /// Unmount: cancel both drivers and discard the particle set.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.clock.cancel_all();
        self.physics_task = None;
        self.ornament_task = None;
        self.sim.borrow_mut().stop();
        self.interaction.clear();
        self.reveal.on_active_changed(None, &self.excerpts, false);
        self.mounted = false;
        log::info!("[session] unmounted");
    }

    fn hit_radius(&self) -> f32 {
        self.config
            .hit_radius
            .unwrap_or(crate::constants::NODE_HIT_RADIUS)
    }

    /// Pointer moved to `point` (CSS px). Returns the timer command when the
    /// active identity changed.
    pub fn pointer_move(&mut self, point: Vec2) -> Option<TimerCommand> {
        let snapshot = self.snapshot();
        let before = self.interaction.active().map(str::to_string);
        match pick(&snapshot.particles, point, self.hit_radius()) {
            Some(p) => {
                self.interaction.pointer_enter(&p.slug);
            }
            None => {
                self.interaction.pointer_leave();
            }
        }
        self.after_interaction(before)
    }

    pub fn pointer_leave(&mut self) -> Option<TimerCommand> {
        let before = self.interaction.active().map(str::to_string);
        self.interaction.pointer_leave();
        self.after_interaction(before)
    }

    pub fn focus_next(&mut self) -> Option<TimerCommand> {
        let snapshot = self.snapshot();
        let before = self.interaction.active().map(str::to_string);
        self.interaction.focus_next(&snapshot.particles);
        self.after_interaction(before)
    }

    pub fn focus_prev(&mut self) -> Option<TimerCommand> {
        let snapshot = self.snapshot();
        let before = self.interaction.active().map(str::to_string);
        self.interaction.focus_prev(&snapshot.particles);
        self.after_interaction(before)
    }

    pub fn blur(&mut self) -> Option<TimerCommand> {
        let before = self.interaction.active().map(str::to_string);
        self.interaction.blur();
        self.after_interaction(before)
    }

    fn after_interaction(&mut self, before: Option<String>) -> Option<TimerCommand> {
        let after = self.interaction.active().map(str::to_string);
        if before == after {
            return None;
        }
        let title = after
            .as_deref()
            .and_then(|slug| self.catalog.get(slug))
            .map(|s| s.title.clone());
        let active = match (after.as_deref(), title.as_deref()) {
            (Some(slug), Some(title)) => Some((slug, title)),
            _ => None,
        };
        Some(
            self.reveal
                .on_active_changed(active, &self.excerpts, self.config.reduced_motion),
        )
    }

    /// One firing of the reveal interval. Returns `true` when the host can
    /// clear its timer.
    pub fn reveal_tick(&mut self) -> bool {
        self.reveal.on_timer()
    }

    /// Slug of the node under `point`, ignoring keyboard focus. Clicks
    /// navigate through this so empty space never opens a song.
    pub fn node_at(&self, point: Vec2) -> Option<String> {
        let snapshot = self.snapshot();
        pick(&snapshot.particles, point, self.hit_radius()).map(|p| p.slug.to_string())
    }

    /// Detail page for the active node, for Enter / Space.
    pub fn activation_target(&self) -> Option<String> {
        self.interaction.active().map(detail_path)
    }

    /// Annotation box for the active node, if any.
    pub fn tooltip(&self) -> Option<TooltipLayout> {
        let slug = self.interaction.active()?;
        let snapshot = self.snapshot();
        let particle = snapshot.find(slug)?;
        let body = self
            .reveal
            .display_text(slug)
            .unwrap_or(particle.title.as_ref());
        let content = TooltipContent::for_particle(particle, body);
        Some(layout_tooltip(
            particle.position,
            self.viewport.center().x,
            self.viewport,
            &content,
            &self.config.tooltip,
        ))
    }
}
