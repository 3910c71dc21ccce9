//! Per-frame driver for one level
//!
//! Owns the targets, the fragment field and the run statistics. The scene
//! calls `tick` once per frame with whatever input finished that frame;
//! nothing here is global, so several playfields can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::fragment::{CollectorId, FragmentField, spawn_fragment_pair};
use crate::impact::{
    Material, Stroke, TargetShape, apply_damage, apply_radial_damage, precision_score,
    resolve_impact_with,
};
use crate::progress::RunStats;
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Chips thrown off by a cut that doesn't destroy its target
const CHIPS_PER_NICK: usize = 3;

/// How this level turns input into damage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DamageMode {
    /// Swipes cut targets; each hit removes the material's hit damage
    Slice,
    /// Taps set off blasts with linear falloff
    Demolition { power: f32, radius: f32 },
}

/// Input finished during a frame
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerInput {
    Tap(Vec2),
    Swipe(Stroke),
}

impl PlayerInput {
    /// Classify a released stroke: fewer than 2 samples is a tap
    pub fn from_stroke(stroke: Stroke) -> Option<Self> {
        if stroke.is_swipe() {
            Some(PlayerInput::Swipe(stroke))
        } else {
            stroke.points().first().map(|p| PlayerInput::Tap(p.pos))
        }
    }
}

/// Something the scene may want to react to (sound, HUD, rewards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldEvent {
    TargetHit { id: u32, precision: f32 },
    Blast { id: u32, damage: f32 },
    TargetDestroyed { id: u32, material: Material },
    FragmentCollected { collector: CollectorId },
    /// Input that touched no target
    Missed,
    /// Every target destroyed
    Cleared { time: f32 },
}

/// One level's worth of targets, debris and stats
#[derive(Debug, Clone)]
pub struct Playfield {
    mode: DamageMode,
    tuning: Tuning,
    settings: Settings,
    targets: Vec<TargetShape>,
    fragments: FragmentField,
    stats: RunStats,
    events: Vec<FieldEvent>,
}

impl Playfield {
    pub fn new(mode: DamageMode, tuning: Tuning, settings: Settings, seed: u64) -> Self {
        let fragments = FragmentField::from_tuning(&tuning, settings.max_fragments(), seed);
        Self {
            mode,
            tuning,
            settings,
            targets: Vec::new(),
            fragments,
            stats: RunStats::default(),
            events: Vec::new(),
        }
    }

    /// Start a new level with `targets`; debris and stats are cleared
    pub fn reset(&mut self, mut targets: Vec<TargetShape>) {
        targets.sort_by_key(|t| t.id);
        targets.retain(|t| {
            if t.shape.is_degenerate() {
                log::warn!("Skipping degenerate target {}", t.id);
                return false;
            }
            !t.is_destroyed()
        });
        log::debug!("Level reset with {} targets", targets.len());
        self.targets = targets;
        self.fragments.clear();
        self.stats = RunStats::default();
        self.events.clear();
    }

    pub fn mode(&self) -> DamageMode {
        self.mode
    }

    pub fn targets(&self) -> &[TargetShape] {
        &self.targets
    }

    pub fn fragments(&self) -> &FragmentField {
        &self.fragments
    }

    /// For registering collectors
    pub fn fragments_mut(&mut self) -> &mut FragmentField {
        &mut self.fragments
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Events from the most recent `tick`
    pub fn events(&self) -> &[FieldEvent] {
        &self.events
    }

    /// Advance one frame
    pub fn tick(&mut self, input: Option<PlayerInput>, dt: f32) -> &[FieldEvent] {
        self.events.clear();
        self.stats.elapsed += dt;

        match (input, self.mode) {
            (Some(PlayerInput::Swipe(stroke)), DamageMode::Slice) => self.slice(&stroke),
            (Some(PlayerInput::Tap(point)), DamageMode::Demolition { power, radius }) => {
                self.blast(point, power, radius)
            }
            (Some(PlayerInput::Tap(_)), DamageMode::Slice) => {
                log::trace!("Tap ignored in slice mode");
            }
            (Some(PlayerInput::Swipe(_)), DamageMode::Demolition { .. }) => {
                log::trace!("Swipe ignored in demolition mode");
            }
            (None, _) => {}
        }

        let events = &mut self.events;
        self.fragments.update(dt, |collector, _| {
            events.push(FieldEvent::FragmentCollected { collector });
        });

        self.targets.retain(|t| !t.is_destroyed());

        if self.targets.is_empty() && self.stats.destroyed > 0 && !self.stats.is_cleared() {
            let time = self.stats.elapsed;
            self.stats.clear_time = Some(time);
            self.events.push(FieldEvent::Cleared { time });
            log::info!("Level cleared in {:.2}s", time);
        }

        &self.events
    }

    fn slice(&mut self, stroke: &Stroke) {
        let mut any_hit = false;

        for target in self.targets.iter_mut().filter(|t| !t.is_destroyed()) {
            let result = resolve_impact_with(stroke, target, &self.tuning.impulse);
            if !result.hit {
                continue;
            }
            any_hit = true;
            self.stats.record_hit(result.precision);
            self.events.push(FieldEvent::TargetHit {
                id: target.id,
                precision: result.precision,
            });

            let hit_damage = target.material.hit_damage();
            if apply_damage(target, hit_damage) {
                let lifetime = self.tuning.fragment_lifetime;
                let halves = spawn_fragment_pair(target, result.angle, result.impulse, result.stroke_velocity);
                self.fragments.spawn_all(halves.map(|f| f.with_lifetime(lifetime)));
                self.stats.destroyed += 1;
                log::debug!("{} target {} destroyed", target.material.as_str(), target.id);
                self.events.push(FieldEvent::TargetDestroyed {
                    id: target.id,
                    material: target.material,
                });
            } else {
                let chips = self.settings.debris_count(CHIPS_PER_NICK);
                self.fragments.spawn_debris(
                    result.midpoint(),
                    chips,
                    self.tuning.impulse.min,
                    target.material.debris_color(),
                    self.tuning.debris_lifetime,
                );
            }
        }

        if !any_hit {
            self.events.push(FieldEvent::Missed);
        }
    }

    fn blast(&mut self, point: Vec2, power: f32, radius: f32) {
        let mut any_hit = false;

        for target in self.targets.iter_mut().filter(|t| !t.is_destroyed()) {
            let scaled = power * target.material.damage_scale();
            let damage = apply_radial_damage(target, point, scaled, radius);
            if damage <= 0.0 {
                continue;
            }
            any_hit = true;
            let precision = precision_score(point, target.center(), target.bounds().half_diagonal());
            self.stats.record_hit(precision);
            self.events.push(FieldEvent::Blast { id: target.id, damage });

            if target.is_destroyed() {
                // Closer blasts throw rubble harder
                let falloff = if scaled > 0.0 { (damage / scaled).clamp(0.0, 1.0) } else { 0.0 };
                let impulse = &self.tuning.impulse;
                let speed = impulse.min + (impulse.max - impulse.min) * falloff;
                let count = self.settings.debris_count(self.tuning.debris_per_break);
                self.fragments.spawn_debris(
                    target.center(),
                    count,
                    speed,
                    target.material.debris_color(),
                    self.tuning.debris_lifetime,
                );
                self.stats.destroyed += 1;
                log::debug!("{} target {} destroyed", target.material.as_str(), target.id);
                self.events.push(FieldEvent::TargetDestroyed {
                    id: target.id,
                    material: target.material,
                });
            }
        }

        if !any_hit {
            self.events.push(FieldEvent::Missed);
        }
    }
}
