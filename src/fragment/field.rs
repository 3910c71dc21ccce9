//! Live fragment list with collectors and a seeded debris RNG

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::piece::{Fragment, FragmentShape, FragmentTag, is_expired};
use crate::geom::Polygon;
use crate::tuning::{FragmentPhysics, Tuning};

pub type CollectorId = u32;

/// A scene obstacle that swallows fragments (funnels, blenders, bins)
#[derive(Debug, Clone, PartialEq)]
pub struct Collector {
    pub id: CollectorId,
    pub area: Polygon,
}

/// What happened during one `FragmentField::update`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    pub collected: usize,
    pub expired: usize,
}

/// Owns every live fragment of a scene
#[derive(Debug, Clone)]
pub struct FragmentField {
    /// Oldest first
    fragments: VecDeque<Fragment>,
    collectors: Vec<Collector>,
    physics: FragmentPhysics,
    floor_y: f32,
    capacity: usize,
    rng: Pcg32,
}

impl FragmentField {
    pub fn new(physics: FragmentPhysics, floor_y: f32, capacity: usize, seed: u64) -> Self {
        Self {
            fragments: VecDeque::with_capacity(capacity.min(crate::consts::MAX_FRAGMENTS)),
            collectors: Vec::new(),
            physics,
            floor_y,
            capacity: capacity.min(crate::consts::MAX_FRAGMENTS),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn from_tuning(tuning: &Tuning, capacity: usize, seed: u64) -> Self {
        Self::new(tuning.physics, tuning.floor_y, capacity, seed)
    }

    pub fn fragments(&self) -> &VecDeque<Fragment> {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn physics(&self) -> &FragmentPhysics {
        &self.physics
    }

    pub fn clear(&mut self) {
        self.fragments.clear();
    }

    /// Register an obstacle; fragments whose center enters it are collected
    pub fn add_collector(&mut self, id: CollectorId, area: Polygon) {
        if !area.is_valid() {
            log::warn!("Ignoring collector {} with {} vertices", id, area.points.len());
            return;
        }
        self.collectors.push(Collector { id, area });
    }

    pub fn remove_collector(&mut self, id: CollectorId) {
        self.collectors.retain(|c| c.id != id);
    }

    /// Add a fragment, evicting the oldest when the field is full
    pub fn spawn(&mut self, fragment: Fragment) {
        if self.capacity == 0 {
            return;
        }
        if self.fragments.len() >= self.capacity {
            self.fragments.pop_front();
        }
        self.fragments.push_back(fragment);
    }

    pub fn spawn_all(&mut self, fragments: impl IntoIterator<Item = Fragment>) {
        for fragment in fragments {
            self.spawn(fragment);
        }
    }

    /// Scatter `count` rubble chips from `center`
    ///
    /// Directions and speeds come from the field's seeded RNG, so the same
    /// seed and call sequence always produce the same debris. At most
    /// `capacity` chips are generated.
    pub fn spawn_debris(&mut self, center: Vec2, count: usize, speed: f32, color: u32, lifetime: f32) {
        let count = count.min(self.capacity);
        let tag = FragmentTag {
            color,
            shape: FragmentShape::Chip,
        };
        for _ in 0..count {
            let theta = self.rng.random_range(0.0..std::f32::consts::TAU);
            let v = self.rng.random_range(0.5f32..1.0) * speed;
            // Bias upward so rubble pops before it falls
            let vel = Vec2::from_angle(theta) * v - Vec2::new(0.0, speed * 0.5);
            let size = Vec2::splat(self.rng.random_range(4.0f32..10.0));
            let spin = self.rng.random_range(-8.0f32..8.0);
            let life = lifetime * self.rng.random_range(0.7f32..1.0);
            self.spawn(Fragment::new(center, vel, size, life, tag).with_spin(spin));
        }
    }

    /// Step every fragment, then remove collected and expired ones
    ///
    /// `on_collected` fires once per fragment swallowed by a collector,
    /// before the fragment is dropped.
    pub fn update<F>(&mut self, dt: f32, mut on_collected: F) -> FieldUpdate
    where
        F: FnMut(CollectorId, &Fragment),
    {
        let physics = self.physics;
        let floor_y = self.floor_y;
        let collectors = &self.collectors;
        let mut report = FieldUpdate::default();

        self.fragments.retain_mut(|fragment| {
            fragment.step_with(dt, &physics);

            if let Some(collector) = collectors.iter().find(|c| c.area.contains(fragment.pos)) {
                on_collected(collector.id, fragment);
                report.collected += 1;
                return false;
            }

            if is_expired(fragment, floor_y) {
                report.expired += 1;
                return false;
            }

            true
        });

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;

    fn field(capacity: usize) -> FragmentField {
        FragmentField::new(FragmentPhysics::default(), 720.0, capacity, 42)
    }

    fn resting_at(pos: Vec2, life: f32) -> Fragment {
        Fragment::new(pos, Vec2::ZERO, Vec2::splat(5.0), life, FragmentTag::default())
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut field = field(2);
        field.spawn(resting_at(Vec2::new(1.0, 0.0), 1.0));
        field.spawn(resting_at(Vec2::new(2.0, 0.0), 1.0));
        field.spawn(resting_at(Vec2::new(3.0, 0.0), 1.0));
        assert_eq!(field.len(), 2);
        assert_eq!(field.fragments()[0].pos.x, 2.0);
    }

    #[test]
    fn test_zero_capacity_spawns_nothing() {
        let mut field = field(0);
        field.spawn_debris(Vec2::ZERO, 10, 200.0, 0xFFFFFF, 1.0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_update_removes_expired() {
        let mut field = field(16);
        field.spawn(resting_at(Vec2::new(0.0, 0.0), 0.05));
        field.spawn(resting_at(Vec2::new(0.0, 0.0), 5.0));
        field.spawn(resting_at(Vec2::new(0.0, 719.99), 5.0));

        let report = field.update(0.1, |_, _| panic!("no collectors"));
        // Short-lived one ran out; the low one fell past the floor
        assert_eq!(report.expired, 2);
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn test_collector_swallows_fragments() {
        let mut field = field(16);
        field.add_collector(9, Polygon::from(Rect::new(0.0, 100.0, 50.0, 50.0)));
        field.add_collector(10, Polygon::new(vec![Vec2::ZERO, Vec2::ONE]));
        field.spawn(resting_at(Vec2::new(25.0, 110.0), 5.0));
        field.spawn(resting_at(Vec2::new(300.0, 110.0), 5.0));

        let mut collected = Vec::new();
        let report = field.update(1.0 / 60.0, |id, f| collected.push((id, f.pos.x)));

        assert_eq!(report.collected, 1);
        assert_eq!(collected, vec![(9, 25.0)]);
        assert_eq!(field.len(), 1);

        field.remove_collector(9);
        field.spawn(resting_at(Vec2::new(25.0, 110.0), 5.0));
        assert_eq!(field.update(1.0 / 60.0, |_, _| {}).collected, 0);
    }

    #[test]
    fn test_debris_is_deterministic() {
        let mut a = field(64);
        let mut b = field(64);
        a.spawn_debris(Vec2::new(100.0, 100.0), 8, 300.0, 0x123456, 1.2);
        b.spawn_debris(Vec2::new(100.0, 100.0), 8, 300.0, 0x123456, 1.2);
        assert_eq!(a.len(), 8);
        assert_eq!(a.fragments(), b.fragments());
        assert!(a.fragments().iter().all(|f| f.tag.shape == FragmentShape::Chip));
        assert!(a.fragments().iter().all(|f| f.life <= 1.2 && f.life >= 0.84 - 1e-4));
    }

    #[test]
    fn test_huge_debris_count_is_capped() {
        let mut field = field(16);
        field.spawn(resting_at(Vec2::new(1.0, 0.0), 1.0));
        field.spawn_debris(Vec2::ZERO, usize::MAX, 200.0, 0xFFFFFF, 1.0);
        assert_eq!(field.len(), 16);
        assert!(field.fragments().iter().all(|f| f.tag.shape == FragmentShape::Chip));
    }
}
