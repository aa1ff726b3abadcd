use glam::Vec2;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    /// Frames left before the point is dropped.
    pub life: u32,
    /// Spawn order, drives color cycling.
    pub index: u64,
}

/// Bounded, decaying history of pointer positions.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
    life: u32,
    next_index: u64,
}

impl Trail {
    pub fn new(capacity: usize, life: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
            life: life.max(1),
            next_index: 0,
        }
    }

    /// Record a position; the oldest point is evicted once over capacity.
    pub fn push(&mut self, pos: Vec2) {
        self.points.push_back(TrailPoint {
            pos,
            life: self.life,
            index: self.next_index,
        });
        self.next_index += 1;
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Age every point by one frame and drop the expired ones.
    pub fn tick(&mut self) {
        for p in &mut self.points {
            p.life = p.life.saturating_sub(1);
        }
        self.points.retain(|p| p.life > 0);
    }

    /// Remaining life as a fraction of the initial life.
    #[inline]
    pub fn vitality(&self, p: &TrailPoint) -> f32 {
        p.life as f32 / self.life as f32
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
