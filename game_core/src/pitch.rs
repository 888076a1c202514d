use glam::Vec2;

use crate::components::Side;
use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Strict overlap test against the box inflated by `radius`
    pub fn overlaps_inflated(&self, center: Vec2, radius: f32) -> bool {
        center.x + radius > self.min.x
            && center.x - radius < self.max.x
            && center.y + radius > self.min.y
            && center.y - radius < self.max.y
    }
}

/// Field geometry: bounds, ground line, goal mouths and spawn points
#[derive(Debug, Clone)]
pub struct Pitch {
    pub width: f32,
    pub ground_y: f32,
    pub ceiling_y: f32,
    pub goal_top: f32,
    pub goal_bottom: f32,
    pub goal_depth: f32,
    pub side_margin: f32,
}

impl Default for Pitch {
    fn default() -> Self {
        Self {
            width: Params::FIELD_WIDTH,
            ground_y: Params::GROUND_Y,
            ceiling_y: Params::FIELD_TOP + Params::CEILING_MARGIN,
            goal_top: Params::GOAL_TOP,
            goal_bottom: Params::GOAL_BOTTOM,
            goal_depth: Params::GOAL_DEPTH,
            side_margin: Params::SIDE_MARGIN,
        }
    }
}

impl Pitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(Params::BALL_SPAWN_X, Params::BALL_SPAWN_Y)
    }

    /// Top-left corner of a footballer's body box at kick-off
    pub fn footballer_spawn(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => Params::LEFT_START_X,
            Side::Right => Params::RIGHT_START_X,
        };
        Vec2::new(x, self.ground_y - Params::PLAYER_HEIGHT)
    }

    /// Goal mouth defended by `side`
    pub fn goal_mouth(&self, side: Side) -> Aabb {
        let (min_x, max_x) = match side {
            Side::Left => (0.0, self.goal_depth),
            Side::Right => (self.width - self.goal_depth, self.width),
        };
        Aabb::new(
            Vec2::new(min_x, self.goal_top),
            Vec2::new(max_x, self.goal_bottom),
        )
    }

    pub fn goal_center_y(&self) -> f32 {
        (self.goal_top + self.goal_bottom) / 2.0
    }

    /// Point a shot aims for when attacking the goal defended by `side`
    pub fn goal_target(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => self.goal_depth,
            Side::Right => self.width - self.goal_depth,
        };
        Vec2::new(x, self.goal_center_y())
    }

    /// Clamp a footballer's left edge so the body stays inside the side margins
    pub fn clamp_footballer_x(&self, x: f32, width: f32) -> f32 {
        x.clamp(self.side_margin, self.width - self.side_margin - width)
    }

    /// Clamp a ball centre into the playable area
    pub fn clamp_ball(&self, pos: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            pos.x.clamp(radius, self.width - radius),
            pos.y.clamp(self.ceiling_y + radius, self.ground_y - radius),
        )
    }
}
