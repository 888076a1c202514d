use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::pitch::Aabb;
use crate::Params;

/// Owning side of a footballer. Left defends the left goal and attacks right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign pointing at the goal this side attacks
    pub fn attack_dir(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Ball component - the match ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Position at the start of the current tick, used for swept collision
    pub prev_pos: Vec2,
    pub radius: f32,
    /// Set by a power kick, cleared once the shot slows down
    pub super_shot: bool,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            prev_pos: pos,
            radius: Params::BALL_RADIUS,
            super_shot: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Put the ball back on the spawn point at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.prev_pos = spawn;
        self.vel = Vec2::ZERO;
        self.super_shot = false;
    }
}

/// Footballer component - one of the two players on the pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footballer {
    pub side: Side,
    /// Top-left corner of the body box
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub head_radius: f32,
}

impl Footballer {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self {
            side,
            pos,
            vel: Vec2::ZERO,
            size: Vec2::new(Params::PLAYER_WIDTH, Params::PLAYER_HEIGHT),
            head_radius: Params::PLAYER_HEAD_RADIUS,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn head_center(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x / 2.0,
            self.pos.y - self.head_radius + Params::HEAD_OFFSET,
        )
    }

    pub fn body_box(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + self.size)
    }

    pub fn on_ground(&self, ground_y: f32) -> bool {
        self.pos.y + self.size.y >= ground_y - Params::GROUND_TOLERANCE
    }

    /// Minimum centre distance between the ball and this footballer's head
    pub fn head_clearance(&self, ball_radius: f32) -> f32 {
        ball_radius + self.head_radius + Params::HEAD_GAP
    }

    /// Minimum centre distance between the ball and this footballer's body centre
    pub fn body_clearance(&self, ball_radius: f32) -> f32 {
        ball_radius + (self.size.x / 2.0).max(self.size.y / 2.0) + Params::BODY_GAP
    }

    /// Ball within `range` of the body centre
    pub fn in_range(&self, ball: &Ball, range: f32) -> bool {
        ball.pos.distance(self.center()) < range
    }

    /// Ball inside the heading box around the head
    pub fn near_head(&self, ball: &Ball) -> bool {
        let head = self.head_center();
        (ball.pos.x - head.x).abs() < Params::HEADING_RANGE
            && (ball.pos.y - head.y).abs() < Params::HEADING_RANGE * Params::HEADING_RANGE_Y_SCALE
    }

    /// Put the footballer back on its kick-off spot at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
    }
}

/// Held controls as delivered by the input device or the relay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buttons {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub heading: bool,
    pub power_kick: bool,
    pub tackle: bool,
    pub ultimate: bool,
}

/// Control intent for a human-driven footballer
///
/// Heading, tackle and ultimate are edge-triggered: once fired they stay
/// latched until the button is released. Power kick is gated by its cooldown
/// only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlIntent {
    pub buttons: Buttons,
    heading_used: bool,
    tackle_used: bool,
    ultimate_used: bool,
}

impl ControlIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held buttons; a released edge button re-arms its latch
    pub fn set_buttons(&mut self, buttons: Buttons) {
        self.buttons = buttons;
        if !buttons.heading {
            self.heading_used = false;
        }
        if !buttons.tackle {
            self.tackle_used = false;
        }
        if !buttons.ultimate {
            self.ultimate_used = false;
        }
    }

    /// Target horizontal velocity from the movement buttons
    pub fn target_vx(&self, speed: f32) -> f32 {
        if self.buttons.left {
            -speed
        } else if self.buttons.right {
            speed
        } else {
            0.0
        }
    }

    /// Facing used for headers: movement direction, else towards the attacked goal
    pub fn facing(&self, side: Side) -> f32 {
        if self.buttons.right {
            1.0
        } else if self.buttons.left {
            -1.0
        } else {
            side.attack_dir()
        }
    }

    pub fn heading_armed(&self) -> bool {
        self.buttons.heading && !self.heading_used
    }

    pub fn tackle_armed(&self) -> bool {
        self.buttons.tackle && !self.tackle_used
    }

    pub fn ultimate_armed(&self) -> bool {
        self.buttons.ultimate && !self.ultimate_used
    }

    pub fn latch_heading(&mut self) {
        self.heading_used = true;
    }

    pub fn latch_tackle(&mut self) {
        self.tackle_used = true;
    }

    pub fn latch_ultimate(&mut self) {
        self.ultimate_used = true;
    }

    /// Re-arm heading and tackle after a goal
    pub fn rearm(&mut self) {
        self.heading_used = false;
        self.tackle_used = false;
    }
}

/// Per-footballer countdown timers, in ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cooldowns {
    pub power_kick: u32,
    /// Short lockout between AI actions
    pub action: u32,
    pub ultimate: u32,
    /// Remaining ticks this footballer is bound by an ultimate
    pub bound: u32,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every running timer down by one tick
    pub fn tick(&mut self) {
        for timer in [
            &mut self.power_kick,
            &mut self.action,
            &mut self.ultimate,
            &mut self.bound,
        ] {
            if *timer > 0 {
                *timer -= 1;
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        self.bound > 0
    }
}

/// Ticks the ball has dwelt motionless against this footballer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StuckTimer {
    pub ticks: u32,
}
