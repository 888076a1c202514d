use crate::{Ball, Footballer, Params, Pitch, Side};

/// Horizontal coordinates measured from a side's own goal wall
///
/// In this frame the own goal is always at 0 and positive velocity points
/// at the rival goal, so one set of rules serves either side.
#[derive(Debug, Clone, Copy)]
pub struct OwnFrame {
    pub side: Side,
    pub width: f32,
}

impl OwnFrame {
    pub fn new(side: Side, width: f32) -> Self {
        Self { side, width }
    }

    pub fn x(&self, world_x: f32) -> f32 {
        match self.side {
            Side::Left => world_x,
            Side::Right => self.width - world_x,
        }
    }

    pub fn vx(&self, world_vx: f32) -> f32 {
        world_vx * self.side.attack_dir()
    }

    pub fn world_x(&self, own_x: f32) -> f32 {
        // The mapping is its own inverse
        self.x(own_x)
    }

    pub fn world_vx(&self, own_vx: f32) -> f32 {
        self.vx(own_vx)
    }
}

/// What the AI sees at the start of its tick
#[derive(Debug, Clone)]
pub struct Situation {
    pub frame: OwnFrame,
    pub ball: Ball,
    pub me: Footballer,
    pub rival: Footballer,
    /// Rival's power-kick cooldown, used to anticipate its shots
    pub rival_power_kick: u32,

    pub ball_ox: f32,
    pub ball_ovx: f32,
    pub ball_speed: f32,
    pub me_ox: f32,
    pub ball_dist: f32,
    pub rival_dist: f32,

    pub on_own_half: bool,
    pub moving_to_own_goal: bool,
    pub moving_to_rival_goal: bool,
    pub near_own_goal: bool,
    pub very_near_own_goal: bool,
    pub near_rival_goal: bool,
    pub fast_to_rival_goal: bool,
    pub in_center: bool,
}

impl Situation {
    pub fn new(
        me: Footballer,
        rival: Footballer,
        rival_power_kick: u32,
        ball: Ball,
        pitch: &Pitch,
    ) -> Self {
        let frame = OwnFrame::new(me.side, pitch.width);
        let w = pitch.width;
        let half = w / 2.0;

        let ball_ox = frame.x(ball.pos.x);
        let ball_ovx = frame.vx(ball.vel.x);
        let ball_speed = ball.speed();
        let y = ball.pos.y;

        let in_goal_band = |margin: f32| y > pitch.goal_top - margin && y < pitch.goal_bottom + margin;

        Self {
            frame,
            ball,
            me,
            rival,
            rival_power_kick,
            ball_ox,
            ball_ovx,
            ball_speed,
            me_ox: frame.x(me.center().x),
            ball_dist: ball.pos.distance(me.center()),
            rival_dist: ball.pos.distance(rival.center()),
            on_own_half: ball_ox < half,
            moving_to_own_goal: ball_ovx < -1.0 && ball_ox < half,
            moving_to_rival_goal: ball_ovx > 5.0 && ball_ox > half,
            near_own_goal: ball_ox < 350.0 && in_goal_band(60.0),
            very_near_own_goal: ball_ox < 250.0,
            near_rival_goal: ball_ox > w - 200.0 && in_goal_band(0.0),
            fast_to_rival_goal: ball_speed > 12.0 && ball_ovx > 3.0 && ball_ox > half - 100.0,
            in_center: (ball_ox - half).abs() < 150.0,
        }
    }

    /// Ball threatens the own goal: only defensive clearances are allowed
    pub fn defensive(&self) -> bool {
        self.near_own_goal || self.moving_to_own_goal || self.very_near_own_goal
    }

    /// Own-frame x of the defensive line in front of the own goal
    pub fn goal_line_ox(&self) -> f32 {
        Params::GOAL_DEPTH + Params::AI_GOAL_LINE_OFFSET
    }

    /// Horizontal distance between the ball and my body centre
    pub fn ball_dx(&self) -> f32 {
        self.ball.pos.x - self.me.center().x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_own_frame_mirrors_right_side() {
        let frame = OwnFrame::new(Side::Right, 960.0);
        assert_eq!(frame.x(900.0), 60.0);
        assert_eq!(frame.vx(4.0), -4.0);
        assert_eq!(frame.world_x(frame.x(123.0)), 123.0);

        let left = OwnFrame::new(Side::Left, 960.0);
        assert_eq!(left.x(60.0), 60.0);
        assert_eq!(left.vx(4.0), 4.0);
    }

    #[test]
    fn test_defensive_zone_is_symmetric() {
        let pitch = Pitch::new();
        let ball = Ball::new(Vec2::new(900.0, 300.0), Vec2::ZERO);
        let right = Footballer::new(Side::Right, pitch.footballer_spawn(Side::Right));
        let left = Footballer::new(Side::Left, pitch.footballer_spawn(Side::Left));

        let right_view = Situation::new(right, left, 0, ball, &pitch);
        assert!(right_view.defensive(), "ball at the right goal threatens the right side");

        let left_view = Situation::new(left, right, 0, ball, &pitch);
        assert!(!left_view.defensive());
        assert!(left_view.near_rival_goal);
    }
}
