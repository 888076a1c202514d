use crate::{ball_of, Pitch, Side};
use glam::Vec2;
use hecs::World;

/// Side that just scored, if the ball's leading edge is inside a goal mouth
pub fn check_goal(world: &World, pitch: &Pitch) -> Option<Side> {
    let ball = ball_of(world)?;
    [Side::Left, Side::Right].into_iter().find_map(|defender| {
        // Leading edge toward the goal defended by `defender`
        let edge_x = ball.pos.x - defender.attack_dir() * ball.radius;
        let edge = Vec2::new(edge_x.clamp(0.0, pitch.width), ball.pos.y);
        pitch
            .goal_mouth(defender)
            .contains(edge)
            .then_some(defender.opponent())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;

    fn goal_for(pos: Vec2) -> Option<Side> {
        let mut world = World::new();
        let pitch = Pitch::new();
        create_ball(&mut world, pos, Vec2::ZERO);
        check_goal(&world, &pitch)
    }

    #[test]
    fn test_right_side_scores_in_left_goal() {
        assert_eq!(goal_for(Vec2::new(40.0, 300.0)), Some(Side::Right));
        assert_eq!(goal_for(Vec2::new(66.0, 300.0)), Some(Side::Right));
    }

    #[test]
    fn test_left_side_scores_in_right_goal() {
        assert_eq!(goal_for(Vec2::new(930.0, 300.0)), Some(Side::Left));
    }

    #[test]
    fn test_no_goal_above_crossbar_or_midfield() {
        assert_eq!(goal_for(Vec2::new(30.0, 200.0)), None, "over the bar");
        assert_eq!(goal_for(Vec2::new(67.0, 300.0)), None, "edge not yet in");
        assert_eq!(goal_for(Vec2::new(480.0, 300.0)), None);
    }
}
