use crate::{ball_of, store_ball, Ball, Events, Footballer, GameRng, Params, Pitch};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// Slack used when testing for overlap, so a ball placed exactly on a boundary counts as clear
const OVERLAP_SLACK: f32 = 1e-3;
/// Extra distance added when the last-resort pass separates the ball
const SEPARATION_EPSILON: f32 = 0.01;

/// A circular keep-out region around a footballer reference point
#[derive(Debug, Clone, Copy)]
struct Zone {
    center: Vec2,
    min_dist: f32,
}

impl Zone {
    fn overlaps(&self, pos: Vec2) -> bool {
        pos.distance(self.center) < self.min_dist - OVERLAP_SLACK
    }
}

fn zones(footballer: &Footballer, ball_radius: f32) -> [Zone; 2] {
    [
        Zone {
            center: footballer.head_center(),
            min_dist: footballer.head_clearance(ball_radius),
        },
        Zone {
            center: footballer.center(),
            min_dist: footballer.body_clearance(ball_radius),
        },
    ]
}

/// Resolve ball contact against both footballers and leave the ball clear of every zone
pub fn resolve_collisions(world: &mut World, pitch: &Pitch, events: &mut Events, rng: &mut GameRng) {
    let Some(mut ball) = ball_of(world) else {
        return;
    };

    let mut footballers: Vec<Footballer> = world
        .query::<&Footballer>()
        .iter()
        .map(|(_e, f)| *f)
        .collect();
    footballers.sort_by_key(|f| f.side);

    for footballer in &footballers {
        // A head contact consumes the touch; the body is not tested again
        if resolve_head(&mut ball, footballer, rng) {
            events.head_hit = true;
        } else if resolve_body(&mut ball, footballer, rng) {
            events.body_hit = true;
        }
    }

    escape_overlaps(&mut ball, &footballers, rng);
    ball.pos = pitch.clamp_ball(ball.pos, ball.radius);
    enforce_separation(&mut ball, &footballers, pitch);

    store_ball(world, ball);
}

/// First point along this tick's path where `hit` holds, falling back to the current position
fn sweep(ball: &Ball, step: f32, hit: impl Fn(Vec2) -> bool) -> Option<Vec2> {
    let travel = ball.prev_pos.distance(ball.pos).max(ball.speed());
    if travel > 0.1 {
        let steps = (travel / step).ceil() as u32 + 1;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = ball.prev_pos.lerp(ball.pos, t);
            if hit(p) {
                return Some(p);
            }
        }
    }
    hit(ball.pos).then_some(ball.pos)
}

fn outward_normal(offset: Vec2) -> Vec2 {
    if offset.length() > 0.01 {
        offset.normalize()
    } else {
        Vec2::NEG_Y
    }
}

/// Reflect the ball's velocity relative to `carried` about `normal`
///
/// A ball already separating, but slower than `impulse` along the normal, is
/// sent straight out at `impulse` instead.
fn reflect(ball: &mut Ball, carried: Vec2, normal: Vec2, restitution: f32, impulse: f32) {
    let vn = (ball.vel - carried).dot(normal);
    if vn < 0.0 {
        ball.vel -= normal * (restitution * vn);
    } else if ball.vel.dot(normal) < impulse {
        ball.vel = normal * impulse;
    }
}

fn jittered(normal: Vec2, spread: f32, speed: f32, rng: &mut GameRng) -> Vec2 {
    let angle = normal.y.atan2(normal.x) + rng.0.gen_range(-spread..spread);
    Vec2::new(angle.cos(), angle.sin()) * speed
}

fn resolve_head(ball: &mut Ball, footballer: &Footballer, rng: &mut GameRng) -> bool {
    let head = footballer.head_center();
    let min_dist = footballer.head_clearance(ball.radius);
    let Some(contact) = sweep(ball, Params::HEAD_SWEEP_STEP, |p| p.distance(head) < min_dist) else {
        return false;
    };

    let normal = outward_normal(contact - head);
    ball.pos = head + normal * min_dist;
    reflect(
        ball,
        footballer.vel * Params::HEAD_CARRY,
        normal,
        Params::HEAD_RESTITUTION,
        Params::HEAD_OUTWARD_IMPULSE,
    );

    if ball.speed() < Params::HEAD_MIN_BOUNCE {
        ball.vel = jittered(normal, 0.2, Params::HEAD_BOUNCE_SPEED, rng);
    }
    true
}

fn resolve_body(ball: &mut Ball, footballer: &Footballer, rng: &mut GameRng) -> bool {
    let center = footballer.center();
    let head = footballer.head_center();
    let head_min = footballer.head_clearance(ball.radius);
    let body = footballer.body_box();
    let min_dist = footballer.body_clearance(ball.radius);
    let r = ball.radius;

    let contact = sweep(ball, Params::BODY_SWEEP_STEP, |p| {
        p.distance(head) >= head_min && body.overlaps_inflated(p, r)
    })
    .or_else(|| (ball.pos.distance(center) < min_dist).then_some(ball.pos));
    let Some(contact) = contact else {
        return false;
    };

    let offset = contact - center;
    let normal = outward_normal(offset);
    let deep = offset.length() < r * 0.8 || body.contains(contact);

    if deep {
        ball.pos = center + normal * (min_dist + Params::DEEP_OVERLAP_PUSH);
        let speed = rng.0.gen_range(Params::ESCAPE_SPEED_MIN..Params::ESCAPE_SPEED_MAX) + 2.0;
        ball.vel = jittered(normal, 0.2, speed, rng);
        return true;
    }

    ball.pos = center + normal * min_dist;
    reflect(
        ball,
        footballer.vel * Params::BODY_CARRY,
        normal,
        Params::BODY_RESTITUTION,
        Params::BODY_OUTWARD_IMPULSE,
    );

    // A power shot keeps its line through a glancing body contact
    if !ball.super_shot && ball.speed() < Params::BODY_MIN_BOUNCE {
        let speed = rng
            .0
            .gen_range(Params::BODY_BOUNCE_SPEED_MIN..Params::BODY_BOUNCE_SPEED_MAX);
        ball.vel = jittered(normal, 0.25, speed, rng);
    }
    true
}

/// Push the ball out of any zone it still sits in after the primary pass
fn escape_overlaps(ball: &mut Ball, footballers: &[Footballer], rng: &mut GameRng) {
    for footballer in footballers {
        for zone in zones(footballer, ball.radius) {
            if !zone.overlaps(ball.pos) {
                continue;
            }
            let normal = outward_normal(ball.pos - zone.center);
            ball.pos = zone.center + normal * (zone.min_dist + Params::ESCAPE_PUSH);

            let speed = ball.speed();
            if speed < Params::ESCAPE_SLOW_SPEED {
                let escape = rng.0.gen_range(Params::ESCAPE_SPEED_MIN..Params::ESCAPE_SPEED_MAX);
                ball.vel = jittered(normal, 0.15, escape, rng);
            } else if ball.vel.dot(normal) < 0.0 {
                ball.vel = normal * (speed * 0.8 + 3.0);
            }
        }
    }
}

/// Last resort after field clamping: slide the ball sideways out of a zone, else lift it over
fn enforce_separation(ball: &mut Ball, footballers: &[Footballer], pitch: &Pitch) {
    let r = ball.radius;
    let zones: Vec<Zone> = footballers.iter().flat_map(|f| zones(f, r)).collect();

    for _ in 0..4 {
        let Some(zone) = zones.iter().find(|z| z.overlaps(ball.pos)) else {
            return;
        };
        let offset = ball.pos - zone.center;
        if offset.y.abs() >= zone.min_dist {
            break;
        }
        let side = if offset.x > 0.0 {
            1.0
        } else if offset.x < 0.0 || zone.center.x > pitch.width / 2.0 {
            -1.0
        } else {
            1.0
        };
        let reach = (zone.min_dist.powi(2) - offset.y.powi(2)).sqrt() + SEPARATION_EPSILON;
        let x = zone.center.x + side * reach;
        if x < r || x > pitch.width - r {
            break;
        }
        ball.pos.x = x;
        ball.vel.x = side * ball.vel.x.abs().max(Params::ESCAPE_SLOW_SPEED);
    }

    // Each lift moves the ball strictly upward past one zone, so one pass per zone suffices
    for _ in 0..=zones.len() {
        let Some(zone) = zones.iter().find(|z| z.overlaps(ball.pos)) else {
            return;
        };
        let dx = ball.pos.x - zone.center.x;
        let rise = (zone.min_dist.powi(2) - dx * dx).max(0.0).sqrt();
        ball.pos.y = (zone.center.y - rise - SEPARATION_EPSILON).max(pitch.ceiling_y + r);
        ball.vel.y = ball.vel.y.min(-Params::ESCAPE_SLOW_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_footballer, Controller, Side};

    struct Setup {
        world: World,
        pitch: Pitch,
        events: Events,
        rng: GameRng,
        ball: hecs::Entity,
    }

    /// Left footballer at spawn: body box x 150..186, y 368..420; head centre (168, 348)
    fn setup(prev: Vec2, pos: Vec2, vel: Vec2) -> Setup {
        let mut world = World::new();
        let pitch = Pitch::new();
        create_footballer(
            &mut world,
            Side::Left,
            pitch.footballer_spawn(Side::Left),
            Controller::Human,
        );
        let ball = create_ball(&mut world, pos, vel);
        world.get::<&mut Ball>(ball).expect("ball").prev_pos = prev;
        Setup {
            world,
            pitch,
            events: Events::new(),
            rng: GameRng::new(11),
            ball,
        }
    }

    fn resolve(s: &mut Setup) -> Ball {
        resolve_collisions(&mut s.world, &s.pitch, &mut s.events, &mut s.rng);
        *s.world.get::<&Ball>(s.ball).expect("ball")
    }

    fn assert_clear(ball: &Ball, footballer: &Footballer) {
        for zone in zones(footballer, ball.radius) {
            let dist = ball.pos.distance(zone.center);
            assert!(
                dist >= zone.min_dist - 0.01,
                "ball at {:?} inside zone {:?} (dist {dist})",
                ball.pos,
                zone
            );
        }
    }

    fn left_footballer(s: &Setup) -> Footballer {
        s.world
            .query::<&Footballer>()
            .iter()
            .next()
            .map(|(_e, f)| *f)
            .expect("footballer")
    }

    #[test]
    fn test_fast_ball_does_not_tunnel_through_body() {
        // One unswept tick carries the ball from left of the body to far right of it
        let mut s = setup(
            Vec2::new(100.0, 394.0),
            Vec2::new(230.0, 394.0),
            Vec2::new(130.0, 0.0),
        );
        let ball = resolve(&mut s);
        assert!(ball.pos.x < 168.0, "ball should stay on the entry side");
        assert!(ball.vel.x < 0.0, "ball should rebound, got {:?}", ball.vel);
        assert!(s.events.body_hit);
        assert!(!s.events.head_hit);
        assert_clear(&ball, &left_footballer(&s));
    }

    #[test]
    fn test_head_contact_rebounds_upward() {
        let mut s = setup(
            Vec2::new(168.0, 290.0),
            Vec2::new(168.0, 306.0),
            Vec2::new(0.0, 16.0),
        );
        let ball = resolve(&mut s);
        assert!(ball.vel.y < 0.0, "ball dropped on the head should bounce up");
        assert!(ball.speed() >= Params::HEAD_MIN_BOUNCE);
        assert!(s.events.head_hit);
        assert!(!s.events.body_hit, "one contact, reported once");
        assert_clear(&ball, &left_footballer(&s));
    }

    #[test]
    fn test_slow_separating_ball_gets_fixed_outward_impulse() {
        // Inside the head zone, drifting up and sideways
        let mut s = setup(
            Vec2::new(168.0, 310.0),
            Vec2::new(168.0, 310.0),
            Vec2::new(3.0, -1.0),
        );
        let ball = resolve(&mut s);
        let expected = Vec2::new(0.0, -Params::HEAD_OUTWARD_IMPULSE);
        assert!((ball.vel - expected).length() < 1e-4, "got {:?}", ball.vel);
        assert!(s.events.head_hit);
        assert_clear(&ball, &left_footballer(&s));
    }

    #[test]
    fn test_slow_touch_gets_minimum_bounce() {
        // Ball creeping into the side of the body
        let mut s = setup(
            Vec2::new(120.0, 394.0),
            Vec2::new(120.5, 394.0),
            Vec2::new(0.5, 0.0),
        );
        let ball = resolve(&mut s);
        assert!(ball.speed() >= Params::BODY_MIN_BOUNCE, "got {}", ball.speed());
        assert!(ball.vel.x < 0.0);
        assert_clear(&ball, &left_footballer(&s));
    }

    #[test]
    fn test_ball_resting_inside_body_is_ejected() {
        let mut s = setup(
            Vec2::new(168.0, 394.0),
            Vec2::new(168.0, 394.0),
            Vec2::ZERO,
        );
        let ball = resolve(&mut s);
        assert!(ball.speed() > 0.0, "ball must not stay at rest against the body");
        assert_clear(&ball, &left_footballer(&s));
    }

    #[test]
    fn test_ball_pinned_in_corner_is_separated() {
        let mut world = World::new();
        let pitch = Pitch::new();
        create_footballer(&mut world, Side::Left, Vec2::new(20.0, 368.0), Controller::Human);
        let entity = create_ball(&mut world, Vec2::new(16.0, 404.0), Vec2::ZERO);
        let mut events = Events::new();
        let mut rng = GameRng::new(5);

        resolve_collisions(&mut world, &pitch, &mut events, &mut rng);

        let ball = *world.get::<&Ball>(entity).expect("ball");
        let footballer = world
            .query::<&Footballer>()
            .iter()
            .next()
            .map(|(_e, f)| *f)
            .expect("footballer");
        assert_clear(&ball, &footballer);
        assert!(ball.pos.x >= ball.radius && ball.pos.y <= pitch.ground_y - ball.radius);
    }

    #[test]
    fn test_super_shot_skips_body_bounce_floor() {
        let mut s = setup(
            Vec2::new(120.0, 394.0),
            Vec2::new(120.5, 394.0),
            Vec2::new(0.5, 0.0),
        );
        s.world.get::<&mut Ball>(s.ball).expect("ball").super_shot = true;
        let ball = resolve(&mut s);
        // Reflection alone: 0.5 - 2.3 * 0.5 = -0.65
        assert!(ball.speed() < Params::BODY_MIN_BOUNCE);
        assert!(ball.vel.x < 0.0);
    }
}
