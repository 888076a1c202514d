use game_core::systems::AiBrain;
use game_core::*;
use glam::Vec2;

fn place_ball(m: &mut Match, pos: Vec2, vel: Vec2) {
    let mut ball = m.ball().expect("ball");
    ball.pos = pos;
    ball.prev_pos = pos;
    ball.vel = vel;
    store_ball(&mut m.world, ball);
}

fn ai_brain(m: &Match) -> AiBrain {
    m.world
        .query::<&AiBrain>()
        .iter()
        .next()
        .map(|(_e, brain)| brain.clone())
        .expect("AI brain")
}

#[test]
fn test_goal_celebration_and_reset_to_spawn() {
    let mut m = Match::new(Config::new(), 7);
    m.score = Score { left: 2, right: 1 };
    place_ball(&mut m, Vec2::new(40.0, 300.0), Vec2::new(-3.0, 0.0));

    m.step();
    assert_eq!(m.events.goal, Some(Side::Right));
    assert_eq!(m.score, Score { left: 2, right: 2 });
    assert!(matches!(m.phase, MatchPhase::Celebrating(_)));

    let frozen = m.ball().expect("ball");
    for _ in 0..m.config.celebration_ticks {
        m.step();
        assert_eq!(m.ball().expect("ball").pos, frozen.pos, "ball is still during celebration");
    }
    assert!(matches!(m.phase, MatchPhase::ResettingDelay { .. }));

    for _ in 0..m.config.reset_delay_ticks {
        m.step();
        assert_eq!(m.ball().expect("ball").pos, m.pitch.ball_spawn());
    }
    assert_eq!(m.phase, MatchPhase::Running);

    let ball = m.ball().expect("ball");
    assert_eq!(ball.pos, m.pitch.ball_spawn());
    assert_eq!(ball.vel, Vec2::ZERO);
    for side in [Side::Left, Side::Right] {
        let footballer = m.footballer(side).expect("footballer");
        assert_eq!(footballer.pos, m.pitch.footballer_spawn(side));
        assert_eq!(footballer.vel, Vec2::ZERO);
    }
}

#[test]
fn test_goal_adds_exactly_one() {
    let mut m = Match::new(Config::new(), 7);
    m.score = Score { left: 1, right: 2 };
    place_ball(&mut m, Vec2::new(40.0, 300.0), Vec2::ZERO);
    m.step();
    assert_eq!(m.score, Score { left: 1, right: 3 });
}

#[test]
fn test_winning_goal_finishes_match() {
    let mut m = Match::new(Config::new(), 7);
    m.score = Score { left: 4, right: 3 };
    place_ball(&mut m, Vec2::new(925.0, 300.0), Vec2::new(3.0, 0.0));

    m.step();
    let expected = MatchResult {
        winner: Side::Left,
        left: 5,
        right: 3,
    };
    assert_eq!(m.phase, MatchPhase::Finished);
    assert_eq!(m.result, Some(expected));
    assert_eq!(m.events.match_over, Some(expected));

    let ball = m.ball().expect("ball");
    for _ in 0..30 {
        m.step();
        assert_eq!(m.score, Score { left: 5, right: 3 });
        assert_eq!(m.ball().expect("ball"), ball);
        assert_eq!(m.events.match_over, None);
    }

    let mut clock = FrameClock::new();
    assert_eq!(m.advance(&mut clock, Params::FIXED_DT), 0);
}

#[test]
fn test_fast_ball_rebounds_off_body() {
    // Right side idle human so nothing else touches the ball
    let mut m = Match::new(Config::versus(), 7);
    let body_center = m.footballer(Side::Left).expect("left").center();
    place_ball(&mut m, Vec2::new(100.0, 394.0), Vec2::new(30.0, 0.0));

    let mut hit = false;
    for _ in 0..5 {
        m.step();
        let ball = m.ball().expect("ball");
        assert!(ball.pos.x < body_center.x, "ball tunnelled to {:?}", ball.pos);
        if m.events.body_hit {
            assert!(ball.vel.x < 0.0, "ball should rebound, got {:?}", ball.vel);
            hit = true;
            break;
        }
    }
    assert!(hit, "contact never detected");
}

#[test]
fn test_very_fast_ball_caught_by_sweep() {
    let mut m = Match::new(Config::versus(), 7);
    let body_center = m.footballer(Side::Left).expect("left").center();
    // One unswept tick would end on the far side of the body centre
    place_ball(&mut m, Vec2::new(90.0, 394.0), Vec2::new(95.0, 0.0));

    m.step();
    let ball = m.ball().expect("ball");
    assert!(m.events.body_hit);
    assert!(ball.pos.x < body_center.x);
    assert!(ball.vel.x < 0.0);
}

#[test]
fn test_power_kick_blocked_during_cooldown() {
    let mut m = Match::new(Config::versus(), 7);
    m.set_buttons(
        Side::Left,
        Buttons {
            power_kick: true,
            ..Buttons::default()
        },
    );
    let kick_spot = Vec2::new(225.0, 394.0);

    place_ball(&mut m, kick_spot, Vec2::ZERO);
    m.step();
    assert!(m.events.power_kick);
    assert!(m.ball().expect("ball").speed() > 40.0);
    let cooldown = m.cooldowns(Side::Left).expect("cooldowns").power_kick;
    assert_eq!(cooldown, m.config.power_kick_cooldown);

    place_ball(&mut m, kick_spot, Vec2::ZERO);
    m.step();
    assert!(!m.events.power_kick, "second kick inside the cooldown must do nothing");
    assert!(m.ball().expect("ball").speed() < 2.0);
    assert_eq!(
        m.cooldowns(Side::Left).expect("cooldowns").power_kick,
        cooldown - 1,
        "cooldown keeps counting down"
    );
}

#[test]
fn test_ultimate_binds_ai_for_full_duration() {
    let mut m = Match::new(Config::new(), 7);
    let high = Vec2::new(480.0, 100.0);
    m.set_buttons(
        Side::Left,
        Buttons {
            ultimate: true,
            ..Buttons::default()
        },
    );

    // Descent from the cast until arrival below the target's centre
    let mut ticks = 0;
    loop {
        place_ball(&mut m, high, Vec2::ZERO);
        m.step();
        ticks += 1;
        if m.events.bound_applied {
            break;
        }
        assert!(ticks < 100, "marker never arrived");
    }
    assert_eq!(ticks, 42);
    assert_eq!(
        m.cooldowns(Side::Right).expect("cooldowns").bound,
        m.config.bound_duration
    );

    let held = m.footballer(Side::Right).expect("AI");
    assert_eq!(held.vel, Vec2::ZERO);
    for _ in 1..m.config.bound_duration {
        place_ball(&mut m, high, Vec2::ZERO);
        m.step();
        let ai = m.footballer(Side::Right).expect("AI");
        assert_eq!(ai.vel, Vec2::ZERO);
        assert_eq!(ai.pos, held.pos);
    }
    assert_eq!(m.cooldowns(Side::Right).expect("cooldowns").bound, 1);

    let timer = ai_brain(&m).strategy_timer;
    place_ball(&mut m, high, Vec2::ZERO);
    m.step();
    assert_eq!(m.cooldowns(Side::Right).expect("cooldowns").bound, 0);
    assert_ne!(ai_brain(&m).strategy_timer, timer, "AI control resumes");
}

#[test]
fn test_same_seed_same_match() {
    let run = |seed: u64| {
        let mut m = Match::new(Config::new(), seed);
        m.set_buttons(
            Side::Left,
            Buttons {
                right: true,
                jump: true,
                ..Buttons::default()
            },
        );
        for _ in 0..300 {
            m.step();
        }
        m.snapshot().expect("snapshot")
    };
    assert_eq!(run(42), run(42));
}
