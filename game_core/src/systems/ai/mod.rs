pub mod cascade;
pub mod jump;
pub mod prediction;
pub mod situation;
pub mod strategy;

pub use cascade::{act, choose_action, AiAction, Reach};
pub use jump::jump_strength;
pub use prediction::{predict_ball, safe_div};
pub use situation::{OwnFrame, Situation};
pub use strategy::{choose_target, steer, Pattern, Target};

use std::collections::VecDeque;

use crate::systems::kinematics::move_footballer;
use crate::{
    ball_of, store_ball, Config, Cooldowns, Events, Footballer, GameRng, Params, Pitch, Side,
};
use glam::Vec2;
use hecs::World;
use log::debug;
use rand::Rng;

/// Per-footballer AI state: recent ball positions and the current play style
#[derive(Debug, Clone)]
pub struct AiBrain {
    pub memory: VecDeque<Vec2>,
    pub pattern: Pattern,
    pub strategy_timer: u32,
}

impl AiBrain {
    pub fn new() -> Self {
        Self {
            memory: VecDeque::with_capacity(Params::AI_MEMORY),
            pattern: Pattern::Neutral,
            strategy_timer: 0,
        }
    }

    /// Record a ball position, dropping the oldest past `Params::AI_MEMORY`
    pub fn remember(&mut self, pos: Vec2) {
        if self.memory.len() == Params::AI_MEMORY {
            self.memory.pop_front();
        }
        self.memory.push_back(pos);
    }

    /// Count down the strategy timer and switch pattern when it runs out
    pub fn tick_strategy(&mut self, rng: &mut GameRng) {
        self.strategy_timer = self.strategy_timer.saturating_sub(1);
        if self.strategy_timer == 0 {
            self.strategy_timer = rng
                .0
                .gen_range(Params::AI_STRATEGY_MIN_TICKS..Params::AI_STRATEGY_MAX_TICKS);
            let next = self.pattern.reroll(rng);
            debug!("AI pattern {:?} -> {:?}", self.pattern, next);
            self.pattern = next;
        }
    }
}

impl Default for AiBrain {
    fn default() -> Self {
        Self::new()
    }
}

/// Move an AI-driven footballer and let it act on the ball
///
/// Does nothing when `side` is not AI-driven. A bound AI stands still and
/// neither observes nor acts.
pub fn drive_ai(
    world: &mut World,
    side: Side,
    pitch: &Pitch,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let Some(mut ball) = ball_of(world) else {
        return;
    };
    let Some((rival, rival_power_kick)) = world
        .query::<(&Footballer, &Cooldowns)>()
        .iter()
        .find(|(_, (f, _))| f.side == side.opponent())
        .map(|(_, (f, c))| (*f, c.power_kick))
    else {
        return;
    };

    let mut touched = false;
    for (_entity, (me, cooldowns, brain)) in
        world.query_mut::<(&mut Footballer, &mut Cooldowns, &mut AiBrain)>()
    {
        if me.side != side {
            continue;
        }

        if cooldowns.is_bound() {
            me.vel = Vec2::ZERO;
            continue;
        }

        brain.remember(ball.pos);
        brain.tick_strategy(rng);

        let s = Situation::new(*me, rival, rival_power_kick, ball, pitch);
        let predicted = predict_ball(&brain.memory, &ball, me, &rival);
        let target = choose_target(&s, predicted, brain.pattern, pitch, config.ai_speed);
        let desired = steer(&s, target);
        let jump = jump_strength(&s, pitch, config).map(|p| Params::PLAYER_JUMP * p);

        move_footballer(
            me,
            s.frame.world_vx(desired),
            Params::AI_SMOOTHING,
            jump,
            pitch,
        );

        if cooldowns.action == 0 {
            let moved = Situation::new(*me, rival, rival_power_kick, ball, pitch);
            if act(&moved, me, cooldowns, &mut ball, pitch, config, events, rng).is_some() {
                touched = true;
            }
        }
    }

    if touched {
        store_ball(world, ball);
    }
}
