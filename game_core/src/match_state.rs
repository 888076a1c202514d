use hecs::World;
use log::{debug, info};

use crate::systems::*;
use crate::{
    ball_of, create_ball, create_footballer, footballer_of, Ball, Buttons, Celebration, Config,
    ControlIntent, Controller, Cooldowns, Events, FrameClock, Footballer, GameRng, MatchMode,
    MatchPhase, MatchResult, Pitch, Score, Side, UltimateStrike,
};

/// One head-soccer match: the world plus every match-level resource
///
/// All mutable state lives here, so a tick is a plain function of this value
/// and the seeded RNG inside it.
pub struct Match {
    pub world: World,
    pub pitch: Pitch,
    pub config: Config,
    pub score: Score,
    pub phase: MatchPhase,
    pub events: Events,
    pub rng: GameRng,
    /// Falling ultimate marker, if one is in flight
    pub strike: Option<UltimateStrike>,
    pub tick: u64,
    pub result: Option<MatchResult>,
}

impl Match {
    pub fn new(config: Config, seed: u64) -> Self {
        let pitch = Pitch::new();
        let mut world = World::new();

        create_ball(&mut world, pitch.ball_spawn(), glam::Vec2::ZERO);
        create_footballer(
            &mut world,
            Side::Left,
            pitch.footballer_spawn(Side::Left),
            Controller::Human,
        );
        let right = match config.mode {
            MatchMode::VsAi => Controller::Ai,
            MatchMode::Versus => Controller::Human,
        };
        create_footballer(
            &mut world,
            Side::Right,
            pitch.footballer_spawn(Side::Right),
            right,
        );

        info!(
            "Match started: {:?}, first to {}, seed {}",
            config.mode, config.win_score, seed
        );

        Self {
            world,
            pitch,
            config,
            score: Score::new(),
            phase: MatchPhase::Running,
            events: Events::new(),
            rng: GameRng::new(seed),
            strike: None,
            tick: 0,
            result: None,
        }
    }

    /// Advance the match by exactly one fixed tick
    pub fn step(&mut self) {
        // Clear events at start of tick
        self.events.clear();

        match self.phase {
            MatchPhase::Finished => return,
            MatchPhase::Celebrating(mut celebration) => {
                celebration.elapsed += 1;
                self.phase = if celebration.elapsed >= celebration.duration {
                    MatchPhase::ResettingDelay {
                        remaining: self.config.reset_delay_ticks,
                    }
                } else {
                    MatchPhase::Celebrating(celebration)
                };
                return;
            }
            MatchPhase::ResettingDelay { .. } | MatchPhase::Running => {}
        }

        tick_cooldowns(&mut self.world);

        if let MatchPhase::ResettingDelay { remaining } = self.phase {
            let remaining = remaining.saturating_sub(1);
            reset_to_spawn(&mut self.world, &self.pitch);
            self.strike = None;
            self.phase = if remaining == 0 {
                MatchPhase::Running
            } else {
                MatchPhase::ResettingDelay { remaining }
            };
            return;
        }

        // 1. Ultimate cast and falling marker
        cast_ultimate(&mut self.world, &mut self.strike, &self.config, &mut self.events);
        advance_strike(&mut self.world, &mut self.strike, &self.config, &mut self.events);

        // 2. Ball flight and field bounds
        move_ball(&mut self.world, &self.pitch, &mut self.events);

        // 3. Goals stop the tick
        if let Some(scorer) = check_goal(&self.world, &self.pitch) {
            self.on_goal(scorer);
            return;
        }

        // 4. Footballers, left first
        for side in [Side::Left, Side::Right] {
            drive_human(
                &mut self.world,
                side,
                &self.pitch,
                &self.config,
                &mut self.events,
                &mut self.rng,
            );
            drive_ai(
                &mut self.world,
                side,
                &self.pitch,
                &self.config,
                &mut self.events,
                &mut self.rng,
            );
        }

        // 5. Contact resolution
        release_stuck_ball(&mut self.world, &mut self.events, &mut self.rng);
        resolve_collisions(&mut self.world, &self.pitch, &mut self.events, &mut self.rng);

        self.tick += 1;
    }

    fn on_goal(&mut self, scorer: Side) {
        self.score.increment(scorer);
        self.settle_goal(scorer);
    }

    /// Clear ability state and move on to celebration or the final whistle
    pub(crate) fn settle_goal(&mut self, scorer: Side) {
        self.events.goal = Some(scorer);
        self.strike = None;

        for (_entity, cooldowns) in self.world.query_mut::<&mut Cooldowns>() {
            cooldowns.bound = 0;
        }
        for (_entity, intent) in self.world.query_mut::<&mut ControlIntent>() {
            intent.rearm();
        }
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.super_shot = false;
        }
        debug!(
            "{:?} scored, {}-{}",
            scorer, self.score.left, self.score.right
        );

        if let Some(winner) = self.score.has_winner(self.config.win_score) {
            let result = MatchResult {
                winner,
                left: self.score.left,
                right: self.score.right,
            };
            self.finish(result);
        } else {
            self.phase = MatchPhase::Celebrating(Celebration {
                elapsed: 0,
                duration: self.config.celebration_ticks,
                scorer,
            });
        }
    }

    pub(crate) fn finish(&mut self, result: MatchResult) {
        if self.result.is_some() {
            return;
        }
        self.phase = MatchPhase::Finished;
        self.result = Some(result);
        self.events.match_over = Some(result);
        info!(
            "Match finished: {:?} wins {}-{}",
            result.winner, result.left, result.right
        );
    }

    /// Feed elapsed wall-clock seconds through `clock` and run the due ticks
    ///
    /// Returns the number of ticks run. `self.events` then holds the events
    /// of every tick run this frame.
    pub fn advance(&mut self, clock: &mut FrameClock, elapsed: f32) -> u32 {
        let due = clock.advance(elapsed);
        let mut frame = Events::new();
        let mut ran = 0;
        for _ in 0..due {
            if self.is_finished() {
                break;
            }
            self.step();
            frame.merge(&self.events);
            ran += 1;
        }
        self.events = frame;
        ran
    }

    /// Replace the held buttons of a human-driven side; ignored for the AI side
    pub fn set_buttons(&mut self, side: Side, buttons: Buttons) {
        for (_entity, (footballer, intent)) in self
            .world
            .query_mut::<(&Footballer, &mut ControlIntent)>()
        {
            if footballer.side == side {
                intent.set_buttons(buttons);
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, MatchPhase::Finished)
    }

    pub fn ball(&self) -> Option<Ball> {
        ball_of(&self.world)
    }

    pub fn footballer(&self, side: Side) -> Option<Footballer> {
        footballer_of(&self.world, side)
    }

    pub fn cooldowns(&self, side: Side) -> Option<Cooldowns> {
        crate::cooldowns_of(&self.world, side)
    }
}
