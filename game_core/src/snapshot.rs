use glam::Vec2;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    Ball, Cooldowns, Footballer, Match, MatchPhase, MatchResult, Score, Side, SnapshotError,
    UltimateStrike,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub super_shot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootballerState {
    /// Top-left corner of the body box
    pub pos: Vec2,
    pub vel: Vec2,
    pub cooldowns: Cooldowns,
}

/// Read-only copy of everything a renderer or a remote peer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub ball: BallState,
    pub left: FootballerState,
    pub right: FootballerState,
    pub score: Score,
    pub phase: MatchPhase,
    pub strike: Option<UltimateStrike>,
}

impl Snapshot {
    pub fn footballer(&self, side: Side) -> &FootballerState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Check the snapshot against the local field and rules
    pub fn validate(&self, m: &Match) -> Result<(), SnapshotError> {
        let pitch = &m.pitch;
        let config = &m.config;

        finite(&[self.ball.pos, self.ball.vel], "ball")?;
        finite(&[self.left.pos, self.left.vel], "left footballer")?;
        finite(&[self.right.pos, self.right.vel], "right footballer")?;
        if let Some(strike) = &self.strike {
            finite(&[Vec2::new(strike.x, strike.y), Vec2::new(0.0, strike.target_y)], "ultimate marker")?;
        }

        in_field(self.ball.pos, pitch.width, pitch.ground_y, "ball")?;
        in_field(self.left.pos, pitch.width, pitch.ground_y, "left footballer")?;
        in_field(self.right.pos, pitch.width, pitch.ground_y, "right footballer")?;

        let Score { left, right } = self.score;
        if left > config.win_score || right > config.win_score {
            return Err(SnapshotError::ScoreOutOfRange {
                left,
                right,
                win_score: config.win_score,
            });
        }
        let decided = self.score.has_winner(config.win_score).is_some();
        let finished = matches!(self.phase, MatchPhase::Finished);
        if decided != finished {
            return Err(SnapshotError::InconsistentPhase { left, right });
        }

        let max = config.max_timer();
        for (what, cooldowns) in [("left", &self.left.cooldowns), ("right", &self.right.cooldowns)] {
            for value in [cooldowns.power_kick, cooldowns.action, cooldowns.ultimate, cooldowns.bound] {
                if value > max {
                    return Err(SnapshotError::TimerOutOfRange { what, value, max });
                }
            }
        }
        match self.phase {
            MatchPhase::Celebrating(c) if c.elapsed > c.duration => {
                return Err(SnapshotError::TimerOutOfRange {
                    what: "celebration",
                    value: c.elapsed,
                    max: c.duration,
                });
            }
            MatchPhase::ResettingDelay { remaining } if remaining > config.reset_delay_ticks => {
                return Err(SnapshotError::TimerOutOfRange {
                    what: "reset delay",
                    value: remaining,
                    max: config.reset_delay_ticks,
                });
            }
            _ => {}
        }

        Ok(())
    }
}

fn finite(values: &[Vec2], what: &'static str) -> Result<(), SnapshotError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(SnapshotError::NonFinite(what))
    }
}

fn in_field(pos: Vec2, width: f32, ground_y: f32, what: &'static str) -> Result<(), SnapshotError> {
    if (0.0..=width).contains(&pos.x) && (0.0..=ground_y).contains(&pos.y) {
        Ok(())
    } else {
        Err(SnapshotError::OutOfField {
            what,
            x: pos.x,
            y: pos.y,
        })
    }
}

fn footballer_state(m: &Match, side: Side) -> Option<FootballerState> {
    let footballer = m.footballer(side)?;
    Some(FootballerState {
        pos: footballer.pos,
        vel: footballer.vel,
        cooldowns: m.cooldowns(side)?,
    })
}

impl Match {
    /// Copy of the current state, or None if an entity is missing
    pub fn snapshot(&self) -> Option<Snapshot> {
        let ball = self.ball()?;
        Some(Snapshot {
            tick: self.tick,
            ball: BallState {
                pos: ball.pos,
                vel: ball.vel,
                super_shot: ball.super_shot,
            },
            left: footballer_state(self, Side::Left)?,
            right: footballer_state(self, Side::Right)?,
            score: self.score,
            phase: self.phase,
            strike: self.strike,
        })
    }

    /// Overwrite local state with an authoritative snapshot
    ///
    /// The snapshot is validated in full first; on error nothing changes.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        if let Err(err) = snapshot.validate(self) {
            warn!("Rejected snapshot for tick {}: {}", snapshot.tick, err);
            return Err(err);
        }

        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = snapshot.ball.pos;
            ball.prev_pos = snapshot.ball.pos;
            ball.vel = snapshot.ball.vel;
            ball.super_shot = snapshot.ball.super_shot;
        }
        for (_entity, (footballer, cooldowns)) in
            self.world.query_mut::<(&mut Footballer, &mut Cooldowns)>()
        {
            let state = snapshot.footballer(footballer.side);
            footballer.pos = state.pos;
            footballer.vel = state.vel;
            *cooldowns = state.cooldowns;
        }

        self.score = snapshot.score;
        self.strike = snapshot.strike;
        self.tick = snapshot.tick;
        match snapshot.phase {
            MatchPhase::Finished => {
                if let Some(winner) = snapshot.score.has_winner(self.config.win_score) {
                    self.finish(MatchResult {
                        winner,
                        left: snapshot.score.left,
                        right: snapshot.score.right,
                    });
                }
            }
            phase => {
                self.phase = phase;
                self.result = None;
            }
        }

        info!(
            "Applied snapshot for tick {}, score {}-{}",
            snapshot.tick, snapshot.score.left, snapshot.score.right
        );
        Ok(())
    }

    /// Apply a goal reported by the remote peer with its authoritative score
    ///
    /// A repeat of the goal the match already settled is accepted and ignored.
    pub fn apply_goal_update(&mut self, scorer: Side, score: Score) -> Result<(), SnapshotError> {
        if self.is_settled_goal(scorer, score) {
            return Ok(());
        }
        if let Err(err) = self.check_goal_update(scorer, score) {
            warn!("Rejected goal update {}-{}: {}", score.left, score.right, err);
            return Err(err);
        }

        self.score = score;
        self.settle_goal(scorer);
        Ok(())
    }

    fn is_settled_goal(&self, scorer: Side, score: Score) -> bool {
        if score != self.score {
            return false;
        }
        match self.phase {
            MatchPhase::Celebrating(c) => c.scorer == scorer,
            MatchPhase::Finished => self.result.is_some_and(|r| r.winner == scorer),
            _ => false,
        }
    }

    fn check_goal_update(&self, scorer: Side, score: Score) -> Result<(), SnapshotError> {
        let win_score = self.config.win_score;
        let Score { left, right } = score;
        if left > win_score || right > win_score {
            return Err(SnapshotError::ScoreOutOfRange {
                left,
                right,
                win_score,
            });
        }

        let other = scorer.opponent();
        let advances = score.get(scorer) > self.score.get(scorer)
            && score.get(other) >= self.score.get(other);
        if self.is_finished() || !advances {
            return Err(SnapshotError::StaleGoal {
                scorer,
                left,
                right,
            });
        }

        // A deciding score must be the scorer's, and only one side can reach it
        let both_decided = left >= win_score && right >= win_score;
        let other_decided = score.has_winner(win_score) == Some(other);
        if both_decided || other_decided {
            return Err(SnapshotError::InconsistentPhase { left, right });
        }
        Ok(())
    }

    /// Accept the remote peer's final result
    ///
    /// The result must name the one side on the win threshold and must not
    /// lower either local score.
    pub fn apply_remote_result(&mut self, result: MatchResult) -> Result<(), SnapshotError> {
        if self.result == Some(result) {
            return Ok(());
        }
        if let Err(err) = self.check_result(result) {
            warn!("Rejected result {}-{}: {}", result.left, result.right, err);
            return Err(err);
        }

        self.score = Score {
            left: result.left,
            right: result.right,
        };
        self.finish(result);
        Ok(())
    }

    fn check_result(&self, result: MatchResult) -> Result<(), SnapshotError> {
        let win_score = self.config.win_score;
        let MatchResult {
            winner,
            left,
            right,
        } = result;
        if left > win_score || right > win_score {
            return Err(SnapshotError::ScoreOutOfRange {
                left,
                right,
                win_score,
            });
        }

        let score = Score { left, right };
        let decided = score.get(winner) == win_score && score.get(winner.opponent()) < win_score;
        let regressed = left < self.score.left || right < self.score.right;
        if self.is_finished() || !decided || regressed {
            return Err(SnapshotError::InvalidResult {
                winner,
                left,
                right,
            });
        }
        Ok(())
    }
}
