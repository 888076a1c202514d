/// Game tuning parameters for head soccer
///
/// Field units are pixels with y growing downward. Velocities are units per
/// tick at the fixed 60 Hz step.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 960.0;
    pub const GROUND_Y: f32 = 420.0;
    pub const FIELD_TOP: f32 = 70.0;
    pub const CEILING_MARGIN: f32 = 10.0;
    pub const GOAL_TOP: f32 = 220.0;
    pub const GOAL_BOTTOM: f32 = Self::GROUND_Y;
    pub const GOAL_DEPTH: f32 = 50.0;
    pub const SIDE_MARGIN: f32 = 20.0;

    // Ball
    pub const BALL_RADIUS: f32 = 16.0;
    pub const BALL_GRAVITY: f32 = 0.55;
    pub const BALL_FRICTION: f32 = 0.992;
    pub const BALL_BOUNCE: f32 = 0.72;
    pub const BALL_ROLL_DAMPING: f32 = 0.95; // extra horizontal loss on ground contact
    pub const WALL_MIN_REBOUND: f32 = 1.0;
    pub const BALL_SPAWN_X: f32 = Self::FIELD_WIDTH / 2.0;
    pub const BALL_SPAWN_Y: f32 = 180.0;
    pub const SUPER_SHOT_FADE_SPEED: f32 = 10.0;

    // Footballer
    pub const PLAYER_WIDTH: f32 = 36.0;
    pub const PLAYER_HEIGHT: f32 = 52.0;
    pub const PLAYER_HEAD_RADIUS: f32 = 24.0;
    pub const HEAD_OFFSET: f32 = 4.0;
    pub const PLAYER_SPEED: f32 = 6.5;
    pub const PLAYER_JUMP: f32 = -13.0;
    pub const PLAYER_GRAVITY: f32 = 0.6;
    pub const PLAYER_SMOOTHING: f32 = 0.28;
    pub const GROUND_TOLERANCE: f32 = 2.0;
    pub const LEFT_START_X: f32 = 150.0;
    pub const RIGHT_START_X: f32 = Self::FIELD_WIDTH - 200.0;

    // Actions
    pub const HEADING_FORCE: f32 = -15.0;
    pub const HEADING_H_FORCE: f32 = 11.0;
    pub const HEADING_RANGE: f32 = 55.0;
    pub const HEADING_RANGE_Y_SCALE: f32 = 1.2;
    pub const SHOT_FORCE: f32 = 18.0;
    pub const TACKLE_RANGE: f32 = 60.0;
    pub const TACKLE_SCALE: f32 = 0.7;
    pub const TACKLE_LIFT: f32 = 4.0;
    pub const POWER_KICK_FORCE: f32 = 45.0;
    pub const POWER_KICK_RANGE: f32 = 65.0;
    pub const POWER_KICK_COOLDOWN: u32 = 180; // 3 s
    pub const POWER_KICK_JITTER_MIN: f32 = 0.95;
    pub const POWER_KICK_LIFT: f32 = 1.5;

    // Ultimate
    pub const ULTIMATE_COOLDOWN: u32 = 600; // 10 s
    pub const BOUND_DURATION: u32 = 180; // 3 s
    pub const ULTIMATE_START_ABOVE_TOP: f32 = 80.0;
    pub const ULTIMATE_FALL_SPEED: f32 = 11.0;
    pub const ULTIMATE_ARRIVAL_BELOW: f32 = 50.0;

    // Collision
    pub const HEAD_GAP: f32 = 5.0;
    pub const BODY_GAP: f32 = 8.0;
    pub const HEAD_SWEEP_STEP: f32 = 1.5;
    pub const BODY_SWEEP_STEP: f32 = 2.0;
    pub const HEAD_RESTITUTION: f32 = 2.5;
    pub const BODY_RESTITUTION: f32 = 2.3;
    pub const HEAD_CARRY: f32 = 0.15; // share of footballer velocity felt by the ball
    pub const BODY_CARRY: f32 = 0.25;
    pub const HEAD_OUTWARD_IMPULSE: f32 = 7.0;
    pub const BODY_OUTWARD_IMPULSE: f32 = 8.0;
    pub const HEAD_MIN_BOUNCE: f32 = 5.0;
    pub const HEAD_BOUNCE_SPEED: f32 = 7.0;
    pub const BODY_MIN_BOUNCE: f32 = 4.5;
    pub const BODY_BOUNCE_SPEED_MIN: f32 = 5.0;
    pub const BODY_BOUNCE_SPEED_MAX: f32 = 7.0;
    pub const DEEP_OVERLAP_PUSH: f32 = 18.0;
    pub const ESCAPE_PUSH: f32 = 10.0;
    pub const ESCAPE_SPEED_MIN: f32 = 6.0;
    pub const ESCAPE_SPEED_MAX: f32 = 8.0;
    pub const ESCAPE_SLOW_SPEED: f32 = 3.0;

    // Anti-stick
    pub const STUCK_RADIUS: f32 = 50.0;
    pub const STUCK_SPEED: f32 = 3.0;
    pub const STUCK_TICKS: u32 = 42; // 0.7 s
    pub const STUCK_FORCE_MIN: f32 = 15.0;
    pub const STUCK_FORCE_MAX: f32 = 25.0;

    // AI
    pub const AI_SPEED: f32 = 11.5;
    pub const AI_SMOOTHING: f32 = 0.22;
    pub const AI_MEMORY: usize = 10;
    pub const AI_STRATEGY_MIN_TICKS: u32 = 18;
    pub const AI_STRATEGY_MAX_TICKS: u32 = 42;
    pub const AI_ACTION_COOLDOWN: u32 = 3;
    pub const AI_KICK_EXTRA_COOLDOWN: u32 = 2;
    pub const AI_GOAL_LINE_OFFSET: f32 = 30.0;
    pub const MIN_DENOMINATOR: f32 = 0.1;

    // Match
    pub const WIN_SCORE: u8 = 5;
    pub const CELEBRATION_TICKS: u32 = 120;
    pub const RESET_DELAY_TICKS: u32 = 50;
    pub const SNAPSHOT_INTERVAL: u32 = 3; // 20 Hz relay state

    // Clock
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent step bursts after a stall
}
