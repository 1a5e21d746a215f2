// Ball physics, collision resolution and the serve/reset procedure

use rand::Rng;
use tracing::{debug, info};

use super::body::{Hooks, Role};
use super::entities::{Ball, BallLimits, Paddle};
use super::events::{Cue, Events, GameEvent};
use super::field::Field;
use super::rules::{apply_visibility, Mode, Phase};
use super::state::MatchState;

/// Outcome of checking one paddle plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaneOutcome {
    /// Ball is not past the paddle column
    Clear,
    Hit,
    Miss,
}

/// Advance the ball one tick and resolve everything it ran into.
///
/// Does nothing unless the match is in play.
pub fn step_ball<R: Rng + ?Sized>(state: &mut MatchState, rng: &mut R, events: &mut Events) {
    if state.phase != Phase::InPlay {
        return;
    }

    state.ball.body.advance(Hooks::Fire(events));
    resolve_collisions(state, rng, events);
}

/// Run the wall and paddle-plane checks against the ball's current position.
///
/// The checks are independent and run in a fixed order: walls, left plane,
/// right plane. A miss on either plane schedules a serve reset, which runs
/// before this returns. Returns whether a reset happened.
pub fn resolve_collisions<R: Rng + ?Sized>(
    state: &mut MatchState,
    rng: &mut R,
    events: &mut Events,
) -> bool {
    let field = state.field;
    let limits = state.limits;
    let survival = state.mode == Mode::Impossible;
    let opponent_role = state.opponent_role();
    let (player1, opponent, ball) = state.sides_mut();

    bounce_off_walls(ball, &field, &limits, events);

    let mut needs_reset = false;

    match check_left_plane(player1, ball, &limits, rng, events) {
        PlaneOutcome::Hit if survival => {
            player1.score += 1;
            debug!(score = player1.score, "survival hit");
        }
        PlaneOutcome::Miss => {
            player1.lost_last_point = true;
            opponent.score += 1;
            score_event(opponent_role, opponent.score, events);
            needs_reset = true;
        }
        _ => {}
    }

    if let PlaneOutcome::Miss = check_right_plane(opponent, ball, &field, &limits, rng, events) {
        opponent.lost_last_point = true;
        player1.score += 1;
        score_event(Role::Player1, player1.score, events);
        needs_reset = true;
    }

    if needs_reset {
        reset_play(state, rng, events);
    }
    needs_reset
}

fn bounce_off_walls(ball: &mut Ball, field: &Field, limits: &BallLimits, events: &mut Events) {
    let body = &ball.body;
    let (y, vx, vy) = (body.y(), body.vx(), body.vy());

    let snap_row = if y < Field::TOP as f32 {
        (vy < 0.0).then_some(Field::TOP)
    } else if y > field.bottom() as f32 {
        (vy > 0.0).then_some(field.bottom())
    } else {
        None
    };

    if let Some(row) = snap_row {
        debug!(row, "wall bounce");
        ball.body.set_y(row as f32, Hooks::Silent);
        ball.set_velocity(vx, -vy, limits, events);
    }
}

fn check_left_plane<R: Rng + ?Sized>(
    player1: &Paddle,
    ball: &mut Ball,
    limits: &BallLimits,
    rng: &mut R,
    events: &mut Events,
) -> PlaneOutcome {
    if ball.body.x() >= 1.0 {
        return PlaneOutcome::Clear;
    }

    let rel = player1.body.y() as i32 - ball.body.y() as i32;
    if rel.abs() > player1.body.half_height() {
        ball.body.set_x(0.0, Hooks::Silent);
        return PlaneOutcome::Miss;
    }

    ball.body.set_x(1.0, Hooks::Silent);
    if ball.body.vx() < 0.0 {
        let vx = rng.gen_range(limits.min_x_speed..=limits.max_x_speed);
        let vy = deflect(ball.body.vy(), rel, rng);
        ball.set_velocity(vx, vy, limits, events);
        events.cue(Cue::PaddleHit);
        debug!(rel, vx, vy, "left paddle hit");
    }
    PlaneOutcome::Hit
}

fn check_right_plane<R: Rng + ?Sized>(
    opponent: &Paddle,
    ball: &mut Ball,
    field: &Field,
    limits: &BallLimits,
    rng: &mut R,
    events: &mut Events,
) -> PlaneOutcome {
    if ball.body.x() <= field.right_column() as f32 {
        return PlaneOutcome::Clear;
    }

    let rel = ball.body.y() as i32 - opponent.body.y() as i32;
    if rel.abs() > opponent.body.half_height() {
        ball.body.set_x(field.right_column() as f32, Hooks::Silent);
        return PlaneOutcome::Miss;
    }

    ball.body.set_x((field.width - 2) as f32, Hooks::Silent);
    if ball.body.vx() > 0.0 {
        let vx = rng.gen_range(-limits.max_x_speed..=-limits.min_x_speed);
        let vy = deflect(ball.body.vy(), rel, rng);
        ball.set_velocity(vx, vy, limits, events);
        events.cue(Cue::PaddleHit);
        debug!(rel, vx, vy, "right paddle hit");
    }
    PlaneOutcome::Hit
}

/// Vertical speed after a paddle hit: a nudge from where on the paddle the
/// ball landed (whole quarter-rows only) plus some noise
fn deflect<R: Rng + ?Sized>(vy: f32, rel: i32, rng: &mut R) -> f32 {
    vy + (rel / 4) as f32 + rng.gen_range(-0.5..=0.5)
}

fn score_event(scorer: Role, score: u32, events: &mut Events) {
    info!(?scorer, score, "point scored");
    events.push(GameEvent::Scored { scorer, score });
}

/// Re-place everything for a new serve and pause until the player resumes.
///
/// The ball is served toward whoever won the last point; at match start
/// (no loser recorded) the direction is random.
pub fn reset_play<R: Rng + ?Sized>(state: &mut MatchState, rng: &mut R, events: &mut Events) {
    if state.mode == Mode::Impossible && state.player1.score > 0 {
        info!(score = state.player1.score, "survival run ended");
        events.push(GameEvent::SurvivalScore(state.player1.score));
        state.player1.score = 0;
    }

    let field = state.field;
    let limits = state.limits;
    let (cx, cy) = field.center();
    let (player1, opponent, ball) = state.sides_mut();

    player1
        .body
        .set_position(field.left_column() as f32, cy as f32, Hooks::Silent);
    opponent
        .body
        .set_position(field.right_column() as f32, cy as f32, Hooks::Silent);
    ball.body.set_position(cx as f32, cy as f32, Hooks::Silent);

    let vx = if player1.lost_last_point {
        player1.lost_last_point = false;
        rng.gen_range(limits.min_x_speed / 2.0..=limits.max_x_speed / 2.0)
    } else if opponent.lost_last_point {
        opponent.lost_last_point = false;
        rng.gen_range(-limits.max_x_speed / 2.0..=-limits.min_x_speed / 2.0)
    } else {
        // A dead-still serve would never leave the centre
        loop {
            let vx = rng.gen_range(-limits.max_x_speed / 2.0..=limits.max_x_speed / 2.0);
            if vx != 0.0 {
                break vx;
            }
        }
    };
    let vy = rng.gen_range(-limits.max_y_speed / 3.0..=limits.max_y_speed / 3.0);
    ball.set_velocity(vx, vy, &limits, events);

    events.push(GameEvent::RallyReset);
    state.set_phase(Phase::Paused, events);
}

/// Clear scores and go back to mode selection
pub fn reset_game(state: &mut MatchState, events: &mut Events) {
    for paddle in [&mut state.player1, &mut state.player2, &mut state.cpu] {
        paddle.score = 0;
        paddle.lost_last_point = false;
    }
    state.mode = Mode::NotStarted;
    state.set_phase(Phase::NotStarted, events);
    apply_visibility(state);
}
