//! Collision detection and response
//!
//! Five independent checks run in a fixed order every running frame. Each one
//! reads the ball's rect afresh, so a check sees the effect of the ones before
//! it (a game-over reset moves the ball before the wall checks run).

use super::rect::Rect;
use super::state::{GameEvent, GameState, ScreenSize};

/// Ball overlaps the bat
#[inline]
pub fn ball_bat_collision(ball: &Rect, bat: &Rect) -> bool {
    bat.intersects(ball)
}

/// Ball has dropped past the bottom edge
#[inline]
pub fn ball_past_bottom(ball: &Rect, screen: ScreenSize) -> bool {
    ball.bottom > screen.height_f()
}

/// Ball has crossed the top edge
#[inline]
pub fn ball_past_top(ball: &Rect) -> bool {
    ball.top < 0.0
}

/// Ball has crossed the left edge
#[inline]
pub fn ball_past_left(ball: &Rect) -> bool {
    ball.left < 0.0
}

/// Ball has crossed the right edge
#[inline]
pub fn ball_past_right(ball: &Rect, screen: ScreenSize) -> bool {
    ball.right > screen.width_f()
}

/// Run every collision check and apply its response, appending events in
/// firing order. No check short-circuits another.
///
/// The bat only catches a descending ball. An angled bounce leaves the ball
/// overlapping the bat for a few frames on its way back up.
pub fn detect_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let bat = state.bat.rect();
    if state.ball.vel.y > 0.0 && ball_bat_collision(&state.ball.rect(), &bat) {
        state.ball.bat_bounce(&bat);
        state.ball.increase_velocity();
        state.session.score += 1;
        events.push(GameEvent::BatHit);
    }

    if ball_past_bottom(&state.ball.rect(), state.screen) {
        state.ball.reverse_y_velocity();
        events.push(GameEvent::Missed);

        if state.session.lose_life() {
            let final_score = state.session.score;
            log::info!("Game over with score {final_score}");
            events.push(GameEvent::GameOver { final_score });
            state.start_new_game();
        }
    }

    if ball_past_top(&state.ball.rect()) {
        state.ball.reverse_y_velocity();
        events.push(GameEvent::WallTop);
    }

    if ball_past_left(&state.ball.rect()) {
        state.ball.reverse_x_velocity();
        events.push(GameEvent::WallSide);
    }

    if ball_past_right(&state.ball.rect(), state.screen) {
        state.ball.reverse_x_velocity();
        events.push(GameEvent::WallSide);
    }
}
