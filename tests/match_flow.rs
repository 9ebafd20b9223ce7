use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent as TermKey, KeyModifiers};
use glam::IVec2;
use rect_pong::Settings;
use rect_pong::platform::terminal::{HOLD_TIMEOUT, TerminalInput};
use rect_pong::platform::{Controls, Key, KeyEvent};
use rect_pong::renderer::{TextCanvas, draw_match};
use rect_pong::sim::{
    Ball, Contact, Match, MatchPhase, Paddle, PaddleIntent, Player, Score, Side, TickInput,
    TickOutcome, tick,
};

/// Put the ball in the gap behind `loser`'s paddle, heading for their goal
fn send_past(state: &mut Match, loser: Player) {
    let field = state.playfield;
    let (x, vx) = match loser {
        Player::One => (4, -5),
        Player::Two => (field.width() - 20, 5),
    };
    state.round.ball = Ball::new(IVec2::new(x, 10), 16, IVec2::new(vx, 5));
}

fn run_until_point(state: &mut Match, input: &TickInput, max_ticks: u32) -> Option<TickOutcome> {
    for _ in 0..max_ticks {
        match tick(state, input) {
            TickOutcome::Continued(_) => {}
            other => return Some(other),
        }
    }
    None
}

fn points(score: Score) -> (u32, u32) {
    (score.get(Player::One), score.get(Player::Two))
}

#[test]
fn test_points_are_credited_one_at_a_time() {
    let mut state = Match::new(Settings::default(), 2024);
    let input = TickInput::default();

    for (round, loser) in [Player::One, Player::Two, Player::Two, Player::One, Player::Two]
        .into_iter()
        .enumerate()
    {
        let before = state.score();
        send_past(&mut state, loser);
        let outcome = run_until_point(&mut state, &input, 10).expect("ball never escaped");
        let TickOutcome::Scored { player, score } = outcome else {
            panic!("unexpected outcome {outcome:?}");
        };
        assert_eq!(player, loser.opponent());
        assert_eq!(score.get(player), before.get(player) + 1);
        assert_eq!(score.get(loser), before.get(loser));
        assert_eq!(state.round_number, round as u32 + 2);
    }
    assert_eq!(points(state.score()), (3, 2));
}

#[test]
fn test_every_serve_starts_inside_with_fresh_paddles() {
    let settings = Settings::default();
    let mut state = Match::new(settings.clone(), 77);
    let input = TickInput {
        player_one: PaddleIntent::UP,
        player_two: PaddleIntent::DOWN,
    };

    for i in 0..10 {
        // Let the paddles drift off their spawn first
        for _ in 0..20 {
            let _ = tick(&mut state, &input);
        }
        let loser = if i % 2 == 0 { Player::One } else { Player::Two };
        send_past(&mut state, loser);
        let outcome = run_until_point(&mut state, &input, 10).expect("ball never escaped");
        assert!(matches!(outcome, TickOutcome::Scored { .. }));

        let field = state.playfield;
        assert!(field.rect().contains_rect(&state.round.ball.rect()));
        let v = state.round.ball.velocity();
        assert_eq!(v.abs(), IVec2::splat(settings.ball_speed));
        let left = Paddle::spawn(Side::Left, &field, &settings);
        let right = Paddle::spawn(Side::Right, &field, &settings);
        assert_eq!(state.round.paddles, [left, right]);
    }
}

#[test]
fn test_held_keys_keep_paddles_inside() {
    let mut state = Match::new(Settings::default(), 5);
    let mut controls = Controls::new();
    controls.handle(KeyEvent::Pressed(Key::Up(Player::One)));
    controls.handle(KeyEvent::Pressed(Key::Down(Player::Two)));

    for _ in 0..500 {
        let _ = tick(&mut state, &controls.snapshot());
        for paddle in &state.round.paddles {
            assert!(state.playfield.rect().contains_rect(&paddle.rect()));
        }
    }
}

#[test]
fn test_terminal_keys_drive_paddles() {
    let mut state = Match::new(Settings::default(), 6);
    let start_one = state.round.paddle(Player::One).position();
    let start_two = state.round.paddle(Player::Two).position();
    let mut keys = TerminalInput::new(false);
    let mut controls = Controls::new();
    let t0 = Instant::now();

    for code in [KeyCode::Char('q'), KeyCode::Down] {
        let event = Event::Key(TermKey::new(code, KeyModifiers::NONE));
        if let Some(key) = keys.translate(&event, t0) {
            controls.handle(key);
        }
    }
    for _ in 0..5 {
        let _ = tick(&mut state, &controls.snapshot());
    }
    assert_eq!(
        state.round.paddle(Player::One).position(),
        start_one - IVec2::new(0, 30)
    );
    assert_eq!(
        state.round.paddle(Player::Two).position(),
        start_two + IVec2::new(0, 30)
    );

    // Keys lapse once repeats stop, so the paddles hold still again
    controls.handle_all(keys.expire(t0 + HOLD_TIMEOUT));
    let held = state.round.paddles;
    let _ = tick(&mut state, &controls.snapshot());
    assert_eq!(state.round.paddles, held);

    let esc = Event::Key(TermKey::new(KeyCode::Esc, KeyModifiers::NONE));
    if let Some(key) = keys.translate(&esc, t0) {
        controls.handle(key);
    }
    assert!(controls.quit_requested());
}

#[test]
fn test_defending_paddle_returns_the_ball() {
    let mut state = Match::new(Settings::default(), 1);
    // Heading straight for the middle of the right paddle
    let target = state.round.paddles[1].rect();
    state.round.ball = Ball::new(
        IVec2::new(target.left() - 36, target.top() + 40),
        16,
        IVec2::new(5, 5),
    );

    let mut bounced = false;
    for _ in 0..10 {
        if let TickOutcome::Continued(Some(Contact::Paddle { side, .. })) =
            tick(&mut state, &TickInput::default())
        {
            assert_eq!(side, Side::Right);
            bounced = true;
            break;
        }
    }
    assert!(bounced);
    assert_eq!(state.round.ball.velocity(), IVec2::new(-5, 5));
    assert_eq!(state.score(), Score::new());
}

#[test]
fn test_match_to_three() {
    let settings = Settings {
        win_score: Some(3),
        ..Settings::default()
    };
    let mut state = Match::new(settings, 31337);

    let mut won = None;
    for _ in 0..5 {
        send_past(&mut state, Player::Two);
        match run_until_point(&mut state, &TickInput::default(), 10) {
            Some(TickOutcome::MatchWon { player, score }) => {
                won = Some((player, score));
                break;
            }
            Some(TickOutcome::Scored { .. }) => {}
            other => panic!("unexpected outcome {other:?}"),
        }
    }
    let (winner, score) = won.expect("match never finished");
    assert_eq!(winner, Player::One);
    assert_eq!(points(score), (3, 0));
    assert_eq!(state.phase, MatchPhase::Finished { winner });
    assert_eq!(tick(&mut state, &TickInput::default()), TickOutcome::Idle);

    state.new_match();
    assert_eq!(state.score(), Score::new());
    assert_eq!(state.phase, MatchPhase::Playing);
    assert_eq!(state.round_number, 1);
}

#[test]
fn test_score_only_grows_between_new_matches() {
    let mut state = Match::new(Settings::default(), 808);
    let mut last = points(state.score());

    for i in 0..12 {
        let loser = if i % 3 == 0 { Player::Two } else { Player::One };
        send_past(&mut state, loser);
        for _ in 0..10 {
            let _ = tick(&mut state, &TickInput::default());
            let now = points(state.score());
            assert!(now.0 >= last.0 && now.1 >= last.1);
            assert!(now.0 + now.1 <= last.0 + last.1 + 1);
            last = now;
        }
    }
    assert_eq!(points(state.score()), (4, 8));

    state.new_match();
    assert_eq!(points(state.score()), (0, 0));
}

#[test]
fn test_replay_is_deterministic() {
    let script = |t: u64| TickInput {
        player_one: if t % 90 < 45 {
            PaddleIntent::UP
        } else {
            PaddleIntent::DOWN
        },
        player_two: if t % 70 < 20 {
            PaddleIntent::DOWN
        } else {
            PaddleIntent::IDLE
        },
    };

    let mut a = Match::new(Settings::default(), 4242);
    let mut b = Match::new(Settings::default(), 4242);
    for t in 0..10_000 {
        let input = script(t);
        assert_eq!(tick(&mut a, &input), tick(&mut b, &input));
    }
    assert_eq!(a.round, b.round);
    assert_eq!(a.score(), b.score());

    let mut ca = TextCanvas::new(&a.playfield, 48, 14);
    let mut cb = TextCanvas::new(&b.playfield, 48, 14);
    draw_match(&a, &mut ca);
    draw_match(&b, &mut cb);
    assert_eq!(ca.to_string(), cb.to_string());
}
