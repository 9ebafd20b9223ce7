//! Rendering sink
//!
//! The simulation never draws. After each tick the presentation layer hands a
//! [`Canvas`] to [`draw_match`], which paints every object's current rectangle.

pub mod text;

pub use text::TextCanvas;

use crate::sim::{Ball, Match, Paddle, Player, Playfield, Rect};

/// Colors for game elements (RGB)
pub mod colors {
    pub const BACKGROUND: [u8; 3] = [0, 0, 0];
    pub const FRAME: [u8; 3] = [255, 255, 255];
    pub const MIDDLE_LINE: [u8; 3] = [128, 128, 128];
    pub const SCORE: [u8; 3] = [40, 40, 40];
    pub const PADDLE: [u8; 3] = [255, 255, 255];
    pub const BALL: [u8; 3] = [255, 0, 0];
}

/// What is being drawn; backends pick colors or glyphs from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Frame,
    MiddleLine,
    Score,
    Paddle,
    Ball,
}

impl Style {
    pub fn color(self) -> [u8; 3] {
        match self {
            Style::Frame => colors::FRAME,
            Style::MiddleLine => colors::MIDDLE_LINE,
            Style::Score => colors::SCORE,
            Style::Paddle => colors::PADDLE,
            Style::Ball => colors::BALL,
        }
    }
}

/// A surface addressed in playfield pixels
pub trait Canvas {
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, style: Style);
    /// One-pixel border just inside `rect`
    fn outline_rect(&mut self, rect: Rect, style: Style);
    /// A number laid out inside `rect`
    fn draw_number(&mut self, rect: Rect, value: u32, style: Style);
}

/// Something that can paint itself onto a canvas
pub trait Drawable {
    fn draw(&self, canvas: &mut dyn Canvas);
}

impl Drawable for Paddle {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect(), Style::Paddle);
    }
}

impl Drawable for Ball {
    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill_rect(self.rect(), Style::Ball);
    }
}

/// Score box size (pixels)
pub const SCORE_BOX: i32 = 256;

/// Where a player's score is shown: centered in their half
pub fn score_rect(player: Player, field: &Playfield) -> Rect {
    let quarter = field.width() / 4;
    let center_x = match player {
        Player::One => quarter,
        Player::Two => quarter * 3,
    };
    Rect::new(
        center_x - SCORE_BOX / 2,
        field.height() / 2 - SCORE_BOX / 2,
        SCORE_BOX,
        SCORE_BOX,
    )
}

/// Paint a whole frame, back to front
pub fn draw_match(state: &Match, canvas: &mut dyn Canvas) {
    let field = &state.playfield;
    canvas.clear();

    let middle = Rect::new(field.width() / 2, 0, 1, field.height());
    canvas.fill_rect(middle, Style::MiddleLine);
    canvas.outline_rect(field.rect(), Style::Frame);
    for player in [Player::One, Player::Two] {
        let points = state.score().get(player);
        canvas.draw_number(score_rect(player, field), points, Style::Score);
    }

    for paddle in &state.round.paddles {
        paddle.draw(canvas);
    }
    state.round.ball.draw(canvas);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    /// Records draw calls in order
    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, Rect, Style)>,
        cleared: bool,
    }

    impl Canvas for Recorder {
        fn clear(&mut self) {
            self.cleared = true;
        }
        fn fill_rect(&mut self, rect: Rect, style: Style) {
            self.calls.push(("fill", rect, style));
        }
        fn outline_rect(&mut self, rect: Rect, style: Style) {
            self.calls.push(("outline", rect, style));
        }
        fn draw_number(&mut self, rect: Rect, _value: u32, style: Style) {
            self.calls.push(("number", rect, style));
        }
    }

    #[test]
    fn test_draw_order() {
        let state = Match::new(Settings::default(), 3);
        let mut canvas = Recorder::default();
        draw_match(&state, &mut canvas);

        assert!(canvas.cleared);
        let styles: Vec<Style> = canvas.calls.iter().map(|(_, _, s)| *s).collect();
        assert_eq!(
            styles,
            vec![
                Style::MiddleLine,
                Style::Frame,
                Style::Score,
                Style::Score,
                Style::Paddle,
                Style::Paddle,
                Style::Ball
            ]
        );
        assert_eq!(canvas.calls[6].1, state.round.ball.rect());
    }

    #[test]
    fn test_style_palette() {
        assert_eq!(Style::Frame.color(), colors::FRAME);
        assert_eq!(Style::Ball.color(), [255, 0, 0]);
        assert_ne!(Style::Score.color(), colors::BACKGROUND);
    }

    #[test]
    fn test_score_rects_centered_in_halves() {
        let field = Playfield::new(960, 540);
        assert_eq!(
            score_rect(Player::One, &field),
            Rect::new(240 - 128, 270 - 128, 256, 256)
        );
        assert_eq!(
            score_rect(Player::Two, &field),
            Rect::new(720 - 128, 270 - 128, 256, 256)
        );
    }
}
