//! Bounds-checked motion primitive shared by paddles and the ball

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// The visible game area; every bounds check is made against it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    rect: Rect,
}

impl Playfield {
    /// Playfield anchored at the origin. Width and height must be positive.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(0, 0, width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.rect.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.rect.height
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// True if any part of `rect` would be outside the playfield
    pub fn rejects(&self, rect: &Rect) -> bool {
        // Right, bottom, left, top
        rect.right() > self.width() || rect.bottom() > self.height() || rect.x < 0 || rect.y < 0
    }
}

/// How the `(dx, dy)` passed to [`GameObject::apply_move`] is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveMode {
    /// Offset from the current position
    Relative,
    /// Target top-left corner
    Absolute,
}

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    Moved,
    /// Target left the playfield; position unchanged
    Rejected,
}

/// A rectangle that can only be moved to places fully inside the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameObject {
    rect: Rect,
}

impl GameObject {
    pub fn new(position: IVec2, width: i32, height: i32) -> Self {
        Self {
            rect: Rect::new(position.x, position.y, width, height),
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.rect.position()
    }

    /// Move without a bounds check. Only the ball uses this: it is allowed to
    /// drift past an edge for the frame in which it scores.
    pub(crate) fn translate(&mut self, delta: IVec2) {
        self.rect = self.rect.with_position(self.rect.position() + delta);
    }

    /// Move if the target lies fully inside `field`, otherwise do nothing.
    ///
    /// There is no clamping to the boundary: a step that would overshoot the
    /// edge is dropped whole, so an object can come to rest a few pixels
    /// short of the wall.
    pub fn apply_move(
        &mut self,
        dx: i32,
        dy: i32,
        mode: MoveMode,
        field: &Playfield,
    ) -> MoveOutcome {
        let target = match mode {
            MoveMode::Relative => self.rect.position() + IVec2::new(dx, dy),
            MoveMode::Absolute => IVec2::new(dx, dy),
        };
        let candidate = self.rect.with_position(target);

        if field.rejects(&candidate) {
            log::trace!(
                "Move to ({}, {}) rejected: outside playfield",
                target.x,
                target.y
            );
            return MoveOutcome::Rejected;
        }

        self.rect = candidate;
        MoveOutcome::Moved
    }

    pub fn move_by(&mut self, dx: i32, dy: i32, field: &Playfield) -> MoveOutcome {
        self.apply_move(dx, dy, MoveMode::Relative, field)
    }

    pub fn move_to(&mut self, x: i32, y: i32, field: &Playfield) -> MoveOutcome {
        self.apply_move(x, y, MoveMode::Absolute, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field() -> Playfield {
        Playfield::new(200, 100)
    }

    #[test]
    fn test_relative_move() {
        let mut obj = GameObject::new(IVec2::new(10, 10), 20, 20);
        assert_eq!(obj.move_by(5, -3, &field()), MoveOutcome::Moved);
        assert_eq!(obj.position(), IVec2::new(15, 7));
    }

    #[test]
    fn test_absolute_move() {
        let mut obj = GameObject::new(IVec2::new(10, 10), 20, 20);
        assert_eq!(obj.move_to(100, 50, &field()), MoveOutcome::Moved);
        assert_eq!(obj.position(), IVec2::new(100, 50));
    }

    #[test]
    fn test_move_rejected_on_each_side() {
        let f = field();
        let mut obj = GameObject::new(IVec2::new(10, 10), 20, 20);
        let before = obj;

        assert_eq!(obj.move_to(181, 10, &f), MoveOutcome::Rejected); // right
        assert_eq!(obj.move_to(10, 81, &f), MoveOutcome::Rejected); // bottom
        assert_eq!(obj.move_to(-1, 10, &f), MoveOutcome::Rejected); // left
        assert_eq!(obj.move_to(10, -1, &f), MoveOutcome::Rejected); // top
        assert_eq!(obj, before);
    }

    #[test]
    fn test_exact_fit_is_allowed() {
        let f = field();
        let mut obj = GameObject::new(IVec2::new(10, 10), 20, 20);
        assert_eq!(obj.move_to(180, 80, &f), MoveOutcome::Moved);
        assert_eq!(obj.move_to(0, 0, &f), MoveOutcome::Moved);
    }

    #[test]
    fn test_overshooting_step_sticks_short_of_wall() {
        let f = field();
        // 4px from the top, stepping 6px at a time
        let mut obj = GameObject::new(IVec2::new(10, 4), 20, 20);
        assert_eq!(obj.move_by(0, -6, &f), MoveOutcome::Rejected);
        assert_eq!(obj.position(), IVec2::new(10, 4));
    }

    proptest! {
        #[test]
        fn prop_rejected_move_leaves_position_unchanged(
            x in 0i32..180, y in 0i32..80, dx in -400i32..400, dy in -400i32..400,
        ) {
            let f = field();
            let mut obj = GameObject::new(IVec2::new(x, y), 20, 20);
            let before = obj;
            if obj.move_by(dx, dy, &f) == MoveOutcome::Rejected {
                prop_assert_eq!(obj, before);
            } else {
                prop_assert_eq!(obj.position(), IVec2::new(x + dx, y + dy));
            }
        }

        #[test]
        fn prop_object_stays_inside_after_any_moves(
            moves in proptest::collection::vec((-50i32..50, -50i32..50), 0..64),
        ) {
            let f = field();
            let mut obj = GameObject::new(IVec2::new(90, 40), 20, 20);
            for (dx, dy) in moves {
                let _ = obj.move_by(dx, dy, &f);
                prop_assert!(f.rect().contains_rect(&obj.rect()));
            }
        }
    }
}
