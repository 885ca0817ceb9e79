// Axis-by-axis collision resolution against a static obstacle set

use crate::core::Rect;

/// Default bound on unit correction steps for a single move
pub const DEFAULT_MAX_ITERATIONS: u32 = 4096;

/// Direction of a single-axis move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in pixel space for this direction
    pub fn unit(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Non-owning view over a collision map used to clamp movement.
///
/// Every move is resolved with a discrete de-penetration scan: the box is
/// moved the full distance and then walked back one pixel at a time until it
/// no longer overlaps anything. Horizontal moves may climb up to
/// `step_up_margin` pixels instead of being blocked.
#[derive(Debug, Clone, Copy)]
pub struct CollisionResolver<'m> {
    obstacles: &'m [Rect],
    step_up_margin: i32,
    max_iterations: u32,
}

impl<'m> CollisionResolver<'m> {
    pub fn new(obstacles: &'m [Rect], step_up_margin: i32) -> Self {
        Self {
            obstacles,
            step_up_margin: step_up_margin.max(0),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Override the correction step budget
    #[allow(dead_code)]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Check a box against every obstacle
    pub fn is_blocked(&self, rect: &Rect) -> bool {
        self.obstacles.iter().any(|obstacle| rect.intersects(obstacle))
    }

    /// Move `rect` by `amount` pixels along `direction` and return the nearest
    /// position that overlaps no obstacle.
    ///
    /// Corrections run in passes over the obstacles in map order until a pass
    /// makes no change, since fixing one overlap can push into an earlier
    /// obstacle. A correction never backs the box off past where it started:
    /// if it would, or if the step budget runs out, the move is fully blocked
    /// and the starting box is returned.
    pub fn resolve_axis_move(&self, rect: Rect, direction: Direction, amount: i32) -> Rect {
        if amount <= 0 {
            return rect;
        }

        let (dx, dy) = direction.unit();
        let mut moved = rect.translated(dx * amount, dy * amount);
        let mut budget = self.max_iterations;

        loop {
            let mut corrected = false;

            for obstacle in self.obstacles {
                while moved.intersects(obstacle) {
                    corrected = true;
                    match self.correct(moved, obstacle, direction, &mut budget) {
                        Some(next) if Self::progress(rect, next, direction) < 0 => return rect,
                        Some(next) => moved = next,
                        None => {
                            log::warn!(
                                "Collision scan exhausted {} steps moving {:?} by {} from {:?}; blocking move",
                                self.max_iterations,
                                direction,
                                amount,
                                rect
                            );
                            return rect;
                        }
                    }
                }
            }

            if !corrected {
                return moved;
            }
        }
    }

    /// One correction step against a single obstacle, or None when the budget is spent
    fn correct(
        &self,
        moved: Rect,
        obstacle: &Rect,
        direction: Direction,
        budget: &mut u32,
    ) -> Option<Rect> {
        Self::spend(budget)?;

        if direction.is_horizontal() && self.step_up_margin > 0 {
            let raised = moved.translated(0, -self.step_up_margin);
            if !raised.intersects(obstacle) {
                return self.settle_onto(raised, obstacle, budget);
            }
        }

        let (dx, dy) = direction.opposite().unit();
        Some(moved.translated(dx, dy))
    }

    /// Lower a clear box until it would touch the obstacle and keep the last clear height
    fn settle_onto(&self, mut raised: Rect, obstacle: &Rect, budget: &mut u32) -> Option<Rect> {
        while !raised.intersects(obstacle) {
            Self::spend(budget)?;
            raised = raised.translated(0, 1);
        }
        Some(raised.translated(0, -1))
    }

    /// Signed distance travelled from `start` along the direction of motion
    fn progress(start: Rect, moved: Rect, direction: Direction) -> i32 {
        let (dx, dy) = direction.unit();
        (moved.x - start.x) * dx + (moved.y - start.y) * dy
    }

    fn spend(budget: &mut u32) -> Option<()> {
        *budget = budget.checked_sub(1)?;
        Some(())
    }

    /// Standing on something: the box shifted down one pixel overlaps an obstacle
    pub fn grounded_beneath(&self, rect: &Rect) -> bool {
        self.is_blocked(&rect.translated(0, 1))
    }

    /// Head against something: the box shifted up one pixel overlaps an obstacle
    pub fn ceiling_above(&self, rect: &Rect) -> bool {
        self.is_blocked(&rect.translated(0, -1))
    }

    /// Touching a wall on either side
    pub fn wall_adjacent(&self, rect: &Rect) -> bool {
        self.is_blocked(&rect.translated(1, 0)) || self.is_blocked(&rect.translated(-1, 0))
    }
}
