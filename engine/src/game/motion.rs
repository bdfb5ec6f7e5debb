use std::time::Duration;

use crate::grid::{GridDimensions, is_wrap_transition};
use super::types::{Point, SegmentMove};

pub const CELL_SIZE_PX: f32 = 18.0;

const ANIMATION_FLOOR_MS: u64 = 16;
const ANIMATION_TRIM_MS: u32 = 2;

// Per-tick animation time: slightly shorter than the tick interval so a
// segment always lands before the next move starts.
pub fn animation_duration(speed_ms: u32) -> Duration {
    Duration::from_millis((speed_ms.saturating_sub(ANIMATION_TRIM_MS) as u64).max(ANIMATION_FLOOR_MS))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    fn from_cell(cell: Point) -> Self {
        Self {
            x: cell.x as f32 * CELL_SIZE_PX,
            y: cell.y as f32 * CELL_SIZE_PX,
        }
    }

    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            x: from.x + (to.x - from.x) * t,
            y: from.y + (to.y - from.y) * t,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Trajectory {
    Linear {
        from: PixelPos,
        to: PixelPos,
    },
    // Slide off the exit edge for the first half, jump to the mirrored
    // off-screen position, slide in to the destination for the second half.
    Wrap {
        from: PixelPos,
        exit: PixelPos,
        entry: PixelPos,
        to: PixelPos,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct SegmentAnimation {
    trajectory: Trajectory,
    duration: Duration,
}

impl SegmentAnimation {
    pub fn stationary(cell: Point) -> Self {
        let pos = PixelPos::from_cell(cell);
        Self {
            trajectory: Trajectory::Linear { from: pos, to: pos },
            duration: Duration::ZERO,
        }
    }

    pub fn build(from: Point, to: Point, duration: Duration, grid: GridDimensions) -> Self {
        let from_px = PixelPos::from_cell(from);
        let to_px = PixelPos::from_cell(to);
        let off_left = -CELL_SIZE_PX;
        let off_right = grid.cols as f32 * CELL_SIZE_PX;
        let off_top = -CELL_SIZE_PX;
        let off_bottom = grid.rows as f32 * CELL_SIZE_PX;

        let wrap_x = is_wrap_transition(from.x, to.x, grid.cols);
        let wrap_y = is_wrap_transition(from.y, to.y, grid.rows);

        let trajectory = if wrap_x && !wrap_y {
            if from.x == grid.cols - 1 && to.x == 0 {
                Trajectory::Wrap {
                    from: from_px,
                    exit: PixelPos { x: off_right, y: from_px.y },
                    entry: PixelPos { x: off_left, y: to_px.y },
                    to: to_px,
                }
            } else {
                Trajectory::Wrap {
                    from: from_px,
                    exit: PixelPos { x: off_left, y: from_px.y },
                    entry: PixelPos { x: off_right, y: to_px.y },
                    to: to_px,
                }
            }
        } else if wrap_y && !wrap_x {
            if from.y == grid.rows - 1 && to.y == 0 {
                Trajectory::Wrap {
                    from: from_px,
                    exit: PixelPos { x: from_px.x, y: off_bottom },
                    entry: PixelPos { x: to_px.x, y: off_top },
                    to: to_px,
                }
            } else {
                Trajectory::Wrap {
                    from: from_px,
                    exit: PixelPos { x: from_px.x, y: off_top },
                    entry: PixelPos { x: to_px.x, y: off_bottom },
                    to: to_px,
                }
            }
        } else {
            Trajectory::Linear {
                from: from_px,
                to: to_px,
            }
        };

        Self { trajectory, duration }
    }

    pub fn position_at(&self, elapsed: Duration) -> PixelPos {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.destination();
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        match self.trajectory {
            Trajectory::Linear { from, to } => PixelPos::lerp(from, to, t),
            Trajectory::Wrap {
                from,
                exit,
                entry,
                to,
            } => {
                if t < 0.5 {
                    PixelPos::lerp(from, exit, t / 0.5)
                } else {
                    PixelPos::lerp(entry, to, (t - 0.5) / 0.5)
                }
            }
        }
    }

    pub fn destination(&self) -> PixelPos {
        match self.trajectory {
            Trajectory::Linear { to, .. } | Trajectory::Wrap { to, .. } => to,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

// Owns the per-segment animation side table. The arena is sized by grid
// cell count up front, which also bounds the snake's maximum length.
#[derive(Clone, Debug)]
pub struct MotionInterpolator {
    grid: GridDimensions,
    segments: Vec<SegmentAnimation>,
}

impl MotionInterpolator {
    pub fn new(grid: GridDimensions, initial_cell: Point) -> Self {
        let mut segments = Vec::with_capacity(grid.cell_count());
        segments.push(SegmentAnimation::stationary(initial_cell));
        Self { grid, segments }
    }

    // All segment animations for one tick start together and run
    // independently; the caller samples them at whatever cadence it renders.
    pub fn begin_tick(&mut self, moves: &[SegmentMove], duration: Duration) {
        self.segments.truncate(moves.len());
        for segment_move in moves {
            let animation =
                SegmentAnimation::build(segment_move.from, segment_move.to, duration, self.grid);
            if segment_move.index < self.segments.len() {
                self.segments[segment_move.index] = animation;
            } else {
                self.segments.push(animation);
            }
        }
    }

    pub fn sample(&self, elapsed: Duration) -> Vec<PixelPos> {
        self.segments
            .iter()
            .map(|segment| segment.position_at(elapsed))
            .collect()
    }

    pub fn segment(&self, index: usize) -> Option<&SegmentAnimation> {
        self.segments.get(index)
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn reset(&mut self, grid: GridDimensions, initial_cell: Point) {
        self.grid = grid;
        self.segments = Vec::with_capacity(grid.cell_count());
        self.segments.push(SegmentAnimation::stationary(initial_cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(pos: PixelPos, expected: (f32, f32)) {
        assert!(
            (pos.x - expected.0).abs() < 0.01 && (pos.y - expected.1).abs() < 0.01,
            "expected ({}, {}), got ({}, {})",
            expected.0,
            expected.1,
            pos.x,
            pos.y
        );
    }

    #[test]
    fn test_linear_move_interpolates_in_pixel_space() {
        let grid = GridDimensions::new(20, 20);
        let animation = SegmentAnimation::build(
            Point::new(2, 3),
            Point::new(3, 3),
            Duration::from_millis(100),
            grid,
        );
        assert_near(animation.position_at(Duration::ZERO), (36.0, 54.0));
        assert_near(animation.position_at(Duration::from_millis(50)), (45.0, 54.0));
        assert_near(animation.position_at(Duration::from_millis(100)), (54.0, 54.0));
        assert_near(animation.position_at(Duration::from_millis(500)), (54.0, 54.0));
    }

    #[test]
    fn test_rightward_wrap_slides_off_and_in() {
        let grid = GridDimensions::new(20, 20);
        let animation = SegmentAnimation::build(
            Point::new(19, 5),
            Point::new(0, 5),
            Duration::from_millis(100),
            grid,
        );
        // First leg: toward the right edge, fully off-screen at the midpoint.
        assert_near(animation.position_at(Duration::from_millis(25)), (351.0, 90.0));
        // Second leg: in from just past the left edge.
        assert_near(animation.position_at(Duration::from_millis(50)), (-18.0, 90.0));
        assert_near(animation.position_at(Duration::from_millis(75)), (-9.0, 90.0));
        assert_near(animation.position_at(Duration::from_millis(100)), (0.0, 90.0));
    }

    #[test]
    fn test_leftward_wrap_mirrors_edges() {
        let grid = GridDimensions::new(20, 20);
        let animation = SegmentAnimation::build(
            Point::new(0, 5),
            Point::new(19, 5),
            Duration::from_millis(100),
            grid,
        );
        assert_near(animation.position_at(Duration::from_millis(25)), (-9.0, 90.0));
        assert_near(animation.position_at(Duration::from_millis(50)), (360.0, 90.0));
        assert_near(animation.position_at(Duration::from_millis(100)), (342.0, 90.0));
    }

    #[test]
    fn test_vertical_wraps() {
        let grid = GridDimensions::new(20, 20);
        let down = SegmentAnimation::build(
            Point::new(4, 19),
            Point::new(4, 0),
            Duration::from_millis(100),
            grid,
        );
        assert_near(down.position_at(Duration::from_millis(25)), (72.0, 351.0));
        assert_near(down.position_at(Duration::from_millis(50)), (72.0, -18.0));
        assert_near(down.position_at(Duration::from_millis(100)), (72.0, 0.0));

        let up = SegmentAnimation::build(
            Point::new(4, 0),
            Point::new(4, 19),
            Duration::from_millis(100),
            grid,
        );
        assert_near(up.position_at(Duration::from_millis(25)), (72.0, -9.0));
        assert_near(up.position_at(Duration::from_millis(50)), (72.0, 360.0));
        assert_near(up.position_at(Duration::from_millis(100)), (72.0, 342.0));
    }

    #[test]
    fn test_trajectory_never_crosses_grid_interior_on_wrap() {
        let grid = GridDimensions::new(20, 20);
        let animation = SegmentAnimation::build(
            Point::new(19, 5),
            Point::new(0, 5),
            Duration::from_millis(100),
            grid,
        );
        // Sample densely: x must never pass through the interior span
        // between the two cells (it either exceeds the right edge cell or
        // stays at or left of the destination).
        for ms in (0..=100).step_by(5) {
            let pos = animation.position_at(Duration::from_millis(ms));
            assert!(
                pos.x >= 19.0 * CELL_SIZE_PX || pos.x <= 0.0,
                "interior teleport at {}ms: x={}",
                ms,
                pos.x
            );
        }
    }

    #[test]
    fn test_interpolator_tracks_growth() {
        let grid = GridDimensions::new(20, 20);
        let mut interpolator = MotionInterpolator::new(grid, Point::new(10, 10));
        assert_eq!(interpolator.segment_count(), 1);

        let duration = Duration::from_millis(100);
        interpolator.begin_tick(
            &[
                SegmentMove {
                    index: 0,
                    from: Point::new(10, 10),
                    to: Point::new(11, 10),
                },
                SegmentMove {
                    index: 1,
                    from: Point::new(10, 10),
                    to: Point::new(10, 10),
                },
            ],
            duration,
        );
        assert_eq!(interpolator.segment_count(), 2);

        let positions = interpolator.sample(duration);
        assert_near(positions[0], (198.0, 180.0));
        assert_near(positions[1], (180.0, 180.0));
    }

    #[test]
    fn test_reset_returns_to_single_stationary_segment() {
        let grid = GridDimensions::new(20, 20);
        let mut interpolator = MotionInterpolator::new(grid, Point::new(10, 10));
        interpolator.begin_tick(
            &[
                SegmentMove {
                    index: 0,
                    from: Point::new(10, 10),
                    to: Point::new(11, 10),
                },
                SegmentMove {
                    index: 1,
                    from: Point::new(9, 10),
                    to: Point::new(10, 10),
                },
            ],
            Duration::from_millis(100),
        );
        interpolator.reset(grid, Point::new(10, 10));
        assert_eq!(interpolator.segment_count(), 1);
        assert_near(interpolator.sample(Duration::ZERO)[0], (180.0, 180.0));
    }

    #[test]
    fn test_animation_duration_floors() {
        assert_eq!(animation_duration(120), Duration::from_millis(118));
        assert_eq!(animation_duration(60), Duration::from_millis(58));
        assert_eq!(animation_duration(17), Duration::from_millis(16));
        assert_eq!(animation_duration(1), Duration::from_millis(16));
    }
}
