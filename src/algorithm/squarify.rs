//! Greedy row-building engine of the squarified treemap
//!
//! The engine walks the weights with a cursor, growing the current row while
//! doing so keeps the row's worst aspect ratio from getting worse. When the
//! next weight would make it worse, the row is committed as one strip and
//! the container shrinks. The same weight is then retried against the
//! smaller container with an empty row.
//!
//! Rows are committed in consumption order and cells inside a row keep their
//! accumulation order, so rectangle `i` of the output always belongs to
//! weight `i` of the input.

use num_traits::Float;

use crate::geometry::container::Container;
use crate::geometry::rectangle::Rectangle;
use crate::math::normalize::total;
use crate::math::ratio::improves_ratio;

/// Phase of a layout pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Growing the current row from the unconsumed weights
    Accumulating,
    /// The current row is final and is about to be placed
    Committing,
    /// All weights are placed
    Done,
}

/// State of a single layout pass
///
/// Owns its row buffer and output exclusively, so independent passes can run
/// on separate threads without coordination.
#[derive(Debug, Clone)]
pub struct Squarifier<'a, T = f64> {
    weights: &'a [T],
    cursor: usize,
    row: Vec<T>,
    container: Container<T>,
    output: Vec<Rectangle<T>>,
    state: EngineState,
    rows_committed: usize,
}

impl<'a, T: Float> Squarifier<'a, T> {
    /// Start a pass over already normalized weights
    pub fn new(weights: &'a [T], container: Container<T>) -> Self {
        Self {
            weights,
            cursor: 0,
            row: Vec::new(),
            container,
            output: Vec::with_capacity(weights.len()),
            state: EngineState::Accumulating,
            rows_committed: 0,
        }
    }

    /// Current phase
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Region still free for upcoming rows
    pub const fn container(&self) -> &Container<T> {
        &self.container
    }

    /// Weights accumulated into the row that is being built
    pub fn row(&self) -> &[T] {
        &self.row
    }

    /// Rectangles committed so far
    pub fn placed(&self) -> &[Rectangle<T>] {
        &self.output
    }

    /// Number of rows committed so far, including the final flush
    pub const fn rows_committed(&self) -> usize {
        self.rows_committed
    }

    /// Advance by one transition and report the phase reached
    ///
    /// Each accumulating step either consumes one weight or moves to
    /// committing without consuming anything. Committing always returns to
    /// accumulating with an empty row, which accepts the next weight
    /// unconditionally, so a pass takes at most `2 · n + 1` steps.
    pub fn step(&mut self) -> EngineState {
        match self.state {
            EngineState::Accumulating => {
                if let Some(&next) = self.weights.get(self.cursor) {
                    let length = self.container.shortest_edge();
                    if improves_ratio(&self.row, next, length) {
                        self.row.push(next);
                        self.cursor += 1;
                    } else {
                        self.state = EngineState::Committing;
                    }
                } else {
                    self.flush();
                    self.state = EngineState::Done;
                }
            }
            EngineState::Committing => {
                self.commit();
                self.state = EngineState::Accumulating;
            }
            EngineState::Done => {}
        }
        self.state
    }

    /// Run the pass to completion and hand over the rectangles
    pub fn finish(mut self) -> Vec<Rectangle<T>> {
        while self.step() != EngineState::Done {}

        tracing::debug!(
            items = self.weights.len(),
            rows = self.rows_committed,
            "squarify pass complete"
        );
        self.output
    }

    fn commit(&mut self) {
        let row_area = total(&self.row);
        self.output.extend(self.container.coordinates_for(&self.row));
        self.container = self.container.cut_area(row_area);
        self.rows_committed += 1;

        tracing::trace!(
            row = self.rows_committed,
            cells = self.row.len(),
            area = ?row_area.to_f64(),
            remaining_width = ?self.container.width.to_f64(),
            remaining_height = ?self.container.height.to_f64(),
            "row committed"
        );
        self.row.clear();
    }

    // The last row fills whatever is left, so the container is not cut again
    fn flush(&mut self) {
        if self.row.is_empty() {
            return;
        }
        self.output.extend(self.container.coordinates_for(&self.row));
        self.rows_committed += 1;
        self.row.clear();
    }
}

/// Place normalized weights into `container`, one rectangle per weight in input order
pub fn squarify<T: Float>(weights: &[T], container: Container<T>) -> Vec<Rectangle<T>> {
    Squarifier::new(weights, container).finish()
}
