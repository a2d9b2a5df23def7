// The animation driver: owns the grid, pulls frames from a mounted algorithm
// on a fixed cadence and paints them, one run at a time.
// Visual outcomes:
// - Starting an algorithm replaces whatever was animating, instantly.
// - Each tick repaints the whole grid from the algorithm's latest frame.
// - When the algorithm reports done, the final frame stays on screen.

use std::time::{Duration, Instant};

use crate::algo::{Algorithm, AlgorithmEntry};
use crate::error::Error;
use crate::grid::{FILL_COLOR, Grid};
use crate::types::FrameBuffer;

/// One live animation. Dropping it is the cancellation: the deadline is never
/// consulted again, so no stale tick can fire after a replacement.
struct AnimationRun {
    name: &'static str,
    algo: Box<dyn Algorithm>,
    next_tick: Instant,
}

pub struct Visualizer {
    grid: Grid,
    invert_y_axis: bool,
    interval: Duration,
    algorithms: Vec<AlgorithmEntry>,
    run: Option<AnimationRun>,
}

impl Visualizer {
    /// Lay out the grid on `fb` and remember the tick cadence.
    /// Visual: same as Grid::new — an empty centered grid appears.
    pub fn new(
        fb: &mut FrameBuffer,
        cell_width: usize,
        cell_height: usize,
        gutter: usize,
        ms_per_interval: u64,
    ) -> Result<Self, Error> {
        let grid = Grid::new(fb, cell_width, cell_height, gutter)?;
        Ok(Self {
            grid,
            invert_y_axis: false,
            interval: Duration::from_millis(ms_per_interval),
            algorithms: Vec::new(),
            run: None,
        })
    }

    pub fn n_cols(&self) -> usize {
        self.grid.n_cols()
    }

    pub fn n_rows(&self) -> usize {
        self.grid.n_rows()
    }

    /// Row interpretation only; the layout never changes.
    /// Visual: with invert on, value 0 sits at the bottom of the grid.
    pub fn set_invert_y_axis(&mut self, invert: bool) {
        self.invert_y_axis = invert;
    }

    pub fn invert_y_axis(&self) -> bool {
        self.invert_y_axis
    }

    /// Register the named algorithm constructors the triggers select from.
    /// Nothing animates until a trigger fires.
    pub fn mount(&mut self, algorithms: Vec<AlgorithmEntry>) {
        self.algorithms = algorithms;
    }

    pub fn algorithm_count(&self) -> usize {
        self.algorithms.len()
    }

    /// Trigger labels, in mount order (the demo binds entry k to key k+1).
    pub fn algorithm_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.algorithms.iter().map(|entry| entry.name)
    }

    /// Start the mounted algorithm at `index`. Replacing a live run drops it
    /// here, before the new run exists, so the old run gets zero further
    /// ticks. The fresh instance is built from the column count and its first
    /// tick lands one interval from `now`.
    pub fn start(&mut self, index: usize, now: Instant) -> Result<(), Error> {
        let entry = self
            .algorithms
            .get(index)
            .ok_or_else(|| Error::UnknownAlgorithm(format!("trigger #{}", index + 1)))?;
        self.run = Some(AnimationRun {
            name: entry.name,
            algo: (entry.build)(self.grid.n_cols()),
            next_tick: now + self.interval,
        });
        Ok(())
    }

    /// Start by display name — the factory key.
    pub fn start_by_name(&mut self, name: &str, now: Instant) -> Result<(), Error> {
        let index = self
            .algorithms
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_else(|| Error::UnknownAlgorithm(name.to_string()))?;
        self.start(index, now)
    }

    /// One poll of the repeating timer: if a run is live and due, take one
    /// step, paint its frame, then ask the completion predicate. At most one
    /// frame per call, so ticks are strictly sequential.
    pub fn tick(&mut self, fb: &mut FrameBuffer, now: Instant) {
        let frame = match self.run.as_mut() {
            Some(run) if now >= run.next_tick => {
                run.next_tick = now + self.interval;
                run.algo.step()
            }
            _ => return,
        };
        self.draw_y_data(fb, &frame);
        if self.run.as_ref().is_some_and(|run| run.algo.done()) {
            self.run = None; // timer canceled; the final frame stays visible
        }
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Name of the live run, for the HUD.
    pub fn running_name(&self) -> Option<&'static str> {
        self.run.as_ref().map(|run| run.name)
    }

    /// Paint one frame: clear the grid, then fill one cell per column. With
    /// invert-Y the row flips (n_rows - v - 1); rows are computed in signed
    /// arithmetic so a malformed value paints off-grid instead of wrapping.
    pub fn draw_y_data(&self, fb: &mut FrameBuffer, data: &[u32]) {
        self.grid.clear(fb);
        for (i, &v) in data.iter().enumerate() {
            let row = if self.invert_y_axis {
                self.grid.n_rows() as i64 - v as i64 - 1
            } else {
                v as i64
            };
            self.grid.fill_cell(fb, i as i64, row, FILL_COLOR);
        }
    }

    /// Visual: the fully sorted staircase, one cell per column.
    pub fn draw_sorted_data(&self, fb: &mut FrameBuffer) {
        let data: Vec<u32> = (0..self.grid.n_cols() as u32).collect();
        self.draw_y_data(fb, &data);
    }
}
