// Pluggable step-wise algorithms the visualizer animates.
// Each step returns one frame: a row value per column, i.e. a snapshot of the
// working array. Visual: every tick the bars shuffle a little closer to sorted.

/// What the visualizer asks of an algorithm: one frame per step, and a flag
/// saying no further steps are needed. Frame length and value range are the
/// algorithm's business; the grid clips anything out of range.
pub trait Algorithm {
    fn step(&mut self) -> Vec<u32>;
    fn done(&self) -> bool;
}

/// Constructor shape for the registry: column count in, boxed instance out.
pub type BuildFn = fn(usize) -> Box<dyn Algorithm>;

/// A named constructor — the factory the visualizer's triggers are keyed by.
pub struct AlgorithmEntry {
    pub name: &'static str,
    pub build: BuildFn,
}

/// The algorithms the demo binary mounts.
pub fn demo_algorithms() -> Vec<AlgorithmEntry> {
    vec![
        AlgorithmEntry {
            name: "BUBBLE SORT",
            build: |n| Box::new(BubbleSort::new(n)),
        },
        AlgorithmEntry {
            name: "INSERTION SORT",
            build: |n| Box::new(InsertionSort::new(n)),
        },
        AlgorithmEntry {
            name: "SELECTION SORT",
            build: |n| Box::new(SelectionSort::new(n)),
        },
    ]
}

// ----------------------------- tiny RNG (no external crate) -----------------------------

/// Deterministic xorshift32 RNG for lightweight randomness.
/// Visual: controls the starting shuffle, so every run opens the same way.
struct Rng32 {
    state: u32,
}

impl Rng32 {
    fn from_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        // Xorshift—fast and good enough for a starting shuffle
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    #[inline]
    fn below(&mut self, n: u32) -> u32 {
        self.next_u32() % n
    }
}

/// One value per column, 0..n shuffled, so rows and columns line up 1:1.
fn shuffled_values(n: usize) -> Vec<u32> {
    let mut values: Vec<u32> = (0..n as u32).collect();
    let mut rng = Rng32::from_seed(0xC0FFEE);
    // Fisher-Yates
    for i in (1..values.len()).rev() {
        let j = rng.below(i as u32 + 1) as usize;
        values.swap(i, j);
    }
    values
}

// ----------------------------- bubble sort ----------------------------------------------

/// One comparison (and maybe a swap) per step.
pub struct BubbleSort {
    values: Vec<u32>,
    cursor: usize,  // comparison index within the current pass
    end: usize,     // values[end..] are already in final position
    swapped: bool,  // did the current pass move anything yet
    sorted: bool,
}

impl BubbleSort {
    pub fn new(n_cols: usize) -> Self {
        Self {
            values: shuffled_values(n_cols),
            cursor: 0,
            end: n_cols,
            swapped: false,
            sorted: n_cols <= 1,
        }
    }
}

impl Algorithm for BubbleSort {
    fn step(&mut self) -> Vec<u32> {
        if !self.sorted {
            if self.values[self.cursor] > self.values[self.cursor + 1] {
                self.values.swap(self.cursor, self.cursor + 1);
                self.swapped = true;
            }
            self.cursor += 1;
            if self.cursor + 1 >= self.end {
                // Pass over; the largest value of the pass bubbled to the end.
                self.end -= 1;
                self.cursor = 0;
                if !self.swapped || self.end <= 1 {
                    self.sorted = true;
                }
                self.swapped = false;
            }
        }
        self.values.clone()
    }

    fn done(&self) -> bool {
        self.sorted
    }
}

// ----------------------------- insertion sort -------------------------------------------

/// The pending element sinks one position per step.
pub struct InsertionSort {
    values: Vec<u32>,
    pos: usize,   // where the pending element currently sits
    next: usize,  // first index the sorted prefix hasn't absorbed yet
    sorted: bool,
}

impl InsertionSort {
    pub fn new(n_cols: usize) -> Self {
        Self {
            values: shuffled_values(n_cols),
            pos: 1,
            next: 1,
            sorted: n_cols <= 1,
        }
    }
}

impl Algorithm for InsertionSort {
    fn step(&mut self) -> Vec<u32> {
        if !self.sorted {
            if self.pos > 0 && self.values[self.pos - 1] > self.values[self.pos] {
                self.values.swap(self.pos - 1, self.pos);
                self.pos -= 1;
            } else {
                // Element settled; pick up the next one.
                self.next += 1;
                if self.next >= self.values.len() {
                    self.sorted = true;
                } else {
                    self.pos = self.next;
                }
            }
        }
        self.values.clone()
    }

    fn done(&self) -> bool {
        self.sorted
    }
}

// ----------------------------- selection sort -------------------------------------------

/// One comparison of the scan per step; the swap lands when a pass ends.
pub struct SelectionSort {
    values: Vec<u32>,
    start: usize,    // boundary of the sorted prefix
    scan: usize,     // where the minimum search currently looks
    min_idx: usize,  // smallest value seen in this pass
    sorted: bool,
}

impl SelectionSort {
    pub fn new(n_cols: usize) -> Self {
        Self {
            values: shuffled_values(n_cols),
            start: 0,
            scan: 1,
            min_idx: 0,
            sorted: n_cols <= 1,
        }
    }
}

impl Algorithm for SelectionSort {
    fn step(&mut self) -> Vec<u32> {
        if !self.sorted {
            if self.scan < self.values.len() {
                if self.values[self.scan] < self.values[self.min_idx] {
                    self.min_idx = self.scan;
                }
                self.scan += 1;
            } else {
                self.values.swap(self.start, self.min_idx);
                self.start += 1;
                if self.start + 1 >= self.values.len() {
                    self.sorted = true;
                } else {
                    self.min_idx = self.start;
                    self.scan = self.start + 1;
                }
            }
        }
        self.values.clone()
    }

    fn done(&self) -> bool {
        self.sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive an algorithm to completion, with a cap so a bug can't hang tests.
    fn run_to_done(algo: &mut dyn Algorithm, cap: usize) -> Vec<u32> {
        let mut last = algo.step();
        let mut steps = 1;
        while !algo.done() {
            assert!(steps < cap, "algorithm did not finish within {cap} steps");
            last = algo.step();
            steps += 1;
        }
        last
    }

    #[test]
    fn every_demo_algorithm_sorts_and_reports_done() {
        for entry in demo_algorithms() {
            let mut algo = (entry.build)(16);
            let last = run_to_done(algo.as_mut(), 10_000);
            let expected: Vec<u32> = (0..16).collect();
            assert_eq!(last, expected, "{} final frame", entry.name);
            assert!(algo.done(), "{} stays done", entry.name);
            // Stepping past completion is harmless and changes nothing.
            assert_eq!(algo.step(), expected, "{} step after done", entry.name);
        }
    }

    #[test]
    fn frames_stay_permutations_of_the_columns() {
        for entry in demo_algorithms() {
            let mut algo = (entry.build)(12);
            for _ in 0..40 {
                let mut frame = algo.step();
                frame.sort_unstable();
                let expected: Vec<u32> = (0..12).collect();
                assert_eq!(frame, expected, "{} frame contents", entry.name);
                if algo.done() {
                    break;
                }
            }
        }
    }

    #[test]
    fn starting_shuffle_is_not_already_sorted() {
        // With a degenerate shuffle every run would finish in one pass.
        let values = shuffled_values(16);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_ne!(values, sorted);
    }

    #[test]
    fn tiny_grids_are_immediately_done() {
        for entry in demo_algorithms() {
            assert!((entry.build)(0).done(), "{} with 0 columns", entry.name);
            assert!((entry.build)(1).done(), "{} with 1 column", entry.name);
        }
    }
}
