//! Count-up decorator for KPI values.
//!
//! Purely cosmetic: yields the intermediate values a counter climbs through
//! on its way from 0 to the target, in increments of `ceil(target / 25)`.
//! Consumers that do not animate simply render the target directly; the
//! data contract never depends on this module.

/// Bounded iterator of intermediate counter values.
///
/// Always yields at least one value and always ends exactly on `target`.
#[derive(Debug, Clone)]
pub struct CountUp {
    current: usize,
    target: usize,
    step: usize,
    done: bool,
}

impl CountUp {
    pub fn new(target: usize) -> Self {
        Self {
            current: 0,
            target,
            step: target.div_ceil(25).max(1),
            done: false,
        }
    }
}

impl Iterator for CountUp {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.done {
            return None;
        }

        self.current = (self.current + self.step).min(self.target);
        if self.current >= self.target {
            self.done = true;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::CountUp;

    #[test]
    fn zero_target_yields_single_zero_frame() {
        let frames: Vec<usize> = CountUp::new(0).collect();
        assert_eq!(frames, vec![0]);
    }

    #[test]
    fn small_target_counts_one_by_one() {
        let frames: Vec<usize> = CountUp::new(3).collect();
        assert_eq!(frames, vec![1, 2, 3]);
    }

    #[test]
    fn frames_are_monotonic_bounded_and_end_on_target() {
        let frames: Vec<usize> = CountUp::new(100).collect();
        assert!(frames.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(*frames.last().unwrap(), 100);
        assert!(frames.len() <= 26);
    }
}
