//! Provides [`Bisection`], the two-axis bracketing search
//! behind the backward transformation.
//!
//! Each axis keeps its own [`Bracket`].
//! A step evaluates the map on the midpoints of both brackets,
//! and halves each bracket by the sign of its own residual.
//! Each axis is narrowed independently of the error of the other axis,
//! though each residual depends on both axes.
//! A residual whose sign is set by the other axis narrows its bracket past the root,
//! and then the search stalls until the max iteration.
//!
//! # Example
//!
//! ```
//! # use gcjtrans::*;
//! use gcjtrans::bisect::{Bisection, MAX_ITERATION, THRESHOLD};
//!
//! # fn main() -> Result<()> {
//! // Solves x + 0.5 = 10.0 for both axes
//! let target = Point::new(10.0, 10.0);
//! let solution = Bisection::new(&Point::new(9.0, 9.0), 1.0).solve(
//!     &target,
//!     THRESHOLD,
//!     MAX_ITERATION,
//!     |p| Ok(p + Correction::new(0.5, 0.5)),
//! )?;
//!
//! assert!(solution.converged);
//! assert_eq!(solution.point, Point::new(9.5, 9.5));
//! # Ok(())}
//! ```
use log::{debug, warn};

use crate::{Correction, Point, Result};

/// The initial half-width of the brackets \[deg\].
pub const DELTA: f64 = 0.0001;
/// The convergence criteria of the residual \[deg\].
pub const THRESHOLD: f64 = 1e-9;
/// The max iteration of [`Bisection::solve`].
pub const MAX_ITERATION: usize = 1000;

/// A closed interval, `low` <= and <= `high`.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Bracket {
    pub low: f64,
    pub high: f64,
}

impl Bracket {
    /// Makes a [`Bracket`] `center` ± `half_width`.
    #[inline]
    pub fn around(center: f64, half_width: f64) -> Self {
        Self {
            low: center - half_width,
            high: center + half_width,
        }
    }

    /// Returns the midpoint.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Returns `high - low`.
    #[inline]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Moves the upper bound to `midpoint` if `residual` is positive,
    /// otherwise the lower bound.
    #[inline]
    fn narrow(&mut self, midpoint: f64, residual: f64) {
        if residual > 0.0 {
            self.high = midpoint;
        } else {
            self.low = midpoint;
        }
    }
}

/// An evaluation of [`Bisection::step`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Step {
    /// The midpoint evaluated
    pub candidate: Point,
    /// The image of `candidate` minus the target
    pub residual: Correction,
    /// `true` if `residual` is within the criteria
    pub converged: bool,
}

/// The result of [`Bisection::solve`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Solution {
    /// The last candidate
    pub point: Point,
    /// The residual of `point`
    pub residual: Correction,
    /// The count of evaluated steps
    pub iteration: usize,
    /// `false` if the iteration exhausted before the residual is within the criteria
    pub converged: bool,
}

/// The search state.
#[derive(Debug, PartialEq, Clone)]
pub struct Bisection {
    latitude: Bracket,
    longitude: Bracket,
    iteration: usize,
}

impl Bisection {
    /// Makes a [`Bisection`] whose brackets are `center` ± `half_width` on each axis.
    pub fn new(center: &Point, half_width: f64) -> Self {
        Self {
            latitude: Bracket::around(center.latitude, half_width),
            longitude: Bracket::around(center.longitude, half_width),
            iteration: 0,
        }
    }

    /// Returns the latitude bracket.
    pub fn latitude(&self) -> &Bracket {
        &self.latitude
    }

    /// Returns the longitude bracket.
    pub fn longitude(&self) -> &Bracket {
        &self.longitude
    }

    /// Returns the count of evaluated steps.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Returns the midpoint of the brackets.
    pub fn midpoint(&self) -> Point {
        Point::new(self.latitude.midpoint(), self.longitude.midpoint())
    }

    /// Evaluates `f` on the midpoint, and narrows the brackets unless converged.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] when `f` fails, the brackets are left untouched.
    pub fn step<F>(&mut self, target: &Point, threshold: f64, mut f: F) -> Result<Step>
    where
        F: FnMut(&Point) -> Result<Point>,
    {
        let candidate = self.midpoint();
        let image = f(&candidate)?;
        self.iteration += 1;

        let residual = &image - target;
        let converged = residual.within(threshold);

        if !converged {
            self.latitude.narrow(candidate.latitude, residual.latitude);
            self.longitude.narrow(candidate.longitude, residual.longitude);
        }

        Ok(Step {
            candidate,
            residual,
            converged,
        })
    }

    /// Steps until the residual is within `threshold`
    /// or `max_iteration` steps are evaluated.
    ///
    /// The result is the last candidate even if not converged,
    /// check [`Solution::converged`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] when `f` fails.
    pub fn solve<F>(
        mut self,
        target: &Point,
        threshold: f64,
        max_iteration: usize,
        mut f: F,
    ) -> Result<Solution>
    where
        F: FnMut(&Point) -> Result<Point>,
    {
        let mut last = Step {
            candidate: self.midpoint(),
            residual: Correction::new(f64::NAN, f64::NAN),
            converged: false,
        };

        while self.iteration < max_iteration {
            last = self.step(target, threshold, &mut f)?;

            if last.converged {
                debug!(
                    "converged at {:?} after {} iterations",
                    last.candidate, self.iteration
                );
                break;
            }
        }

        if !last.converged {
            warn!(
                "not converged after {} iterations, residual {:?}",
                self.iteration, last.residual
            );
        }

        Ok(Solution {
            point: last.candidate,
            residual: last.residual,
            iteration: self.iteration,
            converged: last.converged,
        })
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;
    use crate::trans::forward;

    #[test]
    fn test_bracket() {
        let mut bracket = Bracket::around(1.0, 0.5);
        assert_eq!(bracket, Bracket { low: 0.5, high: 1.5 });
        assert_eq!(bracket.midpoint(), 1.0);
        assert_eq!(bracket.width(), 1.0);

        bracket.narrow(1.0, 1e-3);
        assert_eq!(bracket, Bracket { low: 0.5, high: 1.0 });

        // zero residual moves the lower bound
        bracket.narrow(0.75, 0.0);
        assert_eq!(bracket, Bracket { low: 0.75, high: 1.0 });

        bracket.narrow(0.875, -1e-3);
        assert_eq!(bracket, Bracket { low: 0.875, high: 1.0 });
    }

    #[test]
    fn test_step() {
        let target = Point::new(10.0, 20.0);
        let mut search = Bisection::new(&Point::new(10.0, 20.0), 1.0);

        // image is above the target in latitude, below in longitude
        let step = search
            .step(&target, THRESHOLD, |p| Ok(p + Correction::new(0.5, -0.5)))
            .unwrap();

        assert_eq!(step.candidate, Point::new(10.0, 20.0));
        assert_eq!(step.residual, Correction::new(0.5, -0.5));
        assert!(!step.converged);
        assert_eq!(search.iteration(), 1);
        assert_eq!(search.latitude(), &Bracket { low: 9.0, high: 10.0 });
        assert_eq!(search.longitude(), &Bracket { low: 20.0, high: 21.0 });
    }

    #[test]
    fn test_step_converged_keeps_brackets() {
        let target = Point::new(10.0, 20.0);
        let mut search = Bisection::new(&target, 1.0);
        let before = search.clone();

        let step = search.step(&target, THRESHOLD, |p| Ok(*p)).unwrap();
        assert!(step.converged);
        assert_eq!(search.latitude(), before.latitude());
        assert_eq!(search.longitude(), before.longitude());
    }

    #[test]
    fn test_step_error() {
        let target = Point::new(10.0, 20.0);
        let mut search = Bisection::new(&target, 1.0);

        let actual = search.step(&target, THRESHOLD, |p| {
            Err(crate::Error::new_out_of_region(p.latitude, p.longitude))
        });
        assert_eq!(
            actual,
            Err(crate::Error::new_out_of_region(10.0, 20.0))
        );
        assert_eq!(search.iteration(), 0);
    }

    #[test]
    fn test_solve_linear() {
        // the image is 2x - 1, the solution is (5.5, 10.5)
        let target = Point::new(10.0, 20.0);
        let solution = Bisection::new(&Point::new(5.0, 10.0), 2.0)
            .solve(&target, THRESHOLD, MAX_ITERATION, |p| {
                Ok(Point::new(2.0 * p.latitude - 1.0, 2.0 * p.longitude - 1.0))
            })
            .unwrap();

        assert!(solution.converged);
        assert!(solution.iteration < 64);
        assert_float_eq!(solution.point.latitude, 5.5, abs <= THRESHOLD);
        assert_float_eq!(solution.point.longitude, 10.5, abs <= THRESHOLD);
        assert!(solution.residual.within(THRESHOLD));
    }

    #[test]
    fn test_solve_terminates_at_max_iteration() {
        // the root is out of the bracket, never within the criteria
        let target = Point::new(10.0, 20.0);
        let solution = Bisection::new(&target, DELTA)
            .solve(&target, THRESHOLD, MAX_ITERATION, |p| {
                Ok(p + Correction::new(1.0, -1.0))
            })
            .unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iteration, MAX_ITERATION);
        // collapsed onto the bracket edges
        assert_float_eq!(solution.point.latitude, 10.0 - DELTA, abs <= 1e-12);
        assert_float_eq!(solution.point.longitude, 20.0 + DELTA, abs <= 1e-12);
    }

    #[test]
    fn test_solve_oscillating_terminates() {
        // the residual sign flips on every evaluation
        let target = Point::new(10.0, 20.0);
        let mut count = 0usize;
        let solution = Bisection::new(&target, DELTA)
            .solve(&target, THRESHOLD, MAX_ITERATION, |p| {
                count += 1;
                let s = if count % 2 == 0 { 1.0 } else { -1.0 };
                Ok(p + Correction::new(s, -s))
            })
            .unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iteration, MAX_ITERATION);
        assert_eq!(count, MAX_ITERATION);
    }

    #[test]
    fn test_solve_zero_iteration() {
        let target = Point::new(10.0, 20.0);
        let solution = Bisection::new(&target, DELTA)
            .solve(&target, THRESHOLD, 0, |_| unreachable!())
            .unwrap();

        assert!(!solution.converged);
        assert_eq!(solution.iteration, 0);
        assert_eq!(solution.point, target);
    }

    #[test]
    fn test_width_non_increasing() {
        for target in [
            Point::new(39.1, 106.1),
            Point::new(31.2304, 121.4737),
            Point::new(22.5431, 114.0579),
            Point::new(45.75, 126.65),
        ] {
            let center = &target - (&forward(&target).unwrap() - &target);
            let mut search = Bisection::new(&center, DELTA);

            let mut width = (search.latitude().width(), search.longitude().width());
            for _ in 0..MAX_ITERATION {
                let step = search.step(&target, THRESHOLD, forward).unwrap();

                let next = (search.latitude().width(), search.longitude().width());
                assert!(next.0 <= width.0, "{target:?}");
                assert!(next.1 <= width.1, "{target:?}");
                width = next;

                if step.converged {
                    break;
                }
            }
        }
    }
}
