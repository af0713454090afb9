use thiserror::Error;

use super::intervals::Interval;

/// A root, along with the number of iterations it took to find it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub value: f64,
    pub iterations: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RootFindingError {
    #[error("hit max iterations ({iterations}) when trying to find a root in {interval} (last step {last_step:e})")]
    MaxIterations {
        iterations: usize,
        interval: Interval,
        last_step: f64,
    },
}

// Adapted from `rtsafe` in http://www.grad.hr/nastava/gs/prg/NumericalRecipesinC.pdf
//
// `interval` must bracket the root: f has opposite signs (or a zero) at its
// endpoints. Newton steps are taken from `guess`, and any step that leaves the
// bracket is replaced by bisection. We report convergence once a Newton step
// moves by no more than `tolerance`.
#[allow(clippy::float_cmp)]
pub fn newton_plus_bisection(
    f_and_f_prime: impl Fn(f64) -> (f64, f64),
    mut interval: Interval,
    mut guess: f64,
    tolerance: f64,
    num_iterations: usize,
) -> Result<Root, RootFindingError> {
    // We need to determine which way f is oriented. Either endpoint may be
    // the root itself, so look at both.
    let lo_is_neg = f_and_f_prime(interval.lo()).0 < 0.0 || f_and_f_prime(interval.hi()).0 > 0.0;
    let mut last_step = f64::INFINITY;

    for iteration in 1..=num_iterations {
        let (f, f_prime) = f_and_f_prime(guess);

        // Landed right on it
        if f == 0.0 {
            return Ok(Root {
                value: guess,
                iterations: iteration,
            });
        }

        // Update the bracket
        interval = match (lo_is_neg, f < 0.0) {
            (true, true) => interval.split_right(guess),   // - - +
            (true, false) => interval.split_left(guess),   // - + +
            (false, true) => interval.split_left(guess),   // + - -
            (false, false) => interval.split_right(guess), // + + -
        };

        // What's our next guess? Let's try one from Newton's method. If it's
        // outside the interval (or NaN), discard it and use the midpoint.
        let newton_guess = guess - f / f_prime;
        let used_newton = interval.contains(newton_guess);
        let new_guess = if used_newton {
            newton_guess
        } else {
            interval.midpoint()
        };

        last_step = new_guess - guess;
        guess = new_guess;

        if used_newton && last_step.abs() <= tolerance {
            return Ok(Root {
                value: guess,
                iterations: iteration,
            });
        }

        // If the interval is too small to split, we're at machine precision
        let midpoint = interval.midpoint();
        if midpoint == interval.lo() || midpoint == interval.hi() {
            return Ok(Root {
                value: guess,
                iterations: iteration,
            });
        }
    }

    Err(RootFindingError::MaxIterations {
        iterations: num_iterations,
        interval,
        last_step,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_cubics() {
        // Find the root of x^3 - a for several a
        for a in [2.0, 50.0, -1.0, 0.1].iter() {
            let root = newton_plus_bisection(
                |x| (x * x * x - a, 3.0 * x * x),
                Interval::new(-100.0, 100.0),
                0.0,
                1e-12,
                200,
            )
            .unwrap();
            assert_relative_eq!(root.value, a.cbrt(), max_relative = 1e-10);
        }

        // There are three roots to x^3 - 4x^2 - 7x + 10: -2, 1, 5
        let f = |x| 10.0 + x * (-7.0 + x * (-4.0 + x));
        let f_ = |x| -7.0 + x * (-8.0 + x * 3.0);
        let find = |lo, hi| {
            let interval = Interval::new(lo, hi);
            newton_plus_bisection(
                |x| (f(x), f_(x)),
                interval,
                interval.midpoint(),
                1e-12,
                100,
            )
            .unwrap()
            .value
        };
        assert_relative_eq!(find(-3.0, 0.0), -2.0);
        assert_relative_eq!(find(0.0, 4.0), 1.0);
        assert_relative_eq!(find(4.0, 10.0), 5.0);
    }

    #[test]
    fn test_trig() {
        // There's a unique fixed point cos(x) = x
        let root = newton_plus_bisection(
            |x| (x.cos() - x, -x.sin() - 1.0),
            Interval::new(-1.0, 1.0),
            0.0,
            1e-12,
            100,
        )
        .unwrap();
        assert_relative_eq!(root.value, 0.73908513321516064);
    }

    #[test]
    fn test_exact_guess() {
        let root = newton_plus_bisection(
            |x| (x - 3.0, 1.0),
            Interval::new(0.0, 10.0),
            3.0,
            1e-6,
            10,
        )
        .unwrap();
        assert_eq!(root.value, 3.0);
        assert_eq!(root.iterations, 1);
    }

    #[test]
    fn test_max_iterations() {
        let result = newton_plus_bisection(
            |x| (x.cos() - x, -x.sin() - 1.0),
            Interval::new(-1.0, 1.0),
            -1.0,
            1e-15,
            1,
        );
        match result {
            Err(RootFindingError::MaxIterations { iterations, .. }) => assert_eq!(iterations, 1),
            other => panic!("expected MaxIterations, got {:?}", other),
        }
    }
}
