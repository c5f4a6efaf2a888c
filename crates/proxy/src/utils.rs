//! Utility macros shared across the crate.

/// A macro for early returns with `None` if a condition is not met.
///
/// This is similar to the `assert!` macro, but bails out of an
/// `Option`-returning validator instead of panicking.
///
/// # Example
///
/// ```ignore
/// ensure!(port >= 1 && port <= 65535);
/// ```
macro_rules! ensure {
    ($predicate:expr) => {
        if !$predicate {
            return None;
        }
    };
}

pub(crate) use ensure;
