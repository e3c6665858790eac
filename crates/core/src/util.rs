/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns its value.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of cells in a hexagon-shaped grid based on its radius.
/// Radius 0 means 1 cell, 1 is 7 cells, 2 is 19, etc.
pub fn grid_len(radius: u16) -> usize {
    // We'll always have 3r^2+3r+1 cells (a reduction of a geometric sum).
    // f(0) = 1, and we add 6r cells for every step after that, so:
    // 1, (+6) 7, (+12) 19, (+18) 37, ...
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}
