/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and returns its value. The
/// log level defaults to `Debug`.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        log::log!($log_level, "{} took {} µs", $label, elapsed.as_micros());
        value
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_timed_returns_value() {
        let value = timed!("addition", 2 + 2);
        assert_eq!(value, 4);
        let value = timed!("subtraction", log::Level::Trace, 2 - 2);
        assert_eq!(value, 0);
    }
}
