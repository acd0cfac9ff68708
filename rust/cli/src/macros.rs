//! Shorthand for the exit-code paths in [`crate::run`].

/// Write a line to a stream, returning [`crate::exit_code::ERROR`] from the
/// enclosing function if the write fails.
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
