//! Macros for error creation and early return.

/// Return early with a leaf [`Error`](crate::Error) built from a format
/// string.
///
/// The stack trace is captured at the macro call site. Works in functions
/// returning [`Result`](crate::Result) as well as functions whose error
/// type converts from [`Error`](crate::Error).
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::new(format!($($arg)*)).into())
    };
}

/// Return early with a leaf [`Error`](crate::Error) when a condition does
/// not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::bail!($($arg)*);
        }
    };
}
