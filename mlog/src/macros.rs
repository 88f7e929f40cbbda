//! Logging macros. Every macro takes `format!`-style arguments, checked at compile time, and an
//! optional leading `logger: <&mut impl Logger>,` to write somewhere other than stdout.

/// Logs a record of the given [`Severity`](crate::Severity) to stdout.
///
/// ```
/// mlog::log!(mlog::Severity::Info, "Device[{}]: {}", 0, "GPU-X");
/// ```
#[cfg(not(feature = "disabled"))]
#[macro_export]
macro_rules! log {
    ($($body:tt)+) => {
        $crate::__emit!($($body)+)
    };
}

/// Logs a record of the given [`Severity`](crate::Severity) to stdout.
///
/// Built with the `disabled` feature: the arguments are type-checked but never evaluated.
#[cfg(feature = "disabled")]
#[macro_export]
macro_rules! log {
    ($($body:tt)+) => {
        $crate::__discard!($($body)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __emit {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {{
        let _ = $crate::Logger::log($logger, $severity, ::std::format_args!($($arg)+));
    }};
    ($severity:expr, $($arg:tt)+) => {
        $crate::log($severity, ::std::format_args!($($arg)+))
    };
}

// The branch keeps format checking in place while guaranteeing nothing runs.
#[doc(hidden)]
#[macro_export]
macro_rules! __discard {
    (logger: $logger:expr, $severity:expr, $($arg:tt)+) => {{
        if false {
            let _ = $crate::Logger::log($logger, $severity, ::std::format_args!($($arg)+));
        }
    }};
    ($severity:expr, $($arg:tt)+) => {{
        if false {
            $crate::log($severity, ::std::format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Fatal, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warning {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log!(logger: $logger, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log!($crate::Severity::Debug, $($arg)+)
    };
}
