//! Logging macros used across the workspace.
//!
//! They are thin wrappers over `tracing` so every crate reports through the
//! subscriber installed by the binary. `success!` is an `INFO` event tagged
//! with `status = "success"`, which the terminal formatter renders with its
//! own symbol.

/// Target used for undecorated terminal output.
pub const PRINT_TARGET: &str = "sweepr::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(status = "success", $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::tracing::error!($($arg)*)
    };
}
