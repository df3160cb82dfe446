#![forbid(unsafe_code)]

//! Event macros for the core's diagnostics.
//!
//! The core logs a handful of state-machine events: rejected and stale
//! upload decodes, malformed cached user records, carousel ticks. Call sites
//! write `crate::debug!(generation = 3, "...")`.
//!
//! With the `tracing` feature (enabled by `bitewise-web`) the macros are
//! `tracing`'s. Without it they expand to nothing and their arguments are
//! never evaluated, so native consumers of the core pay nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, error, info, trace, warn};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

#[cfg(test)]
mod tests {
    #[test]
    #[allow(unused_variables)]
    fn call_site_shapes_expand() {
        let generation = 7_u64;
        let media_type = "text/plain";
        let err = "trailing comma";
        crate::debug!(media_type, "upload ignored: not an image");
        crate::debug!(generation, "upload decode started");
        crate::warn!(error = %err, "cached user record is malformed; ignoring");
        crate::trace!(from = 0, to = 1, "quote carousel tick");
        crate::info!("config loaded");
        crate::error!(?generation, "unreachable state");
    }

    #[cfg(not(feature = "tracing"))]
    #[test]
    fn disabled_macros_skip_their_arguments() {
        #[allow(dead_code)]
        fn explode() -> u64 {
            panic!("argument evaluated")
        }
        crate::debug!(generation = explode(), "never built");
        crate::warn!("{}", explode());
    }
}
