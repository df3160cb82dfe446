#![forbid(unsafe_code)]

//! Per-component bind outcomes.
//!
//! A component that throws while binding is logged and left out; the rest of
//! the page still mounts.

use crate::BindError;

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Keep a bound component, skip an absent one, and log-and-skip a failed one.
pub(crate) fn admit<T>(bound: Result<Option<T>, BindError>) -> Option<T> {
    match bound {
        Ok(component) => component,
        Err(err) => {
            tracing::warn!(component = short_type_name::<T>(), error = %err, "component skipped");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{CaptureSink, ConsoleLayer};
    use bitewise_core::config::LogLevel;
    use pretty_assertions::assert_eq;
    use tracing::Level;
    use tracing_subscriber::prelude::*;

    #[allow(dead_code)]
    struct SectionReveal;

    #[test]
    fn failed_bind_is_skipped_with_a_warning() {
        let sink = CaptureSink::default();
        let subscriber =
            tracing_subscriber::registry().with(ConsoleLayer::new(sink.clone(), LogLevel::Info));
        let admitted = tracing::subscriber::with_default(subscriber, || {
            admit::<SectionReveal>(Err(BindError::js(
                "IntersectionObserver",
                "SyntaxError: bad rootMargin",
            )))
        });
        assert!(admitted.is_none());
        assert_eq!(
            sink.lines(),
            vec![(
                Level::WARN,
                "WARN bitewise component skipped component=SectionReveal \
                 error=IntersectionObserver: SyntaxError: bad rootMargin"
                    .to_string()
            )]
        );
    }

    #[test]
    fn later_components_survive_an_earlier_failure() {
        let outcomes: Vec<Result<Option<u8>, BindError>> = vec![
            Ok(Some(1)),
            Err(BindError::js("appendChild", "HierarchyRequestError")),
            Ok(None),
            Ok(Some(4)),
        ];
        let mounted: Vec<u8> = outcomes.into_iter().filter_map(admit).collect();
        assert_eq!(mounted, vec![1, 4]);
    }
}
