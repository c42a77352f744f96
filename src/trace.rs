//! Instance-resolution tracing.
//!
//! With the `tracing` feature enabled, derived and adapted instances emit one
//! `TRACE` event per operation naming the carrier type and the strategy that
//! served it. Without the feature the macro expands to nothing.

macro_rules! trace_instance {
    ($carrier:ty, $typeclass:literal, $strategy:literal) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            carrier = ::std::any::type_name::<$carrier>(),
            typeclass = $typeclass,
            strategy = $strategy,
            "resolved instance"
        );
    };
}

pub(crate) use trace_instance;
