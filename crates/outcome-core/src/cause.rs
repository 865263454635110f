//! # Cause Convention
//!
//! A failure cause is usually a closed enum of named reasons, each carrying a
//! human-readable message. `Outcome` never requires this: its `E` parameter is
//! unbounded. Producers that want a uniform way to report their causes
//! implement [`Cause`].

/// A failure reason that can describe itself.
pub trait Cause {
    /// The human-readable message carried by this cause.
    fn message(&self) -> &str;
}

impl<C: Cause + ?Sized> Cause for &C {
    fn message(&self) -> &str {
        (**self).message()
    }
}

impl<C: Cause + ?Sized> Cause for Box<C> {
    fn message(&self) -> &str {
        (**self).message()
    }
}
