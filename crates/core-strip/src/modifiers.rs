//! Wrappers that adjust how a provider is offered space or reports itself.

use crate::provider::{ProvidedStrip, StripProvider};

/// Offers the inner provider at most `limit` columns.
pub struct ConstrainWidth<P> {
    limit: i32,
    inner: P,
}

/// Offers the inner provider at most `limit` rows.
pub struct ConstrainHeight<P> {
    limit: i32,
    inner: P,
}

/// Marks the inner provider's result as wanting spare space from a stacking
/// parent. Has no effect under any other parent.
pub struct Grow<P> {
    inner: P,
}

pub fn constrain_width<P: StripProvider>(limit: i32, provider: P) -> ConstrainWidth<P> {
    ConstrainWidth {
        limit,
        inner: provider,
    }
}

pub fn constrain_height<P: StripProvider>(limit: i32, provider: P) -> ConstrainHeight<P> {
    ConstrainHeight {
        limit,
        inner: provider,
    }
}

pub fn grow<P: StripProvider>(provider: P) -> Grow<P> {
    Grow { inner: provider }
}

impl<P: StripProvider> StripProvider for ConstrainWidth<P> {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        self.inner.resolve(self.limit.min(max_width), max_height)
    }
}

impl<P: StripProvider> StripProvider for ConstrainHeight<P> {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        self.inner.resolve(max_width, self.limit.min(max_height))
    }
}

impl<P: StripProvider> StripProvider for Grow<P> {
    fn resolve(&self, max_width: i32, max_height: i32) -> ProvidedStrip {
        self.inner.resolve(max_width, max_height).with_grow()
    }
}
