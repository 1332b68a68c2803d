use std::fmt;

/// A value computed on demand
///
/// Mirrors the lazy providers build tools hand out for values that are only
/// known late in configuration. Every [`Provider::get`] evaluates the source
/// again, so the result always reflects the host's current state.
pub struct Provider<T> {
    source: Box<dyn Fn() -> T>,
}

impl<T: 'static> Provider<T> {
    pub fn new<F>(source: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            source: Box::new(source),
        }
    }

    /// Provider of an already known value
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move || value.clone())
    }

    pub fn get(&self) -> T {
        (self.source)()
    }

    /// Transform the value when it is read, not before
    pub fn map<U, F>(self, f: F) -> Provider<U>
    where
        U: 'static,
        F: Fn(T) -> U + 'static,
    {
        let source = self.source;
        Provider::new(move || f(source()))
    }
}

impl<T> fmt::Debug for Provider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider").finish_non_exhaustive()
    }
}
