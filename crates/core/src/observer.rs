/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch a solver's step history as it is produced,
/// enabling logging or an opt-in stopping rule without changing the solver.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`. An `Option` of an
/// observer observes only when it is `Some`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, O: Observer<E, A>> Observer<E, A> for Option<O> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.as_mut().and_then(|observer| observer.observe(event))
    }
}
