use stepwise_core::Observer;

/// Runs two observers on every event.
///
/// Both observers always see the event. If both request an action, the
/// first observer's action wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Chain<T, U>(pub T, pub U);

impl<E, A, T, U> Observer<E, A> for Chain<T, U>
where
    T: Observer<E, A>,
    U: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}
