/// Hook called by a solver each time it has something to report.
///
/// A search or sweep hands every event to its observer and keeps going unless
/// the observer answers with an action. Printing progress and cutting a long
/// run short are both done this way, so the solvers never write output
/// themselves.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` when nothing
/// needs to watch the run.
pub trait Observer<E, A> {
    /// Receives one event. `Some(action)` asks the solver to act on it.
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
