/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. Use
/// it when only the result of the algorithm is of interest.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Counts the steps instead of storing them.
impl<S> StepCollector<S> for usize {
    #[inline]
    fn push(&mut self, _: S) {
        *self += 1;
    }
}
