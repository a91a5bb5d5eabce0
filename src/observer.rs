//! Step observer trait for monitoring cloth simulation progress.

/// Hooks into [`Cloth::step`](crate::cloth::Cloth::step).
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after every particle has been integrated for one substep.
    fn on_substep(&mut self, _substep: usize) {}

    /// Called after vertex normals have been recomputed.
    fn on_normals_updated(&mut self) {}

    /// Called when a frame step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
