//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions over the machine context and the
//! event being dispatched. They decide which transition rule fires without
//! touching the context themselves.

use std::fmt;

/// Named pure predicate that determines if a transition rule can fire.
///
/// Guards are evaluated against the context as it was *before* any action
/// of the dispatch ran. The name is used for diagnostics only.
///
/// # Example
///
/// ```rust
/// use pagemind::core::Guard;
///
/// struct Counter {
///     value: u32,
/// }
///
/// enum Step {
///     Add(u32),
/// }
///
/// let below_limit = Guard::new("belowLimit", |ctx: &Counter, event: &Step| match event {
///     Step::Add(n) => ctx.value + n <= 10,
/// });
///
/// assert!(below_limit.check(&Counter { value: 3 }, &Step::Add(4)));
/// assert!(!below_limit.check(&Counter { value: 8 }, &Step::Add(4)));
/// assert_eq!(below_limit.name(), "belowLimit");
/// ```
pub struct Guard<C, E> {
    name: &'static str,
    predicate: Box<dyn Fn(&C, &E) -> bool + Send + Sync>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard allows the transition for this context and event.
    pub fn check(&self, context: &C, event: &E) -> bool {
        (self.predicate)(context, event)
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

impl<C, E> fmt::Debug for Guard<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
