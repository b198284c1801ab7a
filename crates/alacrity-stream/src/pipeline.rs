use crate::action::Action;

///
/// Pipeline
///
/// An ordered chain of pipeline stages over entities of type `T`. The
/// stages are exposed for inspection so an external optimizer can collapse
/// recognized prefixes into native query operations and execute only the
/// remainder.
///

pub struct Pipeline<T> {
    actions: Vec<Box<dyn Action<T>>>,
}

impl<T> Pipeline<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Append a stage, builder style.
    #[must_use]
    pub fn then(mut self, action: impl Action<T> + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn push(&mut self, action: impl Action<T> + 'static) {
        self.actions.push(Box::new(action));
    }

    /// The stages in execution order, for optimizer inspection.
    #[must_use]
    pub fn actions(&self) -> &[Box<dyn Action<T>>] {
        &self.actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run every stage verbatim — the fallback path when no stage is
    /// recognized for push-down.
    #[must_use]
    pub fn execute(&self, input: Vec<T>) -> Vec<T> {
        self.actions
            .iter()
            .fold(input, |acc, action| action.apply(acc))
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
