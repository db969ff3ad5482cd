// SPDX-License-Identifier: FSL-1.1
use crate::Stack;
use log::debug;

/// Builder type for constructing [`Stack`] instances
pub struct Builder<T> {
    capacity: Option<usize>,
    values: Vec<T>,
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Builder<T> {
    /// create a new builder
    pub fn new() -> Self {
        Self {
            capacity: None,
            values: Vec::default(),
        }
    }

    /// Reserve room for at least this many values up front. This is only an
    /// allocation hint, the stack still grows past it.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Initial values, pushed in iteration order so the last one is the top
    pub fn with_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.values.extend(values);
        self
    }

    /// Builds the [`Stack`] from the builder configuration
    pub fn build(self) -> Stack<T> {
        let mut values = self.values;
        if let Some(capacity) = self.capacity {
            values.reserve(capacity.saturating_sub(values.len()));
        }
        debug!(
            "built stack with {} values, capacity {}",
            values.len(),
            values.capacity()
        );
        Stack::from(values)
    }
}
