// SPDX-License-Identifier: FSL-1.1

/// Trait for a last-in-first-out value store
pub trait Lifo {
    /// The type of the values held
    type Item;

    /// push a value onto the stack
    fn push(&mut self, value: Self::Item);

    /// remove the last top value from the stack
    fn pop(&mut self) -> Option<Self::Item>;

    /// get a reference to the top value on the stack
    fn top(&self) -> Option<&Self::Item>;

    /// peek at the item at the given depth below the top
    fn peek(&self, idx: usize) -> Option<&Self::Item>;

    /// return the number of values on the stack
    fn len(&self) -> usize;

    /// return if the stack is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Lifo for Vec<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn top(&self) -> Option<&T> {
        self.last()
    }

    fn peek(&self, idx: usize) -> Option<&T> {
        if idx >= Vec::len(self) {
            return None;
        }
        self.get(Vec::len(self) - 1 - idx)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}
