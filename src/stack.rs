// SPDX-License-Identifier: FSL-1.1
/// stack builder
pub mod builder;

pub use builder::Builder;

use crate::{Error, Lifo, StackError};
use log::{debug, trace};
use std::{iter::Rev, slice, vec};

/// A generic last-in-first-out stack backed by a growable vector. The last
/// element of the vector is always the top of the stack.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    values: Vec<T>,
}

impl<T> Stack<T> {
    /// create a new, empty stack
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// create a new, empty stack with room for `capacity` values before it
    /// reallocates
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// push a value onto the top of the stack
    pub fn push(&mut self, value: T) {
        self.values.push(value);
        trace!("push -> len {}", self.values.len());
    }

    /// remove and return the top value, or None if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        let value = self.values.pop();
        trace!("pop -> found {}, len {}", value.is_some(), self.values.len());
        value
    }

    /// get a reference to the top value without removing it
    pub fn peek(&self) -> Option<&T> {
        self.values.last()
    }

    /// get a mutable reference to the top value
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.values.last_mut()
    }

    /// get a reference to the value `depth` positions below the top; a depth
    /// of zero is the top itself
    pub fn peek_at(&self, depth: usize) -> Option<&T> {
        let len = self.values.len();
        if depth >= len {
            return None;
        }
        self.values.get(len - 1 - depth)
    }

    /// like [`Stack::pop`] but fails with [`StackError::Empty`]
    pub fn try_pop(&mut self) -> Result<T, Error> {
        match self.pop() {
            Some(value) => Ok(value),
            None => {
                debug!("try_pop on an empty stack");
                Err(StackError::Empty("pop").into())
            }
        }
    }

    /// like [`Stack::peek`] but fails with [`StackError::Empty`]
    pub fn try_peek(&self) -> Result<&T, Error> {
        match self.peek() {
            Some(value) => Ok(value),
            None => {
                debug!("try_peek on an empty stack");
                Err(StackError::Empty("peek").into())
            }
        }
    }

    /// the number of values on the stack
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// the number of values on the stack; same as [`Stack::size`]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// true if there are no values on the stack
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// the number of values the stack can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// remove every value from the stack
    pub fn clear(&mut self) {
        debug!("clear -> dropping {} values", self.values.len());
        self.values.clear();
    }

    /// iterate over the values from the top down
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.values.iter().rev()
    }

    /// consume the stack and return the backing vector, bottom first
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}

impl<T: Default> Stack<T> {
    /// pop the top value, returning `(T::default(), false)` when the stack is
    /// empty
    pub fn pop_or_default(&mut self) -> (T, bool) {
        match self.pop() {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }
}

impl<T: Clone + Default> Stack<T> {
    /// copy out the top value, returning `(T::default(), false)` when the
    /// stack is empty
    pub fn peek_or_default(&self) -> (T, bool) {
        match self.peek() {
            Some(value) => (value.clone(), true),
            None => (T::default(), false),
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Lifo for Stack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        Stack::push(self, value)
    }

    fn pop(&mut self) -> Option<T> {
        Stack::pop(self)
    }

    fn top(&self) -> Option<&T> {
        Stack::peek(self)
    }

    fn peek(&self, idx: usize) -> Option<&T> {
        Stack::peek_at(self, idx)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn is_empty(&self) -> bool {
        Stack::is_empty(self)
    }
}

impl<T> From<Vec<T>> for Stack<T> {
    fn from(values: Vec<T>) -> Self {
        Self { values }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.values.extend(iter);
        trace!("extend -> len {}", self.values.len());
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = Rev<vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter().rev()
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Rev<slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let mut stack: Stack<i32> = Stack::new();
        assert!(stack.is_empty());
        assert_eq!(0, stack.size());
        assert_eq!(None, stack.peek());
        assert_eq!(None, stack.pop());
        assert_eq!(0, stack.size());
    }

    #[test]
    fn test_push_one() {
        let mut stack = Stack::new();
        stack.push(3);
        assert!(!stack.is_empty());
        assert_eq!(Some(&3), stack.peek());
        assert_eq!(1, stack.len());
        assert_eq!(Some(3), stack.pop());
        assert_eq!(None, stack.peek());
        assert_eq!(None, stack.pop());
    }

    #[test]
    fn test_or_default() {
        let mut stack: Stack<u8> = Stack::new();
        assert_eq!((0, false), stack.peek_or_default());
        assert_eq!((0, false), stack.pop_or_default());
        stack.push(7);
        assert_eq!((7, true), stack.peek_or_default());
        assert_eq!((7, true), stack.pop_or_default());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_try_forms() {
        let mut stack: Stack<&str> = Stack::new();
        assert!(matches!(
            stack.try_peek(),
            Err(Error::Stack(StackError::Empty("peek")))
        ));
        assert!(matches!(
            stack.try_pop(),
            Err(Error::Stack(StackError::Empty("pop")))
        ));
        stack.push("a");
        assert_eq!("a", *stack.try_peek().unwrap());
        assert_eq!("a", stack.try_pop().unwrap());
    }

    #[test]
    fn test_peek_mut() {
        let mut stack = Stack::from(vec![1, 2]);
        if let Some(top) = stack.peek_mut() {
            *top = 20;
        }
        assert_eq!(vec![1, 20], stack.into_vec());
    }

    #[test]
    fn test_peek_at() {
        let stack: Stack<char> = "abc".chars().collect();
        assert_eq!(Some(&'c'), stack.peek_at(0));
        assert_eq!(Some(&'a'), stack.peek_at(2));
        assert_eq!(None, stack.peek_at(3));
    }

    #[test]
    fn test_iter_is_top_down() {
        let mut stack = Stack::with_capacity(4);
        stack.extend([1, 2, 3]);
        assert!(stack.capacity() >= 4);
        assert_eq!(vec![&3, &2, &1], stack.iter().collect::<Vec<_>>());
        assert_eq!(vec![3, 2, 1], stack.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_debug_is_top_down() {
        let stack = Stack::from(vec![1, 2, 3]);
        assert_eq!("[3, 2, 1]", format!("{:?}", stack));
    }

    #[test]
    fn test_clear() {
        let mut stack = Stack::from(vec!["x", "y"]);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(Stack::default(), stack);
    }
}
