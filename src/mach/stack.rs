use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced vector
///
/// Grows until memory runs out. A failed allocation is reported
/// as `OUT OF MEMORY` with the stack's name.

pub struct Stack<T> {
    name: &'static str,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(name: &'static str) -> Stack<T> {
        Stack { name, vec: vec![] }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.try_reserve(1).is_err() {
            return Err(error!(OutOfMemory; self.name));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo() {
        let mut stack: Stack<u16> = Stack::new("TEST STACK");
        stack.push(10).unwrap();
        stack.push(20).unwrap();
        assert_eq!(stack.last(), Some(&20));
        assert_eq!(stack.pop(), Some(20));
        assert_eq!(stack.pop(), Some(10));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_clear() {
        let mut stack: Stack<u16> = Stack::new("TEST STACK");
        for n in 0..100 {
            stack.push(n).unwrap();
        }
        assert_eq!(stack.len(), 100);
        stack.clear();
        assert!(stack.is_empty());
    }
}
