use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// Names are case-sensitive. Any `f64` may be stored, NaN included,
/// so absence is reported with `None` rather than a sentinel value.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<Rc<str>, f64>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn fetch(&self, var_name: &str) -> Option<f64> {
        self.vars.get(var_name).copied()
    }

    pub fn store(&mut self, var_name: &Rc<str>, value: f64) -> Result<()> {
        if let Some(var) = self.vars.get_mut(var_name) {
            *var = value;
            return Ok(());
        }
        if self.vars.try_reserve(1).is_err() {
            return Err(error!(OutOfMemory; "VARIABLES"));
        }
        self.vars.insert(var_name.clone(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_fetch() {
        let mut var = Var::new();
        let name: Rc<str> = Rc::from("x");
        assert_eq!(var.fetch("x"), None);
        var.store(&name, 5.0).unwrap();
        var.store(&name, 6.0).unwrap();
        assert_eq!(var.fetch("x"), Some(6.0));
        assert_eq!(var.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut var = Var::new();
        var.store(&Rc::from("x"), 1.0).unwrap();
        assert_eq!(var.fetch("X"), None);
    }

    #[test]
    fn test_nan_is_a_value() {
        let mut var = Var::new();
        var.store(&Rc::from("n"), f64::NAN).unwrap();
        assert!(var.fetch("n").unwrap().is_nan());
        var.clear();
        assert!(var.is_empty());
    }
}
