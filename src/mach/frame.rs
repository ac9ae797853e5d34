use crate::lang::LineNumber;
use std::rc::Rc;

/// Where RETURN resumes: a stored line, or past the end of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnAddress {
    Line(u16),
    End,
}

/// An active FOR loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForFrame {
    pub var_name: Rc<str>,
    pub start: f64,
    pub end: f64,
    pub step: f64,
    /// Line holding the FOR statement. `None` when entered directly.
    pub anchor: LineNumber,
}

impl ForFrame {
    /// Whether the loop body runs again once the variable reaches `value`.
    pub fn continues(&self, value: f64) -> bool {
        if self.step > 0.0 {
            value <= self.end
        } else {
            value >= self.end
        }
    }
}
