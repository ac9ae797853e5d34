#![allow(dead_code)]
use basic::mach::Runtime;
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the runtime has printed.
#[derive(Clone, Default)]
pub struct Output(Rc<RefCell<String>>);

impl Output {
    /// Printed text since the last call.
    pub fn take(&self) -> String {
        self.0.replace(String::new())
    }
}

pub fn runtime() -> (Runtime, Output) {
    let output = Output::default();
    let sink = output.clone();
    let r = Runtime::new(move |s: &str| sink.0.borrow_mut().push_str(s));
    (r, output)
}

pub fn enter_all(r: &mut Runtime, lines: &[&str]) {
    for line in lines {
        if let Err(e) = r.enter(line) {
            panic!("{:?} : {}", line, e);
        }
    }
}

/// Store the program, RUN it, and return what it printed.
pub fn exec(lines: &[&str]) -> (Runtime, String) {
    let (mut r, output) = runtime();
    enter_all(&mut r, lines);
    enter_all(&mut r, &["RUN"]);
    (r, output.take())
}
