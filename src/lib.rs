//! # Line BASIC
//!
//! A line-numbered BASIC with numbers for values, `GOTO` and `GOSUB` for
//! structure, and an interpreter core that embeds in any Rust program.
//!
//! Run the `basic` executable for an interactive prompt. If you get the
//! following, you have achieved success.
//! ```text
//! > █
//! ```
//!
//! The core is a [`mach::Runtime`]. Give it a sink for printed output,
//! then feed it lines exactly as a user would type them.
//! ```
//! use basic::mach::{Arity, Event, Runtime};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let printed = Rc::new(RefCell::new(String::new()));
//! let sink = printed.clone();
//! let mut runtime = Runtime::new(move |s: &str| sink.borrow_mut().push_str(s));
//! runtime
//!     .register_function("half", Arity::Fixed(1), |args| args[0] / 2.0)
//!     .unwrap();
//! runtime.enter("10 FOR I = 1 TO 3").unwrap();
//! runtime.enter("20 PRINT half(I)").unwrap();
//! runtime.enter("30 NEXT I").unwrap();
//! assert_eq!(runtime.enter("RUN").unwrap(), Event::Command);
//! assert_eq!(*printed.borrow(), "0.5\n1\n1.5\n");
//! assert_eq!(runtime.variable("I"), Some(4.0));
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

pub mod lang;
pub mod mach;
