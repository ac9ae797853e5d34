/*!
## Rust Machine Module

This Rust module executes BASIC statements and runs stored programs.

*/

/// Most arguments a single function call may pass.
pub const MAX_FUNCTION_ARGS: usize = 8;

/// Deepest nesting of parentheses, unary signs and IF...THEN IF.
pub const MAX_NESTING: usize = 64;

/// Significant digits PRINT uses for numbers.
pub const PRINT_PRECISION: usize = 15;

/// Longest line accepted from the shell or a program file.
pub const MAX_LINE_LEN: usize = 1024;

mod format;
mod frame;
mod function;
mod listing;
mod operation;
mod runtime;
mod stack;
mod var;

pub use format::format_number;
pub use frame::ForFrame;
pub use frame::ReturnAddress;
pub use function::Arity;
pub use function::Callback;
pub use function::Function;
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::Event;
pub use runtime::RunState;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
