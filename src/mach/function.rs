use crate::error;
use crate::lang::Error;
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A native function body.
pub type Callback = Rc<dyn Fn(&[f64]) -> f64>;

/// How many arguments a function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => *n == count,
            Arity::Variadic => true,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic => write!(f, "ANY"),
        }
    }
}

/// The integer form: `-1` is variadic, any other negative is rejected.
impl TryFrom<i32> for Arity {
    type Error = Error;
    fn try_from(n: i32) -> std::result::Result<Self, Self::Error> {
        match n {
            -1 => Ok(Arity::Variadic),
            n if n >= 0 => Ok(Arity::Fixed(n as usize)),
            _ => Err(error!(IllegalFunctionCall; "INVALID ARITY")),
        }
    }
}

/// ## Function registry
///
/// Built-in math functions are present from the start and
/// nothing is ever removed. Names are case-sensitive.

pub struct Function {
    functions: HashMap<Rc<str>, (Arity, Callback)>,
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.functions.keys().map(|k| &**k).collect();
        names.sort_unstable();
        write!(f, "Function {:?}", names)
    }
}

impl Default for Function {
    fn default() -> Function {
        Function::new()
    }
}

impl Function {
    pub fn new() -> Function {
        let mut functions: HashMap<Rc<str>, (Arity, Callback)> = HashMap::new();
        let mut builtin = |name: &str, arity: Arity, callback: Callback| {
            functions.insert(Rc::from(name), (arity, callback));
        };
        builtin("sin", Arity::Fixed(1), unary(f64::sin));
        builtin("cos", Arity::Fixed(1), unary(f64::cos));
        builtin("tan", Arity::Fixed(1), unary(f64::tan));
        builtin("sqrt", Arity::Fixed(1), unary(f64::sqrt));
        builtin("abs", Arity::Fixed(1), unary(f64::abs));
        builtin("exp", Arity::Fixed(1), unary(f64::exp));
        builtin("floor", Arity::Fixed(1), unary(f64::floor));
        builtin("ceil", Arity::Fixed(1), unary(f64::ceil));
        builtin("log", Arity::Fixed(1), unary(|x| positive(x).ln()));
        builtin("log10", Arity::Fixed(1), unary(|x| positive(x).log10()));
        builtin(
            "pow",
            Arity::Fixed(2),
            Rc::new(|args: &[f64]| match args {
                [x, y] => x.powf(*y),
                _ => f64::NAN,
            }),
        );
        builtin("min", Arity::Variadic, Rc::new(|args: &[f64]| fold(args, |a, m| a < m)));
        builtin("max", Arity::Variadic, Rc::new(|args: &[f64]| fold(args, |a, m| a > m)));
        Function { functions }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn register(&mut self, name: &str, arity: Arity, callback: Callback) -> Result<()> {
        if !is_identifier(name) {
            return Err(error!(SyntaxError; "INVALID FUNCTION NAME"));
        }
        if self.functions.contains_key(name) {
            return Err(error!(DuplicateDefinition; name));
        }
        if self.functions.try_reserve(1).is_err() {
            return Err(error!(OutOfMemory; "FUNCTIONS"));
        }
        self.functions.insert(Rc::from(name), (arity, callback));
        Ok(())
    }

    pub fn call(&self, name: &str, args: &[f64]) -> Result<f64> {
        let (arity, callback) = match self.functions.get(name) {
            Some(entry) => entry,
            None => return Err(error!(UndefinedUserFunction; name)),
        };
        if !arity.accepts(args.len()) {
            return Err(error!(IllegalFunctionCall;
                format!("{} EXPECTS {} ARGUMENTS, GOT {}", name, arity, args.len())
            ));
        }
        Ok(callback(args))
    }
}

fn unary(f: fn(f64) -> f64) -> Callback {
    Rc::new(move |args: &[f64]| match args {
        [x] => f(*x),
        _ => f64::NAN,
    })
}

fn positive(x: f64) -> f64 {
    if x <= 0.0 {
        f64::NAN
    } else {
        x
    }
}

fn fold(args: &[f64], better: fn(f64, f64) -> bool) -> f64 {
    match args.split_first() {
        Some((first, rest)) => rest
            .iter()
            .fold(*first, |m, &a| if better(a, m) { a } else { m }),
        None => f64::NAN,
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
