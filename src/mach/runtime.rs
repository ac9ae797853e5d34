use super::{format_number, Arity, MAX_LINE_LEN, ForFrame, Function, Listing, Operation, ReturnAddress, Stack, Var};
use crate::error;
use crate::lang::{ast::*, lex, parse, token::Token, token::Word, Column, Error, Line, LineNumber};
use log::{debug, trace};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What happened to a line given to [`Runtime::enter`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A direct statement ran and produced this value.
    Immediate(f64),
    Deleted(u16),
    Stored(u16),
    /// LIST, NEW, or RUN executed.
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Aborted,
    Completed,
}

/// Where execution goes after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Jump(u16),
    End,
}

/// ## BASIC session
///
/// Owns the program, variables, functions and both control stacks.
/// Everything PRINT or LIST writes goes to the output sink.

pub struct Runtime {
    listing: Listing,
    vars: Var,
    functions: Function,
    for_stack: Stack<ForFrame>,
    gosub_stack: Stack<ReturnAddress>,
    output: Box<dyn FnMut(&str)>,
    line_number: LineNumber,
    state: RunState,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(|_: &str| {})
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("listing", &self.listing)
            .field("vars", &self.vars)
            .field("functions", &self.functions)
            .field("for_stack", &self.for_stack)
            .field("gosub_stack", &self.gosub_stack)
            .field("state", &self.state)
            .finish()
    }
}

impl Runtime {
    pub fn new<F: FnMut(&str) + 'static>(output: F) -> Runtime {
        Runtime {
            listing: Listing::default(),
            vars: Var::new(),
            functions: Function::new(),
            for_stack: Stack::new("FOR STACK"),
            gosub_stack: Stack::new("GOSUB STACK"),
            output: Box::new(output),
            line_number: None,
            state: RunState::Idle,
        }
    }

    /// Forget the program, variables and registered functions.
    /// The output sink is kept.
    pub fn reset(&mut self) {
        self.listing.clear();
        self.vars.clear();
        self.functions = Function::new();
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.line_number = None;
        self.state = RunState::Idle;
    }

    pub fn set_output<F: FnMut(&str) + 'static>(&mut self, output: F) {
        self.output = Box::new(output);
    }

    pub fn register_function<F>(&mut self, name: &str, arity: Arity, callback: F) -> Result<()>
    where
        F: Fn(&[f64]) -> f64 + 'static,
    {
        self.functions.register(name, arity, Rc::new(callback))?;
        debug!("registered function {} {:?}", name, arity);
        Ok(())
    }

    pub fn get_listing(&self) -> Listing {
        self.listing.clone()
    }

    pub fn set_listing(&mut self, listing: Listing) {
        debug!("listing replaced with {} lines", listing.len());
        self.listing = listing;
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.vars.fetch(name)
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Accept one line of input: a command, a numbered program
    /// line, or a statement to execute immediately.
    pub fn enter(&mut self, text: &str) -> Result<Event> {
        check_len(text)?;
        if let Some(word) = command(text) {
            match word {
                Word::List => self.list(),
                Word::New => self.new_program(),
                _ => {
                    if let Err(error) = self.run() {
                        self.emit(&format!("{}\n", error));
                    }
                }
            }
            return Ok(Event::Command);
        }
        let line = Line::new(text)?;
        match line.number() {
            Some(number) if line.is_empty() => {
                self.listing.remove(number);
                debug!("deleted line {}", number);
                Ok(Event::Deleted(number))
            }
            Some(number) => {
                self.listing.insert(line)?;
                debug!("stored line {}", number);
                Ok(Event::Stored(number))
            }
            None => Ok(Event::Immediate(self.eval(line.text())?)),
        }
    }

    /// Execute one statement outside of RUN.
    pub fn eval(&mut self, text: &str) -> Result<f64> {
        check_len(text)?;
        let statement = parse(&lex(text))?;
        self.line_number = None;
        let (_, value) = self.execute(&statement)?;
        Ok(value)
    }

    pub fn list(&mut self) {
        for line in self.listing.lines() {
            (self.output)(&format!("{}\n", line));
        }
    }

    /// Clears the program only. Variables survive.
    pub fn new_program(&mut self) {
        self.listing.clear();
        debug!("program cleared");
    }

    pub fn run(&mut self) -> Result<()> {
        debug!("run started with {} lines", self.listing.len());
        self.for_stack.clear();
        self.gosub_stack.clear();
        self.state = RunState::Running;
        let result = self.run_listing();
        self.line_number = None;
        match &result {
            Ok(()) => {
                debug!("run completed");
                self.state = RunState::Completed;
            }
            Err(error) => {
                debug!("run aborted: {}", error);
                self.state = RunState::Aborted;
            }
        }
        result
    }

    fn run_listing(&mut self) -> Result<()> {
        let mut cursor = self.listing.first();
        while let Some(number) = cursor {
            self.line_number = Some(number);
            let statement = match self.listing.line(number) {
                Some(line) => line.ast()?,
                None => return Err(error!(InternalError, Some(number))),
            };
            let (flow, _) = self
                .execute(&statement)
                .map_err(|e| e.in_line_number(Some(number)))?;
            trace!("{} {:?}", number, flow);
            cursor = match flow {
                Flow::Continue => self.listing.next_after(number),
                Flow::End => None,
                Flow::Jump(target) => {
                    if self.listing.line(target).is_none() {
                        return Err(error!(UndefinedLine, Some(number);
                            format!("LINE {} NOT FOUND", target)));
                    }
                    Some(target)
                }
            };
        }
        Ok(())
    }

    fn emit(&mut self, s: &str) {
        (self.output)(s)
    }

    /// The line being run, or `ILLEGAL DIRECT` outside of RUN.
    fn indirect(&self, col: &Column) -> Result<u16> {
        match self.line_number {
            Some(number) => Ok(number),
            None => Err(error!(IllegalDirect, ..col)),
        }
    }

    fn execute(&mut self, statement: &Statement) -> Result<(Flow, f64)> {
        use Statement::*;
        match statement {
            End(_) => Ok((Flow::End, 0.0)),
            Expression(_, expr) => Ok((Flow::Continue, self.expression(expr)?)),
            For(_, var, from, to, step) => self.r#for(var, from, to, step.as_ref()),
            Gosub(col, target) => self.r#gosub(col, *target),
            Goto(col, target) => {
                self.indirect(col)?;
                Ok((Flow::Jump(*target), 0.0))
            }
            If(_, condition, then) => self.r#if(condition, then),
            Let(_, var, expr) => {
                let value = self.expression(expr)?;
                self.vars.store(var, value)?;
                Ok((Flow::Continue, value))
            }
            Next(col, var) => self.r#next(col, var),
            Print(_, exprs) => self.r#print(exprs),
            Return(col) => self.r#return(col),
        }
    }

    fn r#print(&mut self, exprs: &[Expression]) -> Result<(Flow, f64)> {
        for (index, expr) in exprs.iter().enumerate() {
            if index > 0 {
                self.emit(" ");
            }
            let value = self.expression(expr)?;
            self.emit(&format_number(value));
        }
        self.emit("\n");
        Ok((Flow::Continue, 0.0))
    }

    fn r#if(&mut self, condition: &Expression, then: &Then) -> Result<(Flow, f64)> {
        if self.expression(condition)? == 0.0 {
            return Ok((Flow::Continue, 0.0));
        }
        match then {
            Then::Line(col, target) => {
                self.indirect(col)?;
                Ok((Flow::Jump(*target), 0.0))
            }
            Then::Statement(statement) => self.execute(statement),
        }
    }

    fn r#for(
        &mut self,
        var: &Rc<str>,
        from: &Expression,
        to: &Expression,
        step: Option<&Expression>,
    ) -> Result<(Flow, f64)> {
        let start = self.expression(from)?;
        let end = self.expression(to)?;
        let step = match step {
            Some(expr) => self.expression(expr)?,
            None => 1.0,
        };
        self.for_stack.push(ForFrame {
            var_name: var.clone(),
            start,
            end,
            step,
            anchor: self.line_number,
        })?;
        self.vars.store(var, start)?;
        Ok((Flow::Continue, 0.0))
    }

    fn r#next(&mut self, col: &Column, var: &Rc<str>) -> Result<(Flow, f64)> {
        let frame = match self.for_stack.last() {
            Some(frame) => frame,
            None => return Err(error!(NextWithoutFor, ..col)),
        };
        if frame.var_name != *var {
            return Err(error!(NextWithoutFor, ..col;
                format!("EXPECTED NEXT {}", frame.var_name)));
        }
        let value = match self.vars.fetch(var) {
            Some(value) => value + frame.step,
            None => return Err(error!(UndefinedVariable, ..col; var.to_string())),
        };
        let continues = frame.continues(value);
        let anchor = frame.anchor;
        self.vars.store(var, value)?;
        if !continues {
            self.for_stack.pop();
            return Ok((Flow::Continue, 0.0));
        }
        let flow = match anchor.and_then(|number| self.listing.next_after(number)) {
            Some(target) => Flow::Jump(target),
            None => Flow::Continue,
        };
        Ok((flow, 0.0))
    }

    fn r#gosub(&mut self, col: &Column, target: u16) -> Result<(Flow, f64)> {
        let number = self.indirect(col)?;
        let address = match self.listing.next_after(number) {
            Some(next) => ReturnAddress::Line(next),
            None => ReturnAddress::End,
        };
        self.gosub_stack.push(address)?;
        Ok((Flow::Jump(target), 0.0))
    }

    fn r#return(&mut self, col: &Column) -> Result<(Flow, f64)> {
        self.indirect(col)?;
        match self.gosub_stack.pop() {
            Some(ReturnAddress::Line(number)) => Ok((Flow::Jump(number), 0.0)),
            Some(ReturnAddress::End) => Ok((Flow::End, 0.0)),
            None => Err(error!(ReturnWithoutGosub, ..col)),
        }
    }

    fn expression(&self, expr: &Expression) -> Result<f64> {
        use Expression::*;
        match expr {
            Number(_, n) => Ok(*n),
            Var(col, name) => match self.vars.fetch(name) {
                Some(value) => Ok(value),
                None => Err(error!(UndefinedVariable, ..col; name.to_string())),
            },
            Function(col, name, args) => self.call(col, name, args),
            Negation(col, expr) => {
                Operation::negate(self.expression(expr)?).map_err(|e| e.in_column(col))
            }
            Add(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::sum),
            Subtract(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::subtract),
            Multiply(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::multiply),
            Divide(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::divide),
            Equal(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::equal),
            NotEqual(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::not_equal),
            Less(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::less),
            LessEqual(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::less_equal),
            Greater(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::greater),
            GreaterEqual(col, lhs, rhs) => self.binary(col, lhs, rhs, Operation::greater_equal),
        }
    }

    fn binary(
        &self,
        col: &Column,
        lhs: &Expression,
        rhs: &Expression,
        op: fn(f64, f64) -> Result<f64>,
    ) -> Result<f64> {
        let lhs = self.expression(lhs)?;
        let rhs = self.expression(rhs)?;
        op(lhs, rhs).map_err(|e| e.in_column(col))
    }

    fn call(&self, col: &Column, name: &str, args: &[Expression]) -> Result<f64> {
        if !self.functions.contains(name) {
            return Err(error!(UndefinedUserFunction, ..col; name));
        }
        let mut values: Vec<f64> = Vec::with_capacity(args.len());
        for arg in args {
            values.push(self.expression(arg)?);
        }
        self.functions
            .call(name, &values)
            .map_err(|e| e.in_column(col))
    }
}

fn check_len(text: &str) -> Result<()> {
    if text.len() > MAX_LINE_LEN {
        return Err(error!(LineBufferOverflow));
    }
    Ok(())
}

/// LIST, NEW or RUN as the first whole word of `text`.
fn command(text: &str) -> Option<Word> {
    let tokens = lex(text);
    let mut tokens = tokens.iter().skip_while(|t| t.is_whitespace());
    let word = tokens.next()?.word().filter(Word::is_command)?;
    match tokens.next() {
        None | Some(Token::Whitespace(_)) => Some(word),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use std::cell::RefCell;

    fn runtime() -> (Runtime, Rc<RefCell<String>>) {
        let out = Rc::new(RefCell::new(String::new()));
        let sink = out.clone();
        let r = Runtime::new(move |s: &str| sink.borrow_mut().push_str(s));
        (r, out)
    }

    #[test]
    fn test_command_words() {
        assert_eq!(command("  run"), Some(Word::Run));
        assert_eq!(command("LIST 10"), Some(Word::List));
        assert_eq!(command("New"), Some(Word::New));
        assert_eq!(command("runner"), None);
        assert_eq!(command("run=1"), None);
        assert_eq!(command("PRINT 1"), None);
    }

    #[test]
    fn test_enter_events() {
        let (mut r, _) = runtime();
        assert_eq!(r.enter("10 PRINT 1").unwrap(), Event::Stored(10));
        assert_eq!(r.enter("10").unwrap(), Event::Deleted(10));
        assert_eq!(r.enter("(2 + 3) * 4").unwrap(), Event::Immediate(20.0));
        assert_eq!(r.enter("2 + 3 * 4").unwrap(), Event::Stored(2));
        assert_eq!(r.enter("LIST").unwrap(), Event::Command);
        assert_eq!(r.enter("70000 END").unwrap_err().code(), ErrorCode::Overflow);
    }

    #[test]
    fn test_line_too_long() {
        let (mut r, _) = runtime();
        let long = format!("x = {}", "1".repeat(MAX_LINE_LEN));
        assert_eq!(r.enter(&long).unwrap_err().code(), ErrorCode::LineBufferOverflow);
        assert_eq!(r.eval(&long).unwrap_err().code(), ErrorCode::LineBufferOverflow);
        assert_eq!(r.variable("x"), None);
        let deep = format!("{}1", "-".repeat(200_000));
        assert_eq!(r.enter(&deep).unwrap_err().code(), ErrorCode::LineBufferOverflow);
        let nested = format!("{}1", "-".repeat(MAX_LINE_LEN - 1));
        assert_eq!(r.enter(&nested).unwrap_err().code(), ErrorCode::FormulaTooComplex);
    }

    #[test]
    fn test_state_transitions() {
        let (mut r, out) = runtime();
        assert_eq!(r.state(), RunState::Idle);
        r.enter("10 PRINT 1").unwrap();
        r.enter("RUN").unwrap();
        assert_eq!(r.state(), RunState::Completed);
        r.enter("20 PRINT 1/0").unwrap();
        assert_eq!(r.enter("RUN").unwrap(), Event::Command);
        assert_eq!(r.state(), RunState::Aborted);
        assert_eq!(
            out.borrow().as_str(),
            "1\n1\nDIVISION BY ZERO IN 20 (7..8)\n"
        );
    }

    #[test]
    fn test_direct_jumps_are_illegal() {
        let (mut r, _) = runtime();
        for text in ["GOTO 10", "GOSUB 10", "RETURN", "IF 1 = 1 THEN 10"] {
            let e = r.eval(text).unwrap_err();
            assert_eq!(e.code(), ErrorCode::IllegalDirect, "{}", text);
        }
        assert_eq!(r.eval("IF 1 = 2 THEN 10").unwrap(), 0.0);
        assert!(r.gosub_stack.is_empty());
    }

    #[test]
    fn test_direct_for_next() {
        let (mut r, _) = runtime();
        r.eval("FOR i = 1 TO 2").unwrap();
        r.eval("NEXT i").unwrap();
        assert_eq!(r.variable("i"), Some(2.0));
        assert_eq!(r.for_stack.len(), 1);
        r.eval("NEXT i").unwrap();
        assert_eq!(r.variable("i"), Some(3.0));
        assert!(r.for_stack.is_empty());
    }

    #[test]
    fn test_reset() {
        let (mut r, out) = runtime();
        r.register_function("one", Arity::Fixed(0), |_| 1.0).unwrap();
        r.enter("x = one()").unwrap();
        r.enter("10 END").unwrap();
        r.reset();
        assert_eq!(r.variable("x"), None);
        assert!(r.get_listing().is_empty());
        assert!(r.eval("one()").is_err());
        r.eval("PRINT 7").unwrap();
        assert_eq!(out.borrow().as_str(), "7\n");
    }
}
