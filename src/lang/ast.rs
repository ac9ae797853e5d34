use super::Column;
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    End(Column),
    Expression(Column, Expression),
    For(Column, Rc<str>, Expression, Expression, Option<Expression>),
    Gosub(Column, u16),
    Goto(Column, u16),
    If(Column, Expression, Box<Then>),
    Let(Column, Rc<str>, Expression),
    Next(Column, Rc<str>),
    Print(Column, Vec<Expression>),
    Return(Column),
}

/// What follows `THEN`: a bare line number or any other statement.
#[derive(Debug, PartialEq)]
pub enum Then {
    Line(Column, u16),
    Statement(Statement),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(Column, f64),
    Var(Column, Rc<str>),
    Function(Column, Rc<str>, Vec<Expression>),
    Negation(Column, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Equal(Column, Box<Expression>, Box<Expression>),
    NotEqual(Column, Box<Expression>, Box<Expression>),
    Less(Column, Box<Expression>, Box<Expression>),
    LessEqual(Column, Box<Expression>, Box<Expression>),
    Greater(Column, Box<Expression>, Box<Expression>),
    GreaterEqual(Column, Box<Expression>, Box<Expression>),
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            End(col) | Expression(col, _) | For(col, ..) | Gosub(col, _) | Goto(col, _)
            | If(col, ..) | Let(col, ..) | Next(col, _) | Print(col, _) | Return(col) => {
                col.clone()
            }
        }
    }
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Number(col, _) | Var(col, _) | Function(col, ..) | Negation(col, _) => col.clone(),
            Multiply(col, ..)
            | Divide(col, ..)
            | Add(col, ..)
            | Subtract(col, ..)
            | Equal(col, ..)
            | NotEqual(col, ..)
            | Less(col, ..)
            | LessEqual(col, ..)
            | Greater(col, ..)
            | GreaterEqual(col, ..) => col.clone(),
        }
    }
}
