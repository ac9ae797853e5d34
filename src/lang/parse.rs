use super::{ast::*, token::*, Column, Error, LineNumber};
use crate::error;
use crate::mach::{MAX_FUNCTION_ARGS, MAX_NESTING};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Parse one statement. Anything left over after it is an error.
pub fn parse(tokens: &[Token]) -> Result<Statement> {
    Parser::parse(tokens)
}

struct Parser<'a> {
    token_stream: std::slice::Iter<'a, Token>,
    peeked: Option<&'a Token>,
    col: Column,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token]) -> Result<Statement> {
        let mut parse = Parser {
            token_stream: tokens.iter(),
            peeked: None,
            col: 0..0,
            depth: 0,
        };
        match parse.statement() {
            Ok(statement) => {
                if parse.peek().is_some() {
                    return Err(error!(SyntaxError, ..&parse.column(); "UNEXPECTED CHARACTERS AT END"));
                }
                Ok(statement)
            }
            Err(e) => Err(e.in_column(&parse.col)),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn next(&mut self) -> Option<&'a Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        loop {
            self.col.start = self.col.end;
            let t = self.token_stream.next()?;
            self.col.end += t.to_string().chars().count();
            if !t.is_whitespace() {
                return Some(t);
            }
        }
    }

    fn peek(&mut self) -> Option<&'a Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked
    }

    /// Reserved words only count when followed by whitespace or the end of the line.
    fn word(&mut self) -> Option<Word> {
        let word = self.peek()?.word()?;
        match self.token_stream.as_slice().first() {
            None | Some(Token::Whitespace(_)) => Some(word),
            Some(_) => None,
        }
    }

    fn accept(&mut self, word: Word) -> bool {
        if self.word() == Some(word) {
            self.next();
            return true;
        }
        false
    }

    fn nest<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth == MAX_NESTING {
            return Err(error!(FormulaTooComplex));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn is_assignment(&mut self) -> bool {
        if let Some(Token::Ident(_)) = self.peek() {
            let mut rest = self.token_stream.clone();
            return rest.find(|t| !t.is_whitespace()) == Some(&Token::Operator(Operator::Equal));
        }
        false
    }

    fn statement(&mut self) -> Result<Statement> {
        if let Some(word) = self.word() {
            if word.is_statement() {
                self.next();
                return Statement::for_word(self, word);
            }
        }
        if self.is_assignment() {
            let column = self.column();
            return Statement::r#let(self, column);
        }
        self.peek();
        let column = self.column();
        Ok(Statement::Expression(column, self.expression()?))
    }

    fn comparison(&mut self) -> Result<Expression> {
        let lhs = self.expression()?;
        let op = match self.next() {
            Some(Token::Operator(op)) if op.is_comparison() => *op,
            _ => return Err(error!(SyntaxError; "EXPECTED COMPARISON OPERATOR")),
        };
        let column = self.column();
        let rhs = self.expression()?;
        Ok(Expression::for_binary_op(column, &op, lhs, rhs))
    }

    fn expression(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op)) if matches!(op, Operator::Plus | Operator::Minus) => *op,
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.term()?;
            lhs = Expression::for_binary_op(column, &op, lhs, rhs);
        }
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.factor()?;
        loop {
            let op = match self.peek() {
                Some(Token::Operator(op))
                    if matches!(op, Operator::Multiply | Operator::Divide) =>
                {
                    *op
                }
                _ => return Ok(lhs),
            };
            self.next();
            let column = self.column();
            let rhs = self.factor()?;
            lhs = Expression::for_binary_op(column, &op, lhs, rhs);
        }
    }

    fn factor(&mut self) -> Result<Expression> {
        match self.next() {
            Some(Token::Operator(Operator::Plus)) => self.nest(|p| p.factor()),
            Some(Token::Operator(Operator::Minus)) => {
                let column = self.column();
                let expr = self.nest(|p| p.factor())?;
                Ok(Expression::Negation(column, Box::new(expr)))
            }
            Some(Token::LParen) => {
                let expr = self.nest(|p| p.expression())?;
                self.expect(Token::RParen)?;
                Ok(expr)
            }
            Some(Token::Ident(i)) => {
                let column = self.column();
                match self.peek() {
                    Some(Token::LParen) => Ok(Expression::Function(
                        column,
                        Rc::from(i.as_str()),
                        self.expression_list()?,
                    )),
                    _ => Ok(Expression::Var(column, Rc::from(i.as_str()))),
                }
            }
            Some(Token::Number(s)) => Expression::for_number(self.column(), s),
            _ => Err(error!(SyntaxError; "EXPECTED EXPRESSION")),
        }
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        self.expect(Token::LParen)?;
        let mut v: Vec<Expression> = vec![];
        if let Some(Token::RParen) = self.peek() {
            self.next();
            return Ok(v);
        }
        loop {
            if v.len() == MAX_FUNCTION_ARGS {
                return Err(error!(IllegalFunctionCall; "TOO MANY ARGUMENTS"));
            }
            v.push(self.expression()?);
            match self.next() {
                Some(Token::RParen) => return Ok(v),
                Some(Token::Comma) => continue,
                _ => return Err(error!(SyntaxError; "EXPECTED RIGHT PARENTHESIS")),
            }
        }
    }

    fn printer_list(&mut self) -> Result<Vec<Expression>> {
        let mut v: Vec<Expression> = vec![];
        while self.peek().is_some() {
            v.push(self.expression()?);
            match self.peek() {
                Some(Token::Comma) => {
                    self.next();
                }
                _ => break,
            }
        }
        Ok(v)
    }

    fn ident(&mut self) -> Result<Rc<str>> {
        match self.next() {
            Some(Token::Ident(i)) => Ok(Rc::from(i.as_str())),
            _ => Err(error!(SyntaxError; "EXPECTED VARIABLE")),
        }
    }

    fn line_number(&mut self) -> Result<u16> {
        let line = match self.next() {
            Some(t) => LineNumber::try_from(t)?,
            None => None,
        };
        line.ok_or_else(|| error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }

    fn expect(&mut self, token: Token) -> Result<()> {
        if let Some(t) = self.next() {
            if *t == token {
                return Ok(());
            }
        }
        Err(error!(SyntaxError;
            match token {
                Token::LParen => "EXPECTED LEFT PARENTHESIS",
                Token::RParen => "EXPECTED RIGHT PARENTHESIS",
                Token::Comma => "EXPECTED COMMA",
                Token::Operator(Operator::Equal) => "EXPECTED EQUALS",
                Token::Operator(_) => "EXPECTED OPERATOR",
                _ => "UNEXPECTED TOKEN",
            }
        ))
    }
}

impl Expression {
    fn for_binary_op(col: Column, op: &Operator, lhs: Expression, rhs: Expression) -> Expression {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        use Operator::*;
        match op {
            Plus => Expression::Add(col, lhs, rhs),
            Minus => Expression::Subtract(col, lhs, rhs),
            Multiply => Expression::Multiply(col, lhs, rhs),
            Divide => Expression::Divide(col, lhs, rhs),
            Equal => Expression::Equal(col, lhs, rhs),
            NotEqual => Expression::NotEqual(col, lhs, rhs),
            Less => Expression::Less(col, lhs, rhs),
            LessEqual => Expression::LessEqual(col, lhs, rhs),
            Greater => Expression::Greater(col, lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(col, lhs, rhs),
        }
    }

    fn for_number(col: Column, s: &str) -> Result<Expression> {
        match s.parse::<f64>() {
            Ok(n) => Ok(Expression::Number(col, n)),
            Err(_) => Err(error!(SyntaxError, ..&col; "INVALID NUMBER")),
        }
    }
}

impl Statement {
    fn for_word(parse: &mut Parser, word: Word) -> Result<Statement> {
        let column = parse.column();
        use Word::*;
        match word {
            End => Ok(Statement::End(column)),
            For => Self::r#for(parse, column),
            Gosub => Ok(Statement::Gosub(column, parse.line_number()?)),
            Goto => Ok(Statement::Goto(column, parse.line_number()?)),
            If => Self::r#if(parse, column),
            Next => Ok(Statement::Next(column, parse.ident()?)),
            Print => Ok(Statement::Print(column, parse.printer_list()?)),
            Return => Ok(Statement::Return(column)),
            List | New | Run | Step | Then | To => Err(error!(SyntaxError; "EXPECTED STATEMENT")),
        }
    }

    fn r#let(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let expr = parse.expression()?;
        Ok(Statement::Let(column, ident, expr))
    }

    fn r#for(parse: &mut Parser, column: Column) -> Result<Statement> {
        let ident = parse.ident()?;
        parse.expect(Token::Operator(Operator::Equal))?;
        let from = parse.expression()?;
        if !parse.accept(Word::To) {
            return Err(error!(SyntaxError; "EXPECTED TO"));
        }
        let to = parse.expression()?;
        let step = if parse.accept(Word::Step) {
            Some(parse.expression()?)
        } else {
            None
        };
        Ok(Statement::For(column, ident, from, to, step))
    }

    fn r#if(parse: &mut Parser, column: Column) -> Result<Statement> {
        let condition = parse.comparison()?;
        if !parse.accept(Word::Then) {
            return Err(error!(SyntaxError; "EXPECTED THEN"));
        }
        let then = match parse.peek() {
            Some(Token::Number(s)) if s.starts_with(|c: char| c.is_ascii_digit()) => {
                let line = parse.line_number()?;
                Then::Line(parse.column(), line)
            }
            _ => Then::Statement(parse.nest(|p| p.statement())?),
        };
        Ok(Statement::If(column, condition, Box::new(then)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::lex::*;
    use super::super::ErrorCode;
    use super::*;

    fn parse_str(s: &str) -> Statement {
        match parse(&lex(s)) {
            Ok(statement) => statement,
            Err(e) => panic!("{} : {:?}", e, e),
        }
    }

    fn parse_err(s: &str) -> Error {
        match parse(&lex(s)) {
            Ok(statement) => panic!("parsed {:?}", statement),
            Err(e) => e,
        }
    }

    fn num(col: Column, n: f64) -> Box<Expression> {
        Box::new(Expression::Number(col, n))
    }

    #[test]
    fn test_let() {
        let answer = Statement::Let(0..1, Rc::from("A"), Expression::Number(2..4, 12.0));
        assert_eq!(parse_str("A=12"), answer);
    }

    #[test]
    fn test_keyword_named_variable() {
        let answer = Statement::Let(0..2, Rc::from("TO"), Expression::Number(5..6, 3.0));
        assert_eq!(parse_str("TO = 3"), answer);
    }

    #[test]
    fn test_print_list() {
        let answer = Statement::Print(
            0..5,
            vec![
                Expression::Number(6..7, 1.0),
                Expression::Var(9..10, Rc::from("x")),
            ],
        );
        assert_eq!(parse_str("PRINT 1, x"), answer);
        assert_eq!(parse_str("print"), Statement::Print(0..5, vec![]));
    }

    #[test]
    fn test_precedence() {
        let answer = Statement::Expression(
            0..1,
            Expression::Add(
                1..2,
                num(0..1, 1.0),
                Box::new(Expression::Multiply(3..4, num(2..3, 2.0), num(4..5, 3.0))),
            ),
        );
        assert_eq!(parse_str("1+2*3"), answer);
    }

    #[test]
    fn test_left_assoc() {
        let answer = Statement::Expression(
            0..1,
            Expression::Subtract(
                3..4,
                Box::new(Expression::Subtract(1..2, num(0..1, 8.0), num(2..3, 4.0))),
                num(4..5, 2.0),
            ),
        );
        assert_eq!(parse_str("8-4-2"), answer);
    }

    #[test]
    fn test_if_then_line() {
        let answer = Statement::If(
            0..2,
            Expression::Less(
                4..5,
                Box::new(Expression::Var(3..4, Rc::from("a"))),
                Box::new(Expression::Var(5..6, Rc::from("b"))),
            ),
            Box::new(Then::Line(12..14, 20)),
        );
        assert_eq!(parse_str("IF a<b THEN 20"), answer);
    }

    #[test]
    fn test_if_then_statement() {
        match parse_str("if x >= 1 then print x") {
            Statement::If(_, Expression::GreaterEqual(..), then) => {
                assert!(matches!(*then, Then::Statement(Statement::Print(..))));
            }
            s => panic!("{:?}", s),
        }
    }

    #[test]
    fn test_for_with_step() {
        match parse_str("FOR i = 10 TO 1 STEP -1") {
            Statement::For(_, var, _, _, Some(Expression::Negation(..))) => {
                assert_eq!(&*var, "i");
            }
            s => panic!("{:?}", s),
        }
        assert!(matches!(
            parse_str("for i = 1 to 3"),
            Statement::For(_, _, _, _, None)
        ));
    }

    #[test]
    fn test_words_need_whitespace() {
        assert!(matches!(
            parse_str("print(1)"),
            Statement::Expression(_, Expression::Function(..))
        ));
        assert!(matches!(
            parse_str("PRINTX"),
            Statement::Expression(_, Expression::Var(..))
        ));
        assert_eq!(parse_str("goto 10"), Statement::Goto(0..4, 10));
    }

    #[test]
    fn test_function_args() {
        match parse_str("f()") {
            Statement::Expression(_, Expression::Function(_, name, args)) => {
                assert_eq!(&*name, "f");
                assert!(args.is_empty());
            }
            s => panic!("{:?}", s),
        }
        assert!(parse(&lex("f(1,2,3,4,5,6,7,8)")).is_ok());
        let e = parse_err("f(1,2,3,4,5,6,7,8,9)");
        assert_eq!(e.code(), ErrorCode::IllegalFunctionCall);
    }

    #[test]
    fn test_syntax_errors() {
        let e = parse_err("PRINT 1 2");
        assert_eq!(e.detail(), "UNEXPECTED CHARACTERS AT END");
        assert_eq!(e.column(), 8..9);
        assert_eq!(parse_err("IF 1 < 2").detail(), "EXPECTED THEN");
        assert_eq!(parse_err("IF 1 THEN 10").detail(), "EXPECTED COMPARISON OPERATOR");
        assert_eq!(parse_err("FOR i = 1 10").detail(), "EXPECTED TO");
        assert_eq!(parse_err("x = = 1").detail(), "EXPECTED EXPRESSION");
        assert_eq!(parse_err("(1").detail(), "EXPECTED RIGHT PARENTHESIS");
        assert_eq!(parse_err("NEXT").detail(), "EXPECTED VARIABLE");
        assert_eq!(parse_err("GOSUB x").detail(), "EXPECTED LINE NUMBER");
        assert_eq!(parse_err("GOTO 70000").code(), ErrorCode::Overflow);
    }

    #[test]
    fn test_nesting_limit() {
        let deep = |open: &str, close: &str, n: usize| {
            format!("{}1{}", open.repeat(n), close.repeat(n))
        };
        assert!(parse(&lex(&deep("(", ")", MAX_NESTING))).is_ok());
        let e = parse_err(&deep("(", ")", MAX_NESTING + 1));
        assert_eq!(e.code(), ErrorCode::FormulaTooComplex);
        assert!(parse(&lex(&deep("-", "", MAX_NESTING))).is_ok());
        let e = parse_err(&deep("-", "", 100_000));
        assert_eq!(e.code(), ErrorCode::FormulaTooComplex);
        let e = parse_err(&deep("IF 1 = 1 THEN ", "", MAX_NESTING + 1));
        assert_eq!(e.code(), ErrorCode::FormulaTooComplex);
    }
}
