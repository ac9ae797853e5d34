use super::{Error, LineNumber};
use crate::error;

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Unknown(String),
    Whitespace(usize),
    Number(String),
    Ident(String),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
}

impl Token {
    pub fn from_string(s: &str) -> Option<Token> {
        let t = match s {
            "(" => Token::LParen,
            ")" => Token::RParen,
            "," => Token::Comma,
            _ => Token::Operator(Operator::from_string(s)?),
        };
        Some(t)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// The reserved word spelled by this token, if any.
    /// Identifiers are case-sensitive but reserved words are not.
    pub fn word(&self) -> Option<Word> {
        match self {
            Token::Ident(s) => Word::from_string(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Unknown(s) => write!(f, "{}", s),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Number(s) => write!(f, "{}", s),
            Ident(s) => write!(f, "{}", s),
            Operator(s) => write!(f, "{}", s),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
        }
    }
}

impl TryFrom<&Token> for LineNumber {
    type Error = Error;
    fn try_from(token: &Token) -> Result<Self, Self::Error> {
        let msg = "INVALID LINE NUMBER";
        if let Token::Number(s) = token {
            if s.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(line) = s.parse::<u16>() {
                    return Ok(Some(line));
                }
                return Err(error!(Overflow; msg));
            }
        }
        Err(error!(SyntaxError; "EXPECTED LINE NUMBER"))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    End,
    For,
    Gosub,
    Goto,
    If,
    List,
    New,
    Next,
    Print,
    Return,
    Run,
    Step,
    Then,
    To,
}

impl Word {
    const ALL: [Word; 14] = [
        Word::End,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::List,
        Word::New,
        Word::Next,
        Word::Print,
        Word::Return,
        Word::Run,
        Word::Step,
        Word::Then,
        Word::To,
    ];

    pub fn from_string(s: &str) -> Option<Word> {
        Word::ALL
            .iter()
            .find(|w| w.to_string().eq_ignore_ascii_case(s))
            .copied()
    }

    /// Words that begin a statement.
    pub fn is_statement(&self) -> bool {
        use Word::*;
        match self {
            Print | Goto | If | For | Next | Gosub | Return | End => true,
            List | New | Run | Step | Then | To => false,
        }
    }

    /// Words handled by the command layer rather than the statement parser.
    pub fn is_command(&self) -> bool {
        matches!(self, Word::List | Word::New | Word::Run)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            End => write!(f, "END"),
            For => write!(f, "FOR"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            List => write!(f, "LIST"),
            New => write!(f, "NEW"),
            Next => write!(f, "NEXT"),
            Print => write!(f, "PRINT"),
            Return => write!(f, "RETURN"),
            Run => write!(f, "RUN"),
            Step => write!(f, "STEP"),
            Then => write!(f, "THEN"),
            To => write!(f, "TO"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Multiply,
    Divide,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl Operator {
    pub fn from_string(s: &str) -> Option<Operator> {
        use Operator::*;
        let op = match s {
            "*" => Multiply,
            "/" => Divide,
            "+" => Plus,
            "-" => Minus,
            "=" => Equal,
            "<>" => NotEqual,
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            _ => return None,
        };
        Some(op)
    }

    pub fn is_comparison(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Multiply | Divide | Plus | Minus => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}
