use super::{ast::Statement, lex, parse, Error, LineNumber};
use crate::error;

/// One line of input split into its optional line number and statement text.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    text: String,
}

impl Line {
    /// Leading whitespace is skipped, then leading digits become the line
    /// number. Whitespace between the number and the text is dropped.
    pub fn new(s: &str) -> Result<Line, Error> {
        let s = s.trim_start().trim_end_matches(&['\r', '\n'][..]);
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digits == 0 {
            return Ok(Line {
                number: None,
                text: s.to_string(),
            });
        }
        let number = match s[..digits].parse::<u16>() {
            Ok(n) => n,
            Err(_) => return Err(error!(Overflow; "INVALID LINE NUMBER")),
        };
        Ok(Line {
            number: Some(number),
            text: s[digits..].trim_start().to_string(),
        })
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn ast(&self) -> Result<Statement, Error> {
        parse(&lex(&self.text)).map_err(|e| e.in_line_number(self.number))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.number {
            Some(number) => write!(f, "{} {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_line() {
        let line = Line::new("  10   PRINT x ").unwrap();
        assert_eq!(line.number(), Some(10));
        assert_eq!(line.text(), "PRINT x ");
        assert_eq!(line.to_string(), "10 PRINT x ");
    }

    #[test]
    fn test_bare_number_is_empty() {
        let line = Line::new("20   \n").unwrap();
        assert_eq!(line.number(), Some(20));
        assert!(line.is_empty());
    }

    #[test]
    fn test_direct_line() {
        let line = Line::new("\tx = 1").unwrap();
        assert_eq!(line.number(), None);
        assert_eq!(line.text(), "x = 1");
    }

    #[test]
    fn test_line_number_range() {
        assert_eq!(Line::new("0 END").unwrap().number(), Some(0));
        assert_eq!(Line::new("65535 END").unwrap().number(), Some(65535));
        assert!(Line::new("65536 END").is_err());
    }

    #[test]
    fn test_ast_error_carries_line_number() {
        let e = Line::new("30 PRINT (").unwrap().ast().unwrap_err();
        assert_eq!(e.line_number(), Some(30));
    }
}
