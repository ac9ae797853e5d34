use super::token::*;

pub fn lex(s: &str) -> Vec<Token> {
    BasicLexer::lex(s)
}

pub(crate) fn is_basic_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_basic_alphanumeric(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;

    fn whitespace(&mut self) -> Option<Token> {
        let mut len = 0;
        while let Some(ch) = self.chars().peek() {
            if !is_basic_whitespace(*ch) {
                break;
            }
            self.chars().next();
            len += 1;
        }
        Some(Token::Whitespace(len))
    }

    fn number(&mut self) -> Option<Token> {
        let mut s = String::new();
        let mut decimal = false;
        while let Some(&ch) = self.chars().peek() {
            if is_basic_digit(ch) {
                s.push(ch);
            } else if ch == '.' && !decimal {
                decimal = true;
                s.push(ch);
            } else {
                break;
            }
            self.chars().next();
        }
        if let Some(&e) = self.chars().peek() {
            if e == 'e' || e == 'E' {
                // Only an exponent when digits follow, so `2e` stays `2` then `e`.
                let mut ahead = self.chars().clone();
                ahead.next();
                let mut exp = String::new();
                exp.push(e);
                if let Some(&sign) = ahead.peek() {
                    if sign == '+' || sign == '-' {
                        exp.push(sign);
                        ahead.next();
                    }
                }
                if ahead.peek().map_or(false, |c| is_basic_digit(*c)) {
                    for _ in 0..exp.len() {
                        self.chars().next();
                    }
                    s.push_str(&exp);
                    while let Some(&ch) = self.chars().peek() {
                        if !is_basic_digit(ch) {
                            break;
                        }
                        s.push(ch);
                        self.chars().next();
                    }
                }
            }
        }
        Some(Token::Number(s))
    }

    fn alphabetic(&mut self) -> Option<Token> {
        let mut s = String::new();
        while let Some(&ch) = self.chars().peek() {
            if !is_basic_alphanumeric(ch) {
                break;
            }
            s.push(ch);
            self.chars().next();
        }
        Some(Token::Ident(s))
    }

    fn minutia(&mut self) -> Option<Token> {
        let ch = self.chars().next()?;
        if ch == '<' || ch == '>' {
            if let Some(&pk) = self.chars().peek() {
                let pair: String = [ch, pk].iter().collect();
                if let Some(t) = Token::from_string(&pair) {
                    self.chars().next();
                    return Some(t);
                }
            }
        }
        if let Some(t) = Token::from_string(&ch.to_string()) {
            return Some(t);
        }
        let mut s = ch.to_string();
        while let Some(&pk) = self.chars().peek() {
            if is_basic_alphanumeric(pk)
                || is_basic_whitespace(pk)
                || pk == '.'
                || Token::from_string(&pk.to_string()).is_some()
            {
                break;
            }
            s.push(pk);
            self.chars().next();
        }
        Some(Token::Unknown(s))
    }
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> Tokenizers<'a> for BasicLexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let pk = *self.chars.peek()?;
        if is_basic_whitespace(pk) {
            return self.whitespace();
        }
        if is_basic_digit(pk) {
            return self.number();
        }
        if pk == '.' {
            let mut ahead = self.chars.clone();
            ahead.next();
            if ahead.peek().map_or(false, |c| is_basic_digit(*c)) {
                return self.number();
            }
        }
        if is_basic_alphabetic(pk) {
            return self.alphabetic();
        }
        self.minutia()
    }
}

impl<'a> BasicLexer<'a> {
    fn lex(s: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = BasicLexer {
            chars: s.chars().peekable(),
        }
        .collect();
        BasicLexer::trim_end(&mut tokens);
        tokens
    }

    fn trim_end(tokens: &mut Vec<Token>) {
        if let Some(Token::Whitespace(_)) = tokens.last() {
            tokens.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relational_pairs() {
        let v = lex("1<=2>=3<>4<5");
        let ops: Vec<&Token> = v
            .iter()
            .filter(|t| matches!(t, Token::Operator(_)))
            .collect();
        assert_eq!(
            ops,
            vec![
                &Token::Operator(Operator::LessEqual),
                &Token::Operator(Operator::GreaterEqual),
                &Token::Operator(Operator::NotEqual),
                &Token::Operator(Operator::Less),
            ]
        );
    }

    #[test]
    fn test_split_relational_is_two_tokens() {
        let v = lex("< =");
        assert_eq!(
            v,
            vec![
                Token::Operator(Operator::Less),
                Token::Whitespace(1),
                Token::Operator(Operator::Equal),
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(lex("3.25"), vec![Token::Number("3.25".to_string())]);
        assert_eq!(lex(".5"), vec![Token::Number(".5".to_string())]);
        assert_eq!(lex("1e-3"), vec![Token::Number("1e-3".to_string())]);
        assert_eq!(
            lex("2e"),
            vec![Token::Number("2".to_string()), Token::Ident("e".to_string())]
        );
        assert_eq!(
            lex("1.2.3"),
            vec![
                Token::Number("1.2".to_string()),
                Token::Number(".3".to_string())
            ]
        );
    }

    #[test]
    fn test_identifiers_keep_case() {
        assert_eq!(
            lex("Foo_1(x)"),
            vec![
                Token::Ident("Foo_1".to_string()),
                Token::LParen,
                Token::Ident("x".to_string()),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_unknown_and_trailing_whitespace() {
        assert_eq!(
            lex("a $$ \t"),
            vec![
                Token::Ident("a".to_string()),
                Token::Whitespace(1),
                Token::Unknown("$$".to_string()),
            ]
        );
    }

    #[test]
    fn test_display_round_trip() {
        let s = "PRINT sin( x ) ,  2.5e+3<>y";
        let rebuilt: String = lex(s).iter().map(|t| t.to_string()).collect();
        assert_eq!(rebuilt, s);
    }
}
