//! Arithmetic classification and evaluation.
//!
//! Classification is a cheap character-class test; whether the text is a
//! well-formed expression is only discovered by [`evaluate`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("square root of a negative number")]
    NegativeSqrt,
    #[error("result is undefined")]
    Undefined,
    #[error("expression nests too deeply")]
    TooDeep,
}

/// Nesting allowed for parentheses, signs, `sqrt(` and exponents combined.
const MAX_DEPTH: usize = 256;

/// True when every character could belong to an arithmetic expression.
///
/// The letters of `sqrt` are accepted individually, so `"tsr"` classifies as
/// math and then fails to evaluate.
pub fn is_math_expression(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| {
            c.is_ascii_digit() || c.is_whitespace() || "+-*/().^sqrt".contains(c)
        })
}

pub fn evaluate(expression: &str) -> Result<f64, MathError> {
    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(MathError::UnexpectedToken(token.to_string()));
    }
    if value.is_nan() {
        return Err(MathError::Undefined);
    }
    Ok(value)
}

/// Formats a result the way a JavaScript number prints.
///
/// Decimal exponents of 21 and above, or -7 and below, switch to exponent
/// form with an explicit sign: `1e+21`, `1e-7`.
pub fn format_number(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{value}");
    };
    match exponent.parse::<i32>() {
        Ok(exponent) if exponent >= 21 => format!("{mantissa}e+{exponent}"),
        Ok(exponent) if exponent <= -7 => format!("{mantissa}e{exponent}"),
        _ => format!("{value}"),
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Number(f64),
    Ident(String),
    Op(char),
    LParen,
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", format_number(*n)),
            Token::Ident(name) => write!(f, "{name}"),
            Token::Op(op) => write!(f, "{op}"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, MathError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            c if c.is_whitespace() => i += 1,
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let literal: String = chars[start..i].iter().collect();
                let number = literal
                    .parse::<f64>()
                    .map_err(|_| MathError::InvalidNumber(literal.clone()))?;
                tokens.push(Token::Number(number));
            }
            c if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            '+' | '-' | '*' | '/' | '^' => {
                tokens.push(Token::Op(c));
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            other => return Err(MathError::UnexpectedChar(other)),
        }
    }

    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: Token) -> Result<(), MathError> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => Err(MathError::UnexpectedToken(token.to_string())),
            None => Err(MathError::UnexpectedEnd),
        }
    }

    // expr := term (('+' | '-') term)*
    fn expr(&mut self) -> Result<f64, MathError> {
        let mut value = self.term()?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek().cloned() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    // term := unary (('*' | '/') unary | implicit-multiplication)*
    fn term(&mut self) -> Result<f64, MathError> {
        let mut value = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Op('*')) => {
                    self.pos += 1;
                    value *= self.unary()?;
                }
                Some(Token::Op('/')) => {
                    self.pos += 1;
                    value /= self.unary()?;
                }
                // 2(3) and 2 sqrt(4)
                Some(Token::LParen) | Some(Token::Ident(_)) => {
                    value *= self.unary()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // Every recursive path passes through here, so this is where depth is
    // bounded.
    fn unary(&mut self) -> Result<f64, MathError> {
        if self.depth >= MAX_DEPTH {
            return Err(MathError::TooDeep);
        }
        self.depth += 1;
        let value = self.signed();
        self.depth -= 1;
        value
    }

    // unary := ('+' | '-') unary | power
    fn signed(&mut self) -> Result<f64, MathError> {
        match self.peek() {
            Some(Token::Op('-')) => {
                self.pos += 1;
                Ok(-self.unary()?)
            }
            Some(Token::Op('+')) => {
                self.pos += 1;
                self.unary()
            }
            _ => self.power(),
        }
    }

    // power := primary ('^' unary)?, right-associative
    fn power(&mut self) -> Result<f64, MathError> {
        let base = self.primary()?;
        if let Some(Token::Op('^')) = self.peek() {
            self.pos += 1;
            let exponent = self.unary()?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, MathError> {
        match self.next() {
            Some(Token::Number(n)) => Ok(n),
            Some(Token::LParen) => {
                let value = self.expr()?;
                self.expect(Token::RParen)?;
                Ok(value)
            }
            Some(Token::Ident(name)) if name == "sqrt" => {
                self.expect(Token::LParen)?;
                let arg = self.expr()?;
                self.expect(Token::RParen)?;
                if arg < 0.0 {
                    return Err(MathError::NegativeSqrt);
                }
                Ok(arg.sqrt())
            }
            Some(Token::Ident(name)) => Err(MathError::UnknownFunction(name)),
            Some(token) => Err(MathError::UnexpectedToken(token.to_string())),
            None => Err(MathError::UnexpectedEnd),
        }
    }
}
