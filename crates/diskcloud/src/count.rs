//! Point counts and the restricted count-expression language.
//!
//! Counts are usually written as short arithmetic expressions such as `10**6`
//! or `2*10**5`. Only unsigned integer literals, `*`, and `**` are accepted;
//! nothing is ever evaluated as general code.
//!
//! Grammar (whitespace allowed between tokens):
//! ```text
//! expr    := power ('*' power)*
//! power   := literal ('**' power)?      // right-associative, binds tighter than '*'
//! literal := [0-9]+
//! ```

use crate::codec::BYTES_PER_POINT;
use crate::error::{GenError, Result};
use std::fmt;
use std::num::NonZeroUsize;

const MAX_COUNT_U64: u64 = 1 << 32;

/// Largest accepted point count: 2^32 points (a 32 GiB file), lowered on
/// targets where the encoded buffer would not fit in `isize::MAX` bytes.
pub const MAX_COUNT: usize = {
    let addressable = (isize::MAX as u64) / (BYTES_PER_POINT as u64);
    if MAX_COUNT_U64 < addressable {
        MAX_COUNT_U64 as usize
    } else {
        addressable as usize
    }
};

/// Number of points to generate. Never zero, never above [`MAX_COUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointCount(NonZeroUsize);

impl PointCount {
    pub fn new(n: usize) -> Result<Self> {
        if n > MAX_COUNT {
            return Err(GenError::parameter(format!(
                "point count {n} exceeds the maximum of {MAX_COUNT}"
            )));
        }
        NonZeroUsize::new(n)
            .map(Self)
            .ok_or_else(|| GenError::parameter("point count must be positive"))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Count used when no expression is given on the command line.
pub const DEFAULT_COUNT: usize = 1_000;

const DEFAULT_NONZERO: NonZeroUsize = match NonZeroUsize::new(DEFAULT_COUNT) {
    Some(n) => n,
    None => panic!("DEFAULT_COUNT must be positive"),
};

/// An evaluated count plus the label that names its output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountSpec {
    pub count: PointCount,
    pub label: String,
}

impl CountSpec {
    /// Spec for a hardcoded count; the label is the decimal count.
    pub fn fixed(n: usize) -> Result<Self> {
        let count = PointCount::new(n)?;
        Ok(Self {
            count,
            label: count.to_string(),
        })
    }

    /// `round_<label>`, e.g. `round_10e6` for `10**6`.
    pub fn file_name(&self) -> String {
        format!("round_{}", self.label)
    }
}

impl Default for CountSpec {
    fn default() -> Self {
        let count = PointCount(DEFAULT_NONZERO);
        Self {
            count,
            label: count.to_string(),
        }
    }
}

/// Parse and evaluate a count expression.
pub fn parse_count_expr(text: &str) -> Result<CountSpec> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(GenError::parameter("count expression is empty"));
    }
    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(GenError::parameter(format!(
            "unexpected {tok} after end of count expression"
        )));
    }
    let n = usize::try_from(value).map_err(|_| {
        GenError::parameter(format!(
            "point count {value} exceeds the maximum of {MAX_COUNT}"
        ))
    })?;
    let count = PointCount::new(n)?;
    Ok(CountSpec {
        count,
        label: label_for(text),
    })
}

fn label_for(text: &str) -> String {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replace("**", "e").replace('*', "x")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Token {
    Literal(u64),
    Star,
    Pow,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(v) => write!(f, "literal {v}"),
            Token::Star => f.write_str("'*'"),
            Token::Pow => f.write_str("'**'"),
        }
    }
}

fn tokenize(text: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some(&(i, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '*' => {
                chars.next();
                if matches!(chars.peek(), Some(&(_, '*'))) {
                    chars.next();
                    tokens.push(Token::Pow);
                } else {
                    tokens.push(Token::Star);
                }
            }
            '0'..='9' => {
                let mut value: u64 = 0;
                while let Some(&(_, d)) = chars.peek() {
                    let Some(digit) = d.to_digit(10) else { break };
                    value = value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(u64::from(digit)))
                        .ok_or_else(|| GenError::parameter("numeric literal overflows"))?;
                    chars.next();
                }
                tokens.push(Token::Literal(value));
            }
            other => {
                return Err(GenError::parameter(format!(
                    "unsupported character {other:?} at offset {i} in count expression"
                )))
            }
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expr(&mut self) -> Result<u64> {
        let mut acc = self.power()?;
        while self.peek() == Some(Token::Star) {
            self.bump();
            let rhs = self.power()?;
            acc = acc
                .checked_mul(rhs)
                .ok_or_else(|| GenError::parameter("count expression overflows"))?;
        }
        Ok(acc)
    }

    fn power(&mut self) -> Result<u64> {
        let base = self.literal()?;
        if self.peek() != Some(Token::Pow) {
            return Ok(base);
        }
        self.bump();
        let exp = self.power()?;
        let exp = u32::try_from(exp)
            .map_err(|_| GenError::parameter(format!("exponent {exp} is too large")))?;
        base.checked_pow(exp)
            .ok_or_else(|| GenError::parameter("count expression overflows"))
    }

    fn literal(&mut self) -> Result<u64> {
        match self.bump() {
            Some(Token::Literal(v)) => Ok(v),
            Some(tok) => Err(GenError::parameter(format!(
                "expected a number, found {tok}"
            ))),
            None => Err(GenError::parameter(
                "count expression ends with a dangling operator",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str) -> usize {
        parse_count_expr(text).expect(text).count.get()
    }

    #[test]
    fn literals_products_and_powers() {
        assert_eq!(eval("4"), 4);
        assert_eq!(eval("10**6"), 1_000_000);
        assert_eq!(eval("2*10**3"), 2_000);
        assert_eq!(eval(" 3 * 5 "), 15);
        // right-associative like the usual `**`
        assert_eq!(eval("2**3**2"), 512);
    }

    #[test]
    fn label_rewrites_operators() {
        assert_eq!(parse_count_expr("10**6").unwrap().file_name(), "round_10e6");
        assert_eq!(
            parse_count_expr("2 * 10 ** 3").unwrap().file_name(),
            "round_2x10e3"
        );
        assert_eq!(parse_count_expr("1000").unwrap().file_name(), "round_1000");
    }

    #[test]
    fn fixed_and_default_specs() {
        assert_eq!(CountSpec::fixed(4).unwrap().file_name(), "round_4");
        let d = CountSpec::default();
        assert_eq!(d.count.get(), DEFAULT_COUNT);
        assert_eq!(d.file_name(), "round_1000");
        assert!(CountSpec::fixed(0).is_err());
    }

    #[test]
    fn rejects_zero_and_garbage() {
        for bad in [
            "", "   ", "0", "0*5", "10**", "*3", "3**-1", "-4", "1e6", "2+2", "__import__('os')",
            "(10)", "3 4",
        ] {
            let err = parse_count_expr(bad).unwrap_err();
            assert!(
                matches!(err, GenError::Parameter { .. }),
                "{bad:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!(parse_count_expr("10**30").is_err());
        assert!(parse_count_expr("99999999999999999999999").is_err());
        assert!(parse_count_expr("2**99999999999").is_err());
        for big in ["10**19", "10**18", "2**32*2", "2**33", "5*10**9"] {
            assert!(
                matches!(parse_count_expr(big), Err(GenError::Parameter { .. })),
                "{big}"
            );
        }
    }

    #[test]
    fn count_ceiling_is_inclusive() {
        assert_eq!(PointCount::new(MAX_COUNT).unwrap().get(), MAX_COUNT);
        assert!(matches!(
            PointCount::new(MAX_COUNT + 1),
            Err(GenError::Parameter { .. })
        ));
        assert!(MAX_COUNT.checked_mul(BYTES_PER_POINT).is_some());
        if usize::BITS == 64 {
            assert_eq!(eval("2**32") as u64, 1u64 << 32);
        }
    }
}
