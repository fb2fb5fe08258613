use thiserror::Error;

use crate::schema::{lookup, Arity, OptionSpec};

/// Malformed argument syntax.
///
/// Unlike the semantic violations in
/// [`ResolveError`](crate::resolver::ResolveError), a scan error means the
/// input could not be aligned to the option schema at all; the command line
/// surface treats it as fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// The token names no option in the schema.
    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    /// The token is not an option at all; this tool takes no positional
    /// arguments.
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),

    /// A value-requiring option reached the end of the arguments, or ran
    /// into the next option, without its value.
    #[error("option '--{0}' requires a value")]
    MissingValue(&'static str),

    /// A bare flag was given an explicit `=value`.
    #[error("option '--{0}' does not take a value")]
    UnexpectedValue(&'static str),
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct TokenMatch<'t> {
    pub(crate) spec: &'static OptionSpec,
    pub(crate) value: Option<&'t str>,
}

/// Left-to-right scanner over the raw tokens.
///
/// The scan cursor lives here, owned by the single `resolve` call that
/// created the scanner; there is no process-wide scan state, so resolution
/// is freely re-enterable within one process.
#[derive(Debug)]
pub(crate) struct TokenScanner<'t> {
    tokens: &'t [&'t str],
    cursor: usize,
}

impl<'t> TokenScanner<'t> {
    pub(crate) fn new(tokens: &'t [&'t str]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Match the next option, or `Ok(None)` once the tokens are exhausted.
    ///
    /// Repeated occurrences of the same option are matched every time they
    /// appear; ordering (and thereby last-value-wins) is the caller's
    /// contract.
    pub(crate) fn scan(&mut self) -> Result<Option<TokenMatch<'t>>, ScanError> {
        let token = match self.tokens.get(self.cursor) {
            Some(token) => *token,
            None => return Ok(None),
        };
        self.cursor += 1;

        let body = token
            .strip_prefix("--")
            .ok_or_else(|| ScanError::UnexpectedToken(token.to_string()))?;
        let (name, inline) = split_equals_delimiter(body);
        let spec = lookup(name).ok_or_else(|| ScanError::UnknownOption(token.to_string()))?;

        let value = match spec.arity {
            Arity::None => {
                if inline.is_some() {
                    return Err(ScanError::UnexpectedValue(spec.name));
                }
                None
            }
            Arity::Required => match inline {
                Some(value) => Some(value),
                None => Some(
                    self.take_value()
                        .ok_or(ScanError::MissingValue(spec.name))?,
                ),
            },
            Arity::Maybe => match inline {
                Some(value) => Some(value),
                None => self.take_value(),
            },
        };

        Ok(Some(TokenMatch { spec, value }))
    }

    // Consume the following token as a value, unless it is option-shaped.
    fn take_value(&mut self) -> Option<&'t str> {
        let next = self.tokens.get(self.cursor).copied()?;

        if next.starts_with("--") {
            return None;
        }

        self.cursor += 1;
        Some(next)
    }
}

fn split_equals_delimiter(token: &str) -> (&str, Option<&str>) {
    match token.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (token, None),
    }
}
