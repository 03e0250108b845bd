//! Text rendering and parsing of vector components.
//!
//! Vectors are written as `(X; Y)`. The `;` separator keeps the text
//! unambiguous for formats that use `,` as the decimal separator.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Number conventions used when vectors are converted to and from text.
///
/// # Examples
/// ```
/// use mathematics::{NumberFormat, Vector2F};
///
/// let german = NumberFormat::new(',')?;
/// let v = Vector2F::new(1.5, -2.25);
/// assert_eq!(v.to_string_with(&german), "(1,5; -2,25)");
/// assert_eq!(Vector2F::parse_with("(1,5; -2,25)", &german)?, v);
/// # Ok::<(), mathematics::MathError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    decimal_separator: char,
}

impl NumberFormat {
    /// Culture-independent format: `.` as decimal separator.
    pub const INVARIANT: NumberFormat = NumberFormat {
        decimal_separator: '.',
    };

    /// Builds a format with the given decimal separator.
    ///
    /// Rejects characters that would make the `(X; Y)` shape or the number
    /// itself ambiguous: `;`, parentheses, digits, signs, whitespace and
    /// letters (which collide with exponents and the `inf`/`NaN` tokens).
    pub fn new(decimal_separator: char) -> MathResult<Self> {
        let reserved = matches!(decimal_separator, ';' | '(' | ')' | '+' | '-')
            || decimal_separator.is_ascii_digit()
            || decimal_separator.is_alphabetic()
            || decimal_separator.is_whitespace();
        if reserved {
            return Err(MathError::InvalidArgument(format!(
                "'{decimal_separator}' cannot be used as a decimal separator"
            )));
        }
        Ok(Self { decimal_separator })
    }

    /// The decimal separator.
    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// Renders one component using the shortest text that parses back to the
    /// same `f32`.
    pub fn format_component(&self, value: f32) -> String {
        let text = value.to_string();
        if self.decimal_separator == '.' {
            text
        } else {
            text.replace('.', &self.decimal_separator.to_string())
        }
    }

    /// Parses one component. Surrounding whitespace is ignored.
    pub fn parse_component(&self, text: &str) -> MathResult<f32> {
        let trimmed = text.trim();
        let normalized = if self.decimal_separator == '.' {
            trimmed.to_owned()
        } else if trimmed.contains('.') {
            return Err(MathError::Format(format!(
                "'{trimmed}' does not use '{}' as decimal separator",
                self.decimal_separator
            )));
        } else {
            trimmed.replace(self.decimal_separator, ".")
        };
        normalized
            .parse::<f32>()
            .map_err(|e| MathError::Format(format!("'{trimmed}' is not a number: {e}")))
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Locates the `(<x>;<y>)` shape in `text` and returns the raw component
/// substrings.
///
/// The shape may be surrounded by other text. The x part runs from the first
/// `(` to the last `;` that precedes the last `)`.
pub(crate) fn split_pair(text: &str) -> MathResult<(&str, &str)> {
    let pair = text.find('(').and_then(|open| {
        let rest = &text[open + 1..];
        let inner = &rest[..rest.rfind(')')?];
        let separator = inner.rfind(';')?;
        Some((&inner[..separator], &inner[separator + 1..]))
    });
    pair.ok_or_else(|| {
        debug!("rejected vector text {text:?}: expected (x; y)");
        MathError::Format(format!("'{text}' is not a valid Vector2F"))
    })
}
