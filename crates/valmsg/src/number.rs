//! Numeric rule parameters and their locale rendering.
//!
//! A rule parameter such as `"3.00"` is kept as a [`Magnitude`]: the parsed
//! value plus the number of fractional digits written in the source. The digit
//! count drives both plural selection (fractions are never singular) and
//! rendering (`"3.00"` stays `3,00` rather than collapsing to `3`).

use std::fmt;

/// Errors from parsing a rule parameter as a decimal numeral.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The parameter was an empty string.
    Empty,
    /// The parameter is not a plain decimal numeral (e.g. a field reference).
    InvalidNumeral(String),
    /// The numeral is well-formed but exceeds the `f64` range.
    OutOfRange(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty numeric parameter"),
            Self::InvalidNumeral(raw) => write!(f, "invalid numeric parameter: {raw:?}"),
            Self::OutOfRange(raw) => write!(f, "numeric parameter out of range: {raw:?}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A parsed rule bound with its written precision.
///
/// [`value`](Self::value) is an `f64` and is exact only up to 2^53;
/// [`integer_part`](Self::integer_part) saturates at `u64::MAX`. Rendering
/// through [`NumberFormat::format`] uses the written digits and is exact for
/// any length.
#[derive(Debug, Clone, PartialEq)]
pub struct Magnitude {
    value: f64,
    decimal_digits: usize,
    whole: String,
    fraction: String,
}

impl Magnitude {
    /// Parse a plain decimal numeral: optional sign, ASCII digits, optional
    /// `.` followed by ASCII digits. At least one digit must be present.
    ///
    /// The fractional digit count is taken from the text after the first `.`,
    /// so trailing zeros are preserved.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        let digit_count = whole.len() + fraction.map_or(0, str::len);

        if digit_count == 0 || !all_digits(whole) || !fraction.is_none_or(all_digits) {
            return Err(ParseError::InvalidNumeral(raw.to_owned()));
        }

        let value: f64 = raw
            .parse()
            .map_err(|_| ParseError::InvalidNumeral(raw.to_owned()))?;
        if !value.is_finite() {
            return Err(ParseError::OutOfRange(raw.to_owned()));
        }

        let whole = whole.trim_start_matches('0');
        let fraction = fraction.unwrap_or_default();
        Ok(Self {
            value,
            decimal_digits: fraction.len(),
            whole: if whole.is_empty() { "0" } else { whole }.to_owned(),
            fraction: fraction.to_owned(),
        })
    }

    /// The parsed numeric value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Number of fractional digits written in the source parameter.
    #[must_use]
    pub const fn decimal_digits(&self) -> usize {
        self.decimal_digits
    }

    /// Absolute integer part, taken from the written digits.
    ///
    /// Beyond `u64::MAX` the result saturates to a value just below it that
    /// ends in the same two digits, so mod-10 and mod-100 plural rules stay
    /// exact.
    #[must_use]
    pub fn integer_part(&self) -> u64 {
        if let Ok(n) = self.whole.parse::<u64>() {
            return n;
        }
        let tail = &self.whole[self.whole.len().saturating_sub(2)..];
        let last_two = tail.parse::<u64>().unwrap_or(0);
        (u64::MAX / 100 - 1) * 100 + last_two
    }
}

/// Locale number symbols used to render a [`Magnitude`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "catalog-config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "catalog-config", serde(default, deny_unknown_fields))]
pub struct NumberFormat {
    /// Separator between integer and fractional digits.
    pub decimal_separator: char,
    /// Separator inserted every three integer digits, if any.
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: None,
        }
    }
}

impl NumberFormat {
    /// Russian symbols: decimal comma, no-break space grouping.
    pub const RUSSIAN: Self = Self {
        decimal_separator: ',',
        group_separator: Some('\u{a0}'),
    };

    /// Render `value` with its written digits: leading integer zeros are
    /// dropped, the fractional digits are kept exactly.
    #[must_use]
    pub fn format(&self, value: &Magnitude) -> String {
        let whole = value.whole.as_str();
        let mut out = String::with_capacity(whole.len() * 2 + value.fraction.len() + 2);
        if value.value() < 0.0 {
            out.push('-');
        }
        for (i, ch) in whole.chars().enumerate() {
            if i > 0
                && (whole.len() - i) % 3 == 0
                && let Some(group) = self.group_separator
            {
                out.push(group);
            }
            out.push(ch);
        }
        if !value.fraction.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(&value.fraction);
        }
        out
    }
}
