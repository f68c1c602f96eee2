/// Label shown in front of the hexadecimal view.
pub const HEX_LABEL: &str = "HEX ";
/// Label shown in front of the binary view.
pub const BIN_LABEL: &str = "BIN ";
/// Most fractional digits shown in the decimal view.
pub const MAX_FRACTION_DIGITS: usize = 9;

/// The formatted views of one result.
///
/// `hex` and `binary` are only present when the decimal view is an integer
/// that fits an `i64`; negative integers are shown in 64-bit two's
/// complement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readout {
    /// The result with at most nine fractional digits, trailing zeros removed.
    pub decimal: String,
    /// Upper-case hexadecimal view.
    pub hex:     Option<String>,
    /// Binary view.
    pub binary:  Option<String>,
}

impl Readout {
    /// Formats a result.
    ///
    /// # Example
    /// ```
    /// use reckon::readout::Readout;
    ///
    /// let readout = Readout::new(255.0);
    /// assert_eq!(readout.decimal, "255");
    /// assert_eq!(readout.hex.as_deref(), Some("FF"));
    /// assert_eq!(readout.binary.as_deref(), Some("11111111"));
    ///
    /// let readout = Readout::new(1.0 / 3.0);
    /// assert_eq!(readout.decimal, "0.333333333");
    /// assert_eq!(readout.hex, None);
    /// ```
    #[must_use]
    pub fn new(value: f64) -> Self {
        let decimal = format_decimal(value);
        let integer = decimal.parse::<i64>().ok();

        Self { decimal,
               hex: integer.map(|n| format!("{n:X}")),
               binary: integer.map(|n| format!("{n:b}")) }
    }

    /// The hexadecimal line, `-` standing in for a missing view.
    #[must_use]
    pub fn hex_line(&self) -> String {
        format!("{HEX_LABEL}{}", self.hex.as_deref().unwrap_or("-"))
    }

    /// The binary line, `-` standing in for a missing view.
    #[must_use]
    pub fn binary_line(&self) -> String {
        format!("{BIN_LABEL}{}", self.binary.as_deref().unwrap_or("-"))
    }
}

impl std::fmt::Display for Readout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.decimal)
    }
}

/// Formats a value with at most [`MAX_FRACTION_DIGITS`] fractional digits.
///
/// Non-finite values are spelled out, and a result that rounds to zero is
/// shown without a sign.
///
/// # Example
/// ```
/// use reckon::readout::format_decimal;
///
/// assert_eq!(format_decimal(2.5), "2.5");
/// assert_eq!(format_decimal(-0.0000000001), "0");
/// assert_eq!(format_decimal(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_decimal(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let fixed = format!("{value:.MAX_FRACTION_DIGITS$}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}
