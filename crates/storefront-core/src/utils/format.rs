/// Currency formatting for prices stored as integer cents.
///
/// Fixed to en-US conventions: `$` prefix, `,` every three digits, `.` before
/// exactly two fraction digits, and a leading `-` for negative amounts.
/// The formatter holds only immutable settings, so build it once and share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceFormatter {
    currency_code: &'static str,
    symbol: &'static str,
    group_separator: char,
    decimal_separator: char,
}

impl PriceFormatter {
    pub const fn en_us() -> Self {
        Self {
            currency_code: "USD",
            symbol: "$",
            group_separator: ',',
            decimal_separator: '.',
        }
    }

    pub fn currency_code(&self) -> &'static str {
        self.currency_code
    }

    /// Format an amount in cents, e.g. `150000` -> `"$1,500.00"`
    pub fn format(&self, cents: i64) -> String {
        // unsigned_abs keeps i64::MIN in range
        self.render(cents < 0, &cents.unsigned_abs().to_string())
    }

    /// Format a cent amount that arrived as a JSON number.
    ///
    /// Finite values are rounded to the nearest cent (halves away from zero)
    /// and printed exactly, however large. The sign follows the input, so
    /// `-0.0` and `-0.4` render as `"-$0.00"` like en-US number formatting.
    /// Non-finite values render the way en-US number formatting does.
    pub fn format_f64(&self, cents: f64) -> String {
        if cents.is_nan() {
            format!("{}NaN", self.symbol)
        } else if cents.is_infinite() {
            let sign = if cents < 0.0 { "-" } else { "" };
            format!("{}{}\u{221e}", sign, self.symbol)
        } else {
            // `{:.0}` prints the exact integral value, no i64 range limit
            let digits = format!("{:.0}", cents.round().abs());
            self.render(cents.is_sign_negative(), &digits)
        }
    }

    /// Lay out a non-negative cent count given as decimal digits
    fn render(&self, negative: bool, cent_digits: &str) -> String {
        // At least "0.00": one unit digit plus two fraction digits
        let padded = format!("{:0>3}", cent_digits);
        let (units, fraction) = padded.split_at(padded.len() - 2);

        let sign = if negative { "-" } else { "" };
        format!(
            "{}{}{}{}{}",
            sign,
            self.symbol,
            self.group_digits(units),
            self.decimal_separator,
            fraction
        )
    }

    fn group_digits(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Shared en-US formatter
const PRICE_FORMATTER: PriceFormatter = PriceFormatter::en_us();

/// Format a cent amount as US dollars and cents
pub fn as_dollars_and_cents(cents: i64) -> String {
    PRICE_FORMATTER.format(cents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amounts() {
        assert_eq!(as_dollars_and_cents(0), "$0.00");
        assert_eq!(as_dollars_and_cents(5), "$0.05");
        assert_eq!(as_dollars_and_cents(99), "$0.99");
        assert_eq!(as_dollars_and_cents(100), "$1.00");
        assert_eq!(as_dollars_and_cents(1999), "$19.99");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(as_dollars_and_cents(99_999), "$999.99");
        assert_eq!(as_dollars_and_cents(100_000), "$1,000.00");
        assert_eq!(as_dollars_and_cents(150_000), "$1,500.00");
        assert_eq!(as_dollars_and_cents(123_456_789), "$1,234,567.89");
        assert_eq!(as_dollars_and_cents(100_000_000_000), "$1,000,000,000.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(as_dollars_and_cents(-100), "-$1.00");
        assert_eq!(as_dollars_and_cents(-5), "-$0.05");
        assert_eq!(as_dollars_and_cents(-150_000), "-$1,500.00");
    }

    #[test]
    fn test_format_extremes() {
        assert_eq!(
            as_dollars_and_cents(i64::MAX),
            "$92,233,720,368,547,758.07"
        );
        assert_eq!(
            as_dollars_and_cents(i64::MIN),
            "-$92,233,720,368,547,758.08"
        );
    }

    #[test]
    fn test_format_f64() {
        let formatter = PriceFormatter::default();
        assert_eq!(formatter.format_f64(2599.0), "$25.99");
        assert_eq!(formatter.format_f64(-100.0), "-$1.00");
        assert_eq!(formatter.format_f64(0.5), "$0.01");
        assert_eq!(formatter.format_f64(-0.5), "-$0.01");
        assert_eq!(formatter.format_f64(f64::NAN), "$NaN");
        assert_eq!(formatter.format_f64(f64::INFINITY), "$\u{221e}");
        assert_eq!(formatter.format_f64(f64::NEG_INFINITY), "-$\u{221e}");
    }

    #[test]
    fn test_format_f64_beyond_i64_range() {
        let formatter = PriceFormatter::en_us();
        assert_eq!(formatter.format_f64(1e20), "$1,000,000,000,000,000,000.00");
        assert_eq!(formatter.format_f64(-1e20), "-$1,000,000,000,000,000,000.00");
        // 2^64 cents is exactly representable and above u64::MAX
        assert_eq!(
            formatter.format_f64(18_446_744_073_709_551_616.0),
            "$184,467,440,737,095,516.16"
        );
        // 2^100 cents, far past u64
        assert_eq!(
            formatter.format_f64(2f64.powi(100)),
            "$12,676,506,002,282,294,014,967,032,053.76"
        );
    }

    #[test]
    fn test_format_f64_negative_zero() {
        let formatter = PriceFormatter::en_us();
        assert_eq!(formatter.format_f64(-0.0), "-$0.00");
        assert_eq!(formatter.format_f64(-0.4), "-$0.00");
        assert_eq!(formatter.format_f64(0.0), "$0.00");
        assert_eq!(formatter.format_f64(0.4), "$0.00");
    }

    #[test]
    fn test_two_fraction_digits() {
        let formatter = PriceFormatter::en_us();
        for cents in [0, 1, 10, 101, 1_000_001] {
            let formatted = formatter.format(cents);
            assert!(formatted.starts_with('$'));
            let (_, fraction) = formatted.rsplit_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{}", formatted);
        }
        assert_eq!(formatter.currency_code(), "USD");
    }
}
