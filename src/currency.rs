//! Currency formatting for display amounts on view models.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Format an amount as a dollar string with two decimal places and
/// thousands separators, e.g. `$1,234.50`.
pub fn format_currency(amount: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted = if amount < 0.0 {
        negative_fmt.fmt_string(amount.abs())
    } else if amount > 0.0 {
        positive_fmt.fmt_string(amount)
    } else {
        // numfmt hardcodes zero as "0", so zero gets its own formatted string.
        return "$0.00".to_owned();
    };

    // numfmt omits a final trailing zero: "12.30" comes back as "12.3".
    if formatted.as_bytes()[formatted.len() - 3] != b'.' {
        formatted = format!("{formatted}0");
    }

    formatted
}
