//! Short BTC amounts for circle labels.

const SATS_PER_BTC: f64 = 100_000_000.0;

/// Render a satoshi amount as a short BTC string.
///
/// Below 1 000 BTC the full precision is kept with trailing zeros trimmed.
/// Larger amounts are shortened with a `k` or `M` suffix and at most two
/// decimals.
pub fn format_btc(sats: u64) -> String {
    let btc = sats as f64 / SATS_PER_BTC;
    if btc >= 1_000_000.0 {
        format!("{}M BTC", trim_decimals(&format!("{:.2}", btc / 1_000_000.0)))
    } else if btc >= 1_000.0 {
        format!("{}k BTC", trim_decimals(&format!("{:.2}", btc / 1_000.0)))
    } else {
        let whole = sats / 100_000_000;
        let frac = sats % 100_000_000;
        if frac == 0 {
            format!("{} BTC", whole)
        } else {
            let digits = format!("{:08}", frac);
            format!("{}.{} BTC", whole, digits.trim_end_matches('0'))
        }
    }
}

fn trim_decimals(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_and_fractional() {
        assert_eq!(format_btc(100_000_000), "1 BTC");
        assert_eq!(format_btc(150_000_000), "1.5 BTC");
        assert_eq!(format_btc(12_345), "0.00012345 BTC");
        assert_eq!(format_btc(1), "0.00000001 BTC");
        assert_eq!(format_btc(0), "0 BTC");
    }

    #[test]
    fn test_shortened() {
        assert_eq!(format_btc(250_000_000_000), "2.5k BTC");
        assert_eq!(format_btc(100_000_000_000), "1k BTC");
        assert_eq!(format_btc(123_456_000_000), "1.23k BTC");
        assert_eq!(format_btc(210_000_000_000_000), "2.1M BTC");
    }
}
