use log::warn;

/// Every telegram of the supported meters starts with this signature.
pub const START_SIGNATURE: &str = "/ISk5";
/// The footer line starts with this character (optionally followed by a CRC).
pub const FOOTER_PREFIX: char = '!';

pub const SHORT_DIALECT_MAX_LINES: usize = 13;
pub const LONG_DIALECT_MAX_LINES: usize = 19;
/// Largest known telegram has 35 lines.
pub const DEFAULT_MAX_LINES: usize = 35;

pub fn is_start_line(line: &str) -> bool {
    line.starts_with(START_SIGNATURE)
}

pub fn is_footer_line(line: &str) -> bool {
    line.starts_with(FOOTER_PREFIX)
}

/// Number of buffered lines after which framing is given up.
pub fn runaway_limit(expected_max_lines: usize) -> usize {
    expected_max_lines * 2 + 2
}

pub fn parse_int(path: &str, captured: &str) -> Option<i64> {
    match captured.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Field {} could not use '{}' as integer: {:?}", path, captured, e);
            None
        }
    }
}

pub fn parse_float(path: &str, captured: &str) -> Option<f64> {
    match captured.parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("Field {} could not use '{}' as float: {:?}", path, captured, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_and_footer_lines() {
        assert!(is_start_line("/ISk5\\2ME382-1004"));
        assert!(!is_start_line("/KFM5KAIFA-METER"));
        assert!(!is_start_line(" /ISk5\\2ME382-1004"));
        assert!(is_footer_line("!"));
        assert!(is_footer_line("!2D8E"));
        assert!(!is_footer_line("0-1:24.4.0(1)"));
    }

    #[test]
    fn test_runaway_limit() {
        assert_eq!(runaway_limit(SHORT_DIALECT_MAX_LINES), 28);
        assert_eq!(runaway_limit(LONG_DIALECT_MAX_LINES), 40);
        assert_eq!(runaway_limit(DEFAULT_MAX_LINES), 72);
    }

    #[test]
    fn test_parse_numbers_with_leading_zeros() {
        assert_eq!(parse_int("electricity.tariff", "0002"), Some(2));
        assert_eq!(parse_float("electricity.threshold_kw", "0999.00"), Some(999.0));
        assert_eq!(parse_float("gas.total_m3", "00947.680"), Some(947.68));
    }

    #[test]
    fn test_parse_overflow_degrades() {
        assert_eq!(parse_int("electricity.tariff", "99999999999999999999999"), None);
    }
}
