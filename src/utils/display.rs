//! Human-readable rendering of counts and labels

use crate::utils::error::DisplayError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Abbreviation scales, ascending
const SCALES: [(u128, &str); 6] = [
    (1_000, "K"),
    (1_000_000, "M"),
    (1_000_000_000, "B"),
    (1_000_000_000_000, "T"),
    (1_000_000_000_000_000, "P"),
    (1_000_000_000_000_000_000, "E"),
];

static TITLE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_]\S*").expect("title word pattern should compile"));

/// Abbreviate a view/subscriber count, e.g. `1500` -> `1.5K`, `2000` -> `2K`.
///
/// The value is divided by the largest scale not exceeding it and rounded
/// half-up to one decimal; a `.0` is dropped. Counts below 1000 are printed
/// as-is.
pub fn abbreviate(n: impl Into<u128>) -> String {
    let n = n.into();

    let Some(&(scale, suffix)) = SCALES.iter().rev().find(|(scale, _)| n >= *scale) else {
        return n.to_string();
    };

    let mut whole = n / scale;
    let mut tenths = ((n % scale) * 10 + scale / 2) / scale;
    if tenths == 10 {
        whole += 1;
        tenths = 0;
    }

    if tenths == 0 {
        format!("{}{}", whole, suffix)
    } else {
        format!("{}.{}{}", whole, tenths, suffix)
    }
}

/// [`abbreviate`] for counts that arrive as floating point numbers.
///
/// The fractional part is discarded.
pub fn abbreviate_f64(n: f64) -> Result<String, DisplayError> {
    if !n.is_finite() || n < 0.0 {
        return Err(DisplayError::InvalidInput);
    }
    Ok(abbreviate(n.trunc() as u128))
}

/// Capitalize the first letter of every word and lowercase the rest
pub fn to_title_case(s: &str) -> String {
    TITLE_WORD
        .replace_all(s, |caps: &Captures| {
            let word = &caps[0];
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_counts() {
        assert_eq!(abbreviate(0u32), "0");
        assert_eq!(abbreviate(7u32), "7");
        assert_eq!(abbreviate(999u32), "999");
    }

    #[test]
    fn test_scales() {
        assert_eq!(abbreviate(1_000u32), "1K");
        assert_eq!(abbreviate(1_500u32), "1.5K");
        assert_eq!(abbreviate(2_000u32), "2K");
        assert_eq!(abbreviate(21_370u32), "21.4K");
        assert_eq!(abbreviate(1_250_000u32), "1.3M");
        assert_eq!(abbreviate(3_000_000_000u64), "3B");
        assert_eq!(abbreviate(4_200_000_000_000u64), "4.2T");
        assert_eq!(abbreviate(1_000_000_000_000_000u64), "1P");
        assert_eq!(abbreviate(1_000_000_000_000_000_000u64), "1E");
    }

    #[test]
    fn test_rounding_carries() {
        assert_eq!(abbreviate(1_049u32), "1K");
        assert_eq!(abbreviate(1_050u32), "1.1K");
        assert_eq!(abbreviate(1_999u32), "2K");
        // stays on the lower scale even when it rounds up to the next one
        assert_eq!(abbreviate(999_999u32), "1000K");
    }

    #[test]
    fn test_ties_round_half_up() {
        // exact decimal ties, no binary floating point involved
        assert_eq!(abbreviate(1_150u32), "1.2K");
        assert_eq!(abbreviate(1_450u32), "1.5K");
        assert_eq!(abbreviate(1_250_000u32), "1.3M");
        assert_eq!(abbreviate(2_350_000_000u64), "2.4B");
    }

    #[test]
    fn test_beyond_largest_scale() {
        assert_eq!(abbreviate(u64::MAX), "18.4E");
        assert_eq!(abbreviate(5_000_000_000_000_000_000_000u128), "5000E");
    }

    #[test]
    fn test_abbreviate_f64() {
        assert_eq!(abbreviate_f64(999.9), Ok("999".to_string()));
        assert_eq!(abbreviate_f64(1500.0), Ok("1.5K".to_string()));
        assert_eq!(abbreviate_f64(-1.0), Err(DisplayError::InvalidInput));
        assert_eq!(abbreviate_f64(f64::NAN), Err(DisplayError::InvalidInput));
        assert_eq!(abbreviate_f64(f64::INFINITY), Err(DisplayError::InvalidInput));
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("hello WORLD"), "Hello World");
        assert_eq!(to_title_case("1080p60 HDR"), "1080p60 Hdr");
        assert_eq!(to_title_case("(low) quality"), "(Low) Quality");
        assert_eq!(to_title_case("  spaced   out "), "  Spaced   Out ");
        assert_eq!(to_title_case(""), "");
    }
}
