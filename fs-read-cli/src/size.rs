use crate::error::AppError;

const KILOBYTE: usize = 1024;
const MEGABYTE: usize = 1024 * KILOBYTE;
const GIGABYTE: usize = 1024 * MEGABYTE;

/// Parses `4096`, `64K`, `16m` or `1G` into a number of bytes. Suffixes are
/// binary multiples.
pub fn parse_size(input: &str) -> Result<usize, AppError> {
    let trimmed = input.trim();
    let (digits, multiplier) = match trimmed.chars().last() {
        Some('k' | 'K') => (&trimmed[..trimmed.len() - 1], KILOBYTE),
        Some('m' | 'M') => (&trimmed[..trimmed.len() - 1], MEGABYTE),
        Some('g' | 'G') => (&trimmed[..trimmed.len() - 1], GIGABYTE),
        _ => (trimmed, 1),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::InvalidSize(input.to_owned()));
    }

    digits
        .parse::<usize>()
        .ok()
        .and_then(|value| value.checked_mul(multiplier))
        .ok_or_else(|| AppError::SizeOverflow(input.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", 0)]
    #[case("4096", 4096)]
    #[case("64K", 64 * 1024)]
    #[case("64k", 64 * 1024)]
    #[case(" 16M ", 16 * 1024 * 1024)]
    #[case("1G", 1024 * 1024 * 1024)]
    fn parses_sizes(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(parse_size(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("K")]
    #[case("-1")]
    #[case("1.5M")]
    #[case("12T")]
    #[case("ten")]
    fn rejects_malformed_sizes(#[case] input: &str) {
        assert!(matches!(parse_size(input), Err(AppError::InvalidSize(_))));
    }

    #[test]
    fn rejects_overflowing_sizes() {
        let input = format!("{}G", usize::MAX);
        assert!(matches!(
            parse_size(&input),
            Err(AppError::SizeOverflow(_))
        ));
    }
}
