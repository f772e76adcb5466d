//! Normalisation of formatted install counts.

use crate::core::error::InstallsParseError;

/// Parse a formatted installs string such as `"10,000+"` into an integer.
///
/// Thousands separators are removed, then a single trailing `+`. What remains
/// must be a plain run of ASCII digits.
///
/// # Examples
///
/// ```
/// use app_profiles::parsing::installs::parse_installs;
///
/// assert_eq!(parse_installs("10,000+"), Ok(10_000));
/// assert_eq!(parse_installs("0"), Ok(0));
/// assert!(parse_installs("many").is_err());
/// ```
pub fn parse_installs(raw: &str) -> Result<u64, InstallsParseError> {
    let without_separators: String = raw.trim().chars().filter(|c| *c != ',').collect();
    let digits = without_separators
        .strip_suffix('+')
        .unwrap_or(&without_separators);

    if digits.is_empty() {
        return Err(InstallsParseError::Empty);
    }
    // `u64::from_str` would also accept a leading '+'
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InstallsParseError::Invalid(raw.to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| InstallsParseError::Invalid(raw.to_string()))
}
