//! Domain Value Objects

use std::fmt;
use std::str::FromStr;

use crate::error::AccommodationError;

/// Upstream city key, e.g. "Bandar Anzali" -> `bandar_anzali`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitySlug(String);

impl CitySlug {
    /// Lowercase, trim, collapse whitespace runs to `_`, drop anything
    /// outside `[a-z0-9_]`.
    pub fn from_name(name: &str) -> Result<Self, AccommodationError> {
        let lowered = name.to_lowercase();
        let slug: String = lowered
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
            .collect();

        if slug.is_empty() {
            return Err(AccommodationError::InvalidCity(name.to_string()));
        }

        Ok(Self(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Title-cased fallback label: `bandar_anzali` -> "Bandar Anzali"
    pub fn display_name(&self) -> String {
        self.0
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for CitySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Numeric listing code taken from the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccommodationCode(u64);

impl AccommodationCode {
    pub fn new(code: u64) -> Option<Self> {
        (code > 0).then_some(Self(code))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl FromStr for AccommodationCode {
    type Err = AccommodationError;

    /// Anything but a positive integer is "not found"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or(AccommodationError::NotFound)
    }
}

impl fmt::Display for AccommodationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_slug_from_name() {
        assert_eq!(
            CitySlug::from_name("Bandar Anzali").unwrap().as_str(),
            "bandar_anzali"
        );
        assert_eq!(
            CitySlug::from_name("  Kish   Island ").unwrap().as_str(),
            "kish_island"
        );
        assert_eq!(CitySlug::from_name("Rasht!").unwrap().as_str(), "rasht");
    }

    #[test]
    fn test_city_slug_rejects_non_latin_only() {
        assert!(matches!(
            CitySlug::from_name("رشت"),
            Err(AccommodationError::InvalidCity(_))
        ));
        assert!(CitySlug::from_name("   ").is_err());
    }

    #[test]
    fn test_city_display_name() {
        let slug = CitySlug::from_name("bandar_anzali").unwrap();
        assert_eq!(slug.display_name(), "Bandar Anzali");
    }

    #[test]
    fn test_code_parsing() {
        assert_eq!("12345".parse::<AccommodationCode>().unwrap().get(), 12345);
        assert!("0".parse::<AccommodationCode>().is_err());
        assert!("abc".parse::<AccommodationCode>().is_err());
        assert!("-4".parse::<AccommodationCode>().is_err());
    }
}
