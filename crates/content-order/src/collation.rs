//! Locale-aware string comparison backed by ICU4X.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;

use crate::error::{OrderError, Result};

/// Locale the site's content is written in.
pub const DEFAULT_LOCALE: &str = "ko";

/// A collator bound to one locale.
///
/// Built once and passed explicitly to every ordering call; nothing reads the
/// process locale.
pub struct Collation {
    locale: Locale,
    collator: Collator,
}

impl Collation {
    /// Build a collator for a BCP-47 locale such as `"ko"` or `"en-US"`.
    ///
    /// # Errors
    /// Returns `OrderError::InvalidLocale` if the string does not parse as a
    /// locale or ICU cannot construct a collator for it.
    pub fn new(locale: &str) -> Result<Self> {
        let parsed: Locale = locale
            .parse()
            .map_err(|e| OrderError::InvalidLocale(format!("{}: {}", locale, e)))?;
        let collator = Collator::try_new(&(&parsed).into(), CollatorOptions::new())
            .map_err(|e| OrderError::InvalidLocale(format!("{}: {}", locale, e)))?;
        Ok(Collation {
            locale: parsed,
            collator,
        })
    }

    /// Collator for [`DEFAULT_LOCALE`].
    pub fn korean() -> Result<Self> {
        Self::new(DEFAULT_LOCALE)
    }

    pub fn locale(&self) -> String {
        self.locale.to_string()
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale.to_string())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangul_syllables_follow_jamo_order() {
        let c = Collation::korean().unwrap();
        assert_eq!(c.compare("가", "나"), Ordering::Less);
        assert_eq!(c.compare("나", "다"), Ordering::Less);
        assert_eq!(c.compare("다", "가"), Ordering::Greater);
    }

    #[test]
    fn digits_sort_before_letters() {
        let c = Collation::korean().unwrap();
        assert_eq!(c.compare("1번 질문", "A 질문"), Ordering::Less);
    }

    #[test]
    fn equal_strings_compare_equal() {
        let c = Collation::korean().unwrap();
        assert_eq!(c.compare("참가 방법", "참가 방법"), Ordering::Equal);
    }

    #[test]
    fn malformed_locale_is_rejected() {
        let err = Collation::new("not a locale!!").unwrap_err();
        assert!(matches!(err, OrderError::InvalidLocale(_)));
    }
}
