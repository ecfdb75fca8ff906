//! English plural selection for humanized durations.
//!
//! Uses CLDR cardinal rules, under which only exactly `1` takes the singular
//! form; `0` and every other count are plural. Rules are cached per thread
//! and built lazily on first use.

use std::cell::OnceCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    /// Per-thread English `PluralRules`.
    static ENGLISH_RULES: OnceCell<PluralRules> = const { OnceCell::new() };
}

/// Build cardinal `PluralRules` for English.
fn build_rules() -> PluralRules {
    PluralRules::try_new(locale!("en").into(), PluralRuleType::Cardinal.into())
        .expect("English plural rules are compiled in")
}

/// Whether `n` takes the singular noun form.
pub fn is_singular(n: i64) -> bool {
    ENGLISH_RULES.with(|cell| cell.get_or_init(build_rules).category_for(n) == PluralCategory::One)
}

/// Format `n` followed by the matching noun form.
///
/// ```
/// use blame_text::interpreter::plural_text;
///
/// assert_eq!(plural_text(1, "hour", "hours"), "1 hour");
/// assert_eq!(plural_text(0, "hour", "hours"), "0 hours");
/// assert_eq!(plural_text(3, "day", "days"), "3 days");
/// ```
pub fn plural_text(n: i64, singular: &str, plural: &str) -> String {
    let noun = if is_singular(n) { singular } else { plural };
    format!("{n} {noun}")
}
