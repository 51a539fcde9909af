mod article;
mod pipeline;
mod proptest_total;
mod word;

use super::transliterate;
use crate::config::Config;

/// Transliterate with the built-in rules and settings.
pub(super) fn latin(text: &str) -> String {
    transliterate(text, &Config::default())
}
