//! Arabic ⇄ Latin transliteration.
//!
//! [`transliterate`] renders vocalized Arabic as Latin text following the
//! Indonesian/Malay convention (sun-letter assimilation, nun rules, long
//! vowels as â î û). [`reverse_transliterate`] maps Latin back to a best-effort
//! vocalized Arabic. Both are pure functions of their input and a [`Config`].

pub mod config;
pub mod forward;
pub mod reverse;
pub mod rules;
pub mod script;
pub mod settings;

pub use config::Config;
pub use forward::{analyze, transliterate, Article, Word};
pub use reverse::reverse_transliterate;
pub use rules::{Rule, RuleCategory, RuleSet};
