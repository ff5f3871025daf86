//! Locale handling for the routed site: the closed locale set and the
//! path rewriting used by the language switcher.

pub mod messages;

use std::fmt;

/// A locale the site serves. The set is closed: routing, the message
/// catalogs, and the switcher all enumerate exactly these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    EnGb,
    DeDe,
}

impl Locale {
    /// Every supported locale, in switcher display order.
    pub const ALL: [Locale; 2] = [Locale::EnGb, Locale::DeDe];

    /// Locale used when no explicit choice has been made.
    pub const DEFAULT: Locale = Locale::EnGb;

    /// Parse a route segment. Matching is exact; URL segments are
    /// case-sensitive and anything outside the closed set is rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en-GB" => Some(Locale::EnGb),
            "de-DE" => Some(Locale::DeDe),
            _ => None,
        }
    }

    /// The BCP 47 tag used as route segment and `lang` attribute.
    pub const fn code(self) -> &'static str {
        match self {
            Locale::EnGb => "en-GB",
            Locale::DeDe => "de-DE",
        }
    }

    /// Name of the language in that language, for the switcher control.
    pub const fn native_name(self) -> &'static str {
        match self {
            Locale::EnGb => "English",
            Locale::DeDe => "Deutsch",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rewrite `path` so it points at the same page under `target`.
///
/// A leading segment that parses as a supported locale is replaced;
/// otherwise the target locale is prefixed.
pub fn switch_locale_path(path: &str, target: Locale) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return format!("/{}", target.code());
    }

    let (head, rest) = match trimmed.split_once('/') {
        Some((head, rest)) => (head, rest),
        None => (trimmed, ""),
    };

    if Locale::from_code(head).is_some() {
        if rest.is_empty() {
            format!("/{}", target.code())
        } else {
            format!("/{}/{}", target.code(), rest)
        }
    } else {
        format!("/{}/{}", target.code(), trimmed)
    }
}
