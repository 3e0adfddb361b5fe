//! Pattern values
//!
//! A [`Pattern`] is a compiled regular expression that remembers the text and
//! flags it was written with, so it can be rendered back as `/source/flags`.

use regex::{Regex, RegexBuilder};
use stash_core::CodecError;
use std::fmt;
use std::str::FromStr;

/// Source text used for an empty pattern, as in `/(?:)/`
const EMPTY_SOURCE: &str = "(?:)";

/// Canonical flag order
const FLAG_ORDER: &str = "dgimsuvxy";

/// Regular expression with its literal source and flags
///
/// Supported flags:
///
/// | Flag | Effect |
/// |------|--------|
/// | `i` | case-insensitive |
/// | `m` | `^`/`$` match at line boundaries |
/// | `s` | `.` matches `\n` |
/// | `u` | Unicode classes (on by default, accepted for fidelity) |
/// | `x` | ignore whitespace, allow `#` comments |
/// | `v` | Unicode sets (accepted for fidelity, exclusive with `u`) |
/// | `d`, `g`, `y` | recorded only; they affect matching APIs, not compilation |
///
/// Two patterns are equal when their source and flags are equal.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` with `flags`
    ///
    /// Flags are stored in canonical order. Unknown or repeated flags and
    /// sources the regex engine rejects are [`CodecError::Pattern`].
    pub fn new(source: impl Into<String>, flags: &str) -> Result<Self, CodecError> {
        let mut source = source.into();
        if source.is_empty() {
            source = EMPTY_SOURCE.to_string();
        }
        let flags = canonical_flags(&source, flags)?;

        let mut builder = RegexBuilder::new(&source);
        for flag in flags.chars() {
            match flag {
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'u' | 'v' => {
                    builder.unicode(true);
                }
                'x' => {
                    builder.ignore_whitespace(true);
                }
                _ => {}
            }
        }
        let regex = builder.build().map_err(|e| CodecError::Pattern {
            source_text: source.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source,
            flags,
            regex,
        })
    }

    /// Parse a `/source/flags` literal
    ///
    /// The source runs from the first `/` to the last one; whatever follows
    /// the last `/` is the flag set.
    ///
    /// ```
    /// use stash_wire::Pattern;
    ///
    /// let p = Pattern::parse_literal("/^j.*$/i").unwrap();
    /// assert_eq!(p.source(), "^j.*$");
    /// assert_eq!(p.flags(), "i");
    /// assert!(p.is_match("JOHN"));
    /// ```
    pub fn parse_literal(literal: &str) -> Result<Self, CodecError> {
        let malformed = || CodecError::Pattern {
            source_text: literal.to_string(),
            reason: "expected /source/flags".to_string(),
        };
        let start = literal.find('/').ok_or_else(malformed)?;
        let rest = &literal[start + 1..];
        let end = rest.rfind('/').ok_or_else(malformed)?;
        Self::new(&rest[..end], &rest[end + 1..])
    }

    /// Source text, without delimiters
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Flags, in canonical order
    pub fn flags(&self) -> &str {
        &self.flags
    }

    /// Check whether a flag is set
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// The compiled expression
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Check whether `haystack` contains a match
    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }
}

fn canonical_flags(source: &str, flags: &str) -> Result<String, CodecError> {
    let mut seen = String::new();
    for flag in flags.chars() {
        if !FLAG_ORDER.contains(flag) {
            return Err(CodecError::Pattern {
                source_text: source.to_string(),
                reason: format!("unknown flag '{}'", flag),
            });
        }
        if seen.contains(flag) {
            return Err(CodecError::Pattern {
                source_text: source.to_string(),
                reason: format!("repeated flag '{}'", flag),
            });
        }
        seen.push(flag);
    }
    if seen.contains('u') && seen.contains('v') {
        return Err(CodecError::Pattern {
            source_text: source.to_string(),
            reason: "flags 'u' and 'v' are mutually exclusive".to_string(),
        });
    }
    Ok(FLAG_ORDER.chars().filter(|f| seen.contains(*f)).collect())
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source, self.flags)
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

impl FromStr for Pattern {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}
