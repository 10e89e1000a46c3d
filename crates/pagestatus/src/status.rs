//! The page-status catalog.
//!
//! A closed set of four status keywords, each mapped to a short display
//! title and a longer explanatory sentence. The catalog is fixed at compile
//! time; `kind` validation is total over this enum.

use std::fmt;
use std::str::FromStr;

/// Editorial status of a documentation page.
///
/// Parsed from the `kind` option of the `::page_status` directive. The
/// string keywords are `outline`, `in-progress`, `draft` and `finished`.
///
/// # Example
///
/// ```
/// use pagestatus::StatusKind;
///
/// let kind: StatusKind = "in-progress".parse().unwrap();
/// assert_eq!(kind, StatusKind::InProgress);
/// assert_eq!(kind.title(), "In progress");
/// assert!("bogus".parse::<StatusKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum StatusKind {
    /// A rough outline, not yet prose.
    Outline,
    /// Actively being written.
    InProgress,
    /// Complete but unproofread.
    Draft,
    /// Finished and proofread.
    Finished,
}

impl StatusKind {
    /// All valid kinds, in catalog order.
    pub const ALL: [Self; 4] = [Self::Outline, Self::InProgress, Self::Draft, Self::Finished];

    /// The directive-facing keyword for this kind.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::InProgress => "in-progress",
            Self::Draft => "draft",
            Self::Finished => "finished",
        }
    }

    /// Short display title, rendered as "Page status: {title}".
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Outline => "Outline",
            Self::InProgress => "In progress",
            Self::Draft => "Draft",
            Self::Finished => "Finished",
        }
    }

    /// Explanatory sentence rendered as the admonition body.
    #[must_use]
    pub fn explanation(self) -> &'static str {
        match self {
            Self::Outline => {
                "This is a rough outline of an article. It might not use full \
                 sentences everywhere and probably won't make much sense at the moment."
            }
            Self::InProgress => {
                "This article is still being written. Some sections are incomplete, \
                 and it hasn't been proofread."
            }
            Self::Draft => {
                "This article is pretty much complete, but needs to be proofread \
                 and might change."
            }
            Self::Finished => {
                "This article is finished. If you spot a mistake or have a \
                 question, please let us know."
            }
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Error for a `kind` value outside the catalog.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid page status kind (one of: outline, in-progress, draft, finished)")]
pub struct UnknownStatusKind(pub String);

impl FromStr for StatusKind {
    type Err = UnknownStatusKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword() == s)
            .ok_or_else(|| UnknownStatusKind(s.to_owned()))
    }
}
