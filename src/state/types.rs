//! Core value types used by the catalog state.

use serde::{Deserialize, Deserializer, Serialize};

use crate::sources::QueryVariables;

/// What: Deserialize a possibly-`null` JSON value into its `Default`.
///
/// Details:
/// - The catalog occasionally returns `null` for string fields; treating them as empty
///   keeps a single bad record from failing the whole page.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Origin location attached to a character.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    /// Display name of the origin location (e.g., "Earth (C-137)").
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One catalog entry as returned by the remote service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Opaque identifier, unique within the catalog.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Character name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Raw status string (usually "Alive", "Dead" or "unknown").
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Species label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub species: String,
    /// Gender label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    /// Avatar image URL.
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    /// Place of origin.
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: Origin,
}

/// Pagination metadata accompanying one page of characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Total number of pages for the current filter, when known.
    #[serde(default)]
    pub pages: Option<u32>,
    /// Number of the following page, `None` on the last page.
    #[serde(default)]
    pub next: Option<u32>,
    /// Number of the preceding page, `None` on the first page.
    #[serde(default)]
    pub prev: Option<u32>,
}

/// One page of characters plus its metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterPage {
    /// Pagination flags and counts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub info: PageInfo,
    /// Characters in server order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<Character>,
}

/// Known character status values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterStatus {
    /// Character is alive.
    Alive,
    /// Character is dead.
    Dead,
    /// Status is unknown or not one of the values above.
    Unknown,
}

impl CharacterStatus {
    /// What: Parse a raw status string from the catalog.
    ///
    /// Inputs:
    /// - `raw`: Status as returned by the server (any case)
    ///
    /// Output:
    /// - Matching variant; anything unrecognized becomes `Unknown`.
    #[must_use]
    pub fn from_api(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }

    /// Translation key for the display label of this status.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Alive => "status.alive",
            Self::Dead => "status.dead",
            Self::Unknown => "status.unknown",
        }
    }
}

/// Client-side ordering applied to a fetched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Order by character name.
    #[default]
    Name,
    /// Order by origin location name.
    Origin,
}

impl SortKey {
    /// Return the string key used in settings files for this sort key.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Origin => "origin",
        }
    }

    /// Parse a sort key from its settings value (case-insensitive).
    ///
    /// Output: `Some(SortKey)` on recognized value; `None` otherwise.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "origin" | "origin_name" => Some(Self::Origin),
            _ => None,
        }
    }

    /// The other sort key; there are only two.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Name => Self::Origin,
            Self::Origin => Self::Name,
        }
    }

    /// Translation key for the selector option label.
    #[must_use]
    pub const fn translation_key(self) -> &'static str {
        match self {
            Self::Name => "sort.name",
            Self::Origin => "sort.origin",
        }
    }
}

/// Which control of the filter bar receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Status filter input.
    #[default]
    Status,
    /// Species filter input.
    Species,
    /// Sort key selector.
    Sort,
}

impl Focus {
    /// Next control in tab order (wraps).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Status => Self::Species,
            Self::Species => Self::Sort,
            Self::Sort => Self::Status,
        }
    }

    /// Previous control in tab order (wraps).
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Status => Self::Sort,
            Self::Species => Self::Status,
            Self::Sort => Self::Species,
        }
    }
}

/// Request handed to the fetch worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Query parameters to send.
    pub vars: QueryVariables,
}

/// Outcome corresponding to a prior [`FetchRequest`].
#[derive(Clone, Debug)]
pub struct FetchResult {
    /// Echoed identifier from the originating request.
    pub id: u64,
    /// Fetched page, or a log-friendly error message.
    pub outcome: Result<CharacterPage, String>,
}

/// Lifecycle of the most recent request.
#[derive(Clone, Debug, Default)]
pub enum FetchState {
    /// Nothing has been requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending {
        /// Identifier of the in-flight request.
        id: u64,
    },
    /// The latest request completed, successfully or not.
    Settled(Result<CharacterPage, String>),
}

impl FetchState {
    /// Whether a request is currently in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    /// Whether the latest request failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Settled(Err(_)))
    }

    /// Page held by a successful settlement, if any.
    #[must_use]
    pub const fn page(&self) -> Option<&CharacterPage> {
        match self {
            Self::Settled(Ok(page)) => Some(page),
            _ => None,
        }
    }
}
