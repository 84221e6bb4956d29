//! core::types
//!
//! Strong types for the item-add domain.
//!
//! # Types
//!
//! - [`OwnerSelector`] - Which owner the user asked for (viewer, user, org)
//! - [`Owner`] - A resolved user or organization
//! - [`ProjectNumber`] - Validated project number
//! - [`Project`] - A resolved project board
//! - [`ContentUrl`] - Validated issue or pull request URL
//! - [`ContentId`] - Opaque server id of an issue or pull request
//! - [`OutputFormat`] - Plain text or JSON output
//!
//! # Validation
//!
//! Everything that can be checked without a network round trip is checked at
//! construction time, so a resolver never receives a value it would have to
//! reject.
//!
//! # Examples
//!
//! ```
//! use itemlink::core::types::{ContentUrl, OwnerSelector, ProjectNumber};
//!
//! let owner = OwnerSelector::from_flags(Some("monalisa"), None).unwrap();
//! assert_eq!(owner, OwnerSelector::User("monalisa".into()));
//!
//! let number = ProjectNumber::parse("1").unwrap();
//! assert_eq!(number.get(), 1);
//!
//! let url = ContentUrl::parse("https://github.com/monalisa/myproject/issues/23", "github.com").unwrap();
//! assert_eq!(url.number(), 23);
//!
//! assert!(OwnerSelector::from_flags(Some("a"), Some("b")).is_err());
//! assert!(ProjectNumber::parse("one").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::ItemAddError;

/// Login that selects the authenticated user via `--user`.
pub const VIEWER_LOGIN: &str = "@me";

/// The owner the user asked for.
///
/// Built once from the mutually exclusive `--user` / `--org` flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerSelector {
    /// The authenticated user (no flag, or `--user @me`).
    Viewer,
    /// A user by login.
    User(String),
    /// An organization by login.
    Organization(String),
}

impl OwnerSelector {
    /// Build a selector from the raw flag values.
    ///
    /// Empty strings count as unset.
    ///
    /// # Errors
    ///
    /// Returns `ItemAddError::Configuration` if both flags are set.
    pub fn from_flags(user: Option<&str>, org: Option<&str>) -> Result<Self, ItemAddError> {
        let user = user.filter(|s| !s.is_empty());
        let org = org.filter(|s| !s.is_empty());

        match (user, org) {
            (Some(_), Some(_)) => Err(ItemAddError::Configuration(
                "only one of `--user` or `--org` may be used".into(),
            )),
            (Some(VIEWER_LOGIN), None) | (None, None) => Ok(OwnerSelector::Viewer),
            (Some(login), None) => Ok(OwnerSelector::User(login.to_string())),
            (None, Some(login)) => Ok(OwnerSelector::Organization(login.to_string())),
        }
    }
}

impl fmt::Display for OwnerSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerSelector::Viewer => write!(f, "the current user"),
            OwnerSelector::User(login) => write!(f, "user '{}'", login),
            OwnerSelector::Organization(login) => write!(f, "organization '{}'", login),
        }
    }
}

/// Kind of account that owns projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerKind {
    User,
    Organization,
}

impl fmt::Display for OwnerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OwnerKind::User => write!(f, "user"),
            OwnerKind::Organization => write!(f, "organization"),
        }
    }
}

/// A resolved user or organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// Opaque server id
    pub id: String,
    /// Login as reported by the server
    pub login: String,
    pub kind: OwnerKind,
}

/// A project number, positive and within GraphQL `Int` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ProjectNumber(i32);

impl ProjectNumber {
    /// Create from an already-numeric value.
    ///
    /// # Errors
    ///
    /// Returns `ItemAddError::Validation` if `n` is not positive.
    pub fn new(n: i32) -> Result<Self, ItemAddError> {
        if n <= 0 {
            return Err(ItemAddError::Validation(format!("invalid number: {}", n)));
        }
        Ok(Self(n))
    }

    /// Parse the positional argument.
    ///
    /// # Errors
    ///
    /// Returns `ItemAddError::Validation` for non-numeric, non-positive or
    /// out-of-range input.
    pub fn parse(arg: &str) -> Result<Self, ItemAddError> {
        arg.parse::<i32>()
            .ok()
            .filter(|n| *n > 0)
            .map(Self)
            .ok_or_else(|| ItemAddError::Validation(format!("invalid number: {}", arg)))
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProjectNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved project board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Opaque server id
    pub id: String,
    pub number: ProjectNumber,
    pub title: String,
    pub url: String,
    pub closed: bool,
    /// Login of the owner it was looked up under
    pub owner_login: String,
}

/// Whether a URL addresses an issue or a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Issue,
    PullRequest,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Issue => write!(f, "issue"),
            ContentKind::PullRequest => write!(f, "pull request"),
        }
    }
}

/// A validated issue or pull request URL.
///
/// Accepted shape:
/// `http(s)://<host>/<owner>/<repo>/(issues|pull)/<number>[/...][?...][#...]`
///
/// The original string is kept and sent to the server unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentUrl {
    raw: String,
    owner: String,
    repo: String,
    kind: ContentKind,
    number: u64,
}

/// `www.github.com` serves the same content as `github.com`; enterprise
/// hosts must match exactly.
fn same_host(url_host: &str, host: &str) -> bool {
    if url_host.eq_ignore_ascii_case(host) {
        return true;
    }
    host.eq_ignore_ascii_case("github.com")
        && url_host
            .get(..4)
            .is_some_and(|p| p.eq_ignore_ascii_case("www."))
        && url_host[4..].eq_ignore_ascii_case(host)
}

impl ContentUrl {
    /// Parse `raw`, requiring it to point at `host`.
    ///
    /// # Errors
    ///
    /// Returns `ItemAddError::Validation` if the URL does not have the shape
    /// of an issue or pull request on `host`.
    pub fn parse(raw: &str, host: &str) -> Result<Self, ItemAddError> {
        let invalid = || {
            ItemAddError::Validation(format!(
                "invalid issue or pull request URL: '{}'",
                raw
            ))
        };

        let trimmed = raw.trim();
        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"))
            .ok_or_else(invalid)?;

        // Drop query string and fragment
        let rest = rest
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or(rest);

        let (url_host, path) = rest.split_once('/').ok_or_else(invalid)?;
        if !same_host(url_host, host) {
            return Err(ItemAddError::Validation(format!(
                "URL '{}' is not on host '{}'",
                raw, host
            )));
        }

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.len() < 4 {
            return Err(invalid());
        }

        let kind = match segments[2] {
            "issues" => ContentKind::Issue,
            "pull" => ContentKind::PullRequest,
            _ => return Err(invalid()),
        };

        let number = segments[3]
            .parse::<u64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(invalid)?;

        Ok(Self {
            raw: trimmed.to_string(),
            owner: segments[0].to_string(),
            repo: segments[1].to_string(),
            kind,
            number,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    pub fn number(&self) -> u64 {
        self.number
    }
}

impl fmt::Display for ContentUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Opaque server id of an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentId(String);

impl ContentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How the created item is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Single confirmation row
    #[default]
    Text,
    /// The full item as a JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
