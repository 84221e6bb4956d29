//! projects::add_item
//!
//! The item-add pipeline: validate flags, resolve owner, project and
//! content, then run the mutation.
//!
//! # Ordering
//!
//! Everything checkable offline is checked in [`AddItemOptions::from_flags`],
//! before the first request. Network steps then run strictly in order
//! (owner, project, content, mutation) and the first failure ends the run,
//! so nothing is mutated unless all three lookups succeeded.

use tracing::debug;

use crate::core::errors::ItemAddError;
use crate::core::types::{ContentUrl, OutputFormat, OwnerSelector, ProjectNumber};
use crate::forge::GraphQlClient;

use super::content::resolve_content_id;
use super::item::{add_project_item, ProjectItem};
use super::owner::resolve_owner;
use super::project::resolve_project;

/// Raw flag values as the user typed them.
#[derive(Debug, Clone, Default)]
pub struct AddItemFlags<'a> {
    pub user: Option<&'a str>,
    pub org: Option<&'a str>,
    pub number: Option<&'a str>,
    pub url: Option<&'a str>,
    pub json: bool,
}

/// Validated options for one item-add run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddItemOptions {
    pub owner: OwnerSelector,
    pub number: ProjectNumber,
    pub url: ContentUrl,
    pub format: OutputFormat,
}

impl AddItemOptions {
    /// Validate raw flags. URLs must point at `host`.
    ///
    /// # Errors
    ///
    /// - `Configuration` if `--user` and `--org` are both set, or the project
    ///   number or URL is missing
    /// - `Validation` if the number or URL is malformed
    pub fn from_flags(flags: &AddItemFlags<'_>, host: &str) -> Result<Self, ItemAddError> {
        let owner = OwnerSelector::from_flags(flags.user, flags.org)?;

        let number = match flags.number {
            Some(arg) => ProjectNumber::parse(arg)?,
            None => {
                return Err(ItemAddError::Configuration(
                    "project number is required".into(),
                ))
            }
        };

        let url = match flags.url.filter(|u| !u.is_empty()) {
            Some(raw) => ContentUrl::parse(raw, host)?,
            None => {
                return Err(ItemAddError::Configuration(
                    "required flag `--url` not set".into(),
                ))
            }
        };

        let format = if flags.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            owner,
            number,
            url,
            format,
        })
    }
}

/// Run the pipeline and return the created item.
pub async fn add_item(
    client: &dyn GraphQlClient,
    options: &AddItemOptions,
) -> Result<ProjectItem, ItemAddError> {
    debug!(client = client.name(), owner = %options.owner, number = %options.number, "adding item");

    let owner = resolve_owner(client, &options.owner).await?;
    let project = resolve_project(client, &owner, options.number).await?;
    let content_id = resolve_content_id(client, &options.url).await?;

    add_project_item(client, &project.id, &content_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::ContentKind;

    fn flags<'a>() -> AddItemFlags<'a> {
        AddItemFlags {
            number: Some("1"),
            url: Some("https://github.com/monalisa/myproject/issues/23"),
            ..Default::default()
        }
    }

    #[test]
    fn valid_flags() {
        let opts = AddItemOptions::from_flags(
            &AddItemFlags {
                user: Some("monalisa"),
                json: true,
                ..flags()
            },
            "github.com",
        )
        .unwrap();

        assert_eq!(opts.owner, OwnerSelector::User("monalisa".into()));
        assert_eq!(opts.number.get(), 1);
        assert_eq!(opts.url.kind(), ContentKind::Issue);
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn default_format_is_text_and_owner_is_viewer() {
        let opts = AddItemOptions::from_flags(&flags(), "github.com").unwrap();
        assert_eq!(opts.format, OutputFormat::Text);
        assert_eq!(opts.owner, OwnerSelector::Viewer);
    }

    #[test]
    fn owner_conflict_checked_first() {
        let err = AddItemOptions::from_flags(
            &AddItemFlags {
                user: Some("a"),
                org: Some("b"),
                number: Some("nope"),
                url: Some("bad"),
                json: false,
            },
            "github.com",
        )
        .unwrap_err();
        assert!(matches!(err, ItemAddError::Configuration(_)));
    }

    #[test]
    fn missing_number_is_configuration_error() {
        let err = AddItemOptions::from_flags(
            &AddItemFlags {
                number: None,
                ..flags()
            },
            "github.com",
        )
        .unwrap_err();
        assert!(matches!(err, ItemAddError::Configuration(_)));
    }

    #[test]
    fn missing_url_is_configuration_error() {
        let err = AddItemOptions::from_flags(
            &AddItemFlags {
                url: None,
                ..flags()
            },
            "github.com",
        )
        .unwrap_err();
        assert!(matches!(err, ItemAddError::Configuration(_)));
    }

    #[test]
    fn malformed_number_is_validation_error() {
        let err = AddItemOptions::from_flags(
            &AddItemFlags {
                number: Some("x1"),
                ..flags()
            },
            "github.com",
        )
        .unwrap_err();
        assert!(matches!(err, ItemAddError::Validation(_)));
    }

    #[test]
    fn url_on_other_host_is_validation_error() {
        let err = AddItemOptions::from_flags(&flags(), "ghe.example.com").unwrap_err();
        assert!(matches!(err, ItemAddError::Validation(_)));
    }
}
