//! Remote repository creation on GitHub.
//!
//! [`RepositoryHost`] is the seam the menu controller talks to;
//! [`GitHubHost`] implements it with an authenticated `octocrab` client.

mod error;

pub use error::HostingError;

use octocrab::models::Repository;
use octocrab::Octocrab;
use serde::Serialize;
use std::future::Future;
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// A service that can create repositories for the authenticated user.
pub trait RepositoryHost {
    /// Creates a repository and returns its clone URL.
    fn create_repository(
        &self,
        name: &str,
        description: &str,
    ) -> impl Future<Output = Result<String, HostingError>>;
}

/// Request body for `POST /user/repos`.
#[derive(Debug, Serialize)]
struct CreateRepositoryRequest<'a> {
    name: &'a str,
    description: &'a str,
}

/// GitHub-backed [`RepositoryHost`].
#[derive(Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Builds a client authenticated with a personal access token.
    ///
    /// Construction does not contact GitHub; an invalid token is only
    /// detected by the first API call.
    ///
    /// # Errors
    ///
    /// Returns [`HostingError::Client`] if the client cannot be built.
    pub fn authenticate(token: &str) -> Result<Self, HostingError> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()
            .map_err(HostingError::Client)?;
        Ok(Self { octocrab })
    }
}

impl RepositoryHost for GitHubHost {
    async fn create_repository(
        &self,
        name: &str,
        description: &str,
    ) -> Result<String, HostingError> {
        let span = info_span!("create_repository", repo = %name);

        async {
            info!("Creating repository on GitHub");

            let request = CreateRepositoryRequest { name, description };
            let repository: Repository = self
                .octocrab
                .post("/user/repos", Some(&request))
                .await
                .map_err(|e| HostingError::CreateFailed {
                    name: name.to_string(),
                    source: e,
                })?;

            let clone_url = resolve_clone_url(
                repository.clone_url.as_ref(),
                repository.full_name.as_deref(),
            )
            .ok_or_else(|| HostingError::MissingCloneUrl {
                name: name.to_string(),
            })?;

            info!(clone_url = %clone_url, "Repository created");
            Ok(clone_url)
        }
        .instrument(span)
        .await
    }
}

/// Picks the clone URL reported by the API, or derives one from the full name.
fn resolve_clone_url(clone_url: Option<&Url>, full_name: Option<&str>) -> Option<String> {
    if let Some(url) = clone_url {
        return Some(url.to_string());
    }

    let full_name = full_name.filter(|n| !n.is_empty())?;
    debug!(full_name, "API omitted clone_url, deriving from full name");
    Some(format!("https://github.com/{full_name}.git"))
}
