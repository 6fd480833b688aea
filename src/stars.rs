// Star and fork count refresh for the curated catalog.
// Fetches each project's repository from GitHub and updates the stored counts.

use std::time::Duration;

use serde::Serialize;

use crate::catalog::{Catalog, Project};
use crate::github::{Repository, RepositoryLookup};

/// Pause between repository requests.
pub const REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Outcome of a refresh run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StarReport {
    /// Projects looked up.
    pub checked: usize,
    /// Projects whose counts changed.
    pub updated: usize,
    /// Projects that could not be fetched.
    pub skipped: usize,
}

/// Copy fresh counts from `repo` into `project`. Returns whether anything changed.
///
/// Forks are only tracked for projects that already record them.
pub fn apply_counts(project: &mut Project, repo: &Repository) -> bool {
    let mut changed = false;

    if project.stars != repo.stargazers_count {
        tracing::info!(
            project = %project.full_name(),
            from = project.stars,
            to = repo.stargazers_count,
            "stars changed"
        );
        project.stars = repo.stargazers_count;
        changed = true;
    }

    if let Some(forks) = project.forks.as_mut() {
        if *forks != repo.forks_count {
            *forks = repo.forks_count;
            changed = true;
        }
    }

    changed
}

/// Refresh every project in the catalog, one request at a time, pausing
/// `delay` between requests.
///
/// Cross-listed projects are looked up once per listing. Fetch failures are
/// logged and counted as skipped; they never abort the run.
pub async fn refresh<L>(source: &mut L, catalog: &mut Catalog, delay: Duration) -> StarReport
where
    L: RepositoryLookup + ?Sized,
{
    let mut report = StarReport::default();

    for project in catalog.projects_mut() {
        report.checked += 1;

        match source.get_repository(&project.owner, &project.name).await {
            Ok(repo) => {
                if apply_counts(project, &repo) {
                    report.updated += 1;
                } else {
                    tracing::debug!(project = %project.full_name(), "up to date");
                }
            }
            Err(e) => {
                tracing::warn!(project = %project.full_name(), error = %e, "skipped");
                report.skipped += 1;
            }
        }

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    tracing::info!(
        checked = report.checked,
        updated = report.updated,
        skipped = report.skipped,
        "star refresh finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use crate::catalog::{Category, Tier};
    use crate::error::{GitGodError, Result};
    use crate::github::Owner;

    /// Serves canned repositories by `owner/name`; anything else is a 404.
    #[derive(Default)]
    struct FakeLookup {
        repos: HashMap<String, Repository>,
        requests: Vec<String>,
    }

    #[async_trait]
    impl RepositoryLookup for FakeLookup {
        async fn get_repository(&mut self, owner: &str, name: &str) -> Result<Repository> {
            let key = format!("{}/{}", owner, name);
            self.requests.push(key.clone());
            self.repos
                .get(&key)
                .cloned()
                .ok_or(GitGodError::NotFound(key))
        }
    }

    fn listed(owner: &str, name: &str, stars: u64, forks: Option<u64>) -> Project {
        Project {
            name: name.to_string(),
            owner: owner.to_string(),
            description: String::new(),
            stars,
            forks,
            language: "Rust".to_string(),
            url: format!("https://github.com/{}/{}", owner, name),
            age: None,
            topics: None,
        }
    }

    fn category(id: &str, projects: Vec<Project>) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: String::new(),
            tier: Tier::Domain,
            metric: None,
            projects,
        }
    }

    fn fetched(owner: &str, name: &str, stars: u64, forks: u64) -> Repository {
        Repository {
            name: name.to_string(),
            owner: Owner {
                login: owner.to_string(),
            },
            description: None,
            stargazers_count: stars,
            forks_count: forks,
            language: Some("Rust".to_string()),
            html_url: format!("https://github.com/{}/{}", owner, name),
        }
    }

    fn project(forks: Option<u64>) -> Project {
        Project {
            name: "curl".to_string(),
            owner: "curl".to_string(),
            description: "Transfers data".to_string(),
            stars: 36000,
            forks,
            language: "C".to_string(),
            url: "https://github.com/curl/curl".to_string(),
            age: Some(28),
            topics: None,
        }
    }

    fn repo(stars: u64, forks: u64) -> Repository {
        Repository {
            name: "curl".to_string(),
            owner: Owner {
                login: "curl".to_string(),
            },
            description: None,
            stargazers_count: stars,
            forks_count: forks,
            language: Some("C".to_string()),
            html_url: "https://github.com/curl/curl".to_string(),
        }
    }

    #[test]
    fn test_updates_stars_and_forks() {
        let mut p = project(Some(6500));
        assert!(apply_counts(&mut p, &repo(37000, 6600)));
        assert_eq!(p.stars, 37000);
        assert_eq!(p.forks, Some(6600));
    }

    #[test]
    fn test_untracked_forks_stay_untracked() {
        let mut p = project(None);
        assert!(!apply_counts(&mut p, &repo(36000, 6600)));
        assert_eq!(p.forks, None);
    }

    #[test]
    fn test_fork_change_alone_counts() {
        let mut p = project(Some(6500));
        assert!(apply_counts(&mut p, &repo(36000, 6501)));
        assert_eq!(p.stars, 36000);
    }

    #[test]
    fn test_unchanged() {
        let mut p = project(Some(6500));
        assert!(!apply_counts(&mut p, &repo(36000, 6500)));
    }

    #[tokio::test]
    async fn test_refresh_counts_updates_and_skips() {
        let mut catalog = Catalog::new(vec![
            category(
                "web",
                vec![
                    listed("sveltejs", "svelte", 80_000, Some(4_000)),
                    listed("gone", "deleted-repo", 500, None),
                ],
            ),
            category(
                "tools",
                vec![
                    listed("BurntSushi", "ripgrep", 50_000, None),
                    listed("sveltejs", "svelte", 80_000, Some(4_000)),
                ],
            ),
        ]);

        let mut lookup = FakeLookup::default();
        for repo in [
            fetched("sveltejs", "svelte", 81_000, 4_100),
            fetched("BurntSushi", "ripgrep", 50_000, 2_000),
        ] {
            lookup
                .repos
                .insert(format!("{}/{}", repo.owner.login, repo.name), repo);
        }

        let report = refresh(&mut lookup, &mut catalog, Duration::ZERO).await;

        assert_eq!(
            report,
            StarReport {
                checked: 4,
                updated: 2,
                skipped: 1,
            }
        );
        assert_eq!(
            lookup.requests,
            vec![
                "sveltejs/svelte",
                "gone/deleted-repo",
                "BurntSushi/ripgrep",
                "sveltejs/svelte",
            ]
        );

        let svelte = catalog.category("tools").unwrap().projects[1].clone();
        assert_eq!(svelte.stars, 81_000);
        assert_eq!(svelte.forks, Some(4_100));
        let skipped = &catalog.category("web").unwrap().projects[1];
        assert_eq!(skipped.stars, 500);
        let ripgrep = &catalog.category("tools").unwrap().projects[0];
        assert_eq!(ripgrep.forks, None);
    }

    #[tokio::test]
    async fn test_refresh_of_empty_catalog() {
        let mut lookup = FakeLookup::default();
        let report = refresh(&mut lookup, &mut Catalog::default(), REQUEST_DELAY).await;
        assert_eq!(report, StarReport::default());
        assert!(lookup.requests.is_empty());
    }
}
