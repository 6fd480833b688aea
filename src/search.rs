// Ranked free-text search over the catalog.
// Scores projects by exact and substring matches on name, owner, language, and description.

use serde::Serialize;

use crate::catalog::{Catalog, Project};

const NAME_EXACT: u32 = 100;
const NAME_CONTAINS: u32 = 50;
const OWNER_EXACT: u32 = 40;
const OWNER_CONTAINS: u32 = 20;
const LANGUAGE_EXACT: u32 = 30;
const LANGUAGE_CONTAINS: u32 = 15;
const DESCRIPTION_CONTAINS: u32 = 10;

/// Search result in the shape handed to the front ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<Project>,
    pub total_projects: usize,
}

/// Run a query against the whole catalog.
///
/// The query is trimmed before use. A blank query yields no results, while
/// `total_projects` still reports the catalog size.
pub fn search(catalog: &Catalog, raw_query: &str) -> SearchResponse {
    let query = raw_query.trim();
    let projects = catalog.projects();
    let total_projects = projects.len();

    let results = search_projects(projects, query)
        .into_iter()
        .cloned()
        .collect();

    SearchResponse {
        query: query.to_string(),
        results,
        total_projects,
    }
}

/// Split a query into lowercase, non-empty terms.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Relevance of a project for the given lowercase terms.
///
/// Each term contributes independently; an exact field match replaces the
/// substring bonus for that field rather than adding to it.
pub fn score(project: &Project, terms: &[String]) -> u32 {
    let name = project.name.to_lowercase();
    let owner = project.owner.to_lowercase();
    let description = project.description.to_lowercase();
    let language = project.language.to_lowercase();

    terms
        .iter()
        .map(|term| {
            let term = term.as_str();
            field_score(&name, term, NAME_EXACT, NAME_CONTAINS)
                + field_score(&owner, term, OWNER_EXACT, OWNER_CONTAINS)
                + field_score(&language, term, LANGUAGE_EXACT, LANGUAGE_CONTAINS)
                + if description.contains(term) {
                    DESCRIPTION_CONTAINS
                } else {
                    0
                }
        })
        .sum()
}

fn field_score(field: &str, term: &str, exact: u32, contains: u32) -> u32 {
    if field == term {
        exact
    } else if field.contains(term) {
        contains
    } else {
        0
    }
}

/// Projects with nonzero relevance, most relevant first.
///
/// Equal scores keep their input order.
pub fn search_projects<'a, I>(projects: I, query: &str) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let terms = tokenize(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(&Project, u32)> = projects
        .into_iter()
        .map(|project| (project, score(project, &terms)))
        .filter(|(_, score)| *score > 0)
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(project, _)| project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Tier};

    fn project(owner: &str, name: &str, language: &str, description: &str) -> Project {
        Project {
            name: name.to_string(),
            owner: owner.to_string(),
            description: description.to_string(),
            stars: 100,
            forks: Some(10),
            language: language.to_string(),
            url: format!("https://github.com/{}/{}", owner, name),
            age: None,
            topics: None,
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("git", "git", "C", "Distributed version control"),
            project("torvalds", "linux", "C", "Linux kernel source tree"),
            project("rust-lang", "rust", "Rust", "Empowering everyone"),
            project("BurntSushi", "ripgrep", "Rust", "Recursively search directories"),
            project("microsoft", "linux-tools", "Python", "Helpers for linux hosts"),
        ]
    }

    fn names(results: &[&Project]) -> Vec<String> {
        results.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("  Rust   CLI\t"), vec!["rust", "cli"]);
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let projects = sample();
        let results = search_projects(&projects, "linux");
        assert_eq!(names(&results), vec!["linux", "linux-tools"]);

        // 100 exact name + 10 description
        assert_eq!(score(results[0], &tokenize("linux")), 110);
        // 50 contained in name + 10 description
        assert_eq!(score(results[1], &tokenize("linux")), 60);
    }

    #[test]
    fn test_exact_match_does_not_add_contains_bonus() {
        let p = project("git", "git", "C", "");
        assert_eq!(score(&p, &tokenize("git")), NAME_EXACT + OWNER_EXACT);
    }

    #[test]
    fn test_field_weights() {
        let p = project("someone", "tool", "TypeScript", "a small tool");
        assert_eq!(score(&p, &tokenize("typescript")), LANGUAGE_EXACT);
        assert_eq!(score(&p, &tokenize("script")), LANGUAGE_CONTAINS);
        assert_eq!(score(&p, &tokenize("some")), OWNER_CONTAINS);
        assert_eq!(score(&p, &tokenize("small")), DESCRIPTION_CONTAINS);
    }

    #[test]
    fn test_multi_term_scores_accumulate() {
        let projects = sample();
        let results = search_projects(&projects, "rust search");
        // rust: name 100 + owner 20 + language 30; ripgrep: language 30 + description 10
        assert_eq!(names(&results), vec!["rust", "ripgrep"]);
        assert_eq!(score(results[1], &tokenize("rust search")), 40);
    }

    #[test]
    fn test_case_insensitive() {
        let projects = sample();
        let results = search_projects(&projects, "BURNTSUSHI");
        assert_eq!(names(&results), vec!["ripgrep"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let projects = vec![
            project("a", "alpha", "Go", "fast server"),
            project("b", "beta", "Go", "fast client"),
            project("c", "gamma", "Go", "fast proxy"),
        ];
        let results = search_projects(&projects, "go");
        assert_eq!(names(&results), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_no_zero_score_results() {
        let projects = sample();
        let terms = tokenize("kernel zzz");
        let results = search_projects(&projects, "kernel zzz");
        assert_eq!(names(&results), vec!["linux"]);
        assert!(results.iter().all(|p| score(p, &terms) > 0));
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let catalog = Catalog::new(vec![Category {
            id: "misc".to_string(),
            name: "Misc".to_string(),
            description: String::new(),
            icon: String::new(),
            tier: Tier::Rising,
            metric: None,
            projects: sample(),
        }]);

        let response = search(&catalog, "   ");
        assert_eq!(response.query, "");
        assert!(response.results.is_empty());
        assert_eq!(response.total_projects, 5);

        let response = search(&catalog, "  linux ");
        assert_eq!(response.query, "linux");
        assert_eq!(response.results.len(), 2);
    }

    #[test]
    fn test_response_uses_camel_case() {
        let catalog = Catalog::default();
        let json = serde_json::to_value(search(&catalog, "x")).unwrap();
        assert_eq!(json["totalProjects"], 0);
        assert_eq!(json["query"], "x");
    }
}
