// Quality filter and conversion for trending search results.

use crate::catalog::Project;
use crate::github::Repository;

/// Minimum stars for a trending repository.
pub const MIN_STARS: u64 = 50;

/// Minimum share of ASCII characters in a description.
pub const MIN_ASCII_RATIO: f64 = 0.7;

/// Name/description fragments that mark coursework repositories.
pub const COURSEWORK_MARKERS: &[&str] = &[
    "homework",
    "assignment",
    "bài tập",
    "thực tập",
    "课程",
    "作业",
    "練習",
    "übung",
    "ejercicio",
    "lab1",
    "lab2",
    "lab3",
    "week1",
    "week2",
];

const NO_DESCRIPTION: &str = "No description";
const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Fraction of characters in `text` that are ASCII. Empty text scores 0.
pub fn ascii_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let ascii = text.chars().filter(char::is_ascii).count();
    ascii as f64 / total as f64
}

/// Whether the name or description carries a coursework marker.
pub fn looks_like_coursework(name: &str, description: &str) -> bool {
    let name = name.to_lowercase();
    let description = description.to_lowercase();
    COURSEWORK_MARKERS
        .iter()
        .any(|marker| name.contains(marker) || description.contains(marker))
}

/// Whether a search hit is worth showing in the trending feed.
pub fn is_quality_repo(repo: &Repository) -> bool {
    let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) else {
        return false;
    };

    if ascii_ratio(description) < MIN_ASCII_RATIO {
        return false;
    }

    if repo.language.as_deref().is_none_or(str::is_empty) {
        return false;
    }

    if repo.stargazers_count < MIN_STARS {
        return false;
    }

    !looks_like_coursework(&repo.name, description)
}

/// Convert a GitHub repository to the catalog's project shape.
pub fn to_project(repo: &Repository) -> Project {
    Project {
        name: repo.name.clone(),
        owner: repo.owner.login.clone(),
        description: repo
            .description
            .clone()
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        stars: repo.stargazers_count,
        forks: Some(repo.forks_count),
        language: repo
            .language
            .clone()
            .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
        url: repo.html_url.clone(),
        age: None,
        topics: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Owner;

    fn repo(name: &str, description: Option<&str>, language: Option<&str>, stars: u64) -> Repository {
        Repository {
            name: name.to_string(),
            owner: Owner {
                login: "someone".to_string(),
            },
            description: description.map(str::to_string),
            stargazers_count: stars,
            forks_count: 3,
            language: language.map(str::to_string),
            html_url: format!("https://github.com/someone/{}", name),
        }
    }

    #[test]
    fn test_ascii_ratio() {
        assert_eq!(ascii_ratio("plain text"), 1.0);
        assert_eq!(ascii_ratio(""), 0.0);
        assert_eq!(ascii_ratio("ab日本"), 0.5);
    }

    #[test]
    fn test_accepts_good_repo() {
        assert!(is_quality_repo(&repo(
            "fastdb",
            Some("An embedded database written in Rust"),
            Some("Rust"),
            1200
        )));
    }

    #[test]
    fn test_rejects_missing_description_or_language() {
        assert!(!is_quality_repo(&repo("x", None, Some("Go"), 500)));
        assert!(!is_quality_repo(&repo("x", Some(""), Some("Go"), 500)));
        assert!(!is_quality_repo(&repo("x", Some("A tool"), None, 500)));
    }

    #[test]
    fn test_rejects_non_latin_description_regardless_of_stars() {
        assert!(!is_quality_repo(&repo(
            "awesome-notes",
            Some("一个非常流行的学习笔记仓库"),
            Some("Python"),
            90_000
        )));
    }

    #[test]
    fn test_rejects_low_stars() {
        assert!(!is_quality_repo(&repo("tool", Some("A tool"), Some("Go"), 49)));
        assert!(is_quality_repo(&repo("tool", Some("A tool"), Some("Go"), 50)));
    }

    #[test]
    fn test_rejects_coursework() {
        assert!(!is_quality_repo(&repo(
            "cs101-lab2",
            Some("Sorting algorithms"),
            Some("Java"),
            10_000
        )));
        assert!(!is_quality_repo(&repo(
            "notes",
            Some("Solutions for my Homework"),
            Some("Java"),
            10_000
        )));
        assert!(looks_like_coursework("Übung-3", ""));
    }

    #[test]
    fn test_to_project_defaults() {
        let project = to_project(&repo("tool", None, None, 80));
        assert_eq!(project.description, "No description");
        assert_eq!(project.language, "Unknown");
        assert_eq!(project.owner, "someone");
        assert_eq!(project.forks, Some(3));
        assert_eq!(project.url, "https://github.com/someone/tool");
    }
}
