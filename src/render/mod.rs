//! Markdown rendering engine.
//!
//! Pure and deterministic: [`render`] walks the configured section order,
//! invokes each section's formatter, drops the empty results, joins the rest
//! with a divider, and runs a post-pass over placeholder markers. No I/O, no
//! clock, no randomness; equal configs render equal documents.

mod banners;
mod projects;
mod sections;
mod socials;
mod stats;
mod tech;

use std::sync::LazyLock;

use regex::Regex;

use crate::profile::{ProfileConfig, SectionKey};

const DIVIDER: &str = "\n\n---\n\n";

/// Placeholder region filled by a pinned-repos automation workflow
static PINNED_REPOS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- PINNED-REPOS-START -->.*<!-- PINNED-REPOS-END -->").unwrap()
});

/// Placeholder region filled by a blog-post-list automation workflow
static BLOG_POSTS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!-- BLOG-POST-LIST:START -->.*<!-- BLOG-POST-LIST:END -->").unwrap()
});

static DIVIDER_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\n\n---\n\n)+").unwrap());

/// Render the complete Markdown document for `config`.
pub fn render(config: &ProfileConfig) -> String {
    let sections: Vec<String> = config
        .section_order
        .iter()
        .map(|key| render_section(config, *key))
        .filter(|s| !s.is_empty())
        .collect();
    post_process(config, sections.join(DIVIDER))
}

/// Dispatch one section. Form-only panels (appearance, settings, the AI
/// assistant) and unknown identifiers contribute nothing.
fn render_section(config: &ProfileConfig, key: SectionKey) -> String {
    match key {
        SectionKey::MainHeaderBanner => banners::main_header(config),
        SectionKey::ProfileHeaderBanner => banners::profile_header(config),
        SectionKey::BasicInfo => sections::basic_info(config),
        SectionKey::MyMission => sections::mission(config),
        SectionKey::GithubStats => stats::github_stats(config),
        SectionKey::GithubAnalytics => stats::github_analytics(config),
        SectionKey::Socials => socials::socials(config),
        SectionKey::TechStack => tech::tech_stack(config),
        SectionKey::WorkExperience => sections::work_experience(config),
        SectionKey::Projects => projects::all_projects(config),
        SectionKey::FeaturedProjects => projects::featured_projects(config),
        SectionKey::Volunteering => sections::volunteering(config),
        SectionKey::Education => sections::education(config),
        SectionKey::Certifications => sections::certifications(config),
        SectionKey::Research => sections::research(config),
        SectionKey::Awards => sections::awards(config),
        SectionKey::Publications => sections::publications(config),
        SectionKey::Talks => sections::talks(config),
        SectionKey::Languages => sections::languages(config),
        SectionKey::Hobbies => sections::hobbies(config),
        SectionKey::Hackathons => sections::hackathons(config),
        SectionKey::ProblemSolving => sections::problem_solving(config),
        SectionKey::SupportMe => sections::support_me(config),
        SectionKey::BlogPosts => sections::blog_posts(config),
        SectionKey::CustomHtml => sections::custom_html(config),
        SectionKey::Footer => sections::footer(config),
        SectionKey::Appearance
        | SectionKey::AiAssistant
        | SectionKey::Settings
        | SectionKey::SectionLayout
        | SectionKey::Unknown => String::new(),
    }
}

/// Placeholder substitution and divider cleanup. Downstream automation fills
/// the marker regions on a schedule; until it runs, the markers are either
/// stripped (feature off) or replaced with one static fallback reference.
fn post_process(config: &ProfileConfig, mut text: String) -> String {
    if config.github_user.is_empty() || !config.show_pinned_repos {
        text = PINNED_REPOS_PATTERN.replace_all(&text, "").into_owned();
    } else if text.contains("<!-- PINNED-REPOS-START -->") {
        let replacement = format!(
            "[![Top Repos](https://github-readme-pinned-repos.vercel.app/?username={user})](https://github.com/{user})",
            user = config.github_user
        );
        text = PINNED_REPOS_PATTERN.replace_all(&text, replacement.as_str()).into_owned();
    }

    if config.blog_url.is_empty() {
        text = BLOG_POSTS_PATTERN.replace_all(&text, "").into_owned();
    } else if text.contains("<!-- BLOG-POST-LIST:START -->") {
        let replacement = format!("[📖 Read my latest posts]({})", config.blog_url);
        text = BLOG_POSTS_PATTERN.replace_all(&text, replacement.as_str()).into_owned();
    }

    let text = DIVIDER_RUN_PATTERN.replace_all(&text, DIVIDER);
    let text = text.trim();
    let text = text.strip_prefix("---\n\n").unwrap_or(text);
    let text = text.strip_suffix("\n\n---").unwrap_or(text);
    text.trim().to_string()
}

/// Percent-encode for URL query components. Alphanumerics and `-_.!~*'()`
/// pass through; every other byte of the UTF-8 encoding is escaped.
pub(crate) fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' => out.push(byte as char),
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}

/// One bullet per non-empty line of a multi-line description.
pub(crate) fn bullet_lines(description: &str) -> String {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| format!("- {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SocialLink;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_is_deterministic() {
        let config = ProfileConfig::default();
        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn test_empty_sections_contribute_no_divider() {
        let mut config = ProfileConfig::default();
        config.section_order = vec![SectionKey::BasicInfo, SectionKey::MyMission];
        config.my_mission = String::new();
        let output = render(&config);
        assert!(!output.contains("---"));
        assert!(output.contains(&config.bio));
    }

    #[test]
    fn test_unknown_section_renders_nothing() {
        let mut config = ProfileConfig::default();
        config.section_order = vec![SectionKey::Unknown];
        assert_eq!(render(&config), "");
    }

    #[test]
    fn test_basic_info_then_socials_scenario() {
        let mut config = ProfileConfig::default();
        config.bio = "Hello".to_string();
        config.socials = vec![SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/x".to_string(),
            icon: "github".to_string(),
        }];
        config.section_order = vec![SectionKey::BasicInfo, SectionKey::Socials];
        let output = render(&config);
        let parts: Vec<&str> = output.split(DIVIDER).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[0].contains("Hello"));
        assert!(parts[1].contains("https://github.com/x"));
        assert!(parts[1].contains("img.shields.io/badge/GitHub"));
    }

    #[test]
    fn test_pinned_markers_replaced_when_enabled() {
        let mut config = ProfileConfig::default();
        config.github_user = "octocat".to_string();
        config.show_pinned_repos = true;
        config.section_order = vec![SectionKey::GithubStats];
        let output = render(&config);
        assert!(!output.contains("PINNED-REPOS-START"));
        assert!(output
            .contains("https://github-readme-pinned-repos.vercel.app/?username=octocat"));
    }

    #[test]
    fn test_pinned_markers_stripped_without_user() {
        let mut config = ProfileConfig::default();
        config.github_user = String::new();
        config.section_order = vec![SectionKey::GithubStats];
        let output = render(&config);
        assert!(!output.contains("PINNED-REPOS"));
    }

    #[test]
    fn test_blog_markers_replaced_with_fallback() {
        let mut config = ProfileConfig::default();
        config.blog_url = "https://blog.example.com".to_string();
        config.section_order = vec![SectionKey::BlogPosts];
        let output = render(&config);
        assert!(!output.contains("BLOG-POST-LIST"));
        assert!(output.contains("[📖 Read my latest posts](https://blog.example.com)"));
    }

    #[test]
    fn test_divider_runs_collapse() {
        let mut config = ProfileConfig::default();
        config.show_pinned_repos = false;
        config.blog_url = String::new();
        let output = render(&config);
        assert!(!output.contains("---\n\n\n"));
        assert!(!output.contains("\n\n---\n\n\n\n---\n\n"));
        assert!(!output.starts_with("---"));
        assert!(!output.ends_with("---"));
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("Node.js"), "Node.js");
        assert_eq!(encode_component("C++"), "C%2B%2B");
        assert_eq!(encode_component("Buy Me A Coffee"), "Buy%20Me%20A%20Coffee");
        assert_eq!(encode_component("héllo"), "h%C3%A9llo");
    }

    #[test]
    fn test_bullet_lines_skips_blank_lines() {
        assert_eq!(bullet_lines("Did X\n\n  Did Y  "), "- Did X\n- Did Y");
        assert_eq!(bullet_lines(""), "");
    }
}
