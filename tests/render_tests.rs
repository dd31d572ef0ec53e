//! Rendering engine integration tests: determinism, section selection, and
//! the documented example scenarios.

use readme_forge::profile::{Project, SectionKey, SkillStyle, SocialLink};
use readme_forge::{render, ProfileConfig};

const DIVIDER: &str = "\n\n---\n\n";

mod determinism_tests {
    use super::*;

    #[test]
    fn test_same_config_same_document() {
        let mut config = ProfileConfig::default();
        config.github_user = "octocat".to_string();
        config.projects.push(Project {
            name: "alpha".to_string(),
            description: "A project".to_string(),
            ..Default::default()
        });
        assert_eq!(render(&config), render(&config));
    }

    #[test]
    fn test_clone_renders_identically() {
        let config = ProfileConfig::default();
        assert_eq!(render(&config), render(&config.clone()));
    }
}

mod section_selection_tests {
    use super::*;

    #[test]
    fn test_section_absent_from_order_is_suppressed() {
        let mut config = ProfileConfig::default();
        config.my_mission = "To ship".to_string();
        config.section_order = vec![SectionKey::BasicInfo];
        let output = render(&config);
        assert!(!output.contains("My Mission"));
        assert!(!output.contains("To ship"));
    }

    #[test]
    fn test_order_controls_position() {
        let mut config = ProfileConfig::default();
        config.my_mission = "To ship".to_string();
        config.section_order = vec![SectionKey::MyMission, SectionKey::BasicInfo];
        let output = render(&config);
        let mission = output.find("My Mission").expect("mission rendered");
        let bio = output.find("Hi there").expect("bio rendered");
        assert!(mission < bio);
    }

    #[test]
    fn test_zero_entry_collection_emits_no_heading() {
        let mut config = ProfileConfig::default();
        config.section_order = vec![SectionKey::WorkExperience, SectionKey::Awards];
        assert_eq!(render(&config), "");
    }

    #[test]
    fn test_empty_bio_emits_no_greeting_heading() {
        let mut config = ProfileConfig::default();
        config.bio = String::new();
        config.section_order = vec![SectionKey::BasicInfo];
        assert_eq!(render(&config), "");
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_basic_info_and_socials_example() {
        let mut config = ProfileConfig::default();
        config.bio = "Hello".to_string();
        config.socials = vec![SocialLink {
            platform: "GitHub".to_string(),
            url: "https://github.com/x".to_string(),
            icon: "github".to_string(),
        }];
        config.section_order = vec![SectionKey::BasicInfo, SectionKey::Socials];

        let output = render(&config);
        let blocks: Vec<&str> = output.split(DIVIDER).collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("Hello"));
        assert!(blocks[1].contains("img.shields.io/badge/GitHub"));
        assert!(blocks[1].contains("(https://github.com/x)"));
    }

    #[test]
    fn test_list_comma_renders_bare_text() {
        let mut config = ProfileConfig::default();
        config.skill_style = SkillStyle::ListComma;
        config.tech_stack.values_mut().for_each(Vec::clear);
        config
            .tech_stack
            .insert("Programming Languages".to_string(), vec!["Python".to_string()]);
        config.section_order = vec![SectionKey::TechStack];

        let output = render(&config);
        assert!(output.contains("#### Programming Languages\nPython"));
        assert!(!output.contains("<img"));
        assert!(!output.contains("img.shields.io"));
    }

    #[test]
    fn test_nameless_project_excluded_even_when_featured() {
        let mut config = ProfileConfig::default();
        config.projects = vec![Project {
            name: String::new(),
            description: "Populated but unnamed".to_string(),
            is_top_project: true,
            repo_url: "https://github.com/x/secret".to_string(),
            ..Default::default()
        }];
        config.section_order = vec![SectionKey::FeaturedProjects, SectionKey::Projects];
        assert_eq!(render(&config), "");
    }
}

mod post_process_tests {
    use super::*;

    #[test]
    fn test_no_double_dividers_in_full_default_render() {
        let config = ProfileConfig::default();
        let output = render(&config);
        assert!(!output.contains("---\n\n\n\n---"));
        assert!(!output.starts_with("---"));
        assert!(!output.ends_with("---"));
    }

    #[test]
    fn test_pinned_placeholder_substituted() {
        let mut config = ProfileConfig::default();
        config.github_user = "octocat".to_string();
        let output = render(&config);
        assert!(!output.contains("PINNED-REPOS"));
        assert!(output.contains("github-readme-pinned-repos.vercel.app/?username=octocat"));
    }

    #[test]
    fn test_blog_placeholder_stripped_when_disabled() {
        let mut config = ProfileConfig::default();
        config.blog_url = String::new();
        config.section_order.push(SectionKey::BlogPosts);
        let output = render(&config);
        assert!(!output.contains("BLOG-POST-LIST"));
    }
}
