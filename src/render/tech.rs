//! Tech stack section. Categories render in catalog order; each selected
//! skill renders in the configured style, with a plain-text fallback when a
//! custom skill has no catalog icon.

use crate::catalog::{skill_info, TECH_CATALOG};
use crate::profile::{ProfileConfig, SkillStyle};
use crate::render::encode_component;

/// Shields.io logo slug for a skill: its devicon identifier with variant
/// suffixes removed, or a slugified name for custom skills.
fn badge_logo(category: &str, name: &str) -> String {
    match skill_info(category, name) {
        Some(info) => info
            .devicon
            .replace("-plain", "")
            .replace("-original", "")
            .replace("-wordmark", ""),
        None => name.to_lowercase().replace(' ', "-"),
    }
}

/// Devicon CDN URL, when the skill has a catalog icon.
fn devicon_url(category: &str, name: &str) -> Option<String> {
    let devicon = skill_info(category, name)?.devicon;
    let family = devicon.split('-').next().unwrap_or(devicon);
    Some(format!("https://cdn.jsdelivr.net/gh/devicons/devicon/icons/{family}/{devicon}.svg"))
}

fn shield_style(style: SkillStyle) -> &'static str {
    match style {
        SkillStyle::BadgePlastic => "plastic",
        SkillStyle::BadgeFlat => "flat",
        SkillStyle::BadgeFlatSquare => "flat-square",
        SkillStyle::BadgeSocial => "social",
        _ => "for-the-badge",
    }
}

pub fn tech_stack(config: &ProfileConfig) -> String {
    if config.tech_stack.values().all(|skills| skills.is_empty()) {
        return String::new();
    }

    let mut markdown = String::from("### 🛠️ My Tech Stack\n\n");
    // Catalog order first, then custom categories in map order
    let mut categories: Vec<&str> = TECH_CATALOG
        .iter()
        .map(|(category, _)| *category)
        .filter(|category| config.tech_stack.contains_key(*category))
        .collect();
    for category in config.tech_stack.keys() {
        if !categories.contains(&category.as_str()) {
            categories.push(category);
        }
    }

    for category in categories {
        let Some(skills) = config.tech_stack.get(category) else {
            continue;
        };
        if skills.is_empty() {
            continue;
        }
        markdown.push_str(&format!("#### {category}\n"));
        markdown.push_str(&render_category(config, category, skills));
    }
    markdown.trim_end().to_string()
}

fn render_category(config: &ProfileConfig, category: &str, skills: &[String]) -> String {
    let color = &config.badge_color;
    match config.skill_style {
        SkillStyle::Badge
        | SkillStyle::BadgePlastic
        | SkillStyle::BadgeFlat
        | SkillStyle::BadgeFlatSquare
        | SkillStyle::BadgeSocial => {
            let shield = shield_style(config.skill_style);
            let badges: String = skills
                .iter()
                .map(|name| {
                    format!(
                        "  <a href=\"#\"><img src=\"https://img.shields.io/badge/{encoded}-{color}?style={shield}&logo={logo}&logoColor=white\" alt=\"{name}\"/></a>\n",
                        encoded = encode_component(name),
                        logo = badge_logo(category, name),
                    )
                })
                .collect();
            format!("<p align=\"left\">\n{badges}</p>\n\n")
        }
        SkillStyle::Icon | SkillStyle::IconGrid => {
            let icons: String = skills
                .iter()
                .map(|name| match devicon_url(category, name) {
                    Some(url) => format!(
                        "  <a href=\"#\"><img src=\"{url}\" height=\"40\" width=\"52\" alt=\"{name} icon\"/></a>\n"
                    ),
                    None => format!(
                        "  <a href=\"#\" style=\"display: inline-block; text-align: center; width: 52px; vertical-align: top; margin: 4px; text-decoration: none;\">\n    <div style=\"height: 40px; width: 52px; display: flex; align-items: center; justify-content: center; text-align: center; font-size: 11px; color: #c9d1d9; word-break: break-all; line-height: 1.2;\">{name}</div>\n  </a>\n"
                    ),
                })
                .collect();
            format!("<p align=\"left\">\n{icons}</p>\n\n")
        }
        SkillStyle::Star => {
            let stars: String = skills
                .iter()
                .map(|name| {
                    let icon = match devicon_url(category, name) {
                        Some(url) => format!(
                            "    <img src=\"{url}\" height=\"40\" width=\"40\" alt=\"{name} icon\"/>\n"
                        ),
                        None => format!(
                            "    <div style=\"height: 40px; width: 40px; display: flex; align-items: center; justify-content: center; text-align: center; font-size: 11px; color: #c9d1d9; word-break: break-all; line-height: 1.2;\">{name}</div>\n"
                        ),
                    };
                    format!(
                        "  <a href=\"#\" style=\"display: inline-block; text-align: center; width: 90px; vertical-align: top; margin: 10px; text-decoration: none;\">\n{icon}    <br><sub style=\"font-size: 12px; color: #c9d1d9;\">{name}</sub>\n  </a>\n"
                    )
                })
                .collect();
            format!("<p align=\"center\">\n{stars}</p>\n\n")
        }
        SkillStyle::IconText => {
            let items = skills
                .iter()
                .map(|name| match devicon_url(category, name) {
                    Some(url) => format!(
                        "- <img src=\"{url}\" height=\"20\" width=\"20\" alt=\"{name} icon\" style=\"vertical-align: middle; margin-right: 5px;\"/> {name}"
                    ),
                    None => format!("- {name}"),
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("{items}\n\n")
        }
        SkillStyle::Table => {
            let mut table = String::from("| Icon | Name |\n|:---:|:---:|\n");
            let rows = skills
                .iter()
                .map(|name| match devicon_url(category, name) {
                    Some(url) => format!(
                        "| <img src=\"{url}\" height=\"25\" width=\"25\" alt=\"{name} icon\" /> | {name} |"
                    ),
                    None => format!("| | {name} |"),
                })
                .collect::<Vec<_>>()
                .join("\n");
            table.push_str(&rows);
            format!("{table}\n\n")
        }
        SkillStyle::Pills => {
            let pills: String = skills
                .iter()
                .map(|name| {
                    format!(
                        "  <a href=\"#\"><img src=\"https://img.shields.io/badge/{encoded}-{color}?style=flat&logoColor=white\" alt=\"{name}\"/></a>\n",
                        encoded = encode_component(name),
                    )
                })
                .collect();
            format!("<p align=\"left\">\n{pills}</p>\n\n")
        }
        SkillStyle::ListBullet => {
            let items =
                skills.iter().map(|s| format!("- {s}")).collect::<Vec<_>>().join("\n");
            format!("{items}\n\n")
        }
        SkillStyle::ListComma => format!("{}\n\n", skills.join(", ")),
        SkillStyle::ListDot => format!("{}\n\n", skills.join(" &nbsp;•&nbsp; ")),
        SkillStyle::ListPipe => format!("{}\n\n", skills.join(" | ")),
        SkillStyle::ListNewline => format!("{}\n\n", skills.join("<br>")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(style: SkillStyle) -> ProfileConfig {
        let mut config = ProfileConfig::default();
        config.skill_style = style;
        config.tech_stack.values_mut().for_each(Vec::clear);
        config.tech_stack.insert(
            "Programming Languages".to_string(),
            vec!["Python".to_string(), "C++".to_string()],
        );
        config
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        let mut config = ProfileConfig::default();
        config.tech_stack.values_mut().for_each(Vec::clear);
        assert_eq!(tech_stack(&config), "");
    }

    #[test]
    fn test_list_comma_is_bare_text() {
        let output = tech_stack(&config_with(SkillStyle::ListComma));
        assert!(output.contains("Python, C++"));
        assert!(!output.contains("img.shields.io"));
    }

    #[test]
    fn test_badge_encodes_name_and_strips_devicon_variant() {
        let output = tech_stack(&config_with(SkillStyle::Badge));
        // python-plain -> python; C++ percent-encoded
        assert!(output.contains("badge/Python-a855f7?style=for-the-badge&logo=python"));
        assert!(output.contains("badge/C%2B%2B-"));
    }

    #[test]
    fn test_flat_square_shield_style() {
        let output = tech_stack(&config_with(SkillStyle::BadgeFlatSquare));
        assert!(output.contains("style=flat-square"));
    }

    #[test]
    fn test_custom_skill_falls_back_to_text() {
        let mut config = config_with(SkillStyle::IconText);
        if let Some(skills) = config.tech_stack.get_mut("Programming Languages") {
            skills.push("MadeUpLang".to_string());
        }
        let output = tech_stack(&config);
        assert!(output.contains("- MadeUpLang"));
        assert!(output.contains("devicons/devicon/icons/python/python-plain.svg"));
    }

    #[test]
    fn test_categories_follow_catalog_order() {
        let mut config = ProfileConfig::default();
        config.tech_stack.values_mut().for_each(Vec::clear);
        config
            .tech_stack
            .insert("DevOps".to_string(), vec!["Docker".to_string()]);
        config
            .tech_stack
            .insert("Programming Languages".to_string(), vec!["Rust".to_string()]);
        let output = tech_stack(&config);
        let langs = output.find("#### Programming Languages").unwrap();
        let devops = output.find("#### DevOps").unwrap();
        assert!(langs < devops);
    }

    #[test]
    fn test_table_style_has_header_row() {
        let mut config = config_with(SkillStyle::Table);
        if let Some(skills) = config.tech_stack.get_mut("Programming Languages") {
            skills.push("MadeUpLang".to_string());
        }
        let output = tech_stack(&config);
        assert!(output.contains("| Icon | Name |"));
        // Catalog skill gets an icon cell, custom skill an empty one
        assert!(output.contains("alt=\"Python icon\""));
        assert!(output.contains("| | MadeUpLang |"));
    }
}
