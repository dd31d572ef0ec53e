//! Project sections: featured projects first-class, everything else grouped
//! by category. Entries without a name are excluded everywhere.

use crate::profile::{Project, ProfileConfig, ProjectCategory, ProjectStyle};

fn project_header(project: &Project) -> String {
    let mut header = format!("**{}**", project.name);
    if !project.repo_url.is_empty() || !project.live_url.is_empty() {
        let repo = if project.repo_url.is_empty() {
            String::new()
        } else {
            format!("[Repo]({})", project.repo_url)
        };
        let live = if project.live_url.is_empty() {
            String::new()
        } else {
            format!("[Live Demo]({})", project.live_url)
        };
        let separator =
            if !project.repo_url.is_empty() && !project.live_url.is_empty() { " | " } else { " " };
        header.push_str(&format!(" - {repo}{separator}{live}"));
    }
    header
}

/// Collapsible box entry: a `<details>` block, with a thumbnail table layout
/// when a thumbnail URL is present.
fn render_box(project: &Project) -> String {
    let header = project_header(project);
    let tech_line = if project.tech.is_empty() {
        String::new()
    } else {
        format!("<p><i>Tech: {}</i></p>", project.tech.join(", "))
    };
    let badges_line = if project.custom_badges.is_empty() {
        String::new()
    } else {
        format!("<p>{}</p>", project.custom_badges)
    };

    let content = if project.thumbnail_url.is_empty() {
        let tech_text = if project.tech.is_empty() {
            String::new()
        } else {
            format!("Tech: {}", project.tech.join(", "))
        };
        format!(
            "  <br>\n  {description}\n  <br><br>\n  {tech_text}\n  <br><br>\n  {badges}",
            description = project.description,
            badges = project.custom_badges,
        )
    } else {
        let link = if !project.live_url.is_empty() {
            &project.live_url
        } else if !project.repo_url.is_empty() {
            &project.repo_url
        } else {
            "#"
        };
        format!(
            "  <br>\n  <table>\n    <tr>\n      <td width=\"250\" valign=\"top\">\n        <a href=\"{link}\" target=\"_blank\" rel=\"noopener noreferrer\">\n          <img src=\"{thumb}\" alt=\"{name} thumbnail\" width=\"250\" />\n        </a>\n      </td>\n      <td valign=\"top\">\n        <p>{description}</p>\n        <br />\n        {tech_line}\n        {badges_line}\n      </td>\n    </tr>\n  </table>",
            thumb = project.thumbnail_url,
            name = project.name,
            description = project.description,
        )
    };

    format!("<details>\n  <summary>{header}</summary>\n{content}\n</details>")
}

fn render_list(project: &Project) -> String {
    let header = project_header(project);
    let tech_line = if project.tech.is_empty() {
        String::new()
    } else {
        format!("\n  - _Tech: {}_", project.tech.join(", "))
    };
    let badges_line = if project.custom_badges.is_empty() {
        String::new()
    } else {
        format!("\n  - {}", project.custom_badges)
    };
    format!("- {header}\n  - {}{tech_line}{badges_line}", project.description)
}

fn render_project(config: &ProfileConfig, project: &Project) -> String {
    match config.project_style {
        ProjectStyle::Box => render_box(project),
        ProjectStyle::List => render_list(project),
    }
}

fn entry_separator(config: &ProfileConfig) -> &'static str {
    match config.project_style {
        ProjectStyle::List => "\n",
        ProjectStyle::Box => "\n\n",
    }
}

/// Non-featured projects, grouped under category subheadings in the fixed
/// category display order.
pub fn all_projects(config: &ProfileConfig) -> String {
    let visible: Vec<&Project> = config
        .projects
        .iter()
        .filter(|p| !p.name.is_empty() && !p.is_top_project)
        .collect();
    if visible.is_empty() {
        return String::new();
    }

    let mut content = String::from("### 💻 All My Projects\n\n");
    for category in ProjectCategory::ALL {
        let in_category: Vec<String> = visible
            .iter()
            .filter(|p| p.category == category)
            .map(|p| render_project(config, p))
            .collect();
        if in_category.is_empty() {
            continue;
        }
        content.push_str(&format!("#### {}\n", category.label()));
        content.push_str(&in_category.join(entry_separator(config)));
        content.push('\n');
    }
    content.trim_end().to_string()
}

pub fn featured_projects(config: &ProfileConfig) -> String {
    let featured: Vec<String> = config
        .projects
        .iter()
        .filter(|p| p.is_top_project && !p.name.is_empty())
        .map(|p| render_project(config, p))
        .collect();
    if featured.is_empty() {
        return String::new();
    }
    format!("### 🚀 Featured Projects\n\n{}", featured.join(entry_separator(config)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, category: ProjectCategory) -> Project {
        Project {
            name: name.to_string(),
            description: format!("{name} description"),
            repo_url: format!("https://github.com/x/{name}"),
            category,
            ..Default::default()
        }
    }

    #[test]
    fn test_nameless_projects_excluded() {
        let mut config = ProfileConfig::default();
        config.projects = vec![Project::default()];
        assert_eq!(all_projects(&config), "");
        assert_eq!(featured_projects(&config), "");
    }

    #[test]
    fn test_featured_excluded_from_all_projects() {
        let mut config = ProfileConfig::default();
        let mut top = project("alpha", ProjectCategory::WebApplication);
        top.is_top_project = true;
        config.projects = vec![top, project("beta", ProjectCategory::WebApplication)];

        let all = all_projects(&config);
        assert!(!all.contains("alpha"));
        assert!(all.contains("beta"));

        let featured = featured_projects(&config);
        assert!(featured.contains("alpha"));
        assert!(!featured.contains("beta"));
    }

    #[test]
    fn test_categories_in_display_order() {
        let mut config = ProfileConfig::default();
        config.projects = vec![
            project("tool", ProjectCategory::ConsoleApplication),
            project("site", ProjectCategory::StaticWebsite),
        ];
        let output = all_projects(&config);
        let site = output.find("#### Static Website").unwrap();
        let tool = output.find("#### Console Application").unwrap();
        assert!(site < tool);
    }

    #[test]
    fn test_list_entry_shape() {
        let mut config = ProfileConfig::default();
        let mut p = project("alpha", ProjectCategory::WebApplication);
        p.tech = vec!["Rust".to_string(), "React".to_string()];
        p.live_url = "https://alpha.example.com".to_string();
        config.projects = vec![p];
        let output = all_projects(&config);
        assert!(output.contains("- **alpha** - [Repo](https://github.com/x/alpha) | [Live Demo](https://alpha.example.com)"));
        assert!(output.contains("  - _Tech: Rust, React_"));
    }

    #[test]
    fn test_box_style_uses_details_block() {
        let mut config = ProfileConfig::default();
        config.project_style = ProjectStyle::Box;
        config.projects = vec![project("alpha", ProjectCategory::WebApplication)];
        let output = all_projects(&config);
        assert!(output.contains("<details>"));
        assert!(output.contains("<summary>**alpha**"));
    }

    #[test]
    fn test_box_with_thumbnail_renders_table() {
        let mut config = ProfileConfig::default();
        config.project_style = ProjectStyle::Box;
        let mut p = project("alpha", ProjectCategory::WebApplication);
        p.thumbnail_url = "https://img.example.com/a.png".to_string();
        config.projects = vec![p];
        let output = all_projects(&config);
        assert!(output.contains("<table>"));
        assert!(output.contains("alt=\"alpha thumbnail\""));
        // Thumbnail links to the repo when no live URL is set
        assert!(output.contains("href=\"https://github.com/x/alpha\""));
    }
}
