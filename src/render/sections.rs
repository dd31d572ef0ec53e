//! The plain content sections: text blocks, entry lists, support links, and
//! the footer wrappers. Each formatter filters incomplete entries and returns
//! an empty string when nothing remains.

use crate::catalog::problem_platform;
use crate::profile::{FooterStyle, ProfileConfig};
use crate::render::{bullet_lines, encode_component};

pub fn basic_info(config: &ProfileConfig) -> String {
    if config.bio.is_empty() {
        return String::new();
    }
    format!("## Hi there 👋\n\n{}", config.bio)
}

pub fn mission(config: &ProfileConfig) -> String {
    if config.my_mission.is_empty() {
        return String::new();
    }
    format!("### 🎯 My Mission\n\n{}", config.my_mission)
}

fn section(heading: &str, content: String) -> String {
    if content.is_empty() {
        String::new()
    } else {
        format!("{heading}\n\n{content}")
    }
}

pub fn work_experience(config: &ProfileConfig) -> String {
    let content = config
        .work_experience
        .iter()
        .filter(|w| !w.title.is_empty() && !w.company.is_empty())
        .map(|w| {
            format!(
                "**{}** at **{}** (_{}_)\n{}",
                w.title,
                w.company,
                w.duration,
                bullet_lines(&w.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    section("### 💼 Work Experience", content)
}

pub fn volunteering(config: &ProfileConfig) -> String {
    let content = config
        .volunteering
        .iter()
        .filter(|v| !v.organization.is_empty() && !v.role.is_empty())
        .map(|v| {
            format!(
                "**{}** at **{}** (_{}_)\n{}",
                v.role,
                v.organization,
                v.duration,
                bullet_lines(&v.description)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    section("### 🤝 Volunteering", content)
}

pub fn education(config: &ProfileConfig) -> String {
    let content = config
        .education
        .iter()
        .filter(|e| !e.institution.is_empty())
        .map(|e| {
            let degree = if e.degree.is_empty() { "Degree" } else { &e.degree };
            let duration = if e.duration.is_empty() { "Year" } else { &e.duration };
            format!("- **{degree}** from **{}** (_{duration}_)", e.institution)
        })
        .collect::<Vec<_>>()
        .join("\n");
    section("### 🎓 Education", content)
}

pub fn certifications(config: &ProfileConfig) -> String {
    let content = config
        .certifications
        .iter()
        .filter(|c| !c.name.is_empty())
        .map(|c| {
            let link = if c.url.is_empty() {
                c.name.clone()
            } else {
                format!("[{}]({})", c.name, c.url)
            };
            format!("- **{link}** from _{}_ ({})", c.issuer, c.date)
        })
        .collect::<Vec<_>>()
        .join("\n");
    section("### 📜 Certifications", content)
}

pub fn research(config: &ProfileConfig) -> String {
    let content = config
        .research
        .iter()
        .filter(|r| !r.title.is_empty())
        .map(|r| {
            format!(
                "- **[{}]({})** - _{}_ ({})\n  - {}",
                r.title, r.url, r.publication, r.date, r.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");
    section("### 🔬 Research", content)
}

pub fn awards(config: &ProfileConfig) -> String {
    let content = config
        .awards
        .iter()
        .filter(|a| !a.name.is_empty())
        .map(|a| format!("- **{}** from _{}_ ({})", a.name, a.issuer, a.date))
        .collect::<Vec<_>>()
        .join("\n");
    section("### 🏆 Awards & Recognition", content)
}

pub fn publications(config: &ProfileConfig) -> String {
    let content = config
        .publications
        .iter()
        .filter(|p| !p.title.is_empty())
        .map(|p| format!("- [{}]({}) - _{}_ ({})", p.title, p.url, p.journal, p.date))
        .collect::<Vec<_>>()
        .join("\n");
    section("### 📚 Publications", content)
}

pub fn talks(config: &ProfileConfig) -> String {
    let content = config
        .talks
        .iter()
        .filter(|t| !t.title.is_empty())
        .map(|t| format!("- [{}]({}) at **{}** ({})", t.title, t.url, t.event, t.date))
        .collect::<Vec<_>>()
        .join("\n");
    section("### 🎤 Talks & Presentations", content)
}

pub fn languages(config: &ProfileConfig) -> String {
    if config.languages.is_empty() {
        return String::new();
    }
    format!("### 🗣️ Languages\n\n- {}", config.languages.join("\n- "))
}

pub fn hobbies(config: &ProfileConfig) -> String {
    if config.hobbies.is_empty() {
        return String::new();
    }
    format!("### 🎨 Hobbies & Interests\n\n- {}", config.hobbies.join("\n- "))
}

pub fn hackathons(config: &ProfileConfig) -> String {
    let content = config
        .hackathons
        .iter()
        .filter(|h| !h.name.is_empty())
        .map(|h| {
            let mut entry = format!("- **{}**", h.name);
            if !h.description.is_empty() {
                entry.push_str(&format!("\n  - {}", h.description));
            }
            if !h.link.is_empty() {
                entry.push_str(&format!("\n  - [Project Link]({})", h.link));
            }
            entry
        })
        .collect::<Vec<_>>()
        .join("\n");
    section("### 🏆 Hackathons", content)
}

pub fn problem_solving(config: &ProfileConfig) -> String {
    let content = config
        .problem_solving
        .iter()
        .filter(|p| !p.username.is_empty())
        .filter_map(|p| {
            let platform = problem_platform(&p.platform)?;
            Some(format!(
                "[![{name}](https://img.shields.io/badge/{name}-0D1117?style=for-the-badge&logo={icon}&logoColor=white)]({url}{user})",
                name = p.platform,
                icon = platform.icon,
                url = platform.url,
                user = p.username,
            ))
        })
        .collect::<Vec<_>>()
        .join(" ");
    section("### 🚀 Problem Solving", content)
}

pub fn support_me(config: &ProfileConfig) -> String {
    let mut links = Vec::new();
    if !config.buy_me_a_coffee.is_empty() {
        links.push(format!(
            "[![Buy Me A Coffee](https://img.shields.io/badge/{label}-FFDD00?style=for-the-badge&logo=buy-me-a-coffee&logoColor=black)](https://www.buymeacoffee.com/{})",
            config.buy_me_a_coffee,
            label = encode_component("Buy Me A Coffee"),
        ));
    }
    if !config.kofi.is_empty() {
        links.push(format!(
            "[![Ko-Fi](https://img.shields.io/badge/Ko--fi-F16061?style=for-the-badge&logo=ko-fi&logoColor=white)](https://ko-fi.com/{})",
            config.kofi,
        ));
    }
    section("### 🙏 Support Me", links.join(" "))
}

/// Marker pair only; the post-pass substitutes or strips it.
pub fn blog_posts(config: &ProfileConfig) -> String {
    if config.blog_url.is_empty() {
        return String::new();
    }
    "### 📰 My Latest Blog Posts\n\n<!-- BLOG-POST-LIST:START -->\n<!-- BLOG-POST-LIST:END -->"
        .to_string()
}

pub fn custom_html(config: &ProfileConfig) -> String {
    config.custom_html.clone()
}

pub fn footer(config: &ProfileConfig) -> String {
    if config.footer_text.is_empty() {
        return String::new();
    }
    match config.footer_style {
        FooterStyle::Card => {
            let styles = format!(
                "width: {}%; margin: 20px auto; padding: 15px; border: 2px solid #{}; border-radius: {}px; background-color: #161b22; text-align: center;",
                config.footer_card_width,
                config.footer_card_border_color,
                config.footer_card_border_radius,
            );
            format!(
                "<div align=\"center\">\n  <div style=\"{styles}\">\n    {}\n  </div>\n</div>",
                config.footer_text
            )
        }
        FooterStyle::Centered => format!("<p align=\"center\">{}</p>", config.footer_text),
        FooterStyle::Simple => {
            format!("\n---\n\n<p align=\"center\">{}</p>", config.footer_text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Certification, Education, ProblemSolvingProfile, WorkExperience};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_work_requires_title_and_company() {
        let mut config = ProfileConfig::default();
        config.work_experience = vec![
            WorkExperience { title: "Engineer".to_string(), ..Default::default() },
            WorkExperience {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                duration: "2021".to_string(),
                description: "Shipped things\nMentored folks".to_string(),
            },
        ];
        let output = work_experience(&config);
        assert_eq!(
            output,
            "### 💼 Work Experience\n\n**Engineer** at **Acme** (_2021_)\n- Shipped things\n- Mentored folks"
        );
    }

    #[test]
    fn test_education_placeholders() {
        let mut config = ProfileConfig::default();
        config.education = vec![Education {
            institution: "MIT".to_string(),
            ..Default::default()
        }];
        assert_eq!(education(&config), "### 🎓 Education\n\n- **Degree** from **MIT** (_Year_)");
    }

    #[test]
    fn test_certification_links_only_with_url() {
        let mut config = ProfileConfig::default();
        config.certifications = vec![
            Certification {
                name: "Cert A".to_string(),
                issuer: "Org".to_string(),
                date: "2024".to_string(),
                url: String::new(),
            },
            Certification {
                name: "Cert B".to_string(),
                issuer: "Org".to_string(),
                date: "2024".to_string(),
                url: "https://example.com/b".to_string(),
            },
        ];
        let output = certifications(&config);
        assert!(output.contains("- **Cert A** from _Org_ (2024)"));
        assert!(output.contains("- **[Cert B](https://example.com/b)** from _Org_ (2024)"));
    }

    #[test]
    fn test_zero_entries_render_empty() {
        let config = ProfileConfig::default();
        assert_eq!(work_experience(&config), "");
        assert_eq!(awards(&config), "");
        assert_eq!(talks(&config), "");
        assert_eq!(hackathons(&config), "");
        assert_eq!(problem_solving(&config), "");
        assert_eq!(support_me(&config), "");
        assert_eq!(blog_posts(&config), "");
        assert_eq!(custom_html(&config), "");
    }

    #[test]
    fn test_problem_solving_unknown_platform_skipped() {
        let mut config = ProfileConfig::default();
        config.problem_solving = vec![
            ProblemSolvingProfile {
                platform: "LeetCode".to_string(),
                username: "x".to_string(),
            },
            ProblemSolvingProfile {
                platform: "NotAPlatform".to_string(),
                username: "y".to_string(),
            },
        ];
        let output = problem_solving(&config);
        assert!(output.contains("https://leetcode.com/u/x"));
        assert!(!output.contains("NotAPlatform"));
    }

    #[test]
    fn test_support_links() {
        let mut config = ProfileConfig::default();
        config.buy_me_a_coffee = "dev".to_string();
        config.kofi = "dev".to_string();
        let output = support_me(&config);
        assert!(output.contains("Buy%20Me%20A%20Coffee"));
        assert!(output.contains("https://www.buymeacoffee.com/dev"));
        assert!(output.contains("https://ko-fi.com/dev"));
    }

    #[test]
    fn test_footer_styles() {
        let mut config = ProfileConfig::default();
        config.footer_text = "Made with care".to_string();

        config.footer_style = FooterStyle::Centered;
        assert_eq!(footer(&config), "<p align=\"center\">Made with care</p>");

        config.footer_style = FooterStyle::Simple;
        assert_eq!(footer(&config), "\n---\n\n<p align=\"center\">Made with care</p>");

        config.footer_style = FooterStyle::Card;
        let card = footer(&config);
        assert!(card.contains("width: 80%"));
        assert!(card.contains("border: 2px solid #a855f7"));
        assert!(card.contains("Made with care"));
    }

    #[test]
    fn test_mission_empty_when_unset() {
        let mut config = ProfileConfig::default();
        config.my_mission = String::new();
        assert_eq!(mission(&config), "");
    }

    #[test]
    fn test_basic_info_empty_without_bio() {
        let mut config = ProfileConfig::default();
        config.bio = String::new();
        assert_eq!(basic_info(&config), "");
    }
}
