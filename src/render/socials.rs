//! Social links section in its three styles: shield badges, styled inline
//! icons, and an icon-plus-link list.

use crate::catalog::social_platform;
use crate::profile::{ProfileConfig, SocialStyle};
use crate::render::encode_component;

pub fn socials(config: &ProfileConfig) -> String {
    let visible: Vec<_> =
        config.socials.iter().filter(|s| !s.url.is_empty() && !s.platform.is_empty()).collect();
    if visible.is_empty() {
        return String::new();
    }

    let content = match config.social_style {
        SocialStyle::Badge => visible
            .iter()
            .map(|s| {
                let info = social_platform(&s.platform);
                let color = info.map(|p| p.color).unwrap_or("0D1117");
                let logo = info.map(|p| p.icon.to_string()).unwrap_or_else(|| s.icon.clone());
                format!(
                    "[![{platform}](https://img.shields.io/badge/{encoded}-{color}?style=for-the-badge&logo={logo}&logoColor=white)]({url})",
                    platform = s.platform,
                    encoded = encode_component(&s.platform),
                    url = s.url,
                )
            })
            .collect::<Vec<_>>()
            .join(" "),
        SocialStyle::Icon => {
            let style = &config.social_icon_style;
            let padding = (f64::from(style.size) * 0.1).round() as u32;
            let container = format!(
                "display: inline-block; vertical-align: middle; padding: {padding}px; \
                 background-color: #{bg}; border: {bw}px solid #{bc}; \
                 border-radius: {br}px; margin: 4px; line-height: 0;",
                bg = style.background_color,
                bw = style.border_width,
                bc = style.border_color,
                br = style.border_radius,
            );
            let icons = visible
                .iter()
                .map(|s| {
                    let logo = social_platform(&s.platform)
                        .map(|p| p.icon.to_string())
                        .unwrap_or_else(|| s.icon.clone());
                    format!(
                        "<a href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"{container}\"><img src=\"https://cdn.jsdelivr.net/npm/simple-icons/icons/{logo}.svg\" alt=\"{platform}\" height=\"{size}\" width=\"{size}\" /></a>",
                        url = s.url,
                        platform = s.platform,
                        size = style.size,
                    )
                })
                .collect::<Vec<_>>()
                .join(" \n");
            format!("<p align=\"left\">{icons}</p>")
        }
        SocialStyle::List => {
            let style = &config.social_icon_style;
            let icon_size = (f64::from(style.size) * 0.6).round() as u32;
            let padding = (f64::from(style.size) * 0.1).round() as u32;
            let container = format!(
                "display: inline-block; vertical-align: middle; padding: {padding}px; \
                 background-color: #{bg}; border: {bw}px solid #{bc}; \
                 border-radius: {br}px; margin-right: 8px; line-height: 0;",
                bg = style.background_color,
                bw = style.border_width,
                bc = style.border_color,
                br = style.border_radius,
            );
            visible
                .iter()
                .map(|s| {
                    let logo = social_platform(&s.platform)
                        .map(|p| p.icon.to_string())
                        .unwrap_or_else(|| s.icon.clone());
                    format!(
                        "- <span style=\"{container}\"><img src=\"https://cdn.jsdelivr.net/npm/simple-icons/icons/{logo}.svg\" height=\"{icon_size}\" width=\"{icon_size}\" alt=\"{platform}\" /></span> [{platform}]({url})",
                        platform = s.platform,
                        url = s.url,
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
    };

    format!("### 🤝 Let's Connect\n\n{content}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::SocialLink;

    fn with_socials(style: SocialStyle) -> ProfileConfig {
        let mut config = ProfileConfig::default();
        config.social_style = style;
        config.socials = vec![
            SocialLink {
                platform: "GitHub".to_string(),
                url: "https://github.com/x".to_string(),
                icon: "github".to_string(),
            },
            SocialLink {
                platform: "Mastodon".to_string(),
                url: "https://hachyderm.io/@x".to_string(),
                icon: "mastodon".to_string(),
            },
        ];
        config
    }

    #[test]
    fn test_entries_without_url_hidden() {
        let mut config = with_socials(SocialStyle::Badge);
        config.socials[1].url = String::new();
        let output = socials(&config);
        assert!(output.contains("GitHub"));
        assert!(!output.contains("Mastodon"));
    }

    #[test]
    fn test_badge_uses_catalog_color_or_fallback() {
        let output = socials(&with_socials(SocialStyle::Badge));
        // Known platform gets its brand color, unknown falls back
        assert!(output.contains("GitHub-181717?style=for-the-badge&logo=github"));
        assert!(output.contains("Mastodon-0D1117?style=for-the-badge&logo=mastodon"));
    }

    #[test]
    fn test_icon_style_wraps_in_paragraph() {
        let output = socials(&with_socials(SocialStyle::Icon));
        assert!(output.contains("<p align=\"left\">"));
        assert!(output.contains("simple-icons/icons/github.svg"));
    }

    #[test]
    fn test_list_style_links_names() {
        let output = socials(&with_socials(SocialStyle::List));
        assert!(output.contains("- <span"));
        assert!(output.contains("[GitHub](https://github.com/x)"));
    }

    #[test]
    fn test_no_visible_socials_renders_nothing() {
        let mut config = ProfileConfig::default();
        config.socials.clear();
        assert_eq!(socials(&config), "");
    }
}
