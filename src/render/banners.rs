//! Banner sections: inline SVG rendered into base64 data URIs so the output
//! document stays a single self-contained file.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::catalog::header_background;
use crate::profile::ProfileConfig;

fn svg_data_uri(alt: &str, svg: &str) -> String {
    format!("![{alt}](data:image/svg+xml;base64,{})", STANDARD.encode(svg.trim()))
}

/// AI banner: the generated image (when present) under a dark scrim with the
/// title and subtitle overlaid; a flat placeholder card otherwise.
pub fn main_header(config: &ProfileConfig) -> String {
    let header = &config.main_header;
    if !header.enabled {
        return String::new();
    }

    let (ar_w, ar_h) = header.ai_aspect_ratio.parts();
    let width: u32 = 1200;
    let height = (f64::from(width) / f64::from(ar_w) * f64::from(ar_h)).round() as u32;

    let backdrop = if header.generated_image_url.is_empty() {
        format!(
            "<rect width=\"{width}\" height=\"{height}\" fill=\"#0d1117\" />\
             <text x=\"50%\" y=\"50%\" dominant-baseline=\"middle\" text-anchor=\"middle\" \
             class=\"subtitle\">Generate an AI image to see it here</text>"
        )
    } else {
        format!(
            "<image href=\"{}\" x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" \
             preserveAspectRatio=\"xMidYMid slice\" />",
            header.generated_image_url
        )
    };

    let svg = format!(
        r#"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" fill="none" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
  <style>
    .title {{ font: 600 60px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif; fill: #fff; text-shadow: 2px 2px 6px rgba(0,0,0,0.8); }}
    .subtitle {{ font: 400 30px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif; fill: #e0e0e0; text-shadow: 1px 1px 4px rgba(0,0,0,0.9); }}
  </style>
  {backdrop}
  <rect x="0" y="0" width="{width}" height="{height}" fill="rgba(0,0,0,0.25)"/>
  <text x="50%" y="45%" dominant-baseline="middle" text-anchor="middle" class="title">{title}</text>
  <text x="50%" y="65%" dominant-baseline="middle" text-anchor="middle" class="subtitle">{subtitle}</text>
</svg>"#,
        title = header.title,
        subtitle = header.subtitle,
    );
    svg_data_uri("Main Banner", &svg)
}

/// Template banner: a fixed 800x200 card over one of the catalog backgrounds,
/// greeting line composed from the banner title plus the profile name.
pub fn profile_header(config: &ProfileConfig) -> String {
    let header = &config.profile_header;
    if !header.enabled {
        return String::new();
    }

    let background = header_background(&header.background);
    let svg = format!(
        r#"<svg width="800" height="200" viewBox="0 0 800 200" fill="none" xmlns="http://www.w3.org/2000/svg">
  <style>
    .title {{ font: 600 45px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif; fill: #fff; text-shadow: 2px 2px 4px rgba(0,0,0,0.3); }}
    .subtitle {{ font: 400 22px 'Segoe UI', Ubuntu, "Helvetica Neue", Sans-Serif; fill: #c9d1d9; text-shadow: 1px 1px 2px rgba(0,0,0,0.5); }}
  </style>
  <defs>{defs}</defs>
  <rect width="800" height="200" fill="{bg_color}"/>
  <rect width="800" height="200" fill="{fill}"/>
  <text x="50%" y="45%" dominant-baseline="middle" text-anchor="middle" class="title">{title} {name}</text>
  <text x="50%" y="65%" dominant-baseline="middle" text-anchor="middle" class="subtitle">{subtitle}</text>
</svg>"#,
        defs = background.svg_defs,
        bg_color = background.bg_color,
        fill = background.fill,
        title = header.title,
        name = config.name,
        subtitle = header.subtitle,
    );
    svg_data_uri("Profile Header", &svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::AspectRatio;

    #[test]
    fn test_disabled_banners_render_nothing() {
        let mut config = ProfileConfig::default();
        config.main_header.enabled = false;
        config.profile_header.enabled = false;
        assert_eq!(main_header(&config), "");
        assert_eq!(profile_header(&config), "");
    }

    #[test]
    fn test_main_banner_is_data_uri() {
        let config = ProfileConfig::default();
        let output = main_header(&config);
        assert!(output.starts_with("![Main Banner](data:image/svg+xml;base64,"));
        assert!(output.ends_with(')'));
    }

    #[test]
    fn test_main_banner_height_follows_aspect_ratio() {
        let mut config = ProfileConfig::default();
        config.main_header.ai_aspect_ratio = AspectRatio::Standard;
        let encoded = main_header(&config);
        let b64 = encoded
            .trim_start_matches("![Main Banner](data:image/svg+xml;base64,")
            .trim_end_matches(')');
        let svg = String::from_utf8(STANDARD.decode(b64).unwrap()).unwrap();
        // 1200 * 3/4 = 900
        assert!(svg.contains(r#"width="1200" height="900""#));
    }

    #[test]
    fn test_profile_banner_embeds_name() {
        let mut config = ProfileConfig::default();
        config.name = "Ada".to_string();
        let encoded = profile_header(&config);
        let b64 = encoded
            .trim_start_matches("![Profile Header](data:image/svg+xml;base64,")
            .trim_end_matches(')');
        let svg = String::from_utf8(STANDARD.decode(b64).unwrap()).unwrap();
        assert!(svg.contains("Hi 👋, I'm Ada"));
    }

    #[test]
    fn test_unknown_background_falls_back() {
        let mut config = ProfileConfig::default();
        config.profile_header.background = "no-such-background".to_string();
        // Falls back to the first catalog entry instead of failing
        assert!(!profile_header(&config).is_empty());
    }
}
