//! Stats sections composed from external card services. Every widget is an
//! image URL parameterized by the shared theme settings; nothing here fetches
//! anything.

use crate::catalog::stats_theme;
use crate::profile::{ProfileConfig, StatsCardType};

const ACCENT_COLOR: &str = "a855f7";

fn centered_block(heading: &str, lines: &str) -> String {
    let indented: Vec<String> = lines
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| format!("  {line}"))
        .collect();
    format!("{heading}\n\n<p align=\"center\">\n{}\n</p>", indented.join("\n"))
}

/// Combined-metrics image with per-plugin query flags.
fn advanced_stats(config: &ProfileConfig) -> String {
    let mut url = format!(
        "https://metrics.lecoq.io/{user}?template=classic&theme={theme}&config.timezone={tz}",
        user = config.github_user,
        theme = stats_theme(&config.stats_theme),
        tz = config.github_utc_offset,
    );
    url.push_str(
        "&base.header=true&base.activity=true&base.community=true&base.repositories=true&base.metadata=false",
    );
    let metrics = &config.advanced_metrics;
    if metrics.languages {
        url.push_str(
            "&languages=true&languages.limit=8&languages.sections=most-used&languages.indepth=true&languages.details=bytes-size,percentage&languages.colors=github",
        );
    }
    if metrics.habits {
        url.push_str("&habits=true&habits.from=200&habits.charts=true&habits.trim=true");
    }
    if metrics.isocalendar {
        url.push_str("&isocalendar=true&isocalendar.duration=half-year");
    }
    if metrics.skyline {
        url.push_str("&skyline=true");
    }

    centered_block(
        "### 📊 My GitHub Stats & Insights",
        &format!("<img src=\"{url}\" alt=\"GitHub Metrics\" />"),
    )
}

pub fn github_stats(config: &ProfileConfig) -> String {
    if config.github_user.is_empty() {
        return String::new();
    }
    if config.stats_card_type == StatsCardType::Advanced {
        return advanced_stats(config);
    }

    let user = &config.github_user;
    let theme = stats_theme(&config.stats_theme);
    let stats_params = format!(
        "&theme={theme}&hide_border={hide}&border_radius={radius}&show_icons=true&count_private=true&bg_color=0d1117&text_color=c9d1d9&title_color={ACCENT_COLOR}&icon_color={ACCENT_COLOR}&border_color={border}",
        hide = !config.show_border,
        radius = config.border_radius,
        border = config.border_color,
    );
    let summary_base = "https://github-profile-summary-cards.vercel.app/api/cards";

    let mut content = String::new();
    if config.show_visitors {
        content.push_str(&format!(
            "<img src=\"https://komarev.com/ghpvc/?username={user}&label=Profile%20Visitors&color={ACCENT_COLOR}&style=flat\" alt=\"Profile Visitors\" />\n"
        ));
    }
    if config.show_pinned_repos {
        content.push_str("<!-- PINNED-REPOS-START -->\n<!-- PINNED-REPOS-END -->\n");
    }
    if config.show_stats {
        content.push_str(&format!(
            "<img src=\"https://github-readme-stats.vercel.app/api?username={user}{stats_params}\" alt=\"GitHub Stats\" />\n"
        ));
    }
    if config.show_profile_summary {
        content.push_str(&format!(
            "<img src=\"{summary_base}/profile-details?username={user}&theme={theme}\" alt=\"GitHub Profile Summary\" />\n"
        ));
    }
    if config.show_top_langs {
        content.push_str(&format!(
            "<img src=\"https://github-readme-stats.vercel.app/api/top-langs/?username={user}{stats_params}&layout=compact\" alt=\"Top Languages\" />\n"
        ));
    }
    if config.show_productive_time {
        content.push_str(&format!(
            "<img src=\"{summary_base}/productive-time?username={user}&theme={theme}&utcOffset={tz}\" alt=\"Productive Time\" />\n",
            tz = config.github_utc_offset,
        ));
    }
    if config.show_streak_stats {
        content.push_str(&format!(
            "<img src=\"https://github-readme-streak-stats.herokuapp.com?user={user}&theme={theme}&hide_border={hide}&background=0d1117&border={border}&stroke={ACCENT_COLOR}&ring={ACCENT_COLOR}&fire={ACCENT_COLOR}&currStreakNum=ffffff&sideNums=ffffff&currStreakLabel=ffffff&sideLabels=ffffff&dates=ffffff\" alt=\"GitHub Streak\" />\n",
            hide = !config.show_border,
            border = config.border_color,
        ));
    }
    if config.show_trophies {
        content.push_str(&format!(
            "<img src=\"https://github-profile-trophy.vercel.app/?username={user}&theme=dracula&no-frame=true&no-bg=true&margin-w=4\" alt=\"GitHub Trophies\" />\n"
        ));
    }
    if config.show_wakatime_badge && !config.wakatime_user.is_empty() {
        content.push_str(&format!(
            "\n[![WakaTime](https://wakatime.com/badge/user/{waka}.svg)](https://wakatime.com/@{waka})\n",
            waka = config.wakatime_user,
        ));
    }

    if content.is_empty() {
        return String::new();
    }
    centered_block("### 📊 My GitHub Stats", &content)
}

pub fn github_analytics(config: &ProfileConfig) -> String {
    if config.github_user.is_empty() {
        return String::new();
    }

    let mut content = String::new();
    if config.show_activity_graph {
        content.push_str(&format!(
            "<img src=\"https://github-readme-activity-graph.vercel.app/graph?username={user}&bg_color=0d1117&color=ffffff&line={ACCENT_COLOR}&point=ffffff&area=true&hide_border=true\" alt=\"GitHub Activity Graph\" />\n",
            user = config.github_user,
        ));
    }
    if config.show_wakatime_chart && !config.wakatime_user.is_empty() {
        content.push_str(&format!(
            "<img src=\"https://github-readme-stats.vercel.app/api/wakatime?username={waka}&theme={theme}&hide_border={hide}&layout=compact&bg_color=0d1117&border_radius={radius}&border_color={border}\" alt=\"WakaTime Chart\" />\n",
            waka = config.wakatime_user,
            theme = stats_theme(&config.stats_theme),
            hide = !config.show_border,
            radius = config.border_radius,
            border = config.border_color,
        ));
    }

    if content.is_empty() {
        return String::new();
    }
    centered_block("### 📊 GitHub Analytics", &content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProfileConfig {
        let mut config = ProfileConfig::default();
        config.github_user = "octocat".to_string();
        config
    }

    #[test]
    fn test_no_user_no_stats() {
        let mut config = ProfileConfig::default();
        config.github_user = String::new();
        assert_eq!(github_stats(&config), "");
        assert_eq!(github_analytics(&config), "");
    }

    #[test]
    fn test_all_flags_off_renders_nothing() {
        let mut config = config();
        config.show_visitors = false;
        config.show_pinned_repos = false;
        config.show_stats = false;
        config.show_profile_summary = false;
        config.show_top_langs = false;
        config.show_productive_time = false;
        config.show_streak_stats = false;
        config.show_trophies = false;
        config.show_wakatime_badge = false;
        assert_eq!(github_stats(&config), "");
    }

    #[test]
    fn test_standard_cards_share_theme_params() {
        let config = config();
        let output = github_stats(&config);
        assert!(output.contains("username=octocat&theme=tokyonight&hide_border=true"));
        assert!(output.contains("title_color=a855f7"));
        assert!(output.contains("<p align=\"center\">"));
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let mut config = config();
        config.stats_theme = "definitely-not-a-theme".to_string();
        let output = github_stats(&config);
        assert!(output.contains("&theme=tokyonight&"));
        assert!(!output.contains("definitely-not-a-theme"));

        config.stats_card_type = StatsCardType::Advanced;
        let output = github_stats(&config);
        assert!(output.contains("theme=tokyonight"));
    }

    #[test]
    fn test_border_flag_inverts_hide_border() {
        let mut config = config();
        config.show_border = true;
        let output = github_stats(&config);
        assert!(output.contains("hide_border=false"));
    }

    #[test]
    fn test_advanced_mode_single_metrics_image() {
        let mut config = config();
        config.stats_card_type = StatsCardType::Advanced;
        let output = github_stats(&config);
        assert!(output.contains("### 📊 My GitHub Stats & Insights"));
        assert!(output.contains("https://metrics.lecoq.io/octocat?template=classic"));
        // Defaults: languages and habits on, isocalendar and skyline off
        assert!(output.contains("&languages=true"));
        assert!(output.contains("&habits=true"));
        assert!(!output.contains("&isocalendar=true"));
        assert!(!output.contains("&skyline=true"));
        assert!(!output.contains("komarev.com"));
    }

    #[test]
    fn test_wakatime_widgets_need_wakatime_user() {
        let mut config = config();
        config.show_activity_graph = false;
        config.show_wakatime_chart = true;
        config.wakatime_user = String::new();
        assert_eq!(github_analytics(&config), "");

        config.wakatime_user = "waka".to_string();
        let output = github_analytics(&config);
        assert!(output.contains("api/wakatime?username=waka"));
    }

    #[test]
    fn test_analytics_defaults_show_activity_graph() {
        let output = github_analytics(&config());
        assert!(output.contains("github-readme-activity-graph.vercel.app"));
    }
}
