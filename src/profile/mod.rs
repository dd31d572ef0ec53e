//! Profile configuration data model.
//!
//! `ProfileConfig` is the single structured record the whole tool operates
//! on: every editable field, fully defaulted, serialized with camelCase
//! names so exported snapshots match the historical `readme-config.json`
//! layout byte for byte.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Skill rendering style for the tech-stack section. The variants are
/// mutually exclusive; the serialized names are the user-facing style ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkillStyle {
    #[default]
    Badge,
    BadgePlastic,
    BadgeFlat,
    BadgeFlatSquare,
    BadgeSocial,
    Icon,
    IconGrid,
    Star,
    IconText,
    Table,
    Pills,
    ListBullet,
    ListComma,
    ListDot,
    ListPipe,
    ListNewline,
}

/// Rendering style for the social links section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialStyle {
    #[default]
    Badge,
    Icon,
    List,
}

/// Footer wrapper style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Simple,
    #[default]
    Card,
    Centered,
}

/// Item layout for project entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStyle {
    #[default]
    List,
    Box,
}

/// Stats section mode: independent cards or one combined metrics image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsCardType {
    #[default]
    Standard,
    Advanced,
}

/// Fixed project grouping, rendered in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "Static Website")]
    StaticWebsite,
    #[default]
    #[serde(rename = "Web Application")]
    WebApplication,
    #[serde(rename = "Console Application")]
    ConsoleApplication,
    #[serde(rename = "GUI Application")]
    GuiApplication,
    #[serde(rename = "Game")]
    Game,
    #[serde(rename = "Script")]
    Script,
    #[serde(rename = "Research")]
    Research,
    #[serde(rename = "Live Service / API")]
    LiveServiceApi,
    #[serde(rename = "Other")]
    Other,
}

impl ProjectCategory {
    /// All categories in display order.
    pub const ALL: [ProjectCategory; 9] = [
        ProjectCategory::StaticWebsite,
        ProjectCategory::WebApplication,
        ProjectCategory::ConsoleApplication,
        ProjectCategory::GuiApplication,
        ProjectCategory::Game,
        ProjectCategory::Script,
        ProjectCategory::Research,
        ProjectCategory::LiveServiceApi,
        ProjectCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::StaticWebsite => "Static Website",
            ProjectCategory::WebApplication => "Web Application",
            ProjectCategory::ConsoleApplication => "Console Application",
            ProjectCategory::GuiApplication => "GUI Application",
            ProjectCategory::Game => "Game",
            ProjectCategory::Script => "Script",
            ProjectCategory::Research => "Research",
            ProjectCategory::LiveServiceApi => "Live Service / API",
            ProjectCategory::Other => "Other",
        }
    }
}

/// Aspect ratio for the generated banner image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "9:16")]
    Vertical,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    /// Width:height ratio parts.
    pub fn parts(&self) -> (u32, u32) {
        match self {
            AspectRatio::Square => (1, 1),
            AspectRatio::Widescreen => (16, 9),
            AspectRatio::Vertical => (9, 16),
            AspectRatio::Standard => (4, 3),
            AspectRatio::Portrait => (3, 4),
        }
    }

    /// The remote image API's aspect-ratio parameter.
    pub fn api_value(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Widescreen => "16:9",
            AspectRatio::Vertical => "9:16",
            AspectRatio::Standard => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }
}

/// One named, toggle-able and reorderable block of the output document.
/// Presence in `section_order` controls both inclusion and position.
/// Unknown identifiers in imported snapshots collapse to `Unknown`, which
/// renders nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    MainHeaderBanner,
    ProfileHeaderBanner,
    Appearance,
    AiAssistant,
    BasicInfo,
    MyMission,
    GithubStats,
    GithubAnalytics,
    Socials,
    TechStack,
    WorkExperience,
    Projects,
    FeaturedProjects,
    Volunteering,
    Education,
    Certifications,
    Research,
    Awards,
    Publications,
    Talks,
    Languages,
    Hobbies,
    Hackathons,
    ProblemSolving,
    SupportMe,
    BlogPosts,
    CustomHtml,
    Footer,
    Settings,
    SectionLayout,
    #[serde(other)]
    Unknown,
}

/// AI-generated banner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainHeaderConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    pub ai_prompt: String,
    pub ai_style: String,
    pub ai_effect: String,
    pub ai_color: String,
    pub ai_motion: String,
    pub ai_aspect_ratio: AspectRatio,
    /// Data URI of the generated image; empty until generation has run.
    pub generated_image_url: String,
}

impl Default for MainHeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Welcome to my Profile!".to_string(),
            subtitle: "Showcasing my journey in code".to_string(),
            ai_prompt: "A majestic cat astronaut floating in a galaxy of code, digital art"
                .to_string(),
            ai_style: "Digital Art".to_string(),
            ai_effect: "Cinematic".to_string(),
            ai_color: "Vibrant".to_string(),
            ai_motion: "Serene".to_string(),
            ai_aspect_ratio: AspectRatio::Widescreen,
            generated_image_url: String::new(),
        }
    }
}

/// Template-background banner configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileHeaderConfig {
    pub enabled: bool,
    pub title: String,
    pub subtitle: String,
    /// Id into the header background catalog.
    pub background: String,
}

impl Default for ProfileHeaderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Hi 👋, I'm".to_string(),
            subtitle: "A Passionate Developer".to_string(),
            background: "gradient-1".to_string(),
        }
    }
}

/// Icon styling for the icon/list social styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialIconStyle {
    pub size: u32,
    pub background_color: String,
    pub border_width: u32,
    pub border_color: String,
    pub border_radius: u32,
}

impl Default for SocialIconStyle {
    fn default() -> Self {
        Self {
            size: 32,
            background_color: "161b22".to_string(),
            border_width: 1,
            border_color: "30363d".to_string(),
            border_radius: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionStyleKind {
    #[default]
    Default,
    Card,
}

/// Card styling applied by embedding frontends; carried in the snapshot for
/// round-trip fidelity, not consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStyleConfig {
    pub style: SectionStyleKind,
    pub card_background_color: String,
    pub card_border_color: String,
    pub card_border_radius: u32,
}

impl Default for SectionStyleConfig {
    fn default() -> Self {
        Self {
            style: SectionStyleKind::Default,
            card_background_color: "161b22".to_string(),
            card_border_color: "30363d".to_string(),
            card_border_radius: 6,
        }
    }
}

/// Toggle set for the advanced (combined-metrics) stats mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedMetrics {
    pub languages: bool,
    pub habits: bool,
    pub isocalendar: bool,
    pub skyline: bool,
}

impl Default for AdvancedMetrics {
    fn default() -> Self {
        Self { languages: true, habits: true, isocalendar: false, skyline: false }
    }
}

// Repeatable entry records. Entries are addressed by position; reordering is
// only supported at the section level, never within a list.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperience {
    pub company: String,
    pub title: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub repo_url: String,
    pub live_url: String,
    pub tech: Vec<String>,
    pub is_top_project: bool,
    pub category: ProjectCategory,
    pub thumbnail_url: String,
    pub custom_badges: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteering {
    pub organization: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Award {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchEntry {
    pub title: String,
    pub publication: String,
    pub date: String,
    pub url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Talk {
    pub title: String,
    pub event: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hackathon {
    pub name: String,
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemSolvingProfile {
    pub platform: String,
    pub username: String,
}

/// Category name → selected skill names. Insertion order within a category
/// is preserved; duplicates within a category are forbidden by the store.
pub type TechStack = BTreeMap<String, Vec<String>>;

/// The complete document-under-construction. Always fully defined: every
/// field has a default, and deserialization fills gaps from those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    pub main_header: MainHeaderConfig,
    pub profile_header: ProfileHeaderConfig,
    /// Scratch buffer for resume analysis; never rendered.
    pub resume_text: String,
    pub name: String,
    pub github_user: String,
    pub bio: String,
    pub my_mission: String,
    pub tech_stack: TechStack,
    pub skill_style: SkillStyle,
    pub badge_color: String,
    pub socials: Vec<SocialLink>,
    pub social_style: SocialStyle,
    pub social_icon_style: SocialIconStyle,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<Project>,
    pub project_style: ProjectStyle,
    pub volunteering: Vec<Volunteering>,
    pub education: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub research: Vec<ResearchEntry>,
    pub awards: Vec<Award>,
    pub publications: Vec<Publication>,
    pub talks: Vec<Talk>,
    pub languages: Vec<String>,
    pub hobbies: Vec<String>,
    pub buy_me_a_coffee: String,
    pub kofi: String,
    pub blog_url: String,
    pub custom_html: String,
    pub footer_text: String,
    pub footer_style: FooterStyle,
    pub footer_card_width: u32,
    pub footer_card_border_radius: u32,
    pub footer_card_border_color: String,
    pub hackathons: Vec<Hackathon>,
    pub problem_solving: Vec<ProblemSolvingProfile>,
    pub show_visitors: bool,
    pub show_stats: bool,
    pub show_top_langs: bool,
    pub show_trophies: bool,
    pub show_pinned_repos: bool,
    pub show_profile_summary: bool,
    pub show_productive_time: bool,
    pub github_utc_offset: String,
    pub show_streak_stats: bool,
    pub show_activity_graph: bool,
    pub show_wakatime_badge: bool,
    pub show_wakatime_chart: bool,
    pub wakatime_user: String,
    pub stats_theme: String,
    pub show_border: bool,
    pub border_radius: u32,
    pub section_order: Vec<SectionKey>,
    pub section_style_config: SectionStyleConfig,
    pub stats_card_type: StatsCardType,
    pub border_color: String,
    pub advanced_metrics: AdvancedMetrics,
}

fn default_tech_stack() -> TechStack {
    let mut stack: TechStack = crate::catalog::TECH_CATALOG
        .iter()
        .map(|(category, _)| (category.to_string(), Vec::new()))
        .collect();
    let preselect = [
        ("Programming Languages", vec!["JavaScript", "Python"]),
        ("Frontend Development", vec!["React", "HTML5", "CSS3"]),
        ("Backend Development", vec!["Node.js"]),
        ("DevOps", vec!["Git"]),
    ];
    for (category, skills) in preselect {
        stack.insert(
            category.to_string(),
            skills.into_iter().map(String::from).collect(),
        );
    }
    stack
}

fn default_section_order() -> Vec<SectionKey> {
    use SectionKey::*;
    vec![
        MainHeaderBanner,
        ProfileHeaderBanner,
        Appearance,
        BasicInfo,
        MyMission,
        GithubStats,
        GithubAnalytics,
        Socials,
        TechStack,
        WorkExperience,
        FeaturedProjects,
        Projects,
        Volunteering,
        Education,
        Certifications,
        Research,
        Awards,
        Publications,
        Talks,
        Languages,
        Hobbies,
        Hackathons,
        ProblemSolving,
        SupportMe,
        BlogPosts,
        CustomHtml,
        Footer,
    ]
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            main_header: MainHeaderConfig::default(),
            profile_header: ProfileHeaderConfig::default(),
            resume_text: String::new(),
            name: "Your Name".to_string(),
            github_user: "your-github-username".to_string(),
            bio: "🚀 A passionate developer exploring the universe of code.".to_string(),
            my_mission: "To leverage technology to build innovative solutions that solve \
                         real-world problems and drive positive change."
                .to_string(),
            tech_stack: default_tech_stack(),
            skill_style: SkillStyle::Badge,
            badge_color: "a855f7".to_string(),
            socials: vec![
                SocialLink {
                    platform: "LinkedIn".to_string(),
                    url: "https://linkedin.com/in/your-profile".to_string(),
                    icon: "linkedin".to_string(),
                },
                SocialLink {
                    platform: "Twitter".to_string(),
                    url: "https://twitter.com/your-handle".to_string(),
                    icon: "x".to_string(),
                },
            ],
            social_style: SocialStyle::Badge,
            social_icon_style: SocialIconStyle::default(),
            work_experience: Vec::new(),
            projects: Vec::new(),
            project_style: ProjectStyle::List,
            volunteering: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            research: Vec::new(),
            awards: Vec::new(),
            publications: Vec::new(),
            talks: Vec::new(),
            languages: vec![
                "English (Fluent)".to_string(),
                "Spanish (Conversational)".to_string(),
            ],
            hobbies: vec!["Coding".to_string(), "Reading".to_string(), "Hiking".to_string()],
            buy_me_a_coffee: String::new(),
            kofi: String::new(),
            blog_url: String::new(),
            custom_html: String::new(),
            footer_text: "This README was generated with ❤️ by \
                          [README Forge](https://github.com/readme-forge/readme-forge)"
                .to_string(),
            footer_style: FooterStyle::Card,
            footer_card_width: 80,
            footer_card_border_radius: 6,
            footer_card_border_color: "a855f7".to_string(),
            hackathons: Vec::new(),
            problem_solving: Vec::new(),
            show_visitors: true,
            show_stats: true,
            show_top_langs: true,
            show_trophies: true,
            show_pinned_repos: true,
            show_profile_summary: true,
            show_productive_time: true,
            github_utc_offset: "0".to_string(),
            show_streak_stats: true,
            show_activity_graph: true,
            show_wakatime_badge: false,
            show_wakatime_chart: false,
            wakatime_user: String::new(),
            stats_theme: "tokyonight".to_string(),
            show_border: false,
            border_radius: 10,
            section_order: default_section_order(),
            section_style_config: SectionStyleConfig::default(),
            stats_card_type: StatsCardType::Standard,
            border_color: "a855f7".to_string(),
            advanced_metrics: AdvancedMetrics::default(),
        }
    }
}

impl ProfileConfig {
    /// Load a snapshot from a JSON file, layering it over full defaults.
    /// Unknown fields are discarded; missing fields fall back to defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save the snapshot, pretty-printed, serializing the record verbatim.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the given path, or defaults when the file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_fully_defined() {
        let config = ProfileConfig::default();
        assert!(config.main_header.enabled);
        assert_eq!(config.tech_stack["Programming Languages"], vec!["JavaScript", "Python"]);
        assert!(config.tech_stack.contains_key("Game Engines"));
        assert_eq!(config.section_order[0], SectionKey::MainHeaderBanner);
        assert_eq!(config.stats_theme, "tokyonight");
    }

    #[test]
    fn test_json_round_trip() {
        let config = ProfileConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: ProfileConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_camel_case_layout() {
        let json = serde_json::to_value(ProfileConfig::default()).unwrap();
        assert!(json.get("githubUser").is_some());
        assert!(json.get("buyMeACoffee").is_some());
        assert!(json.get("sectionOrder").is_some());
        assert!(json.get("github_user").is_none());
    }

    #[test]
    fn test_partial_snapshot_fills_from_defaults() {
        let config: ProfileConfig =
            serde_json::from_str(r#"{"bio": "Hello", "unknownField": 42}"#).unwrap();
        assert_eq!(config.bio, "Hello");
        assert_eq!(config.name, "Your Name");
        assert_eq!(config.footer_card_width, 80);
    }

    #[test]
    fn test_unknown_section_key_tolerated() {
        let keys: Vec<SectionKey> =
            serde_json::from_str(r#"["basicInfo", "notARealSection"]"#).unwrap();
        assert_eq!(keys, vec![SectionKey::BasicInfo, SectionKey::Unknown]);
    }

    #[test]
    fn test_skill_style_ids() {
        assert_eq!(
            serde_json::to_string(&SkillStyle::BadgeFlatSquare).unwrap(),
            "\"badge-flat-square\""
        );
        let style: SkillStyle = serde_json::from_str("\"list-comma\"").unwrap();
        assert_eq!(style, SkillStyle::ListComma);
    }

    #[test]
    fn test_project_category_labels() {
        assert_eq!(
            serde_json::to_string(&ProjectCategory::LiveServiceApi).unwrap(),
            "\"Live Service / API\""
        );
        assert_eq!(ProjectCategory::ALL.len(), 9);
    }
}
