//! Typed partial records for external input.
//!
//! AI responses and imported JSON never touch `ProfileConfig` directly: they
//! deserialize into `PartialProfile` (or one of the patch structs), which
//! maps recognized keys only. Anything unrecognized is discarded during
//! deserialization instead of being trusted into internal state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::profile::{
    AdvancedMetrics, AspectRatio, Award, Certification, Education, FooterStyle, Hackathon,
    MainHeaderConfig, ProblemSolvingProfile, ProfileConfig, ProfileHeaderConfig, Project,
    ProjectCategory, ProjectStyle, Publication, ResearchEntry, SectionKey, SectionStyleConfig,
    SectionStyleKind, SkillStyle, SocialIconStyle, SocialLink, SocialStyle, StatsCardType, Talk,
    TechStack, Volunteering, WorkExperience,
};

/// Shallow patch for the AI banner sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainHeaderPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub ai_prompt: Option<String>,
    pub ai_style: Option<String>,
    pub ai_effect: Option<String>,
    pub ai_color: Option<String>,
    pub ai_motion: Option<String>,
    pub ai_aspect_ratio: Option<AspectRatio>,
    pub generated_image_url: Option<String>,
}

impl MainHeaderPatch {
    pub fn apply(&self, target: &mut MainHeaderConfig) {
        if let Some(v) = self.enabled {
            target.enabled = v;
        }
        if let Some(v) = &self.title {
            target.title = v.clone();
        }
        if let Some(v) = &self.subtitle {
            target.subtitle = v.clone();
        }
        if let Some(v) = &self.ai_prompt {
            target.ai_prompt = v.clone();
        }
        if let Some(v) = &self.ai_style {
            target.ai_style = v.clone();
        }
        if let Some(v) = &self.ai_effect {
            target.ai_effect = v.clone();
        }
        if let Some(v) = &self.ai_color {
            target.ai_color = v.clone();
        }
        if let Some(v) = &self.ai_motion {
            target.ai_motion = v.clone();
        }
        if let Some(v) = self.ai_aspect_ratio {
            target.ai_aspect_ratio = v;
        }
        if let Some(v) = &self.generated_image_url {
            target.generated_image_url = v.clone();
        }
    }
}

/// Shallow patch for the template banner sub-record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileHeaderPatch {
    pub enabled: Option<bool>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub background: Option<String>,
}

impl ProfileHeaderPatch {
    pub fn apply(&self, target: &mut ProfileHeaderConfig) {
        if let Some(v) = self.enabled {
            target.enabled = v;
        }
        if let Some(v) = &self.title {
            target.title = v.clone();
        }
        if let Some(v) = &self.subtitle {
            target.subtitle = v.clone();
        }
        if let Some(v) = &self.background {
            target.background = v.clone();
        }
    }
}

/// Shallow patch for social icon styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialIconStylePatch {
    pub size: Option<u32>,
    pub background_color: Option<String>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
    pub border_radius: Option<u32>,
}

impl SocialIconStylePatch {
    pub fn apply(&self, target: &mut SocialIconStyle) {
        if let Some(v) = self.size {
            target.size = v;
        }
        if let Some(v) = &self.background_color {
            target.background_color = v.clone();
        }
        if let Some(v) = self.border_width {
            target.border_width = v;
        }
        if let Some(v) = &self.border_color {
            target.border_color = v.clone();
        }
        if let Some(v) = self.border_radius {
            target.border_radius = v;
        }
    }
}

/// Shallow patch for section card styling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionStylePatch {
    pub style: Option<SectionStyleKind>,
    pub card_background_color: Option<String>,
    pub card_border_color: Option<String>,
    pub card_border_radius: Option<u32>,
}

impl SectionStylePatch {
    pub fn apply(&self, target: &mut SectionStyleConfig) {
        if let Some(v) = self.style {
            target.style = v;
        }
        if let Some(v) = &self.card_background_color {
            target.card_background_color = v.clone();
        }
        if let Some(v) = &self.card_border_color {
            target.card_border_color = v.clone();
        }
        if let Some(v) = self.card_border_radius {
            target.card_border_radius = v;
        }
    }
}

/// Shallow patch for the advanced-metrics toggle set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdvancedMetricsPatch {
    pub languages: Option<bool>,
    pub habits: Option<bool>,
    pub isocalendar: Option<bool>,
    pub skyline: Option<bool>,
}

impl AdvancedMetricsPatch {
    pub fn apply(&self, target: &mut AdvancedMetrics) {
        if let Some(v) = self.languages {
            target.languages = v;
        }
        if let Some(v) = self.habits {
            target.habits = v;
        }
        if let Some(v) = self.isocalendar {
            target.isocalendar = v;
        }
        if let Some(v) = self.skyline {
            target.skyline = v;
        }
    }
}

/// All-optional mirror of `ProfileConfig`. The deserialization target for
/// every external payload: imported snapshots, AI responses, merge files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialProfile {
    pub main_header: Option<MainHeaderPatch>,
    pub profile_header: Option<ProfileHeaderPatch>,
    pub social_icon_style: Option<SocialIconStylePatch>,
    pub section_style_config: Option<SectionStylePatch>,
    pub advanced_metrics: Option<AdvancedMetricsPatch>,
    pub tech_stack: Option<BTreeMap<String, Vec<String>>>,
    pub resume_text: Option<String>,
    pub name: Option<String>,
    pub github_user: Option<String>,
    pub bio: Option<String>,
    pub my_mission: Option<String>,
    pub skill_style: Option<SkillStyle>,
    pub badge_color: Option<String>,
    pub socials: Option<Vec<SocialLink>>,
    pub social_style: Option<SocialStyle>,
    pub work_experience: Option<Vec<WorkExperience>>,
    pub projects: Option<Vec<Project>>,
    pub project_style: Option<ProjectStyle>,
    pub volunteering: Option<Vec<Volunteering>>,
    pub education: Option<Vec<Education>>,
    pub certifications: Option<Vec<Certification>>,
    pub research: Option<Vec<ResearchEntry>>,
    pub awards: Option<Vec<Award>>,
    pub publications: Option<Vec<Publication>>,
    pub talks: Option<Vec<Talk>>,
    pub languages: Option<Vec<String>>,
    pub hobbies: Option<Vec<String>>,
    pub buy_me_a_coffee: Option<String>,
    pub kofi: Option<String>,
    pub blog_url: Option<String>,
    pub custom_html: Option<String>,
    pub footer_text: Option<String>,
    pub footer_style: Option<FooterStyle>,
    pub footer_card_width: Option<u32>,
    pub footer_card_border_radius: Option<u32>,
    pub footer_card_border_color: Option<String>,
    pub hackathons: Option<Vec<Hackathon>>,
    pub problem_solving: Option<Vec<ProblemSolvingProfile>>,
    pub show_visitors: Option<bool>,
    pub show_stats: Option<bool>,
    pub show_top_langs: Option<bool>,
    pub show_trophies: Option<bool>,
    pub show_pinned_repos: Option<bool>,
    pub show_profile_summary: Option<bool>,
    pub show_productive_time: Option<bool>,
    pub github_utc_offset: Option<String>,
    pub show_streak_stats: Option<bool>,
    pub show_activity_graph: Option<bool>,
    pub show_wakatime_badge: Option<bool>,
    pub show_wakatime_chart: Option<bool>,
    pub wakatime_user: Option<String>,
    pub stats_theme: Option<String>,
    pub show_border: Option<bool>,
    pub border_radius: Option<u32>,
    pub section_order: Option<Vec<SectionKey>>,
    pub stats_card_type: Option<StatsCardType>,
    pub border_color: Option<String>,
}

impl PartialProfile {
    /// Parse a partial from raw JSON text. Unrecognized keys are dropped.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Layer this partial over full defaults, producing a complete record.
    /// Used by import and full AI regeneration: every field the partial
    /// does not carry keeps its default, so nothing is ever undefined.
    pub fn into_config(self) -> ProfileConfig {
        let mut config = ProfileConfig::default();
        if let Some(patch) = &self.main_header {
            patch.apply(&mut config.main_header);
        }
        if let Some(patch) = &self.profile_header {
            patch.apply(&mut config.profile_header);
        }
        if let Some(patch) = &self.social_icon_style {
            patch.apply(&mut config.social_icon_style);
        }
        if let Some(patch) = &self.section_style_config {
            patch.apply(&mut config.section_style_config);
        }
        if let Some(patch) = &self.advanced_metrics {
            patch.apply(&mut config.advanced_metrics);
        }
        if let Some(stack) = self.tech_stack {
            for (category, skills) in stack {
                let slot = config.tech_stack.entry(category).or_default();
                slot.clear();
                for name in skills {
                    if !name.trim().is_empty() && !slot.contains(&name) {
                        slot.push(name);
                    }
                }
            }
        }

        macro_rules! overwrite {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = self.$field {
                    config.$field = value;
                })*
            };
        }
        overwrite!(
            resume_text,
            name,
            github_user,
            bio,
            my_mission,
            skill_style,
            badge_color,
            socials,
            social_style,
            work_experience,
            projects,
            project_style,
            volunteering,
            education,
            certifications,
            research,
            awards,
            publications,
            talks,
            languages,
            hobbies,
            buy_me_a_coffee,
            kofi,
            blog_url,
            custom_html,
            footer_text,
            footer_style,
            footer_card_width,
            footer_card_border_radius,
            footer_card_border_color,
            hackathons,
            problem_solving,
            show_visitors,
            show_stats,
            show_top_langs,
            show_trophies,
            show_pinned_repos,
            show_profile_summary,
            show_productive_time,
            github_utc_offset,
            show_streak_stats,
            show_activity_graph,
            show_wakatime_badge,
            show_wakatime_chart,
            wakatime_user,
            stats_theme,
            show_border,
            border_radius,
            section_order,
            stats_card_type,
            border_color,
        );
        config
    }

    /// Classified tech stack from a flat list of AI-suggested skill names.
    /// Names outside the catalog are dropped; duplicates collapse.
    pub fn tech_stack_from_skills<I, S>(skills: I) -> BTreeMap<String, Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stack: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for name in skills {
            let name = name.as_ref().trim();
            if let Some(category) = crate::catalog::category_for_skill(name) {
                let slot = stack.entry(category.to_string()).or_default();
                if !slot.iter().any(|s| s == name) {
                    slot.push(name.to_string());
                }
            }
        }
        stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unrecognized_keys_discarded() {
        let partial =
            PartialProfile::from_json(r#"{"bio": "Hi", "evilField": {"x": 1}}"#).unwrap();
        assert_eq!(partial.bio.as_deref(), Some("Hi"));
        let json = serde_json::to_value(&partial).unwrap();
        assert!(json.get("evilField").is_none());
    }

    #[test]
    fn test_into_config_layers_over_defaults() {
        let partial = PartialProfile {
            bio: Some("Custom bio".to_string()),
            ..Default::default()
        };
        let config = partial.into_config();
        assert_eq!(config.bio, "Custom bio");
        assert_eq!(config.name, "Your Name");
        assert!(!config.section_order.is_empty());
    }

    #[test]
    fn test_into_config_replaces_tech_stack_categories() {
        let mut stack = BTreeMap::new();
        stack.insert("Programming Languages".to_string(), vec!["Rust".to_string()]);
        let config = PartialProfile { tech_stack: Some(stack), ..Default::default() }.into_config();
        assert_eq!(config.tech_stack["Programming Languages"], vec!["Rust"]);
        // Untouched categories keep their defaults
        assert_eq!(config.tech_stack["Backend Development"], vec!["Node.js"]);
    }

    #[test]
    fn test_classify_skills() {
        let stack = PartialProfile::tech_stack_from_skills(["Rust", "React", "NotASkill", "Rust"]);
        assert_eq!(stack["Programming Languages"], vec!["Rust"]);
        assert_eq!(stack["Frontend Development"], vec!["React"]);
        assert!(!stack.contains_key("NotASkill"));
    }

    #[test]
    fn test_entry_defaults_fill_gaps() {
        let partial = PartialProfile::from_json(
            r#"{"workExperience": [{"title": "Engineer", "company": "Acme"}]}"#,
        )
        .unwrap();
        let work = partial.work_experience.unwrap();
        assert_eq!(work[0].title, "Engineer");
        assert_eq!(work[0].duration, "");
    }
}
