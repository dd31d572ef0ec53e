//! Form state store.
//!
//! Single authoritative holder of the `ProfileConfig`; every mutation flows
//! through a `Command` applied by the pure reducer [`apply`]. Each command
//! either commits or is a no-op (out-of-bounds indexes, blank skill names),
//! and every application is one atomic replacement of the whole state value,
//! so there is no partial-application risk and nothing to roll back.

mod merge;

pub use merge::merge_partial;

use serde::{Deserialize, Serialize};

use crate::partial::{
    AdvancedMetricsPatch, MainHeaderPatch, PartialProfile, ProfileHeaderPatch, SectionStylePatch,
    SocialIconStylePatch,
};
use crate::profile::{
    Award, Certification, Education, FooterStyle, Hackathon, ProblemSolvingProfile, ProfileConfig,
    Project, ProjectCategory, ProjectStyle, Publication, ResearchEntry, SectionKey, SkillStyle,
    SocialLink, SocialStyle, StatsCardType, Talk, TechStack, Volunteering, WorkExperience,
};

/// Typed setter for one scalar or style field.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarEdit {
    Name(String),
    GithubUser(String),
    Bio(String),
    Mission(String),
    ResumeText(String),
    BadgeColor(String),
    BuyMeACoffee(String),
    Kofi(String),
    BlogUrl(String),
    CustomHtml(String),
    FooterText(String),
    FooterCardWidth(u32),
    FooterCardBorderRadius(u32),
    FooterCardBorderColor(String),
    WakatimeUser(String),
    StatsTheme(String),
    GithubUtcOffset(String),
    BorderRadius(u32),
    BorderColor(String),
    ShowBorder(bool),
    SkillStyle(SkillStyle),
    SocialStyle(SocialStyle),
    ProjectStyle(ProjectStyle),
    FooterStyle(FooterStyle),
    StatsCardType(StatsCardType),
    Languages(Vec<String>),
    Hobbies(Vec<String>),
    SectionOrder(Vec<SectionKey>),
    Flag(StatFlag, bool),
}

/// One of the stats feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFlag {
    Visitors,
    Stats,
    TopLangs,
    Trophies,
    PinnedRepos,
    ProfileSummary,
    ProductiveTime,
    StreakStats,
    ActivityGraph,
    WakatimeBadge,
    WakatimeChart,
}

/// Positional patch for one entry; the variant identifies the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EntryPatch {
    Work(WorkPatch),
    Project(ProjectPatch),
    Education(EducationPatch),
    Certification(CertificationPatch),
    Research(ResearchPatch),
    Award(AwardPatch),
    Publication(PublicationPatch),
    Talk(TalkPatch),
    Volunteering(VolunteeringPatch),
    Hackathon(HackathonPatch),
    ProblemSolving(ProblemSolvingPatch),
    Social(SocialLinkPatch),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkPatch {
    pub company: Option<String>,
    pub title: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub tech: Option<Vec<String>>,
    pub is_top_project: Option<bool>,
    pub category: Option<ProjectCategory>,
    pub thumbnail_url: Option<String>,
    pub custom_badges: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResearchPatch {
    pub title: Option<String>,
    pub publication: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AwardPatch {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PublicationPatch {
    pub title: Option<String>,
    pub journal: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TalkPatch {
    pub title: Option<String>,
    pub event: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VolunteeringPatch {
    pub organization: Option<String>,
    pub role: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HackathonPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemSolvingPatch {
    pub platform: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinkPatch {
    pub platform: Option<String>,
    pub url: Option<String>,
    pub icon: Option<String>,
}

/// A fully-formed entry to append to its list. Callers appending a blank row
/// pass the entry type's `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entry {
    Work(WorkExperience),
    Project(Project),
    Education(Education),
    Certification(Certification),
    Research(ResearchEntry),
    Award(Award),
    Publication(Publication),
    Talk(Talk),
    Volunteering(Volunteering),
    Hackathon(Hackathon),
    ProblemSolving(ProblemSolvingProfile),
    Social(SocialLink),
}

/// Names one repeatable-entry collection, for positional removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKey {
    Work,
    Projects,
    Education,
    Certifications,
    Research,
    Awards,
    Publications,
    Talks,
    Volunteering,
    Hackathons,
    ProblemSolving,
    Socials,
}

/// One mutation of the profile state. Commands are total: applying one
/// either commits its effect or leaves the state unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Edit(ScalarEdit),
    PatchMainHeader(MainHeaderPatch),
    PatchProfileHeader(ProfileHeaderPatch),
    PatchSocialIcons(SocialIconStylePatch),
    PatchSectionStyle(SectionStylePatch),
    PatchMetrics(AdvancedMetricsPatch),
    /// Replace fields of the entry at `index`; no-op when out of bounds.
    EditEntry { index: usize, patch: EntryPatch },
    /// Flip the featured flag of the project at `index`.
    ToggleTopProject { index: usize },
    AddEntry(Entry),
    RemoveEntry { list: ListKey, index: usize },
    /// Add the skill to the category's selection if absent, remove if present.
    ToggleSkill { category: String, skill: String },
    /// Like `ToggleSkill`, but a no-op when blank or already selected.
    AddCustomSkill { category: String, skill: String },
    /// Replace the whole skill selection map; used when an analysis rebuilds
    /// the selection from scratch instead of extending it.
    SetTechStack(TechStack),
    /// Deep merge (see [`merge_partial`] for the field-class semantics).
    Merge(Box<PartialProfile>),
    /// Layer the partial over full defaults and replace wholesale.
    Replace(Box<PartialProfile>),
    /// Unconditional reset; confirmation is the caller's responsibility.
    Reset,
}

/// Pure reducer: `(state, command) -> new state`.
pub fn apply(state: &ProfileConfig, command: Command) -> ProfileConfig {
    let mut next = state.clone();
    match command {
        Command::Edit(edit) => apply_scalar(&mut next, edit),
        Command::PatchMainHeader(patch) => patch.apply(&mut next.main_header),
        Command::PatchProfileHeader(patch) => patch.apply(&mut next.profile_header),
        Command::PatchSocialIcons(patch) => patch.apply(&mut next.social_icon_style),
        Command::PatchSectionStyle(patch) => patch.apply(&mut next.section_style_config),
        Command::PatchMetrics(patch) => patch.apply(&mut next.advanced_metrics),
        Command::EditEntry { index, patch } => apply_entry_patch(&mut next, index, patch),
        Command::ToggleTopProject { index } => {
            if let Some(project) = next.projects.get_mut(index) {
                project.is_top_project = !project.is_top_project;
            }
        }
        Command::AddEntry(entry) => add_entry(&mut next, entry),
        Command::RemoveEntry { list, index } => remove_entry(&mut next, list, index),
        Command::ToggleSkill { category, skill } => toggle_skill(&mut next, &category, &skill),
        Command::AddCustomSkill { category, skill } => {
            let skill = skill.trim();
            if skill.is_empty() {
                return next;
            }
            let selected = next
                .tech_stack
                .get(&category)
                .map(|s| s.iter().any(|name| name == skill))
                .unwrap_or(false);
            if !selected {
                toggle_skill(&mut next, &category, skill);
            }
        }
        Command::SetTechStack(stack) => next.tech_stack = stack,
        Command::Merge(partial) => next = merge_partial(&next, &partial),
        Command::Replace(partial) => next = partial.into_config(),
        Command::Reset => next = ProfileConfig::default(),
    }
    next
}

fn apply_scalar(state: &mut ProfileConfig, edit: ScalarEdit) {
    match edit {
        ScalarEdit::Name(v) => state.name = v,
        ScalarEdit::GithubUser(v) => state.github_user = v,
        ScalarEdit::Bio(v) => state.bio = v,
        ScalarEdit::Mission(v) => state.my_mission = v,
        ScalarEdit::ResumeText(v) => state.resume_text = v,
        ScalarEdit::BadgeColor(v) => state.badge_color = v,
        ScalarEdit::BuyMeACoffee(v) => state.buy_me_a_coffee = v,
        ScalarEdit::Kofi(v) => state.kofi = v,
        ScalarEdit::BlogUrl(v) => state.blog_url = v,
        ScalarEdit::CustomHtml(v) => state.custom_html = v,
        ScalarEdit::FooterText(v) => state.footer_text = v,
        ScalarEdit::FooterCardWidth(v) => state.footer_card_width = v,
        ScalarEdit::FooterCardBorderRadius(v) => state.footer_card_border_radius = v,
        ScalarEdit::FooterCardBorderColor(v) => state.footer_card_border_color = v,
        ScalarEdit::WakatimeUser(v) => state.wakatime_user = v,
        ScalarEdit::StatsTheme(v) => state.stats_theme = v,
        ScalarEdit::GithubUtcOffset(v) => state.github_utc_offset = v,
        ScalarEdit::BorderRadius(v) => state.border_radius = v,
        ScalarEdit::BorderColor(v) => state.border_color = v,
        ScalarEdit::ShowBorder(v) => state.show_border = v,
        ScalarEdit::SkillStyle(v) => state.skill_style = v,
        ScalarEdit::SocialStyle(v) => state.social_style = v,
        ScalarEdit::ProjectStyle(v) => state.project_style = v,
        ScalarEdit::FooterStyle(v) => state.footer_style = v,
        ScalarEdit::StatsCardType(v) => state.stats_card_type = v,
        ScalarEdit::Languages(v) => state.languages = v,
        ScalarEdit::Hobbies(v) => state.hobbies = v,
        ScalarEdit::SectionOrder(v) => state.section_order = v,
        ScalarEdit::Flag(flag, v) => match flag {
            StatFlag::Visitors => state.show_visitors = v,
            StatFlag::Stats => state.show_stats = v,
            StatFlag::TopLangs => state.show_top_langs = v,
            StatFlag::Trophies => state.show_trophies = v,
            StatFlag::PinnedRepos => state.show_pinned_repos = v,
            StatFlag::ProfileSummary => state.show_profile_summary = v,
            StatFlag::ProductiveTime => state.show_productive_time = v,
            StatFlag::StreakStats => state.show_streak_stats = v,
            StatFlag::ActivityGraph => state.show_activity_graph = v,
            StatFlag::WakatimeBadge => state.show_wakatime_badge = v,
            StatFlag::WakatimeChart => state.show_wakatime_chart = v,
        },
    }
}

macro_rules! patch_entry {
    ($list:expr, $index:expr, $patch:expr, [$($field:ident),* $(,)?]) => {
        if let Some(entry) = $list.get_mut($index) {
            $(if let Some(value) = $patch.$field {
                entry.$field = value;
            })*
        }
    };
}

fn apply_entry_patch(state: &mut ProfileConfig, index: usize, patch: EntryPatch) {
    match patch {
        EntryPatch::Work(p) => {
            patch_entry!(state.work_experience, index, p, [company, title, duration, description])
        }
        EntryPatch::Project(p) => patch_entry!(
            state.projects,
            index,
            p,
            [
                name,
                description,
                repo_url,
                live_url,
                tech,
                is_top_project,
                category,
                thumbnail_url,
                custom_badges
            ]
        ),
        EntryPatch::Education(p) => {
            patch_entry!(state.education, index, p, [institution, degree, duration])
        }
        EntryPatch::Certification(p) => {
            patch_entry!(state.certifications, index, p, [name, issuer, date, url])
        }
        EntryPatch::Research(p) => {
            patch_entry!(state.research, index, p, [title, publication, date, url, description])
        }
        EntryPatch::Award(p) => patch_entry!(state.awards, index, p, [name, issuer, date]),
        EntryPatch::Publication(p) => {
            patch_entry!(state.publications, index, p, [title, journal, date, url])
        }
        EntryPatch::Talk(p) => patch_entry!(state.talks, index, p, [title, event, date, url]),
        EntryPatch::Volunteering(p) => {
            patch_entry!(state.volunteering, index, p, [organization, role, duration, description])
        }
        EntryPatch::Hackathon(p) => {
            patch_entry!(state.hackathons, index, p, [name, description, link])
        }
        EntryPatch::ProblemSolving(p) => {
            patch_entry!(state.problem_solving, index, p, [platform, username])
        }
        EntryPatch::Social(p) => {
            if let Some(entry) = state.socials.get_mut(index) {
                // Switching to a known platform refreshes its icon and URL
                // prefix; explicit patch fields still win.
                if let Some(platform) = p.platform {
                    if let Some(info) = crate::catalog::social_platform(&platform) {
                        entry.icon = info.icon.to_string();
                        entry.url = info.base_url.to_string();
                    }
                    entry.platform = platform;
                }
                if let Some(url) = p.url {
                    entry.url = url;
                }
                if let Some(icon) = p.icon {
                    entry.icon = icon;
                }
            }
        }
    }
}

fn add_entry(state: &mut ProfileConfig, entry: Entry) {
    match entry {
        Entry::Work(e) => state.work_experience.push(e),
        Entry::Project(e) => state.projects.push(e),
        Entry::Education(e) => state.education.push(e),
        Entry::Certification(e) => state.certifications.push(e),
        Entry::Research(e) => state.research.push(e),
        Entry::Award(e) => state.awards.push(e),
        Entry::Publication(e) => state.publications.push(e),
        Entry::Talk(e) => state.talks.push(e),
        Entry::Volunteering(e) => state.volunteering.push(e),
        Entry::Hackathon(e) => state.hackathons.push(e),
        Entry::ProblemSolving(e) => state.problem_solving.push(e),
        Entry::Social(e) => state.socials.push(e),
    }
}

fn remove_at<T>(list: &mut Vec<T>, index: usize) {
    if index < list.len() {
        list.remove(index);
    }
}

fn remove_entry(state: &mut ProfileConfig, list: ListKey, index: usize) {
    match list {
        ListKey::Work => remove_at(&mut state.work_experience, index),
        ListKey::Projects => remove_at(&mut state.projects, index),
        ListKey::Education => remove_at(&mut state.education, index),
        ListKey::Certifications => remove_at(&mut state.certifications, index),
        ListKey::Research => remove_at(&mut state.research, index),
        ListKey::Awards => remove_at(&mut state.awards, index),
        ListKey::Publications => remove_at(&mut state.publications, index),
        ListKey::Talks => remove_at(&mut state.talks, index),
        ListKey::Volunteering => remove_at(&mut state.volunteering, index),
        ListKey::Hackathons => remove_at(&mut state.hackathons, index),
        ListKey::ProblemSolving => remove_at(&mut state.problem_solving, index),
        ListKey::Socials => remove_at(&mut state.socials, index),
    }
}

fn toggle_skill(state: &mut ProfileConfig, category: &str, skill: &str) {
    let selected = state.tech_stack.entry(category.to_string()).or_default();
    if let Some(pos) = selected.iter().position(|name| name == skill) {
        selected.remove(pos);
    } else {
        selected.push(skill.to_string());
    }
}

/// Owns one `ProfileConfig` and serializes all mutation through `dispatch`.
///
/// The store itself carries no lock: embedders are expected to keep a
/// single writer, which the CLI does trivially (one operation per process).
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    state: ProfileConfig,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ProfileConfig) -> Self {
        Self { state }
    }

    /// Current state value.
    pub fn state(&self) -> &ProfileConfig {
        &self.state
    }

    /// Apply one command, replacing the state atomically.
    pub fn dispatch(&mut self, command: Command) {
        self.state = apply(&self.state, command);
    }

    pub fn into_state(self) -> ProfileConfig {
        self.state
    }
}
