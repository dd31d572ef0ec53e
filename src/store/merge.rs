//! Deep merge of a partial record into existing state.
//!
//! Field classes merge differently: scalars overwrite when present, nested
//! sub-records shallow-merge field by field, the tech stack unions per
//! category, entry lists append, and simple string lists concatenate with
//! deduplication. Appending skips entries already present and entries that
//! are entirely blank, so replaying the same partial is idempotent.

use crate::partial::PartialProfile;
use crate::profile::ProfileConfig;

/// Merge `partial` into `base`, returning the combined record.
pub fn merge_partial(base: &ProfileConfig, partial: &PartialProfile) -> ProfileConfig {
    let mut merged = base.clone();

    if let Some(patch) = &partial.main_header {
        patch.apply(&mut merged.main_header);
    }
    if let Some(patch) = &partial.profile_header {
        patch.apply(&mut merged.profile_header);
    }
    if let Some(patch) = &partial.social_icon_style {
        patch.apply(&mut merged.social_icon_style);
    }
    if let Some(patch) = &partial.section_style_config {
        patch.apply(&mut merged.section_style_config);
    }
    if let Some(patch) = &partial.advanced_metrics {
        patch.apply(&mut merged.advanced_metrics);
    }

    // Tech stack: union per category, incoming skills appended after the
    // existing selection in their given order.
    if let Some(stack) = &partial.tech_stack {
        for (category, skills) in stack {
            let selected = merged.tech_stack.entry(category.clone()).or_default();
            for name in skills {
                let name = name.trim();
                if !name.is_empty() && !selected.iter().any(|s| s == name) {
                    selected.push(name.to_string());
                }
            }
        }
    }

    macro_rules! append_entries {
        ($($field:ident),* $(,)?) => {
            $(if let Some(incoming) = &partial.$field {
                for entry in incoming {
                    if *entry != Default::default() && !merged.$field.contains(entry) {
                        merged.$field.push(entry.clone());
                    }
                }
            })*
        };
    }
    append_entries!(
        socials,
        work_experience,
        projects,
        volunteering,
        education,
        certifications,
        research,
        awards,
        publications,
        talks,
        hackathons,
        problem_solving,
    );

    if let Some(languages) = &partial.languages {
        append_strings(&mut merged.languages, languages);
    }
    if let Some(hobbies) = &partial.hobbies {
        append_strings(&mut merged.hobbies, hobbies);
    }

    macro_rules! overwrite {
        ($($field:ident),* $(,)?) => {
            $(if let Some(value) = &partial.$field {
                merged.$field = value.clone();
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
        social_style,
        project_style,
        buy_me_a_coffee,
        kofi,
        blog_url,
        custom_html,
        footer_text,
        footer_style,
        footer_card_width,
        footer_card_border_radius,
        footer_card_border_color,
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

    merged
}

fn append_strings(existing: &mut Vec<String>, incoming: &[String]) {
    for value in incoming {
        let value = value.trim();
        if !value.is_empty() && !existing.iter().any(|s| s == value) {
            existing.push(value.to_string());
        }
    }
}
