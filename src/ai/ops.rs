//! AI operation families.
//!
//! Each operation validates its input first (no request on failure), issues
//! exactly one model call, parses the response, and returns store commands.
//! The adapter never touches profile state itself; callers dispatch the
//! returned commands, so a failed operation leaves everything untouched.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::ai::GeminiClient;
use crate::catalog::{
    all_skill_names, prompt_modifier, AI_HEADER_COLORS, AI_HEADER_EFFECTS, AI_HEADER_MOTIONS,
    AI_HEADER_STYLES,
};
use crate::error::{ForgeError, Result};
use crate::partial::{MainHeaderPatch, PartialProfile};
use crate::profile::{
    Education, MainHeaderConfig, Project, ProjectCategory, ProfileConfig, Volunteering,
    WorkExperience,
};
use crate::store::{Command, Entry, EntryPatch, ProjectPatch, ScalarEdit, VolunteeringPatch, WorkPatch};

/// First brace-delimited substring of a model response. Models often wrap
/// JSON in prose or code fences; everything outside the braces is ignored.
pub fn extract_json(text: &str) -> Result<&str> {
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if start < end => Ok(&text[start..=end]),
        _ => Err(ForgeError::AiResponse(
            "AI response was not in the expected JSON format".to_string(),
        )),
    }
}

fn skill_list() -> String {
    all_skill_names().join(", ")
}

fn category_list() -> String {
    ProjectCategory::ALL.map(|c| c.label()).join(", ")
}

fn category_from_label(label: &str) -> ProjectCategory {
    ProjectCategory::ALL
        .into_iter()
        .find(|c| c.label() == label)
        .unwrap_or_default()
}

/// Default selection plus the recognized names from `skills`, classified by
/// catalog category.
fn classified_stack(skills: &[String]) -> crate::profile::TechStack {
    let mut stack = ProfileConfig::default().tech_stack;
    for (category, names) in PartialProfile::tech_stack_from_skills(skills) {
        let selected = stack.entry(category).or_default();
        for name in names {
            if !selected.contains(&name) {
                selected.push(name);
            }
        }
    }
    stack
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ProfileAnalysis {
    bio: String,
    skills: Vec<String>,
}

/// Bio plus skill selection from a public GitHub profile URL.
pub async fn analyze_profile(client: &GeminiClient, url: &str) -> Result<Vec<Command>> {
    if url.trim().is_empty() || !url.contains("github.com") {
        return Err(ForgeError::InvalidInput(
            "Please provide a valid GitHub profile URL.".to_string(),
        ));
    }
    let prompt = format!(
        "Analyze the public GitHub profile at {url}. Based on the user's pinned repositories, \
         repository names, descriptions, and languages, generate a professional bio and a list \
         of relevant technical skills.\n\n\
         For the skills, choose only from the following list: {skills}.\n\n\
         Respond ONLY with a valid JSON object containing two keys: \"bio\" (a string for the \
         'About Me' section) and \"skills\" (an array of skill name strings).\n\n\
         Example JSON response:\n\
         {{\n  \"bio\": \"A passionate full-stack developer with a love for open-source and \
         building innovative web applications.\",\n  \"skills\": [\"React\", \"Node.js\", \
         \"TypeScript\", \"Python\", \"Docker\"]\n}}",
        skills = skill_list(),
    );
    let response = client.generate_text(&prompt).await?;
    let parsed: ProfileAnalysis = serde_json::from_str(extract_json(&response)?)?;

    let mut commands = Vec::new();
    if !parsed.bio.is_empty() {
        commands.push(Command::Edit(ScalarEdit::Bio(parsed.bio)));
    }
    commands.push(Command::SetTechStack(classified_stack(&parsed.skills)));
    Ok(commands)
}

/// Short bio from free-form keywords.
pub async fn generate_bio(client: &GeminiClient, keywords: &str) -> Result<Vec<Command>> {
    if keywords.trim().is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide some keywords for your bio.".to_string(),
        ));
    }
    let prompt = format!(
        "Write a compelling and professional 'About Me' section for a developer's GitHub \
         profile based on these keywords: \"{keywords}\". The bio should be 2-3 sentences \
         long, have an enthusiastic tone, and use 1-2 relevant emojis. Output only the \
         generated bio text."
    );
    let response = client.generate_text(&prompt).await?;
    Ok(vec![Command::Edit(ScalarEdit::Bio(response.trim().to_string()))])
}

/// Banner background image, stored as a JPEG data URI.
pub async fn generate_header_image(
    client: &GeminiClient,
    header: &MainHeaderConfig,
) -> Result<Vec<Command>> {
    if header.ai_prompt.trim().is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide a prompt for the AI header background.".to_string(),
        ));
    }
    // Modifiers come from fixed vocabularies; anything else falls back to
    // the vocabulary default instead of leaking into the prompt.
    let prompt = format!(
        "A GitHub profile header banner background image, visually appealing and without any \
         text. Prompt: \"{}\". Style: {}. Effect: {}. Color palette: {}. Motion: {}.",
        header.ai_prompt,
        prompt_modifier(AI_HEADER_STYLES, &header.ai_style),
        prompt_modifier(AI_HEADER_EFFECTS, &header.ai_effect),
        prompt_modifier(AI_HEADER_COLORS, &header.ai_color),
        prompt_modifier(AI_HEADER_MOTIONS, &header.ai_motion),
    );
    let bytes = client.generate_image(&prompt, header.ai_aspect_ratio).await?;
    let data_uri = format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes));
    Ok(vec![Command::PatchMainHeader(MainHeaderPatch {
        generated_image_url: Some(data_uri),
        ..Default::default()
    })])
}

/// Achievement bullets for one work entry.
pub async fn generate_work_description(
    client: &GeminiClient,
    entry: &WorkExperience,
    index: usize,
) -> Result<Vec<Command>> {
    if entry.title.is_empty() || entry.company.is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide a Job Title and Company to generate a description.".to_string(),
        ));
    }
    let prompt = format!(
        "Write 2-3 bullet points for a developer's resume describing their role as a \
         \"{}\" at \"{}\". Focus on achievements and impact, using action verbs. Output only \
         the bullet points.",
        entry.title, entry.company,
    );
    let response = client.generate_text(&prompt).await?;
    Ok(vec![Command::EditEntry {
        index,
        patch: EntryPatch::Work(WorkPatch {
            description: Some(response.trim().to_string()),
            ..Default::default()
        }),
    }])
}

/// Contribution bullets for one volunteering entry.
pub async fn generate_volunteering_description(
    client: &GeminiClient,
    entry: &Volunteering,
    index: usize,
) -> Result<Vec<Command>> {
    if entry.role.is_empty() || entry.organization.is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide a Role and Organization to generate a description.".to_string(),
        ));
    }
    let prompt = format!(
        "Write 1-2 bullet points for a developer's resume describing their volunteer role as \
         a \"{}\" at \"{}\". Focus on contributions and impact. Output only the bullet points.",
        entry.role, entry.organization,
    );
    let response = client.generate_text(&prompt).await?;
    Ok(vec![Command::EditEntry {
        index,
        patch: EntryPatch::Volunteering(VolunteeringPatch {
            description: Some(response.trim().to_string()),
            ..Default::default()
        }),
    }])
}

/// Summary sentence for one project entry.
pub async fn generate_project_description(
    client: &GeminiClient,
    project: &Project,
    index: usize,
) -> Result<Vec<Command>> {
    if project.name.is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide a Project Name to generate a description.".to_string(),
        ));
    }
    let prompt = format!(
        "Write a concise, 1-2 sentence description for a portfolio project named \"{}\". \
         Mention its core purpose and key technology if relevant (e.g., \"{}\"). Output only \
         the description text.",
        project.name,
        project.tech.join(", "),
    );
    let response = client.generate_text(&prompt).await?;
    Ok(vec![Command::EditEntry {
        index,
        patch: EntryPatch::Project(ProjectPatch {
            description: Some(response.trim().to_string()),
            ..Default::default()
        }),
    }])
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SkillSuggestion {
    skills: Vec<String>,
}

/// Technology list for one project, inferred from its repository.
pub async fn suggest_project_tech(
    client: &GeminiClient,
    project: &Project,
    index: usize,
) -> Result<Vec<Command>> {
    if project.repo_url.is_empty() || !project.repo_url.contains("github.com") {
        return Err(ForgeError::InvalidInput(
            "Please provide a valid GitHub repository URL for the project.".to_string(),
        ));
    }
    let prompt = format!(
        "Analyze the public GitHub repository at {repo}. Based on the languages and frameworks \
         detected, suggest a list of relevant technical skills.\n\n\
         Choose only from the following list: {skills}.\n\n\
         Respond ONLY with a valid JSON object with a single key \"skills\" which is an array \
         of skill name strings.\n\n\
         Example JSON response:\n{{\n  \"skills\": [\"React\", \"Node.js\", \"TypeScript\", \
         \"Tailwind CSS\"]\n}}",
        repo = project.repo_url,
        skills = skill_list(),
    );
    let response = client.generate_text(&prompt).await?;
    let parsed: SkillSuggestion = serde_json::from_str(extract_json(&response)?)?;
    Ok(vec![Command::EditEntry {
        index,
        patch: EntryPatch::Project(ProjectPatch {
            tech: Some(parsed.skills),
            ..Default::default()
        }),
    }])
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ProjectAnalysis {
    name: String,
    description: String,
    thumbnail_url: String,
    tech: Vec<String>,
    category: String,
}

/// New project entry built from a live site or repository URL.
pub async fn analyze_project_url(client: &GeminiClient, url: &str) -> Result<Vec<Command>> {
    if url.trim().is_empty() {
        return Err(ForgeError::InvalidInput("Please provide a URL to analyze.".to_string()));
    }
    let prompt = format!(
        "Analyze the content at the following URL: {url}. The URL could be a live project \
         website, a GitHub repository, or something else.\n\n\
         Extract the following information and return it as a valid JSON object:\n\
         1. \"name\": A concise and suitable name for the project.\n\
         2. \"description\": A 1-2 sentence summary of the project's purpose.\n\
         3. \"thumbnailUrl\": The absolute URL of a relevant preview image for the project. \
         Look for 'og:image' meta tags or a prominent image on the page. If none found, \
         return an empty string.\n\
         4. \"tech\": An array of technology names used in the project. Choose ONLY from this \
         list: {skills}.\n\
         5. \"category\": The most appropriate category for the project. Choose ONLY ONE from \
         this list: {categories}.\n\n\
         If the URL is a GitHub repository, use the repo name for \"name\" and its description \
         for \"description\".\n\
         If the URL is a live website, use its title tag for \"name\" and meta description for \
         \"description\".\n\n\
         Respond ONLY with a single, valid JSON object.",
        skills = skill_list(),
        categories = category_list(),
    );
    let response = client.generate_text(&prompt).await?;
    let parsed: ProjectAnalysis = serde_json::from_str(extract_json(&response)?)?;

    let is_repo = url.contains("github.com");
    let project = Project {
        name: if parsed.name.is_empty() { "Untitled Project".to_string() } else { parsed.name },
        description: parsed.description,
        repo_url: if is_repo { url.to_string() } else { String::new() },
        live_url: if is_repo { String::new() } else { url.to_string() },
        tech: parsed.tech,
        category: category_from_label(&parsed.category),
        thumbnail_url: parsed.thumbnail_url,
        is_top_project: false,
        custom_badges: String::new(),
    };
    Ok(vec![Command::AddEntry(Entry::Project(project))])
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ResumeAnalysis {
    name: String,
    bio: String,
    work_experience: Vec<WorkExperience>,
    education: Vec<Education>,
    skills: Vec<String>,
}

/// Name, bio, history entries, and skill selection from pasted resume text.
pub async fn analyze_resume(client: &GeminiClient, resume_text: &str) -> Result<Vec<Command>> {
    if resume_text.trim().is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please paste your resume text to be analyzed.".to_string(),
        ));
    }
    let prompt = format!(
        "Analyze the following resume text and extract the information into a structured JSON \
         object.\n\nResume Text: \"\"\"\n{resume_text}\n\"\"\"\n\n\
         Extract the following information:\n\
         1. \"name\": The full name of the person.\n\
         2. \"bio\": A short, professional bio (2-3 sentences).\n\
         3. \"workExperience\": An array of objects, where each object has \"title\", \
         \"company\", \"duration\", and a \"description\" with bullet points.\n\
         4. \"education\": An array of objects, where each object has \"institution\", \
         \"degree\", and \"duration\".\n\
         5. \"skills\": An array of skill names. Choose ONLY from this list: {skills}.\n\n\
         Respond ONLY with the valid JSON object.",
        skills = skill_list(),
    );
    let response = client.generate_text(&prompt).await?;
    let parsed: ResumeAnalysis = serde_json::from_str(extract_json(&response)?)?;

    let partial = PartialProfile {
        name: if parsed.name.is_empty() { None } else { Some(parsed.name) },
        bio: if parsed.bio.is_empty() { None } else { Some(parsed.bio) },
        work_experience: if parsed.work_experience.is_empty() {
            None
        } else {
            Some(parsed.work_experience)
        },
        education: if parsed.education.is_empty() { None } else { Some(parsed.education) },
        ..Default::default()
    };
    Ok(vec![
        Command::Merge(Box::new(partial)),
        Command::SetTechStack(classified_stack(&parsed.skills)),
    ])
}

/// Whole-profile draft from the GitHub username plus keywords. Replaces the
/// document, layered over defaults.
pub async fn quick_generate(
    client: &GeminiClient,
    github_user: &str,
    keywords: &str,
) -> Result<Vec<Command>> {
    let prompt = format!(
        "You are an expert assistant for creating GitHub profile READMEs. Based on the user's \
         GitHub username \"{github_user}\" and these keywords \"{keywords}\", generate a \
         complete JSON object that populates all relevant fields for their profile. The JSON \
         object must match the structure of the profile configuration. Include a professional \
         bio, a mission statement, suggest projects based on their likely interests, and fill \
         out other sections creatively. Omit fields you are not confident about. Respond ONLY \
         with the valid, complete JSON object.",
    );
    let response = client.generate_text(&prompt).await?;
    let partial = PartialProfile::from_json(extract_json(&response)?)?;
    Ok(vec![Command::Replace(Box::new(partial))])
}

/// Whole-profile draft from a free-form user prompt.
pub async fn custom_prompt_generate(
    client: &GeminiClient,
    custom_prompt: &str,
) -> Result<Vec<Command>> {
    if custom_prompt.trim().is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide a prompt describing yourself.".to_string(),
        ));
    }
    let prompt = format!(
        "You are an expert assistant for creating GitHub profile READMEs. The user has \
         provided a custom prompt to describe themselves. Based on this prompt, generate a \
         complete JSON object that populates all relevant fields for their profile. The JSON \
         object must match the structure of the profile configuration. User's prompt: \
         \"\"\"{custom_prompt}\"\"\". Respond ONLY with the valid, complete JSON object.",
    );
    let response = client.generate_text(&prompt).await?;
    let partial = PartialProfile::from_json(extract_json(&response)?)?;
    Ok(vec![Command::Replace(Box::new(partial))])
}

const FILE_ANALYSIS_SYSTEM: &str =
    "You are an expert assistant for creating GitHub profile READMEs. The user has uploaded a \
     file and provided a prompt. Analyze them and generate a valid JSON object to populate \
     their profile. The JSON object should be a subset of the main data structure. You can \
     populate fields like \"bio\", \"name\", \"workExperience\", \"education\", \"projects\", \
     and \"techStack\". For \"techStack\", categorize skills into appropriate categories. For \
     arrays like \"workExperience\", create complete array items. Respond ONLY with the valid \
     JSON object.";

/// Partial profile extracted from an uploaded file plus a prompt, merged
/// into the current document.
pub async fn analyze_file(
    client: &GeminiClient,
    file_bytes: &[u8],
    mime_type: &str,
    user_prompt: &str,
) -> Result<Vec<Command>> {
    if file_bytes.is_empty() || user_prompt.trim().is_empty() {
        return Err(ForgeError::InvalidInput(
            "Please provide a file and a prompt for analysis.".to_string(),
        ));
    }
    let prompt = format!("User prompt: \"{user_prompt}\"");
    let response = client
        .generate_text_with_file(&prompt, FILE_ANALYSIS_SYSTEM, file_bytes, mime_type)
        .await?;
    let partial = PartialProfile::from_json(extract_json(&response)?)?;
    Ok(vec![Command::Merge(Box::new(partial))])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_json_from_prose() {
        let text = "Sure! Here you go:\n```json\n{\"bio\": \"hi\"}\n```";
        assert_eq!(extract_json(text).unwrap(), "{\"bio\": \"hi\"}");
    }

    #[test]
    fn test_extract_json_greedy_to_last_brace() {
        let text = "{\"a\": {\"b\": 1}} trailing";
        assert_eq!(extract_json(text).unwrap(), "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_extract_json_missing_braces() {
        assert!(extract_json("no json here").is_err());
        assert!(extract_json("} reversed {").is_err());
    }

    #[test]
    fn test_category_from_label() {
        assert_eq!(category_from_label("Game"), ProjectCategory::Game);
        assert_eq!(category_from_label("Live Service / API"), ProjectCategory::LiveServiceApi);
        assert_eq!(category_from_label("made up"), ProjectCategory::WebApplication);
    }

    #[test]
    fn test_classified_stack_keeps_defaults() {
        let stack = classified_stack(&["Rust".to_string(), "NotASkill".to_string()]);
        assert!(stack["Programming Languages"].contains(&"Rust".to_string()));
        // Default preselection survives the rebuild
        assert!(stack["Programming Languages"].contains(&"JavaScript".to_string()));
        assert!(stack["DevOps"].contains(&"Git".to_string()));
    }

    #[tokio::test]
    async fn test_validation_precedes_request() {
        // Client with a key but no reachable service: validation failures
        // must surface before any request is attempted.
        let client = GeminiClient::new("test-key").unwrap();
        assert!(matches!(
            analyze_profile(&client, "https://example.com").await,
            Err(ForgeError::InvalidInput(_))
        ));
        assert!(matches!(
            generate_bio(&client, "   ").await,
            Err(ForgeError::InvalidInput(_))
        ));
        assert!(matches!(
            analyze_resume(&client, "").await,
            Err(ForgeError::InvalidInput(_))
        ));
        assert!(matches!(
            analyze_file(&client, &[], "text/plain", "prompt").await,
            Err(ForgeError::InvalidInput(_))
        ));
    }
}
