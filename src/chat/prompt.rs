//! The assistant's system prompt, generated from the same content the pages
//! render.

use std::fmt::Write;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::ChatRequest;
use crate::content::{
    CERTIFICATIONS, EDUCATION, EXPERIENCES, GITHUB_HANDLE, GITHUB_URL, INTERESTS, LANGUAGES,
    LINKEDIN_HANDLE, LINKEDIN_URL, OWNER_EMAIL, OWNER_FIRST_NAME, OWNER_NAME, PROJECTS,
    SOFT_SKILLS, TECHNICAL_SKILLS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

pub static SYSTEM_PROMPT: LazyLock<String> = LazyLock::new(build_system_prompt);

fn build_system_prompt() -> String {
    let linkedin = format!(r#"<a href="{LINKEDIN_URL}">{LINKEDIN_HANDLE}</a>"#);
    let github = format!(r#"<a href="{GITHUB_URL}">{GITHUB_HANDLE}</a>"#);

    // writing into a String can't fail
    let mut p = String::new();
    let _ = writeln!(
        p,
        "You are a helpful assistant answering questions about {OWNER_NAME}. Here's his complete profile:\n"
    );

    let _ = writeln!(p, "Personal Information:");
    let _ = writeln!(p, "- Full Name: {OWNER_NAME}");
    for edu in EDUCATION {
        let _ = writeln!(p, "- Education: {} at {} ({})", edu.degree, edu.school, edu.period);
    }
    let _ = writeln!(p, "- Languages: {LANGUAGES}\n");

    let _ = writeln!(p, "Contact:");
    let _ = writeln!(
        p,
        "When asked about contact information or social media, always provide the links in HTML format like this:"
    );
    let _ = writeln!(p, "- Email: {OWNER_EMAIL}");
    let _ = writeln!(p, "- LinkedIn: {linkedin}");
    let _ = writeln!(p, "- GitHub: {github}\n");

    let _ = writeln!(p, "Skills:");
    let _ = writeln!(p, "- Technical: {}", TECHNICAL_SKILLS.join(", "));
    let _ = writeln!(p, "- Soft Skills: {}\n", SOFT_SKILLS.join(", "));

    let _ = writeln!(p, "Professional Experiences:");
    for (i, exp) in EXPERIENCES.iter().enumerate() {
        let _ = writeln!(
            p,
            "{}. {} at {} ({})\n   {}",
            i + 1,
            exp.title,
            exp.company,
            exp.year,
            exp.summary
        );
    }

    let _ = writeln!(p, "\nCertifications:");
    for cert in CERTIFICATIONS {
        let _ = writeln!(p, "- {cert}");
    }

    let _ = writeln!(p, "\nInterests:");
    for interest in INTERESTS {
        let _ = writeln!(p, "- {}: {}", interest.name, interest.details);
    }

    let _ = writeln!(p, "\nProjects:");
    for (i, project) in PROJECTS.iter().enumerate() {
        let _ = writeln!(
            p,
            "{}. {} ({})\n   {}\n   Technologies: {}",
            i + 1,
            project.name,
            project.year,
            project.description,
            project.technologies
        );
    }

    let _ = writeln!(
        p,
        "\nPlease provide concise, accurate answers based on this information. Be friendly and professional. \
         When mentioning LinkedIn or GitHub, always use HTML links. If asked about something not in this context, \
         politely indicate that you don't have that specific information."
    );
    let _ = writeln!(
        p,
        "\nExample response with links: \"You can find {OWNER_FIRST_NAME} on <a href=\"{LINKEDIN_URL}\">LinkedIn</a> \
         or check out his projects on <a href=\"{GITHUB_URL}\">GitHub</a>.\""
    );
    p
}

/// Messages forwarded to the completion API: the system prompt, the bot's
/// previous line when the widget sent one, then the visitor's message.
pub fn conversation(request: &ChatRequest) -> Vec<PromptMessage> {
    let mut messages = vec![PromptMessage::new(Role::System, SYSTEM_PROMPT.as_str())];
    if let Some(last) = request
        .last_bot_message
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        messages.push(PromptMessage::new(Role::Assistant, last));
    }
    messages.push(PromptMessage::new(Role::User, request.message.trim()));
    messages
}
