use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static PROFILE: LazyLock<Result<Profile, ContentError>> = LazyLock::new(load_profile);

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("{0} is missing from the embedded content")]
    Missing(&'static str),
    #[error("Couldn't parse {file}: {reason}")]
    Parse { file: &'static str, reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub full_name: String,
    pub brand: String,
    pub hero: HeroContent,
    pub about: About,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub leetcode: LeetCodeProfile,
    pub certificates: Vec<Certificate>,
    pub contact: ContactInfo,
    pub socials: Vec<SocialLink>,
    pub footer_tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub phrases: Vec<String>,
    pub tagline: String,
    pub resume: Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub href: String,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub greeting: String,
    pub photo: String,
    pub paragraphs: Vec<String>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
    /// Tailwind background class for the bar.
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub github: String,
    pub demo: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationStatus {
    Current,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub duration: String,
    pub description: String,
    pub status: EducationStatus,
    pub icon: String,
}

impl EducationEntry {
    pub fn is_current(&self) -> bool {
        self.status == EducationStatus::Current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceKind {
    Internship,
    Competition,
    Freelance,
    #[serde(other)]
    Other,
}

impl ExperienceKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Internship => "Internship",
            Self::Competition => "Competition",
            Self::Freelance => "Freelance",
            Self::Other => "Experience",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Internship => "bg-blue-500/10 text-blue-500",
            Self::Competition => "bg-yellow-500/10 text-yellow-500",
            Self::Freelance => "bg-green-500/10 text-green-500",
            Self::Other => "bg-purple-500/10 text-purple-500",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub kind: ExperienceKind,
    pub description: String,
    pub achievements: Vec<String>,
    pub icon: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeetCodeProfile {
    pub username: String,
}

impl LeetCodeProfile {
    pub fn profile_url(&self) -> String {
        format!("https://leetcode.com/{}", self.username)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: u32,
    pub title: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
    pub response_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub icon: String,
    pub url: String,
    pub hover_class: String,
}

pub fn parse_profile(bytes: &[u8]) -> Result<Profile, ContentError> {
    serde_json::from_slice(bytes).map_err(|e| ContentError::Parse {
        file: PROFILE_FILE,
        reason: e.to_string(),
    })
}

pub fn load_profile() -> Result<Profile, ContentError> {
    let file = Content::get(PROFILE_FILE).ok_or(ContentError::Missing(PROFILE_FILE))?;
    parse_profile(&file.data)
}

/// The embedded profile, parsed once.
pub fn profile() -> Result<&'static Profile, ContentError> {
    PROFILE.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profile_parses() {
        let profile = profile().expect("embedded profile should parse");
        assert_eq!(profile.name, "Kishore");
        assert_eq!(profile.hero.phrases.len(), 5);
        assert_eq!(profile.hero.phrases[0], "Programmer");
        assert_eq!(profile.about.skills.len(), 7);
        assert_eq!(profile.projects.len(), 6);
        assert_eq!(profile.education.len(), 3);
        assert_eq!(profile.certificates.len(), 20);
        assert_eq!(profile.socials.len(), 4);
    }

    #[test]
    fn test_profile_invariants() {
        let profile = profile().expect("embedded profile should parse");
        assert!(profile.hero.phrases.iter().all(|p| !p.is_empty()));
        assert!(profile.about.skills.iter().all(|s| s.level <= 100));

        let current = profile.education.iter().filter(|e| e.is_current()).count();
        assert_eq!(current, 1);

        let mut ids = profile.certificates.iter().map(|c| c.id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), profile.certificates.len());
    }

    #[test]
    fn test_experience_kind_fallback() {
        let kind: ExperienceKind = serde_json::from_str("\"Hackathon\"").unwrap();
        assert_eq!(kind, ExperienceKind::Other);
        assert_eq!(kind.badge_class(), "bg-purple-500/10 text-purple-500");

        let kind: ExperienceKind = serde_json::from_str("\"Freelance\"").unwrap();
        assert_eq!(kind.label(), "Freelance");
    }

    #[test]
    fn test_parse_error() {
        let err = parse_profile(b"{ \"name\": 42 }").unwrap_err();
        assert!(matches!(err, ContentError::Parse { file: "profile.json", .. }));
        assert!(err.to_string().starts_with("Couldn't parse profile.json"));
    }

    #[test]
    fn test_leetcode_url() {
        let lc = LeetCodeProfile {
            username: "someone".to_string(),
        };
        assert_eq!(lc.profile_url(), "https://leetcode.com/someone");
    }
}
