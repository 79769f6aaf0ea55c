// SPDX-License-Identifier: MPL-2.0
//! Portfolio content: owner details, tagline phrases, stats, skills,
//! timeline entries and gallery projects.
//!
//! Content is read once at startup from a TOML file, or from the sample
//! portfolio embedded in the binary when no file is configured. It is
//! immutable afterwards.
//!
//! ```toml
//! [owner]
//! name = "Alex Morgan"
//! phrases = ["Graphics Designer", "Web Designer"]
//!
//! [[projects]]
//! image = "images/brand.jpg"
//! title = "Brand Identity"
//! description = "Logo and stationery for a coffee roaster."
//! tags = "Branding, Logo, Print"
//! ```

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct ContentAsset;

/// File name of the embedded sample portfolio.
const SAMPLE_CONTENT: &str = "portfolio.toml";

/// Splits a comma-separated tag string.
///
/// Segments are trimmed and empty ones dropped; order and duplicates are
/// kept as written.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// One project shown in the gallery and the lightbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    /// Image path, already resolved against the content file's directory.
    pub image: PathBuf,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Who the portfolio is about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Owner {
    pub name: String,
    /// Phrases cycled by the hero typewriter, in order.
    pub phrases: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// A count-up figure in the about section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
}

/// A skill bar; `progress` is a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub progress: u8,
}

/// An entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct RawProject {
    image: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tags: String,
}

#[derive(Debug, Deserialize)]
struct RawPortfolio {
    owner: Owner,
    #[serde(default)]
    stats: Vec<Stat>,
    #[serde(default)]
    skills: Vec<Skill>,
    #[serde(default)]
    timeline: Vec<TimelineEntry>,
    #[serde(default)]
    projects: Vec<RawProject>,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    pub owner: Owner,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub timeline: Vec<TimelineEntry>,
    pub projects: Vec<GalleryItem>,
}

impl Portfolio {
    /// Parses portfolio TOML; relative image paths are joined onto
    /// `base_dir` when given.
    pub fn from_toml(source: &str, base_dir: Option<&Path>) -> Result<Self> {
        let raw: RawPortfolio =
            toml::from_str(source).map_err(|err| Error::Content(err.to_string()))?;

        if raw.owner.phrases.is_empty() {
            return Err(Error::Content(
                "owner.phrases must list at least one phrase".to_string(),
            ));
        }

        let projects = raw
            .projects
            .into_iter()
            .map(|project| GalleryItem {
                image: resolve_image(&project.image, base_dir),
                title: project.title,
                description: project.description,
                tags: parse_tags(&project.tags),
            })
            .collect();

        let skills = raw
            .skills
            .into_iter()
            .map(|skill| Skill {
                progress: skill.progress.min(100),
                ..skill
            })
            .collect();

        Ok(Self {
            owner: raw.owner,
            stats: raw.stats,
            skills,
            timeline: raw.timeline,
            projects,
        })
    }

    /// Loads a portfolio file from disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source, path.parent())
    }

    /// A portfolio with only an owner name, used when no content at all
    /// can be loaded.
    #[must_use]
    pub fn blank(name: impl Into<String>) -> Self {
        Self {
            owner: Owner {
                name: name.into(),
                phrases: Vec::new(),
                bio: String::new(),
                email: None,
                location: None,
            },
            stats: Vec::new(),
            skills: Vec::new(),
            timeline: Vec::new(),
            projects: Vec::new(),
        }
    }

    /// The sample portfolio compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = ContentAsset::get(SAMPLE_CONTENT)
            .ok_or_else(|| Error::Content(format!("missing embedded {SAMPLE_CONTENT}")))?;
        let source = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml(&source, None)
    }
}

/// Loads the portfolio from `path`, or the embedded sample when `path` is
/// `None`.
///
/// Returns the content plus the i18n key of a warning when the file could
/// not be used and the sample was loaded instead.
pub fn load(path: Option<&Path>) -> Result<(Portfolio, Option<String>)> {
    let Some(path) = path else {
        return Ok((Portfolio::embedded()?, None));
    };

    match Portfolio::load_from_path(path) {
        Ok(portfolio) => Ok((portfolio, None)),
        Err(err) => {
            log::warn!("Falling back to sample portfolio, {}: {err}", path.display());
            Ok((
                Portfolio::embedded()?,
                Some("notification-content-load-error".to_string()),
            ))
        }
    }
}

fn resolve_image(raw: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(raw.trim());
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const MINIMAL: &str = r#"
[owner]
name = "Sam"
phrases = ["Designer"]

[[projects]]
image = "shots/one.png"
title = "One"
tags = " Branding, , Logo,Branding "
"#;

    #[test]
    fn parse_tags_trims_and_drops_empty_segments() {
        assert_eq!(
            parse_tags(" Branding, , Logo,Branding "),
            vec!["Branding", "Logo", "Branding"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn relative_images_resolve_against_base_dir() {
        let portfolio =
            Portfolio::from_toml(MINIMAL, Some(Path::new("/srv/site"))).expect("valid content");
        assert_eq!(
            portfolio.projects[0].image,
            PathBuf::from("/srv/site/shots/one.png")
        );
        assert_eq!(portfolio.projects[0].tags, vec!["Branding", "Logo", "Branding"]);
        assert!(portfolio.projects[0].description.is_empty());
    }

    #[test]
    fn absolute_images_are_kept() {
        let source = MINIMAL.replace("shots/one.png", "/abs/one.png");
        let portfolio =
            Portfolio::from_toml(&source, Some(Path::new("/srv/site"))).expect("valid content");
        assert_eq!(portfolio.projects[0].image, PathBuf::from("/abs/one.png"));
    }

    #[test]
    fn empty_phrase_list_is_rejected() {
        let source = "[owner]\nname = \"Sam\"\nphrases = []\n";
        assert!(matches!(
            Portfolio::from_toml(source, None),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn skill_progress_is_capped() {
        let source = format!("{MINIMAL}\n[[skills]]\nname = \"Figma\"\nprogress = 180\n");
        let portfolio = Portfolio::from_toml(&source, None).expect("valid content");
        assert_eq!(portfolio.skills[0].progress, 100);
    }

    #[test]
    fn embedded_sample_is_valid() {
        let portfolio = Portfolio::embedded().expect("embedded sample parses");
        assert!(!portfolio.owner.phrases.is_empty());
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.stats.is_empty());
    }

    #[test]
    fn load_without_path_uses_sample() {
        let (portfolio, warning) = load(None).expect("sample loads");
        assert!(warning.is_none());
        assert_eq!(portfolio, Portfolio::embedded().expect("sample loads"));
    }

    #[test]
    fn load_falls_back_with_warning_on_bad_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("portfolio.toml");
        fs::write(&path, "[owner\n").expect("failed to write file");

        let (portfolio, warning) = load(Some(&path)).expect("fallback loads");

        assert_eq!(warning.as_deref(), Some("notification-content-load-error"));
        assert_eq!(portfolio, Portfolio::embedded().expect("sample loads"));
    }

    #[test]
    fn load_from_path_reads_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("portfolio.toml");
        fs::write(&path, MINIMAL).expect("failed to write file");

        let (portfolio, warning) = load(Some(&path)).expect("content loads");

        assert!(warning.is_none());
        assert_eq!(portfolio.owner.name, "Sam");
        assert_eq!(
            portfolio.projects[0].image,
            temp_dir.path().join("shots/one.png")
        );
    }
}
