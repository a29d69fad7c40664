use std::sync::LazyLock;

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Served from the assets dir (`public/`).
pub const FAVICON_HREF: &str = "/favicon.svg";

static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| load_portfolio().expect("embedded portfolio content should parse"));

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Decorative icons available to content entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Code,
    Palette,
    Database,
    Globe,
    User,
    Briefcase,
    GraduationCap,
    Send,
    Github,
    Linkedin,
    Mail,
    ExternalLink,
}

impl Icon {
    pub const ALL: [Icon; 12] = [
        Icon::Code,
        Icon::Palette,
        Icon::Database,
        Icon::Globe,
        Icon::User,
        Icon::Briefcase,
        Icon::GraduationCap,
        Icon::Send,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ExternalLink,
    ];

    /// Shapes drawn inside a 24x24 stroked `<svg>`.
    pub fn svg_body(self) -> &'static str {
        match self {
            Icon::Code => {
                r#"<polyline points="16 18 22 12 16 6"/><polyline points="8 6 2 12 8 18"/>"#
            }
            Icon::Palette => concat!(
                r#"<circle cx="13.5" cy="6.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="17.5" cy="10.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="8.5" cy="7.5" r=".5" fill="currentColor"/>"#,
                r#"<circle cx="6.5" cy="12.5" r=".5" fill="currentColor"/>"#,
                r#"<path d="M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"/>"#,
            ),
            Icon::Database => concat!(
                r#"<ellipse cx="12" cy="5" rx="9" ry="3"/>"#,
                r#"<path d="M3 5V19A9 3 0 0 0 21 19V5"/>"#,
                r#"<path d="M3 12A9 3 0 0 0 21 12"/>"#,
            ),
            Icon::Globe => concat!(
                r#"<circle cx="12" cy="12" r="10"/>"#,
                r#"<path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"/>"#,
                r#"<path d="M2 12h20"/>"#,
            ),
            Icon::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Icon::Briefcase => concat!(
                r#"<path d="M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
                r#"<rect width="20" height="14" x="2" y="6" rx="2"/>"#,
            ),
            Icon::GraduationCap => {
                r#"<path d="M22 10v6M2 10l10-5 10 5-10 5z"/><path d="M6 12v5c3 3 9 3 12 0v-5"/>"#
            }
            Icon::Send => r#"<path d="m22 2-7 20-4-9-9-4Z"/><path d="M22 2 11 13"/>"#,
            Icon::Github => concat!(
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>"#,
                r#"<path d="M9 18c-4.51 2-5-2-7-2"/>"#,
            ),
            Icon::Linkedin => concat!(
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>"#,
                r#"<rect width="4" height="12" x="2" y="9"/>"#,
                r#"<circle cx="4" cy="4" r="2"/>"#,
            ),
            Icon::Mail => concat!(
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/>"#,
                r#"<path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#,
            ),
            Icon::ExternalLink => concat!(
                r#"<path d="M15 3h6v6"/>"#,
                r#"<path d="M10 14 21 3"/>"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#,
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Projects,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    /// Gradient stops for the card banner.
    pub banner: String,
    /// Text colour class for the banner icon.
    pub tint: String,
    pub tags: Vec<String>,
    pub code_url: Option<String>,
    pub demo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    pub icon: Icon,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactBlurb {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: Icon,
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
    pub contact: ContactBlurb,
    pub socials: Vec<SocialLink>,
}

pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
    parse_portfolio(&file.data)
}

fn parse_portfolio(data: &[u8]) -> Result<Portfolio, ContentError> {
    serde_json::from_slice(data).map_err(|source| ContentError::Parse {
        file: PORTFOLIO_FILE.to_string(),
        source,
    })
}

pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

/// Year the site was built, taken from the timestamp recorded by build.rs.
pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(2025)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_portfolio_parses() {
        let p = load_portfolio().expect("portfolio should load");
        assert_eq!(p.owner, "Trupti Tekam");
        assert_eq!(p.about.len(), 2);
        assert_eq!(
            p.projects.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
            vec!["Personal Portfolio", "Task Tracker App", "Modern UI Kit"]
        );
        assert_eq!(
            p.skills.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
            vec!["Frontend", "Database", "Design"]
        );
        assert_eq!(p.skills[0].tags.len(), 7);
        assert_eq!(p.socials.len(), 3);
    }

    #[test]
    fn test_project_tags() {
        let p = portfolio();
        assert_eq!(
            p.projects[1].tags,
            vec!["React".to_string(), "Tailwind CSS".to_string(), "SQLite".to_string()]
        );
        assert_eq!(p.projects[0].icon, Icon::Palette);
        assert_eq!(p.projects[1].icon, Icon::Database);
    }

    #[test]
    fn test_nav_anchors() {
        let anchors = Section::ALL.iter().map(|s| s.anchor()).collect::<Vec<_>>();
        assert_eq!(anchors, vec!["#about", "#projects", "#skills", "#contact"]);
    }

    #[test]
    fn test_icon_names() {
        let icon: Icon = serde_json::from_str("\"graduation-cap\"").unwrap();
        assert_eq!(icon, Icon::GraduationCap);
        let icon: Icon = serde_json::from_str("\"external-link\"").unwrap();
        assert_eq!(icon, Icon::ExternalLink);
        assert!(serde_json::from_str::<Icon>("\"rocket\"").is_err());
    }

    #[test]
    fn test_every_icon_has_shapes() {
        const SHAPES: [&str; 5] = ["path", "circle", "rect", "ellipse", "polyline"];
        for icon in Icon::ALL {
            let body = icon.svg_body();
            let elements = body.split('<').skip(1).collect::<Vec<_>>();
            assert!(!elements.is_empty(), "{icon:?} draws nothing");
            assert!(body.starts_with('<'), "{icon:?}");
            for el in elements {
                let tag = el.split_whitespace().next().unwrap_or_default();
                assert!(SHAPES.contains(&tag), "{icon:?} uses <{tag}>");
                assert!(el.ends_with("/>"), "{icon:?} leaves <{tag}> open");
            }
        }
    }

    #[test]
    fn test_content_icons_are_drawable() {
        let p = portfolio();
        let used = p
            .projects
            .iter()
            .map(|p| p.icon)
            .chain(p.skills.iter().map(|s| s.icon))
            .chain(p.socials.iter().map(|s| s.icon));
        for icon in used {
            assert!(Icon::ALL.contains(&icon));
            assert!(!icon.svg_body().is_empty());
        }
    }

    #[test]
    fn test_favicon_is_shipped() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("public")
            .join(FAVICON_HREF.trim_start_matches('/'));
        assert!(path.is_file(), "missing {}", path.display());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_portfolio(b"{\"owner\": 1}").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert!(err.to_string().starts_with("Couldn't parse portfolio.json"));
    }

    #[test]
    fn test_build_year() {
        assert!(build_year() >= 2024);
    }
}
