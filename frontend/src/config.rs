//! Site content and theme, loaded from the bundled `content/site.json`.
//!
//! Every section on the page, its copy and its styling tokens live here so the
//! page composition is data: dropping the packages section or reordering the
//! page is a content edit, not a code change.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

const BUNDLED_SITE: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("site configuration has no sections")]
    NoSections,
    #[error("section id `{0}` is used more than once")]
    DuplicateSection(String),
    #[error("link `{label}` points at unknown section `{target}`")]
    UnknownTarget { label: String, target: String },
    #[error("reveal threshold {value} for `{scope}` must be in (0, 1]")]
    InvalidThreshold { scope: String, value: f64 },
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    pub brand: Brand,
    pub theme: Theme,
    #[serde(default)]
    pub scroll: ScrollSettings,
    pub nav_links: Vec<NavLink>,
    pub cta: NavLink,
    pub sections: Vec<Section>,
    pub footer: Footer,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub logo_icon: String,
}

/// Styling tokens. Colours are any CSS colour, gradients any CSS image.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Theme {
    pub primary: String,
    pub primary_light: String,
    pub primary_dark: String,
    pub secondary: String,
    pub accent: String,
    pub neutral_light: String,
    pub neutral: String,
    pub neutral_dark: String,
    pub gradient_primary: String,
    pub gradient_secondary: String,
    pub gradient_hero: String,
    pub font_sans: String,
    pub font_serif: String,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScrollSettings {
    /// Nav bar switches style once the page is scrolled strictly past this.
    pub nav_threshold_px: f64,
    /// Height of the fixed nav bar; anchor scrolls stop this far above a section.
    pub nav_offset_px: f64,
    pub scroll_duration_ms: u32,
    /// Fraction of a section that must be visible before it animates in.
    pub reveal_threshold: f64,
    /// Card grids inside a section stagger in once this much of the grid
    /// itself is visible.
    pub grid_reveal_threshold: f64,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            nav_threshold_px: 50.0,
            nav_offset_px: 80.0,
            scroll_duration_ms: 800,
            reveal_threshold: 0.1,
            grid_reveal_threshold: 0.2,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Heading {
    pub prefix: String,
    pub highlight: String,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct IconText {
    pub icon: String,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Section {
    Hero(HeroSection),
    About(AboutSection),
    Services(ServicesSection),
    Packages(PackagesSection),
    Destinations(DestinationsSection),
    Contact(ContactSection),
}

impl Section {
    pub fn id(&self) -> &str {
        match self {
            Section::Hero(s) => &s.id,
            Section::About(s) => &s.id,
            Section::Services(s) => &s.id,
            Section::Packages(s) => &s.id,
            Section::Destinations(s) => &s.id,
            Section::Contact(s) => &s.id,
        }
    }

    /// Per-section override of the reveal threshold. The hero is on screen at
    /// load and never animates in, so it has none.
    pub fn reveal_threshold(&self) -> Option<f64> {
        match self {
            Section::Hero(_) => None,
            Section::About(s) => s.reveal_threshold,
            Section::Services(s) => s.reveal_threshold,
            Section::Packages(s) => s.reveal_threshold,
            Section::Destinations(s) => s.reveal_threshold,
            Section::Contact(s) => s.reveal_threshold,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct HeroSection {
    pub id: String,
    pub background_image: String,
    pub background_alt: String,
    pub badges: Vec<IconText>,
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub primary_cta: NavLink,
    pub secondary_cta: NavLink,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct AboutSection {
    pub id: String,
    pub heading: Heading,
    pub intro: String,
    pub image: String,
    pub image_alt: String,
    pub badge_title: String,
    pub badge_caption: String,
    pub story_title: String,
    pub story: String,
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServicesSection {
    pub id: String,
    pub heading: Heading,
    pub intro: String,
    pub items: Vec<Service>,
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub icon: String,
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PackagesSection {
    pub id: String,
    pub heading: Heading,
    pub intro: String,
    pub packages: Vec<Package>,
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Package {
    pub name: String,
    pub duration: String,
    pub price: u32,
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct DestinationsSection {
    pub id: String,
    pub heading: Heading,
    pub intro: String,
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Destination {
    pub name: String,
    pub price: u32,
    pub rating: f64,
    pub image: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactSection {
    pub id: String,
    pub heading: Heading,
    pub intro: String,
    pub details_title: String,
    pub details: Vec<ContactDetail>,
    pub socials_title: String,
    pub socials: Vec<SocialLink>,
    pub newsletter: Newsletter,
    #[serde(default)]
    pub reveal_threshold: Option<f64>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactDetail {
    pub icon: String,
    pub title: String,
    pub details: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub href: String,
    pub color: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Newsletter {
    pub title: String,
    pub body: String,
    pub button: String,
    pub disclaimer: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Footer {
    pub links: Vec<NavLink>,
    pub legal: Vec<String>,
    pub rights: String,
}

impl SiteConfig {
    /// The content compiled into the binary.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(BUNDLED_SITE)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::NoSections);
        }

        let mut ids = HashSet::new();
        for section in &self.sections {
            if !ids.insert(section.id()) {
                return Err(ConfigError::DuplicateSection(section.id().to_string()));
            }
        }

        check_threshold("default", self.scroll.reveal_threshold)?;
        check_threshold("grid", self.scroll.grid_reveal_threshold)?;
        for section in &self.sections {
            if let Some(value) = section.reveal_threshold() {
                check_threshold(section.id(), value)?;
            }
        }

        for link in self.links() {
            if !ids.contains(link.target.as_str()) {
                return Err(ConfigError::UnknownTarget {
                    label: link.label.clone(),
                    target: link.target.clone(),
                });
            }
        }

        Ok(())
    }

    /// Reveal threshold for a section, falling back to the site default.
    pub fn reveal_threshold_for(&self, section: &Section) -> f64 {
        section
            .reveal_threshold()
            .unwrap_or(self.scroll.reveal_threshold)
    }

    /// Every in-page link on the site: nav, call to action, hero buttons, footer.
    fn links(&self) -> impl Iterator<Item = &NavLink> {
        let hero_links = self.sections.iter().flat_map(|section| match section {
            Section::Hero(hero) => vec![&hero.primary_cta, &hero.secondary_cta],
            _ => Vec::new(),
        });

        self.nav_links
            .iter()
            .chain(std::iter::once(&self.cta))
            .chain(hero_links)
            .chain(self.footer.links.iter())
    }
}

fn check_threshold(scope: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold {
            scope: scope.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled() -> SiteConfig {
        SiteConfig::bundled().expect("bundled site config must validate")
    }

    #[test]
    fn bundled_config_is_valid() {
        let config = bundled();
        assert_eq!(config.brand.name, "Wanderlust");
        assert_eq!(config.scroll, ScrollSettings::default());
        assert_eq!(config.sections.first().map(Section::id), Some("home"));
        assert!(config
            .sections
            .iter()
            .any(|s| matches!(s, Section::Packages(_))));
    }

    #[test]
    fn layout_without_packages_is_expressible() {
        let mut config = bundled();
        config
            .sections
            .retain(|s| !matches!(s, Section::Packages(_)));
        config.nav_links.retain(|l| l.target != "packages");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn dangling_nav_target_is_rejected() {
        let mut config = bundled();
        config
            .sections
            .retain(|s| !matches!(s, Section::Packages(_)));
        match config.validate() {
            Err(ConfigError::UnknownTarget { target, .. }) => assert_eq!(target, "packages"),
            other => panic!("expected unknown target, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_section_ids_are_rejected() {
        let mut config = bundled();
        let about = config.sections[1].clone();
        config.sections.push(about);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateSection(id)) if id == "about"
        ));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let mut config = bundled();
        config.scroll.reveal_threshold = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn section_threshold_falls_back_to_default() {
        let config = bundled();
        let about = config.sections.iter().find(|s| s.id() == "about").unwrap();
        let services = config
            .sections
            .iter()
            .find(|s| s.id() == "services")
            .unwrap();
        assert_eq!(config.reveal_threshold_for(about), 0.1);
        assert_eq!(config.reveal_threshold_for(services), 0.1);
    }

    #[test]
    fn bundled_sections_reveal_at_ten_percent() {
        let config = bundled();
        for section in config.sections.iter().filter(|s| !matches!(s, Section::Hero(_))) {
            assert_eq!(config.reveal_threshold_for(section), 0.1, "{}", section.id());
        }
        assert_eq!(config.scroll.grid_reveal_threshold, 0.2);
    }

    #[test]
    fn out_of_range_grid_threshold_is_rejected() {
        let mut config = bundled();
        config.scroll.grid_reveal_threshold = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidThreshold { scope, .. }) if scope == "grid"
        ));
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        assert!(matches!(
            SiteConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
