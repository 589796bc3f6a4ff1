use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Navigation bar entries, in display order
    #[serde(default = "default_nav")]
    pub nav: Vec<NavItemConfig>,
    /// Pages the preview can display
    #[serde(default = "default_pages")]
    pub pages: Vec<PageConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (holds the local storage file)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Site-wide navigation rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page whose sections are addressed by bare fragments
    #[serde(default = "default_landing_page")]
    pub landing_page: String,
    /// Section treated as active when the landing page has no fragment
    #[serde(default = "default_section")]
    pub default_section: String,
    /// Viewport width (inclusive) at or below which the mobile menu is used
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u16,
    /// Scroll distance after which the header is marked as scrolled
    #[serde(default = "default_header_scroll_threshold")]
    pub header_scroll_threshold: f64,
    /// Extra space kept between the header and a scrolled-to section
    #[serde(default = "default_header_offset_padding")]
    pub header_offset_padding: f64,
    /// Offset used when the page has no header
    #[serde(default = "default_fallback_header_offset")]
    pub fallback_header_offset: f64,
    /// Pages that never get the smooth-scroll engine
    #[serde(default = "default_smooth_scroll_excluded_pages")]
    pub smooth_scroll_excluded_pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            landing_page: default_landing_page(),
            default_section: default_section(),
            mobile_breakpoint: default_mobile_breakpoint(),
            header_scroll_threshold: default_header_scroll_threshold(),
            header_offset_padding: default_header_offset_padding(),
            fallback_header_offset: default_fallback_header_offset(),
            smooth_scroll_excluded_pages: default_smooth_scroll_excluded_pages(),
        }
    }
}

/// Easing curve used by scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    Cubic,
    Quintic,
    /// 1 - 2^(-10t)
    EaseOut,
    /// min(1, 1.001 - 2^(-10t)), the curve of the site's smooth-scroll engine
    #[default]
    Expo,
}

/// Smooth scrolling configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    #[serde(default = "default_animation_duration_ms")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Also smooth touch scrolling
    #[serde(default = "default_true")]
    pub smooth_touch: bool,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Lines moved per scroll step when smoothing is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration_ms(),
            easing: EasingType::default(),
            smooth_touch: default_true(),
            animation_fps: default_animation_fps(),
            scroll_lines: default_scroll_lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Terminal width treated as the viewport width (0 = use the real width)
    #[serde(default)]
    pub viewport_width: u16,
    /// Palette overrides
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            viewport_width: 0,
            palette: PaletteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default)]
    pub light: ColorOverrides,
    #[serde(default)]
    pub dark: ColorOverrides,
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorOverrides {
    pub background: Option<String>,
    pub surface: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub accent: Option<String>,
    pub active: Option<String>,
}

/// A navigation bar entry; entries with children render as a dropdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItemConfig {
    pub label: String,
    #[serde(default)]
    pub href: String,
    #[serde(default)]
    pub children: Vec<NavItemConfig>,
}

impl NavItemConfig {
    pub fn link(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            children: Vec::new(),
        }
    }

    pub fn dropdown(label: &str, href: &str, children: Vec<NavItemConfig>) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
            children,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// File name the page is served under, e.g. "index.html"
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub hero: Option<HeroConfig>,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default = "default_true")]
    pub has_header: bool,
    #[serde(default = "default_true")]
    pub has_menu_toggler: bool,
    #[serde(default = "default_true")]
    pub has_theme_toggle: bool,
    #[serde(default = "default_true")]
    pub has_modal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroConfig {
    /// Section id of the hero block
    #[serde(default = "default_hero_id")]
    pub id: String,
    /// Title fragments animated one after another
    pub title_spans: Vec<String>,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub button: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Raw entrance delay, parsed leniently ("0.3", "0.3s")
    #[serde(default)]
    pub delay: Option<String>,
    /// Section offers the product enquiry button
    #[serde(default)]
    pub enquire: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("navlight")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_landing_page() -> String {
    "index.html".to_string()
}

fn default_section() -> String {
    "#hero".to_string()
}

fn default_hero_id() -> String {
    "hero".to_string()
}

fn default_mobile_breakpoint() -> u16 {
    992
}

fn default_header_scroll_threshold() -> f64 {
    50.0
}

fn default_header_offset_padding() -> f64 {
    20.0
}

fn default_fallback_header_offset() -> f64 {
    100.0
}

fn default_smooth_scroll_excluded_pages() -> Vec<String> {
    vec!["blog.html".to_string(), "products.html".to_string()]
}

fn default_animation_duration_ms() -> u64 {
    1300
}

fn default_animation_fps() -> u32 {
    60
}

fn default_scroll_lines() -> u16 {
    3
}

fn default_tick_rate() -> u64 {
    16
}

pub fn default_nav() -> Vec<NavItemConfig> {
    vec![
        NavItemConfig::link("Home", "#hero"),
        NavItemConfig::link("Services", "#services"),
        NavItemConfig::dropdown(
            "Products",
            "#products",
            vec![
                NavItemConfig::link("Featured", "#products"),
                NavItemConfig::link("Pricing", "#pricing"),
                NavItemConfig::link("Catalogue", "products.html"),
            ],
        ),
        NavItemConfig::link("Blog", "blog.html"),
        NavItemConfig::link("Contact", "#contact"),
    ]
}

pub fn default_pages() -> Vec<PageConfig> {
    fn section(id: &str, title: &str, body: &str) -> SectionConfig {
        SectionConfig {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            delay: None,
            enquire: false,
        }
    }

    vec![
        PageConfig {
            name: "index.html".to_string(),
            title: "Home".to_string(),
            hero: Some(HeroConfig {
                id: default_hero_id(),
                title_spans: vec![
                    "Build".to_string(),
                    "something".to_string(),
                    "remarkable".to_string(),
                ],
                subtitle: "Tools and services for teams that ship.".to_string(),
                button: Some("Get started".to_string()),
            }),
            sections: vec![
                section(
                    "services",
                    "Services",
                    "Consulting, design and engineering.\nWe help you plan, build and run your product.",
                ),
                SectionConfig {
                    enquire: true,
                    ..section(
                        "products",
                        "Products",
                        "Hardware and software bundles for growing teams.",
                    )
                },
                SectionConfig {
                    delay: Some("0.2".to_string()),
                    ..section(
                        "pricing",
                        "Pricing",
                        "Starter: free\nTeam: 29 per seat\nEnterprise: contact us",
                    )
                },
                section(
                    "contact",
                    "Contact",
                    "hello@example.com\n+1 555 0100",
                ),
            ],
            has_header: true,
            has_menu_toggler: true,
            has_theme_toggle: true,
            has_modal: true,
        },
        PageConfig {
            name: "blog.html".to_string(),
            title: "Blog".to_string(),
            hero: None,
            sections: vec![
                section("latest", "Latest posts", "Shipping faster with smaller releases."),
                section("archive", "Archive", "Older posts, grouped by year."),
            ],
            has_header: true,
            has_menu_toggler: true,
            has_theme_toggle: true,
            has_modal: false,
        },
        PageConfig {
            name: "products.html".to_string(),
            title: "Products".to_string(),
            hero: None,
            sections: vec![SectionConfig {
                enquire: true,
                ..section("catalogue", "Catalogue", "Every product we offer, with specs.")
            }],
            has_header: true,
            has_menu_toggler: true,
            has_theme_toggle: true,
            has_modal: true,
        },
    ]
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self =
                toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))?;
            tracing::debug!(path = %path.display(), "Loaded configuration");
            Ok(config)
        } else {
            Ok(Self::default_site())
        }
    }

    /// Defaults including the built-in demo site
    pub fn default_site() -> Self {
        Self {
            nav: default_nav(),
            pages: default_pages(),
            ..Self::default()
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/navlight/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("navlight")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// File backing the persistent key-value store
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir().join("local_storage.json")
    }

    pub fn page(&self, name: &str) -> Option<&PageConfig> {
        self.pages.iter().find(|p| p.name == name)
    }
}
