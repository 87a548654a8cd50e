//! Theme resolution for the dashboard shell.
//!
//! Two built-in palettes (light and dark) and a closed set of semantic
//! roles. [`resolve`] maps a `(ThemeId, Role)` pair to a concrete
//! [`StyleSpec`]; it is pure and total.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Identifiers
// ============================================================================

/// Identifier of one of the built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Light,
    Dark,
}

impl ThemeId {
    /// Every built-in theme, in declaration order.
    pub const ALL: [ThemeId; 2] = [ThemeId::Light, ThemeId::Dark];

    /// The other theme. Light and Dark are the only transition pair.
    pub fn toggle(self) -> Self {
        match self {
            ThemeId::Light => ThemeId::Dark,
            ThemeId::Dark => ThemeId::Light,
        }
    }

    /// Lowercase name shown in the header (`light` / `dark`).
    pub fn name(self) -> &'static str {
        match self {
            ThemeId::Light => "light",
            ThemeId::Dark => "dark",
        }
    }

    /// Indicator glyph shown next to the theme name.
    pub fn icon(self) -> &'static str {
        match self {
            ThemeId::Light => "☀",
            ThemeId::Dark => "☾",
        }
    }

    /// Parse a theme name, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ThemeId::Light),
            "dark" => Some(ThemeId::Dark),
            _ => None,
        }
    }

    /// The palette backing this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeId::Light => &LIGHT_PALETTE,
            ThemeId::Dark => &DARK_PALETTE,
        }
    }
}

/// Flip Light <-> Dark.
pub fn toggle(theme: ThemeId) -> ThemeId {
    theme.toggle()
}

// ============================================================================
// Palettes
// ============================================================================

/// Raw colors of a theme. Roles are resolved against these slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub border: Color,
}

/// Light palette.
pub const LIGHT_PALETTE: Palette = Palette {
    background: Color::Rgb(0xFF, 0xFF, 0xFF),
    foreground: Color::Rgb(0x00, 0x00, 0x00),
    primary: Color::Rgb(0x00, 0x7A, 0xCC),
    secondary: Color::Rgb(0x6C, 0x75, 0x7D),
    success: Color::Rgb(0x28, 0xA7, 0x45),
    warning: Color::Rgb(0xFF, 0xC1, 0x07),
    error: Color::Rgb(0xDC, 0x35, 0x45),
    muted: Color::Rgb(0x6C, 0x75, 0x7D),
    border: Color::Rgb(0xDE, 0xE2, 0xE6),
};

/// Dark palette. Only background, foreground and border differ from light.
pub const DARK_PALETTE: Palette = Palette {
    background: Color::Rgb(0x1E, 0x1E, 0x1E),
    foreground: Color::Rgb(0xFF, 0xFF, 0xFF),
    border: Color::Rgb(0x49, 0x50, 0x57),
    ..LIGHT_PALETTE
};

// ============================================================================
// Roles
// ============================================================================

/// Semantic style role. Callers ask for a role, never a raw color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Header,
    Sidebar,
    Content,
    StatusBar,
    Button,
    ButtonActive,
    Error,
    Success,
    Warning,
    Muted,
    Border,
    Title,
    Subtitle,
    Text,
    Info,
}

impl Role {
    pub const ALL: [Role; 15] = [
        Role::Header,
        Role::Sidebar,
        Role::Content,
        Role::StatusBar,
        Role::Button,
        Role::ButtonActive,
        Role::Error,
        Role::Success,
        Role::Warning,
        Role::Muted,
        Role::Border,
        Role::Title,
        Role::Subtitle,
        Role::Text,
        Role::Info,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Header => "header",
            Role::Sidebar => "sidebar",
            Role::Content => "content",
            Role::StatusBar => "statusBar",
            Role::Button => "button",
            Role::ButtonActive => "buttonActive",
            Role::Error => "error",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Muted => "muted",
            Role::Border => "border",
            Role::Title => "title",
            Role::Subtitle => "subtitle",
            Role::Text => "text",
            Role::Info => "info",
        }
    }

    /// Look up a role by its name. Accepts `statusBar` and `status_bar` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.name().to_ascii_lowercase() == normalized)
    }
}

// ============================================================================
// Style Records
// ============================================================================

/// Concrete style record: foreground, optional background, optional bold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpec {
    pub fg: Color,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl StyleSpec {
    pub const fn fg(fg: Color) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    pub const fn on(self, bg: Color) -> Self {
        Self {
            bg: Some(bg),
            ..self
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    /// Convert to a ratatui [`Style`].
    pub fn to_style(self) -> Style {
        let mut style = Style::default().fg(self.fg);
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

impl From<StyleSpec> for Style {
    fn from(spec: StyleSpec) -> Self {
        spec.to_style()
    }
}

/// Resolve a role against a theme.
pub fn resolve(theme: ThemeId, role: Role) -> StyleSpec {
    let p = theme.palette();
    match role {
        Role::Header => StyleSpec::fg(p.foreground).on(p.primary).bold(),
        Role::Sidebar => StyleSpec::fg(p.foreground).on(p.secondary),
        Role::Content => StyleSpec::fg(p.foreground).on(p.background),
        Role::StatusBar => StyleSpec::fg(p.secondary).on(p.background),
        Role::Button => StyleSpec::fg(p.foreground).on(p.primary),
        Role::ButtonActive => StyleSpec::fg(p.background).on(p.primary).bold(),
        Role::Error => StyleSpec::fg(p.error).bold(),
        Role::Success => StyleSpec::fg(p.success).bold(),
        Role::Warning => StyleSpec::fg(p.warning).bold(),
        Role::Muted => StyleSpec::fg(p.muted),
        Role::Border => StyleSpec::fg(p.border),
        Role::Title => StyleSpec::fg(p.primary).bold(),
        Role::Subtitle => StyleSpec::fg(p.secondary).bold(),
        Role::Text => StyleSpec::fg(p.foreground),
        Role::Info => StyleSpec::fg(p.primary),
    }
}

/// Style used when a role name is not recognised.
pub fn default_style(theme: ThemeId) -> StyleSpec {
    let p = theme.palette();
    StyleSpec::fg(p.foreground).on(p.background)
}

/// Resolve a role given by name, falling back to [`default_style`].
pub fn resolve_named(theme: ThemeId, role_name: &str) -> StyleSpec {
    Role::from_name(role_name)
        .map(|role| resolve(theme, role))
        .unwrap_or_else(|| default_style(theme))
}
