//! Visual theme and styling.

use console::Style;

/// Kind of status line, rendered as a bracketed tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    /// The bracketed tag that prefixes lines of this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            StatusKind::Info => "[INFO]",
            StatusKind::Success => "[SUCCESS]",
            StatusKind::Warning => "[WARN]",
            StatusKind::Error => "[ERROR]",
        }
    }
}

/// Setup tool visual theme.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Style for `[SUCCESS]` tags (green).
    pub success: Style,
    /// Style for `[WARN]` tags (orange).
    pub warning: Style,
    /// Style for `[ERROR]` tags (red bold).
    pub error: Style,
    /// Style for `[INFO]` tags (magenta).
    pub info: Style,
    /// Style for dim/secondary text such as captured output.
    pub dim: Style,
    /// Style for the banner title (bold).
    pub header: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            info: Style::new().magenta(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
        }
    }

    /// Create a theme without colors.
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            header: Style::new(),
        }
    }

    fn style_for(&self, kind: StatusKind) -> &Style {
        match kind {
            StatusKind::Info => &self.info,
            StatusKind::Success => &self.success,
            StatusKind::Warning => &self.warning,
            StatusKind::Error => &self.error,
        }
    }

    /// Format a status line: styled tag, then the message.
    pub fn format_status(&self, kind: StatusKind, msg: &str) -> String {
        format!("{} {}", self.style_for(kind).apply_to(kind.tag()), msg)
    }

    /// Format a header banner with its underline.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}\n{}", self.header.apply_to(title), "=".repeat(50))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
