//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including captured command output.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Show outcomes only (no `[INFO]` lines).
    Quiet,
}

impl OutputMode {
    /// Check if this mode echoes captured command output.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows `[INFO]` lines and banners.
    pub fn shows_info(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
