// ── Social icon lookup ──

use strum::Display;

/// Glyph shown for a social link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SocialIcon {
    GitHub,
    LinkedIn,
    Mail,
}

impl SocialIcon {
    /// Case-insensitive platform lookup. Unknown platforms get the GitHub glyph.
    pub fn resolve(platform: &str) -> Self {
        match platform.trim().to_ascii_lowercase().as_str() {
            "linkedin" => Self::LinkedIn,
            "email" | "mail" => Self::Mail,
            _ => Self::GitHub,
        }
    }

    /// Nerd Font glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::GitHub => "\u{f09b}",
            Self::LinkedIn => "\u{f0e1}",
            Self::Mail => "\u{f0e0}",
        }
    }
}
