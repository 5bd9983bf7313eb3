//! Screen identifiers.

use std::fmt;

/// One screen per portfolio section, navigable by number keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScreenId {
    #[default]
    Hero,
    About,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl ScreenId {
    /// All screens in tab-bar order.
    pub const ALL: [ScreenId; 6] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Contact,
    ];

    /// Numeric key (1-6) for this screen.
    pub fn number(self) -> u8 {
        match self {
            Self::Hero => 1,
            Self::About => 2,
            Self::Experience => 3,
            Self::Projects => 4,
            Self::Skills => 5,
            Self::Contact => 6,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    /// Next screen in tab order (wraps around).
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous screen in tab order (wraps around).
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keys_round_trip_and_tabs_wrap() {
        for id in ScreenId::ALL {
            assert_eq!(ScreenId::from_number(id.number()), Some(id));
        }
        assert_eq!(ScreenId::from_number(7), None);
        assert_eq!(ScreenId::Contact.next(), ScreenId::Hero);
        assert_eq!(ScreenId::Hero.prev(), ScreenId::Contact);
    }
}
