//! Service icon vocabulary.
//!
//! Content data names icons from a closed set ([`IconName`]); pages look them
//! up through [`icon_for`], which accepts any string and falls back to the
//! `Users` glyph for names outside the set.

use serde::{Deserialize, Serialize};

/// Icons a service record may reference.
///
/// Deserialization is strict: content naming any other icon fails to load.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum IconName {
    Users,
    FileText,
    Briefcase,
    Heart,
    Shield,
}

/// Glyph used when a name does not match any known icon.
pub const DEFAULT_ICON: IconName = IconName::Users;

impl IconName {
    pub const ALL: [IconName; 5] = [
        IconName::Users,
        IconName::FileText,
        IconName::Briefcase,
        IconName::Heart,
        IconName::Shield,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IconName::Users => "Users",
            IconName::FileText => "FileText",
            IconName::Briefcase => "Briefcase",
            IconName::Heart => "Heart",
            IconName::Shield => "Shield",
        }
    }

    /// Exact, case-sensitive match against the known names.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|icon| icon.as_str() == name)
    }

    pub fn icon(self) -> &'static Icon {
        match self {
            IconName::Users => &USERS,
            IconName::FileText => &FILE_TEXT,
            IconName::Briefcase => &BRIEFCASE,
            IconName::Heart => &HEART,
            IconName::Shield => &SHIELD,
        }
    }
}

/// Renderable 24x24 stroke icon.
#[derive(Debug, Eq, PartialEq)]
pub struct Icon {
    pub name: IconName,
    /// Inner SVG markup (paths and shapes only).
    pub body: &'static str,
}

impl Icon {
    /// Full `<svg>` element; `class` is emitted verbatim.
    pub fn to_svg(&self, class: &str) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"24\" height=\"24\" viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" stroke-linecap=\"round\" stroke-linejoin=\"round\" class=\"{class}\" aria-hidden=\"true\">{}</svg>",
            self.body
        )
    }
}

static USERS: Icon = Icon {
    name: IconName::Users,
    body: "<path d=\"M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2\"/><circle cx=\"9\" cy=\"7\" r=\"4\"/><path d=\"M22 21v-2a4 4 0 0 0-3-3.87\"/><path d=\"M16 3.13a4 4 0 0 1 0 7.75\"/>",
};

static FILE_TEXT: Icon = Icon {
    name: IconName::FileText,
    body: "<path d=\"M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z\"/><path d=\"M14 2v4a2 2 0 0 0 2 2h4\"/><path d=\"M10 9H8\"/><path d=\"M16 13H8\"/><path d=\"M16 17H8\"/>",
};

static BRIEFCASE: Icon = Icon {
    name: IconName::Briefcase,
    body: "<path d=\"M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16\"/><rect width=\"20\" height=\"14\" x=\"2\" y=\"6\" rx=\"2\"/>",
};

static HEART: Icon = Icon {
    name: IconName::Heart,
    body: "<path d=\"M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z\"/>",
};

static SHIELD: Icon = Icon {
    name: IconName::Shield,
    body: "<path d=\"M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z\"/>",
};

/// Resolve any icon name to a glyph. Unknown names, including the empty
/// string, get [`DEFAULT_ICON`].
pub fn icon_for(name: &str) -> &'static Icon {
    IconName::from_name(name).unwrap_or(DEFAULT_ICON).icon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_own_glyph() {
        for name in IconName::ALL {
            let icon = icon_for(name.as_str());
            assert_eq!(icon.name, name);
            assert!(!icon.body.is_empty());
        }
        assert_eq!(icon_for("Heart").name, IconName::Heart);
    }

    #[test]
    fn unknown_names_fall_back_to_default() {
        let empty = icon_for("");
        assert_eq!(empty.name, DEFAULT_ICON);
        assert!(std::ptr::eq(icon_for("Rocket"), empty));
        assert!(std::ptr::eq(icon_for("heart"), empty));
        assert!(std::ptr::eq(icon_for(" Heart"), empty));
    }

    #[test]
    fn icon_name_deserialization_is_strict() {
        let parsed: IconName = serde_json::from_str("\"Briefcase\"").unwrap();
        assert_eq!(parsed, IconName::Briefcase);
        assert!(serde_json::from_str::<IconName>("\"Rocket\"").is_err());
    }

    #[test]
    fn svg_wraps_body_with_class() {
        let svg = icon_for("Shield").to_svg("icon icon-lg");
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("class=\"icon icon-lg\""));
        assert!(svg.contains(SHIELD.body));
        assert!(svg.ends_with("</svg>"));
    }
}
