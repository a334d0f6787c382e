//! Symbolic icon keys and the stroke glyphs they render as.
//!
//! Glyphs are 24x24 stroke outlines drawn with `currentColor`, so the
//! surrounding element decides their colour.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub paths: &'static [&'static str],
}

/// Icons an expertise entry may reference. The set is closed: a catalog key
/// outside it is rejected when the catalog loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Layout,
    Lightbulb,
    Maximize,
    Box,
    Camera,
}

impl Icon {
    pub const ALL: [Icon; 5] = [
        Icon::Layout,
        Icon::Lightbulb,
        Icon::Maximize,
        Icon::Box,
        Icon::Camera,
    ];

    pub fn from_key(key: &str) -> Option<Icon> {
        Icon::ALL.into_iter().find(|icon| icon.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            Icon::Layout => "Layout",
            Icon::Lightbulb => "Lightbulb",
            Icon::Maximize => "Maximize",
            Icon::Box => "Box",
            Icon::Camera => "Camera",
        }
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Icon::Layout => LAYOUT,
            Icon::Lightbulb => LIGHTBULB,
            Icon::Maximize => MAXIMIZE,
            Icon::Box => BOX,
            Icon::Camera => CAMERA,
        }
    }
}

const LAYOUT: Glyph = Glyph {
    paths: &["M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z", "M3 9h18", "M9 21V9"],
};

const LIGHTBULB: Glyph = Glyph {
    paths: &[
        "M15 14c.2-1 .7-1.7 1.5-2.5 1-.9 1.5-2.2 1.5-3.5A6 6 0 0 0 6 8c0 1 .2 2.2 1.5 3.5.7.7 1.3 1.5 1.5 2.5",
        "M9 18h6",
        "M10 22h4",
    ],
};

const MAXIMIZE: Glyph = Glyph {
    paths: &[
        "M8 3H5a2 2 0 0 0-2 2v3",
        "M21 8V5a2 2 0 0 0-2-2h-3",
        "M3 16v3a2 2 0 0 0 2 2h3",
        "M16 21h3a2 2 0 0 0 2-2v-3",
    ],
};

const BOX: Glyph = Glyph {
    paths: &[
        "M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
        "M3.3 7 12 12l8.7-5",
        "M12 22V12",
    ],
};

const CAMERA: Glyph = Glyph {
    paths: &[
        "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z",
        "M12 17a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
    ],
};

// Chrome glyphs, not addressable from the catalog.

pub const CLOSE: Glyph = Glyph {
    paths: &["M18 6 6 18", "M6 6l12 12"],
};

pub const ARROW_RIGHT: Glyph = Glyph {
    paths: &["M5 12h14", "M12 5l7 7-7 7"],
};

pub const QUOTE: Glyph = Glyph {
    paths: &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
};

pub const MAIL: Glyph = Glyph {
    paths: &[
        "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
        "M22 6l-10 7L2 6",
    ],
};

pub const PHONE: Glyph = Glyph {
    paths: &[
        "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
    ],
};

pub const INSTAGRAM: Glyph = Glyph {
    paths: &[
        "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
        "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
        "M17.5 6.5h.01",
    ],
};

pub const LINKEDIN: Glyph = Glyph {
    paths: &[
        "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
        "M2 9h4v12H2z",
        "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_round_trips_through_its_key() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_key(icon.key()), Some(icon));
        }
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(Icon::from_key("camera"), None);
        assert_eq!(Icon::from_key("Sofa"), None);
        assert_eq!(Icon::from_key(""), None);
    }

    #[test]
    fn every_icon_has_a_drawable_glyph() {
        for icon in Icon::ALL {
            let glyph = icon.glyph();
            assert!(!glyph.paths.is_empty(), "{:?} has no paths", icon);
            assert!(glyph.paths.iter().all(|d| d.starts_with('M')));
        }
    }
}
