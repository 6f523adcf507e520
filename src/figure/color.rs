//! Named colors, resolved with the CSS palette matplotlib uses.

use super::FigureError;

/// 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const NAMED_COLORS: [(&str, Rgb); 9] = [
    ("black", Rgb(0, 0, 0)),
    ("white", Rgb(255, 255, 255)),
    ("gray", Rgb(128, 128, 128)),
    ("blue", Rgb(0, 0, 255)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 128, 0)),
    ("purple", Rgb(128, 0, 128)),
    ("orange", Rgb(255, 165, 0)),
    ("pink", Rgb(255, 192, 203)),
];

/// A display color that remembers the name it was picked by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    name: String,
    rgb: Rgb,
}

impl Color {
    /// Look up a color by name (case-insensitive).
    pub fn named(name: &str) -> Result<Self, FigureError> {
        let key = name.trim().to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == key)
            .map(|&(n, rgb)| Self {
                name: n.to_string(),
                rgb,
            })
            .ok_or_else(|| FigureError::UnknownColor(name.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_css_names() {
        assert_eq!(Color::named("green").unwrap().rgb(), Rgb(0, 128, 0));
        assert_eq!(Color::named(" Pink ").unwrap().rgb(), Rgb(255, 192, 203));
        assert_eq!(Color::named("ORANGE").unwrap().name(), "orange");
    }

    #[test]
    fn rejects_unknown_names() {
        let err = Color::named("chartreuse-ish").unwrap_err();
        assert_eq!(err, FigureError::UnknownColor("chartreuse-ish".to_string()));
    }
}
