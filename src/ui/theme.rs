use ratatui::style::Color;

pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub primary: Color,   // Borders and indicators
    pub secondary: Color, // Borders while the 2nd layer is active
    pub text: Color,
}

impl Theme {
    /// Border/indicator color for the active key layer
    pub fn accent(&self, secondary: bool) -> Color {
        if secondary {
            self.secondary
        } else {
            self.primary
        }
    }
}

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "Default",
        bg: Color::Rgb(0, 0, 0),
        primary: Color::Rgb(255, 255, 255),
        secondary: Color::Rgb(155, 211, 221),
        text: Color::Rgb(255, 255, 255),
    },
    Theme {
        name: "Serika Dark",
        bg: Color::Rgb(50, 52, 55),
        primary: Color::Rgb(226, 183, 20),
        secondary: Color::Rgb(100, 102, 105),
        text: Color::Rgb(226, 183, 20),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        primary: Color::Rgb(98, 114, 164),
        secondary: Color::Rgb(68, 71, 90),
        text: Color::Rgb(189, 147, 249),
    },
    Theme {
        name: "Gruvbox",
        bg: Color::Rgb(40, 40, 40),
        primary: Color::Rgb(152, 151, 26),
        secondary: Color::Rgb(251, 73, 52),
        text: Color::Rgb(235, 219, 178),
    },
];

/// Look up a theme, wrapping out-of-range indices
pub fn theme(index: usize) -> &'static Theme {
    &THEMES[index % THEMES.len()]
}
