use std::fmt;

/// An RGB triple as sent to the indicator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const ORANGE: Color = Color::new(255, 190, 0);
    pub const GREY: Color = Color::new(127, 127, 127);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const TEAL: Color = Color::new(0, 128, 128);
    pub const YELLOW: Color = Color::new(255, 200, 0);

    #[cfg(test)]
    pub const PALETTE: [Color; 7] = [
        Color::RED,
        Color::BLUE,
        Color::ORANGE,
        Color::GREY,
        Color::GREEN,
        Color::TEAL,
        Color::YELLOW,
    ];

    pub const fn new(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b }
    }

    /// Dims every channel by `factor`, rounding to the nearest step.
    pub fn scaled(self, factor: f32) -> Color {
        let scale = |channel: u8| -> u8 {
            let value = (f32::from(channel) * factor).round();
            value.max(0.0).min(255.0) as u8
        };
        Color::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Color {
        Color::new(rgb[0], rgb[1], rgb[2])
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_rounds_each_channel() {
        assert_eq!(Color::new(255, 127, 0).scaled(0.4), Color::new(102, 51, 0));
        assert_eq!(Color::YELLOW.scaled(1.0), Color::YELLOW);
        assert_eq!(Color::TEAL.scaled(0.0), Color::new(0, 0, 0));
    }

    #[test]
    fn displays_as_blink_tool_rgb_argument() {
        assert_eq!(Color::ORANGE.to_string(), "255,190,0");
    }

    #[test]
    fn deserializes_from_json_triple() {
        let color: Color = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(color, Color::new(1, 2, 3));
        assert!(serde_json::from_str::<Color>("[256, 0, 0]").is_err());
        assert!(serde_json::from_str::<Color>("[1, 2]").is_err());
    }
}
