/// An opaque color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red.
    pub red: u8,
    /// Green.
    pub green: u8,
    /// Blue.
    pub blue: u8,
}

impl Rgb {
    /// Create a new color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Rgb {
        Rgb { red, green, blue }
    }

    /// Create a new color from float components between 0.0 and 1.0.
    pub fn from_f32(r: f32, g: f32, b: f32) -> Rgb {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }

    /// Create a RGB array for use in PDF.
    pub fn to_pdf_color(&self) -> [f32; 3] {
        [
            self.red as f32 / 255.0,
            self.green as f32 / 255.0,
            self.blue as f32 / 255.0,
        ]
    }
}

