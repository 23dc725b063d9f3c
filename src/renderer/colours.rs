/// Embed accent colours as `0xRRGGBB`.
pub struct Colours {
    pub system: u32,
    pub disk: u32,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            system: 0x3498db, // Blue - for the system stats embed
            disk: 0x2ecc71,   // Green - for the disk usage embed
        }
    }
}
