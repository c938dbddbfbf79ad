//! Fixed colors for consistent chart theming.

/// Named theme colors.
pub struct ChartColors;

impl ChartColors {
    pub const PRIMARY: &'static str = "#3498db";
    pub const SECONDARY: &'static str = "#2ecc71";
    pub const ACCENT: &'static str = "#e74c3c";
    pub const WARNING: &'static str = "#f39c12";
    pub const INFO: &'static str = "#9b59b6";
    pub const SUCCESS: &'static str = "#27ae60";
    pub const LIGHT: &'static str = "#ecf0f1";
    pub const DARK: &'static str = "#2c3e50";
}

/// Dataset colors in assignment order.
pub const DATASET_PALETTE: [&str; 10] = [
    ChartColors::PRIMARY,
    ChartColors::SECONDARY,
    ChartColors::ACCENT,
    ChartColors::WARNING,
    ChartColors::INFO,
    ChartColors::SUCCESS,
    "#16a085",
    "#8e44ad",
    "#d35400",
    "#c0392b",
];

/// `count` colors, cycling through [`DATASET_PALETTE`].
pub fn generate_dataset_colors(count: usize) -> Vec<&'static str> {
    DATASET_PALETTE.iter().copied().cycle().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_ten() {
        let colors = generate_dataset_colors(13);
        assert_eq!(colors.len(), 13);
        assert_eq!(colors[10], colors[0]);
        assert_eq!(colors[12], "#e74c3c");
    }

    #[test]
    fn stable_prefix() {
        assert_eq!(generate_dataset_colors(3), generate_dataset_colors(13)[..3].to_vec());
        assert!(generate_dataset_colors(0).is_empty());
    }
}
