//! Chart colors.

/// Sequential "amp" palette (cmocean), light to dark, used for pie slices.
/// Slices take colors in order, wrapping if there are more slices than colors.
pub const AMP: [&str; 12] = [
    "rgb(241, 236, 236)",
    "rgb(230, 209, 203)",
    "rgb(221, 182, 170)",
    "rgb(213, 156, 137)",
    "rgb(205, 129, 103)",
    "rgb(196, 102, 73)",
    "rgb(186, 74, 47)",
    "rgb(172, 44, 36)",
    "rgb(149, 19, 39)",
    "rgb(120, 14, 40)",
    "rgb(89, 13, 31)",
    "rgb(60, 9, 17)",
];

/// Fill color for every bar in the pixel count chart.
pub const BAR_COLOR: &str = "darkred";

/// Outline drawn between pie slices.
pub const SLICE_BORDER_COLOR: &str = "white";
pub const SLICE_BORDER_WIDTH: f64 = 2.0;

/// Page heading color.
pub const HEADING_COLOR: &str = "#503D36";

/// Colors for `n` slices, cycling through [`AMP`].
pub fn amp_colors(n: usize) -> Vec<String> {
    AMP.iter().cycle().take(n).map(|c| c.to_string()).collect()
}
