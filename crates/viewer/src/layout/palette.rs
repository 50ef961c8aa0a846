//! Label-driven panel colors

use super::{first_match, LabelRule};

/// Color for labels no rule recognizes
pub const DEFAULT_PANEL_COLOR: [u8; 3] = [0xd2, 0xb4, 0x8c];

const COLOR_RULES: &[(LabelRule, [u8; 3])] = &[
    // face frame
    (LabelRule::Contains(&["stile", "rail"]), [0x8b, 0x5a, 0x2b]),
    (LabelRule::Contains(&["side"]), [0xde, 0xb8, 0x87]),
    (LabelRule::Equals("top"), [0xc1, 0x9a, 0x6b]),
    (LabelRule::Equals("bottom"), [0xc1, 0x9a, 0x6b]),
    (LabelRule::Equals("back"), [0xa0, 0x82, 0x5a]),
    (LabelRule::Contains(&["shelf"]), [0xf5, 0xde, 0xb3]),
    (LabelRule::Contains(&["divider"]), [0xe6, 0xc2, 0x9a]),
    (LabelRule::Contains(&["stretcher"]), [0xb8, 0x86, 0x0b]),
    (LabelRule::Contains(&["toe"]), [0x55, 0x55, 0x55]),
    (LabelRule::Contains(&["door", "drawer"]), [0xcd, 0x85, 0x3f]),
];

/// Base color of a panel's material.
pub fn panel_color(label: &str) -> [u8; 3] {
    first_match(COLOR_RULES, label).unwrap_or(DEFAULT_PANEL_COLOR)
}

/// `[u8; 3]` → `[f32; 3]` in 0..1 for vertex colors
pub fn to_unit_rgb(c: [u8; 3]) -> [f32; 3] {
    [
        c[0] as f32 / 255.0,
        c[1] as f32 / 255.0,
        c[2] as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_gets_default() {
        assert_eq!(panel_color("Mystery Part"), DEFAULT_PANEL_COLOR);
    }

    #[test]
    fn test_deterministic_and_case_insensitive() {
        assert_eq!(panel_color("Left Side"), panel_color("LEFT SIDE"));
        assert_eq!(panel_color("Left Side"), panel_color("Right Side"));
    }

    #[test]
    fn test_face_frame_beats_side() {
        assert_ne!(panel_color("Side Rail"), panel_color("Left Side"));
        assert_eq!(panel_color("Side Rail"), panel_color("Top Rail"));
    }

    #[test]
    fn test_unit_rgb() {
        assert_eq!(to_unit_rgb([255, 0, 51]), [1.0, 0.0, 0.2]);
    }
}
