//! Heuristic explode-view offsets keyed on panel labels

use glam::Vec3;

use super::{first_match, LabelRule};

/// Base explode offset `K`, in model units.
pub const DEFAULT_EXPLODE_DISTANCE: f32 = 3.0;

/// Offset directions in units of `K`. Order is precedence: "Left Rail"
/// moves forward as a rail, not sideways.
const EXPLODE_RULES: &[(LabelRule, [f32; 3])] = &[
    (LabelRule::Contains(&["stile", "rail"]), [0.0, 0.0, 1.5]),
    (LabelRule::Contains(&["left"]), [-1.0, 0.0, 0.0]),
    (LabelRule::Contains(&["right"]), [1.0, 0.0, 0.0]),
    (LabelRule::Equals("top"), [0.0, 1.0, 0.0]),
    (LabelRule::Equals("bottom"), [0.0, -1.0, 0.0]),
    (LabelRule::Equals("back"), [0.0, 0.0, -1.0]),
    (LabelRule::Contains(&["shelf"]), [0.0, 0.0, 1.0]),
    (LabelRule::Contains(&["divider"]), [0.5, 0.0, 0.0]),
    (LabelRule::Contains(&["stretcher"]), [0.0, 0.0, 1.0]),
    (LabelRule::Contains(&["toe"]), [0.0, -1.0, 0.0]),
];

/// Explode offset for a panel. Always zero when `active` is false;
/// zero for labels no rule recognizes.
pub fn explode_offset(label: &str, active: bool, distance: f32) -> Vec3 {
    if !active {
        return Vec3::ZERO;
    }
    first_match(EXPLODE_RULES, label)
        .map(|dir| Vec3::from(dir) * distance)
        .unwrap_or(Vec3::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: f32 = DEFAULT_EXPLODE_DISTANCE;

    fn on(label: &str) -> Vec3 {
        explode_offset(label, true, K)
    }

    #[test]
    fn test_inactive_is_always_zero() {
        for label in ["Left Side", "Top", "Back", "Shelf 1", "Face Frame Rail", "", "???"] {
            assert_eq!(explode_offset(label, false, K), Vec3::ZERO, "{label}");
        }
    }

    #[test]
    fn test_each_rule() {
        assert_eq!(on("Top Rail"), Vec3::new(0.0, 0.0, 1.5 * K));
        assert_eq!(on("Left Stile"), Vec3::new(0.0, 0.0, 1.5 * K));
        assert_eq!(on("Left Side"), Vec3::new(-K, 0.0, 0.0));
        assert_eq!(on("Right Side"), Vec3::new(K, 0.0, 0.0));
        assert_eq!(on("Top"), Vec3::new(0.0, K, 0.0));
        assert_eq!(on("Bottom"), Vec3::new(0.0, -K, 0.0));
        assert_eq!(on("Back"), Vec3::new(0.0, 0.0, -K));
        assert_eq!(on("Shelf 2"), Vec3::new(0.0, 0.0, K));
        assert_eq!(on("Center Divider"), Vec3::new(0.5 * K, 0.0, 0.0));
        assert_eq!(on("Front Stretcher"), Vec3::new(0.0, 0.0, K));
        assert_eq!(on("Toe Kick"), Vec3::new(0.0, -K, 0.0));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(on("LEFT SIDE"), on("left side"));
        assert_eq!(on("tOp"), Vec3::new(0.0, K, 0.0));
    }

    #[test]
    fn test_exact_words_do_not_match_substrings() {
        // "Top" and "Back" only match as whole labels
        assert_eq!(on("Top Panel"), Vec3::ZERO);
        assert_eq!(on("Back Panel"), Vec3::ZERO);
    }

    #[test]
    fn test_precedence() {
        // rail before left, left before right, shelf before toe
        assert_eq!(on("Left Rail"), Vec3::new(0.0, 0.0, 1.5 * K));
        assert_eq!(on("Left Right"), Vec3::new(-K, 0.0, 0.0));
        assert_eq!(on("Left Divider"), Vec3::new(-K, 0.0, 0.0));
        assert_eq!(on("Toe Shelf"), Vec3::new(0.0, 0.0, K));
    }

    #[test]
    fn test_unknown_label_is_zero() {
        assert_eq!(on("Door"), Vec3::ZERO);
        assert_eq!(on(""), Vec3::ZERO);
    }

    #[test]
    fn test_pure() {
        for label in ["Left Side", "Shelf", "Door"] {
            assert_eq!(on(label), on(label));
        }
    }

    #[test]
    fn test_scales_with_distance() {
        assert_eq!(explode_offset("Right Side", true, 10.0), Vec3::new(10.0, 0.0, 0.0));
    }
}
