//! Factory functions for sample panel lists.
//!
//! Used by tests and the demo host. Units are inches; x runs left to right,
//! y up, z from the back (0) to the front.

use shared::PanelRecord;

const T: f64 = 0.75;

fn p(label: &str, size: [f64; 3], center: [f64; 3]) -> PanelRecord {
    PanelRecord::new(label, size, center)
}

/// Single side panel standing on the origin plane.
pub fn left_side_panel() -> PanelRecord {
    p("Left Side", [18.0, 30.0, 0.75], [0.0, 15.0, 0.0])
}

/// 24" base cabinet with toe kick, shelf and face frame.
pub fn base_cabinet() -> Vec<PanelRecord> {
    let (w, h, d) = (24.0, 34.5, 24.0);
    let inner = w - 2.0 * T;
    vec![
        p("Left Side", [T, h, d], [T / 2.0, h / 2.0, d / 2.0]),
        p("Right Side", [T, h, d], [w - T / 2.0, h / 2.0, d / 2.0]),
        p("Bottom", [inner, T, d - T], [w / 2.0, 4.0 + T / 2.0, (d - T) / 2.0]),
        p("Top", [inner, T, d - T], [w / 2.0, h - T / 2.0, (d - T) / 2.0]),
        p("Back", [inner, h - 4.0, 0.25], [w / 2.0, 4.0 + (h - 4.0) / 2.0, 0.125]),
        p("Shelf", [inner, T, d - 2.0], [w / 2.0, 19.0, (d - 2.0) / 2.0 + 0.25]),
        p("Toe Kick", [inner, 4.0, T], [w / 2.0, 2.0, d - 3.0]),
        p("Left Stile", [1.5, h - 4.0, T], [0.75, 4.0 + (h - 4.0) / 2.0, d + T / 2.0]),
        p("Right Stile", [1.5, h - 4.0, T], [w - 0.75, 4.0 + (h - 4.0) / 2.0, d + T / 2.0]),
        p("Top Rail", [w - 3.0, 1.5, T], [w / 2.0, h - 0.75, d + T / 2.0]),
        p("Bottom Rail", [w - 3.0, 1.5, T], [w / 2.0, 4.75, d + T / 2.0]),
    ]
}

/// 30" wall cabinet split by a center divider.
pub fn wall_cabinet() -> Vec<PanelRecord> {
    let (w, h, d) = (30.0, 30.0, 12.0);
    let inner = w - 2.0 * T;
    vec![
        p("Left Side", [T, h, d], [T / 2.0, h / 2.0, d / 2.0]),
        p("Right Side", [T, h, d], [w - T / 2.0, h / 2.0, d / 2.0]),
        p("Top", [inner, T, d], [w / 2.0, h - T / 2.0, d / 2.0]),
        p("Bottom", [inner, T, d], [w / 2.0, T / 2.0, d / 2.0]),
        p("Back", [inner, h - 2.0 * T, 0.25], [w / 2.0, h / 2.0, 0.125]),
        p("Center Divider", [T, h - 2.0 * T, d - 0.25], [w / 2.0, h / 2.0, (d + 0.25) / 2.0]),
        p("Shelf", [(inner - T) / 2.0, T, d - 1.0], [w / 4.0 + T / 4.0, h / 2.0, d / 2.0]),
        p("Shelf", [(inner - T) / 2.0, T, d - 1.0], [3.0 * w / 4.0 - T / 4.0, h / 2.0, d / 2.0]),
    ]
}

/// Open bench with a stretcher between the sides.
pub fn bench() -> Vec<PanelRecord> {
    vec![
        p("Left Leg", [1.5, 18.0, 14.0], [0.75, 9.0, 7.0]),
        p("Right Leg", [1.5, 18.0, 14.0], [46.25, 9.0, 7.0]),
        p("Seat", [48.0, 1.5, 14.0], [23.5, 18.75, 7.0]),
        p("Stretcher", [44.0, 3.0, T], [23.5, 6.0, 7.0]),
    ]
}

/// Cabinets of the sample project, by index.
pub fn sample_project() -> Vec<(&'static str, Vec<PanelRecord>)> {
    vec![
        ("Base 24\"", base_cabinet()),
        ("Wall 30\"", wall_cabinet()),
        ("Bench", bench()),
    ]
}

/// Stand-in for the host's panel generation call, which can fail.
pub fn generate_cabinet(index: usize) -> Result<Vec<PanelRecord>, String> {
    sample_project()
        .into_iter()
        .nth(index)
        .map(|(_, panels)| panels)
        .ok_or_else(|| format!("No cabinet at index {index}"))
}
