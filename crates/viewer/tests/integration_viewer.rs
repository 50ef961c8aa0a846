//! Integration tests for the mounted viewer.
//!
//! Drives the headless harness through panel, explode, wireframe, selection
//! and pointer updates and checks the resulting scene.

use glam::Vec3;
use shared::PanelRecord;

use cabinet_viewer_lib::fixtures::{base_cabinet, left_side_panel, wall_cabinet};
use cabinet_viewer_lib::harness::TestHarness;
use cabinet_viewer_lib::layout::compute_bounds;
use cabinet_viewer_lib::validation::MeshValidator;
use cabinet_viewer_lib::{SyncOutcome, ViewInputs};

fn two_blocks() -> Vec<PanelRecord> {
    vec![
        PanelRecord::new("Top", [2.0, 2.0, 2.0], [-20.0, 0.0, 0.0]),
        PanelRecord::new("Shelf", [2.0, 2.0, 2.0], [20.0, 0.0, 0.0]),
    ]
}

#[test]
fn test_single_panel_centered_at_origin() {
    let mut h = TestHarness::new();
    h.load(vec![left_side_panel()]);
    assert_eq!(h.node_count(), 1);
    assert_eq!(h.position_of("Left Side"), Some(Vec3::ZERO));
}

#[test]
fn test_single_panel_exploded_moves_left() {
    let mut h = TestHarness::new();
    h.explode(true);
    h.load(vec![left_side_panel()]);
    assert_eq!(h.position_of("Left Side"), Some(Vec3::new(-3.0, 0.0, 0.0)));
}

#[test]
fn test_explode_after_load_moves_left() {
    let mut h = TestHarness::new();
    h.load(vec![left_side_panel()]);
    assert_eq!(h.explode(true), SyncOutcome::Repositioned);
    assert_eq!(h.position_of("Left Side"), Some(Vec3::new(-3.0, 0.0, 0.0)));
}

#[test]
fn test_empty_panels_no_reframe() {
    let mut h = TestHarness::new();
    let distance = h.viewer.camera().distance;
    let eye = h.viewer.camera().eye_position();

    assert_eq!(h.load(vec![]), SyncOutcome::Cleared);
    assert_eq!(h.node_count(), 0);
    assert_eq!(h.viewer.camera().distance, distance);
    assert_eq!(h.viewer.camera().eye_position(), eye);

    h.run_frames(1);
    assert_eq!(h.last_frame().unwrap().nodes.len(), 0);
}

#[test]
fn test_miss_clears_selection() {
    let mut h = TestHarness::new();
    h.load(vec![left_side_panel()]);
    h.viewer.set_selection(Some("Left Side".into()));
    assert_eq!(h.click(2.0, 2.0), None);
    assert!(h.selected().is_none());

    // a miss with nothing selected stays clear
    assert_eq!(h.click(2.0, 2.0), None);
}

#[test]
fn test_wireframe_keeps_geometry_and_positions() {
    let mut h = TestHarness::new();
    h.load(base_cabinet());
    let before: Vec<_> = h
        .nodes()
        .iter()
        .map(|n| (n.geometry().id, n.position))
        .collect();
    let version = h.viewer.scene().geometry_version();

    assert_eq!(h.wireframe(true), SyncOutcome::Restyled);

    let after: Vec<_> = h
        .nodes()
        .iter()
        .map(|n| (n.geometry().id, n.position))
        .collect();
    assert_eq!(before, after);
    assert_eq!(h.viewer.scene().geometry_version(), version);
    for n in h.nodes() {
        assert!(n.material().wireframe, "{}", n.label());
        assert!(n.material().opacity < 1.0, "{}", n.label());
    }
}

#[test]
fn test_click_toggle_law() {
    let mut h = TestHarness::new();
    h.load(two_blocks());

    assert_eq!(h.click_node(0).as_deref(), Some("Top"));
    assert_eq!(h.highlighted(), vec!["Top"]);

    // same mesh again: toggles off
    assert_eq!(h.click_node(0), None);
    assert!(h.highlighted().is_empty());

    // select, then another mesh: switches
    h.click_node(0);
    assert_eq!(h.click_node(1).as_deref(), Some("Shelf"));
    assert_eq!(h.highlighted(), vec!["Shelf"]);
}

#[test]
fn test_click_after_explode_hits_moved_panel() {
    let mut h = TestHarness::new();
    h.load(two_blocks());
    h.explode(true);
    // shelves move forward; the projected center follows the node
    assert_eq!(h.click_node(1).as_deref(), Some("Shelf"));
}

#[test]
fn test_repeated_labels_highlight_together() {
    let mut h = TestHarness::new();
    h.load(wall_cabinet());
    h.viewer.set_selection(Some("Shelf".into()));
    assert_eq!(h.highlighted(), vec!["Shelf", "Shelf"]);
}

#[test]
fn test_sync_twice_is_identical() {
    let inputs = ViewInputs {
        panels: base_cabinet(),
        exploded: true,
        wireframe: false,
        selection: Some("Back".into()),
    };
    let mut h = TestHarness::new();
    h.viewer.sync(&inputs);
    h.run_frames(1);
    let first = h.last_frame().unwrap();

    assert_eq!(h.viewer.sync(&inputs), SyncOutcome::Unchanged);
    h.run_frames(1);
    let second = h.last_frame().unwrap();

    assert_eq!(first.nodes, second.nodes);
    assert_eq!(first.eye, second.eye);
}

#[test]
fn test_assembly_recentered() {
    let mut h = TestHarness::new();
    h.load(base_cabinet());
    let world: Vec<PanelRecord> = h
        .nodes()
        .iter()
        .map(|n| {
            let p = n.position;
            let s = n.geometry().size;
            PanelRecord::new(
                n.label(),
                [s.x as f64, s.y as f64, s.z as f64],
                [p.x as f64, p.y as f64, p.z as f64],
            )
        })
        .collect();
    let centroid = compute_bounds(&world).unwrap().centroid();
    assert!(centroid.abs_diff_eq(Vec3::ZERO, 1e-4), "{centroid}");
}

#[test]
fn test_explode_directions_on_base_cabinet() {
    let mut h = TestHarness::new();
    h.load(base_cabinet());
    let assembled: Vec<Vec3> = h.nodes().iter().map(|n| n.position).collect();
    h.explode(true);

    for (node, before) in h.nodes().iter().zip(&assembled) {
        let delta = node.position - *before;
        let expected = match node.label() {
            "Left Side" => Vec3::new(-3.0, 0.0, 0.0),
            "Right Side" => Vec3::new(3.0, 0.0, 0.0),
            "Top" => Vec3::new(0.0, 3.0, 0.0),
            "Bottom" => Vec3::new(0.0, -3.0, 0.0),
            "Back" => Vec3::new(0.0, 0.0, -3.0),
            "Shelf" => Vec3::new(0.0, 0.0, 3.0),
            "Toe Kick" => Vec3::new(0.0, -3.0, 0.0),
            // face frame
            _ => Vec3::new(0.0, 0.0, 4.5),
        };
        assert!(delta.abs_diff_eq(expected, 1e-4), "{}: {delta}", node.label());
    }
}

#[test]
fn test_node_geometry_valid() {
    let mut h = TestHarness::new();
    h.load(base_cabinet());
    for n in h.nodes() {
        let v = MeshValidator::new(&n.geometry().mesh);
        let errors = v.validate_all();
        assert!(errors.is_empty(), "{} errors: {:?}", n.label(), errors);
        assert!(v.has_size(n.geometry().size, 1e-4), "{}", n.label());
    }
}

#[test]
fn test_frame_snapshot_tracks_materials() {
    let mut h = TestHarness::new();
    h.load(base_cabinet());
    h.wireframe(true);
    h.viewer.set_selection(Some("Top".into()));
    h.run_frames(3);
    assert_eq!(h.frames_drawn(), 3);

    let frame = h.last_frame().unwrap();
    assert_eq!(frame.nodes.len(), base_cabinet().len());
    assert!(frame.nodes.iter().all(|n| n.wireframe && n.transparent));
    let lit: Vec<_> = frame
        .nodes
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(lit, vec!["Top"]);
}

#[test]
fn test_unmount_releases_everything() {
    let mut h = TestHarness::new();
    h.load(base_cabinet());
    h.run_frames(2);
    let log = h.unmount();
    let log = log.borrow();
    assert!(log.disposed);
    assert!(log.last_frame.is_none());
    assert_eq!(log.frames_drawn, 2);
}
