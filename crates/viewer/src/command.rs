//! JSON command protocol for driving a mounted viewer.
//!
//! Used by the browser bindings so the host page can talk to the viewer with
//! plain JSON messages.

use serde::{Deserialize, Serialize};
use shared::PanelRecord;

use crate::error::ViewerError;
use crate::lifecycle::Viewer;
use crate::render::RenderSurface;
use crate::scene::SyncOutcome;
use crate::viewport::ContainerSize;

/// A command the host can send to the viewer.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ViewerCommand {
    /// Replace the panel list (full rebuild)
    SetPanels { panels: Vec<PanelRecord> },
    SetExploded { exploded: bool },
    SetWireframe { wireframe: bool },
    /// Select a panel by label.
    Select { label: String },
    ClearSelection,
    /// Pointer click at container coordinates.
    Click { x: f32, y: f32 },
    /// Container was measured.
    Resize {
        width: f32,
        height: f32,
        #[serde(default = "default_pixel_ratio")]
        pixel_ratio: f32,
    },
    /// Draw one frame.
    Tick { dt: f32 },
    /// Report the current scene.
    Inspect,
}

fn default_pixel_ratio() -> f32 {
    1.0
}

/// Response from executing a command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CommandResponse {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
            data: None,
        }
    }

    fn ok_with_data(data: serde_json::Value) -> Self {
        Self {
            success: true,
            error: None,
            data: Some(data),
        }
    }

    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(msg.into()),
            data: None,
        }
    }
}

fn outcome_name(outcome: SyncOutcome) -> &'static str {
    match outcome {
        SyncOutcome::Rebuilt { .. } => "rebuilt",
        SyncOutcome::Cleared => "cleared",
        SyncOutcome::Repositioned => "repositioned",
        SyncOutcome::Restyled => "restyled",
        SyncOutcome::Unchanged => "unchanged",
    }
}

fn sync_response(outcome: SyncOutcome) -> CommandResponse {
    CommandResponse::ok_with_data(serde_json::json!({ "outcome": outcome_name(outcome) }))
}

/// Execute a single command on a mounted viewer.
pub fn execute_command<S: RenderSurface>(
    viewer: &mut Viewer<S>,
    cmd: ViewerCommand,
) -> CommandResponse {
    match cmd {
        ViewerCommand::SetPanels { panels } => sync_response(viewer.set_panels(panels)),

        ViewerCommand::SetExploded { exploded } => sync_response(viewer.set_exploded(exploded)),

        ViewerCommand::SetWireframe { wireframe } => {
            sync_response(viewer.set_wireframe(wireframe))
        }

        ViewerCommand::Select { label } => sync_response(viewer.set_selection(Some(label))),

        ViewerCommand::ClearSelection => sync_response(viewer.set_selection(None)),

        ViewerCommand::Click { x, y } => {
            let selected = viewer.handle_click(x, y);
            CommandResponse::ok_with_data(serde_json::json!({ "selected": selected }))
        }

        ViewerCommand::Resize {
            width,
            height,
            pixel_ratio,
        } => {
            viewer.resize(ContainerSize::new(width, height, pixel_ratio));
            CommandResponse::ok()
        }

        ViewerCommand::Tick { dt } => {
            viewer.tick(dt);
            CommandResponse::ok_with_data(serde_json::json!({ "frame": viewer.frames_drawn() }))
        }

        ViewerCommand::Inspect => CommandResponse::ok_with_data(inspect(viewer)),
    }
}

/// Summary of the viewer's scene and camera
pub fn inspect<S: RenderSurface>(viewer: &Viewer<S>) -> serde_json::Value {
    let scene = viewer.scene();
    let nodes: Vec<serde_json::Value> = scene
        .nodes()
        .iter()
        .map(|node| {
            serde_json::json!({
                "label": node.label(),
                "position": node.position.to_array(),
                "size": node.geometry().size.to_array(),
                "highlighted": node.material().is_highlighted(),
            })
        })
        .collect();
    serde_json::json!({
        "panel_count": nodes.len(),
        "nodes": nodes,
        "exploded": scene.exploded(),
        "wireframe": scene.wireframe(),
        "selected": viewer.selected_panel(),
        "camera_distance": viewer.camera().distance,
        "rebuild_count": scene.rebuild_count(),
    })
}

/// Parse and execute a single JSON command string.
pub fn execute_json<S: RenderSurface>(
    viewer: &mut Viewer<S>,
    json: &str,
) -> Result<CommandResponse, ViewerError> {
    let cmd: ViewerCommand = serde_json::from_str(json)?;
    Ok(execute_command(viewer, cmd))
}

/// Parse and execute multiple JSON commands (array).
pub fn execute_json_batch<S: RenderSurface>(
    viewer: &mut Viewer<S>,
    json: &str,
) -> Result<Vec<CommandResponse>, ViewerError> {
    let cmds: Vec<ViewerCommand> = serde_json::from_str(json)?;
    Ok(cmds
        .into_iter()
        .map(|cmd| execute_command(viewer, cmd))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::SnapshotSurface;
    use crate::state::settings::ViewerSettings;

    fn viewer() -> Viewer<SnapshotSurface> {
        Viewer::mount(
            SnapshotSurface::new(),
            ContainerSize::new(800.0, 600.0, 1.0),
            ViewerSettings::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_command_serde_set_exploded() {
        let cmd: ViewerCommand =
            serde_json::from_str(r#"{"command": "set_exploded", "exploded": true}"#).unwrap();
        assert!(matches!(cmd, ViewerCommand::SetExploded { exploded: true }));
    }

    #[test]
    fn test_command_serde_resize_default_ratio() {
        let cmd: ViewerCommand =
            serde_json::from_str(r#"{"command": "resize", "width": 640, "height": 480}"#).unwrap();
        match cmd {
            ViewerCommand::Resize { pixel_ratio, .. } => assert_eq!(pixel_ratio, 1.0),
            _ => panic!("Expected Resize"),
        }
    }

    #[test]
    fn test_execute_set_panels() {
        let mut v = viewer();
        let json = r#"{"command": "set_panels", "panels": [
            {"label": "Top", "width": 20, "height": 0.75, "depth": 24, "x": 0, "y": 30, "z": 0}
        ]}"#;
        let resp = execute_json(&mut v, json).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data.unwrap()["outcome"], "rebuilt");
        assert_eq!(v.scene().nodes().len(), 1);
    }

    #[test]
    fn test_execute_empty_panels_cleared() {
        let mut v = viewer();
        let resp = execute_json(&mut v, r#"{"command": "set_panels", "panels": []}"#).unwrap();
        assert_eq!(resp.data.unwrap()["outcome"], "cleared");
    }

    #[test]
    fn test_execute_inspect() {
        let mut v = viewer();
        v.set_panels(vec![PanelRecord::new("Back", [20.0, 30.0, 0.25], [0.0, 15.0, -12.0])]);
        let resp = execute_json(&mut v, r#"{"command": "inspect"}"#).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data["panel_count"], 1);
        assert_eq!(data["nodes"][0]["label"], "Back");
        assert_eq!(data["selected"], serde_json::Value::Null);
    }

    #[test]
    fn test_execute_invalid_json() {
        let mut v = viewer();
        assert!(matches!(
            execute_json(&mut v, "not valid json"),
            Err(ViewerError::Json(_))
        ));
    }

    #[test]
    fn test_execute_unknown_command() {
        let mut v = viewer();
        assert!(execute_json(&mut v, r#"{"command": "explode_harder"}"#).is_err());
    }
}
