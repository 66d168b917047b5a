#[cfg(test)]
mod tests {
    use super::super::panels::convert::actions::{drop_target, route_drop, run_conversion};
    use super::super::panels::convert::{ConvertPanelState, DropTarget};
    use super::super::widgets::{DropEntry, DropPayload, StatusTone};
    use crate::convert::tests::RecordingRenderer;
    use std::path::{Path, PathBuf};

    fn local(path: &Path) -> DropPayload {
        DropPayload::Single(DropEntry::Local(path.to_path_buf()))
    }

    #[test]
    fn test_panel_state_defaults() {
        let state = ConvertPanelState::default();
        assert_eq!(state.html.path(), None);
        assert_eq!(state.stylesheet.path(), None);
        assert_eq!(state.assets.path(), None);
        assert!(state.status.is_ready());
    }

    #[test]
    fn test_reset_clears_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ConvertPanelState::default();
        state.html.accept(dir.path().join("index.html")).unwrap();
        state.stylesheet.accept(dir.path().join("print.css")).unwrap();
        state.assets.accept(dir.path().to_path_buf()).unwrap();
        state.status.set_error("Error: boom");
        state.last_output = Some(dir.path().join("out.pdf"));

        state.reset();

        assert_eq!(state.html.path(), None);
        assert_eq!(state.stylesheet.path(), None);
        assert_eq!(state.assets.path(), None);
        assert_eq!(state.html.label(), "Drop HTML file here");
        assert!(state.status.is_ready());
        assert_eq!(state.status.tone(), StatusTone::Idle);
        assert_eq!(state.last_output, None);
    }

    #[test]
    fn test_unhovered_drops_are_routed_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ConvertPanelState::default();

        let css = dir.path().join("theme.CSS");
        assert_eq!(route_drop(&mut state, &local(&css), None), Some(DropTarget::Stylesheet));
        assert_eq!(route_drop(&mut state, &local(dir.path()), None), Some(DropTarget::Assets));
        let html = dir.path().join("index.html");
        assert_eq!(route_drop(&mut state, &local(&html), None), Some(DropTarget::Html));

        assert_eq!(state.stylesheet.path(), Some(css.as_path()));
        assert_eq!(state.assets.path(), Some(dir.path()));
        assert_eq!(state.html.path(), Some(html.as_path()));
        assert_eq!(route_drop(&mut state, &DropPayload::None, None), None);
    }

    #[test]
    fn test_stale_hover_does_not_steal_drop() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ConvertPanelState::default();
        state.html.accept(dir.path().join("index.html")).unwrap();
        let css = dir.path().join("theme.css");

        // Pointer last seen over the HTML region, but the file is a stylesheet.
        let target = route_drop(&mut state, &local(&css), Some(DropTarget::Html));

        assert_eq!(target, Some(DropTarget::Stylesheet));
        assert_eq!(state.stylesheet.path(), Some(css.as_path()));
        assert_eq!(state.html.path(), Some(dir.path().join("index.html").as_path()));
        assert_eq!(state.html.label(), "index.html");
    }

    #[test]
    fn test_hovered_region_takes_what_it_accepts() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ConvertPanelState::default();
        let html = dir.path().join("index.html");

        let target = route_drop(&mut state, &local(&html), Some(DropTarget::Html));

        assert_eq!(target, Some(DropTarget::Html));
        assert_eq!(state.html.path(), Some(html.as_path()));
    }

    #[test]
    fn test_unacceptable_drop_is_rejected_where_hovered() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = ConvertPanelState::default();
        let notes = dir.path().join("notes.txt");

        let target = route_drop(&mut state, &local(&notes), Some(DropTarget::Stylesheet));

        assert_eq!(target, Some(DropTarget::Stylesheet));
        assert_eq!(state.stylesheet.path(), None);
        assert_eq!(state.stylesheet.label(), "Invalid file type");
        assert_eq!(state.html.label(), "Drop HTML file here");
    }

    #[test]
    fn test_drop_target_prediction_matches_routing() {
        let dir = tempfile::tempdir().unwrap();
        let state = ConvertPanelState::default();

        let css = DropEntry::Local(dir.path().join("theme.css"));
        assert_eq!(drop_target(&state, &css, Some(DropTarget::Assets)), DropTarget::Stylesheet);
        let folder = DropEntry::Local(dir.path().to_path_buf());
        assert_eq!(drop_target(&state, &folder, Some(DropTarget::Html)), DropTarget::Assets);
        let remote = DropEntry::Remote("https://example.com/a.html".into());
        assert_eq!(drop_target(&state, &remote, None), DropTarget::Html);
    }

    #[test]
    fn test_conversion_reports_success() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        let mut state = ConvertPanelState::default();
        state.html.accept(dir.path().join("index.html")).unwrap();
        let renderer = RecordingRenderer::default();

        let written = run_conversion(&mut state, &renderer, |_| Some(output.clone()));

        assert_eq!(written, Some(output.clone()));
        assert_eq!(state.status.tone(), StatusTone::Success);
        assert_eq!(state.status.message(), format!("PDF created: {}", output.display()));
        assert_eq!(state.last_output, Some(output));
    }

    #[test]
    fn test_conversion_without_html_warns() {
        let mut state = ConvertPanelState::default();
        let renderer = RecordingRenderer::default();

        let written = run_conversion(&mut state, &renderer, |_| -> Option<PathBuf> { panic!("prompted") });

        assert_eq!(written, None);
        assert_eq!(state.status.tone(), StatusTone::Warning);
        assert_eq!(state.status.message(), "Please select or drop an HTML file");
    }

    #[test]
    fn test_cancelled_conversion_keeps_status() {
        let mut state = ConvertPanelState::default();
        state.html.accept(PathBuf::from("index.html")).unwrap();
        let renderer = RecordingRenderer::default();

        assert_eq!(run_conversion(&mut state, &renderer, |_| None), None);
        assert!(state.status.is_ready());
    }

    #[test]
    fn test_conversion_failure_shows_renderer_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.pdf");
        let mut state = ConvertPanelState::default();
        state.html.accept(dir.path().join("index.html")).unwrap();
        let renderer = RecordingRenderer::failing("Tag <blink> is not supported");

        assert_eq!(run_conversion(&mut state, &renderer, |_| Some(output.clone())), None);

        assert_eq!(state.status.tone(), StatusTone::Error);
        assert_eq!(state.status.message(), "Error: Tag <blink> is not supported");
        assert!(!output.exists());
        assert_eq!(state.last_output, None);
    }
}
