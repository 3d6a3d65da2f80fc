//! Integration tests for clothesline-render.

use clothesline_render::json_exporter::{AnimationData, JsonFrameExporter};
use clothesline_render::renderer::{HeadlessRenderer, RenderFrame, Renderer};
use clothesline_scene::{Clothesline, FrameDriver, LineLayout, SceneParams};
use clothesline_solver::{ManualClock, NoTurbulence, SolverConfig};

fn line_with(materials: &[&str]) -> Clothesline {
    let layout = LineLayout {
        segments_x: 3,
        segments_y: 3,
        ..Default::default()
    };
    let mut line = Clothesline::new(layout, SolverConfig::calm())
        .unwrap()
        .with_turbulence(Box::new(NoTurbulence))
        .with_clock(Box::new(ManualClock::default()));
    for m in materials {
        line.hang(m).unwrap();
    }
    line
}

// ─── Headless Tests ───────────────────────────────────────────

#[test]
fn headless_counts_frames() {
    let line = line_with(&["Silk"]);
    let mut renderer = HeadlessRenderer::new();
    renderer.init(&line).unwrap();
    assert_eq!(renderer.name(), "headless");

    let frame = RenderFrame::capture(0, &line);
    renderer.submit_frame(&frame).unwrap();
    renderer.submit_frame(&frame).unwrap();
    renderer.finalize().unwrap();
    assert_eq!(renderer.frame_count(), 2);
}

#[test]
fn capture_copies_every_cloth() {
    let line = line_with(&["Silk", "Denim"]);
    let frame = RenderFrame::capture(3, &line);
    assert_eq!(frame.frame, 3);
    assert_eq!(frame.cloths.len(), 2);
    for (cf, id) in frame.cloths.iter().zip(line.ids()) {
        assert_eq!(cf.cloth, id);
        assert_eq!(cf.positions.len(), 16 * 3);
        assert_eq!(cf.positions, line.positions(id).unwrap());
    }
}

// ─── JSON Exporter Tests ──────────────────────────────────────

#[test]
fn exporter_records_topology_and_frames() {
    let mut line = line_with(&["Cotton"]);
    let mut exporter = JsonFrameExporter::new("unused.json");
    exporter.init(&line).unwrap();

    let mut driver = FrameDriver::new(SceneParams::default());
    for _ in 0..3 {
        driver.advance(&mut line, 0.01);
        exporter
            .submit_frame(&RenderFrame::capture(line.frame(), &line))
            .unwrap();
    }
    assert_eq!(exporter.frame_count(), 3);

    let topology = &exporter.data().cloths[0];
    assert_eq!(topology.material, "Cotton");
    assert_eq!(topology.vertex_count, 16);
    assert_eq!(topology.triangle_count, 18);
    assert_eq!(topology.indices.len(), 54);

    let parsed: AnimationData = serde_json::from_str(&exporter.to_json().unwrap()).unwrap();
    assert_eq!(&parsed, exporter.data());
    assert_eq!(parsed.frames[2].frame, 3);
}

#[test]
fn exporter_writes_file_on_finalize() {
    let path = std::env::temp_dir().join(format!(
        "clothesline-render-test-{}.json",
        std::process::id()
    ));
    let line = line_with(&["Silk"]);
    let mut exporter = JsonFrameExporter::new(&path);
    exporter.init(&line).unwrap();
    exporter.submit_frame(&RenderFrame::capture(0, &line)).unwrap();
    exporter.finalize().unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: AnimationData = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed.frames.len(), 1);
    assert_eq!(parsed.cloths[0].cloth, line.ids()[0]);
    std::fs::remove_file(&path).unwrap();
}
