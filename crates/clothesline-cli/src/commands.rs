//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;

use clothesline_material::MaterialCatalog;
use clothesline_render::json_exporter::{AnimationData, JsonFrameExporter};
use clothesline_render::renderer::{RenderFrame, Renderer};
use clothesline_scene::{FrameDriver, ScenarioConfig};
use clothesline_telemetry::{JsonLinesSink, TracingSink};

fn load_scenario(path: Option<&str>) -> Result<ScenarioConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(ScenarioConfig::load(path)?),
        None => Ok(ScenarioConfig::default()),
    }
}

/// Run a headless scenario.
pub fn run(
    config_path: Option<&str>,
    output_path: &str,
    frames: Option<u32>,
    seed: Option<u64>,
    events_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Clothesline Run");
    println!("───────────────");
    println!("Config: {}", config_path.unwrap_or("(defaults)"));
    println!();

    let mut scenario = load_scenario(config_path)?;
    if let Some(frames) = frames {
        scenario.frames = frames;
    }
    if seed.is_some() {
        scenario.seed = seed;
    }
    scenario.validate()?;

    let mut line = scenario.build_line()?;
    line.event_bus_mut()
        .add_sink(Box::new(TracingSink::new(tracing::Level::DEBUG)));
    if let Some(path) = events_path {
        let writer = BufWriter::new(File::create(path)?);
        line.event_bus_mut().add_sink(Box::new(JsonLinesSink::new(writer)));
    }

    for material in &scenario.cloths {
        match line.hang(material) {
            Ok(id) => println!("Hung {material:<8} as {id} (slot {})", line.slot_of(id)?),
            Err(e) if e.is_declined() => {
                println!("Skipped {material}: {e}");
            }
            Err(e) => return Err(e.into()),
        }
    }
    println!(
        "Line:   {} / {} slots, {} frames at {:.4}s (x{})",
        line.len(),
        line.capacity(),
        scenario.frames,
        scenario.frame_dt,
        scenario.scene.time_scale,
    );
    println!();

    let mut exporter = JsonFrameExporter::new(output_path);
    exporter.init(&line)?;
    exporter.submit_frame(&RenderFrame::capture(0, &line))?;

    let mut driver = FrameDriver::new(scenario.scene.clone());
    let mut step_time = 0.0;
    let mut steps = 0usize;
    let mut last_error = 0.0;

    for _ in 0..scenario.frames {
        let report = driver.advance(&mut line, scenario.frame_dt);
        step_time += report.steps.iter().map(|(_, r)| r.wall_time).sum::<f64>();
        steps += report.steps.len();
        last_error = report.max_relaxation_error();
        exporter.submit_frame(&RenderFrame::capture(line.frame(), &line))?;
    }
    exporter.finalize()?;
    let dispatched = line.event_bus_mut().finish();
    tracing::debug!(dispatched, "telemetry closed");

    for (id, _, cloth) in line.iter() {
        let info = cloth.info();
        let lowest = cloth
            .positions()
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min);
        println!(
            "  {id}: {:<8} {} particles, lowest y = {:.3}, max displacement = {:.3}",
            info.material,
            info.particle_count,
            lowest,
            cloth.particles().max_displacement()
        );
    }
    println!();
    let avg = if steps == 0 { 0.0 } else { step_time / steps as f64 };
    println!("  Avg step:      {:.3}ms", avg * 1000.0);
    println!("  Final error:   {last_error:.6e}");
    println!("Frames written to: {output_path}");

    Ok(())
}

/// List material presets.
pub fn materials(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = match config_path {
        Some(path) => ScenarioConfig::load(path)?.catalog(),
        None => MaterialCatalog::with_defaults(),
    };

    println!(
        "{:<10} {:>9} {:>8} {:>6} {:>14} {:>15}",
        "Material", "Stiffness", "Damping", "Mass", "WindResistance", "WaterAbsorption"
    );
    println!("{}", "─".repeat(67));
    for m in catalog.iter() {
        println!(
            "{:<10} {:>9.1} {:>8.3} {:>6.2} {:>14.2} {:>15.2}",
            m.name, m.stiffness, m.damping, m.mass, m.wind_resistance, m.water_absorption
        );
    }
    Ok(())
}

/// Validate a scenario or an export.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Clothesline Validator");
    println!("─────────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating scenario: {path}");
        let scenario = ScenarioConfig::load(path)?;
        scenario.validate()?;
        let slots = scenario.line.capacity();
        println!(
            "✅ Scenario is valid ({} cloths, {} slots, {} frames).",
            scenario.cloths.len(),
            slots,
            scenario.frames
        );
        if scenario.cloths.len() > slots {
            println!(
                "⚠️  {} cloth(s) will not fit on the line.",
                scenario.cloths.len() - slots
            );
        }
    } else if path.ends_with(".json") {
        println!("Validating export: {path}");
        let content = std::fs::read_to_string(path)?;
        let data: AnimationData = serde_json::from_str(&content)?;
        for frame in &data.frames {
            for (cloth, topology) in frame.cloths.iter().zip(&data.cloths) {
                if cloth.positions.len() != topology.vertex_count * 3 {
                    return Err(format!(
                        "frame {}: {} has {} coordinates, expected {}",
                        frame.frame,
                        cloth.cloth,
                        cloth.positions.len(),
                        topology.vertex_count * 3
                    )
                    .into());
                }
            }
        }
        println!(
            "✅ Export is valid ({} cloths, {} frames).",
            data.cloths.len(),
            data.frames.len()
        );
    } else {
        println!("Unsupported file format. Use .toml (scenario) or .json (export).");
    }

    Ok(())
}
