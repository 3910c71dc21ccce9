//! Slice Impact headless demo
//!
//! Plays a scripted slicing level and a demolition level through the core
//! and records the results.
//!
//! Usage: `slice-impact [--quality low|medium|high] [SAVE_FILE]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use slice_impact::QualityPreset;
    use slice_impact::persistence::{JsonFileRepository, MemoryRepository, SaveRepository};

    env_logger::init();
    log::info!("Slice Impact (native) starting...");

    let mut quality = None;
    let mut save_path = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--quality" {
            let value = args.next().unwrap_or_default();
            match QualityPreset::from_str(&value) {
                Some(preset) => quality = Some(preset),
                None => {
                    eprintln!("Unknown quality preset '{value}' (expected low, medium or high)");
                    std::process::exit(2);
                }
            }
        } else {
            save_path = Some(arg);
        }
    }

    let mut repo: Box<dyn SaveRepository> = match save_path {
        Some(path) => Box::new(JsonFileRepository::new(path)),
        None => Box::new(MemoryRepository::new()),
    };
    let mut save = repo.load();
    if let Some(preset) = quality {
        save.settings.quality = preset;
    }
    println!("Quality: {}", save.settings.quality.as_str());

    let slice = demo::run_slice_level(&save.settings);
    let demolition = demo::run_demolition_level(&save.settings);

    for (name, stats) in [("slice", slice), ("demolition", demolition)] {
        println!(
            "{name}: destroyed {} in {:.2}s, mean precision {:.2}, score {}",
            stats.destroyed,
            stats.clear_time.unwrap_or(stats.elapsed),
            stats.mean_precision(),
            stats.score()
        );
        if let Some(rank) = save.progress.record_run(&stats, 0.0) {
            println!("  new best run, rank {rank}");
        }
    }

    if let Err(err) = repo.save(&save) {
        log::error!("Failed to save progress: {:#}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `wasm_start` in the library
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use glam::Vec2;
    use slice_impact::consts::FRAME_DT;
    use slice_impact::geom::{Polygon, Rect};
    use slice_impact::impact::{Material, StrokeRecorder, TargetShape};
    use slice_impact::{DamageMode, FieldEvent, PlayerInput, Playfield, RunStats, Settings, Tuning};

    /// Frames to let debris settle after the last input
    const SETTLE_FRAMES: usize = 150;

    fn settle(field: &mut Playfield) {
        for _ in 0..SETTLE_FRAMES {
            for event in field.tick(None, FRAME_DT) {
                if let FieldEvent::FragmentCollected { collector } = event {
                    log::debug!("Fragment dropped into collector {}", collector);
                }
            }
        }
    }

    /// A horizontal swipe across the screen at height `y`
    fn swipe(y: f32, start_ms: f64) -> PlayerInput {
        let mut recorder = StrokeRecorder::begin(Vec2::new(-20.0, y), start_ms);
        for i in 1..=10 {
            recorder.push(Vec2::new(-20.0 + i as f32 * 84.0, y), start_ms + i as f64 * 12.0);
        }
        PlayerInput::Swipe(recorder.finish())
    }

    pub fn run_slice_level(settings: &Settings) -> RunStats {
        let mut field = Playfield::new(DamageMode::Slice, Tuning::default(), settings.clone(), 1);
        // Blender funnel at the bottom of the screen
        field
            .fragments_mut()
            .add_collector(1, Polygon::from(Rect::new(300.0, 600.0, 200.0, 120.0)));
        field.reset(vec![
            TargetShape::rect(1, Rect::new(100.0, 80.0, 80.0, 80.0), Material::Soft),
            TargetShape::rect(2, Rect::new(350.0, 100.0, 100.0, 60.0), Material::Medium),
            TargetShape::rect(3, Rect::new(600.0, 70.0, 90.0, 90.0), Material::Hard),
        ]);

        for frame in 0..4 {
            let events = field.tick(Some(swipe(120.0, frame as f64 * 200.0)), FRAME_DT);
            log::info!("Swipe {}: {:?}", frame + 1, events);
        }
        settle(&mut field);
        *field.stats()
    }

    pub fn run_demolition_level(settings: &Settings) -> RunStats {
        let mode = DamageMode::Demolition {
            power: 60.0,
            radius: 120.0,
        };
        let mut field = Playfield::new(mode, Tuning::default(), settings.clone(), 2);
        field.reset(vec![
            TargetShape::rect(1, Rect::new(100.0, 400.0, 60.0, 120.0), Material::Wood),
            TargetShape::rect(2, Rect::new(160.0, 400.0, 60.0, 120.0), Material::Brick),
            TargetShape::polygon(3, Polygon::regular(Vec2::new(300.0, 460.0), 50.0, 6), Material::Concrete),
        ]);

        let taps = [
            Vec2::new(160.0, 460.0),
            Vec2::new(190.0, 460.0),
            Vec2::new(300.0, 460.0),
            Vec2::new(300.0, 460.0),
        ];
        for point in taps {
            let events = field.tick(Some(PlayerInput::Tap(point)), FRAME_DT);
            log::info!("Blast at {:?}: {:?}", point, events);
        }
        settle(&mut field);
        *field.stats()
    }
}
