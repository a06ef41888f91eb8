//! # LUMEN Headless
//!
//! Runs the frame loop with scripted input against a sink that counts
//! uploads instead of drawing them.
//!
//! ## CRITICAL REQUIREMENTS
//! - NO GPU
//! - NO WINDOW
//!
//! ```bash
//! # Defaults: frustum demo, 600 frames
//! ./lumen_headless
//!
//! # Any mode, any budget
//! ./lumen_headless config/lumen.toml
//! ```

use std::process::ExitCode;

use lumen::{FrameLoop, HeadlessSink, LumenConfig, LumenResult, ScriptedInput};

fn load_config() -> LumenResult<LumenConfig> {
    match std::env::args().nth(1) {
        Some(path) => LumenConfig::load(path),
        None => Ok(LumenConfig::default()),
    }
}

fn main() -> ExitCode {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                    LUMEN HEADLESS v0.1.0");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("   ✗ FATAL: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("  Demo:       {}", config.demo.mode);
    println!("  Frames:     {}", config.frame.frames);
    println!("  Delta:      {:.4} s", config.frame.delta_time);
    println!("  Line verts: {}", config.lines.capacity);
    println!();

    let mut frame_loop = FrameLoop::new(&config);
    let mut sink = HeadlessSink::default();
    let stats = frame_loop.run(
        config.frame.frames,
        config.frame.delta_time,
        ScriptedInput::new(),
        &mut sink,
    );

    stats.print_summary();
    println!();
    println!("┌─ SINK ─────────────────────────────────────────────────────────┐");
    println!("│ Submissions:        {}", sink.submissions);
    println!("│ Uploads:            {}", sink.uploads);
    println!("│ Vertices Uploaded:  {}", sink.vertices_uploaded);
    println!("│ Bytes Uploaded:     {}", sink.bytes_uploaded);
    println!("└──────────────────────────────────────────────────────────────────┘");

    ExitCode::SUCCESS
}
