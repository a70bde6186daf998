//! Headless demo driving the assist loop against the fake host.
use bevy::prelude::*;
use clap::Parser;
use log::info;
use sightline::host::fake::FakeHost;
use sightline::{init_assist_state, init_logging, AimAssistPlugin, AssistState};

/// Optic aim-assist control loop demo
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 120)]
    frames: u32,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(AimAssistPlugin);

    let host = FakeHost::default();
    host.with_state(|state| {
        state.engagement = 1.0;
        state.frame.mouse_delta = Vec2::new(4.0, 1.0);
        // Pin the pointer to the right edge so edge scrolling engages.
        state.frame.mouse_position = Vec2::new(1910.0, 540.0);
    });
    init_assist_state(app.world_mut(), Box::new(host.clone()));

    for _ in 0..args.frames {
        app.update();
    }

    let snapshot = host.snapshot();
    if let Some(state) = app.world().get_non_send_resource::<AssistState>() {
        if let Some(session) = state.controller().session() {
            info!(
                "after {} frames: offset ({:.2}, {:.2}), host max offset {:.2}",
                args.frames, session.current_offset.x, session.current_offset.z,
                snapshot.camera.max_offset
            );
        }
    }
}
