use std::io::{self, BufRead};

use objexclude::host::{parse_move, GcodeWriter};
use objexclude::{
    init_logging, register_commands, thread_safe, CommandRegistry, ExcludeObjectTransform,
    HostEvent, HostEventDispatcher, JobState, MoveTransform,
};

/// Feed value used until the stream supplies an F word
const DEFAULT_FEED: f64 = 1500.0;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(
        version = objexclude::VERSION,
        build = objexclude::BUILD_DATE,
        "starting objexclude"
    );

    let state = thread_safe(JobState::new());

    let mut commands = CommandRegistry::new();
    register_commands(&mut commands, state.clone());

    let mut events = HostEventDispatcher::new();
    let reset_state = state.clone();
    events.subscribe(HostEvent::FileReset, move |_| reset_state.lock().reset());
    events.subscribe(HostEvent::Ready, |_| {
        tracing::info!("pipeline ready, installing exclusion transform");
    });

    // The exclusion adapter must be the last transform installed so it
    // observes moves before any other stage.
    events.publish(HostEvent::Ready);
    let mut filter =
        ExcludeObjectTransform::install(state, Box::new(GcodeWriter::new(io::stdout())));

    let mut target = filter.get_position();
    let mut feed = DEFAULT_FEED;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();

        // Program start/end marker: a new file clears objects and exclusions.
        if trimmed == "%" {
            events.publish(HostEvent::FileReset);
            println!("{line}");
            continue;
        }

        if trimmed.is_empty() || trimmed.starts_with(';') {
            println!("{line}");
            continue;
        }

        if let Some(words) = parse_move(trimmed) {
            words.apply(&mut target, &mut feed);
            filter.move_to(target, feed);
            continue;
        }

        let keyword = trimmed
            .split_whitespace()
            .next()
            .unwrap_or("")
            .to_uppercase();
        if commands.contains(&keyword) {
            match commands.dispatch(trimmed) {
                Ok(Some(response)) => println!("// {response}"),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(command = %keyword, error = %e, "command rejected");
                    println!("!! {e}");
                }
            }
            continue;
        }

        // Non-move, non-command lines pass through untouched.
        println!("{line}");
    }

    Ok(())
}
