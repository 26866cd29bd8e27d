//! gbind-demo: walk through the bindings end to end
//!
//! Builds a hash table, lists its keys through the list adapter, filters them
//! with a glob pattern and runs a main loop until an idle source has
//! dispatched a few times.
//!
//! ## Configuration
//! - GBIND_CONFIG: YAML configuration file (optional)
//! - GBIND_LOG: tracing filter, overrides `logging.filter`
//! - GBIND_DEMO_PATTERN: glob applied to the keys (default: `g*`)

use std::ops::ControlFlow;

use tracing::info;

use gbind::config::Config;
use gbind::logging::init_tracing;
use gbind::prelude::*;
use gbind::{hash_table, main_loop, pattern_spec, source, timer};

const DEFAULT_PATTERN: &str = "g*";
const IDLE_DISPATCHES: u32 = 3;

static SIZES: [u32; 4] = [7, 5, 4, 6];
const NAMES: [&str; 4] = ["gerror", "glist", "gdir", "gtimer"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(None)?;
    init_tracing(&config.logging)?;

    let pattern = std::env::var("GBIND_DEMO_PATTERN").unwrap_or_else(|_| DEFAULT_PATTERN.to_string());

    let table = hash_table::new()?;
    for (name, size) in NAMES.iter().zip(SIZES.iter()) {
        table.insert(name, Handle::from_const_ptr(size))?;
    }
    table.insert("quark", Handle::from_const_ptr(&SIZES[0]))?;

    let spec = pattern_spec::new(&pattern)?;
    let mut matched = 0;
    for key in table.keys()? {
        if spec.matches(&key)? {
            matched += 1;
            info!(key = %key, pattern = %pattern, "matched");
        }
    }
    info!(total = table.size(), matched, "hash table scanned");

    let main = main_loop::new(None, false)?;
    let idle = source::idle()?;
    let quitter = main.clone();
    let mut remaining = IDLE_DISPATCHES;
    idle.set_callback(move || {
        remaining -= 1;
        info!(remaining, "idle dispatch");
        if remaining == 0 {
            quitter.quit();
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    let timer = timer::new()?;
    let id = idle.attach(Some(main.context()));
    info!(source = id, "running main loop");
    main.run();
    timer.stop();

    info!(elapsed = ?timer.elapsed(), "main loop finished");
    Ok(())
}
