//! Exclusion command set
//!
//! Binds the extended commands to a shared [`JobState`]. Mutating commands
//! respond with nothing; the list commands respond with a space-separated
//! enumeration, matching the host's info-response convention.

use crate::args::{parse_center, parse_polygon};
use crate::registry::CommandRegistry;
use objexclude_core::ThreadSafe;
use objexclude_filter::{JobState, PrintObject};

/// Register the exclusion commands against a shared job state
pub fn register_commands(registry: &mut CommandRegistry, state: ThreadSafe<JobState>) {
    let s = state.clone();
    registry.register(
        "START_CURRENT_OBJECT",
        "Mark the start of moves belonging to the named object",
        move |args| {
            let name = args.get("NAME")?;
            s.lock().start_object(name);
            Ok(None)
        },
    );

    let s = state.clone();
    registry.register(
        "END_CURRENT_OBJECT",
        "Mark the end of the current object",
        move |_args| {
            s.lock().end_object();
            Ok(None)
        },
    );

    let s = state.clone();
    registry.register(
        "EXCLUDE_OBJECT",
        "Cancel all moves inside the named object",
        move |args| {
            let name = args.get("NAME")?;
            s.lock().exclude_object(name);
            Ok(None)
        },
    );

    let s = state.clone();
    registry.register(
        "REMOVE_ALL_EXCLUDED",
        "Remove all known objects and excluded objects",
        move |_args| {
            s.lock().reset();
            Ok(None)
        },
    );

    let s = state.clone();
    registry.register(
        "DEFINE_OBJECT",
        "Register an object with its center and outline",
        move |args| {
            let name = args.get("NAME")?;
            let center = parse_center(args.get("CENTER")?)?;
            let outline = parse_polygon(args.get("POLYGON")?)?;
            s.lock()
                .define_object(PrintObject::with_geometry(name, center, outline));
            Ok(None)
        },
    );

    let s = state.clone();
    registry.register("LIST_OBJECTS", "List the known objects", move |_args| {
        let state = s.lock();
        let mut names: Vec<String> = state.objects.list().map(|o| o.to_string()).collect();
        names.sort();
        Ok(Some(names.join(" ")))
    });

    let s = state;
    registry.register(
        "LIST_EXCLUDED_OBJECTS",
        "List the excluded objects",
        move |_args| {
            let state = s.lock();
            let mut names: Vec<&str> = state.excluded.list().collect();
            names.sort_unstable();
            Ok(Some(names.join(" ")))
        },
    );
}
