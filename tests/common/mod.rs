#![allow(dead_code)]

use std::sync::Once;

use preflight::RequirementCollection;

static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        preflight::logging::init_test_logging();
    });
}

/// A collection where every requirement holds.
pub fn passing_requirements() -> RequirementCollection {
    let mut collection = RequirementCollection::new();
    collection.add_requirement(|| true, "The output sink accepts writes.", "");
    collection.add_requirement(|| true, "The style table is populated.", "");
    collection
}

/// A collection with one long-winded failure for wrap coverage.
pub fn failing_requirements() -> RequirementCollection {
    let mut collection = passing_requirements();
    collection.add_requirement(
        || false,
        "The configured cache directory must exist and be writable by the current user before any check output can be recorded.",
        "Create the cache directory or point XDG_CACHE_HOME elsewhere.",
    );
    collection
}
