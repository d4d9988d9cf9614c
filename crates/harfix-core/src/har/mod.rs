//! HAR (HTTP Archive) fixtures: document model, file loading and the scenario
//! index used for replay.
//!
//! Recording reads an existing fixture or starts an empty one
//! ([`read_har_file`]); replay requires the fixture to exist
//! ([`load_har_from_file`]).

mod load;
mod model;
mod scenario;

pub use load::{load_har_from_file, read_har_file, scenario_name, write_har_file, HAR_EXTENSION};
pub use model::{
    HarContent, HarCreator, HarDocument, HarEntry, HarHeader, HarLog, HarPostData, HarQueryParam,
    HarRequest, HarResponse, HarVersion, HAR_VERSION,
};
pub use scenario::{find_matching_entry, ScenarioSet};
