/// Layout entry points: validation, normalization and ordering
pub mod layout;
/// Row-building state machine
pub mod squarify;
