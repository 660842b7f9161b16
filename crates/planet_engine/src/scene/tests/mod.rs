//! Scene-level tests covering the tick pipeline end to end
