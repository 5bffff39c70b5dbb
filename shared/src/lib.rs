//! Spinning-wheel engine shared by the widget: entries, random selection,
//! geometry, scene building and the spin state machine.

pub mod color;
pub mod entry;
pub mod geometry;
pub mod presets;
pub mod random;
pub mod render;
pub mod share;
pub mod spin;
pub mod tally;
pub mod validation;

pub use entry::{validate_entries, Entry, EntryError};
pub use presets::Preset;
pub use geometry::decode_winner;
pub use random::{pick_index, RandomSource, SecureRandom, SeededRandom};
pub use render::{build_scene, render_wheel, DrawCommand, DrawSurface, Fill, Scene, Shadow, Stroke};
pub use share::{decode_entries, encode_entries, ShareError};
pub use spin::{ease_out_cubic, sample_target, Frame, SpinConfig, SpinContext, SpinOutcome, SpinRequest, WheelController};
pub use tally::SpinTally;
