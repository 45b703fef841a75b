//! Support module - static coping content offered during a chat.

mod cognitive_distortions;
mod suggestions;

pub use cognitive_distortions::{distortion_catalog, CognitiveDistortion, COGNITIVE_DISTORTIONS};
pub use suggestions::{HOBBY_SUGGESTIONS, SELF_KINDNESS_IDEAS};
