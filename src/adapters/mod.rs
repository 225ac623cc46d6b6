//! Optional integrations with host engines, gated behind feature flags.

#[cfg(feature = "bevy_adapter")]
pub mod bevy;
