//! `shadowdefender-config` - configuration validator for the ShadowDefender
//! anti-bot / anti-VPN server plugin
//!
//! This library checks a plugin configuration document against the plugin's
//! field schema and reports errors and warnings before the plugin loads it.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
