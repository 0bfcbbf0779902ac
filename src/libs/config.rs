//! Configuration management for the stint application.
//!
//! Handles the settings the period tracker and the analysis views read:
//! monitor thresholds, skip-time defaults, and the catalog of spheres,
//! projects, and break actions with their active/archived flags.
//!
//! ## Configuration Structure
//!
//! - **Monitor Config**: idle detection and automatic break thresholds
//! - **Defaults Config**: sphere/project/action assigned when the user skips
//!   a period during tagging
//! - **Catalog**: spheres (each owning projects) and global break actions;
//!   the `active` flag on each entry drives the active/archived report views
//!
//! ## Storage
//!
//! The configuration is a single JSON file in the platform-specific
//! application data directory (see [`DataStorage`]). A missing file yields
//! the default configuration; a present but unreadable file is an error.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stint::libs::config::Config;
//!
//! let config = Config::read()?;
//! let thresholds = config.monitor.unwrap_or_default();
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Activity monitor thresholds.
///
/// All values are consumed read-only by the period ledger; changing them only
/// affects sessions started afterwards.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Seconds without user input before the open Active period turns Idle.
    ///
    /// The Active period is closed at the timestamp of the last input, not at
    /// the moment the idleness is detected, so reading or thinking time up to
    /// this threshold still counts as active work.
    pub idle_threshold: u64,

    /// Seconds an Idle period may last before it converts into an automatic
    /// break.
    ///
    /// Long absences (lunch, meetings away from the desk) stop counting as
    /// idle noise and become a proper break that can be tagged later.
    pub idle_break_threshold: u64,

    /// Poll interval in milliseconds for the ledger tick.
    ///
    /// Lower values detect state changes faster at the cost of CPU. The
    /// ledger only compares timestamps on each tick, so values in the
    /// 100-1000ms range are all reasonable.
    pub poll_interval: u64,
}

/// Tags assigned when the user skips a period during the tagging flow.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DefaultsConfig {
    /// Sphere assigned to sessions left without one.
    pub sphere: String,
    /// Project assigned to skipped Active periods.
    pub project: String,
    /// Break action assigned to skipped Break and Idle periods.
    pub action: String,
}

/// A named catalog entry (project or break action) with an archive flag.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Entity {
    pub name: String,
    /// Inactive entries are excluded from the active-only report view.
    #[serde(default = "default_active")]
    pub active: bool,
}

/// A top-level life-area category owning a set of projects.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub projects: Vec<Entity>,
}

fn default_active() -> bool {
    true
}

/// Main configuration container for the entire application.
///
/// Optional modules are omitted from the JSON file when unset, so partially
/// configured installations keep working and new fields can be added without
/// breaking existing files.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Activity monitoring thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    /// Skip-time default tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    /// Spheres with their projects. Edited in the file directly or grown
    /// on the fly by the tagging flow when a new name is typed in.
    #[serde(default)]
    pub spheres: Vec<Sphere>,

    /// Break actions, shared across spheres.
    #[serde(default)]
    pub actions: Vec<Entity>,
}

impl Default for MonitorConfig {
    /// Defaults chosen for typical desk work:
    /// five minutes without input turns the period idle, twenty minutes of
    /// idleness becomes an automatic break, and the ledger ticks ten times a
    /// second.
    fn default() -> Self {
        MonitorConfig {
            idle_threshold: 300,
            idle_break_threshold: 1200,
            poll_interval: 100,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            sphere: "Work".to_string(),
            project: "Other".to_string(),
            action: "Rest".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the filesystem.
    ///
    /// A missing file is not an error: the default configuration is returned
    /// so the application can run before `stint init` was ever called.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON in the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the configurable modules, prompts for each selected one with
    /// the current values as defaults, and returns the updated configuration
    /// for the caller to save. The sphere/project/action catalog is not part
    /// of the wizard; it grows through the tagging flow or by editing the
    /// config file.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(_) => Config::default(),
        };

        let modules = ["Monitor", "Defaults"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        idle_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleThreshold.to_string())
                            .default(default.idle_threshold)
                            .interact_text()?,
                        idle_break_threshold: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptIdleBreakThreshold.to_string())
                            .default(default.idle_break_threshold)
                            .interact_text()?,
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,
                    });
                }
                "Defaults" => {
                    let default = config.defaults.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDefaults);
                    config.defaults = Some(DefaultsConfig {
                        sphere: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultSphere.to_string())
                            .default(default.sphere)
                            .interact_text()?,
                        project: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultProject.to_string())
                            .default(default.project)
                            .interact_text()?,
                        action: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptDefaultAction.to_string())
                            .default(default.action)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Looks up a sphere by name.
    pub fn sphere(&self, name: &str) -> Option<&Sphere> {
        self.spheres.iter().find(|s| s.name == name)
    }

    /// Whether a session's sphere counts as active.
    ///
    /// Sessions without a sphere, and spheres not present in the catalog,
    /// count as active: only an explicit `active: false` archives them.
    pub fn sphere_active(&self, name: Option<&str>) -> bool {
        match name {
            Some(name) => self.sphere(name).map_or(true, |s| s.active),
            None => true,
        }
    }

    /// Whether a project counts as active within the given sphere.
    ///
    /// Unknown projects count as active, same as unknown spheres.
    pub fn project_active(&self, sphere: Option<&str>, name: &str) -> bool {
        let entry = sphere
            .and_then(|s| self.sphere(s))
            .and_then(|s| s.projects.iter().find(|p| p.name == name));
        entry.map_or(true, |p| p.active)
    }

    /// Whether a break action counts as active.
    pub fn action_active(&self, name: &str) -> bool {
        self.actions.iter().find(|a| a.name == name).map_or(true, |a| a.active)
    }

    /// Registers a sphere if it is not in the catalog yet.
    pub fn ensure_sphere(&mut self, name: &str) {
        if self.sphere(name).is_none() {
            self.spheres.push(Sphere {
                name: name.to_string(),
                active: true,
                projects: Vec::new(),
            });
        }
    }

    /// Registers a project under a sphere if it is not in the catalog yet.
    pub fn ensure_project(&mut self, sphere: &str, name: &str) {
        self.ensure_sphere(sphere);
        let sphere = self.spheres.iter_mut().find(|s| s.name == sphere).unwrap();
        if !sphere.projects.iter().any(|p| p.name == name) {
            sphere.projects.push(Entity {
                name: name.to_string(),
                active: true,
            });
        }
    }

    /// Registers a break action if it is not in the catalog yet.
    pub fn ensure_action(&mut self, name: &str) {
        if !self.actions.iter().any(|a| a.name == name) {
            self.actions.push(Entity {
                name: name.to_string(),
                active: true,
            });
        }
    }
}
