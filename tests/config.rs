#[cfg(test)]
mod tests {
    use stint::libs::config::{Config, DefaultsConfig, Entity, MonitorConfig, Sphere};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_save_read_lifecycle(_ctx: &mut ConfigTestContext) {
        // Before any save the file is missing and defaults come back.
        let config = Config::read().unwrap();
        assert!(config.monitor.is_none());
        assert!(config.defaults.is_none());
        assert!(config.spheres.is_empty());

        let mut config = Config::default();
        config.monitor = Some(MonitorConfig {
            idle_threshold: 120,
            idle_break_threshold: 600,
            poll_interval: 250,
        });
        config.defaults = Some(DefaultsConfig::default());
        config.spheres.push(Sphere {
            name: "Work".to_string(),
            active: true,
            projects: vec![Entity {
                name: "alpha".to_string(),
                active: false,
            }],
        });
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.monitor, config.monitor);
        assert_eq!(loaded.defaults, config.defaults);
        assert_eq!(loaded.spheres, config.spheres);
    }

    #[test]
    fn test_monitor_defaults() {
        let default = MonitorConfig::default();
        assert_eq!(default.idle_threshold, 300);
        assert_eq!(default.idle_break_threshold, 1200);
        assert_eq!(default.poll_interval, 100);
        // The idle threshold must trip before the auto-break threshold can.
        assert!(default.idle_threshold < default.idle_break_threshold);
    }

    #[test]
    fn test_catalog_status_lookups() {
        let config = Config {
            spheres: vec![Sphere {
                name: "Work".to_string(),
                active: false,
                projects: vec![Entity {
                    name: "alpha".to_string(),
                    active: true,
                }],
            }],
            actions: vec![Entity {
                name: "lunch".to_string(),
                active: false,
            }],
            ..Default::default()
        };

        assert!(!config.sphere_active(Some("Work")));
        // Unknown names and absent spheres count as active.
        assert!(config.sphere_active(Some("Elsewhere")));
        assert!(config.sphere_active(None));
        assert!(config.project_active(Some("Work"), "alpha"));
        assert!(config.project_active(Some("Work"), "unknown"));
        assert!(!config.action_active("lunch"));
        assert!(config.action_active("unknown"));
    }

    #[test]
    fn test_catalog_growth_is_idempotent() {
        let mut config = Config::default();
        config.ensure_project("Work", "alpha");
        config.ensure_project("Work", "alpha");
        config.ensure_action("lunch");
        config.ensure_action("lunch");

        assert_eq!(config.spheres.len(), 1);
        assert_eq!(config.spheres[0].projects.len(), 1);
        assert_eq!(config.actions.len(), 1);
    }
}
