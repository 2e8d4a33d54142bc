//! Config resolution never fails and always yields a plain string identity.

use lambda_tasks::config::{load_raw_config_file, RawConfig, TargetConfig, DEFAULT_REGION};
use lambda_tasks::{ExecutionMode, TargetLayout};
use proptest::prelude::*;

fn target_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

fn mode() -> impl Strategy<Value = ExecutionMode> {
    prop_oneof![Just(ExecutionMode::Develop), Just(ExecutionMode::Production)]
}

proptest! {
    #[test]
    fn missing_function_name_falls_back_to_target_name(name in target_name(), mode in mode()) {
        let config = TargetConfig::from_raw(RawConfig::default(), &name, mode);
        prop_assert_eq!(config.function_identity, name);
        prop_assert_eq!(config.region, DEFAULT_REGION);
    }

    #[test]
    fn per_mode_identity_selects_by_mode(
        prod in "[a-z]{1,12}-prod",
        dev in "[a-z]{1,12}-dev",
        mode in mode(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("orders");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(
            root.join("lambda-config.toml"),
            format!("[functionName]\nproduction = \"{}\"\ndevelop = \"{}\"\n", prod, dev),
        ).unwrap();

        let config = TargetConfig::resolve(&TargetLayout::new(&root), mode);
        let expected = match mode {
            ExecutionMode::Production => prod,
            ExecutionMode::Develop => dev,
        };
        prop_assert_eq!(config.function_identity, expected);
    }

    #[test]
    fn arbitrary_config_text_never_panics(content in "\\PC{0,200}", mode in mode()) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("orders");
        std::fs::create_dir_all(&root).unwrap();
        std::fs::write(root.join("lambda-config.toml"), &content).unwrap();

        let _ = load_raw_config_file(&root.join("lambda-config.toml"));
        let config = TargetConfig::resolve(&TargetLayout::new(&root), mode);
        prop_assert!(!config.region.is_empty());
    }
}
