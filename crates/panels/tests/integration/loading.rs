use std::sync::Arc;

use hatch_catalog::ResolveError;
use hatch_container::{Container, ContainerError};
use hatch_install::{
	ActionConfig, ActionError, InstallData, OsFamily, Panel, PanelDescriptor, ValidationStatus, ValidatorError,
};
use hatch_panels::{DuplicatePanelPolicy, Factories, LoaderConfig, PanelError, PanelManager, builtins};
use pretty_assertions::assert_eq;

use crate::common::{linux, load, loaded, manager, take_journal};

#[test]
fn test_unknown_class_aborts_registration() {
	let mut manager = manager(vec![
		PanelDescriptor::new("HelloPanel"),
		PanelDescriptor::new("NoSuchPanel"),
	]);

	assert_eq!(
		manager.load_panels_in_container().err(),
		Some(PanelError::ClassNotFound(ResolveError::ClassNotFound {
			name: "NoSuchPanel".into()
		}))
	);
	// Registration is not rolled back.
	assert_eq!(manager.container().components().len(), 1);
}

#[test]
fn test_class_names_resolve_without_loading() {
	let manager = manager(vec![]);

	let key = manager.resolve_class_name("finishpanel").unwrap();
	assert_eq!(key.id(), "hatch.installer.panels.finish.FinishPanel");
	assert_eq!(manager.resolve_class_name("hatch.installer.panels.HelloPanel").unwrap().name(), "HelloPanel");
	assert_eq!(
		manager.resolve_class_name("Missing").err(),
		Some(PanelError::ClassNotFound(ResolveError::ClassNotFound {
			name: "Missing".into()
		}))
	);
	assert!(manager.container().components().is_empty());
}

#[test]
fn test_duplicate_panels_are_rejected_by_default() {
	let mut manager = manager(vec![
		PanelDescriptor::new("HelloPanel"),
		PanelDescriptor::new("hellopanel").with_panel_id("again"),
	]);

	assert_eq!(
		load(&mut manager),
		Err(PanelError::DuplicatePanel {
			class: "hellopanel".into(),
			id: "hatch.installer.panels.HelloPanel",
		})
	);
}

#[test]
fn test_duplicate_panels_share_one_instance_when_configured() {
	let config = LoaderConfig {
		duplicate_panels: DuplicatePanelPolicy::Share,
		host: None,
	};
	let mut manager = manager(vec![
		PanelDescriptor::new("HelloPanel"),
		PanelDescriptor::new("InfoPanel"),
		PanelDescriptor::new("hatch.installer.panels.HelloPanel").with_panel_id("again"),
	])
	.with_config(config);
	load(&mut manager).unwrap();

	let panels = manager.install_data().panels();
	assert_eq!(panels.len(), 3);
	assert!(Arc::ptr_eq(&panels[0], &panels[2]));
	assert_eq!(manager.container().components().len(), 2);
	assert_eq!(manager.visibility().entries(), &[Some(0), Some(1), Some(2)]);

	// The last descriptor's metadata wins on the shared instance.
	let shared = panels[0].lock();
	assert_eq!(shared.metadata().and_then(|m| m.panel_id.as_deref()), Some("again"));
}

#[test]
fn test_shared_panel_carries_only_the_last_descriptors_wiring() {
	let config = LoaderConfig {
		duplicate_panels: DuplicatePanelPolicy::Share,
		host: None,
	};
	let mut manager = manager(vec![
		PanelDescriptor::new("TargetPanel")
			.with_validator("target-chosen")
			.with_help("eng", "target_eng.html")
			.with_pre_activation_action("checkDisk")
			.with_post_validation_action("writeAudit"),
		PanelDescriptor::new("TargetPanel")
			.with_panel_id("second")
			.with_pre_activation_action("logStart"),
	])
	.with_config(config);
	load(&mut manager).unwrap();

	let shared = manager.install_data().panels()[0].lock();
	let metadata = shared.metadata().unwrap();
	assert_eq!(metadata.panel_id.as_deref(), Some("second"));
	assert_eq!(metadata.validator, None);
	assert!(shared.validation_service().is_none());
	assert!(shared.state().helps().is_empty());
	assert_eq!(shared.state().pre_activation_actions().len(), 1);
	assert!(shared.state().post_validation_actions().is_empty());
}

#[test]
fn test_instantiation_runs_once() {
	let mut manager = loaded(vec![PanelDescriptor::new("HelloPanel")]);

	assert_eq!(manager.instantiate_panels(), Err(PanelError::AlreadyInstantiated));
	assert_eq!(manager.install_data().panels().len(), 1);
	assert_eq!(manager.visibility().len(), 1);
}

#[test]
fn test_instantiation_requires_registration() {
	let mut manager = manager(vec![PanelDescriptor::new("HelloPanel")]);

	assert_eq!(
		manager.instantiate_panels(),
		Err(PanelError::Container(ContainerError::NotRegistered {
			id: "hatch.installer.panels.HelloPanel"
		}))
	);
}

#[test]
fn test_unknown_action_names_the_panel() {
	let mut manager = manager(vec![PanelDescriptor::new("InfoPanel").with_post_validation_action("missing")]);

	assert_eq!(
		load(&mut manager),
		Err(PanelError::Action {
			class: "InfoPanel".into(),
			action: "missing".into(),
			source: ActionError::NotFound("missing".into()),
		})
	);
}

#[test]
fn test_failing_pre_construction_action_aborts_before_the_panel_exists() {
	let mut manager = manager(vec![
		PanelDescriptor::new("HelloPanel"),
		PanelDescriptor::new("RecordingPanel").with_pre_construction_action("explode"),
		PanelDescriptor::new("SummaryPanel"),
	]);

	let err = load(&mut manager).unwrap_err();
	assert_eq!(
		err,
		PanelError::Action {
			class: "RecordingPanel".into(),
			action: "explode".into(),
			source: ActionError::Failed("disk on fire".into()),
		}
	);
	assert_eq!(manager.install_data().panels().len(), 1);
	assert_eq!(manager.container().instantiated(), 1);
	assert!(take_journal().is_empty());
}

#[test]
fn test_action_configuration_is_passed_to_initialize() {
	let config = ActionConfig::from([("tag".to_string(), "boot".to_string())]);
	let _manager = loaded(vec![
		PanelDescriptor::new("HelloPanel")
			.with_pre_construction_action("logStart")
			.with_action_configuration("logStart", config),
	]);

	assert_eq!(take_journal(), ["initialize logStart tag=boot", "execute logStart handler=false"]);
}

#[test]
fn test_deferred_action_initialization_failures_are_fatal() {
	let mut manager = manager(vec![PanelDescriptor::new("TargetPanel").with_pre_activation_action("strict")]);

	assert!(matches!(
		load(&mut manager),
		Err(PanelError::Action {
			source: ActionError::Initialize { .. },
			..
		})
	));

	let level = ActionConfig::from([("level".to_string(), "warn".to_string())]);
	let _manager = loaded(vec![
		PanelDescriptor::new("TargetPanel")
			.with_pre_activation_action("strict")
			.with_action_configuration("strict", level),
	]);
}

#[test]
fn test_validator_and_helps_are_attached() {
	let manager = loaded(vec![
		PanelDescriptor::new("TargetPanel")
			.with_validator("target-chosen")
			.with_help("eng", "target_eng.html")
			.with_help("fra", "target_fra.html"),
		PanelDescriptor::new("HelloPanel"),
	]);

	let target = manager.install_data().panels()[0].lock();
	let validator = target.validation_service().unwrap();
	let mut data = InstallData::default();
	assert_eq!(validator.validate(&data), ValidationStatus::Error);
	data.set_variable("INSTALL_PATH", "/opt/app");
	assert_eq!(validator.validate(&data), ValidationStatus::Ok);
	assert_eq!(target.help("fra"), Some("target_fra.html"));
	assert_eq!(target.state().helps().len(), 2);

	let hello = manager.install_data().panels()[1].lock();
	assert!(hello.validation_service().is_none());
}

#[test]
fn test_unknown_validator_names_the_panel() {
	let mut manager = manager(vec![PanelDescriptor::new("TargetPanel").with_validator("nope")]);

	assert_eq!(
		load(&mut manager),
		Err(PanelError::Validator {
			class: "TargetPanel".into(),
			validator: "nope".into(),
			source: ValidatorError::NotFound("nope".into()),
		})
	);
}

#[test]
fn test_empty_factories_know_no_action() {
	let mut manager = PanelManager::new(
		InstallData::new(vec![PanelDescriptor::new("HelloPanel").with_pre_construction_action("logStart")]),
		Container::new(),
		Factories::empty(),
	)
	.with_host(linux());

	assert!(matches!(
		load(&mut manager),
		Err(PanelError::Action {
			source: ActionError::NotFound(_),
			..
		})
	));
}

#[test]
fn test_config_file_overrides_host() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("loader.toml");
	std::fs::write(
		&path,
		r#"
duplicate_panels = "reject"

[host]
family = "windows"
name = "windows"
arch = "x86_64"
"#,
	)
	.unwrap();

	let config = LoaderConfig::load(&path).unwrap();
	assert_eq!(config.host.as_ref().map(|h| h.family), Some(OsFamily::Windows));

	let mut manager = manager(vec![
		PanelDescriptor::new("HelloPanel").with_os(hatch_install::OsConstraint::family(OsFamily::Windows)),
		PanelDescriptor::new("InfoPanel").with_os(hatch_install::OsConstraint::family(OsFamily::Unix)),
	])
	.with_config(config);
	load(&mut manager).unwrap();

	assert_eq!(manager.install_data().panels().len(), 1);
	assert_eq!(manager.container().components()[0].name(), "HelloPanel");
}

#[test]
fn test_runtime_registered_panel_resolves_by_qualified_name() {
	use hatch_catalog::{PanelDef, RegistryMeta, RegistrySource, construct_default};

	static PLUGIN: PanelDef = PanelDef::new(
		RegistryMeta {
			id: "plugins.extra.ExtraPanel",
			name: "ExtraPanel",
			aliases: &[],
			description: "Registered while the installer runs",
			priority: 0,
			source: RegistrySource::Runtime,
		},
		construct_default::<crate::common::Plain>,
	);

	builtins::catalog().register(&PLUGIN);
	let manager = loaded(vec![PanelDescriptor::new("plugins.extra.ExtraPanel")]);

	assert_eq!(manager.container().components()[0].id(), "plugins.extra.ExtraPanel");
	assert!(manager.is_visible(0));
}
