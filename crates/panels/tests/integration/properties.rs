use hatch_install::{OsConstraint, OsFamily, Panel, PanelDescriptor};
use pretty_assertions::assert_eq;

use crate::common::{loaded, panel_classes, take_journal, xml_children};

/// Mixed flow: hidden panels, host-excluded panels, ids and actions.
fn flow() -> Vec<PanelDescriptor> {
	vec![
		PanelDescriptor::new("HiddenSummaryPanel").with_panel_id("pre"),
		PanelDescriptor::new("HelloPanel"),
		PanelDescriptor::new("LicencePanel")
			.with_os(OsConstraint::family(OsFamily::Windows))
			.with_pre_construction_action("logStart"),
		PanelDescriptor::new("RecordingPanel")
			.with_pre_construction_action("first")
			.with_pre_construction_action("second")
			.with_pre_activation_action("checkDisk")
			.with_pre_activation_action("logStart")
			.with_post_validation_action("writeAudit"),
		PanelDescriptor::new("TargetPanel")
			.with_os(OsConstraint::family(OsFamily::Mac))
			.with_os(OsConstraint::family(OsFamily::Unix).with_arch("x86_64"))
			.with_panel_id("target"),
		PanelDescriptor::new("OtherRecordingPanel").with_pre_construction_action("logStart"),
		PanelDescriptor::new("acme.panels.Custom").with_os(OsConstraint::default().with_name("freebsd")),
		PanelDescriptor::new("finish.FinishPanel").with_os(OsConstraint::family(OsFamily::Windows)),
	]
}

fn surviving() -> Vec<PanelDescriptor> {
	let host = crate::common::linux();
	flow()
		.into_iter()
		.filter(|d| hatch_install::OsMatcher::one_matches_current_host(&host, &d.os_constraints))
		.collect()
}

#[test]
fn test_panel_list_matches_surviving_descriptors() {
	let manager = loaded(flow());
	let expected: Vec<String> = surviving().into_iter().map(|d| d.class_name).collect();

	assert_eq!(
		expected,
		["HiddenSummaryPanel", "HelloPanel", "RecordingPanel", "TargetPanel", "OtherRecordingPanel"]
	);
	assert_eq!(panel_classes(&manager), expected);
	assert_eq!(manager.install_data().panels().len(), expected.len());
}

#[test]
fn test_visible_ordinals_count_preceding_visible_panels() {
	let manager = loaded(flow());
	let visibility = manager.visibility();

	assert_eq!(visibility.len(), manager.install_data().panels().len());
	assert_eq!(visibility.entries(), &[None, Some(0), Some(1), Some(2), Some(3)]);

	let ordinals: Vec<usize> = visibility.entries().iter().flatten().copied().collect();
	assert_eq!(ordinals, (0..visibility.visible_len()).collect::<Vec<_>>());

	for (raw, panel) in manager.install_data().panels().iter().enumerate() {
		let hidden = panel.lock().is_hidden();
		let preceding = manager.install_data().panels()[..raw]
			.iter()
			.filter(|p| !p.lock().is_hidden())
			.count();
		let expected = if hidden { None } else { Some(preceding) };
		assert_eq!(manager.panel_visibility_number(raw), expected);
	}

	assert_eq!(manager.count_visible(), 4);
	assert!(manager.is_last(4));
	assert!((0..4).all(|raw| !manager.is_last(raw)));
}

#[test]
fn test_xml_children_follow_surviving_descriptors() {
	let manager = loaded(flow());
	let root = manager.install_data().xml_data();

	assert_eq!(root.child_count(), surviving().len());
	for (child, descriptor) in root.children().iter().zip(surviving()) {
		assert_eq!(child.name(), descriptor.class_name);
		assert_eq!(child.attribute("id"), descriptor.panel_id.as_deref());
		assert_eq!(child.child_count(), 0);
	}
	assert_eq!(xml_children(&manager)[0], "HiddenSummaryPanel");
}

#[test]
fn test_pre_construction_actions_run_before_metadata_and_next_panel() {
	let _manager = loaded(flow());

	// LicencePanel is excluded, so its logStart never runs.
	assert_eq!(
		take_journal(),
		[
			"initialize first",
			"execute first handler=false",
			"initialize second",
			"execute second handler=false",
			"set_metadata RecordingPanel",
			"initialize checkDisk",
			"initialize logStart",
			"initialize writeAudit",
			"initialize logStart",
			"execute logStart handler=false",
			"set_metadata OtherRecordingPanel",
		]
	);
}

#[test]
fn test_deferred_actions_are_queued_in_order_and_not_run() {
	let manager = loaded(flow());
	take_journal();

	let data = manager.install_data();
	assert_eq!(data.variable("ran.checkDisk"), None);
	assert_eq!(data.variable("ran.writeAudit"), None);

	let recording = data.panels()[2].lock();
	assert_eq!(recording.state().pre_activation_actions().len(), 2);
	assert_eq!(recording.state().post_validation_actions().len(), 1);
	assert!(take_journal().is_empty());
}

#[test]
fn test_fired_deferred_actions_run_in_declared_order() {
	let mut manager = loaded(flow());
	take_journal();

	let panel = manager.install_data().panels()[2].clone();
	panel
		.lock()
		.execute_pre_activation_actions(manager.install_data_mut(), None)
		.unwrap();
	panel
		.lock()
		.execute_post_validation_actions(manager.install_data_mut(), None)
		.unwrap();

	assert_eq!(
		take_journal(),
		[
			"execute checkDisk handler=false",
			"execute logStart handler=false",
			"execute writeAudit handler=false",
		]
	);
}

#[test]
fn test_excluded_descriptors_leave_no_trace() {
	let manager = loaded(flow());

	let components: Vec<&str> = manager.container().components().iter().map(|k| k.name()).collect();
	assert_eq!(
		components,
		["HiddenSummaryPanel", "HelloPanel", "RecordingPanel", "TargetPanel", "OtherRecordingPanel"]
	);
	assert_eq!(manager.container().instantiated(), 5);
	assert!(!xml_children(&manager).iter().any(|c| c == "LicencePanel" || c == "finish.FinishPanel"));
	// Only OtherRecordingPanel's logStart runs; LicencePanel's does not.
	let runs = take_journal()
		.into_iter()
		.filter(|event| event.starts_with("execute logStart"))
		.count();
	assert_eq!(runs, 1);
}
