use plugin_bootstrap::{ start_plugin, Bootstrap };

use crate::{ succeeding, CallLog, CONFIG_INIT, DEPENDENCIES_INIT, LOADER_INIT };

#[test]
fn call_order_config_dependencies_loader() {

	let dir = tempfile::tempdir().unwrap();
	let main_file = plugin_file!( dir );
	let log = CallLog::default();

	start_plugin( &main_file, &mut succeeding( &log ), &mut succeeding( &log ), &mut succeeding( &log ))
		.unwrap();

	assert_eq!( log.steps(), vec![ CONFIG_INIT, DEPENDENCIES_INIT, LOADER_INIT ]);

}

#[test]
fn call_order_forwards_path_unchanged() {

	let dir = tempfile::tempdir().unwrap();
	let main_file = plugin_file!( dir );
	let log = CallLog::default();

	let mut bootstrap = Bootstrap::new( succeeding( &log ), succeeding( &log ), succeeding( &log ));
	bootstrap.start_plugin( &main_file ).unwrap();

	assert_eq!( log.paths(), vec![ main_file.clone(), main_file.clone(), main_file ]);

}

#[test]
fn call_order_with_boxed_collaborators() {

	let dir = tempfile::tempdir().unwrap();
	let main_file = plugin_file!( dir );
	let log = CallLog::default();

	let mut config = Box::new( succeeding( &log ));
	let mut dependencies = succeeding( &log );
	let mut loader = succeeding( &log );
	let mut bootstrap = Bootstrap::new( &mut config, &mut dependencies, &mut loader );
	bootstrap.start_plugin( &main_file ).unwrap();

	assert_eq!( log.steps(), vec![ CONFIG_INIT, DEPENDENCIES_INIT, LOADER_INIT ]);

}
