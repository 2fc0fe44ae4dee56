use plugin_bootstrap::{ Bootstrap, BootState, StartupError };

use crate::{ succeeding, CallLog, Stub, StubError, CONFIG_INIT, DEPENDENCIES_INIT, LOADER_INIT };

#[test]
fn lifecycle_starts_once() {

	let dir = tempfile::tempdir().unwrap();
	let main_file = plugin_file!( dir );
	let log = CallLog::default();

	let mut bootstrap = Bootstrap::new( succeeding( &log ), succeeding( &log ), succeeding( &log ));
	assert_eq!( bootstrap.state(), BootState::Unstarted );

	bootstrap.start_plugin( &main_file ).unwrap();
	assert!( bootstrap.is_started() );
	assert_eq!( log.steps().len(), 3 );

	match bootstrap.start_plugin( &main_file ) {
		Err( StartupError::AlreadyStarted ) => {},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok(()) => panic!( "Expected failure" ),
	}
	assert_eq!( log.steps().len(), 3, "Collaborators were invoked again" );
	assert_eq!( bootstrap.state(), BootState::Started );

}

#[test]
fn lifecycle_failed_start_can_be_retried() {

	let dir = tempfile::tempdir().unwrap();
	let main_file = plugin_file!( dir );
	let missing = dir.path().join( "missing.ext" );
	let log = CallLog::default();

	let mut bootstrap = Bootstrap::new( succeeding( &log ), succeeding( &log ), succeeding( &log ));
	assert!( bootstrap.start_plugin( &missing ).is_err() );
	assert_eq!( bootstrap.state(), BootState::Unstarted );

	bootstrap.start_plugin( &main_file ).unwrap();
	assert_eq!( log.steps(), vec![ CONFIG_INIT, DEPENDENCIES_INIT, LOADER_INIT ]);
	assert_eq!( bootstrap.state(), BootState::Started );

}

#[test]
fn lifecycle_into_parts_returns_collaborators() {

	let dir = tempfile::tempdir().unwrap();
	let main_file = plugin_file!( dir );
	let log = CallLog::default();

	let mut bootstrap = Bootstrap::new(
		succeeding( &log ),
		succeeding( &log ),
		Stub::failing( &log, StubError( "loader" )),
	);
	assert!( bootstrap.start_plugin( &main_file ).is_err() );
	assert!( !bootstrap.is_started() );

	let ( _config, _dependencies, _loader ) = bootstrap.into_parts();
	assert_eq!( log.steps(), vec![ CONFIG_INIT, DEPENDENCIES_INIT, LOADER_INIT ]);

}
