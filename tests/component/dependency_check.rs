use std::error::Error ;

use plugin_bootstrap::{ ComponentDependencies, Config, Dependencies, DependencyError, Engine, PluginConfig };

use crate::{ PluginDir, EMPTY_COMPONENT, LOGGER_IMPORT_COMPONENT };

fn configured( plugin: &PluginDir, provided: &[&str] ) -> ComponentDependencies {
	let mut config = PluginConfig::new();
	config.init( plugin.main_file() ).unwrap();
	ComponentDependencies::new( Engine::default(), config.settings(), provided.iter().copied() )
}

#[test]
fn dependency_check_requires_config() {

	let plugin = PluginDir::new( "plugin.wat", EMPTY_COMPONENT );
	let mut dependencies = ComponentDependencies::new( Engine::default(), PluginConfig::new().settings(), Vec::<String>::new() );

	match dependencies.init( plugin.main_file() ) {
		Err( DependencyError::ConfigNotInitialised ) => {},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok(()) => panic!( "Expected failure" ),
	}
	assert!( !dependencies.component().is_published() );

}

#[test]
fn dependency_check_reports_unmet_imports() {

	let plugin = PluginDir::new( "logging.wat", LOGGER_IMPORT_COMPONENT )
		.with_manifest( r#"requires = [ "host:fs/files" ]"# );
	let mut dependencies = configured( &plugin, &[] );

	match dependencies.init( plugin.main_file() ) {
		Err( DependencyError::Unmet( err )) => {
			assert_eq!( err.plugin(), "logging" );
			assert_eq!( err.missing_names(), vec![ "host:log/logger@1.0.0".to_string(), "host:fs/files".to_string() ]);
		},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok(()) => panic!( "Expected failure" ),
	}
	assert!( !dependencies.component().is_published() );

}

#[test]
fn dependency_check_accepts_unversioned_provider() {

	let plugin = PluginDir::new( "logging.wat", LOGGER_IMPORT_COMPONENT )
		.with_manifest( r#"requires = [ "host:fs/files" ]"# );
	let mut dependencies = configured( &plugin, &[ "host:log/logger", "host:fs/files" ]);

	dependencies.init( plugin.main_file() ).unwrap();
	assert!( dependencies.component().is_published() );

}

#[test]
fn dependency_check_accepts_exact_version() {

	let plugin = PluginDir::new( "logging.wat", LOGGER_IMPORT_COMPONENT );
	let mut dependencies = configured( &plugin, &[ "host:log/logger@1.0.0" ]);

	dependencies.init( plugin.main_file() ).unwrap();
	assert!( dependencies.provided().contains( "host:log/logger@1.0.0" ));

}

#[test]
fn dependency_check_rejects_invalid_component() {

	let plugin = PluginDir::new( "broken.wat", "(component" );
	let mut dependencies = configured( &plugin, &[] );

	match dependencies.init( plugin.main_file() ) {
		Err( DependencyError::Compile( _ )) => {},
		Err( err ) => panic!( "Unexpected error: {}", err ),
		Ok(()) => panic!( "Expected failure" ),
	}

}

#[test]
fn dependency_check_unmet_reported_once_in_error_chain() {

	let plugin = PluginDir::new( "logging.wat", LOGGER_IMPORT_COMPONENT );
	let mut dependencies = configured( &plugin, &[] );

	let err = dependencies.init( plugin.main_file() ).unwrap_err();

	assert_eq!( err.to_string(), "Unmet Dependencies of 'logging': host:log/logger@1.0.0" );
	assert!( err.source().is_none(), "Message repeated as source: {:?}", err.source().map( ToString::to_string ));

}
