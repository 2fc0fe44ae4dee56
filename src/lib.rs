//! A bootstrap orchestrator for plugins.
//!
//! Starting a plugin means taking the path of its main file, checking that the file
//! exists, and then handing control to three collaborators in a fixed order:
//!
//! - [`Config`]: establishes configuration scoped to the plugin
//! - [`Dependencies`]: verifies that everything the plugin needs is present
//! - [`Loader`]: discovers and activates the plugin's code
//!
//! Each collaborator is injected, so any implementation satisfying the trait can be used.
//! The orchestrator performs no retries and no rollback, and it neither catches nor logs
//! collaborator failures: the first error ends the start and is returned as-is, tagged with
//! the step it came from.
//!
//! # Example
//!
//! ```
//! use std::convert::Infallible ;
//! use std::path::Path ;
//! use plugin_bootstrap::{ Bootstrap, Config, Dependencies, Loader };
//!
//! struct Noop ;
//! impl Config for Noop {
//! 	type Error = Infallible ;
//! 	fn init( &mut self, _main_file: &Path ) -> Result<(), Infallible> { Ok(()) }
//! }
//! impl Dependencies for Noop {
//! 	type Error = Infallible ;
//! 	fn init( &mut self, _main_file: &Path ) -> Result<(), Infallible> { Ok(()) }
//! }
//! impl Loader for Noop {
//! 	type Error = Infallible ;
//! 	fn init( &mut self, _main_file: &Path ) -> Result<(), Infallible> { Ok(()) }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut bootstrap = Bootstrap::new( Noop, Noop, Noop )
//! 	.with_classes_to_load([ "counter" ]);
//!
//! bootstrap.start_plugin( concat!( env!( "CARGO_MANIFEST_DIR" ), "/Cargo.toml" ))?;
//! assert!( bootstrap.is_started() );
//! # Ok(())
//! # }
//! ```
//!
//! # WebAssembly Component Plugins
//!
//! The crate ships one implementation of each collaborator for plugins distributed as
//! WebAssembly components:
//!
//! - [`PluginConfig`] derives the plugin id and root from the main file path and reads an
//! 	optional `plugin.toml` manifest next to it.
//! - [`ComponentDependencies`] compiles the component and checks its imports, plus any
//! 	interfaces the manifest `requires`, against what the host provides.
//! - [`ComponentLoader`] instantiates the component through a host [`Linker`].
//!
//! They pass state forward through [`Shared`] handles, which is what makes the order
//! of the steps matter.
//!
//! ```no_run
//! use plugin_bootstrap::{ Bootstrap, PluginConfig, ComponentDependencies, ComponentLoader, Engine, Linker };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = Engine::default();
//! let linker = Linker::<()>::new( &engine );
//!
//! let config = PluginConfig::new();
//! let dependencies = ComponentDependencies::new( engine.clone(), config.settings(), [ "host:log/logger" ]);
//! let loader = ComponentLoader::new( engine, linker, || (), dependencies.component() );
//!
//! let mut bootstrap = Bootstrap::new( config, dependencies, loader );
//! bootstrap.start_plugin( "plugins/counter/counter.wasm" )?;
//!
//! let plugin = bootstrap.loader_mut().take_loaded();
//! # let _ = plugin ;
//! # Ok(())
//! # }
//! ```

mod bootstrap ;
mod collaborator ;
mod error ;
mod shared ;
mod plugin_config ;
mod component_dependencies ;
mod component_loader ;

#[doc( no_inline )]
pub use wasmtime::Engine ;
#[doc( no_inline )]
pub use wasmtime::component::{ Component, Linker };

pub use bootstrap::{ start_plugin, Bootstrap, BootState, StartupResult };
pub use collaborator::{ Config, Dependencies, Loader };
pub use error::{ InvalidMainFileError, StartupError };
pub use shared::Shared ;
pub use plugin_config::{ PluginConfig, PluginSettings, PluginManifest, ConfigError };
pub use component_dependencies::{ ComponentDependencies, DependencyError, UnmetDependencyError };
pub use component_loader::{ ComponentLoader, LoadedPlugin, LoadError };
