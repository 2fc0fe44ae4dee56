use std::collections::HashSet ;
use std::path::Path ;
use itertools::Itertools ;
use nonempty_collections::NEVec ;
use thiserror::Error ;
use wasmtime::Engine ;
use wasmtime::component::Component ;

use crate::{ Dependencies, PluginSettings, Shared };



/// Some interfaces a plugin needs are not provided by the host.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct UnmetDependencyError {
    plugin: String,
    missing: NEVec<String>,
}

impl UnmetDependencyError {
    #[inline] pub fn plugin( &self ) -> &str { &self.plugin }
    #[inline] pub fn missing( &self ) -> &NEVec<String> { &self.missing }
    /// Names of the missing interfaces, in the order they were found.
    pub fn missing_names( &self ) -> Vec<String> { self.missing.clone().into_iter().collect() }
}

impl std::error::Error for UnmetDependencyError {}

impl std::fmt::Display for UnmetDependencyError {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        write!( f, "Unmet Dependencies of '{}': {}", self.plugin, self.missing_names().iter().join( ", " ))
    }
}

#[derive( Error, Debug )]
pub enum DependencyError {

    /// Ran before [`PluginConfig`]( crate::PluginConfig ) published its settings.
    #[error( "Plugin Config Not Initialised" )]
    ConfigNotInitialised,

    #[error( "Failed to Compile Component: {0}" )]
    Compile( wasmtime::Error ),

    #[error( transparent )]
    Unmet( #[from] UnmetDependencyError ),

}

/// A [`Dependencies`] check for WebAssembly component plugins.
///
/// Compiles the plugin's component and verifies that each of its imports, along with every
/// interface its manifest `requires`, is among the interfaces the host provides. A versioned
/// name such as `host:log/logger@1.2.0` is also satisfied by the unversioned
/// `host:log/logger`.
///
/// On success the compiled component is published to [`ComponentDependencies::component`]
/// so the loader doesn't compile it twice.
pub struct ComponentDependencies {
    engine: Engine,
    settings: Shared<PluginSettings>,
    provided: HashSet<String>,
    component: Shared<Component>,
}

impl ComponentDependencies {

    pub fn new(
        engine: Engine,
        settings: Shared<PluginSettings>,
        provided: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            engine,
            settings,
            provided: provided.into_iter().map( Into::into ).collect(),
            component: Shared::new(),
        }
    }

    /// Handle to the component compiled by a successful check.
    pub fn component( &self ) -> Shared<Component> { self.component.clone() }

    /// Interfaces the host provides.
    #[inline] pub fn provided( &self ) -> &HashSet<String> { &self.provided }

    fn is_provided( &self, name: &str ) -> bool {
        self.provided.contains( name )
            || unversioned( name ).is_some_and(| base | self.provided.contains( base ))
    }

}

impl Dependencies for ComponentDependencies {

    type Error = DependencyError ;

    fn init( &mut self, main_file: &Path ) -> Result<(), DependencyError> {

        let settings = self.settings.get().ok_or( DependencyError::ConfigNotInitialised )?;
        let component = Component::from_file( &self.engine, main_file ).map_err( DependencyError::Compile )?;

        let missing = component.component_type()
            .imports( &self.engine )
            .map(|( name, _ )| name.to_string() )
            .chain( settings.requires().iter().cloned() )
            .unique()
            .filter(| name | !self.is_provided( name ))
            .collect::<Vec<_>>();

        if let Some( missing ) = NEVec::try_from_vec( missing ) {
            return Err( UnmetDependencyError { plugin: settings.id().to_string(), missing }.into() );
        }

        tracing::debug!( plugin = %settings.id(), "Plugin dependencies satisfied" );
        self.component.publish( component );
        Ok(())

    }

}

impl std::fmt::Debug for ComponentDependencies {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "ComponentDependencies" )
            .field( "engine", &"<Engine>" )
            .field( "settings", &self.settings )
            .field( "provided", &self.provided )
            .field( "component", &self.component )
            .finish()
    }
}

fn unversioned( name: &str ) -> Option<&str> {
    name.split_once( '@' ).map(|( base, _ )| base )
}

#[cfg( test )]
mod tests {

    use super::unversioned ;

    #[test]
    fn strips_version_suffix() {
        assert_eq!( unversioned( "host:log/logger@1.2.0" ), Some( "host:log/logger" ));
        assert_eq!( unversioned( "host:log/logger" ), None );
    }

}
