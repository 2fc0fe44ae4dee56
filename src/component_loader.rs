use std::path::Path ;
use thiserror::Error ;
use wasmtime::{ Engine, Store };
use wasmtime::component::{ Component, Instance, Linker };

use crate::{ Loader, Shared };



#[derive( Error, Debug )]
pub enum LoadError {
    #[error( "Failed to Compile Component: {0}" )] Compile( wasmtime::Error ),
    #[error( "Failed to Instantiate Component: {0}" )] Instantiate( wasmtime::Error ),
}

/// A plugin component instantiated by [`ComponentLoader`], together with its store.
pub struct LoadedPlugin<Ctx: 'static> {
    store: Store<Ctx>,
    instance: Instance,
}

impl<Ctx: 'static> LoadedPlugin<Ctx> {

    #[inline] pub fn store( &self ) -> &Store<Ctx> { &self.store }
    #[inline] pub fn store_mut( &mut self ) -> &mut Store<Ctx> { &mut self.store }
    #[inline] pub fn instance( &self ) -> Instance { self.instance }

    /// Whether the component exports a top-level item called `name`.
    pub fn has_export( &mut self, name: &str ) -> bool {
        self.instance.get_export_index( &mut self.store, None, name ).is_some()
    }

    pub fn into_parts( self ) -> ( Store<Ctx>, Instance ) {( self.store, self.instance )}

}

impl<Ctx: std::fmt::Debug + 'static> std::fmt::Debug for LoadedPlugin<Ctx> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct( "LoadedPlugin" )
            .field( "data", &self.store.data() )
            .field( "store", &self.store )
            .finish_non_exhaustive()
    }
}

/// A [`Loader`] that instantiates a plugin's WebAssembly component.
///
/// Uses the component published by [`ComponentDependencies`]( crate::ComponentDependencies )
/// when there is one, otherwise compiles the main file itself. Every instantiation gets a
/// fresh store whose data comes from the context factory.
///
/// The engine must be the one the published component was compiled with.
///
/// # Type Parameters
/// - `Ctx`: data stored inside the plugin's wasmtime `Store`
pub struct ComponentLoader<Ctx: 'static> {
    engine: Engine,
    linker: Linker<Ctx>,
    context: Box<dyn FnMut() -> Ctx + Send>,
    component: Shared<Component>,
    loaded: Option<LoadedPlugin<Ctx>>,
}

impl<Ctx: 'static> ComponentLoader<Ctx> {

    /// Host exports must already be defined in `linker`; the component's imports are
    /// resolved against it.
    pub fn new(
        engine: Engine,
        linker: Linker<Ctx>,
        context: impl FnMut() -> Ctx + Send + 'static,
        component: Shared<Component>,
    ) -> Self {
        Self { engine, linker, context: Box::new( context ), component, loaded: None }
    }

    #[inline] pub fn is_loaded( &self ) -> bool { self.loaded.is_some() }

    /// Takes the plugin instantiated by the last successful [`Loader::init`].
    pub fn take_loaded( &mut self ) -> Option<LoadedPlugin<Ctx>> { self.loaded.take() }

}

impl<Ctx: 'static> Loader for ComponentLoader<Ctx> {

    type Error = LoadError ;

    fn init( &mut self, main_file: &Path ) -> Result<(), LoadError> {

        let component = match self.component.take() {
            Some( component ) => component,
            None => Component::from_file( &self.engine, main_file ).map_err( LoadError::Compile )?,
        };

        let mut store = Store::new( &self.engine, ( self.context )() );
        let instance = self.linker.instantiate( &mut store, &component ).map_err( LoadError::Instantiate )?;

        tracing::debug!( main_file = %main_file.display(), "Plugin component instantiated" );
        self.loaded = Some( LoadedPlugin { store, instance });
        Ok(())

    }

}

impl<Ctx: std::fmt::Debug + 'static> std::fmt::Debug for ComponentLoader<Ctx> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "ComponentLoader" )
            .field( "engine", &"<Engine>" )
            .field( "linker", &"<Linker>" )
            .field( "context", &"<closure>" )
            .field( "component", &self.component )
            .field( "loaded", &self.loaded )
            .finish()
    }
}
