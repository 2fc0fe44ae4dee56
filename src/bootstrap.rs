//! The plugin start sequence.
//!
//! Starting a plugin checks that its main file exists and then initialises, strictly in
//! this order and without retries:
//!
//! 1. [`Config`], so that later steps can be configuration-driven
//! 2. [`Dependencies`], so that nothing loads against an unsatisfied dependency set
//! 3. [`Loader`]
//!
//! The first failure ends the sequence. Steps that already completed are not rolled back;
//! undoing their work is up to the collaborators themselves.

use std::path::Path ;

use crate::{ Config, Dependencies, Loader, InvalidMainFileError, StartupError };



/// Result of starting a plugin with collaborators `C`, `D` and `L`.
pub type StartupResult<C, D, L> = Result<(), StartupError<
    <C as Config>::Error,
    <D as Dependencies>::Error,
    <L as Loader>::Error,
>>;

/// Starts the plugin whose entry file is `main_file`.
///
/// Holds no state of its own: the path is checked for existence and then forwarded
/// unchanged to `config`, `dependencies` and `loader`, in that order.
///
/// # Errors
/// - [`StartupError::InvalidMainFile`] if `main_file` does not exist; no collaborator is invoked.
/// - [`StartupError::Config`], [`StartupError::Dependencies`] or [`StartupError::Loader`]
/// 	carrying the exact error of the first collaborator that failed.
pub fn start_plugin<C, D, L>(
    main_file: impl AsRef<Path>,
    config: &mut C,
    dependencies: &mut D,
    loader: &mut L,
) -> StartupResult<C, D, L>
where
    C: Config + ?Sized,
    D: Dependencies + ?Sized,
    L: Loader + ?Sized,
{

    let main_file = main_file.as_ref();
    tracing::debug!( main_file = %main_file.display(), "Starting plugin" );

    if !main_file.exists() { return Err( InvalidMainFileError::new( main_file ).into() ) }

    tracing::debug!( "Initialising config" );
    config.init( main_file ).map_err( StartupError::Config )?;

    tracing::debug!( "Checking dependencies" );
    dependencies.init( main_file ).map_err( StartupError::Dependencies )?;

    tracing::debug!( "Loading plugin" );
    loader.init( main_file ).map_err( StartupError::Loader )?;

    tracing::info!( main_file = %main_file.display(), "Plugin started" );
    Ok(())

}

/// Lifecycle of a [`Bootstrap`].
#[derive( Debug, Clone, Copy, PartialEq, Eq, Default )]
pub enum BootState {
    /// No successful start yet. A failed start leaves the orchestrator here.
    #[default] Unstarted,
    /// All three collaborators completed. Terminal.
    Started,
}

/// A plugin start orchestrator owning its collaborators.
///
/// Wraps [`start_plugin`] with the injected [`Config`], [`Dependencies`] and [`Loader`],
/// plus two registries that extensions may fill in. The orchestrator itself never reads
/// the registries; they are carried for collaborators and callers building on top of it.
///
/// A `Bootstrap` starts at most one plugin. Once started, further calls to
/// [`Bootstrap::start_plugin`] fail with [`StartupError::AlreadyStarted`].
///
/// # Type Parameters
/// - `C`: configuration collaborator
/// - `D`: dependency-checking collaborator
/// - `L`: loading collaborator
#[derive( Debug )]
pub struct Bootstrap<C, D, L> {
    config: C,
    dependency_checker: D,
    loader: L,
    /// Code units an extension wants loaded; empty by default
    classes_to_load: Vec<String>,
    /// Dependencies an extension declares; empty by default
    dependencies: Vec<String>,
    state: BootState,
}

impl<C, D, L> Bootstrap<C, D, L>
where
    C: Config,
    D: Dependencies,
    L: Loader,
{

    /// Creates an unstarted orchestrator with empty registries.
    pub fn new( config: C, dependency_checker: D, loader: L ) -> Self {
        Self {
            config,
            dependency_checker,
            loader,
            classes_to_load: Vec::with_capacity( 0 ),
            dependencies: Vec::with_capacity( 0 ),
            state: BootState::Unstarted,
        }
    }

    /// Replaces the `classes_to_load` registry.
    pub fn with_classes_to_load( mut self, classes: impl IntoIterator<Item = impl Into<String>> ) -> Self {
        self.classes_to_load = classes.into_iter().map( Into::into ).collect();
        self
    }

    /// Replaces the `dependencies` registry.
    pub fn with_dependencies( mut self, dependencies: impl IntoIterator<Item = impl Into<String>> ) -> Self {
        self.dependencies = dependencies.into_iter().map( Into::into ).collect();
        self
    }

    /// Runs the start sequence with the owned collaborators.
    ///
    /// The orchestrator moves to [`BootState::Started`] only if every step succeeds.
    ///
    /// # Errors
    /// - [`StartupError::AlreadyStarted`] if a previous call succeeded; no collaborator is invoked.
    /// - Everything [`start_plugin`] returns.
    pub fn start_plugin( &mut self, main_file: impl AsRef<Path> ) -> StartupResult<C, D, L> {
        if self.state == BootState::Started { return Err( StartupError::AlreadyStarted ) }
        start_plugin( main_file, &mut self.config, &mut self.dependency_checker, &mut self.loader )?;
        self.state = BootState::Started ;
        Ok(())
    }

    #[inline] pub fn state( &self ) -> BootState { self.state }
    #[inline] pub fn is_started( &self ) -> bool { self.state == BootState::Started }

    #[inline] pub fn classes_to_load( &self ) -> &[String] { &self.classes_to_load }
    #[inline] pub fn dependencies( &self ) -> &[String] { &self.dependencies }

    #[inline] pub fn config( &self ) -> &C { &self.config }
    #[inline] pub fn dependency_checker( &self ) -> &D { &self.dependency_checker }
    #[inline] pub fn loader( &self ) -> &L { &self.loader }
    #[inline] pub fn loader_mut( &mut self ) -> &mut L { &mut self.loader }

    /// Gives back the collaborators, e.g. to retrieve what the loader produced.
    pub fn into_parts( self ) -> ( C, D, L ) {( self.config, self.dependency_checker, self.loader )}

}
