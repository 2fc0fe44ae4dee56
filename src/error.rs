use std::path::{ Path, PathBuf };
use thiserror::Error ;



/// The plugin main file handed to [`start_plugin`]( crate::start_plugin ) does not exist.
///
/// This is fatal: retrying without correcting the path will fail the same way.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
#[error( "Invalid plugin main file path: {}", path.display() )]
pub struct InvalidMainFileError {
    path: PathBuf,
}

impl InvalidMainFileError {
    pub(crate) fn new( path: &Path ) -> Self { Self { path: path.to_path_buf() }}

    /// The path that failed the existence check.
    #[inline] pub fn path( &self ) -> &Path { &self.path }
}

/// Errors returned while starting a plugin.
///
/// Collaborator errors are carried unchanged; the variant only records which step
/// produced them.
///
/// # Type Parameters
/// - `C`: error type of the [`Config`]( crate::Config ) collaborator
/// - `D`: error type of the [`Dependencies`]( crate::Dependencies ) collaborator
/// - `L`: error type of the [`Loader`]( crate::Loader ) collaborator
#[derive( Error, Debug )]
pub enum StartupError<C, D, L> {
    /// The main file path does not exist. No collaborator was invoked.
    #[error( transparent )] InvalidMainFile( #[from] InvalidMainFileError ),
    /// [`Bootstrap::start_plugin`]( crate::Bootstrap::start_plugin ) was called after a successful start.
    #[error( "Plugin Already Started" )] AlreadyStarted,
    /// Configuration failed. Neither dependencies nor the loader were invoked.
    #[error( "Config Error: {0}" )] Config( C ),
    /// Dependency verification failed. Configuration had completed; the loader was not invoked.
    #[error( "Dependency Error: {0}" )] Dependencies( D ),
    /// Loading failed after configuration and dependencies had completed.
    #[error( "Loader Error: {0}" )] Loader( L ),
}
