//! Contracts for the three collaborators a plugin start hands control to.
//!
//! Each collaborator receives the plugin main file path and either succeeds or returns
//! its own error. The orchestrator forwards the path unchanged and never inspects the
//! errors it gets back.

use std::path::Path ;



/// Establishes configuration state scoped to one plugin.
///
/// Runs first. Later steps may rely on whatever it sets up.
pub trait Config {
    /// Failure to locate or parse the plugin's configuration.
    type Error: std::error::Error ;
    /// # Errors
    /// Returns `Self::Error` if the plugin's configuration cannot be located or parsed.
    fn init( &mut self, main_file: &Path ) -> Result<(), Self::Error> ;
}

/// Verifies that the runtime dependencies of a plugin are present and compatible.
///
/// Runs after [`Config`] and before [`Loader`]. An error here stops the start before any
/// plugin code is activated.
pub trait Dependencies {
    /// A hard dependency is missing or incompatible.
    type Error: std::error::Error ;
    /// # Errors
    /// Returns `Self::Error` if a required dependency is missing or incompatible.
    fn init( &mut self, main_file: &Path ) -> Result<(), Self::Error> ;
}

/// Discovers and activates the plugin's code.
///
/// Runs last, against a verified dependency set.
pub trait Loader {
    /// Referenced code could not be resolved or activated.
    type Error: std::error::Error ;
    /// # Errors
    /// Returns `Self::Error` if the plugin's code cannot be resolved or activated.
    fn init( &mut self, main_file: &Path ) -> Result<(), Self::Error> ;
}

macro_rules! forward_collaborator {
    ( $trait:ident ) => {
        impl<T: $trait + ?Sized> $trait for &mut T {
            type Error = T::Error ;
            #[inline] fn init( &mut self, main_file: &Path ) -> Result<(), Self::Error> { ( **self ).init( main_file )}
        }
        impl<T: $trait + ?Sized> $trait for Box<T> {
            type Error = T::Error ;
            #[inline] fn init( &mut self, main_file: &Path ) -> Result<(), Self::Error> { ( **self ).init( main_file )}
        }
    };
}

forward_collaborator!( Config );
forward_collaborator!( Dependencies );
forward_collaborator!( Loader );
