use std::ffi::OsStr ;
use std::path::{ Path, PathBuf };
use pipe_trait::Pipe ;
use serde::Deserialize ;
use thiserror::Error ;

use crate::{ Config, Shared };



/// Optional metadata read from the manifest next to a plugin's main file.
///
/// ```toml
/// name = "example"
/// version = "1.0.0"
/// requires = [ "host:log/logger" ]
/// ```
#[derive( Deserialize, Debug, Clone, Default, PartialEq, Eq )]
#[serde( default )]
pub struct PluginManifest {
    /// Human readable plugin name
    pub name: Option<String>,
    /// Plugin version as declared by its author
    pub version: Option<String>,
    /// Interfaces the plugin needs from the host beyond the imports of its component
    pub requires: Vec<String>,
}

/// Configuration established for one plugin by [`PluginConfig`].
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct PluginSettings {
    id: String,
    root: PathBuf,
    main_file: PathBuf,
    manifest: PluginManifest,
}

impl PluginSettings {
    /// The main file's stem.
    #[inline] pub fn id( &self ) -> &str { &self.id }
    /// Directory containing the main file.
    #[inline] pub fn root( &self ) -> &Path { &self.root }
    #[inline] pub fn main_file( &self ) -> &Path { &self.main_file }
    #[inline] pub fn manifest( &self ) -> &PluginManifest { &self.manifest }
    #[inline] pub fn requires( &self ) -> &[String] { &self.manifest.requires }
}

#[derive( Error, Debug )]
pub enum ConfigError {

    #[error( "Cannot Derive Plugin Id From '{}'", path.display() )]
    MissingPluginId { path: PathBuf },

    #[error( "Cannot Derive Plugin Root From '{}'", path.display() )]
    MissingPluginRoot { path: PathBuf },

    #[error( "Failed to Read Manifest '{}': {error}", path.display() )]
    ManifestRead { path: PathBuf, error: std::io::Error },

    #[error( "Failed to Parse Manifest '{}': {error}", path.display() )]
    ManifestParse { path: PathBuf, error: toml::de::Error },

}

/// A [`Config`] deriving [`PluginSettings`] from the main file path and an optional
/// manifest in the same directory.
///
/// The settings are published to the handle returned by [`PluginConfig::settings`] so that
/// later collaborators can read them. A failed `init` leaves nothing published, not even
/// the settings of an earlier plugin.
#[derive( Debug, Clone )]
pub struct PluginConfig {
    manifest_file_name: String,
    settings: Shared<PluginSettings>,
}

impl PluginConfig {

    pub const DEFAULT_MANIFEST_FILE: &str = "plugin.toml" ;

    pub fn new() -> Self {
        Self {
            manifest_file_name: Self::DEFAULT_MANIFEST_FILE.to_string(),
            settings: Shared::new(),
        }
    }

    /// Reads the manifest from `name` instead of [`PluginConfig::DEFAULT_MANIFEST_FILE`].
    pub fn with_manifest_file_name( mut self, name: impl Into<String> ) -> Self {
        self.manifest_file_name = name.into();
        self
    }

    /// Handle to the settings published by [`Config::init`].
    pub fn settings( &self ) -> Shared<PluginSettings> { self.settings.clone() }

    #[inline] pub fn manifest_file_name( &self ) -> &str { &self.manifest_file_name }

}

impl Default for PluginConfig {
    fn default() -> Self { Self::new() }
}

impl Config for PluginConfig {

    type Error = ConfigError ;

    fn init( &mut self, main_file: &Path ) -> Result<(), ConfigError> {

        self.settings.take();

        let id = plugin_id( main_file )
            .ok_or_else(|| ConfigError::MissingPluginId { path: main_file.to_path_buf() })?;
        let root = plugin_root( main_file )
            .ok_or_else(|| ConfigError::MissingPluginRoot { path: main_file.to_path_buf() })?;

        let manifest_path = root.join( &self.manifest_file_name );
        let manifest = match manifest_path.is_file() {
            true => read_manifest( &manifest_path )?,
            false => PluginManifest::default(),
        };

        tracing::debug!(
            plugin = %id,
            root = %root.display(),
            requires = manifest.requires.len(),
            "Plugin config initialised"
        );

        self.settings.publish( PluginSettings { id, root, main_file: main_file.to_path_buf(), manifest });
        Ok(())

    }

}

fn plugin_id( main_file: &Path ) -> Option<String> {
    main_file.file_stem()
        .and_then( OsStr::to_str )
        .filter(| stem | !stem.is_empty() )
        .map( str::to_string )
}

fn plugin_root( main_file: &Path ) -> Option<PathBuf> {
    main_file.parent().map(| parent | match parent.as_os_str().is_empty() {
        true => PathBuf::from( "." ),
        false => parent.to_path_buf(),
    })
}

fn read_manifest( path: &Path ) -> Result<PluginManifest, ConfigError> {
    std::fs::read_to_string( path )
        .map_err(| error | ConfigError::ManifestRead { path: path.to_path_buf(), error })?
        .pipe(| text | toml::from_str( &text ))
        .map_err(| error | ConfigError::ManifestParse { path: path.to_path_buf(), error })
}

#[cfg( test )]
mod tests {

    use std::path::{ Path, PathBuf };
    use super::{ plugin_id, plugin_root, PluginManifest };

    #[test]
    fn id_and_root_from_path() {
        assert_eq!( plugin_id( Path::new( "/plugins/counter/counter.wasm" )).as_deref(), Some( "counter" ));
        assert_eq!( plugin_root( Path::new( "/plugins/counter/counter.wasm" )), Some( PathBuf::from( "/plugins/counter" )));
        assert_eq!( plugin_root( Path::new( "counter.wasm" )), Some( PathBuf::from( "." )));
        assert_eq!( plugin_id( Path::new( "/" )), None );
        assert_eq!( plugin_root( Path::new( "/" )), None );
    }

    #[test]
    fn manifest_fields_default() {
        let manifest: PluginManifest = toml::from_str( r#"name = "counter""# ).unwrap();
        assert_eq!( manifest, PluginManifest { name: Some( "counter".to_string() ), ..PluginManifest::default() });
    }

}
