use figment::{Error, Figment, Metadata, Provider};
use serde::{Deserialize, Serialize};

/// default directory values
pub const PAGES_DIR: &str = "src/pages";
pub const SCRIPTS_DIR: &str = "src/js";
pub const STYLES_DIR: &str = "src/styles";
pub const IMAGES_DIR: &str = "images";
pub const OUT_DIR: &str = "dist";

/// config for managing the bundle
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    pub structure: ConfigStructure,
    pub pages: ConfigPages,
    pub styles: ConfigStyles,
    pub images: ConfigImages,
    pub server: ConfigServer,
}

/// config for defining the layout of the source tree
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigStructure {
    /// the directory holding the page templates, one output document each
    pub pages: String,
    /// scripts copied through to the output
    pub scripts: String,
    /// stylesheets copied through to the output
    pub styles: String,
    /// images copied through to the output
    pub images: String,
    /// the output directory that is used for serving the bundle
    pub output: String,
}

/// config for mapping a page name to its output name
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigPages {
    /// the extension token to replace in page names
    pub source_ext: String,
    /// the token it is replaced with
    pub target_ext: String,
    /// only swap a true trailing `.source_ext` extension instead of the
    /// first occurrence of the token anywhere in the name
    pub strict_extensions: bool,
}

/// stylesheet options handed through to the pipeline
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigStyles {
    /// where the extracted stylesheet lands in the output
    pub filename: String,
    pub source_maps: bool,
}

/// lossless image optimizer options handed through to the pipeline
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigImages {
    /// abort the build on a corrupted image instead of skipping it
    pub bail: bool,
    pub gifsicle_interlaced: bool,
    pub jpeg_progressive: bool,
    pub optipng_level: u8,
    pub svgo_keep_viewbox: bool,
}

/// options for the dev server
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigServer {
    pub port: u16,
    pub compress: bool,
}

impl Default for ConfigStructure {
    fn default() -> Self {
        Self {
            pages: PAGES_DIR.into(),
            scripts: SCRIPTS_DIR.into(),
            styles: STYLES_DIR.into(),
            images: IMAGES_DIR.into(),
            output: OUT_DIR.into(),
        }
    }
}

impl Default for ConfigPages {
    fn default() -> Self {
        Self {
            source_ext: "njk".into(),
            target_ext: "html".into(),
            strict_extensions: false,
        }
    }
}

impl Default for ConfigStyles {
    fn default() -> Self {
        Self {
            filename: "styles/styles.css".into(),
            source_maps: true,
        }
    }
}

impl Default for ConfigImages {
    fn default() -> Self {
        Self {
            bail: false,
            gifsicle_interlaced: true,
            jpeg_progressive: true,
            optipng_level: 5,
            svgo_keep_viewbox: true,
        }
    }
}

impl Default for ConfigServer {
    fn default() -> Self {
        Self {
            port: 3000,
            compress: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Self::default())
    }
    pub fn from<T: Provider>(provider: T) -> Result<Self, Error> {
        Figment::from(provider).extract()
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("Sitepack config")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}

impl Provider for ConfigStructure {
    fn metadata(&self) -> Metadata {
        Metadata::named("Sitepack file structure")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}

impl Provider for ConfigPages {
    fn metadata(&self) -> Metadata {
        Metadata::named("Sitepack page mapping")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}

impl Provider for ConfigStyles {
    fn metadata(&self) -> Metadata {
        Metadata::named("Sitepack style options")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}

impl Provider for ConfigImages {
    fn metadata(&self) -> Metadata {
        Metadata::named("Sitepack image options")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}

impl Provider for ConfigServer {
    fn metadata(&self) -> Metadata {
        Metadata::named("Sitepack dev server options")
    }
    fn data(&self) -> Result<figment::value::Map<figment::Profile, figment::value::Dict>, Error> {
        figment::providers::Serialized::defaults(Self::default()).data()
    }
}
