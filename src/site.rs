use crate::{
    config::Config,
    error::Result,
    mode::BuildMode,
    pages::{self, PageDescriptor},
    render, utils,
};

/// the state of one bundle invocation: the configuration, the mode flag,
/// and the descriptors discovered from the pages directory

pub struct Site {
    config: Config,
    mode: BuildMode,
    pages: Vec<PageDescriptor>,
}

impl Site {
    /// discover the pages up front, a missing pages directory aborts here
    /// before anything is written
    pub fn new(config: Config, mode: BuildMode) -> Result<Self> {
        let pages = pages::discover(&config.structure.pages, &config.pages)?;
        Ok(Site {
            config,
            mode,
            pages,
        })
    }

    pub fn pages(&self) -> &[PageDescriptor] {
        &self.pages
    }

    /// render every page then copy the asset directories through
    pub fn build(&self) -> Result<()> {
        log::info!(
            "Building {} pages into `{}` ({:?})",
            self.pages.len(),
            self.config.structure.output,
            self.mode
        );
        render::render_all(&self.config, self.mode, &self.pages)?;
        utils::copy_assets(&self.config.structure)?;
        Ok(())
    }
}
