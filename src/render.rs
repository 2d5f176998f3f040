use std::{fs, path::Path};

use minijinja::{context, Environment};

use crate::{config::Config, error::Result, mode::BuildMode, pages::PageDescriptor};

/// the delegated render stage
///
/// every file in the pages directory is loaded as a template keyed by its
/// file name, then each descriptor is rendered into the output directory

pub fn get_env<'a, T: AsRef<Path>>(pages_dir: T) -> Result<Environment<'a>> {
    let mut env = Environment::new();
    for entry in pages_dir.as_ref().read_dir()? {
        let entry = entry?;
        if entry.path().is_file() {
            let name = entry.file_name().to_string_lossy().into_owned();
            env.add_template_owned(name, fs::read_to_string(entry.path())?)?;
        } else {
            log::warn!(
                "Skipping `{:?}` while loading page templates",
                entry.path()
            );
        }
    }
    Ok(env)
}

pub fn render_all(config: &Config, mode: BuildMode, pages: &[PageDescriptor]) -> Result<()> {
    let env = get_env(&config.structure.pages)?;
    render_with(&env, config, mode, pages)
}

/// render each descriptor in order
///
/// a descriptor pointing at anything that did not load as a template (a
/// stray subdirectory for one) fails here, not in discovery. descriptors
/// sharing an output name overwrite each other, last one wins.
pub fn render_with(
    env: &Environment,
    config: &Config,
    mode: BuildMode,
    pages: &[PageDescriptor],
) -> Result<()> {
    let out_dir = Path::new(&config.structure.output);
    for page in pages {
        let name = page
            .template_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let template = env.get_template(&name)?;
        let contents = template.render(context! {
            mode => mode,
            public_path => mode.public_path(),
            minify => mode.minify(),
            hot_reload => mode.hot_reload(),
            styles => &config.styles,
            images => &config.images,
        })?;
        let path = out_dir.join(&page.output_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::info!("Rendering `{}` -> `{:?}`", name, path);
        fs::write(path, contents)?;
    }
    Ok(())
}
