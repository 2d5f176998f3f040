use std::{fs, io, path::Path};

use crate::config::ConfigStructure;

pub fn copy_dir(from: impl AsRef<Path>, to: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(&to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let ty = entry.file_type()?;
        if ty.is_dir() {
            copy_dir(entry.path(), to.as_ref().join(entry.file_name()))?;
        } else {
            fs::copy(entry.path(), to.as_ref().join(entry.file_name()))?;
        }
    }
    Ok(())
}

/// copy the passthrough asset directories into the output
///
/// assets are optional, a source tree with no images is fine, so a missing
/// directory is skipped rather than failing the build
pub fn copy_assets(structure: &ConfigStructure) -> io::Result<()> {
    let out = Path::new(&structure.output);
    for (dir, dest) in [
        (&structure.scripts, "js"),
        (&structure.styles, "styles"),
        (&structure.images, "images"),
    ] {
        if Path::new(dir).is_dir() {
            copy_dir(dir, out.join(dest))?;
        } else {
            log::info!("No `{dir}` directory, skipping");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_nested_directories() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        fs::create_dir(src.path().join("icons")).unwrap();
        fs::write(src.path().join("main.css"), "body {}").unwrap();
        fs::write(src.path().join("icons/logo.svg"), "<svg/>").unwrap();

        copy_dir(src.path(), dst.path().join("styles")).unwrap();
        assert_eq!(
            fs::read_to_string(dst.path().join("styles/main.css")).unwrap(),
            "body {}"
        );
        assert_eq!(
            fs::read_to_string(dst.path().join("styles/icons/logo.svg")).unwrap(),
            "<svg/>"
        );
    }

    #[test]
    fn missing_asset_dirs_are_skipped() {
        let out = tempfile::tempdir().unwrap();
        let structure = ConfigStructure {
            scripts: "does/not/exist/js".into(),
            styles: "does/not/exist/styles".into(),
            images: "does/not/exist/images".into(),
            output: out.path().to_string_lossy().into_owned(),
            ..Default::default()
        };
        copy_assets(&structure).unwrap();
        assert!(!out.path().join("js").exists());
    }
}
