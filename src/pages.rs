use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::ConfigPages;
use crate::error::{Error, Result};

/// page discovery and the template -> output mapping
///
/// every entry of the pages directory becomes one descriptor, in listing
/// order, with no filtering. a stray subdirectory still gets a descriptor
/// and fails later in the render stage.

/// one template source file slated for rendering into one output document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    pub template_path: PathBuf,
    pub output_name: String,
}

/// list the entry names of the pages directory, in listing order
///
/// a missing directory is reported as `MissingDir` so the build can abort
/// with something better than a bare io error
pub fn list_entries<T: AsRef<Path>>(dir: T) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let entries = match dir.read_dir() {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(Error::MissingDir(dir.into()))
        }
        Err(err) => return Err(err.into()),
    };
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// derive the output name for a page entry
///
/// the default rule replaces the first occurrence of the source token
/// anywhere in the name, which mangles names carrying the token mid-string
/// (`report.njk.bak` -> `report.html.bak`). that matches the upstream
/// behavior this replaces. `strict_extensions` opts into only swapping a
/// real trailing extension.
pub fn output_name(name: &str, rules: &ConfigPages) -> String {
    if rules.strict_extensions {
        let suffix = format!(".{}", rules.source_ext);
        match name.strip_suffix(&suffix) {
            Some(stem) => format!("{}.{}", stem, rules.target_ext),
            None => name.to_string(),
        }
    } else {
        name.replacen(&rules.source_ext, &rules.target_ext, 1)
    }
}

/// pair every entry name with its template path and output name, preserving
/// the input order
pub fn map_pages<T: AsRef<Path>>(
    dir: T,
    names: &[String],
    rules: &ConfigPages,
) -> Vec<PageDescriptor> {
    names
        .iter()
        .map(|name| PageDescriptor {
            template_path: dir.as_ref().join(name),
            output_name: output_name(name, rules),
        })
        .collect()
}

/// one shot discovery over the real filesystem
pub fn discover<T: AsRef<Path>>(dir: T, rules: &ConfigPages) -> Result<Vec<PageDescriptor>> {
    let names = list_entries(&dir)?;
    Ok(map_pages(dir, &names, rules))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_descriptor_per_entry_in_order() {
        let rules = ConfigPages::default();
        let entries = names(&["home.njk", "about.njk"]);
        let pages = map_pages("src/pages", &entries, &rules);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].output_name, "home.html");
        assert_eq!(pages[1].output_name, "about.html");
        assert_eq!(pages[0].template_path, PathBuf::from("src/pages/home.njk"));
        assert_eq!(pages[1].template_path, PathBuf::from("src/pages/about.njk"));
    }

    #[test]
    fn token_replaced_exactly_once() {
        let rules = ConfigPages::default();
        // both the extension dots survive, only the token changes
        assert_eq!(output_name("page.njk", &rules), "page.html");
        assert_eq!(output_name("page.njk.njk", &rules), "page.html.njk");
    }

    #[test]
    fn naive_rule_mangles_mid_name_token() {
        let rules = ConfigPages::default();
        // the literal-substitution rule, surprising output included
        assert_eq!(output_name("report.njk.bak", &rules), "report.html.bak");
        assert_eq!(output_name("banjko.njk", &rules), "bahtmlo.njk");
    }

    #[test]
    fn strict_rule_only_swaps_trailing_extension() {
        let rules = ConfigPages {
            strict_extensions: true,
            ..Default::default()
        };
        assert_eq!(output_name("page.njk", &rules), "page.html");
        assert_eq!(output_name("report.njk.bak", &rules), "report.njk.bak");
        assert_eq!(output_name("banjko.njk", &rules), "banjko.html");
        assert_eq!(output_name("notes.txt", &rules), "notes.txt");
    }

    #[test]
    fn names_without_token_pass_through() {
        let rules = ConfigPages::default();
        assert_eq!(output_name("styles.css", &rules), "styles.css");
        assert_eq!(output_name("a.htm", &rules), "a.htm");
    }

    #[test]
    fn near_miss_names_do_not_collide() {
        let rules = ConfigPages::default();
        let pages = map_pages("pages", &names(&["a.njk", "a.htm"]), &rules);
        assert_eq!(pages[0].output_name, "a.html");
        assert_eq!(pages[1].output_name, "a.htm");
        assert_ne!(pages[0].output_name, pages[1].output_name);
    }

    #[test]
    fn genuine_collision_maps_both_entries() {
        let rules = ConfigPages::default();
        // no uniqueness check: both descriptors are produced, the writer
        // overwrites last-wins
        let pages = map_pages("pages", &names(&["index.njk", "index.html"]), &rules);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].output_name, "index.html");
        assert_eq!(pages[1].output_name, "index.html");
    }

    #[test]
    fn empty_directory_is_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let entries = list_entries(dir.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn missing_directory_is_identifiable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_pages");
        match list_entries(&missing) {
            Err(Error::MissingDir(path)) => assert_eq!(path, missing),
            other => panic!("expected MissingDir, got {other:?}"),
        }
    }

    #[test]
    fn subdirectories_are_listed_like_pages() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.njk"), "<h1>home</h1>").unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();
        let pages = discover(dir.path(), &ConfigPages::default()).unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().any(|p| p.output_name == "partials"));
    }

    #[test]
    fn discover_walks_the_real_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("home.njk"), "<h1>home</h1>").unwrap();
        fs::write(dir.path().join("about.njk"), "<h1>about</h1>").unwrap();
        let mut pages = discover(dir.path(), &ConfigPages::default()).unwrap();
        // listing order is platform defined, sort for the assertion
        pages.sort_by(|a, b| a.output_name.cmp(&b.output_name));
        assert_eq!(pages[0].output_name, "about.html");
        assert_eq!(pages[1].output_name, "home.html");
        assert_eq!(pages[1].template_path, dir.path().join("home.njk"));
    }
}
