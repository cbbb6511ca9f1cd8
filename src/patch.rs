use std::path::Path;

use anyhow::Result;

use crate::manifest::Manifest;

/// A caller-supplied (package name, version) pair forcing a specific version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Override {
    /// The package whose version gets forced.
    pub name: String,
    /// The version to force.
    pub version: String,
}

/// Pairs up raw command-line arguments into [`Override`]s.
///
/// Arguments are taken two at a time, name first, version second. A trailing
/// argument with no version after it is not turned into an override; it is
/// handed back separately so the caller can report it.
pub fn pair_overrides(args: &[String]) -> (Vec<Override>, Option<String>) {
    let chunks = args.chunks_exact(2);
    let dangling = chunks.remainder().first().cloned();
    let overrides = chunks
        .map(|pair| Override {
            name: pair[0].clone(),
            version: pair[1].clone(),
        })
        .collect();
    (overrides, dangling)
}

/// Applies `overrides` to the manifest at `path` and rewrites the file.
///
/// Each override prints one progress line on stdout, overwrites the version
/// of a package already listed under `dependencies`/`devDependencies`, and
/// records itself under `resolutions`. The file is rewritten even when
/// `overrides` is empty, normalizing its formatting.
///
/// # Errors
/// Returns an error if the manifest can't be read, parsed, or written back.
pub fn patch<P: AsRef<Path>>(path: P, overrides: &[Override]) -> Result<()> {
    let path = path.as_ref();
    let mut manifest = Manifest::load(path)?;
    for Override { name, version } in overrides {
        println!("forcing {} to version {} in {}", name, version, path.display());
        manifest.force_version(name, version);
    }
    manifest.save(path)
}
