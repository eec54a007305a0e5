//! Dependency manifest: the runtime libraries and plugins the application needs.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File extension of every toolchain library in the manifest.
pub const LIBRARY_EXTENSION: &str = "dll";

/// Category of a toolchain dependency.
///
/// The category decides both where the library lives inside the toolchain
/// and which subfolder of the staged distribution it is copied into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum DependencyCategory {
    /// General runtime libraries from the toolchain `bin` directory.
    Runtime,
    /// Qt image-format plugins.
    ImageFormat,
    /// Qt widget style plugins.
    Style,
    /// Qt platform-integration plugins.
    Platform,
}

impl DependencyCategory {
    /// All categories, in collection order.
    pub const ALL: [DependencyCategory; 4] = [
        DependencyCategory::Runtime,
        DependencyCategory::ImageFormat,
        DependencyCategory::Style,
        DependencyCategory::Platform,
    ];

    /// Path components below the toolchain root holding this category.
    pub fn toolchain_subpath(self) -> &'static [&'static str] {
        match self {
            DependencyCategory::Runtime => &["bin"],
            DependencyCategory::ImageFormat => &["share", "qt5", "plugins", "imageformats"],
            DependencyCategory::Style => &["share", "qt5", "plugins", "styles"],
            DependencyCategory::Platform => &["share", "qt5", "plugins", "platforms"],
        }
    }

    /// Subfolder of the distribution directory, `None` for the flat root.
    pub fn dist_subfolder(self) -> Option<&'static str> {
        match self {
            DependencyCategory::Runtime => None,
            DependencyCategory::ImageFormat => Some("imageformats"),
            DependencyCategory::Style => Some("styles"),
            DependencyCategory::Platform => Some("platforms"),
        }
    }

    /// Directory inside `toolchain` holding libraries of this category.
    pub fn source_dir(self, toolchain: &Path) -> PathBuf {
        self.toolchain_subpath()
            .iter()
            .fold(toolchain.to_path_buf(), |dir, part| dir.join(part))
    }

    /// Directory inside `dist_dir` receiving libraries of this category.
    pub fn dest_dir(self, dist_dir: &Path) -> PathBuf {
        match self.dist_subfolder() {
            Some(sub) => dist_dir.join(sub),
            None => dist_dir.to_path_buf(),
        }
    }
}

/// One file to copy into the distribution directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManifestEntry {
    /// Where the file is read from.
    pub source: PathBuf,
    /// Directory the file is copied into.
    pub dest_dir: PathBuf,
}

/// Fixed list of files the packaged application needs at runtime.
///
/// Library names carry no extension; [`LIBRARY_EXTENSION`] is appended when
/// resolving them against the toolchain. Every field can be overridden from
/// the `[manifest]` table of the config file; omitted fields keep the
/// defaults.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DependencyManifest {
    /// Libraries from `<toolchain>/bin`.
    pub runtime: Vec<String>,
    /// Image-format plugins.
    pub image_formats: Vec<String>,
    /// Style plugins.
    pub styles: Vec<String>,
    /// Platform plugins.
    pub platforms: Vec<String>,
    /// Application executable, relative to the build directory.
    pub executable: PathBuf,
    /// Other files copied verbatim into the distribution root.
    pub extra_files: Vec<PathBuf>,
}

impl Default for DependencyManifest {
    fn default() -> Self {
        let names = |list: &[&str]| -> Vec<String> { list.iter().map(|s| s.to_string()).collect() };
        Self {
            runtime: names(&[
                "zlib1",
                "Qt5Widgets",
                "Qt5Svg",
                "Qt5PrintSupport",
                "Qt5Gui",
                "Qt5Core",
                "libwinpthread-1",
                "libturbojpeg",
                "libtiffxx-5",
                "libtiff-5",
                "libstdc++-6",
                "libpng16-16",
                "libpcre16-0",
                "libpcre2-16-0",
                "liblzma-5",
                "libjpeg-8",
                "libintl-8",
                "libicuuc67",
                "libicuin67",
                "libicudt67",
                "libiconv-2",
                "libharfbuzz-0",
                "libgomp-1",
                "libgobject-2.0-0",
                "libglib-2.0-0",
                "libgcc_s_seh-1",
                "libfreetype-6",
                "libfftw3-3",
                "libffi-7",
                "libbz2-1",
                "libgraphite2",
                "libpcre-1",
                "libdouble-conversion",
                "libzstd",
                "libbrotlidec",
                "libbrotlicommon",
            ]),
            image_formats: names(&["qtiff"]),
            styles: names(&["qwindowsvistastyle"]),
            platforms: names(&["qminimal", "qwindows"]),
            executable: PathBuf::from("strainpp.exe"),
            extra_files: Vec::new(),
        }
    }
}

impl DependencyManifest {
    /// Library names of one category.
    pub fn names(&self, category: DependencyCategory) -> &[String] {
        match category {
            DependencyCategory::Runtime => &self.runtime,
            DependencyCategory::ImageFormat => &self.image_formats,
            DependencyCategory::Style => &self.styles,
            DependencyCategory::Platform => &self.platforms,
        }
    }

    /// Resolves every manifest item to a source path and destination directory.
    ///
    /// Toolchain libraries come first, category by category, followed by the
    /// extra files and the executable, which all land in the flat root.
    pub fn entries(&self, toolchain: &Path, build_dir: &Path, dist_dir: &Path) -> Vec<ManifestEntry> {
        let mut entries = Vec::new();

        for category in DependencyCategory::ALL {
            let source_dir = category.source_dir(toolchain);
            let dest_dir = category.dest_dir(dist_dir);
            for name in self.names(category) {
                entries.push(ManifestEntry {
                    source: source_dir.join(format!("{name}.{LIBRARY_EXTENSION}")),
                    dest_dir: dest_dir.clone(),
                });
            }
        }

        for extra in &self.extra_files {
            entries.push(ManifestEntry {
                source: extra.clone(),
                dest_dir: dist_dir.to_path_buf(),
            });
        }

        entries.push(ManifestEntry {
            source: build_dir.join(&self.executable),
            dest_dir: dist_dir.to_path_buf(),
        });

        entries
    }

    /// Number of files the manifest resolves to.
    pub fn file_count(&self) -> usize {
        DependencyCategory::ALL
            .iter()
            .map(|c| self.names(*c).len())
            .sum::<usize>()
            + self.extra_files.len()
            + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_manifest_matches_qt5_mingw_layout() {
        let manifest = DependencyManifest::default();
        assert_eq!(manifest.runtime.len(), 36);
        assert_eq!(manifest.platforms, vec!["qminimal", "qwindows"]);
        assert_eq!(manifest.file_count(), 36 + 1 + 1 + 2 + 1);
    }

    #[test]
    fn plugin_entries_land_in_category_folders() {
        let manifest = DependencyManifest {
            runtime: vec!["zlib1".into()],
            image_formats: vec!["qtiff".into()],
            styles: vec![],
            platforms: vec!["qwindows".into()],
            executable: PathBuf::from("strainpp.exe"),
            extra_files: vec![PathBuf::from("/libs/qcustomplot2.dll")],
        };
        let toolchain = Path::new("/mingw64");
        let dist = Path::new("/stage/dist_files");

        let entries = manifest.entries(toolchain, Path::new("/build"), dist);

        assert_eq!(entries.len(), manifest.file_count());
        assert_eq!(
            entries[0],
            ManifestEntry {
                source: toolchain.join("bin").join("zlib1.dll"),
                dest_dir: dist.to_path_buf(),
            }
        );
        assert_eq!(
            entries[1].source,
            toolchain
                .join("share")
                .join("qt5")
                .join("plugins")
                .join("imageformats")
                .join("qtiff.dll")
        );
        assert_eq!(entries[1].dest_dir, dist.join("imageformats"));
        assert_eq!(entries[2].dest_dir, dist.join("platforms"));
        assert_eq!(entries[3].source, PathBuf::from("/libs/qcustomplot2.dll"));
        assert_eq!(entries[4].source, Path::new("/build").join("strainpp.exe"));
        assert_eq!(entries[4].dest_dir, dist.to_path_buf());
    }

    #[test]
    fn partial_toml_keeps_default_lists() {
        let manifest: DependencyManifest = toml::from_str(r#"styles = ["qfusionstyle"]"#).unwrap();
        assert_eq!(manifest.styles, vec!["qfusionstyle"]);
        assert_eq!(manifest.runtime, DependencyManifest::default().runtime);
    }

    #[test]
    fn misspelled_list_is_rejected() {
        let err = toml::from_str::<DependencyManifest>(r#"extra_file = ["qcustomplot2.dll"]"#)
            .unwrap_err();
        assert!(err.to_string().contains("extra_file"));
    }
}
