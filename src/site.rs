//! Static site generation on top of the markdown converter.
//!
//! A site build copies the static directory into the output directory and
//! then renders every markdown file under the content directory to an HTML
//! page at the mirrored path, using a single page template.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::Config;
use crate::error::SiteError;

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Counts reported by [`build_site`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_copied: usize,
    pub pages_generated: usize,
}

/// Text of the first `# ` heading line, trimmed.
pub fn extract_title(markdown: &str) -> Option<&str> {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(str::trim)
}

/// Render one page: fill the template and apply the base path.
///
/// `source` only names the document in errors.
pub fn render_page(
    source: &Path,
    markdown: &str,
    template: &str,
    base_path: &str,
) -> Result<String, SiteError> {
    let title = extract_title(markdown).ok_or_else(|| SiteError::MissingTitle {
        path: source.to_path_buf(),
    })?;
    let content = crate::markdown_to_html(markdown).map_err(|source_err| SiteError::Convert {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &content);
    Ok(apply_base_path(&page, base_path))
}

/// Point root-relative `href` and `src` attributes at `base_path`.
pub fn apply_base_path(html: &str, base_path: &str) -> String {
    if base_path == "/" {
        return html.to_string();
    }
    html.replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Render `from` with the template at `template_path` and write it to `dest`.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from).map_err(|e| SiteError::io(from, e))?;
    let template = fs::read_to_string(template_path).map_err(|e| SiteError::io(template_path, e))?;
    let page = render_page(from, &markdown, &template, base_path)?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
    }
    fs::write(dest, page).map_err(|e| SiteError::io(dest, e))
}

/// Generate an `.html` page for every `.md` file under `content_dir`.
///
/// Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize, SiteError> {
    let mut generated = 0;

    for entry in sorted_entries(content_dir)? {
        let dest = dest_dir.join(entry.name());

        match entry.kind {
            EntryKind::Dir => {
                generated +=
                    generate_pages_recursive(&entry.path, template_path, &dest, base_path)?;
            }
            EntryKind::File if entry.path.extension().is_some_and(|ext| ext == "md") => {
                let page = dest.with_extension("html");
                generate_page(&entry.path, template_path, &page, base_path)?;
                generated += 1;
            }
            EntryKind::File => {}
            EntryKind::DirLink => {
                warn!("Skipping symlinked directory: {}", entry.path.display());
            }
        }
    }

    Ok(generated)
}

/// Replace `dest` with a copy of `src`.
///
/// Returns the number of files copied. A missing `src` leaves an empty `dest`.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if dest.exists() && !dest.is_dir() {
        return Err(SiteError::NotADirectory {
            path: dest.to_path_buf(),
        });
    }
    if dest.exists() {
        info!("Cleaning destination directory: {}", dest.display());
        fs::remove_dir_all(dest).map_err(|e| SiteError::io(dest, e))?;
    }
    fs::create_dir_all(dest).map_err(|e| SiteError::io(dest, e))?;

    if !src.is_dir() {
        warn!("Source directory does not exist: {}", src.display());
        return Ok(0);
    }
    copy_dir_contents(src, dest)
}

fn copy_dir_contents(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;

    for entry in sorted_entries(src)? {
        let target = dest.join(entry.name());

        match entry.kind {
            EntryKind::Dir => {
                info!("Creating directory: {}", target.display());
                fs::create_dir(&target).map_err(|e| SiteError::io(&target, e))?;
                copied += copy_dir_contents(&entry.path, &target)?;
            }
            EntryKind::File => {
                info!("Copying file: {} -> {}", entry.path.display(), target.display());
                fs::copy(&entry.path, &target).map_err(|e| SiteError::io(&entry.path, e))?;
                copied += 1;
            }
            EntryKind::DirLink => {
                warn!("Skipping symlinked directory: {}", entry.path.display());
            }
        }
    }

    Ok(copied)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    /// Symlink resolving to a directory. Never descended into, so link
    /// cycles cannot recurse forever.
    DirLink,
}

struct Entry {
    path: PathBuf,
    kind: EntryKind,
}

impl Entry {
    fn name(&self) -> &OsStr {
        self.path.file_name().unwrap_or_default()
    }
}

/// Directory entries sorted by path so builds are deterministic.
fn sorted_entries(dir: &Path) -> Result<Vec<Entry>, SiteError> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| SiteError::io(dir, e))? {
        let entry = entry.map_err(|e| SiteError::io(dir, e))?;
        let path = entry.path();
        // `DirEntry::file_type` does not follow symlinks.
        let file_type = entry.file_type().map_err(|e| SiteError::io(&path, e))?;
        let kind = if file_type.is_dir() {
            EntryKind::Dir
        } else if file_type.is_symlink() && path.is_dir() {
            EntryKind::DirLink
        } else {
            EntryKind::File
        };
        entries.push(Entry { path, kind });
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(entries)
}

/// Copy static assets, then generate all content pages.
pub fn build_site(config: &Config) -> Result<BuildSummary, SiteError> {
    let files_copied = copy_static(&config.static_dir, &config.output_dir)?;
    let pages_generated = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )?;

    info!(files_copied, pages_generated, "Site build complete");
    Ok(BuildSummary {
        files_copied,
        pages_generated,
    })
}
