//! Static site build: copies static files and turns every markdown page under
//! the content directory into an HTML page using a template.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::{extract_title, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to generate page from {path}: {source}")]
    Page { path: PathBuf, source: crate::Error },
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Fill `template` with the page's title and body, then point root-relative
/// `href` and `src` attributes at `base_path`.
pub fn assemble_page(markdown: &str, template: &str, base_path: &str) -> crate::Result<String> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;

    let page = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));
    Ok(page)
}

/// Generate a single page from `from` into `dest`, creating parent directories.
pub fn generate_page(
    from: &Path,
    template_path: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;
    write_page(from, &template, dest, base_path)
}

fn write_page(from: &Path, template: &str, dest: &Path, base_path: &str) -> Result<(), SiteError> {
    log::debug!("Generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let page = assemble_page(&markdown, template, base_path).map_err(|source| {
        SiteError::Page {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, page).map_err(io_error(dest))
}

/// Generate a page for every `.md` file below `content_dir`, mirroring the
/// directory layout under `dest_dir`. Stops at the first page that fails.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<Vec<PathBuf>, SiteError> {
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let mut sources = Vec::new();
    scan_markdown_files(content_dir, &mut sources)?;
    sources.sort();

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let relative = source.strip_prefix(content_dir).unwrap_or(&source);
        let dest = dest_dir.join(relative).with_extension("html");
        write_page(&source, &template, &dest, base_path)?;
        written.push(dest);
    }

    Ok(written)
}

fn scan_markdown_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), SiteError> {
    let entries = fs::read_dir(dir).map_err(io_error(dir))?;

    for entry in entries {
        let entry = entry.map_err(io_error(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_markdown_files(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Replace `dest` with a byte-for-byte copy of `src`.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<(), SiteError> {
    if dest.exists() {
        log::debug!("Removing {}", dest.display());
        fs::remove_dir_all(dest).map_err(io_error(dest))?;
    }
    fs::create_dir_all(dest).map_err(io_error(dest))?;

    if !src.exists() {
        log::warn!("{} does not exist, nothing to copy", src.display());
        return Ok(());
    }
    copy_recursive(src, dest)
}

fn copy_recursive(src: &Path, dest: &Path) -> Result<(), SiteError> {
    for entry in fs::read_dir(src).map_err(io_error(src))? {
        let entry = entry.map_err(io_error(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir_all(&to).map_err(io_error(&to))?;
            copy_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(io_error(&from))?;
        }
    }
    Ok(())
}

/// Rebuild the whole site described by `config`. Returns the pages written.
pub fn build_site(config: &Config) -> Result<Vec<PathBuf>, SiteError> {
    log::info!(
        "Copying {} to {}",
        config.static_dir.display(),
        config.output_dir.display()
    );
    copy_dir(&config.static_dir, &config.output_dir)?;

    log::info!("Generating pages from {}", config.content_dir.display());
    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )?;
    log::info!("Generated {} pages", pages.len());

    Ok(pages)
}
