use crate::error::ModpackError;
use crate::utils::fs as ufs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::FileOptions;

/// What ended up in a freshly written archive.
#[derive(Debug, Clone)]
pub struct ArchiveSummary {
    pub entries: Vec<String>,
}

/// Packs every regular file under `source_dir` into a DEFLATE zip at `output`.
///
/// Entry names are the files' paths relative to `source_dir`, with `/`
/// separators. The archive is written to a temporary file beside `output`
/// and only renamed into place once complete, so a failed build never
/// leaves a truncated archive behind. `on_entry` is called once per added
/// entry.
///
/// ### Parameters
/// - `source_dir`: The directory to pack
/// - `output`: The path of the zip file to (over)write
/// - `on_entry`: Progress callback receiving each entry name
///
pub fn build_archive<F>(
    source_dir: &Path,
    output: &Path,
    mut on_entry: F,
) -> Result<ArchiveSummary, ModpackError>
where
    F: FnMut(&str),
{
    if !source_dir.is_dir() {
        return Err(ModpackError::not_found("Source directory", source_dir));
    }
    let source_root = fs::canonicalize(source_dir).map_err(|e| {
        ModpackError::io(format!("Failed to resolve {}", source_dir.display()), e)
    })?;

    let out_dir = ufs::ensure_parent_dir(output)?;
    let output_abs = fs::canonicalize(&out_dir)
        .map_err(|e| ModpackError::io(format!("Failed to resolve {}", out_dir.display()), e))?
        .join(output.file_name().unwrap_or_default());

    // Collected before the temporary file exists so it can never be packed.
    let files: Vec<PathBuf> = ufs::walk_files(&source_root)?
        .into_iter()
        .filter(|p| *p != output_abs)
        .collect();

    let tmp = ufs::sibling_temp_file(output)?;
    let mut zip = zip::ZipWriter::new(tmp);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries: Vec<String> = Vec::with_capacity(files.len());
    for p in files {
        let rel_path = ufs::path_relative_to(&p, &source_root).ok_or_else(|| {
            ModpackError::Format(format!(
                "{} is outside {}",
                p.display(),
                source_root.display()
            ))
        })?;
        let rel = ufs::to_unix_string(&rel_path)?;

        let mut src = fs::File::open(&p)
            .map_err(|e| ModpackError::io(format!("Failed to open {}", p.display()), e))?;
        let size = src
            .metadata()
            .map_err(|e| ModpackError::io(format!("Failed to stat {}", p.display()), e))?
            .len();

        zip.start_file(rel.clone(), options.large_file(size >= u32::MAX as u64))
            .map_err(|e| ModpackError::zip(format!("Failed to add {}", rel), e))?;
        io::copy(&mut src, &mut zip)
            .map_err(|e| ModpackError::io(format!("Failed to write {}", rel), e))?;

        on_entry(&rel);
        entries.push(rel);
    }

    let tmp = zip
        .finish()
        .map_err(|e| ModpackError::zip("Failed to finalize zip", e))?;
    ufs::persist_temp_file(tmp, output)?;

    Ok(ArchiveSummary { entries })
}
