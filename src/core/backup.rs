use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::{queries, settings};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_writable, write_file};
use crate::export::{BackupSnapshot, EntryExport, SettingsExport, notify_export_success};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Settings and every entry, ready to be serialized.
    pub fn snapshot(pool: &mut DbPool) -> AppResult<BackupSnapshot> {
        let s = settings::load_or_create(&pool.conn)?;
        let entries = queries::load_all(&pool.conn)?;

        Ok(BackupSnapshot {
            settings: vec![SettingsExport::from(&s)],
            entries: entries.iter().map(EntryExport::from).collect(),
        })
    }

    pub fn to_json(pool: &mut DbPool) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&Self::snapshot(pool)?)?)
    }

    /// Write the JSON backup to `dest_file`; with `compress` the JSON is
    /// zipped and the plain copy removed. Returns the final path.
    pub fn backup(pool: &mut DbPool, dest_file: &str, compress: bool, force: bool) -> AppResult<PathBuf> {
        let dest = expand_tilde(dest_file);

        // both targets are checked before anything touches the disk
        let zip_path = if compress {
            let zip_path = dest.with_extension("zip");
            if zip_path == dest {
                return Err(AppError::Export(
                    "backup file already has a .zip extension; use a .json name with --compress"
                        .into(),
                ));
            }
            ensure_writable(&zip_path, force)?;
            Some(zip_path)
        } else {
            None
        };
        ensure_writable(&dest, force)?;

        let json = Self::to_json(pool)?;
        write_file(&dest, json.as_bytes())?;

        let final_path = match zip_path {
            Some(zip_path) => {
                compress_backup(&dest, &zip_path)?;
                fs::remove_file(&dest)?;
                zip_path
            }
            None => dest,
        };

        ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        notify_export_success("Backup", &final_path);
        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path, zip_path: &Path) -> AppResult<()> {
    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Export(format!("invalid backup path {}", path.display())))?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
