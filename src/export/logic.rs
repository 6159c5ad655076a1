use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftExport;
use crate::export::xlsx::export_xlsx;
use crate::store::ShiftStore;
use crate::ui::messages::{info, warning};
use crate::utils::date::parse_period;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export shifts to `file`.
    ///
    /// - `range`: `None` or `"all"` for every date, otherwise any period
    ///   accepted by [`parse_period`].
    ///
    /// Returns the number of exported shifts.
    pub fn export<R: ShiftStore>(
        repo: &R,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        let (from, to) = match range {
            None => (NaiveDate::MIN, NaiveDate::MAX),
            Some(r) if r.eq_ignore_ascii_case("all") => (NaiveDate::MIN, NaiveDate::MAX),
            Some(r) => parse_period(r)?,
        };

        let rows = load_rows(repo, from, to)?;

        if rows.is_empty() {
            warning("No shifts found for the selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;
        info(format!(
            "Exporting {} shift(s) to {} ({})",
            rows.len(),
            path.display(),
            format.as_str()
        ));

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(rows.len())
    }
}

fn load_rows<R: ShiftStore>(repo: &R, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<ShiftExport>> {
    Ok(repo
        .list_shifts_in_range(from, to)?
        .iter()
        .flat_map(|(date, shifts)| shifts.iter().map(|s| ShiftExport::from_shift(*date, s)))
        .collect())
}
