use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{ShiftExport, notify_export_success};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

enum Cell {
    Text(String),
    Number(f64, &'static str),
}

fn row_cells(r: &ShiftExport) -> Vec<Cell> {
    vec![
        Cell::Text(r.date.clone()),
        Cell::Text(r.id.to_string()),
        Cell::Text(r.start_time.clone()),
        Cell::Text(r.end_time.clone()),
        Cell::Number(r.hours_worked, "0.00"),
        Cell::Number(r.income, "#,##0.00"),
    ]
}

/// Export XLSX with a styled header, banded rows and a totals line.
pub(crate) fn export_xlsx(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Shifts").map_err(to_app_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x8080FF))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAEAFF);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in row_cells(r).into_iter().enumerate() {
            let width = write_cell(worksheet, row, col as u16, cell, band)?;
            col_widths[col] = col_widths[col].max(width);
        }
    }

    // totals
    let total_row = (rows.len() + 1) as u32;
    let bold = Format::new().set_bold().set_border(FormatBorder::Thin);
    worksheet
        .write_with_format(total_row, 0, "Total", &bold)
        .map_err(to_app_error)?;
    let hours: f64 = rows.iter().map(|r| r.hours_worked).sum();
    let income: f64 = rows.iter().map(|r| r.income).sum();
    worksheet
        .write_with_format(total_row, 4, hours, &bold.clone().set_num_format("0.00"))
        .map_err(to_app_error)?;
    worksheet
        .write_with_format(total_row, 5, income, &bold.set_num_format("#,##0.00"))
        .map_err(to_app_error)?;

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", rows.len(), path);
    Ok(())
}

/// Write one cell and return its display width.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: Cell, bg: Color) -> AppResult<usize> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Text(s) => {
            worksheet
                .write_with_format(row, col, s.as_str(), &base)
                .map_err(to_app_error)?;
            Ok(UnicodeWidthStr::width(s.as_str()))
        }
        Cell::Number(n, num_format) => {
            let fmt = base.set_align(FormatAlign::Right).set_num_format(num_format);
            worksheet
                .write_with_format(row, col, n, &fmt)
                .map_err(to_app_error)?;
            Ok(format!("{:.2}", n).len())
        }
    }
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
