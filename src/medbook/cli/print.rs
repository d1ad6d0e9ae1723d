use colored::Colorize;
use medbook::model::{Doctor, Patient};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Columns wider than this get truncated with an ellipsis.
const CELL_WIDTH: usize = 32;
const COLUMN_GAP: &str = "  ";

pub(super) fn success(message: &str) {
    println!("{}", message.green());
}

pub(super) fn info(message: &str) {
    println!("{}", message.dimmed());
}

pub(super) fn print_doctors(doctors: &[Doctor]) {
    if doctors.is_empty() {
        println!("No doctors found.");
        return;
    }

    let rows: Vec<[String; 4]> = doctors
        .iter()
        .map(|d| {
            [
                d.id.to_string(),
                d.name.clone(),
                d.age.to_string(),
                d.specialization.to_string(),
            ]
        })
        .collect();
    print_table(["Doctor ID", "Name", "Age", "Specialization"], &rows);
}

pub(super) fn print_patients(patients: &[Patient]) {
    if patients.is_empty() {
        println!("No patients found.");
        return;
    }

    let rows: Vec<[String; 4]> = patients
        .iter()
        .map(|p| {
            [
                p.patient_id.to_string(),
                p.name.clone(),
                p.age.to_string(),
                p.medical_history.clone(),
            ]
        })
        .collect();
    print_table(["Patient ID", "Name", "Age", "Medical History"], &rows);
}

/// Rows arrive with the doctor and patient columns already resolved to
/// `Name (D1)` form, or `Unknown` for a dangling reference.
pub(super) fn print_appointments(rows: &[[String; 4]]) {
    if rows.is_empty() {
        println!("No appointments found.");
        return;
    }

    print_table(["Appointment ID", "Doctor", "Patient", "Date"], rows);
}

fn print_table(headers: [&str; 4], rows: &[[String; 4]]) {
    let rows: Vec<[String; 4]> = rows
        .iter()
        .map(|row| row.clone().map(|cell| truncate_to_width(&cell, CELL_WIDTH)))
        .collect();

    let mut widths = headers.map(UnicodeWidthStr::width);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_to_width(header, *width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    println!("{}", header_line.trim_end().bold());

    for row in &rows {
        let line = row
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| pad_to_width(cell, *width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        println!("{}", line.trim_end());
    }
}

// Pads by display width, not char count, so wide glyphs stay aligned.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
