use crate::schedule::{DAY_NAMES, DAYS_PER_WEEK, Schedule};

/// Render the schedule as a fixed-width console table.
///
/// Each week contributes a date row (`Week NN` label plus the five calendar
/// dates) and a symbol row, separated from the next week by a divider.
pub fn render_text_table(schedule: &Schedule) -> String {
    let mut header: Vec<String> = Vec::with_capacity(DAYS_PER_WEEK + 1);
    header.push("Week / Pickup".to_string());
    header.extend(DAY_NAMES.iter().map(|name| name.to_string()));

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(schedule.week_count() * 2);
    for week in schedule.weeks() {
        let mut date_row = Vec::with_capacity(DAYS_PER_WEEK + 1);
        date_row.push(week.label());
        date_row.extend(week.dates().iter().map(|d| d.format("%d %b").to_string()));
        rows.push(date_row);

        let mut status_row = Vec::with_capacity(DAYS_PER_WEEK + 1);
        status_row.push("Pickup".to_string());
        status_row.extend(week.days.iter().map(|day| day.status.symbol().to_string()));
        rows.push(status_row);
    }

    // Status symbols are multi-byte; pad by character count.
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[ci] {
                widths[ci] = len;
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    push_row(&mut out, &header, &widths);
    out.push_str(&sep);
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        // Divider between week blocks (two rows each).
        if i > 0 && i % 2 == 0 {
            out.push_str(&sep);
            out.push('\n');
        }
        push_row(&mut out, row, &widths);
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (ci, cell) in cells.iter().enumerate() {
        out.push(' ');
        out.push_str(cell);
        let pad = widths[ci].saturating_sub(cell.chars().count());
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
}
