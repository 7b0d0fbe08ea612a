use terminal_size::{terminal_size, Height, Width};

use crate::model::{Session, Teacher};

/// Render rows as an ASCII table fitted to `termw` columns.
pub fn render_table(headers: &[&str], rows: &[Vec<String>], termw: usize) -> Vec<String> {
    let mut widths: Vec<usize> = headers.iter().map(|h| visible_len(h).min(termw)).collect();
    for r in rows {
        for (i, cell) in r.iter().enumerate().take(headers.len()) {
            let w = visible_len(cell);
            if w > widths[i] { widths[i] = w.min(termw); }
        }
    }
    let sep = rule_line(&widths);
    let mut out = Vec::with_capacity(rows.len() + 5);
    out.push(fit_line_to_width(&sep, termw));
    out.push(fit_line_to_width(&table_line(headers, &widths, Cell::Header), termw));
    out.push(fit_line_to_width(&sep, termw));
    for r in rows {
        out.push(fit_line_to_width(&table_line(r, &widths, Cell::Body), termw));
    }
    out.push(fit_line_to_width(&sep, termw));
    out.push(format!("rows: {}", rows.len()));
    out
}

pub fn sessions_table(sessions: &[Session], termw: usize) -> Vec<String> {
    let rows: Vec<Vec<String>> = sessions
        .iter()
        .map(|s| {
            vec![
                s.id.map(|id| id.to_string()).unwrap_or_default(),
                s.name.clone(),
                s.long_date(),
                s.teacher_id.to_string(),
                s.users.len().to_string(),
            ]
        })
        .collect();
    render_table(&["id", "name", "date", "teacher", "attendees"], &rows, termw)
}

pub fn teachers_table(teachers: &[Teacher], termw: usize) -> Vec<String> {
    let rows: Vec<Vec<String>> = teachers.iter().map(|t| vec![t.id.to_string(), t.display_name()]).collect();
    render_table(&["id", "name"], &rows, termw)
}

pub fn get_terminal_width() -> usize {
    match terminal_size() {
        Some((Width(w), Height(_))) if w > 20 => (w - 4) as usize,
        _ => 80,
    }
}

fn rule_line(widths: &[usize]) -> String {
    widths.iter().fold(String::from("+"), |line, w| line + &"-".repeat(w + 2) + "+")
}

#[derive(Clone, Copy)]
enum Cell {
    Header,
    Body,
}

/// One `| a | b |` line; headers are green, digit-only body cells sit on the right.
fn table_line<S: AsRef<str>>(cells: &[S], widths: &[usize], kind: Cell) -> String {
    let parts: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let raw = cells.get(i).map(|c| c.as_ref()).unwrap_or_default();
            let text = clip(raw, w);
            let pad = " ".repeat(w.saturating_sub(visible_len(&text)));
            match kind {
                Cell::Header => format!("\x1b[32m{}\x1b[0m{}", text, pad),
                Cell::Body if is_numeric_like(raw) => format!("{}{}", pad, text),
                Cell::Body => format!("{}{}", text, pad),
            }
        })
        .collect();
    format!("| {} |", parts.join(" | "))
}

/// Cut to `max` chars, marking the cut with an ellipsis.
fn clip(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some(_) if max <= 1 => "…".to_string(),
        Some(_) => s.chars().take(max - 1).chain(std::iter::once('…')).collect(),
    }
}

fn is_numeric_like(s: &str) -> bool {
    let st = s.trim();
    !st.is_empty() && st.chars().all(|c| c.is_ascii_digit())
}

fn fit_line_to_width(s: &str, maxw: usize) -> String {
    if visible_len(s) <= maxw { return s.to_string(); }
    let mut out = String::new();
    let mut seen = 0usize;
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            out.push(ch);
            // copy the whole CSI sequence
            for c in chars.by_ref() {
                out.push(c);
                if c.is_ascii_alphabetic() { break; }
            }
            continue;
        }
        if seen + 1 >= maxw { break; }
        out.push(ch);
        seen += 1;
    }
    out.push('…');
    out.push_str("\x1b[0m");
    out
}

/// Visible chars, skipping ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut count = 0;
    let mut in_escape = false;
    for ch in s.chars() {
        if in_escape {
            if ch.is_ascii_alphabetic() { in_escape = false; }
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            continue;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(s: &str) -> String {
        s.replace("\x1b[32m", "").replace("\x1b[0m", "")
    }

    #[test]
    fn pads_cells_and_right_aligns_numbers() {
        let rows = vec![vec!["1".to_string(), "Margot DELAHAYE".to_string()], vec!["12".to_string(), "Hélène".to_string()]];
        let lines = render_table(&["id", "name"], &rows, 80);
        assert_eq!(lines[0], "+----+-----------------+");
        assert_eq!(strip(&lines[1]), "| id | name            |");
        assert_eq!(lines[3], "|  1 | Margot DELAHAYE |");
        assert_eq!(lines[4], "| 12 | Hélène          |");
        assert_eq!(lines.last().unwrap(), "rows: 2");
    }

    #[test]
    fn long_lines_are_cut_to_terminal() {
        let rows = vec![vec!["x".repeat(100)]];
        let lines = render_table(&["description"], &rows, 30);
        for l in &lines[..lines.len() - 1] {
            assert!(visible_len(l) <= 30, "{}", l);
        }
    }

    #[test]
    fn clip_marks_cut_cells() {
        assert_eq!(clip("Morning Flow", 20), "Morning Flow");
        assert_eq!(clip("Morning Flow", 7), "Mornin…");
        assert_eq!(clip("Flow", 1), "…");
        let lines = render_table(&["name"], &[vec!["Evening Yin Yoga".to_string()]], 80);
        assert_eq!(lines[3], "| Evening Yin Yoga |");
    }

    #[test]
    fn visible_len_ignores_color() {
        assert_eq!(visible_len("\x1b[32mname\x1b[0m"), 4);
    }
}
