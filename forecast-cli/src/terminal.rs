use forecast_core::{RenderedResults, ResultRow, UiPort, render::NO_DATA};

const HEADERS: [&str; 7] =
    ["Город", "Температура", "Ощущается как", "Описание", "Влажность", "Давление", "Ветер"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Html,
}

/// [`UiPort`] backed by stdout (results) and stderr (status, errors).
#[derive(Debug)]
pub struct TerminalUi {
    input: String,
    format: OutputFormat,
}

impl TerminalUi {
    pub fn new(input: String, format: OutputFormat) -> Self {
        Self { input, format }
    }
}

impl UiPort for TerminalUi {
    fn input(&self) -> String {
        self.input.clone()
    }

    fn set_loading(&self, loading: bool) {
        if loading {
            eprintln!("Загрузка...");
        }
    }

    fn show_error(&self, text: &str) {
        eprintln!("{text}");
    }

    fn show_results(&self, results: &RenderedResults) {
        match self.format {
            OutputFormat::Table => {
                println!("{}", results.stats);
                println!();
                print!("{}", format_table(&results.rows));
            }
            OutputFormat::Html => println!("{}", results.to_html()),
        }
    }
}

fn cells(row: &ResultRow) -> Vec<&str> {
    match row {
        ResultRow::Weather(w) => vec![
            w.city.as_str(),
            w.temperature.as_str(),
            w.feels_like.as_str(),
            w.description.as_str(),
            w.humidity.as_str(),
            w.pressure.as_str(),
            w.wind_speed.as_str(),
        ],
        ResultRow::Failed { detail, .. } => vec![row.city(), detail.as_str()],
        ResultRow::Missing { .. } => vec![row.city(), NO_DATA],
    }
}

/// Plain-text table; failed and missing rows put their message in the second column
/// and let it run past the column width.
fn format_table(rows: &[ResultRow]) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows.iter().filter(|r| matches!(r, ResultRow::Weather(_))) {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule.iter().map(String::as_str).collect::<Vec<_>>(), &widths);

    for row in rows {
        push_line(&mut out, &cells(row), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let last = cells.len().saturating_sub(1);
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            if i == last {
                cell.to_string()
            } else {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            }
        })
        .collect();
    out.push_str(&line.join("  "));
    out.push('\n');
}
