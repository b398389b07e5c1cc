use std::io::{self, Write};

use anyhow::{Context, Result, bail};

/// Print `label` and read one trimmed line from stdin
pub fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("flush stdout")?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).context("read stdin")?;
    if read == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim().to_string())
}

pub fn pause() -> Result<()> {
    prompt("\nPress Enter to continue...").map(|_| ())
}

pub fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

/// Boxed text table, columns sized to their widest cell
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let body: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}\n", body.join(mid))
    };
    let line = |cells: Vec<&str>| {
        let body: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, w)| {
                let cell = cells.get(i).copied().unwrap_or("");
                let pad = w - cell.chars().count();
                format!(" {cell}{} ", " ".repeat(pad))
            })
            .collect();
        format!("│{}│\n", body.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}
