//! Plain aligned text tables.

const MIN_COLUMN: usize = 4;
const GAP: &str = "  ";

/// Width from `COLUMNS`, ignored when implausibly narrow.
pub fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|width| *width >= 40)
}

/// Render rows under `headers`, shrinking the widest columns until the
/// table fits `max_width`.
pub fn render(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    if let Some(limit) = max_width {
        shrink(&mut widths, limit);
    }

    let line = |cells: &mut dyn Iterator<Item = &str>| -> String {
        cells
            .zip(&widths)
            .map(|(value, width)| pad(&clip(value, *width), *width))
            .collect::<Vec<_>>()
            .join(GAP)
            .trim_end()
            .to_string()
    };

    let mut out = Vec::with_capacity(rows.len() + 2);
    out.push(line(&mut headers.iter().copied()));
    let total = widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);
    out.push("-".repeat(total));
    for row in rows {
        let mut cells = (0..widths.len()).map(|i| row.get(i).map_or("-", String::as_str));
        out.push(line(&mut cells));
    }
    out.join("\n")
}

fn shrink(widths: &mut [usize], limit: usize) {
    let gaps = GAP.len() * widths.len().saturating_sub(1);
    while widths.iter().sum::<usize>() + gaps > limit {
        let Some((index, width)) = widths
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, w)| *w > MIN_COLUMN)
            .max_by_key(|(_, w)| *w)
        else {
            break;
        };
        widths[index] = width - 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{value}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align() {
        let rows = vec![
            vec!["c-1".to_string(), "basic".to_string()],
            vec!["c-200".to_string(), "enterprise".to_string()],
        ];
        let out = render(&["client", "tier"], &rows, None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "client  tier");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "c-1     basic");
        assert_eq!(lines[3], "c-200   enterprise");
    }

    #[test]
    fn wide_columns_are_clipped() {
        let rows = vec![vec!["x".repeat(80), "ok".to_string()]];
        let out = render(&["value", "status"], &rows, Some(40));
        assert!(out.lines().all(|line| line.chars().count() <= 40));
        assert!(out.contains('…'));
    }
}
