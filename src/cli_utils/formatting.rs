use colored::Colorize;

/// Format a table with columns and rows
pub fn format_table(headers: Vec<&str>, rows: Vec<Vec<String>>) {
    let col_widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let mut width = header.len();
            for row in &rows {
                if i < row.len() {
                    width = width.max(row[i].len());
                }
            }
            width
        })
        .collect();

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:width$}", h, width = col_widths[i]))
        .collect::<Vec<_>>()
        .join(" | ");

    println!("{}", header_line.bold());
    println!("{}", "-".repeat(header_line.len()));

    for row in rows {
        let row_line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:width$}", cell, width = col_widths.get(i).copied().unwrap_or(20)))
            .collect::<Vec<_>>()
            .join(" | ");
        println!("{}", row_line);
    }
}

/// Format a single record as key-value pairs
pub fn format_record(data: Vec<(&str, String)>) {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(20);

    for (key, value) in data {
        let padded_key = format!("{:width$}", key, width = max_key_len);
        println!("  {}: {}", padded_key.bright_cyan(), value);
    }
}

pub fn print_header(text: &str) {
    println!();
    println!("{}", text.bold().bright_cyan());
    println!("{}", "=".repeat(text.len()));
    println!();
}

/// Money with 2 decimal places
pub fn format_money(value: &bigdecimal::BigDecimal) -> String {
    value
        .with_scale_round(2, bigdecimal::RoundingMode::HalfUp)
        .to_string()
}

pub fn format_budget(value: Option<&bigdecimal::BigDecimal>) -> String {
    value.map(format_money).unwrap_or_else(|| "none".to_string())
}

/// Budget usage, red once the budget is exceeded
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(pct) if pct > 100.0 => format!("{:.1}%", pct).red().to_string(),
        Some(pct) => format!("{:.1}%", pct),
        None => "n/a".dimmed().to_string(),
    }
}

pub fn format_bool(value: bool) -> String {
    if value {
        "Yes".green().to_string()
    } else {
        "No".dimmed().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&BigDecimal::from(80)), "80.00");
        assert_eq!(format_money(&BigDecimal::from_str("19.999").unwrap()), "20.00");
    }

    #[test]
    fn test_format_budget_and_percentage() {
        colored::control::set_override(false);
        assert_eq!(format_budget(None), "none");
        assert_eq!(format_budget(Some(&BigDecimal::from(200))), "200.00");
        assert_eq!(format_percentage(Some(75.0)), "75.0%");
        assert_eq!(format_percentage(None), "n/a");
    }
}
