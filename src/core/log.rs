use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start" | "worktype_add" => Colour::Green,
        "project_add" => Colour::Cyan,
        "pause" => Colour::Yellow,
        "stop" | "finish" => Colour::Red,
        "rounding" | "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Cut to `OP_MAX_WIDTH` visible characters and colour only the operation word.
fn render_op_target(operation: &str, target: &str) -> String {
    let visible = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let truncated = if visible.chars().count() > OP_MAX_WIDTH {
        let mut s = visible.chars().take(OP_MAX_WIDTH - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(operation);
    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool, cfg: &Config) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: Option<String> = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target.unwrap_or_default(), message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<String> = entries
            .iter()
            .map(|(_, _, op, target, _)| render_op_target(op, target))
            .collect();

        let op_w = rendered
            .iter()
            .map(|s| strip_ansi(s).chars().count())
            .max()
            .unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, _, _, _)| date.len())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:");
        println!("{}", cfg.separator_char.repeat(id_w + date_w + op_w + 10));

        for ((id, date, _, _, message), op_target) in entries.iter().zip(rendered) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_targets_are_truncated_on_visible_text() {
        let target = "x".repeat(80);
        let out = render_op_target("project_add", &target);
        let visible = strip_ansi(&out);
        assert_eq!(visible.chars().count(), OP_MAX_WIDTH);
        assert!(visible.starts_with("project_add ("));
        assert!(visible.ends_with("..."));
    }

    #[test]
    fn bare_operation_is_kept_whole() {
        assert_eq!(strip_ansi(&render_op_target("init", "")), "init");
    }
}
