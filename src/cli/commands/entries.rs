use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, colorize_state};
use crate::utils::delta2readable;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_ts;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Entries { id } = cmd {
        let mut pool = open_pool(cfg)?;

        let Some((project, entries)) = ProjectLogic::entries(&mut pool, *id, cfg.user_id)? else {
            info(format!("Project #{} not found.", id));
            return Ok(());
        };

        println!(
            "{} [{}]",
            bold(&format!("#{} {}", project.id, project.name)),
            colorize_state(project.state)
        );

        if entries.is_empty() {
            info("No entries yet.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 4),
            Column::new("START (UTC)", 23),
            Column::new("END (UTC)", 23),
            Column::new("DURATION", 9),
            Column::new("COMMENT", 7),
        ]);

        for e in &entries {
            let start = e.start.as_ref().map(format_ts);
            let end = e.end.as_ref().map(format_ts);
            let duration = e.duration().map(|d| delta2readable(d, false, true));

            table.add_row(vec![
                e.id.to_string(),
                colorize_optional(start.as_deref()),
                colorize_optional(end.as_deref()),
                colorize_optional(duration.as_deref()),
                e.comment.clone().unwrap_or_default(),
            ]);
        }

        print!("{}", table.render(&cfg.separator_char));
    }

    Ok(())
}
