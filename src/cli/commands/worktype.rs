use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, WorktypeAction};
use crate::config::Config;
use crate::core::worktype::WorktypeLogic;
use crate::errors::AppResult;
use crate::models::worktype::NewWorktype;
use crate::ui::messages::{detail, info, success};
use crate::utils::table::{Column, Table};
use crate::utils::{delta2readable, price2readable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worktype { action } = cmd {
        match action {
            WorktypeAction::Add {
                name,
                rounding,
                rounding_unit,
                minimum,
                min_unit,
                price,
            } => {
                let input = NewWorktype {
                    name: name.clone(),
                    rounding: rounding.clone(),
                    rounding_unit: *rounding_unit,
                    minimum: minimum.clone(),
                    min_unit: *min_unit,
                    price: price.clone(),
                };

                let mut pool = open_pool(cfg)?;
                let id = WorktypeLogic::create(&mut pool, &input)?;

                success("Worktype created successfully.");
                detail("Id", id);
                detail("Name", input.name.trim());
            }
            WorktypeAction::List => {
                let mut pool = open_pool(cfg)?;
                let worktypes = WorktypeLogic::list(&mut pool)?;

                if worktypes.is_empty() {
                    info("No worktypes defined yet.");
                    return Ok(());
                }

                let name_w = worktypes
                    .iter()
                    .map(|w| w.name.chars().count())
                    .max()
                    .unwrap_or(4)
                    .max(4);

                let mut table = Table::new(vec![
                    Column::new("ID", 4),
                    Column::new("NAME", name_w),
                    Column::new("ROUNDING", 9),
                    Column::new("MINIMUM", 9),
                    Column::new("PRICE", 10),
                ]);

                for w in &worktypes {
                    table.add_row(vec![
                        w.id.to_string(),
                        w.name.clone(),
                        if w.has_rounding() {
                            delta2readable(w.rounding, false, true)
                        } else {
                            "none".to_string()
                        },
                        delta2readable(w.minimum, false, true),
                        price2readable(w.price_cents),
                    ]);
                }

                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }

    Ok(())
}
