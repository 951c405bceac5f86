use crate::cli::commands::open_pool;
use crate::cli::parser::{Commands, ProjectAction};
use crate::config::Config;
use crate::core::project::ProjectLogic;
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success};
use crate::utils::colors::colorize_state;
use crate::utils::delta2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Project { action } = cmd {
        let mut pool = open_pool(cfg)?;

        match action {
            ProjectAction::Add { name, worktype } => {
                let id = ProjectLogic::create(&mut pool, cfg.user_id, name, worktype)?;
                success(format!("Project #{} created.", id));
                detail("Name", name.trim());
                detail("Worktype", worktype.trim());
            }
            ProjectAction::List => {
                let projects = ProjectLogic::list(&mut pool, cfg.user_id)?;

                if projects.is_empty() {
                    info(format!("No projects for user {}.", cfg.user_id));
                    return Ok(());
                }

                let name_w = projects
                    .iter()
                    .map(|p| p.project.name.chars().count())
                    .max()
                    .unwrap_or(4)
                    .max(4);
                let wt_w = projects
                    .iter()
                    .map(|p| p.worktype.chars().count())
                    .max()
                    .unwrap_or(8)
                    .max(8);

                let mut table = Table::new(vec![
                    Column::new("ID", 4),
                    Column::new("NAME", name_w),
                    Column::new("WORKTYPE", wt_w),
                    Column::new("STATE", 8),
                    Column::new("WORKED", 9),
                ]);

                for p in &projects {
                    let worked = delta2readable(p.worked, false, true);
                    table.add_row(vec![
                        p.project.id.to_string(),
                        p.project.name.clone(),
                        p.worktype.clone(),
                        colorize_state(p.project.state),
                        if p.running {
                            format!("{}+", worked)
                        } else {
                            worked
                        },
                    ]);
                }

                print!("{}", table.render(&cfg.separator_char));
            }
        }
    }

    Ok(())
}
