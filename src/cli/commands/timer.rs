use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::{TimerLogic, Transition};
use crate::errors::AppResult;
use crate::ui::messages::{detail, info, success};
use crate::utils::delta2readable;
use crate::utils::time::now_utc;

/// Refused transitions are not errors: report them and exit normally.
fn report_refusal(id: i64, transition: Transition, what: &str) {
    match transition {
        Transition::NotFound => info(format!("Project #{} not found.", id)),
        Transition::Rejected => info(format!("Project #{} {}.", id, what)),
        Transition::Applied => {}
    }
}

/// Handle `start`, `pause` and `stop`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let now = now_utc();

    match cmd {
        Commands::Start { id } => {
            let mut pool = open_pool(cfg)?;
            let t = TimerLogic::start(&mut pool, *id, cfg.user_id, &now)?;
            if t.applied() {
                success(format!("Project #{} started.", id));
            } else {
                report_refusal(*id, t, "is already running or finished");
            }
        }
        Commands::Pause { id } => {
            let mut pool = open_pool(cfg)?;
            let t = TimerLogic::pause(&mut pool, *id, cfg.user_id, &now)?;
            if t.applied() {
                success(format!("Project #{} paused.", id));
            } else {
                report_refusal(*id, t, "is not running");
            }
        }
        Commands::Stop { id } => {
            let mut pool = open_pool(cfg)?;
            let outcome = TimerLogic::finish(&mut pool, *id, cfg.user_id, &now)?;

            let Some(rec) = outcome.reconciliation else {
                report_refusal(*id, outcome.transition, "is already stopped");
                return Ok(());
            };

            success(format!("Project #{} finished.", id));
            detail("Worked", delta2readable(rec.worked, false, true));
            match rec.billed {
                Some(billed) => {
                    detail("Billed", delta2readable(billed, false, true));
                    detail("Rounding entry", delta2readable(rec.delta, true, true));
                }
                None => detail("Billed", "as worked (no rounding)"),
            }
        }
        _ => {}
    }

    Ok(())
}
