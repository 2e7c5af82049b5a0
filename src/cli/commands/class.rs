use crate::cli::parser::{ClassAction, Commands};
use crate::config::Config;
use crate::core::class::ClassLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Class { action } = cmd {
        let mut pool = DbPool::open_ready(&cfg.database)?;

        match action {
            ClassAction::Add { name } => {
                let class = ClassLogic::add(&mut pool, name)?;
                success(format!("Class #{} '{}' added.", class.id, class.name));
            }
            ClassAction::List => {
                let classes = ClassLogic::list(&mut pool)?;
                if classes.is_empty() {
                    info("No classes defined.");
                    return Ok(());
                }

                let mut table = Table::new(vec![Column::right("ID"), Column::left("Name")]);
                for c in classes {
                    table.add_row(vec![c.id.to_string(), c.name]);
                }
                print!("{}", table.render());
            }
            ClassAction::Del { id } => {
                let class = ClassLogic::delete(&mut pool, *id)?;
                success(format!("Class #{} '{}' deleted.", class.id, class.name));
            }
        }
    }

    Ok(())
}
