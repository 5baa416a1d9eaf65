use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_members;
use crate::errors::AppResult;
use crate::session;
use crate::utils::table::{Column, Table};
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Members) {
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let mut pool = DbPool::new(&cfg.database)?;
        let members = load_members(&mut pool, &viewer.group_id)?;

        println!("👥 Members of {}:", viewer.group_id);

        let mut table = Table::new(vec![
            Column::new("ID", 12),
            Column::new("NAME", 20),
            Column::new("ROLE", 6),
            Column::new("JOINED", 10),
        ]);
        for m in members {
            table.add_row(vec![
                m.id,
                m.name,
                m.role.to_string(),
                m.joined_at.chars().take(10).collect(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
