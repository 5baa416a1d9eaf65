use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let viewer = session::require(Path::new(&cfg.session_file))?;
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(&mut pool, &viewer, *format, file, range, *force)?;
    }
    Ok(())
}
