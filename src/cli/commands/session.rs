use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit_or_warn;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_member;
use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::viewer::Viewer;
use crate::session;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let path = Path::new(&cfg.session_file);

    match cmd {
        Commands::Login {
            id,
            name,
            role,
            group,
        } => {
            let role = Role::from_code(role).ok_or_else(|| AppError::InvalidRole(role.clone()))?;

            let viewer = Viewer::new(id, name, role, group)?;

            let mut pool = DbPool::new(&cfg.database)?;
            upsert_member(&mut pool, &viewer.id, &viewer.group_id, &viewer.name, viewer.role)?;
            session::save(path, &viewer)?;

            audit_or_warn(
                &pool.conn,
                "login",
                &viewer.id,
                &format!("{} joined {} as {}", viewer.name, viewer.group_id, viewer.role),
            );

            success(format!(
                "Logged in as {} ({}) in group {}",
                viewer.name, viewer.role, viewer.group_id
            ));
        }

        Commands::Logout => {
            let current = session::load(path)?;
            if session::clear(path)? {
                if let Some(v) = current
                    && let Ok(pool) = DbPool::new(&cfg.database)
                {
                    audit_or_warn(&pool.conn, "logout", &v.id, &format!("{} logged out", v.name));
                }
                success("Logged out.");
            } else {
                info("No active session.");
            }
        }

        Commands::Whoami => {
            let v = session::require(path)?;
            println!("👤 {} (id: {})", v.name, v.id);
            println!("   role : {}", v.role);
            println!("   group: {}", v.group_id);
        }

        _ => {}
    }

    Ok(())
}
