use crate::cli::parser::Commands;
use crate::cli::session::{Session, resolve_month};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let mut session = Session::open(cfg)?;
        let first = resolve_month(month, &session.tz())?;
        session.show_month(first)?;

        ExportLogic::export(session.cache.records(), *format, file, *force)?;
    }
    Ok(())
}
