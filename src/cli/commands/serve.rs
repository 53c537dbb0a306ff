use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::http;

/// Run the HTTP API on a tokio runtime until ctrl-c.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }

        http::init_tracing();

        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(http::serve(cfg))?;
    }

    Ok(())
}
