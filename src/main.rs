use std::io;

use anyhow::Result;
use tracing::info;

use tabiya_core::STARTING_FEN;
use tabiya_session::Session;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!(start = STARTING_FEN, "tabiya starting");

    let mut session = Session::new(io::stdout().lock());
    session.run(io::stdin().lock())?;
    Ok(())
}
