//! Command execution.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use stockroom_infra::JsonFileSnapshotStore;
use stockroom_inventory::{InventoryStore, LoadOutcome, StockLogEntry, ZeroStockPolicy};

use crate::args::{Cli, Command};

/// An inventory store bound to its data file.
#[derive(Debug)]
pub struct Session {
    pub store: InventoryStore,
    file: JsonFileSnapshotStore,
}

impl Session {
    /// Bind an empty store to the data file without reading it.
    pub fn new(path: &Path, policy: ZeroStockPolicy) -> Self {
        Self {
            store: InventoryStore::with_policy(policy),
            file: JsonFileSnapshotStore::new(path),
        }
    }

    /// Load the data file into a fresh store.
    ///
    /// A missing or corrupt file yields an empty store.
    pub fn open(path: &Path, policy: ZeroStockPolicy) -> Result<Self> {
        let mut session = Self::new(path, policy);
        session
            .store
            .load(&session.file)
            .with_context(|| format!("failed to load inventory from {}", path.display()))?;
        Ok(session)
    }

    pub fn reload(&mut self) -> Result<LoadOutcome> {
        self.store
            .load(&self.file)
            .with_context(|| format!("failed to reload inventory from {}", self.file.path().display()))
    }

    pub fn save(&self) -> Result<()> {
        self.store
            .save(&self.file)
            .with_context(|| format!("failed to save inventory to {}", self.file.path().display()))
    }
}

/// Execute the parsed command line, writing user-facing output to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let command = cli.command.clone().unwrap_or(Command::Demo);
    // The demo never looks at existing contents, so skip reading the file.
    let mut session = if command == Command::Demo {
        Session::new(&cli.data_file, cli.zero_policy)
    } else {
        Session::open(&cli.data_file, cli.zero_policy)?
    };

    match command {
        Command::Demo => run_demo(&mut session, out)?,
        Command::Add { item, qty } => {
            let entry = session.store.add_item(&item, qty.as_str())?;
            session.save()?;
            writeln!(out, "{entry}")?;
        }
        Command::Remove { item, qty } => {
            session.store.remove_item(&item, qty.as_str())?;
            session.save()?;
        }
        Command::Qty { item } => {
            let qty = session.store.get_qty(&item)?;
            writeln!(out, "{qty}")?;
        }
        Command::Report => writeln!(out, "{}", session.store.report())?,
        Command::Low { threshold } => {
            for item in session.store.list_low(threshold) {
                writeln!(out, "{item}")?;
            }
        }
    }
    Ok(())
}

/// Walk through every store operation once and persist the result.
///
/// Expects a session that has not loaded the data file; whatever the file
/// held is overwritten.
fn run_demo<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let mut logs: Vec<StockLogEntry> = Vec::new();
    logs.push(session.store.add_item("apple", 10)?);
    logs.push(session.store.add_item("banana", -2)?);

    session.store.remove_item("apple", 3)?;
    session.store.remove_item("orange", 1)?;

    writeln!(out, "Apple stock: {}", session.store.get_qty("apple")?)?;
    writeln!(out, "Low items: {}", session.store.list_low_default().join(", "))?;

    session.save()?;
    session.reload()?;
    writeln!(out, "{}", session.store.report())?;

    for entry in &logs {
        tracing::info!(%entry, "stock log");
    }
    Ok(())
}
