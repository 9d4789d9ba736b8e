use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stubgen_codegen::{CancelToken, Generator, MemorySink};
use stubgen_semantic::SymbolTable;
use stubgen_syntax::SourceSet;

use super::{UnwrapOrExit, print_diagnostics};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the source set JSON file
    #[arg(short, long, default_value = "sources.json")]
    pub sources: PathBuf,

    /// Path to the symbol table JSON file
    #[arg(short = 'y', long, default_value = "symbols.json")]
    pub symbols: PathBuf,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let sources = SourceSet::open(&self.sources).unwrap_or_exit();
        let symbols = SymbolTable::open(&self.symbols).unwrap_or_exit();

        let generator = Generator::new();
        let mut sink = MemorySink::new();
        let report = generator.run(&sources.units, &symbols, &mut sink, CancelToken::new())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "{} source units, {} candidates, {} matched",
            sources.units.len(),
            report.scanned,
            report.matched
        );
        println!();
        println!("Would generate ({}):", report.generated.len());
        for name in &report.generated {
            println!("  {}", name);
        }
        print_diagnostics(&report.diagnostics);

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
