use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use stubgen_codegen::{
    CancelToken, Generator, MemorySink, OutputSink, marker_attribute_source,
};
use stubgen_semantic::SymbolTable;
use stubgen_syntax::SourceSet;

use super::{UnwrapOrExit, print_diagnostics};
use crate::sink::DirectorySink;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the source set JSON file
    #[arg(short, long, default_value = "sources.json")]
    pub sources: PathBuf,

    /// Path to the symbol table JSON file
    #[arg(short = 'y', long, default_value = "symbols.json")]
    pub symbols: PathBuf,

    /// Output directory for generated units
    #[arg(short, long, default_value = "generated")]
    pub output: PathBuf,

    /// Preview generated units without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Skip emitting the marker attribute declaration
    #[arg(long)]
    pub no_attribute: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let sources = SourceSet::open(&self.sources).unwrap_or_exit();
        let symbols = SymbolTable::open(&self.symbols).unwrap_or_exit();
        let generator = Generator::new();

        if self.dry_run {
            return self.run_preview(&generator, &sources, &symbols);
        }

        let mut sink = DirectorySink::new(&self.output);
        if !self.no_attribute {
            let (name, text) = marker_attribute_source(generator.options());
            sink.add_source(&name, &text)?;
        }

        let report = generator.run(&sources.units, &symbols, &mut sink, CancelToken::new())?;

        println!(
            "Scanned {} candidate methods, matched {}",
            report.scanned, report.matched
        );
        println!();
        println!("Generated ({}):", report.generated.len());
        for name in &report.generated {
            println!("  + {}", self.output.join(name).display());
        }
        print_diagnostics(&report.diagnostics);

        Ok(())
    }

    fn run_preview(
        &self,
        generator: &Generator,
        sources: &SourceSet,
        symbols: &SymbolTable,
    ) -> Result<()> {
        let mut sink = MemorySink::new();
        let report = generator.run(&sources.units, symbols, &mut sink, CancelToken::new())?;

        for (name, text) in sink.sources() {
            println!("── {} ──", name);
            println!("{}", text);
        }

        println!("── Summary ──");
        println!("{} units would be generated", report.generated.len());
        print_diagnostics(&report.diagnostics);

        Ok(())
    }
}
