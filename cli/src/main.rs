mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, archive, check, convert, copy, list, nulls, version};
use terminal::{logging, print};
use utilkit_common::config::Config;

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init(&cfg);
    print::banner(&cfg);

    match run(commands.command, &cfg) {
        Ok(code) => code,
        Err(err) => {
            print::report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, cfg: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Copy { src, dst, .. } => {
            print::header("copying", cfg.quiet);
            copy::copy(&src, &dst, cfg)
        }
        Commands::Nulls { action } => {
            print::header("null bytes", cfg.quiet);
            nulls::nulls(action, cfg)
        }
        Commands::Check { kind, value } => {
            print::header("validation", cfg.quiet);
            Ok(check::check(kind, &value, cfg))
        }
        Commands::Convert { workbook, tsv } => {
            print::header("converting workbook", cfg.quiet);
            convert::convert(&workbook, tsv, cfg)
        }
        Commands::Dos2unix { path } => {
            print::header("line endings", cfg.quiet);
            convert::dos2unix(&path)
        }
        Commands::Delimiter { path, pattern, new } => {
            print::header("delimiters", cfg.quiet);
            convert::delimiter(&path, &pattern, &new)
        }
        Commands::Zip { src, archive } => {
            print::header("packing", cfg.quiet);
            archive::zip(&src, &archive, cfg)
        }
        Commands::Unzip { archive, dst } => {
            print::header("unpacking", cfg.quiet);
            archive::unzip(&archive, &dst, cfg)
        }
        Commands::List { dir, content_type, ext } => {
            print::header("listing files", cfg.quiet);
            list::list(&dir, &content_type, &ext, cfg)
        }
        Commands::Version => {
            print::header("about the tool", cfg.quiet);
            Ok(version::version())
        }
    }
}
