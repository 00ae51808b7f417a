extern crate lolcode;

use clap::Parser as CParser;
use log::trace;
use lolcode::{Host, StdHost};

/// Run one or more LOLCODE source files.
#[derive(CParser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Source files to tokenize, parse and run, in order.
    files: Vec<std::path::PathBuf>,

    /// Print the token stream for each file before parsing.
    #[arg(long)]
    dump_tokens: bool,

    /// Print each scope's name as it's entered while running.
    #[arg(long)]
    dump_scopes: bool,
}

struct DumpingHost {
    inner: StdHost,
    dump_tokens: bool,
    dump_scopes: bool,
}

impl Host for DumpingHost {
    fn write(&mut self, text: &str) {
        self.inner.write(text)
    }

    fn read_line(&mut self) -> std::io::Result<String> {
        self.inner.read_line()
    }

    fn on_tokens(&mut self, tokens: &[lolcode::Token]) {
        if self.dump_tokens {
            for tok in tokens {
                eprintln!("{}:{} {:?} {:?}", tok.line, tok.col, tok.kind, tok.lexeme);
            }
        }
    }

    fn on_symbols(&mut self, ctx: &lolcode::symtab::Context) {
        if self.dump_scopes {
            eprintln!("-- symbols in scope {} --", ctx.name);
        }
    }
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();
    let args = Cli::parse();

    let mut host = DumpingHost {
        inner: StdHost::new(),
        dump_tokens: args.dump_tokens,
        dump_scopes: args.dump_scopes,
    };

    let mut exit_code = 0;
    for path in &args.files {
        trace!("running {}", path.display());
        let source = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("could not read '{}': {e}", path.display());
                exit_code = 1;
                continue;
            }
        };

        if let Err(err) = lolcode::execute(&source, &mut host) {
            eprint!("{}", err.render());
            exit_code = 1;
        }
    }

    std::process::exit(exit_code);
}
