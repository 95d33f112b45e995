use std::{
    io::{BufRead, Write},
    path::Path,
    process::exit,
};

use slox::{
    ast_printer::ast_to_string, config::Config, parse_tokens, ErrorReporter, LoxError, Reporter,
    Scanner,
};

fn main() {
    env_logger::init();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            println!("{err}");
            exit(err.exit_code());
        }
    };
    log::info!("starting with {config:?}");

    let mut lox = Lox::new(config.print_tokens);
    let result = match &config.script {
        Some(path) => lox.run_file(path),
        None => lox.run_prompt(),
    };
    if let Err(err) = result {
        if let LoxError::Io { .. } = err {
            eprintln!("{err}");
        }
        exit(err.exit_code());
    }
}

struct Lox {
    print_tokens: bool,
    reporter: ErrorReporter<std::io::Stderr>,
}

impl Lox {
    fn new(print_tokens: bool) -> Self {
        Self {
            print_tokens,
            reporter: ErrorReporter::stderr(),
        }
    }

    fn run_file(&mut self, path: &Path) -> Result<(), LoxError> {
        let source = std::fs::read_to_string(path).map_err(|source| LoxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(&source)?;

        if self.reporter.had_error() {
            return Err(LoxError::Source {
                errors: self.reporter.error_count(),
            });
        }
        Ok(())
    }

    fn run_prompt(&mut self) -> Result<(), LoxError> {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        loop {
            print!("> ");
            if let Err(err) = std::io::stdout().flush() {
                log::warn!("could not flush prompt: {err}");
            }

            let mut line = String::new();
            let read = reader.read_line(&mut line).map_err(|source| LoxError::Io {
                path: "<stdin>".into(),
                source,
            })?;
            if read == 0 {
                break;
            }
            self.run(line.trim_end_matches(['\n', '\r']))?;
            self.reporter.reset();
        }
        Ok(())
    }

    fn run(&mut self, source: &str) -> Result<(), LoxError> {
        let tokens = Scanner::new(source, &mut self.reporter).scan_tokens();
        if self.print_tokens {
            let mut out = std::io::stdout().lock();
            for token in &tokens {
                writeln!(out, "{token}").map_err(|source| LoxError::Io {
                    path: "<stdout>".into(),
                    source,
                })?;
            }
        }

        match parse_tokens(tokens, &mut self.reporter) {
            Ok(expr) => println!("{}", ast_to_string(&expr)),
            // already reported
            Err(LoxError::Source { errors }) => log::debug!("dropping tree after {errors} error(s)"),
            Err(LoxError::Syntax(err)) => log::debug!("no expression: {err}"),
            Err(err) => return Err(err),
        }
        Ok(())
    }
}
