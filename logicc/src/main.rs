mod cli;
mod repl;
mod rlpl;
mod rppl;

use clap::Parser;

#[derive(Parser)]
enum Command {
    /// Runs the interactive propositional logic REPL
    Repl {
        /// Print the AST of each expression before evaluating it
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
    /// Runs Read Lex Print Loop
    Rlpl,
    /// Runs Read Parse Print Loop
    Rppl
}

fn main() {
    ctrlc::set_handler(|| {
        std::process::exit(0);
    }).expect("Setting Ctrl-C handler");

    let _ = match Command::parse() {
        Command::Repl { print_ast } => repl::start(print_ast),
        Command::Rlpl => rlpl::start(),
        Command::Rppl => rppl::start()
    };
}
