use std::io::Write;
use std::path::PathBuf;

use logic_core::{
	environment::prelude::Environment,
	lexer::prelude::Lexer,
	parser::prelude::{Parser, Precedence},
	utils::prelude::Error
};

const PROMPT: &str = ">> ";
const OUTPUT_AST: &str = "OUTPUT_AST";

pub fn start(print_ast: bool) -> std::io::Result<()> {
	let stdin = std::io::stdin();

	let mut env = Environment::new();
	env.set_setting(OUTPUT_AST, print_ast);

	println!("Propositional Logic REPL");
	println!("Use SET <var> true/false to define variables");
	println!("Use SET {OUTPUT_AST} true/false to toggle AST output");
	println!("Use expressions using ~(NOT), &(AND), |(OR), ^(XOR), ->(IMPLIES), <->(IFF)");

	loop {
		let mut input = String::from("");

		print!("{}", PROMPT);
		std::io::stdout().flush()?;
		if stdin.read_line(&mut input)? == 0 {
			return Ok(());
		}

		if let Some('\n') = input.chars().next_back() {
			input.pop();
		}
		if let Some('\r') = input.chars().next_back() {
			input.pop();
		}

		match input.as_str() {
			"" => {},
			"exit" | "quit" => return Ok(()),
			line if line.starts_with("SET") => handle_set_command(line, &mut env),
			_ => evaluate_line(&input, &env)
		}
	}
}

fn handle_set_command(line: &str, env: &mut Environment) {
	let mut parts = line.split_whitespace().skip(1);

	let (var, value) = match (parts.next(), parts.next()) {
		(Some(var), Some(value)) => (var, value),
		_ => {
			println!("Invalid SET command. Use: SET <var> true/false");
			return;
		}
	};

	let value = match value {
		"true" => true,
		"false" => false,
		_ => {
			println!("Invalid value. Use true or false");
			return;
		}
	};

	if var == OUTPUT_AST {
		env.set_setting(OUTPUT_AST, value);
	} else {
		env.set(var, value);
	}

	println!("Set {var} to {value}");
}

fn evaluate_line(input: &str, env: &Environment) {
	let lexer = Lexer::new(input.char_indices().map(|(i, c)| (i as u32, c)));
	let mut parser = Parser::new(lexer);

	let expression = parser.parse_expression(Precedence::Lowest);

	if !parser.errors().is_empty() {
		print_error(Error::Parse {
			path: PathBuf::from("<repl>"),
			src: input.to_string(),
			errors: parser.take_errors()
		});
		return;
	}

	let Some(expression) = expression else { return };

	if env.get_setting(OUTPUT_AST) {
		println!("AST:");
		println!("{}", expression.pretty_print(""));
	}

	match expression.evaluate(env) {
		Ok(result) => println!("Result: {result}"),
		Err(error) => print_error(Error::Eval {
			path: PathBuf::from("<repl>"),
			src: input.to_string(),
			error
		})
	}
}

fn print_error(error: Error) {
	let buf_writer = crate::cli::stderr_buffer_writer();
	let mut buf = buf_writer.buffer();

	error.pretty(&mut buf);
	buf_writer
		.print(&buf)
		.expect("Writing error to stderr");
}
