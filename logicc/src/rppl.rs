use std::io::Write;

use logic_core::parser::prelude::parse_source;

const PROMPT: &str = ">> ";

pub fn start() -> std::io::Result<()> {
	let stdin = std::io::stdin();

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
			".exit" => return Ok(()),
			_ => {
				match parse_source(&input) {
					Ok(expression) => {
						println!("{}", expression);
					},
					Err(errors) => {
						for error in errors {
							println!("Parse error: {} [at {}]", error.message(), error.span);
						}
					}
				}
			}
		}
	}
}
