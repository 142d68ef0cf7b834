use super::token::Token;
use std::fmt::Display;

pub type Spanned = (u32, Token, u32);

pub fn str_to_keyword(word: &str) -> Option<Token> {
	Some(match word {
		"SET" => Token::Set,

		"true" => Token::True,
		"false" => Token::False,

		_ => return None
	})
}

#[derive(Debug)]
pub struct Lexer<T: Iterator<Item = (u32, char)>> {
	position: u32,
	next_position: u32,
	ch: Option<char>,
	next_ch: Option<char>,
	input: T,
}

impl<T: Iterator<Item = (u32, char)>> Display for Lexer<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f,
			"Lexer {{\n\tposition: {},\n\tnext_position: {},\n\tch: {:?}, next_ch: {:?}\n}}",
			self.position, self.next_position, self.ch, self.next_ch
		)
	}
}

impl<T: Iterator<Item = (u32, char)>> Lexer<T> {
	pub fn new(input: T) -> Self {
        let mut lexer = Self {
            position: 0,
            next_position: 0,
            ch: None,
			next_ch: None,
            input,
        };

        lexer.next_char();
        lexer.next_char();

        return lexer;
    }

    pub fn next_token(&mut self) -> Spanned {
		self.skip_whitespace();

		match self.ch {
			Some(ch) => match ch {
				'(' => self.eat_one_char(Token::LParen),
				')' => self.eat_one_char(Token::RParen),
				'~' => self.eat_one_char(Token::Not),
				'&' => self.eat_one_char(Token::And),
				'|' => self.eat_one_char(Token::Or),
				'^' => self.eat_one_char(Token::Xor),
				'-' => {
					// `->`, иначе одиночный `-` нераспознаваем
					if self.next_ch == Some('>') {
						let start = self.position;
						self.next_char();
						self.next_char();

						(start, Token::Implies, self.position)
					} else {
						self.eat_one_char(Token::Illegal("-".to_string()))
					}
				},
				'<' => {
					// только точная последовательность `<->`
					if self.next_ch == Some('-') {
						let start = self.position;
						self.next_char();

						if self.next_ch == Some('>') {
							self.next_char();
							self.next_char();

							(start, Token::Iff, self.position)
						} else {
							self.next_char();

							(start, Token::Illegal("<-".to_string()), self.position)
						}
					} else {
						self.eat_one_char(Token::Illegal("<".to_string()))
					}
				},
				'a'..='z' | 'A'..='Z' => self.lex_ident(),
				c => self.eat_one_char(Token::Illegal(c.to_string()))
			},
			None => (self.position, Token::Eof, self.position)
		}
    }

	fn next_char(&mut self) -> Option<char> {
		let ch = self.ch;

		let next = match self.input.next() {
			Some((pos, ch)) => {
				self.position = self.next_position;
				self.next_position = pos;

				Some(ch)
			},
			None => {
				self.position = self.next_position;
				self.next_position += 1;

				None
			}
		};

		self.ch = self.next_ch;
		self.next_ch = next;

		ch
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.ch, Some(' ') | Some('\t') | Some('\n') | Some('\r')) {
			self.next_char();
		}
	}

	fn eat_one_char(&mut self, token: Token) -> Spanned {
		let start_pos = self.position;
		self.next_char();
		let end_pos = self.position;

		(start_pos, token, end_pos)
	}

	fn lex_ident(&mut self) -> Spanned {
        let start_pos = self.position;
		let mut ident = String::new();

		loop {
			match self.ch {
				Some(ch) if ch.is_ascii_alphabetic() => match self.next_char() {
					Some(ch) => ident.push(ch),
					None => break
				},
				_ => break
			}
		}

        let end_pos = self.position;

        match str_to_keyword(&ident) {
			Some(tok) => (start_pos, tok, end_pos),
			None => (start_pos, Token::Ident(ident), end_pos)
        }
	}
}

impl<T: Iterator<Item = (u32, char)>> Iterator for Lexer<T> {
	type Item = Spanned;

	fn next(&mut self) -> Option<Self::Item> {
		Some(self.next_token())
	}
}
