#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // <буква>{<буква>} — but classified against the keywords below first
    Ident(String),

    // Логические константы
    True,
    False,

    // Ключевое слово команды присваивания
    Set, // SET

    // Разделители
    LParen, // (
    RParen, // )

    // Унарная операция
    Not, // ~

    // Бинарные связки
    And,     // &
    Or,      // |
    Xor,     // ^
    Implies, // ->
    Iff,     // <->

    // Символ, который лексер не смог распознать
    Illegal(String),

    Eof,
}

impl Token {
    pub fn is_connective(&self) -> bool {
        match self {
            Token::And
            | Token::Or
            | Token::Xor
            | Token::Implies
            | Token::Iff => true,
            _ => false,
        }
    }

    pub fn as_literal(&self) -> String {
        match self {
            Token::Ident(value) => value.clone(),
            Token::Illegal(value) => value.clone(),

            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::Set => "SET".to_string(),

            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),

            Token::Not => "~".to_string(),
            Token::And => "&".to_string(),
            Token::Or => "|".to_string(),
            Token::Xor => "^".to_string(),
            Token::Implies => "->".to_string(),
            Token::Iff => "<->".to_string(),

            Token::Eof => "".to_string(),
        }
    }
}
