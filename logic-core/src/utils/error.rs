use std::path::PathBuf;

use termcolor::Buffer;
use thiserror::Error;

use crate::{
    eval::EvalError,
    parser::prelude::ParseError,
};
use super::diagnostic::{Diagnostic, Label, Level, Location};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("failed to parse expression")]
    Parse {
        path: PathBuf,
        src: String,
        errors: Vec<ParseError>
    },
    #[error("evaluation failed")]
    Eval {
        path: PathBuf,
        src: String,
        error: EvalError
    },
    #[error("IO operation failed")]
    StdIo {
        err: std::io::ErrorKind
    }
}

impl Error {
    pub fn pretty_string(&self) -> String {
        let mut nocolor = Buffer::no_color();
        self.pretty(&mut nocolor);
        String::from_utf8(nocolor.into_inner()).expect("Error printing produced invalid utf8")
    }

    pub fn pretty(&self, buf: &mut Buffer) {
        use std::io::Write;

        for diagnostic in self.to_diagnostics() {
            diagnostic.write(buf);
            writeln!(buf).expect("write new line diagnostic");
        }
    }

    pub fn to_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse { path, src, errors } => {
                errors.iter()
                    .map(|error| {
                        let (title, extra) = error.details();

                        Diagnostic {
                            title: title.into(),
                            text: extra.join("\n"),
                            level: Level::Error,
                            location: Some(Location {
                                src: &src,
                                path: path.clone(),
                                label: Label {
                                    text: Some(error.message()),
                                    span: error.span,
                                },
                            }),
                        }
                    })
                    .collect()
            },
            Error::Eval { path, src, error } => {
                let EvalError::UndefinedVariable { name, location } = error;

                vec![Diagnostic {
                    title: "Undefined variable".into(),
                    text: format!("Variable `{name}` has no binding. Use `SET {name} true` or `SET {name} false` first."),
                    level: Level::Error,
                    location: Some(Location {
                        src: &src,
                        path: path.clone(),
                        label: Label {
                            text: Some(error.to_string()),
                            span: *location,
                        },
                    }),
                }]
            },
            Error::StdIo { err } => {
                vec![Diagnostic {
                    title: "Standard IO error".into(),
                    text: format!("{err}"),
                    level: Level::Error,
                    location: None,
                }]
            }
        }
    }
}
