use std::{env, fs::read_to_string, path::Path, process::ExitCode, time::Instant};

use imposter::{
    lexer::lexer::{tokenize, Lexer},
    parser::parser::parse,
    render_error,
};
use log::info;

const USAGE: &str = "usage: imposter [--tokens] <file>";

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let (dump_tokens, file_path) = match args.as_slice() {
        [_, flag, path] if flag == "--tokens" => (true, path),
        [_, path] if path != "--tokens" => (false, path),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.clone());

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(msg) => {
            eprintln!("Could not open file {}: {}", file_path, msg);
            return ExitCode::FAILURE;
        }
    };

    if dump_tokens {
        for token in tokenize(file_contents.clone(), Some(file_name.clone())) {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let (parser, program) = parse(Lexer::new(file_contents.clone(), Some(file_name)));

    info!("Parsed in {:?}", parse_start.elapsed());

    if !parser.diagnostics().is_empty() {
        for error in parser.diagnostics() {
            eprint!("{}", render_error(error, &file_contents, file_path));
        }
        return ExitCode::FAILURE;
    }

    println!("{}", program);
    ExitCode::SUCCESS
}
