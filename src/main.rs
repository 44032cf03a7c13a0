use std::{env, path::PathBuf, time::Instant};

use tokenizer::lexer::lexer::tokenize;
use tokenizer::load_source;
use tokenizer::output::output::{report_diagnostics, write_tokens};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        panic!("Incorrect arguments provided!");
    }

    let file_path: &str = &args[1];
    let file_name = if file_path.contains("/") {
        file_path.split("/").last().unwrap()
    } else {
        file_path
    };

    let start = Instant::now();

    let source = match load_source(&PathBuf::from(file_path)) {
        Ok(source) => source,
        Err(error) => panic!("Failed to read file: {}", error),
    };

    let (tokens, diagnostics) = tokenize(&source);

    println!("Tokenized in {:?}", start.elapsed());

    report_diagnostics(&diagnostics);

    let token_name = match file_name.rsplit_once('.') {
        Some((stem, _)) => format!("{}.json", stem),
        None => format!("{}.json", file_name),
    };

    let output_path = PathBuf::from("data").join("token").join(&token_name);

    if let Err(error) = write_tokens(&output_path, &tokens) {
        panic!("Failed to write tokens: {}", error);
    }

    println!("Tokenization complete. Check {} for results.", token_name);
}
