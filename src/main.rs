// Use the library crate (whose name is defined in Cargo.toml)
use risp::lexer::tokenize;
use risp::parser::parse_str;

fn main() {
    let input = "(begin (define r 10) (* pi (* r r)))";
    println!("Input:\n{}", input);

    println!("Tokens:");
    for token in tokenize(input) {
        println!("  {:?}", token);
    }

    match parse_str(input) {
        Ok(node) => println!("Parsed:\n{}", node),
        Err(e) => e.pretty_print(input),
    }
}
