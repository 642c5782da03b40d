use clap::{Parser, ValueEnum};

/// Command-line arguments for the Playfair cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Keyword the 5x5 key square is derived from
    #[arg(short, long, help = "Keyword for deriving the key square")]
    keyword: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Main entry point for the Playfair cipher program.
fn main() {
    // Parse command-line arguments
    let cli: Cli = Cli::parse();

    // The square still builds from an empty keyword (plain alphabet),
    // but that is almost never what the user wants
    if !cli.keyword.chars().any(|c| c.is_ascii_alphabetic()) {
        eprintln!("Warning: keyword contains no letters, using the plain alphabet square");
    }

    // Read input file content
    let content: String = std::fs::read_to_string(&cli.file)
        .expect("Failed to read input file");

    // Trim the trailing newline most text files carry; the cipher core
    // rejects it as an unsupported character
    let message: &str = content.trim_end_matches(['\r', '\n']);

    // Process based on selected mode
    let result = match cli.mode {
        OperationMode::Encrypt => {
            println!("Encrypting with keyword: {}", cli.keyword);
            playfair::encrypt(&cli.keyword, message)
        }
        OperationMode::Decrypt => {
            println!("Decrypting with keyword: {}", cli.keyword);
            playfair::decrypt(&cli.keyword, message)
        }
    };

    let (transformed, square) = match result {
        Ok(output) => output,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    // Display the derived key square
    println!("Key square:\n{}", square);

    // Write result to output file
    std::fs::write(&cli.output, transformed)
        .expect("Failed to write output file");

    println!("Operation completed successfully! Output saved to: {}", cli.output);
}
