use anyhow::Result;
use clap::{Parser, Subcommand};
use navlight_char::{compile, extract_color, format, parse};
use navlight_core::Palette;

#[derive(Parser)]
#[command(name = "navlight-char")]
#[command(about = "Light-characteristic notation parser and sequence compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a light-characteristic code
    Validate {
        /// Code to validate, e.g. "Fl(2+1) W G 10s"
        code: String,
    },
    /// Parse a code and show the descriptor
    Parse {
        /// Code to parse
        code: String,

        /// Output format (json or debug)
        #[arg(short, long, default_value = "debug")]
        output_format: String,
    },
    /// Compile a code into its segment sequence
    Compile {
        /// Code to compile
        code: String,

        /// Output format (json or debug)
        #[arg(short, long, default_value = "debug")]
        output_format: String,
    },
    /// Show the representative color for a code
    Color {
        /// Code to inspect
        code: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { code } => match parse(&code) {
            Ok(descriptor) => {
                println!("✓ {}", format(&descriptor));
                Ok(())
            }
            Err(e) => {
                eprintln!("✗ Parse error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Parse {
            code,
            output_format,
        } => match parse(&code) {
            Ok(descriptor) => {
                match output_format.as_str() {
                    "json" => {
                        let json = serde_json::to_string_pretty(&descriptor)?;
                        println!("{}", json);
                    }
                    _ => {
                        println!("{:#?}", descriptor);
                    }
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("✗ Parse error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Compile {
            code,
            output_format,
        } => match parse(&code) {
            Ok(descriptor) => {
                let sequence = compile(&descriptor);
                match output_format.as_str() {
                    "json" => {
                        let json = serde_json::to_string_pretty(&sequence)?;
                        println!("{}", json);
                    }
                    _ => {
                        println!(
                            "{}: {} segments, {:.3}s per cycle",
                            format(&descriptor),
                            sequence.len(),
                            sequence.total_duration()
                        );
                        for (index, segment) in sequence.iter().enumerate() {
                            let state = if segment.is_on() { "on " } else { "off" };
                            if segment.intensity < 1.0 {
                                println!(
                                    "  [{index}] {state} {:7.3}s  {}  (intensity {:.1})",
                                    segment.duration, segment.color, segment.intensity
                                );
                            } else {
                                println!(
                                    "  [{index}] {state} {:7.3}s  {}",
                                    segment.duration, segment.color
                                );
                            }
                        }
                    }
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("✗ Parse error: {}", e);
                std::process::exit(1);
            }
        },
        Commands::Color { code } => {
            let token = extract_color(&code);
            let palette = Palette::default();
            println!("{} ({})", token, palette.css(&token));
            Ok(())
        }
    }
}
