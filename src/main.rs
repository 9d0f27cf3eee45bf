use album_renamer::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Album Renamer - Photo Album Naming Tool");
    println!("=======================================");
    println!();
    println!("Turn a listing of photo metadata lines into sequential, per-city");
    println!("album names ordered by capture date.");
    println!();
    println!("USAGE:");
    println!("    album-renamer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    rename      Rename the photos of a listing (main command)");
    println!("    schema      Print the effective field schema");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("INPUT FORMAT:");
    println!("    <image_file>, <city>, <YYYY-MM-DD hh:mm:ss>    one photo per line");
    println!();
    println!("EXAMPLES:");
    println!("    # Rename a listing and print the new names:");
    println!("    album-renamer rename photos.txt");
    println!();
    println!("    # Read standard input, accept only 2010-2015 and gif files:");
    println!("    cat photos.txt | album-renamer rename --year-from 2010 --year-to 2015 \\");
    println!("                                          --extensions gif");
    println!();
    println!("    # Write names and statistics as JSON:");
    println!("    album-renamer rename photos.txt --format json -o names.json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    album-renamer <COMMAND> --help");
}
