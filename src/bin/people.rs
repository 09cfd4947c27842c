//! CLI entry point for the people address book

use std::io;
use std::process;

use clap::{Args as ClapArgs, Parser, Subcommand};

use sprig::people::{render_table, resolve_path, AddressBook, Person, Result};

#[derive(Parser, Debug)]
#[command(name = "people")]
#[command(about = "Keep an address book in a flat JSON file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Arguments shared by every subcommand: which file to operate on.
#[derive(ClapArgs, Debug)]
struct FileArgs {
    /// The name of the data file
    filename: String,

    /// Resolve the data file against the home directory
    #[arg(long)]
    own: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add a record about a new person
    Add {
        #[command(flatten)]
        file: FileArgs,

        /// The person's name
        #[arg(short, long)]
        name: String,

        /// The person's surname
        #[arg(short, long)]
        surname: String,

        /// The person's telephone number
        #[arg(short, long)]
        telephone: String,

        /// The person's birthday (DD.MM.YYYY)
        #[arg(short, long)]
        birthday: String,
    },

    /// Display all people
    Display {
        #[command(flatten)]
        file: FileArgs,
    },

    /// Select people born in the given month
    Select {
        #[command(flatten)]
        file: FileArgs,

        /// The needed month
        #[arg(short = 'P', long)]
        period: u32,
    },
}

impl Command {
    fn file(&self) -> &FileArgs {
        match self {
            Command::Add { file, .. } => file,
            Command::Display { file } => file,
            Command::Select { file, .. } => file,
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = resolve_path(&cli.command.file().filename, cli.command.file().own)?;
    let mut book = AddressBook::load(&path)?;
    let stdout = io::stdout();

    match cli.command {
        Command::Add {
            name,
            surname,
            telephone,
            birthday,
            ..
        } => {
            book.add(Person::new(name, surname, telephone, birthday));
            // Only mutating commands write the file back.
            book.save(&path)?;
        }
        Command::Display { .. } => {
            render_table(book.people(), &mut stdout.lock())?;
        }
        Command::Select { period, .. } => {
            let selected = book.born_in_month(period)?;
            render_table(selected.into_iter(), &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("people: {}", e);
        process::exit(1);
    }
}
