use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "RESTful phone book")]
pub struct Cli {
    /// Base url of a running phone book server
    #[arg(long, global = true, env = "PHONEBOOK_URL", default_value_t = String::from("http://127.0.0.1:8080"))]
    pub url: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the phone book over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "PHONEBOOK_BIND", default_value_t = String::from("127.0.0.1:8080"))]
        bind: String,

        /// Initial contacts (simpsons, empty, json, csv)
        #[arg(long, env = "PHONEBOOK_SEED", default_value_t = String::from("simpsons"))]
        seed: String,

        /// File to seed from, for the json and csv seeds
        #[arg(long, env = "PHONEBOOK_SEED_PATH")]
        seed_path: Option<String>,
    },
    /// List contacts, optionally only those matching every given field
    List {
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Show a single contact
    Get {
        /// Contact id
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Add a new contact, the server assigns its id
    Add {
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Create or replace the contact with the given id
    /// Fields left out are cleared
    Put {
        /// Contact id
        #[arg(long, allow_negative_numbers = true)]
        id: i64,

        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a contact by id
    Delete {
        /// Contact id
        #[arg(long, allow_negative_numbers = true)]
        id: i64,
    },
    /// Export contacts to a .csv file
    Export {
        /// File path (or directory) for the exported file
        #[arg(short, long, default_value_t = String::from("./exported.csv"))]
        des: String,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct ContactFields {
    /// Contact name
    #[arg(long)]
    pub name: Option<String>,

    /// Contact surname
    #[arg(long)]
    pub surname: Option<String>,

    /// Contact phone number
    #[arg(long)]
    pub phone: Option<String>,
}
