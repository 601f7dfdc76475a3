use crate::{
    client::PhoneBookClient,
    prelude::{
        AppError, Contact, ContactFilter, PhoneBook,
        command::{Cli, Commands, ContactFields},
        server,
        storage::{self, SourceKinds, stores::export_contacts_to_csv},
    },
};
use clap::Parser;
use dotenv::dotenv;
use std::{net::SocketAddr, sync::Arc};

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            seed,
            seed_path,
        } => {
            let addr: SocketAddr = bind.parse()?;
            let source = storage::parse_source(SourceKinds::from(&seed)?, seed_path.as_deref())?;
            let phonebook = Arc::new(PhoneBook::from_source(source.as_ref())?);

            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            runtime.block_on(serve_on(addr, phonebook))
        }

        Commands::List { fields } => {
            let client = PhoneBookClient::new(&cli.url)?;
            let contacts = client.find_all(&fields.into())?;

            if contacts.is_empty() {
                println!("No contact found");
                return Ok(());
            }

            for contact in &contacts {
                println!("{}", listing_format(contact));
            }
            Ok(())
        }

        Commands::Get { id } => {
            let client = PhoneBookClient::new(&cli.url)?;
            let contact = client.find_by_id(id)?;

            println!("{}", display_contact(&contact));
            Ok(())
        }

        Commands::Add { fields } => {
            let client = PhoneBookClient::new(&cli.url)?;
            let created = client.insert(&fields.into())?;

            println!(
                "Contact added successfully with id {}",
                display_id(created.id)
            );
            Ok(())
        }

        Commands::Put { id, fields } => {
            let client = PhoneBookClient::new(&cli.url)?;
            let contact = Contact::from(fields).with_id(id);
            client.upsert(id, &contact)?;

            println!("Contact {} saved successfully", id);
            Ok(())
        }

        Commands::Delete { id } => {
            let client = PhoneBookClient::new(&cli.url)?;
            client.delete(id)?;

            println!("Contact deleted successfully");
            Ok(())
        }

        Commands::Export { des } => {
            let client = PhoneBookClient::new(&cli.url)?;
            let contacts = client.find_all(&ContactFilter::default())?;
            let (path, total) = export_contacts_to_csv(&contacts, &des)?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

async fn serve_on(addr: SocketAddr, phonebook: Arc<PhoneBook>) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    server::serve(listener, phonebook, server::shutdown_signal()).await
}

impl From<ContactFields> for ContactFilter {
    fn from(fields: ContactFields) -> Self {
        ContactFilter::new(fields.name, fields.surname, fields.phone)
    }
}

impl From<ContactFields> for Contact {
    fn from(fields: ContactFields) -> Self {
        Contact {
            id: None,
            name: fields.name,
            surname: fields.surname,
            phone: fields.phone,
        }
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn listing_format(contact: &Contact) -> String {
    format!(
        "{:>5}. {:<20} {:<20} {:<20}",
        display_id(contact.id),
        contact.name.as_deref().unwrap_or(""),
        contact.surname.as_deref().unwrap_or(""),
        contact.phone.as_deref().unwrap_or("")
    )
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "Id: {}\n\
        Name: {}\n\
        Surname: {}\n\
        Phone: {}",
        display_id(contact.id),
        contact.name.as_deref().unwrap_or(""),
        contact.surname.as_deref().unwrap_or(""),
        contact.phone.as_deref().unwrap_or("")
    )
}
