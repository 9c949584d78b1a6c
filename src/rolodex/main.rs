use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolodex::api::{parse_field, CmdMessage, DirectoryApi, MessageLevel, PageInfo};
use rolodex::config::RolodexConfig;
use rolodex::error::{Result, RolodexError};
use rolodex::model::{Contact, ContactDraft};
use rolodex::store::fs::FileStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = init_api(&cli)?;

    let result = match cli.command {
        Commands::Add {
            name,
            last_name,
            patronymic,
            company,
            work_phone,
            personal_phone,
        } => api.add_contact(ContactDraft {
            name,
            last_name,
            patronymic,
            company,
            work_phone,
            personal_phone,
        })?,
        Commands::Page { number } => api.page(number)?,
        Commands::Search { field, value } => api.search(parse_field(&field)?, &value)?,
        Commands::Edit {
            position,
            field,
            value,
        } => api.edit(position, parse_field(&field)?, &value)?,
    };

    if let Some(page) = result.page {
        print_page_header(page);
    }
    print_contacts(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn init_api(cli: &Cli) -> Result<DirectoryApi<FileStore>> {
    let path = match &cli.file {
        Some(path) => path.clone(),
        None => {
            let proj_dirs = ProjectDirs::from("com", "rolodex", "rolodex")
                .ok_or_else(|| RolodexError::Store("Could not determine data directory".into()))?;
            let data_dir = proj_dirs.data_dir().to_path_buf();
            let config = RolodexConfig::load(&data_dir).unwrap_or_default();
            data_dir.join(config.data_file())
        }
    };

    Ok(DirectoryApi::new(FileStore::new(path)))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_page_header(page: PageInfo) {
    println!("{}", format!("Page {} of {}", page.number, page.total).dimmed());
}

fn print_contacts(contacts: &[Contact]) {
    if contacts.is_empty() {
        return;
    }

    let name_width = contacts
        .iter()
        .map(|c| full_name(c).width())
        .max()
        .unwrap_or(0);
    let company_width = contacts.iter().map(|c| c.company.width()).max().unwrap_or(0);

    for contact in contacts {
        let pk = format!("{:>4}.", contact.pk);
        let name = full_name(contact);
        let name_pad = " ".repeat(name_width - name.width());
        let company_pad = " ".repeat(company_width - contact.company.width());

        println!(
            "{} {}{}  {}{}  {}  {}",
            pk.dimmed(),
            name.bold(),
            name_pad,
            contact.company,
            company_pad,
            contact.work_phone,
            contact.personal_phone.dimmed()
        );
    }
}

fn full_name(contact: &Contact) -> String {
    format!(
        "{} {} {}",
        contact.last_name, contact.name, contact.patronymic
    )
}
