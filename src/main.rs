use clap::Parser;
use nova_landing::adapters::terminal::TerminalRenderer;
use nova_landing::utils::{logger, validation::Validate};
use nova_landing::{
    Catalog, CarouselState, CliConfig, Direction, DirStore, InteractionController, WaitlistStore,
};
use std::io::{self, BufRead, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nova-landing demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let catalog = match &config.catalog_file {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::builtin(),
    };
    tracing::debug!(
        "Catalog loaded: {} features, {} testimonials, {} plans",
        catalog.features.len(),
        catalog.testimonials.len(),
        catalog.pricing.len()
    );

    let store = DirStore::new(&config.storage_path);
    let waitlist = WaitlistStore::load(store);
    tracing::info!("Loaded {} waitlist entries", waitlist.len());

    let carousel = CarouselState::new(catalog.testimonials.clone());
    let mut controller = InteractionController::new(waitlist, carousel, TerminalRenderer);

    controller.render_initial();
    print_help();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["add", email] => controller.submit_waitlist(email),
            ["demo", email] => {
                controller.open_modal();
                controller.submit_demo_request(email);
            }
            ["next"] => controller.advance_carousel(Direction::Next),
            ["prev"] => controller.advance_carousel(Direction::Previous),
            ["jump", index] => match index.parse::<isize>() {
                Ok(index) => controller.jump_carousel(index),
                Err(_) => println!("❌ jump takes a number, got {:?}", index),
            },
            ["plan", id] => {
                match catalog.pricing.iter().find(|plan| plan.id == *id) {
                    Some(plan) => controller.select_plan(&plan.id),
                    None => println!("❌ Unknown plan {:?}", id),
                };
            }
            ["list"] => {
                for entry in controller.waitlist().list() {
                    println!("{}", entry);
                }
                println!("({} on the waitlist)", controller.waitlist().len());
            }
            ["help"] => print_help(),
            ["quit"] | ["exit"] => break,
            [] => {}
            _ => println!("❌ Unrecognized command; try 'help'"),
        }
    }

    tracing::info!("Session over, {} waitlist entries", controller.waitlist().len());
    Ok(())
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  add <email>    join the waitlist");
    println!("  demo <email>   request a demo (captures into the waitlist)");
    println!("  next / prev    rotate testimonials");
    println!("  jump <i>       jump to testimonial i");
    println!("  plan <id>      express interest in a pricing plan");
    println!("  list           show captured emails");
    println!("  quit           exit");
}
