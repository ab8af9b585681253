// In src/main.rs

use anyhow::Result;
use clap::{App, Arg};
use log::info;
use recipes_client::client_api::{Recipe, RecipeClient};
use recipes_client::command::{Command, HELP};
use recipes_client::recipe_client::HttpRecipeClient;
use tokio::io::{self, AsyncBufReadExt, BufReader};

fn print_recipe(recipe: &Recipe) {
    println!("{}  {}", recipe.id, recipe.name);
    for ingredient in &recipe.ingredients {
        println!("    - {}", ingredient);
    }
}

/// Runs one command. Returns false once the user asks to leave.
async fn run_command(client: &dyn RecipeClient, command: Command) -> Result<bool> {
    match command {
        Command::List => {
            let recipes = client.list().await?;
            if recipes.is_empty() {
                println!("No recipes");
            }
            recipes.iter().for_each(print_recipe);
        }
        Command::Get(id) => print_recipe(&client.get(&id).await?),
        Command::Create(draft) => {
            let recipe = client.create(&draft).await?;
            println!("Created:");
            print_recipe(&recipe);
        }
        Command::Update(id, draft) => {
            client.update(&id, &draft).await?;
            println!("Updated {}", id);
        }
        Command::Delete(id) => {
            client.delete(&id).await?;
            println!("Deleted {}", id);
        }
        Command::Health => {
            if client.healthy().await {
                println!("Server is healthy");
            } else {
                println!("Server is not responding");
            }
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let matches = App::new("Recipes Client")
        .version("1.0")
        .about("Talks to a recipes server")
        .arg(
            Arg::new("server")
                .short('s')
                .long("server")
                .takes_value(true)
                .default_value("http://127.0.0.1:8080")
                .help("Server base URL"),
        )
        .get_matches();

    let server = matches.value_of("server").unwrap_or("http://127.0.0.1:8080");
    let client = HttpRecipeClient::new(server);
    info!("using recipes server at {}", client.base_url());

    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin);
    let mut line = String::new();

    println!("Recipes Client");
    println!("Type 'help' for a list of commands");

    while reader.read_line(&mut line).await? > 0 {
        match Command::parse(&line) {
            Ok(command) => match run_command(&client, command).await {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => eprintln!("Error: {}", e),
            },
            Err(e) => eprintln!("{}", e),
        }
        line.clear();
    }
    Ok(())
}
