#![allow(dead_code)]

use recipes_server::recipe::Recipe;
use recipes_server::server::{ServerConfig, ServerNode};
use rocket::local::blocking::Client;

pub fn get_server_config(seed: bool) -> ServerConfig {
    ServerConfig {
        seed,
        ..ServerConfig::default()
    }
}

pub fn launch_server_node(seed: bool) -> (ServerNode, Client) {
    let node = ServerNode::new(get_server_config(seed));
    let client = Client::tracked(node.build()).expect("valid rocket instance");
    (node, client)
}

pub fn list_recipes(client: &Client) -> Vec<Recipe> {
    client
        .get("/recipes")
        .dispatch()
        .into_json::<Vec<Recipe>>()
        .expect("recipe list")
}
