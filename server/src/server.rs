extern crate log;
use log::{debug, info};
use rocket::http::Status;
use rocket::response::status::Created;
use rocket::serde::json::{self, Json};
use rocket::{catch, catchers, delete, get, post, put, routes, Build, Request, Rocket, State};
use std::sync::Arc;

use crate::error::{ErrorBody, RecipeError};
use crate::recipe::{NewRecipe, Recipe, RecipeUpdate};
use crate::store::{seed_recipes, MemoryRecipeStore, RecipeStore, SharedStore};

pub const DEFAULT_PORT: u16 = 8080;

#[get("/")]
fn health_check() -> &'static str {
    "Healthy\n"
}

#[get("/recipes")]
async fn list_recipes(store: &State<SharedStore>) -> Json<Vec<Recipe>> {
    Json(store.list().await)
}

#[get("/recipes/<id>")]
async fn get_recipe(id: &str, store: &State<SharedStore>) -> Result<Json<Recipe>, RecipeError> {
    store.get(id).await.map(Json)
}

#[post("/recipes", data = "<payload>")]
async fn create_recipe(
    payload: Result<Json<NewRecipe>, json::Error<'_>>,
    store: &State<SharedStore>,
) -> Result<Created<Json<Recipe>>, RecipeError> {
    let payload = payload.map_err(|e| RecipeError::Validation(e.to_string()))?;
    let recipe = store.create(payload.into_inner()).await?;
    info!("Created recipe {}", recipe.id);
    Ok(Created::new(format!("/recipes/{}", recipe.id)).body(Json(recipe)))
}

#[put("/recipes/<id>", data = "<payload>")]
async fn update_recipe(
    id: &str,
    payload: Result<Json<RecipeUpdate>, json::Error<'_>>,
    store: &State<SharedStore>,
) -> Result<Status, RecipeError> {
    let payload = payload.map_err(|e| RecipeError::Validation(e.to_string()))?;
    store.update(id, payload.into_inner()).await?;
    info!("Updated recipe {}", id);
    Ok(Status::NoContent)
}

#[delete("/recipes/<id>")]
async fn delete_recipe(id: &str, store: &State<SharedStore>) -> Result<Status, RecipeError> {
    store.remove(id).await?;
    info!("Deleted recipe {}", id);
    Ok(Status::NoContent)
}

#[catch(default)]
fn default_catcher(status: Status, req: &Request<'_>) -> (Status, Json<ErrorBody>) {
    debug!("{} {} failed with {}", req.method(), req.uri(), status);
    let reason = status.reason().unwrap_or("Unknown error");
    (status, Json(ErrorBody::new(status, reason)))
}

pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Start with the demonstration recipes instead of an empty store.
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: String::from("127.0.0.1"),
            port: DEFAULT_PORT,
            seed: true,
        }
    }
}

pub struct ServerNode {
    config: ServerConfig,
    store: SharedStore,
}

impl ServerNode {
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed {
            debug!("Seeding store with demonstration recipes");
            MemoryRecipeStore::with_recipes(seed_recipes())
        } else {
            MemoryRecipeStore::new()
        };
        Self::with_store(config, Arc::new(store))
    }

    pub fn with_store(config: ServerConfig, store: SharedStore) -> Self {
        ServerNode { config, store }
    }

    pub fn store(&self) -> SharedStore {
        self.store.clone()
    }

    pub fn build(&self) -> Rocket<Build> {
        info!(
            "Recipes server configured on {}:{}",
            self.config.address, self.config.port
        );
        let figment = rocket::Config::figment()
            .merge(("address", self.config.address.clone()))
            .merge(("port", self.config.port));
        rocket::custom(figment)
            .manage(self.store.clone())
            .mount(
                "/",
                routes![
                    health_check,
                    list_recipes,
                    get_recipe,
                    create_recipe,
                    update_recipe,
                    delete_recipe,
                ],
            )
            .register("/", catchers![default_catcher])
    }
}
