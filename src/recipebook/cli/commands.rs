use super::print::{print_full_recipes, print_messages, print_recipes};
use super::setup::{Cli, Commands};
use directories::ProjectDirs;
use recipebook::api::{CmdResult, ConfigAction, RecipeBookApi, RecipePatch};
use recipebook::config::RecipeBookConfig;
use recipebook::error::{RecipeError, Result};
use recipebook::model::RecipeDraft;
use recipebook::recipe_store::RecipeStore;
use recipebook::store::fs::FsBackend;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::warn;

struct AppContext {
    api: RecipeBookApi<FsBackend>,
    config: RecipeBookConfig,
}

/// Runs the parsed command. Returns `Ok(false)` when the command completed but
/// reported errors, such as changes that could not be written to disk.
pub fn run(cli: Cli) -> Result<bool> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx, false),
        Some(Commands::Trash) => handle_list(&ctx, true),
        Some(Commands::Add {
            title,
            ingredients,
            steps,
        }) => handle_add(&mut ctx, RecipeDraft::new(title, ingredients, steps)),
        Some(Commands::Edit {
            index,
            title,
            ingredients,
            steps,
        }) => {
            let patch = RecipePatch {
                title,
                ingredients,
                preparation_steps: steps,
            };
            handle_edit(&mut ctx, &index, &patch)
        }
        Some(Commands::View { indexes }) => handle_view(&ctx, &indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, &indexes),
        Some(Commands::Restore { indexes }) => handle_restore(&mut ctx, &indexes),
        Some(Commands::Purge { indexes, yes }) => handle_purge(&mut ctx, &indexes, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
    }
}

fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "recipebook", "recipebook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Config("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };

    let config = RecipeBookConfig::load(&data_dir).unwrap_or_else(|error| {
        warn!(%error, "ignoring unreadable config, using defaults");
        RecipeBookConfig::default()
    });

    let store = RecipeStore::new(FsBackend::new(&data_dir)).with_pretty_json(config.pretty_json);
    let mut api = RecipeBookApi::new(store, data_dir);
    let loaded = api.reload();
    print_messages(&loaded.messages);

    Ok(AppContext { api, config })
}

fn finish(result: &CmdResult) -> bool {
    print_messages(&result.messages);
    !result.has_errors()
}

fn handle_list(ctx: &AppContext, trash: bool) -> Result<bool> {
    let (result, empty) = if trash {
        (ctx.api.list_trash(), "Trash is empty.")
    } else {
        (ctx.api.list_recipes(), "No recipes yet.")
    };
    print_recipes(&result.listed_recipes, empty);
    Ok(finish(&result))
}

fn handle_add(ctx: &mut AppContext, draft: RecipeDraft) -> Result<bool> {
    let result = ctx.api.create_recipe(&draft);
    Ok(finish(&result))
}

fn handle_edit(ctx: &mut AppContext, index: &str, patch: &RecipePatch) -> Result<bool> {
    let result = ctx.api.edit_recipe(index, patch)?;
    Ok(finish(&result))
}

fn handle_view(ctx: &AppContext, indexes: &[String]) -> Result<bool> {
    let result = ctx.api.view_recipes(indexes)?;
    print_full_recipes(&result.listed_recipes);
    Ok(finish(&result))
}

fn handle_delete(ctx: &mut AppContext, indexes: &[String]) -> Result<bool> {
    let result = ctx.api.delete_recipes(indexes)?;
    Ok(finish(&result))
}

fn handle_restore(ctx: &mut AppContext, indexes: &[String]) -> Result<bool> {
    let result = ctx.api.restore_recipes(indexes)?;
    Ok(finish(&result))
}

fn handle_purge(ctx: &mut AppContext, indexes: &[String], yes: bool) -> Result<bool> {
    if ctx.config.confirm_purge && !yes {
        let targets = ctx.api.purge_preview(indexes)?;
        if !targets.is_empty() {
            println!("This will permanently remove the following recipes:");
            for dr in &targets {
                println!("  {} {}", dr.index, dr.recipe.title);
            }
            print!("[Y] To purge: ");
            io::stdout().flush()?;

            let mut input = String::new();
            io::stdin().read_line(&mut input)?;

            if input.trim() != "Y" {
                println!("Operation cancelled.");
                return Ok(true);
            }
        }
    }

    let result = ctx.api.purge_recipes(indexes)?;
    Ok(finish(&result))
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for (key, value) in config.entries() {
                println!("{} = {}", key, value);
            }
        }
    }
    Ok(finish(&result))
}

fn handle_init(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.init()?;
    Ok(finish(&result))
}
