use anyhow::Result;
use dialoguer::Select;

/// Arrow-key Yes/No selection, `true` for "Yes"
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

pub fn prompt_reset_confirmation(database: &str) -> Result<bool> {
    prompt_confirmation(
        &format!("Drop every player, season and game stored in '{}'?", database),
        false,
    )
}
