use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{HealError, Result};
use crate::models::{
    Condition, DietPreference, Level, MAX_AGE, MAX_CONDITIONS, MIN_AGE, UserProfile, vocabulary,
};

/// Prompt for the user's name.
pub fn prompt_name() -> Result<String> {
    let name: String = Input::new()
        .with_prompt("Name")
        .allow_empty(true)
        .interact_text()?;
    Ok(name.trim().to_string())
}

/// Prompt for age within the accepted range.
pub fn prompt_age() -> Result<u8> {
    let input: String = Input::new()
        .with_prompt(format!("Age ({}-{})", MIN_AGE, MAX_AGE))
        .default("30".to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            match input.trim().parse::<u8>() {
                Ok(age) if (MIN_AGE..=MAX_AGE).contains(&age) => Ok(()),
                _ => Err(format!("Enter a whole number from {} to {}", MIN_AGE, MAX_AGE)),
            }
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| HealError::InvalidInput("Invalid age".to_string()))
}

/// Prompt for the dietary preference.
pub fn prompt_diet() -> Result<DietPreference> {
    let options: Vec<&str> = DietPreference::ALL.iter().map(|d| d.display_name()).collect();

    let selection = Select::new()
        .with_prompt("Food Preference")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(DietPreference::ALL[selection])
}

/// Prompt for up to [`MAX_CONDITIONS`] health conditions; re-asks when too many are ticked.
pub fn prompt_conditions() -> Result<Vec<Condition>> {
    let names: Vec<&'static str> = vocabulary().collect();

    loop {
        let picked = MultiSelect::new()
            .with_prompt(format!(
                "Select Health Conditions (optional, up to {}; space to toggle)",
                MAX_CONDITIONS
            ))
            .items(&names)
            .interact()?;

        if picked.len() > MAX_CONDITIONS {
            println!(
                "Please select at most {} conditions ({} selected).",
                MAX_CONDITIONS,
                picked.len()
            );
            continue;
        }

        return picked
            .into_iter()
            .map(|i| Condition::parse(names[i]))
            .collect();
    }
}

/// Prompt for a Normal/High/Low reading.
pub fn prompt_level(prompt: &str) -> Result<Level> {
    let options: Vec<String> = Level::ALL.iter().map(|l| l.to_string()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(Level::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect a full profile through the interactive form.
pub fn collect_profile() -> Result<UserProfile> {
    let name = prompt_name()?;
    let age = prompt_age()?;
    let diet = prompt_diet()?;
    let conditions = prompt_conditions()?;
    let bp = prompt_level("BP Level")?;
    let sugar = prompt_level("Sugar Level")?;

    UserProfile::new(name, age, diet, conditions, bp, sugar)
}
