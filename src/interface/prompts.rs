use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::catalog::Catalog;
use crate::error::{Result, StockError};
use crate::models::{FoodPacket, IdeaRequest, OrderKind, OrderRequest};
use crate::packer::{PoolEntry, MAX_PROPORTION};
use crate::session::{PackMode, DEFAULT_DAILY_CALORIES};

/// Prompt for the stock duration in days.
pub fn prompt_duration_days() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many days should the stock last?")
        .default("30".to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| StockError::InvalidInput("Invalid number of days".to_string()))
}

/// Prompt for the number of people the stock must feed.
pub fn prompt_people_count() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("How many people?")
        .default("1".to_string())
        .interact_text()?;

    let people: u32 = input
        .parse()
        .map_err(|_| StockError::InvalidInput("Invalid number of people".to_string()))?;

    if people == 0 {
        return Err(StockError::InvalidInput(
            "At least one person is required".to_string(),
        ));
    }

    Ok(people)
}

/// Prompt for the daily caloric target per person.
pub fn prompt_daily_calories() -> Result<u32> {
    let options = vec![
        "1500 kcal (rationing - survival minimum)".to_string(),
        "2000 kcal (standard - normal activity)".to_string(),
        "2500 kcal (active - elevated workload)".to_string(),
        "3000 kcal (hard labor - maximum burn)".to_string(),
        "Custom".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("Daily ration per person")
        .items(&options)
        .default(1)
        .interact()?;

    match selection {
        0 => Ok(1500),
        1 => Ok(2000),
        2 => Ok(2500),
        3 => Ok(3000),
        _ => {
            let input: String = Input::new()
                .with_prompt("Calories per person per day")
                .default(DEFAULT_DAILY_CALORIES.to_string())
                .interact_text()?;
            input
                .parse()
                .map_err(|_| StockError::InvalidInput("Invalid calorie count".to_string()))
        }
    }
}

/// Prompt for the packing mode.
pub fn prompt_pack_mode() -> Result<PackMode> {
    let options = vec![
        "Automatic - fill containers from a weighted product pool".to_string(),
        "Manual - assemble containers by hand".to_string(),
    ];

    let selection = Select::new()
        .with_prompt("Packing mode")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        PackMode::Auto
    } else {
        PackMode::Manual
    })
}

/// Prompt for a container type; returns its catalog id.
pub fn prompt_container_type(catalog: &Catalog) -> Result<String> {
    let options: Vec<String> = catalog
        .containers()
        .iter()
        .map(|t| format!("{} - {} ({} RUB)", t.name, t.description, t.price))
        .collect();

    let selection = Select::new()
        .with_prompt("Choose a container type")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(catalog.containers()[selection].id.clone())
}

/// Resolve a typed product name to a catalog packet id, with fuzzy matching.
///
/// Tries an exact case-insensitive match on name or id first, then offers
/// jaro-winkler candidates above 0.7. Returns None when nothing matched or
/// the user rejected all candidates.
pub fn match_packet(catalog: &Catalog, input: &str) -> Result<Option<String>> {
    let needle = input.to_lowercase();

    let exact = catalog
        .packets()
        .iter()
        .find(|p| p.name.to_lowercase() == needle || p.id == needle);
    if let Some(packet) = exact {
        return Ok(Some(packet.id.clone()));
    }

    let mut candidates: Vec<(&FoodPacket, f64)> = catalog
        .packets()
        .iter()
        .map(|p| (p, jaro_winkler(&p.name.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching product found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let packet = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", packet.name))
            .default(true)
            .interact()?;
        return Ok(if confirm { Some(packet.id.clone()) } else { None });
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(p, _)| p.name.clone())
        .collect();

    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(candidates[selection].0.id.clone()))
    } else {
        Ok(None)
    }
}

/// Prompt for a single product name and resolve it against the catalog.
pub fn prompt_packet(catalog: &Catalog) -> Result<Option<String>> {
    let input: String = Input::new().with_prompt("Product name").interact_text()?;
    match_packet(catalog, input.trim())
}

/// Interactively build the auto-pack pool.
pub fn prompt_pool(catalog: &Catalog) -> Result<Vec<PoolEntry>> {
    let mut pool: Vec<PoolEntry> = Vec::new();

    println!("Build the product pool. Proportions set each product's relative share.");
    loop {
        let input: String = Input::new()
            .with_prompt("Add a product (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(packet_id) = match_packet(catalog, input)? else {
            continue;
        };

        let name = catalog.packet(&packet_id).name.clone();
        if pool.iter().any(|e| e.packet_id == packet_id) {
            println!("{} is already in the pool", name);
            continue;
        }

        let proportion = prompt_proportion(&name)?;
        println!("Added: {} (proportion {})", name, proportion);
        pool.push(PoolEntry::new(&packet_id, proportion));
    }

    Ok(pool)
}

/// Prompt for a pool proportion in 0..=10.
pub fn prompt_proportion(packet_name: &str) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!(
            "Proportion for '{}' (0-{})",
            packet_name, MAX_PROPORTION
        ))
        .default(MAX_PROPORTION.to_string())
        .interact_text()?;

    let proportion: u32 = input
        .parse()
        .map_err(|_| StockError::InvalidInput("Invalid proportion".to_string()))?;

    if proportion > MAX_PROPORTION {
        return Err(StockError::InvalidInput(format!(
            "Proportion must be at most {}",
            MAX_PROPORTION
        )));
    }

    Ok(proportion)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Select one option from a list; returns the chosen index.
pub fn prompt_select(prompt: &str, options: &[String]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?)
}

/// Collect the order / consultation contact form.
pub fn prompt_order_form(kind: OrderKind) -> Result<OrderRequest> {
    let name: String = Input::new().with_prompt("Your name").interact_text()?;
    let phone: String = Input::new().with_prompt("Phone").interact_text()?;
    let email: String = Input::new()
        .with_prompt("Email (optional)")
        .allow_empty(true)
        .interact_text()?;

    if name.trim().is_empty() || phone.trim().is_empty() {
        return Err(StockError::InvalidInput(
            "Name and phone are required".to_string(),
        ));
    }

    let email = match email.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    };

    Ok(OrderRequest::new(kind, name, phone, email))
}

/// Collect the "suggest an idea" form.
pub fn prompt_idea_form() -> Result<IdeaRequest> {
    let idea: String = Input::new()
        .with_prompt("Your idea or comment")
        .interact_text()?;

    if idea.trim().is_empty() {
        return Err(StockError::InvalidInput("An idea is required".to_string()));
    }

    let contact: String = Input::new()
        .with_prompt("Contact for follow-up (optional)")
        .allow_empty(true)
        .interact_text()?;

    let contact = match contact.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    };

    Ok(IdeaRequest::new(idea, contact))
}
