use clap::Parser;

use survival_stock_rs::catalog::Catalog;
use survival_stock_rs::cli::{parse_pool, Cli, Command};
use survival_stock_rs::error::{Result, StockError};
use survival_stock_rs::interface::{
    display_catalog, display_containers, display_summary, format_duration,
    prompt_container_type, prompt_daily_calories, prompt_duration_days, prompt_idea_form,
    prompt_order_form, prompt_pack_mode, prompt_packet, prompt_people_count, prompt_pool,
    prompt_select, prompt_yes_no,
};
use survival_stock_rs::models::OrderKind;
use survival_stock_rs::session::{ContainerGroup, PackMode, PlanSession};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin(),
    };

    match cli.command.unwrap_or_default() {
        Command::Plan => cmd_plan(&catalog),
        Command::Auto {
            days,
            people,
            daily_calories,
            container,
            pool,
            mix,
        } => cmd_auto(&catalog, days, people, daily_calories, &container, &pool, mix),
        Command::Catalog => {
            display_catalog(&catalog);
            Ok(())
        }
    }
}

/// Interactive planning session.
fn cmd_plan(catalog: &Catalog) -> Result<()> {
    let mut session = PlanSession::new(catalog);

    session.set_duration_days(prompt_duration_days()?);
    session.set_people_count(prompt_people_count()?);
    session.set_daily_calories(prompt_daily_calories()?);

    println!();
    println!(
        "Target: {} kcal to cover {} for {} people",
        session.target_calories(),
        format_duration(u64::from(session.duration_days())),
        session.people_count()
    );
    println!();

    let mode = prompt_pack_mode()?;
    session.set_mode(mode);

    if mode == PackMode::Auto {
        session.set_auto_container(&prompt_container_type(catalog)?);

        let pool = prompt_pool(catalog)?;
        if pool.is_empty() {
            println!("The pool is empty - nothing to pack.");
            return Ok(());
        }
        for entry in &pool {
            session.set_pool_entry(&entry.packet_id, entry.proportion);
        }

        session.set_mix(prompt_yes_no(
            "Interleave packet types across containers?",
            true,
        )?);
    }

    edit_loop(&mut session)?;

    display_summary(&session.summary());

    let follow_up = vec![
        "Place an order".to_string(),
        "Request a consultation".to_string(),
        "No, finish".to_string(),
    ];
    let kind = match prompt_select("Anything else?", &follow_up)? {
        0 => Some(OrderKind::Order),
        1 => Some(OrderKind::Consultation),
        _ => None,
    };
    if let Some(kind) = kind {
        let request = prompt_order_form(kind)?;
        // Fire-and-forget: there is no backend, only a confirmation.
        println!(
            "Request received. We will contact {} at {} shortly.",
            request.name, request.phone
        );
    }

    if prompt_yes_no("Suggest an improvement?", false)? {
        prompt_idea_form()?;
        println!("Thanks for the idea!");
    }

    Ok(())
}

/// Interactive edit loop over the active container list.
fn edit_loop(session: &mut PlanSession) -> Result<()> {
    loop {
        println!();
        let groups = session.grouped_containers();
        println!(
            "Current warehouse ({} containers):",
            session.active_containers().len()
        );
        display_containers(session.catalog(), &groups);

        let summary = session.summary();
        println!(
            "Packed {} of {} kcal ({:.0}%)",
            summary.calories_packed, summary.calories_needed, summary.progress_percent
        );
        println!();

        let mut options: Vec<String> = Vec::new();
        match session.mode() {
            PackMode::Auto => {
                options.push("Add a packet to a container".to_string());
                options.push("Remove a packet from a container".to_string());
                options.push("Remove a container group".to_string());
                if session.is_overridden() {
                    options.push("Reset to the computed result".to_string());
                }
            }
            PackMode::Manual => {
                options.push("Add a container".to_string());
                options.push("Add a product to the first available container".to_string());
                options.push("Add a packet to a container".to_string());
                options.push("Remove a packet from a container".to_string());
                options.push("Remove a container group".to_string());
                options.push("Clear all".to_string());
            }
        }
        options.push("Finish".to_string());

        let choice = &options[prompt_select("Action", &options)?];
        match choice.as_str() {
            "Add a container" => {
                let type_id = prompt_container_type(session.catalog())?;
                session.add_container(&type_id);
            }
            "Add a product to the first available container" => {
                if let Some(packet_id) = prompt_packet(session.catalog())? {
                    session.add_packet_to_first_available(&packet_id);
                }
            }
            "Add a packet to a container" => action_add_packet(session)?,
            "Remove a packet from a container" => action_remove_packet(session)?,
            "Remove a container group" => {
                if let Some(group) = select_group(session, &groups)? {
                    let removed = session.remove_containers(&group.member_ids);
                    println!("Removed {} container(s).", removed);
                }
            }
            "Reset to the computed result" => {
                session.reset_auto_override();
                println!("Reverted to the computed container list.");
            }
            "Clear all" => session.clear_containers(),
            _ => break,
        }
    }
    Ok(())
}

fn action_add_packet(session: &mut PlanSession) -> Result<()> {
    let groups = session.grouped_containers();
    let Some(group) = select_group(session, &groups)? else {
        return Ok(());
    };
    let Some(packet_id) = prompt_packet(session.catalog())? else {
        return Ok(());
    };

    if session.add_packet_if_fits(group.container.id, &packet_id) {
        println!("Added {}.", session.catalog().packet(&packet_id).name);
    } else {
        println!("It does not fit - the container is full.");
    }
    Ok(())
}

fn action_remove_packet(session: &mut PlanSession) -> Result<()> {
    let groups = session.grouped_containers();
    let Some(group) = select_group(session, &groups)? else {
        return Ok(());
    };

    let mut packet_ids: Vec<String> = group.container.packet_ids.clone();
    packet_ids.sort();
    packet_ids.dedup();
    if packet_ids.is_empty() {
        println!("The container is empty.");
        return Ok(());
    }

    let options: Vec<String> = packet_ids
        .iter()
        .map(|id| session.catalog().packet(id).name.clone())
        .collect();
    let selection = prompt_select("Remove which product?", &options)?;

    session.remove_packet(group.container.id, &packet_ids[selection]);
    Ok(())
}

/// Pick one display group from the active list, if any exist.
fn select_group(
    session: &PlanSession,
    groups: &[ContainerGroup],
) -> Result<Option<ContainerGroup>> {
    if groups.is_empty() {
        println!("No containers yet.");
        return Ok(None);
    }

    let options: Vec<String> = groups
        .iter()
        .map(|group| {
            let container_type = session
                .catalog()
                .container_type(&group.container.container_type_id);
            format!(
                "{} - {} packet(s) x{}",
                container_type.name,
                group.container.packet_ids.len(),
                group.count
            )
        })
        .collect();

    let selection = prompt_select("Which container?", &options)?;
    Ok(Some(groups[selection].clone()))
}

/// One-shot automatic packing run.
fn cmd_auto(
    catalog: &Catalog,
    days: u32,
    people: u32,
    daily_calories: u32,
    container: &str,
    pool_args: &[String],
    mix: bool,
) -> Result<()> {
    let container_type = catalog
        .get_container_type(container)
        .ok_or_else(|| StockError::UnknownContainer(container.to_string()))?;
    let pool = parse_pool(catalog, pool_args)?;

    let mut session = PlanSession::new(catalog);
    session.set_duration_days(days);
    session.set_people_count(people);
    session.set_daily_calories(daily_calories);
    session.set_auto_container(&container_type.id);
    session.set_mix(mix);
    for entry in &pool {
        session.set_pool_entry(&entry.packet_id, entry.proportion);
    }

    println!(
        "Packing {} kcal into '{}' containers...",
        session.target_calories(),
        container_type.name
    );
    println!();

    display_containers(catalog, &session.grouped_containers());
    display_summary(&session.summary());

    Ok(())
}
