//! Roster example: a small fellowship managed through `PlayerService`
//!
//! This example demonstrates:
//! - Creating players (validation, `banned` default, derived level)
//! - Listing with filters, ordering and paging parsed from query parameters
//! - Partial updates, including a rejected one that changes nothing
//! - Deleting by a path identifier
//!
//! Run with `RUST_LOG=zzroster=debug` to see the service's log output.

use chrono::{TimeZone, Utc};
use tracing_subscriber::EnvFilter;
use zzroster::*;

fn print_players(label: &str, players: &[PlayerRecord]) {
    println!("\n{label}:");
    for p in players {
        println!(
            "  #{:<2} {:<10} {:<8} lvl {:<3} exp {:<8} next {:<6} banned={}",
            p.id.get(),
            p.name,
            format!("{:?}", p.race),
            p.level,
            p.experience,
            p.until_next_level,
            p.banned
        );
    }
}

fn main() -> Result<(), RosterError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let service = PlayerService::new(InMemoryPlayerStore::new());

    // ========================================================================
    // Creation
    // ========================================================================
    let fellowship = [
        ("Aragorn", "King of Gondor", Race::Human, Profession::Paladin, 12_000),
        ("Legolas", "Prince of Mirkwood", Race::Elf, Profession::Rogue, 50_000),
        ("Gimli", "Son of Gloin", Race::Dwarf, Profession::Warrior, 700),
        ("Frodo", "Ringbearer", Race::Hobbit, Profession::Rogue, 100),
        ("Samwise", "Gardener", Race::Hobbit, Profession::Cleric, 100),
    ];
    for (name, title, race, profession, experience) in fellowship {
        service.create(NewPlayer {
            name: Some(name.into()),
            title: Some(title.into()),
            race: Some(race),
            profession: Some(profession),
            birthday: Some(Utc.with_ymd_and_hms(2018, 9, 22, 0, 0, 0).unwrap()),
            banned: None,
            experience: Some(experience),
        })?;
    }

    match service.create(NewPlayer {
        name: Some("Gollum".into()),
        ..NewPlayer::default()
    }) {
        Ok(_) => println!("Unexpectedly created Gollum"),
        Err(e) => println!("Rejected creation ({}): {}", e.status_code(), e),
    }

    // ========================================================================
    // Listing
    // ========================================================================
    print_players("First page (default order and size)", &service.list(&ListQuery::default())?);

    let query = ListQuery::from_params([("race", "HOBBIT"), ("order", "NAME")])?;
    print_players("Hobbits by name", &service.list(&query)?);
    println!("Hobbit count: {}", service.count(&query.criteria)?);

    let query = ListQuery::from_params([("minLevel", "3"), ("order", "LEVEL"), ("pageSize", "10")])?;
    print_players("Level 3 and above", &service.list(&query)?);

    // ========================================================================
    // Updates
    // ========================================================================
    let frodo = params::parse_player_id("4")?;
    let patch: PlayerPatch = serde_json::from_str(r#"{"experience": 1000, "title": "Elf-friend"}"#)
        .map_err(|e| RosterError::malformed(e.to_string()))?;
    let updated = service.update(frodo, &patch)?;
    print_players("Frodo after the quest", std::slice::from_ref(&updated));

    let bad = PlayerPatch {
        title: Some("Lord of the Shire".into()),
        experience: Some(-1),
        ..PlayerPatch::default()
    };
    if let Err(e) = service.update(frodo, &bad) {
        println!("\nRejected update ({}): {}", e.status_code(), e);
        println!("Title is still: {}", service.get(frodo)?.title);
    }

    // ========================================================================
    // Deletion
    // ========================================================================
    let samwise = params::parse_player_id("5")?;
    service.delete(samwise)?;
    let status = service.get(samwise).err().map_or(200, |e| e.status_code());
    println!("\nDeleted #{samwise}; lookup now answers {status}");

    match params::parse_player_id("2.5") {
        Ok(id) => println!("Parsed {id}"),
        Err(e) => println!("Rejected id ({}): {}", e.status_code(), e),
    }

    Ok(())
}
