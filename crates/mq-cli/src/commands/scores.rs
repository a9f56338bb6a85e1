use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use mq_store::{SCORES_FILE, ScoreStore};

pub fn run(data_dir: &Path, clear: bool) -> Result<(), String> {
    let store = ScoreStore::new(data_dir.join(SCORES_FILE));

    if clear {
        let board = mq_core::Leaderboard::new();
        store.save(&board).map_err(|e| e.to_string())?;
        println!("  Leaderboard cleared.");
        return Ok(());
    }

    let board = store.load().map_err(|e| e.to_string())?;
    if board.is_empty() {
        println!("  No scores yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Player", "Prize"]);
    for (i, entry) in board.entries().iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            entry.name.clone(),
            entry.prize.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
